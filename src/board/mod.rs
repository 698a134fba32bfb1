//! Board acquisition: static board information and sessions.

pub mod controller;
pub mod shim;

pub use controller::BoardController;
pub use shim::{BoardShim, DEFAULT_BUFFER_SIZE};
