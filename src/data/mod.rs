//! Value objects crossing the FFI boundary and buffer helpers.

pub mod board_descr;
pub mod input_params;
pub mod matrix;
pub mod model_params;

pub use board_descr::BoardDescription;
pub use input_params::{BrainFlowInputParams, BrainFlowInputParamsBuilder};
pub use model_params::BrainFlowModelParams;
