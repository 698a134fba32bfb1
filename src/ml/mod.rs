//! Classifiers from the MLModule library.
//!
//! [`MlModule`] is the library handle; [`MlModel`] is one classifier
//! configuration prepared, queried and released through it.

pub mod model;
pub mod module;

pub use model::MlModel;
pub use module::MlModule;
