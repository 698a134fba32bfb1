//! FFI (Foreign Function Interface) layer over the native libraries.
//!
//! Each native library gets a symbol table declared once with
//! `native_api!` and a process-wide [`loader::LibraryCell`] holding the
//! table after it was first loaded.

pub mod board_controller;
pub mod data_handler;
pub mod loader;
pub mod ml_module;
pub mod platform;
pub mod types;

pub use board_controller::BoardControllerApi;
pub use data_handler::DataHandlerApi;
pub use loader::{LibraryCell, NativeApi};
pub use ml_module::MlModuleApi;
pub use platform::{NativeLibrary, Platform};

/// Libraries whose shared table has already been loaded.
pub fn loaded_libraries() -> Vec<NativeLibrary> {
    let loaded = [
        board_controller::BOARD_CONTROLLER.is_loaded(),
        data_handler::DATA_HANDLER.is_loaded(),
        ml_module::ML_MODULE.is_loaded(),
    ];
    NativeLibrary::ALL
        .into_iter()
        .zip(loaded)
        .filter_map(|(library, is_loaded)| is_loaded.then_some(library))
        .collect()
}
