//! C ABI of the MLModule library.

use libc::{c_char, c_double, c_int};

use super::loader::{native_api, LibraryCell};
use super::platform::NativeLibrary;

native_api! {
    /// Functions exported by MLModule.
    pub struct MlModuleApi(NativeLibrary::MlModule) {
        fn prepare(json_params: *const c_char);
        fn predict(
            data: *mut c_double,
            data_len: c_int,
            output: *mut c_double,
            output_len: *mut c_int,
            json_params: *const c_char,
        );
        fn release(json_params: *const c_char);
        fn release_all();
        fn set_log_level_ml_module(log_level: c_int);
        fn set_log_file_ml_module(log_file: *const c_char);
        fn log_message_ml_module(log_level: c_int, message: *const c_char);
        fn get_version_ml_module(version: *mut c_char, len: *mut c_int, max_len: c_int);
    }
}

pub(crate) static ML_MODULE: LibraryCell<MlModuleApi> = LibraryCell::new();
