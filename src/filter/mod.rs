//! Signal processing through the DataHandler library.
//!
//! All algorithms run natively. [`DataFilter`] validates buffer sizes,
//! marshals slices and arrays across the boundary and reshapes the results.
//! Operations are grouped by topic:
//!
//! - [`signal`]: filters, denoising, downsampling and simple statistics
//! - [`wavelet`]: wavelet transforms
//! - [`spectrum`]: FFT, PSD and band power
//! - [`spatial`]: multi-channel methods (CSP, ICA, band powers per channel set)
//! - [`io`]: reading and writing data files

use std::ffi::CString;
use std::path::Path;
use std::sync::Arc;

use libc::{c_char, c_int};

use crate::constants::LogLevel;
use crate::data::matrix::{read_c_string, to_c_int};
use crate::error::{check, Result};
use crate::ffi::data_handler::{DataHandlerApi, DATA_HANDLER};
use crate::ffi::types::MAX_VERSION_CHARS;
use crate::logger::NativeLogger;

pub mod io;
pub mod signal;
pub mod spatial;
pub mod spectrum;
pub mod wavelet;

pub use spatial::{BandPowers, IcaResult};
pub use spectrum::{Band, Psd};
pub use wavelet::WaveletTransform;

/// Handle to the DataHandler library.
#[derive(Debug, Clone)]
pub struct DataFilter {
    api: Arc<DataHandlerApi>,
}

impl DataFilter {
    /// Shared handle, loading the library on first use.
    pub fn get() -> Result<Self> {
        Ok(Self::from_api(DATA_HANDLER.get()?))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_api(DATA_HANDLER.load_from(path.as_ref())?))
    }

    pub fn from_api(api: Arc<DataHandlerApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &DataHandlerApi {
        &self.api
    }

    pub fn version(&self) -> Result<String> {
        let mut buf = vec![0 as c_char; MAX_VERSION_CHARS];
        let mut len: c_int = 0;
        // SAFETY: max_len matches the buffer size.
        let code = unsafe {
            (self.api.get_version_data_handler)(
                buf.as_mut_ptr(),
                &mut len,
                MAX_VERSION_CHARS as c_int,
            )
        };
        check(code, "get_version_data_handler")?;
        read_c_string(&buf, len)
    }

    pub fn enable_data_logger(&self) -> Result<()> {
        self.enable_logger()
    }

    pub fn disable_data_logger(&self) -> Result<()> {
        self.disable_logger()
    }

    pub fn enable_dev_data_logger(&self) -> Result<()> {
        self.enable_dev_logger()
    }
}

impl NativeLogger for DataFilter {
    fn set_log_level(&self, level: LogLevel) -> Result<()> {
        // SAFETY: plain integer argument.
        let code = unsafe { (self.api.set_log_level_data_handler)(level as c_int) };
        check(code, "set_log_level_data_handler")
    }

    fn set_log_file(&self, path: &str) -> Result<()> {
        let path = CString::new(path)?;
        // SAFETY: `path` outlives the call.
        let code = unsafe { (self.api.set_log_file_data_handler)(path.as_ptr()) };
        check(code, "set_log_file_data_handler")
    }

    fn log_message(&self, level: LogLevel, message: &str) -> Result<()> {
        let message = CString::new(message)?;
        // SAFETY: `message` outlives the call.
        let code = unsafe { (self.api.log_message_data_handler)(level as c_int, message.as_ptr()) };
        check(code, "log_message_data_handler")
    }
}

/// Length of a data slice as a C int.
pub(crate) fn data_len(data: &[f64]) -> Result<c_int> {
    to_c_int(data.len(), "data length")
}
