//! Error type shared by every binding in the crate.
//!
//! Native functions report failures as integer exit codes. Those are carried
//! verbatim in [`BrainFlowError::Native`]; everything that can go wrong on the
//! Rust side of the boundary (loading a library, serializing params, decoding
//! strings, reshaping buffers) gets its own variant and still maps back onto an
//! exit code through [`BrainFlowError::exit_code`].

use std::ffi::NulError;
use std::path::PathBuf;
use std::str::Utf8Error;

use libc::c_int;
use thiserror::Error;

use crate::constants::BrainFlowExitCode;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BrainFlowError>;

#[derive(Error, Debug)]
pub enum BrainFlowError {
    /// Non-zero exit code returned by a native call, or an argument check
    /// done before the call that maps onto `INVALID_ARGUMENTS_ERROR`.
    #[error("{context}: {} ({code})", code_name(.code))]
    Native { code: i32, context: String },

    #[error("failed to load {library} from {}: {source}", .path.display())]
    LibraryLoad {
        library: &'static str,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("no {library} library is built for {os}/{arch}")]
    UnsupportedPlatform {
        library: &'static str,
        os: String,
        arch: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("string contains an interior NUL byte: {0}")]
    Nul(#[from] NulError),

    #[error("native library returned invalid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("buffer does not fit the requested shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

fn code_name(code: &i32) -> &'static str {
    BrainFlowExitCode::try_from(*code)
        .map(BrainFlowExitCode::name)
        .unwrap_or("UNKNOWN_ERROR")
}

impl BrainFlowError {
    /// Error for a native exit code.
    pub fn native(code: i32, context: impl Into<String>) -> Self {
        BrainFlowError::Native {
            code,
            context: context.into(),
        }
    }

    /// `INVALID_ARGUMENTS_ERROR` raised before reaching the native library.
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::native(BrainFlowExitCode::InvalidArgumentsError as i32, context)
    }

    /// Raw exit code for this error.
    ///
    /// Failures that never reached the native library report
    /// `GENERAL_ERROR`, except interior NUL bytes which are an argument
    /// problem and report `INVALID_ARGUMENTS_ERROR`.
    pub fn exit_code(&self) -> i32 {
        match self {
            BrainFlowError::Native { code, .. } => *code,
            BrainFlowError::Nul(_) => BrainFlowExitCode::InvalidArgumentsError as i32,
            _ => BrainFlowExitCode::GeneralError as i32,
        }
    }

    /// Typed exit code, `None` for codes this crate does not know about.
    pub fn kind(&self) -> Option<BrainFlowExitCode> {
        BrainFlowExitCode::try_from(self.exit_code()).ok()
    }
}

/// Map a native return value onto `Ok(())` or [`BrainFlowError::Native`].
pub(crate) fn check(code: c_int, context: &str) -> Result<()> {
    if code == BrainFlowExitCode::StatusOk as c_int {
        return Ok(());
    }
    log::debug!("{} returned exit code {}", context, code);
    Err(BrainFlowError::native(code, context))
}
