//! Control over the loggers built into the native libraries.
//!
//! Each native library writes its own log to stderr or a file. These
//! loggers are independent of the `log` facade used by this crate;
//! [`NativeLogger::follow_log_level`] copies the facade's current level over.

use crate::constants::LogLevel;
use crate::error::Result;

pub trait NativeLogger {
    /// Set the native log level.
    fn set_log_level(&self, level: LogLevel) -> Result<()>;

    /// Redirect the native log from stderr to `path`.
    fn set_log_file(&self, path: &str) -> Result<()>;

    /// Write `message` through the native logger.
    fn log_message(&self, level: LogLevel, message: &str) -> Result<()>;

    /// Log at INFO and above.
    fn enable_logger(&self) -> Result<()> {
        self.set_log_level(LogLevel::LevelInfo)
    }

    fn disable_logger(&self) -> Result<()> {
        self.set_log_level(LogLevel::LevelOff)
    }

    /// Log everything, down to TRACE.
    fn enable_dev_logger(&self) -> Result<()> {
        self.set_log_level(LogLevel::LevelTrace)
    }

    /// Use the level currently set on the `log` facade.
    fn follow_log_level(&self) -> Result<()> {
        self.set_log_level(LogLevel::from(log::max_level()))
    }
}
