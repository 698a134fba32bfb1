//! The MLModule library handle.

use std::ffi::CString;
use std::path::Path;
use std::sync::Arc;

use libc::{c_char, c_int};

use crate::constants::LogLevel;
use crate::data::matrix::read_c_string;
use crate::error::{check, Result};
use crate::ffi::ml_module::{MlModuleApi, ML_MODULE};
use crate::ffi::types::MAX_VERSION_CHARS;
use crate::logger::NativeLogger;

/// Handle to the MLModule library.
#[derive(Debug, Clone)]
pub struct MlModule {
    api: Arc<MlModuleApi>,
}

impl MlModule {
    /// Shared handle, loading the library on first use.
    pub fn get() -> Result<Self> {
        Ok(Self::from_api(ML_MODULE.get()?))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_api(ML_MODULE.load_from(path.as_ref())?))
    }

    pub fn from_api(api: Arc<MlModuleApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &MlModuleApi {
        &self.api
    }

    /// Release every prepared classifier.
    pub fn release_all(&self) -> Result<()> {
        // SAFETY: no arguments.
        let code = unsafe { (self.api.release_all)() };
        check(code, "release_all")
    }

    pub fn version(&self) -> Result<String> {
        let mut buf = vec![0 as c_char; MAX_VERSION_CHARS];
        let mut len: c_int = 0;
        // SAFETY: max_len matches the buffer size.
        let code = unsafe {
            (self.api.get_version_ml_module)(buf.as_mut_ptr(), &mut len, MAX_VERSION_CHARS as c_int)
        };
        check(code, "get_version_ml_module")?;
        read_c_string(&buf, len)
    }

    pub fn enable_ml_logger(&self) -> Result<()> {
        self.enable_logger()
    }

    pub fn disable_ml_logger(&self) -> Result<()> {
        self.disable_logger()
    }

    pub fn enable_dev_ml_logger(&self) -> Result<()> {
        self.enable_dev_logger()
    }
}

impl NativeLogger for MlModule {
    fn set_log_level(&self, level: LogLevel) -> Result<()> {
        // SAFETY: plain integer argument.
        let code = unsafe { (self.api.set_log_level_ml_module)(level as c_int) };
        check(code, "set_log_level_ml_module")
    }

    fn set_log_file(&self, path: &str) -> Result<()> {
        let path = CString::new(path)?;
        // SAFETY: `path` outlives the call.
        let code = unsafe { (self.api.set_log_file_ml_module)(path.as_ptr()) };
        check(code, "set_log_file_ml_module")
    }

    fn log_message(&self, level: LogLevel, message: &str) -> Result<()> {
        let message = CString::new(message)?;
        // SAFETY: `message` outlives the call.
        let code = unsafe { (self.api.log_message_ml_module)(level as c_int, message.as_ptr()) };
        check(code, "log_message_ml_module")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_support::{read_str, write_str};
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Module over a table whose functions all fail, with `setup` applied.
    pub(crate) fn module_with(setup: impl FnOnce(&mut MlModuleApi)) -> MlModule {
        crate::test_support::init_logging();
        let mut api = MlModuleApi::unavailable();
        setup(&mut api);
        MlModule::from_api(Arc::new(api))
    }

    static RELEASED: AtomicUsize = AtomicUsize::new(0);
    static LEVEL: AtomicI32 = AtomicI32::new(-1);
    static MESSAGES: Mutex<Vec<(i32, String)>> = Mutex::new(Vec::new());

    unsafe extern "C" fn release_all() -> c_int {
        RELEASED.fetch_add(1, Ordering::SeqCst);
        0
    }

    unsafe extern "C" fn version(out: *mut c_char, len: *mut c_int, _: c_int) -> c_int {
        write_str(out, len, "5.12.1");
        0
    }

    unsafe extern "C" fn set_log_level(level: c_int) -> c_int {
        LEVEL.store(level, Ordering::SeqCst);
        0
    }

    unsafe extern "C" fn log_message(level: c_int, message: *const c_char) -> c_int {
        MESSAGES.lock().unwrap().push((level, read_str(message)));
        0
    }

    #[test]
    fn test_release_all() {
        let module = module_with(|api| api.release_all = release_all);
        module.release_all().unwrap();
        assert!(RELEASED.load(Ordering::SeqCst) >= 1);
    }

    #[test]
    fn test_version() {
        let module = module_with(|api| api.get_version_ml_module = version);
        assert_eq!(module.version().unwrap(), "5.12.1");
    }

    #[test]
    fn test_logger() {
        let module = module_with(|api| {
            api.set_log_level_ml_module = set_log_level;
            api.log_message_ml_module = log_message;
        });
        module.enable_ml_logger().unwrap();
        assert_eq!(LEVEL.load(Ordering::SeqCst), LogLevel::LevelInfo as i32);

        module.log_message(LogLevel::LevelWarn, "model file not found").unwrap();
        let messages = MESSAGES.lock().unwrap();
        let sent = (LogLevel::LevelWarn as i32, "model file not found".to_string());
        assert!(messages.contains(&sent));
    }

    #[test]
    fn test_unavailable() {
        let module = module_with(|_| {});
        assert_eq!(module.release_all().unwrap_err().exit_code(), 17);
        assert!(module.disable_ml_logger().is_err());
    }
}
