//! Where to look for the native libraries.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::ffi::platform::{NativeLibrary, Platform};

/// Environment variable naming a directory that holds the native libraries.
pub const LIB_DIR_ENV: &str = "BRAINFLOW_LIB_DIR";

/// Directory baked in by the build script when `BRAINFLOW_LIB_DIR` was set
/// at compile time.
const BUILD_LIB_DIR: Option<&str> = option_env!("BRAINFLOW_BUILD_LIB_DIR");

static ACTIVE: Mutex<Option<LibraryConfig>> = Mutex::new(None);

/// Search configuration for the native libraries.
///
/// Directories are tried in this order:
///
/// 1. directories added with [`LibraryConfig::with_search_dir`]
/// 2. `$BRAINFLOW_LIB_DIR` at runtime
/// 3. `BRAINFLOW_LIB_DIR` as it was when the crate was built
/// 4. the directory of the running executable
///
/// and finally the bare file name, which leaves the lookup to the system
/// loader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryConfig {
    search_dirs: Vec<PathBuf>,
    platform: Option<Platform>,
}

impl LibraryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory searched before the defaults.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Pick file names for another platform than the current one.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Directories added explicitly.
    pub fn explicit_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Every directory searched, in order, without duplicates.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        self.search_dirs_from(env::var_os(LIB_DIR_ENV), BUILD_LIB_DIR, exe_dir)
    }

    fn search_dirs_from(
        &self,
        runtime_dir: Option<OsString>,
        build_dir: Option<&str>,
        exe_dir: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let defaults = runtime_dir
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .into_iter()
            .chain(build_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from))
            .chain(exe_dir);

        let mut dirs: Vec<PathBuf> = Vec::new();
        for dir in self.search_dirs.iter().cloned().chain(defaults) {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        dirs
    }

    /// Candidate paths for `library`: each search directory joined with the
    /// platform file name, then the bare file name.
    pub fn candidates(&self, library: NativeLibrary) -> Result<Vec<PathBuf>> {
        let file_name = library.file_name(&self.platform())?;
        Ok(candidates_in(self.search_dirs(), &file_name))
    }
}

fn candidates_in(dirs: Vec<PathBuf>, file_name: &str) -> Vec<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(file_name))
        .chain(std::iter::once(PathBuf::from(file_name)))
        .collect()
}

/// Install the process-wide configuration.
///
/// Only libraries that are loaded afterwards pick it up; a library that is
/// already loaded keeps the table it has.
pub fn configure(config: LibraryConfig) {
    for library in crate::ffi::loaded_libraries() {
        log::warn!(
            "{} is already loaded, new search configuration does not apply to it",
            library.base_name()
        );
    }
    log::debug!("library search dirs: {:?}", config.explicit_dirs());
    *ACTIVE.lock().unwrap_or_else(PoisonError::into_inner) = Some(config);
}

/// Configuration in effect, the default one if [`configure`] was never called.
pub fn active() -> LibraryConfig {
    ACTIVE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
}
