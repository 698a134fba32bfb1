//! Dynamic loading of the native libraries into symbol tables.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config;
use crate::error::{BrainFlowError, Result};
use crate::ffi::platform::NativeLibrary;

/// A table of function pointers resolved from one native library.
pub trait NativeApi: Sized + Send + Sync + 'static {
    const LIBRARY: NativeLibrary;

    /// Open the library at `path` and resolve every symbol.
    fn load(path: &Path) -> Result<Self>;
}

/// Try `candidates` in order, returning the first table that loads.
pub fn load_first<T: NativeApi>(candidates: &[PathBuf]) -> Result<T> {
    let mut last_error = None;
    for path in candidates {
        log::debug!("trying {} at {}", T::LIBRARY.base_name(), path.display());
        match T::load(path) {
            Ok(api) => {
                log::info!("loaded {} from {}", T::LIBRARY.base_name(), path.display());
                return Ok(api);
            }
            Err(err) => {
                log::debug!("{}", err);
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| {
        BrainFlowError::native(
            crate::constants::BrainFlowExitCode::GeneralError as i32,
            format!("no candidate paths for {}", T::LIBRARY.base_name()),
        )
    }))
}

/// Process-wide, lazily loaded symbol table.
pub struct LibraryCell<T> {
    api: Mutex<Option<Arc<T>>>,
}

impl<T: NativeApi> LibraryCell<T> {
    pub const fn new() -> Self {
        Self {
            api: Mutex::new(None),
        }
    }

    /// Loaded table, loading it from the active configuration on first use.
    pub fn get(&self) -> Result<Arc<T>> {
        let mut slot = self.api.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(api) = slot.as_ref() {
            return Ok(Arc::clone(api));
        }
        let candidates = config::active().candidates(T::LIBRARY)?;
        let api = Arc::new(load_first::<T>(&candidates)?);
        *slot = Some(Arc::clone(&api));
        Ok(api)
    }

    /// Replace the shared table, returning the previous one.
    pub fn install(&self, api: Arc<T>) -> Option<Arc<T>> {
        self.api
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(api)
    }

    /// Load the library from an explicit path and make it the shared table.
    pub fn load_from(&self, path: &Path) -> Result<Arc<T>> {
        let api = Arc::new(T::load(path)?);
        log::info!("loaded {} from {}", T::LIBRARY.base_name(), path.display());
        self.install(Arc::clone(&api));
        Ok(api)
    }

    pub fn is_loaded(&self) -> bool {
        self.api
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<T: NativeApi> Default for LibraryCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Declare the C ABI of a native library once.
///
/// Produces a struct with one `unsafe extern "C" fn` field per function, a
/// `load` constructor that resolves each symbol by its name, and a
/// [`NativeApi`] impl. Every function returns the native exit code.
macro_rules! native_api {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($library:path) {
            $( fn $func:ident( $( $arg:ident : $ty:ty ),* $(,)? ); )+
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $( pub $func: unsafe extern "C" fn($($ty),*) -> libc::c_int, )+
            _library: Option<libloading::Library>,
        }

        impl $name {
            /// Open the library at `path` and resolve every symbol.
            pub fn load(path: &std::path::Path) -> $crate::error::Result<Self> {
                let load_error = |source| $crate::error::BrainFlowError::LibraryLoad {
                    library: $library.base_name(),
                    path: path.to_path_buf(),
                    source,
                };
                // SAFETY: the native libraries run no unsound initialisers on load.
                let library = unsafe { libloading::Library::new(path) }.map_err(load_error)?;
                $(
                    // SAFETY: the field type matches the exported C signature.
                    let $func = unsafe {
                        *library
                            .get::<unsafe extern "C" fn($($ty),*) -> libc::c_int>(
                                concat!(stringify!($func), "\0").as_bytes(),
                            )
                            .map_err(load_error)?
                    };
                )+
                Ok(Self {
                    $( $func, )+
                    _library: Some(library),
                })
            }

            /// Table whose every function fails with `GENERAL_ERROR`.
            #[cfg(test)]
            pub(crate) fn unavailable() -> Self {
                Self {
                    $(
                        $func: {
                            unsafe extern "C" fn stub($(_: $ty),*) -> libc::c_int {
                                $crate::constants::BrainFlowExitCode::GeneralError as libc::c_int
                            }
                            stub
                        },
                    )+
                    _library: None,
                }
            }
        }

        impl $crate::ffi::loader::NativeApi for $name {
            const LIBRARY: $crate::ffi::platform::NativeLibrary = $library;

            fn load(path: &std::path::Path) -> $crate::error::Result<Self> {
                $name::load(path)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("library", &$library.base_name())
                    .field("loaded", &self._library.is_some())
                    .finish()
            }
        }
    };
}

pub(crate) use native_api;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::data_handler::DataHandlerApi;

    #[test]
    fn test_missing_library_reports_path() {
        let path = Path::new("/nonexistent/brainflow/libDataHandler.so");
        let err = DataHandlerApi::load(path).unwrap_err();

        match err {
            BrainFlowError::LibraryLoad { library, path: failed, .. } => {
                assert_eq!(library, "DataHandler");
                assert_eq!(failed, path);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_load_first_returns_last_error() {
        let candidates = vec![
            PathBuf::from("/nonexistent/a/libDataHandler.so"),
            PathBuf::from("/nonexistent/b/libDataHandler.so"),
        ];
        let err = load_first::<DataHandlerApi>(&candidates).unwrap_err();

        match err {
            BrainFlowError::LibraryLoad { path, .. } => assert_eq!(path, candidates[1]),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_load_first_without_candidates() {
        let err = load_first::<DataHandlerApi>(&[]).unwrap_err();
        assert_eq!(err.exit_code(), 17);
    }

    #[test]
    fn test_cell_install_and_replace() {
        let cell: LibraryCell<DataHandlerApi> = LibraryCell::new();
        assert!(!cell.is_loaded());

        let first = Arc::new(DataHandlerApi::unavailable());
        assert!(cell.install(Arc::clone(&first)).is_none());
        assert!(cell.is_loaded());

        let got = cell.get().unwrap();
        assert!(Arc::ptr_eq(&got, &first));

        let previous = cell.install(Arc::new(DataHandlerApi::unavailable())).unwrap();
        assert!(Arc::ptr_eq(&previous, &first));
    }

    #[test]
    fn test_unavailable_table_fails_every_call() {
        let api = DataHandlerApi::unavailable();
        let mut out = 0;
        let code = unsafe { (api.get_nearest_power_of_two)(100, &mut out) };
        assert_eq!(code, 17);
    }
}
