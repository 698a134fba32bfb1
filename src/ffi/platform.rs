//! Platform-specific shared-library names.

use crate::error::{BrainFlowError, Result};

/// One of the three native libraries the crate binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeLibrary {
    BoardController,
    DataHandler,
    MlModule,
}

impl NativeLibrary {
    pub const ALL: [NativeLibrary; 3] = [
        NativeLibrary::BoardController,
        NativeLibrary::DataHandler,
        NativeLibrary::MlModule,
    ];

    /// Library name without platform prefix or extension.
    pub const fn base_name(self) -> &'static str {
        match self {
            NativeLibrary::BoardController => "BoardController",
            NativeLibrary::DataHandler => "DataHandler",
            NativeLibrary::MlModule => "MLModule",
        }
    }

    /// File name of this library on `platform`.
    ///
    /// | os                   | arch  | file name                  |
    /// |----------------------|-------|----------------------------|
    /// | windows              | x86   | `BoardController32.dll`    |
    /// | windows              | other | `BoardController.dll`      |
    /// | macos                | any   | `libBoardController.dylib` |
    /// | linux and other unix | any   | `libBoardController.so`    |
    pub fn file_name(self, platform: &Platform) -> Result<String> {
        let base = self.base_name();
        match platform.os {
            "windows" if platform.arch == "x86" => Ok(format!("{base}32.dll")),
            "windows" => Ok(format!("{base}.dll")),
            "macos" => Ok(format!("lib{base}.dylib")),
            os if is_elf_unix(os) => Ok(format!("lib{base}.so")),
            _ => Err(BrainFlowError::UnsupportedPlatform {
                library: base,
                os: platform.os.to_string(),
                arch: platform.arch.to_string(),
            }),
        }
    }
}

fn is_elf_unix(os: &str) -> bool {
    matches!(
        os,
        "linux" | "android" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" | "solaris" | "illumos"
    )
}

/// Operating system and CPU architecture, as reported by `std::env::consts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Platform {
    pub const fn new(os: &'static str, arch: &'static str) -> Self {
        Self { os, arch }
    }

    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }
}
