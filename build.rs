//! Build script that records where the native BrainFlow libraries live.
//!
//! If `BRAINFLOW_LIB_DIR` is set at build time, its value is baked into the
//! crate as a fallback search directory for the runtime loader.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=BRAINFLOW_LIB_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    if let Some(dir) = env::var_os("BRAINFLOW_LIB_DIR") {
        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            println!(
                "cargo:warning=BRAINFLOW_LIB_DIR={} is not a directory, ignoring",
                dir.display()
            );
            return;
        }
        println!("cargo:rustc-env=BRAINFLOW_BUILD_LIB_DIR={}", dir.display());
    }
}
