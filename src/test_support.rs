//! Helpers for stub native functions used in unit tests.

use libc::{c_char, c_int};

/// Write `values` to `dst` and their count to `len`.
///
/// # Safety
/// `dst` must have room for `values.len()` elements; `len` must be valid.
pub unsafe fn write_slice<T: Copy>(dst: *mut T, len: *mut c_int, values: &[T]) {
    std::ptr::copy_nonoverlapping(values.as_ptr(), dst, values.len());
    if !len.is_null() {
        *len = values.len() as c_int;
    }
}

/// Write `text` as a C string to `dst` and its byte length to `len`.
///
/// # Safety
/// `dst` must have room for `text.len() + 1` bytes; `len` must be valid.
pub unsafe fn write_str(dst: *mut c_char, len: *mut c_int, text: &str) {
    for (i, byte) in text.bytes().enumerate() {
        *dst.add(i) = byte as c_char;
    }
    *dst.add(text.len()) = 0;
    *len = text.len() as c_int;
}

/// Read a NUL-terminated string passed to a stub.
///
/// # Safety
/// `ptr` must point to a valid C string.
pub unsafe fn read_str(ptr: *const c_char) -> String {
    std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Initialise `env_logger` once for the test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
