//! CSV files in the layout the native library writes: one row per sample,
//! tab separated.

use std::ffi::CString;

use libc::c_int;
use ndarray::Array2;

use super::DataFilter;
use crate::data::matrix::{to_array2, to_c_int, used_len};
use crate::error::{check, Result};

impl DataFilter {
    /// Write `data` (`channels x samples`) to `path`.
    ///
    /// `mode` is an fopen mode, `"w"` to overwrite or `"a"` to append.
    pub fn write_file(&self, data: &Array2<f64>, path: &str, mode: &str) -> Result<()> {
        let (rows, cols) = data.dim();
        let data = data.as_standard_layout();
        let path = CString::new(path)?;
        let mode = CString::new(mode)?;
        // SAFETY: `data` is contiguous rows x cols and the strings outlive
        // the call.
        let code = unsafe {
            (self.api().write_file)(
                data.as_ptr(),
                to_c_int(rows, "rows")?,
                to_c_int(cols, "cols")?,
                path.as_ptr(),
                mode.as_ptr(),
            )
        };
        check(code, "write_file")
    }

    /// Read a file written by [`DataFilter::write_file`] back into
    /// `channels x samples`.
    pub fn read_file(&self, path: &str) -> Result<Array2<f64>> {
        let path = CString::new(path)?;
        let mut num_elements: c_int = 0;
        // SAFETY: `path` outlives the call.
        let code =
            unsafe { (self.api().get_num_elements_in_file)(path.as_ptr(), &mut num_elements) };
        check(code, "get_num_elements_in_file")?;

        let capacity = used_len(num_elements, usize::MAX);
        let mut buf = vec![0.0; capacity];
        let mut rows: c_int = 0;
        let mut cols: c_int = 0;
        // SAFETY: `buf` holds `num_elements` values.
        let code = unsafe {
            (self.api().read_file)(
                buf.as_mut_ptr(),
                &mut rows,
                &mut cols,
                path.as_ptr(),
                num_elements,
            )
        };
        check(code, "read_file")?;
        to_array2(buf, used_len(rows, capacity), used_len(cols, capacity))
    }
}
