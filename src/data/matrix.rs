//! Conversions between flat native buffers and Rust containers.

use libc::{c_char, c_int};
use ndarray::{Array2, Array3};

use crate::error::{BrainFlowError, Result};

/// Reshape a flat row-major buffer into `rows x cols`.
///
/// Elements past `rows * cols` are dropped; a buffer that is too short is a
/// shape error.
pub fn to_array2(mut buf: Vec<f64>, rows: usize, cols: usize) -> Result<Array2<f64>> {
    let len = rows
        .checked_mul(cols)
        .ok_or_else(|| BrainFlowError::invalid_argument(format!("{rows} x {cols} overflows")))?;
    buf.truncate(len);
    Ok(Array2::from_shape_vec((rows, cols), buf)?)
}

/// Copy the given rows of `data`, in the given order, into one flat
/// row-major buffer.
pub fn select_rows(data: &Array2<f64>, channels: &[usize]) -> Result<Vec<f64>> {
    let (rows, cols) = data.dim();
    let mut out = Vec::with_capacity(channels.len() * cols);
    for &channel in channels {
        if channel >= rows {
            return Err(BrainFlowError::invalid_argument(format!(
                "channel {channel} is out of range for {rows} rows"
            )));
        }
        out.extend(data.row(channel).iter().copied());
    }
    Ok(out)
}

/// Flatten `epochs x channels x times` in standard (C) order.
pub fn flatten_epochs(data: &Array3<f64>) -> Vec<f64> {
    data.iter().copied().collect()
}

/// Number of valid elements reported by the native side, clamped to the
/// buffer capacity.
pub fn used_len(len: c_int, capacity: usize) -> usize {
    usize::try_from(len).unwrap_or(0).min(capacity)
}

/// Decode a string the native side wrote into `buf`, reporting `len` bytes.
///
/// Decoding stops at the first NUL byte even if `len` is larger.
pub fn read_c_string(buf: &[c_char], len: c_int) -> Result<String> {
    let bytes: Vec<u8> = buf[..used_len(len, buf.len())]
        .iter()
        .map(|&c| c as u8)
        .take_while(|&b| b != 0)
        .collect();
    Ok(std::str::from_utf8(&bytes)?.to_string())
}

/// Checked `usize -> c_int` for lengths and sizes passed to native calls.
pub fn to_c_int(value: usize, what: &str) -> Result<c_int> {
    c_int::try_from(value).map_err(|_| {
        BrainFlowError::invalid_argument(format!("{what} {value} does not fit in a C int"))
    })
}

/// Checked `rows * cols` for an out-buffer, which must also fit in a C int.
pub fn buffer_len(rows: usize, cols: usize, what: &str) -> Result<usize> {
    let len = rows.checked_mul(cols).ok_or_else(|| {
        BrainFlowError::invalid_argument(format!("{what} {rows} x {cols} overflows"))
    })?;
    to_c_int(len, what)?;
    Ok(len)
}

/// Convert native channel indices to `usize`, rejecting negative values.
pub fn to_indices(values: &[c_int]) -> Result<Vec<usize>> {
    values
        .iter()
        .map(|&v| {
            usize::try_from(v).map_err(|_| {
                BrainFlowError::native(
                    crate::constants::BrainFlowExitCode::GeneralError as i32,
                    format!("native library returned negative index {v}"),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_to_array2_row_major() {
        let arr = to_array2(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(arr, array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_to_array2_drops_tail() {
        let arr = to_array2(vec![1.0, 2.0, 3.0, 4.0, 0.0, 0.0], 2, 2).unwrap();
        assert_eq!(arr, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_to_array2_short_buffer() {
        let err = to_array2(vec![1.0, 2.0], 2, 2).unwrap_err();
        assert!(matches!(err, BrainFlowError::Shape(_)));
    }

    #[test]
    fn test_to_array2_empty() {
        let arr = to_array2(Vec::new(), 4, 0).unwrap();
        assert_eq!(arr.dim(), (4, 0));
    }

    #[test]
    fn test_select_rows() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(select_rows(&data, &[2, 0]).unwrap(), vec![5.0, 6.0, 1.0, 2.0]);
        assert!(select_rows(&data, &[3]).is_err());
    }

    #[test]
    fn test_flatten_epochs_standard_order() {
        let data = Array3::from_shape_fn((2, 2, 3), |(e, c, t)| (e * 100 + c * 10 + t) as f64);
        let flat = flatten_epochs(&data);
        assert_eq!(&flat[..4], &[0.0, 1.0, 2.0, 10.0]);
        assert_eq!(flat[6], 100.0);
        assert_eq!(flat.len(), 12);
    }

    #[test]
    fn test_flatten_epochs_non_standard_layout() {
        let data = Array3::from_shape_fn((2, 3, 2), |(e, c, t)| (e * 100 + c * 10 + t) as f64);
        let permuted = data.permuted_axes([0, 2, 1]);
        let flat = flatten_epochs(&permuted.to_owned());
        assert_eq!(&flat[..3], &[0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_read_c_string() {
        let mut buf = [0 as c_char; 16];
        for (dst, src) in buf.iter_mut().zip(b"Synthetic") {
            *dst = *src as c_char;
        }
        assert_eq!(read_c_string(&buf, 9).unwrap(), "Synthetic");
        assert_eq!(read_c_string(&buf, 5).unwrap(), "Synth");
        assert_eq!(read_c_string(&buf, 100).unwrap(), "Synthetic");
        assert_eq!(read_c_string(&buf, -1).unwrap(), "");
    }

    #[test]
    fn test_to_c_int() {
        assert_eq!(to_c_int(42, "len").unwrap(), 42);
        let err = to_c_int(usize::MAX, "len").unwrap_err();
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(buffer_len(3, 4, "buffer").unwrap(), 12);
        assert_eq!(buffer_len(usize::MAX / 2, 3, "buffer").unwrap_err().exit_code(), 13);
        assert_eq!(buffer_len(1 << 20, 1 << 20, "buffer").unwrap_err().exit_code(), 13);
    }

    #[test]
    fn test_used_len() {
        assert_eq!(used_len(3, 10), 3);
        assert_eq!(used_len(20, 10), 10);
        assert_eq!(used_len(-5, 10), 0);
    }

    #[test]
    fn test_to_indices() {
        assert_eq!(to_indices(&[1, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert!(to_indices(&[-1]).is_err());
    }
}
