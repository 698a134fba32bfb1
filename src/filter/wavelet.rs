//! Wavelet transforms.

use libc::{c_double, c_int};

use super::{data_len, DataFilter};
use crate::constants::{WaveletExtensionType, WaveletType};
use crate::data::matrix::{to_c_int, used_len};
use crate::error::{check, BrainFlowError, Result};
use crate::ffi::types::wavelet_output_capacity;

/// Output of a discrete wavelet transform.
///
/// `coefficients` holds the approximation followed by the detail
/// coefficients of each level; `decomposition_lengths` gives the length of
/// each of those `decomposition_level + 1` blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletTransform {
    pub coefficients: Vec<f64>,
    pub decomposition_lengths: Vec<usize>,
    pub decomposition_level: usize,
    pub wavelet: WaveletType,
    pub extension: WaveletExtensionType,
    pub original_data_len: usize,
}

impl DataFilter {
    pub fn perform_wavelet_transform(
        &self,
        data: &[f64],
        wavelet: WaveletType,
        decomposition_level: usize,
        extension: WaveletExtensionType,
    ) -> Result<WaveletTransform> {
        let len = data_len(data)?;
        let level = to_c_int(decomposition_level, "decomposition_level")?;
        let capacity = wavelet_output_capacity(data.len(), decomposition_level)
            .filter(|&capacity| to_c_int(capacity, "wavelet output").is_ok())
            .ok_or_else(|| {
                BrainFlowError::invalid_argument(format!(
                    "decomposition level {decomposition_level} is too large for {} samples",
                    data.len()
                ))
            })?;
        let mut coefficients = vec![0.0; capacity];
        // decomposition_level fits a C int, so this cannot overflow
        let mut lengths = vec![0 as c_int; decomposition_level + 1];
        // SAFETY: input is only read; output buffers are sized for the
        // longest supported wavelet filter.
        let code = unsafe {
            (self.api().perform_wavelet_transform)(
                data.as_ptr() as *mut c_double,
                len,
                wavelet as c_int,
                level,
                extension as c_int,
                coefficients.as_mut_ptr(),
                lengths.as_mut_ptr(),
            )
        };
        check(code, "perform_wavelet_transform")?;

        let decomposition_lengths: Vec<usize> = lengths
            .iter()
            .map(|&l| used_len(l, coefficients.len()))
            .collect();
        let total: usize = decomposition_lengths.iter().sum();
        coefficients.truncate(total);

        Ok(WaveletTransform {
            coefficients,
            decomposition_lengths,
            decomposition_level,
            wavelet,
            extension,
            original_data_len: data.len(),
        })
    }

    /// Reconstruct the signal a [`WaveletTransform`] was computed from.
    pub fn perform_inverse_wavelet_transform(
        &self,
        transform: &WaveletTransform,
    ) -> Result<Vec<f64>> {
        let level = to_c_int(transform.decomposition_level, "decomposition_level")?;
        let original_len = to_c_int(transform.original_data_len, "original_data_len")?;
        if transform.decomposition_lengths.len() != transform.decomposition_level + 1 {
            return Err(BrainFlowError::invalid_argument(format!(
                "expected {} decomposition lengths, got {}",
                transform.decomposition_level + 1,
                transform.decomposition_lengths.len()
            )));
        }
        let mut lengths = transform
            .decomposition_lengths
            .iter()
            .map(|&l| to_c_int(l, "decomposition length"))
            .collect::<Result<Vec<c_int>>>()?;
        let total: usize = transform.decomposition_lengths.iter().sum();
        if total > transform.coefficients.len() {
            return Err(BrainFlowError::invalid_argument(format!(
                "decomposition lengths cover {total} coefficients, only {} given",
                transform.coefficients.len()
            )));
        }

        let mut coefficients = transform.coefficients.clone();
        let mut output = vec![0.0; transform.original_data_len];
        // SAFETY: buffer sizes were validated above.
        let code = unsafe {
            (self.api().perform_inverse_wavelet_transform)(
                coefficients.as_mut_ptr(),
                original_len,
                transform.wavelet as c_int,
                level,
                transform.extension as c_int,
                lengths.as_mut_ptr(),
                output.as_mut_ptr(),
            )
        };
        check(code, "perform_inverse_wavelet_transform")?;
        Ok(output)
    }

    /// Reconstruct the signal from the detail coefficients of one level.
    pub fn restore_data_from_wavelet_detailed_coeffs(
        &self,
        data: &[f64],
        wavelet: WaveletType,
        decomposition_level: usize,
        level_to_restore: usize,
    ) -> Result<Vec<f64>> {
        let len = data_len(data)?;
        let mut output = vec![0.0; data.len()];
        // SAFETY: input is only read; output has the input length.
        let code = unsafe {
            (self.api().restore_data_from_wavelet_detailed_coeffs)(
                data.as_ptr() as *mut c_double,
                len,
                wavelet as c_int,
                to_c_int(decomposition_level, "decomposition_level")?,
                to_c_int(level_to_restore, "level_to_restore")?,
                output.as_mut_ptr(),
            )
        };
        check(code, "restore_data_from_wavelet_detailed_coeffs")?;
        Ok(output)
    }
}
