//! FFT, power spectral density and band power.

use libc::{c_double, c_int};
use num_complex::Complex64;

use super::{data_len, DataFilter};
use crate::constants::WindowOperation;
use crate::data::matrix::to_c_int;
use crate::error::{check, BrainFlowError, Result};

/// One-sided power spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct Psd {
    pub amplitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
}

/// Frequency band in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub start: f64,
    pub stop: f64,
}

impl Band {
    pub const fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }
}

impl DataFilter {
    /// Window function values of length `len`.
    pub fn get_window(&self, window: WindowOperation, len: usize) -> Result<Vec<f64>> {
        let window_len = to_c_int(len, "window_len")?;
        let mut output = vec![0.0; len];
        // SAFETY: output has `len` values.
        let code =
            unsafe { (self.api().get_window)(window as c_int, window_len, output.as_mut_ptr()) };
        check(code, "get_window")?;
        Ok(output)
    }

    /// Forward FFT of real data, returning `len / 2 + 1` complex bins.
    pub fn perform_fft(&self, data: &[f64], window: WindowOperation) -> Result<Vec<Complex64>> {
        let len = data_len(data)?;
        let bins = data.len() / 2 + 1;
        let mut re = vec![0.0; bins];
        let mut im = vec![0.0; bins];
        // SAFETY: input is only read; outputs hold len / 2 + 1 values.
        let code = unsafe {
            (self.api().perform_fft)(
                data.as_ptr() as *mut c_double,
                len,
                window as c_int,
                re.as_mut_ptr(),
                im.as_mut_ptr(),
            )
        };
        check(code, "perform_fft")?;
        Ok(re.into_iter().zip(im).map(|(re, im)| Complex64::new(re, im)).collect())
    }

    /// Inverse of [`DataFilter::perform_fft`] for a signal of
    /// `original_len` samples.
    pub fn perform_ifft(&self, data: &[Complex64], original_len: usize) -> Result<Vec<f64>> {
        let len = to_c_int(original_len, "data length")?;
        let bins = original_len / 2 + 1;
        if data.len() < bins {
            return Err(BrainFlowError::invalid_argument(format!(
                "{original_len} samples need {bins} bins, got {}",
                data.len()
            )));
        }
        let (mut re, mut im): (Vec<f64>, Vec<f64>) =
            data[..bins].iter().map(|c| (c.re, c.im)).unzip();
        let mut output = vec![0.0; original_len];
        // SAFETY: inputs hold original_len / 2 + 1 values, output original_len.
        let code = unsafe {
            (self.api().perform_ifft)(
                re.as_mut_ptr(),
                im.as_mut_ptr(),
                len,
                output.as_mut_ptr(),
            )
        };
        check(code, "perform_ifft")?;
        Ok(output)
    }

    pub fn get_nearest_power_of_two(&self, value: usize) -> Result<usize> {
        let mut output: c_int = 0;
        // SAFETY: `output` outlives the call.
        let code = unsafe {
            (self.api().get_nearest_power_of_two)(to_c_int(value, "value")?, &mut output)
        };
        check(code, "get_nearest_power_of_two")?;
        usize::try_from(output).map_err(|_| {
            BrainFlowError::invalid_argument(format!("{value} has no power of two in C int range"))
        })
    }

    pub fn get_psd(
        &self,
        data: &[f64],
        sampling_rate: usize,
        window: WindowOperation,
    ) -> Result<Psd> {
        let len = data_len(data)?;
        let bins = data.len() / 2 + 1;
        let mut amplitudes = vec![0.0; bins];
        let mut frequencies = vec![0.0; bins];
        // SAFETY: input is only read; outputs hold len / 2 + 1 values.
        let code = unsafe {
            (self.api().get_psd)(
                data.as_ptr() as *mut c_double,
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                window as c_int,
                amplitudes.as_mut_ptr(),
                frequencies.as_mut_ptr(),
            )
        };
        check(code, "get_psd")?;
        Ok(Psd {
            amplitudes,
            frequencies,
        })
    }

    /// Welch PSD with segments of `nfft` samples overlapping by `overlap`.
    pub fn get_psd_welch(
        &self,
        data: &[f64],
        nfft: usize,
        overlap: usize,
        sampling_rate: usize,
        window: WindowOperation,
    ) -> Result<Psd> {
        let len = data_len(data)?;
        let segment = to_c_int(nfft, "nfft")?;
        let bins = nfft / 2 + 1;
        let mut amplitudes = vec![0.0; bins];
        let mut frequencies = vec![0.0; bins];
        // SAFETY: input is only read; outputs hold nfft / 2 + 1 values.
        let code = unsafe {
            (self.api().get_psd_welch)(
                data.as_ptr() as *mut c_double,
                len,
                segment,
                to_c_int(overlap, "overlap")?,
                to_c_int(sampling_rate, "sampling_rate")?,
                window as c_int,
                amplitudes.as_mut_ptr(),
                frequencies.as_mut_ptr(),
            )
        };
        check(code, "get_psd_welch")?;
        Ok(Psd {
            amplitudes,
            frequencies,
        })
    }

    /// Power of `psd` inside `band`.
    pub fn get_band_power(&self, psd: &Psd, band: Band) -> Result<f64> {
        if psd.amplitudes.len() != psd.frequencies.len() {
            return Err(BrainFlowError::invalid_argument(format!(
                "psd has {} amplitudes and {} frequencies",
                psd.amplitudes.len(),
                psd.frequencies.len()
            )));
        }
        let mut output = 0.0;
        // SAFETY: both inputs have the passed length and are only read.
        let code = unsafe {
            (self.api().get_band_power)(
                psd.amplitudes.as_ptr() as *mut c_double,
                psd.frequencies.as_ptr() as *mut c_double,
                data_len(&psd.amplitudes)?,
                band.start,
                band.stop,
                &mut output,
            )
        };
        check(code, "get_band_power")?;
        Ok(output)
    }
}
