//! Filters, denoising, downsampling and simple statistics.

use libc::{c_double, c_int};

use super::{data_len, DataFilter};
use crate::constants::{
    AggOperation, DetrendOperation, FilterType, NoiseEstimationLevel, NoiseType, ThresholdType,
    WaveletDenoisingType, WaveletExtensionType, WaveletType,
};
use crate::data::matrix::to_c_int;
use crate::error::{check, BrainFlowError, Result};

/// Default SpO2 calibration coefficients.
pub const DEFAULT_OXYGEN_COEFFS: (f64, f64, f64) = (1.5958422, -34.6596622, 112.6898759);

impl DataFilter {
    pub fn perform_lowpass(
        &self,
        data: &mut [f64],
        sampling_rate: usize,
        cutoff: f64,
        order: usize,
        filter_type: FilterType,
        ripple: f64,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_lowpass)(
                data.as_mut_ptr(),
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                cutoff,
                to_c_int(order, "order")?,
                filter_type as c_int,
                ripple,
            )
        };
        check(code, "perform_lowpass")
    }

    pub fn perform_highpass(
        &self,
        data: &mut [f64],
        sampling_rate: usize,
        cutoff: f64,
        order: usize,
        filter_type: FilterType,
        ripple: f64,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_highpass)(
                data.as_mut_ptr(),
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                cutoff,
                to_c_int(order, "order")?,
                filter_type as c_int,
                ripple,
            )
        };
        check(code, "perform_highpass")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn perform_bandpass(
        &self,
        data: &mut [f64],
        sampling_rate: usize,
        start_freq: f64,
        stop_freq: f64,
        order: usize,
        filter_type: FilterType,
        ripple: f64,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_bandpass)(
                data.as_mut_ptr(),
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                start_freq,
                stop_freq,
                to_c_int(order, "order")?,
                filter_type as c_int,
                ripple,
            )
        };
        check(code, "perform_bandpass")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn perform_bandstop(
        &self,
        data: &mut [f64],
        sampling_rate: usize,
        start_freq: f64,
        stop_freq: f64,
        order: usize,
        filter_type: FilterType,
        ripple: f64,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_bandstop)(
                data.as_mut_ptr(),
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                start_freq,
                stop_freq,
                to_c_int(order, "order")?,
                filter_type as c_int,
                ripple,
            )
        };
        check(code, "perform_bandstop")
    }

    /// Notch out mains interference.
    pub fn remove_environmental_noise(
        &self,
        data: &mut [f64],
        sampling_rate: usize,
        noise_type: NoiseType,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().remove_environmental_noise)(
                data.as_mut_ptr(),
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                noise_type as c_int,
            )
        };
        check(code, "remove_environmental_noise")
    }

    /// Smooth with a moving mean or median over `period` samples.
    pub fn perform_rolling_filter(
        &self,
        data: &mut [f64],
        period: usize,
        operation: AggOperation,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_rolling_filter)(
                data.as_mut_ptr(),
                len,
                to_c_int(period, "period")?,
                operation as c_int,
            )
        };
        check(code, "perform_rolling_filter")
    }

    pub fn detrend(&self, data: &mut [f64], operation: DetrendOperation) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe { (self.api().detrend)(data.as_mut_ptr(), len, operation as c_int) };
        check(code, "detrend")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn perform_wavelet_denoising(
        &self,
        data: &mut [f64],
        wavelet: WaveletType,
        decomposition_level: usize,
        denoising: WaveletDenoisingType,
        threshold: ThresholdType,
        extension: WaveletExtensionType,
        noise_level: NoiseEstimationLevel,
    ) -> Result<()> {
        let len = data_len(data)?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.api().perform_wavelet_denoising)(
                data.as_mut_ptr(),
                len,
                wavelet as c_int,
                to_c_int(decomposition_level, "decomposition_level")?,
                denoising as c_int,
                threshold as c_int,
                extension as c_int,
                noise_level as c_int,
            )
        };
        check(code, "perform_wavelet_denoising")
    }

    /// Aggregate every `period` samples into one. No anti-aliasing filter
    /// is applied.
    pub fn perform_downsampling(
        &self,
        data: &[f64],
        period: usize,
        operation: AggOperation,
    ) -> Result<Vec<f64>> {
        if period == 0 || data.len() < period {
            return Err(BrainFlowError::invalid_argument(format!(
                "downsampling period {period} must be in 1..={}",
                data.len()
            )));
        }
        let len = data_len(data)?;
        let mut output = vec![0.0; data.len() / period];
        // SAFETY: input is only read; output holds len / period values.
        let code = unsafe {
            (self.api().perform_downsampling)(
                data.as_ptr() as *mut c_double,
                len,
                to_c_int(period, "period")?,
                operation as c_int,
                output.as_mut_ptr(),
            )
        };
        check(code, "perform_downsampling")?;
        Ok(output)
    }

    /// Peak signal per sample: 1 above, -1 below, 0 inside the z-score band.
    pub fn detect_peaks_z_score(
        &self,
        data: &[f64],
        lag: usize,
        threshold: f64,
        influence: f64,
    ) -> Result<Vec<f64>> {
        let len = data_len(data)?;
        let mut output = vec![0.0; data.len()];
        // SAFETY: input is only read; output has the input length.
        let code = unsafe {
            (self.api().detect_peaks_z_score)(
                data.as_ptr() as *mut c_double,
                len,
                to_c_int(lag, "lag")?,
                threshold,
                influence,
                output.as_mut_ptr(),
            )
        };
        check(code, "detect_peaks_z_score")?;
        Ok(output)
    }

    /// Standard deviation of `data[start..end]`.
    pub fn calc_stddev(&self, data: &[f64], start: usize, end: usize) -> Result<f64> {
        if start >= end || end > data.len() {
            return Err(BrainFlowError::invalid_argument(format!(
                "range {start}..{end} is invalid for {} values",
                data.len()
            )));
        }
        let mut output = 0.0;
        // SAFETY: the range was checked against the slice.
        let code = unsafe {
            (self.api().calc_stddev)(
                data.as_ptr() as *mut c_double,
                to_c_int(start, "start")?,
                to_c_int(end, "end")?,
                &mut output,
            )
        };
        check(code, "calc_stddev")?;
        Ok(output)
    }

    /// Percentage of samples close to the ADC rails for `gain`.
    pub fn get_railed_percentage(&self, data: &[f64], gain: usize) -> Result<f64> {
        let len = data_len(data)?;
        let mut output = 0.0;
        // SAFETY: input is only read.
        let code = unsafe {
            (self.api().get_railed_percentage)(
                data.as_ptr() as *mut c_double,
                len,
                to_c_int(gain, "gain")?,
                &mut output,
            )
        };
        check(code, "get_railed_percentage")?;
        Ok(output)
    }

    /// SpO2 from infrared and red PPG channels of equal length.
    pub fn get_oxygen_level(
        &self,
        ppg_ir: &[f64],
        ppg_red: &[f64],
        sampling_rate: usize,
        (coef1, coef2, coef3): (f64, f64, f64),
    ) -> Result<f64> {
        let len = ppg_len(ppg_ir, ppg_red)?;
        let mut output = 0.0;
        // SAFETY: both inputs have `len` values and are only read.
        let code = unsafe {
            (self.api().get_oxygen_level)(
                ppg_ir.as_ptr() as *mut c_double,
                ppg_red.as_ptr() as *mut c_double,
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                coef1,
                coef2,
                coef3,
                &mut output,
            )
        };
        check(code, "get_oxygen_level")?;
        Ok(output)
    }

    /// Heart rate in beats per minute from PPG channels of equal length.
    pub fn get_heart_rate(
        &self,
        ppg_ir: &[f64],
        ppg_red: &[f64],
        sampling_rate: usize,
        fft_size: usize,
    ) -> Result<f64> {
        let len = ppg_len(ppg_ir, ppg_red)?;
        let mut output = 0.0;
        // SAFETY: both inputs have `len` values and are only read.
        let code = unsafe {
            (self.api().get_heart_rate)(
                ppg_ir.as_ptr() as *mut c_double,
                ppg_red.as_ptr() as *mut c_double,
                len,
                to_c_int(sampling_rate, "sampling_rate")?,
                to_c_int(fft_size, "fft_size")?,
                &mut output,
            )
        };
        check(code, "get_heart_rate")?;
        Ok(output)
    }
}

fn ppg_len(ppg_ir: &[f64], ppg_red: &[f64]) -> Result<c_int> {
    if ppg_ir.len() != ppg_red.len() {
        return Err(BrainFlowError::invalid_argument(format!(
            "ppg_ir has {} values, ppg_red has {}",
            ppg_ir.len(),
            ppg_red.len()
        )));
    }
    data_len(ppg_ir)
}
