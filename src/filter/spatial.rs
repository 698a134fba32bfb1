//! Methods working across several channels.

use libc::c_int;
use ndarray::{Array1, Array2, Array3};

use super::spectrum::Band;
use super::DataFilter;
use crate::data::matrix::{buffer_len, flatten_epochs, select_rows, to_array2, to_c_int};
use crate::error::{check, BrainFlowError, Result};

/// Delta, theta, alpha, beta and gamma.
pub const AVG_BANDS: [Band; 5] = [
    Band::new(2.0, 4.0),
    Band::new(4.0, 8.0),
    Band::new(8.0, 13.0),
    Band::new(13.0, 30.0),
    Band::new(30.0, 45.0),
];

/// Band powers averaged over channels, one entry per band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandPowers {
    pub avg: Vec<f64>,
    pub stddev: Vec<f64>,
}

/// Result of independent component analysis on `channels x samples` data
/// with `c` components.
#[derive(Debug, Clone, PartialEq)]
pub struct IcaResult {
    /// Unmixing matrix, `c x c`.
    pub w: Array2<f64>,
    /// Pre-whitening matrix, `c x channels`.
    pub k: Array2<f64>,
    /// Mixing matrix, `channels x c`.
    pub a: Array2<f64>,
    /// Sources, `c x samples`.
    pub s: Array2<f64>,
}

impl DataFilter {
    /// Common spatial patterns for `epochs x channels x times` data and one
    /// label per epoch.
    ///
    /// Returns the `channels x channels` filters and their eigenvalues.
    pub fn get_csp(
        &self,
        data: &Array3<f64>,
        labels: &Array1<f64>,
    ) -> Result<(Array2<f64>, Array1<f64>)> {
        let (epochs, channels, times) = data.dim();
        if labels.len() != epochs {
            return Err(BrainFlowError::invalid_argument(format!(
                "{} labels for {epochs} epochs",
                labels.len()
            )));
        }
        let (n_epochs, n_channels, n_times) = (
            to_c_int(epochs, "n_epochs")?,
            to_c_int(channels, "n_channels")?,
            to_c_int(times, "n_times")?,
        );
        let flat = flatten_epochs(data);
        let labels: Vec<f64> = labels.iter().copied().collect();

        let mut filters = vec![0.0; buffer_len(channels, channels, "csp filters")?];
        let mut eigenvalues = vec![0.0; channels];
        // SAFETY: inputs hold epochs * channels * times values and one
        // label per epoch; outputs are channels^2 and channels long.
        let code = unsafe {
            (self.api().get_csp)(
                flat.as_ptr(),
                labels.as_ptr(),
                n_epochs,
                n_channels,
                n_times,
                filters.as_mut_ptr(),
                eigenvalues.as_mut_ptr(),
            )
        };
        check(code, "get_csp")?;
        Ok((to_array2(filters, channels, channels)?, Array1::from(eigenvalues)))
    }

    /// ICA over the selected rows of `data`, or all rows when `channels` is
    /// `None`.
    pub fn perform_ica(
        &self,
        data: &Array2<f64>,
        num_components: usize,
        channels: Option<&[usize]>,
    ) -> Result<IcaResult> {
        let all: Vec<usize>;
        let channels = match channels {
            Some(channels) => channels,
            None => {
                all = (0..data.nrows()).collect();
                &all
            }
        };
        let (rows, cols, c) = (channels.len(), data.ncols(), num_components);
        let (n_rows, n_cols, n_components) = (
            to_c_int(rows, "rows")?,
            to_c_int(cols, "cols")?,
            to_c_int(c, "num_components")?,
        );
        let mut w = vec![0.0; buffer_len(c, c, "ica W")?];
        let mut k = vec![0.0; buffer_len(c, rows, "ica K")?];
        let mut a = vec![0.0; buffer_len(rows, c, "ica A")?];
        let mut s = vec![0.0; buffer_len(c, cols, "ica S")?];
        let mut raw = select_rows(data, channels)?;
        // SAFETY: `raw` is rows x cols and the outputs match the documented
        // matrix shapes.
        let code = unsafe {
            (self.api().perform_ica)(
                raw.as_mut_ptr(),
                n_rows,
                n_cols,
                n_components,
                w.as_mut_ptr(),
                k.as_mut_ptr(),
                a.as_mut_ptr(),
                s.as_mut_ptr(),
            )
        };
        check(code, "perform_ica")?;
        Ok(IcaResult {
            w: to_array2(w, c, c)?,
            k: to_array2(k, c, rows)?,
            a: to_array2(a, rows, c)?,
            s: to_array2(s, c, cols)?,
        })
    }

    /// Average and standard deviation across `channels` of the power in
    /// each band.
    pub fn get_custom_band_powers(
        &self,
        data: &Array2<f64>,
        bands: &[Band],
        channels: &[usize],
        sampling_rate: usize,
        apply_filters: bool,
    ) -> Result<BandPowers> {
        if bands.is_empty() || channels.is_empty() {
            return Err(BrainFlowError::invalid_argument("bands and channels must not be empty"));
        }
        let mut raw = select_rows(data, channels)?;
        let (mut starts, mut stops): (Vec<f64>, Vec<f64>) =
            bands.iter().map(|band| (band.start, band.stop)).unzip();

        let mut avg = vec![0.0; bands.len()];
        let mut stddev = vec![0.0; bands.len()];
        // SAFETY: `raw` is channels x cols; band arrays and outputs hold one
        // value per band.
        let code = unsafe {
            (self.api().get_custom_band_powers)(
                raw.as_mut_ptr(),
                to_c_int(channels.len(), "rows")?,
                to_c_int(data.ncols(), "cols")?,
                starts.as_mut_ptr(),
                stops.as_mut_ptr(),
                to_c_int(bands.len(), "num_bands")?,
                to_c_int(sampling_rate, "sampling_rate")?,
                c_int::from(apply_filters),
                avg.as_mut_ptr(),
                stddev.as_mut_ptr(),
            )
        };
        check(code, "get_custom_band_powers")?;
        Ok(BandPowers { avg, stddev })
    }

    /// [`DataFilter::get_custom_band_powers`] over [`AVG_BANDS`].
    pub fn get_avg_band_powers(
        &self,
        data: &Array2<f64>,
        channels: &[usize],
        sampling_rate: usize,
        apply_filters: bool,
    ) -> Result<BandPowers> {
        self.get_custom_band_powers(data, &AVG_BANDS, channels, sampling_rate, apply_filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BrainFlowExitCode;
    use crate::filter::tests::filter_with;
    use libc::c_double;
    use ndarray::array;

    unsafe extern "C" fn csp(
        data: *const c_double,
        labels: *const c_double,
        epochs: c_int,
        channels: c_int,
        times: c_int,
        filters: *mut c_double,
        eigenvalues: *mut c_double,
    ) -> c_int {
        let n = channels as usize;
        for i in 0..n * n {
            *filters.add(i) = i as f64;
        }
        for i in 0..n {
            *eigenvalues.add(i) = *labels.add(i % epochs as usize);
        }
        // last element of the input lands in the last filter slot
        *filters.add(n * n - 1) = *data.add((epochs * channels * times) as usize - 1);
        0
    }

    unsafe extern "C" fn ica(
        data: *mut c_double,
        rows: c_int,
        cols: c_int,
        c: c_int,
        w: *mut c_double,
        k: *mut c_double,
        a: *mut c_double,
        s: *mut c_double,
    ) -> c_int {
        let (rows, cols, c) = (rows as usize, cols as usize, c as usize);
        for i in 0..c * c {
            *w.add(i) = 1.0;
        }
        for i in 0..c * rows {
            *k.add(i) = 2.0;
            *a.add(i) = 3.0;
        }
        for i in 0..c * cols {
            *s.add(i) = *data.add(i % (rows * cols));
        }
        0
    }

    unsafe extern "C" fn band_powers(
        data: *mut c_double,
        rows: c_int,
        cols: c_int,
        starts: *mut c_double,
        stops: *mut c_double,
        num_bands: c_int,
        _: c_int,
        apply_filters: c_int,
        avg: *mut c_double,
        stddev: *mut c_double,
    ) -> c_int {
        if rows != 2 || cols != 3 || apply_filters != 1 {
            return BrainFlowExitCode::InvalidArgumentsError as c_int;
        }
        for i in 0..num_bands as usize {
            *avg.add(i) = *stops.add(i) - *starts.add(i);
            *stddev.add(i) = *data;
        }
        0
    }

    fn filter() -> DataFilter {
        filter_with(|api| {
            api.get_csp = csp;
            api.perform_ica = ica;
            api.get_custom_band_powers = band_powers;
        })
    }

    #[test]
    fn test_csp_shapes() {
        let data = Array3::from_shape_fn((2, 3, 4), |(e, c, t)| (e * 100 + c * 10 + t) as f64);
        let labels = array![0.0, 1.0];

        let (filters, eigenvalues) = filter().get_csp(&data, &labels).unwrap();

        assert_eq!(filters.dim(), (3, 3));
        assert_eq!(filters[[0, 1]], 1.0);
        assert_eq!(filters[[2, 2]], 123.0);
        assert_eq!(eigenvalues, array![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_csp_label_count() {
        let data = Array3::zeros((3, 2, 2));
        let err = filter().get_csp(&data, &array![0.0, 1.0]).unwrap_err();
        assert_eq!(err.kind(), Some(BrainFlowExitCode::InvalidArgumentsError));
    }

    #[test]
    fn test_ica_shapes() {
        let data = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], [9.0, 10.0, 11.0, 12.0]];

        let result = filter().perform_ica(&data, 2, None).unwrap();
        assert_eq!(result.w.dim(), (2, 2));
        assert_eq!(result.k.dim(), (2, 3));
        assert_eq!(result.a.dim(), (3, 2));
        assert_eq!(result.s.dim(), (2, 4));
        assert_eq!(result.s.row(1).to_vec(), vec![5.0, 6.0, 7.0, 8.0]);

        let result = filter().perform_ica(&data, 2, Some(&[2, 0])).unwrap();
        assert_eq!(result.k.dim(), (2, 2));
        assert_eq!(result.s.row(0).to_vec(), vec![9.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_ica_bad_channel() {
        let data = array![[1.0, 2.0]];
        assert!(filter().perform_ica(&data, 1, Some(&[1])).is_err());
    }

    #[test]
    fn test_ica_oversized_components() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let err = filter().perform_ica(&data, usize::MAX / 2, None).unwrap_err();
        assert_eq!(err.exit_code(), 13);

        let err = filter().perform_ica(&data, 1 << 20, None).unwrap_err();
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn test_avg_band_powers() {
        let data = array![[7.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]];

        let powers = filter().get_avg_band_powers(&data, &[0, 2], 250, true).unwrap();
        assert_eq!(powers.avg, vec![2.0, 4.0, 5.0, 17.0, 15.0]);
        assert_eq!(powers.stddev, vec![7.0; 5]);

        let err = filter().get_avg_band_powers(&data, &[0, 2], 250, false).unwrap_err();
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn test_custom_band_powers_empty() {
        let data = array![[1.0]];
        assert!(filter().get_custom_band_powers(&data, &[], &[0], 250, true).is_err());
    }
}
