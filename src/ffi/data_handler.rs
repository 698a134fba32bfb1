//! C ABI of the DataHandler library.

use libc::{c_char, c_double, c_int};

use super::loader::{native_api, LibraryCell};
use super::platform::NativeLibrary;

native_api! {
    /// Functions exported by DataHandler.
    pub struct DataHandlerApi(NativeLibrary::DataHandler) {
        fn perform_lowpass(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            cutoff: c_double,
            order: c_int,
            filter_type: c_int,
            ripple: c_double,
        );
        fn perform_highpass(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            cutoff: c_double,
            order: c_int,
            filter_type: c_int,
            ripple: c_double,
        );
        fn perform_bandpass(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            start_freq: c_double,
            stop_freq: c_double,
            order: c_int,
            filter_type: c_int,
            ripple: c_double,
        );
        fn perform_bandstop(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            start_freq: c_double,
            stop_freq: c_double,
            order: c_int,
            filter_type: c_int,
            ripple: c_double,
        );
        fn remove_environmental_noise(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            noise_type: c_int,
        );
        fn perform_rolling_filter(data: *mut c_double, data_len: c_int, period: c_int, agg_operation: c_int);
        fn perform_downsampling(
            data: *mut c_double,
            data_len: c_int,
            period: c_int,
            agg_operation: c_int,
            output_data: *mut c_double,
        );
        fn perform_wavelet_transform(
            data: *mut c_double,
            data_len: c_int,
            wavelet: c_int,
            decomposition_level: c_int,
            extension: c_int,
            output_data: *mut c_double,
            decomposition_lengths: *mut c_int,
        );
        fn perform_inverse_wavelet_transform(
            wavelet_coeffs: *mut c_double,
            original_data_len: c_int,
            wavelet: c_int,
            decomposition_level: c_int,
            extension: c_int,
            decomposition_lengths: *mut c_int,
            output_data: *mut c_double,
        );
        fn perform_wavelet_denoising(
            data: *mut c_double,
            data_len: c_int,
            wavelet: c_int,
            decomposition_level: c_int,
            wavelet_denoising: c_int,
            threshold: c_int,
            extension: c_int,
            noise_level: c_int,
        );
        fn restore_data_from_wavelet_detailed_coeffs(
            data: *mut c_double,
            data_len: c_int,
            wavelet: c_int,
            decomposition_level: c_int,
            level_to_restore: c_int,
            output: *mut c_double,
        );
        fn detect_peaks_z_score(
            data: *mut c_double,
            data_len: c_int,
            lag: c_int,
            threshold: c_double,
            influence: c_double,
            output: *mut c_double,
        );
        fn get_csp(
            data: *const c_double,
            labels: *const c_double,
            n_epochs: c_int,
            n_channels: c_int,
            n_times: c_int,
            output_w: *mut c_double,
            output_d: *mut c_double,
        );
        fn get_window(window_function: c_int, window_len: c_int, output_window: *mut c_double);
        fn perform_fft(
            data: *mut c_double,
            data_len: c_int,
            window_function: c_int,
            output_re: *mut c_double,
            output_im: *mut c_double,
        );
        fn perform_ifft(
            input_re: *mut c_double,
            input_im: *mut c_double,
            data_len: c_int,
            restored_data: *mut c_double,
        );
        fn get_nearest_power_of_two(value: c_int, output: *mut c_int);
        fn get_psd(
            data: *mut c_double,
            data_len: c_int,
            sampling_rate: c_int,
            window_function: c_int,
            output_ampl: *mut c_double,
            output_freq: *mut c_double,
        );
        fn get_psd_welch(
            data: *mut c_double,
            data_len: c_int,
            nfft: c_int,
            overlap: c_int,
            sampling_rate: c_int,
            window_function: c_int,
            output_ampl: *mut c_double,
            output_freq: *mut c_double,
        );
        fn get_band_power(
            ampl: *mut c_double,
            freq: *mut c_double,
            data_len: c_int,
            freq_start: c_double,
            freq_end: c_double,
            band_power: *mut c_double,
        );
        fn get_custom_band_powers(
            raw_data: *mut c_double,
            rows: c_int,
            cols: c_int,
            start_freqs: *mut c_double,
            stop_freqs: *mut c_double,
            num_bands: c_int,
            sampling_rate: c_int,
            apply_filters: c_int,
            avg_band_powers: *mut c_double,
            stddev_band_powers: *mut c_double,
        );
        fn detrend(data: *mut c_double, data_len: c_int, detrend_operation: c_int);
        fn calc_stddev(data: *mut c_double, start_pos: c_int, end_pos: c_int, output: *mut c_double);
        fn get_railed_percentage(data: *mut c_double, data_len: c_int, gain: c_int, output: *mut c_double);
        fn get_oxygen_level(
            ppg_ir: *mut c_double,
            ppg_red: *mut c_double,
            data_size: c_int,
            sampling_rate: c_int,
            coef1: c_double,
            coef2: c_double,
            coef3: c_double,
            oxygen_level: *mut c_double,
        );
        fn get_heart_rate(
            ppg_ir: *mut c_double,
            ppg_red: *mut c_double,
            data_size: c_int,
            sampling_rate: c_int,
            fft_size: c_int,
            rate: *mut c_double,
        );
        fn perform_ica(
            data: *mut c_double,
            rows: c_int,
            cols: c_int,
            num_components: c_int,
            w_mat: *mut c_double,
            k_mat: *mut c_double,
            a_mat: *mut c_double,
            s_mat: *mut c_double,
        );
        fn write_file(
            data: *const c_double,
            num_rows: c_int,
            num_cols: c_int,
            file_name: *const c_char,
            file_mode: *const c_char,
        );
        fn read_file(
            data: *mut c_double,
            num_rows: *mut c_int,
            num_cols: *mut c_int,
            file_name: *const c_char,
            num_elements: c_int,
        );
        fn get_num_elements_in_file(file_name: *const c_char, num_elements: *mut c_int);
        fn set_log_level_data_handler(log_level: c_int);
        fn set_log_file_data_handler(log_file: *const c_char);
        fn log_message_data_handler(log_level: c_int, message: *const c_char);
        fn get_version_data_handler(version: *mut c_char, len: *mut c_int, max_len: c_int);
    }
}

pub(crate) static DATA_HANDLER: LibraryCell<DataHandlerApi> = LibraryCell::new();
