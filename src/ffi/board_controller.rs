//! C ABI of the BoardController library.

use libc::{c_char, c_double, c_int};

use super::loader::{native_api, LibraryCell};
use super::platform::NativeLibrary;

native_api! {
    /// Functions exported by BoardController.
    pub struct BoardControllerApi(NativeLibrary::BoardController) {
        fn prepare_session(board_id: c_int, json_brainflow_input_params: *const c_char);
        fn start_stream(
            buffer_size: c_int,
            streamer_params: *const c_char,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn stop_stream(board_id: c_int, json_brainflow_input_params: *const c_char);
        fn release_session(board_id: c_int, json_brainflow_input_params: *const c_char);
        fn get_current_board_data(
            num_samples: c_int,
            preset: c_int,
            data_buf: *mut c_double,
            returned_samples: *mut c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn get_board_data_count(
            preset: c_int,
            result: *mut c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn get_board_data(
            data_count: c_int,
            preset: c_int,
            data_buf: *mut c_double,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn is_prepared(
            prepared: *mut c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn insert_marker(
            value: c_double,
            preset: c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn config_board(
            config: *const c_char,
            response: *mut c_char,
            response_len: *mut c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn config_board_with_bytes(
            bytes: *const c_char,
            len: c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn add_streamer(
            streamer: *const c_char,
            preset: c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn delete_streamer(
            streamer: *const c_char,
            preset: c_int,
            board_id: c_int,
            json_brainflow_input_params: *const c_char,
        );
        fn release_all_sessions();
        fn set_log_level_board_controller(log_level: c_int);
        fn set_log_file_board_controller(log_file: *const c_char);
        fn log_message_board_controller(log_level: c_int, message: *const c_char);
        fn get_version_board_controller(version: *mut c_char, len: *mut c_int, max_len: c_int);

        fn get_sampling_rate(board_id: c_int, preset: c_int, sampling_rate: *mut c_int);
        fn get_package_num_channel(board_id: c_int, preset: c_int, package_num_channel: *mut c_int);
        fn get_timestamp_channel(board_id: c_int, preset: c_int, timestamp_channel: *mut c_int);
        fn get_marker_channel(board_id: c_int, preset: c_int, marker_channel: *mut c_int);
        fn get_battery_channel(board_id: c_int, preset: c_int, battery_channel: *mut c_int);
        fn get_num_rows(board_id: c_int, preset: c_int, num_rows: *mut c_int);
        fn get_eeg_names(board_id: c_int, preset: c_int, eeg_names: *mut c_char, len: *mut c_int);
        fn get_board_presets(board_id: c_int, presets: *mut c_int, len: *mut c_int);
        fn get_board_descr(board_id: c_int, preset: c_int, board_descr: *mut c_char, len: *mut c_int);
        fn get_device_name(board_id: c_int, preset: c_int, name: *mut c_char, len: *mut c_int);

        fn get_eeg_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_exg_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_emg_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_ecg_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_eog_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_eda_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_ppg_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_accel_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_rotation_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_gyro_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_analog_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_other_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_temperature_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_resistance_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
        fn get_magnetometer_channels(board_id: c_int, preset: c_int, channels: *mut c_int, len: *mut c_int);
    }
}

pub(crate) static BOARD_CONTROLLER: LibraryCell<BoardControllerApi> = LibraryCell::new();
