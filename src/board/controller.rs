//! Static board information and the BoardController logger.

use std::path::Path;
use std::sync::Arc;

use libc::{c_char, c_int};

use crate::constants::{BoardId, BrainFlowPreset, LogLevel};
use crate::data::board_descr::{split_names, BoardDescription};
use crate::data::matrix::{read_c_string, to_indices, used_len};
use crate::error::{check, BrainFlowError, Result};
use crate::ffi::board_controller::{BoardControllerApi, BOARD_CONTROLLER};
use crate::ffi::types::{MAX_CHANNELS, MAX_DESCR_CHARS, MAX_NAME_CHARS, MAX_VERSION_CHARS};
use crate::logger::NativeLogger;

/// Handle to the BoardController library.
///
/// Cloning is cheap: all clones share one symbol table.
#[derive(Debug, Clone)]
pub struct BoardController {
    api: Arc<BoardControllerApi>,
}

macro_rules! scalar_getters {
    ($( $(#[$doc:meta])* $method:ident => $native:ident; )+) => {
        $(
            $(#[$doc])*
            pub fn $method(&self, board_id: BoardId, preset: BrainFlowPreset) -> Result<usize> {
                let mut value: c_int = 0;
                // SAFETY: `value` outlives the call.
                let code = unsafe { (self.api.$native)(board_id as c_int, preset as c_int, &mut value) };
                check(code, stringify!($native))?;
                usize::try_from(value).map_err(|_| {
                    BrainFlowError::native(
                        crate::constants::BrainFlowExitCode::GeneralError as i32,
                        format!("{} returned {}", stringify!($native), value),
                    )
                })
            }
        )+
    };
}

macro_rules! channel_getters {
    ($( $(#[$doc:meta])* $method:ident => $native:ident; )+) => {
        $(
            $(#[$doc])*
            pub fn $method(&self, board_id: BoardId, preset: BrainFlowPreset) -> Result<Vec<usize>> {
                self.channels(board_id, preset, self.api.$native, stringify!($native))
            }
        )+
    };
}

type ChannelFn = unsafe extern "C" fn(c_int, c_int, *mut c_int, *mut c_int) -> c_int;
type StringFn = unsafe extern "C" fn(c_int, c_int, *mut c_char, *mut c_int) -> c_int;

impl BoardController {
    /// Shared handle, loading the library on first use.
    pub fn get() -> Result<Self> {
        Ok(Self::from_api(BOARD_CONTROLLER.get()?))
    }

    /// Load the library from `path` and make it the shared table.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_api(BOARD_CONTROLLER.load_from(path.as_ref())?))
    }

    pub fn from_api(api: Arc<BoardControllerApi>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &BoardControllerApi {
        &self.api
    }

    scalar_getters! {
        /// Sampling rate in Hz.
        sampling_rate => get_sampling_rate;
        /// Row holding the package counter.
        package_num_channel => get_package_num_channel;
        /// Row holding the timestamp.
        timestamp_channel => get_timestamp_channel;
        /// Row holding inserted markers.
        marker_channel => get_marker_channel;
        /// Row holding the battery level.
        battery_channel => get_battery_channel;
        /// Number of rows in the data table.
        num_rows => get_num_rows;
    }

    channel_getters! {
        eeg_channels => get_eeg_channels;
        /// EEG, EMG, ECG and EOG rows combined.
        exg_channels => get_exg_channels;
        emg_channels => get_emg_channels;
        ecg_channels => get_ecg_channels;
        eog_channels => get_eog_channels;
        eda_channels => get_eda_channels;
        ppg_channels => get_ppg_channels;
        accel_channels => get_accel_channels;
        rotation_channels => get_rotation_channels;
        gyro_channels => get_gyro_channels;
        analog_channels => get_analog_channels;
        other_channels => get_other_channels;
        temperature_channels => get_temperature_channels;
        resistance_channels => get_resistance_channels;
        magnetometer_channels => get_magnetometer_channels;
    }

    fn channels(
        &self,
        board_id: BoardId,
        preset: BrainFlowPreset,
        native: ChannelFn,
        context: &str,
    ) -> Result<Vec<usize>> {
        let mut channels = vec![0 as c_int; MAX_CHANNELS];
        let mut len: c_int = 0;
        // SAFETY: the buffer holds MAX_CHANNELS entries.
        let code = unsafe {
            native(
                board_id as c_int,
                preset as c_int,
                channels.as_mut_ptr(),
                &mut len,
            )
        };
        check(code, context)?;
        to_indices(&channels[..used_len(len, MAX_CHANNELS)])
    }

    fn string(
        &self,
        board_id: BoardId,
        preset: BrainFlowPreset,
        capacity: usize,
        native: StringFn,
        context: &str,
    ) -> Result<String> {
        let mut buf = vec![0 as c_char; capacity];
        let mut len: c_int = 0;
        // SAFETY: the buffer holds `capacity` bytes.
        let code =
            unsafe { native(board_id as c_int, preset as c_int, buf.as_mut_ptr(), &mut len) };
        check(code, context)?;
        read_c_string(&buf, len)
    }

    /// 10-20 names of the EEG channels, if the board fixes them.
    pub fn eeg_names(&self, board_id: BoardId, preset: BrainFlowPreset) -> Result<Vec<String>> {
        let names = self.string(
            board_id,
            preset,
            MAX_DESCR_CHARS,
            self.api.get_eeg_names,
            "get_eeg_names",
        )?;
        Ok(split_names(&names))
    }

    /// Presets the board supports.
    pub fn board_presets(&self, board_id: BoardId) -> Result<Vec<BrainFlowPreset>> {
        let mut presets = vec![0 as c_int; MAX_CHANNELS];
        let mut len: c_int = 0;
        // SAFETY: the buffer holds MAX_CHANNELS entries.
        let code = unsafe {
            (self.api.get_board_presets)(board_id as c_int, presets.as_mut_ptr(), &mut len)
        };
        check(code, "get_board_presets")?;
        presets[..used_len(len, MAX_CHANNELS)]
            .iter()
            .map(|&preset| BrainFlowPreset::try_from(preset))
            .collect()
    }

    /// Board description as the raw JSON string.
    pub fn board_descr_json(&self, board_id: BoardId, preset: BrainFlowPreset) -> Result<String> {
        self.string(
            board_id,
            preset,
            MAX_DESCR_CHARS,
            self.api.get_board_descr,
            "get_board_descr",
        )
    }

    pub fn board_descr(
        &self,
        board_id: BoardId,
        preset: BrainFlowPreset,
    ) -> Result<BoardDescription> {
        BoardDescription::from_json(&self.board_descr_json(board_id, preset)?)
    }

    pub fn device_name(&self, board_id: BoardId, preset: BrainFlowPreset) -> Result<String> {
        self.string(
            board_id,
            preset,
            MAX_NAME_CHARS,
            self.api.get_device_name,
            "get_device_name",
        )
    }

    /// Version of the native library.
    pub fn version(&self) -> Result<String> {
        let mut buf = vec![0 as c_char; MAX_VERSION_CHARS];
        let mut len: c_int = 0;
        // SAFETY: max_len matches the buffer size.
        let code = unsafe {
            (self.api.get_version_board_controller)(
                buf.as_mut_ptr(),
                &mut len,
                MAX_VERSION_CHARS as c_int,
            )
        };
        check(code, "get_version_board_controller")?;
        read_c_string(&buf, len)
    }

    /// Release every session the native library holds.
    pub fn release_all_sessions(&self) -> Result<()> {
        // SAFETY: no arguments.
        check(unsafe { (self.api.release_all_sessions)() }, "release_all_sessions")
    }

    pub fn enable_board_logger(&self) -> Result<()> {
        self.enable_logger()
    }

    pub fn disable_board_logger(&self) -> Result<()> {
        self.disable_logger()
    }

    pub fn enable_dev_board_logger(&self) -> Result<()> {
        self.enable_dev_logger()
    }
}

impl NativeLogger for BoardController {
    fn set_log_level(&self, level: LogLevel) -> Result<()> {
        // SAFETY: plain integer argument.
        let code = unsafe { (self.api.set_log_level_board_controller)(level as c_int) };
        check(code, "set_log_level_board_controller")
    }

    fn set_log_file(&self, path: &str) -> Result<()> {
        let path = std::ffi::CString::new(path)?;
        // SAFETY: `path` outlives the call.
        let code = unsafe { (self.api.set_log_file_board_controller)(path.as_ptr()) };
        check(code, "set_log_file_board_controller")
    }

    fn log_message(&self, level: LogLevel, message: &str) -> Result<()> {
        let message = std::ffi::CString::new(message)?;
        // SAFETY: `message` outlives the call.
        let code =
            unsafe { (self.api.log_message_board_controller)(level as c_int, message.as_ptr()) };
        check(code, "log_message_board_controller")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BrainFlowExitCode;
    use crate::test_support::{read_str, write_slice, write_str};
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Mutex;

    unsafe extern "C" fn sampling_rate(board_id: c_int, preset: c_int, out: *mut c_int) -> c_int {
        *out = if preset == 0 { 250 } else { 50 + board_id };
        0
    }

    unsafe extern "C" fn eeg_channels(
        _: c_int,
        _: c_int,
        out: *mut c_int,
        len: *mut c_int,
    ) -> c_int {
        write_slice(out, len, &[1, 2, 3, 4, 5, 6, 7, 8]);
        0
    }

    unsafe extern "C" fn negative_channel(
        _: c_int,
        _: c_int,
        out: *mut c_int,
        len: *mut c_int,
    ) -> c_int {
        write_slice(out, len, &[-1]);
        0
    }

    unsafe extern "C" fn eeg_names(_: c_int, _: c_int, out: *mut c_char, len: *mut c_int) -> c_int {
        write_str(out, len, "Fz,C3,Cz,C4");
        0
    }

    unsafe extern "C" fn device_name(
        _: c_int,
        _: c_int,
        out: *mut c_char,
        len: *mut c_int,
    ) -> c_int {
        write_str(out, len, "Synthetic");
        0
    }

    unsafe extern "C" fn board_descr(
        _: c_int,
        _: c_int,
        out: *mut c_char,
        len: *mut c_int,
    ) -> c_int {
        write_str(
            out,
            len,
            r#"{"name":"Synthetic","sampling_rate":250,"num_rows":32,"eeg_channels":[1,2]}"#,
        );
        0
    }

    unsafe extern "C" fn board_presets(_: c_int, out: *mut c_int, len: *mut c_int) -> c_int {
        write_slice(out, len, &[0, 1]);
        0
    }

    unsafe extern "C" fn unsupported_board(_: c_int, _: c_int, _: *mut c_int) -> c_int {
        BrainFlowExitCode::UnsupportedBoardError as c_int
    }

    static VERSION_MAX_LEN: AtomicI32 = AtomicI32::new(-1);

    unsafe extern "C" fn version(out: *mut c_char, len: *mut c_int, max_len: c_int) -> c_int {
        VERSION_MAX_LEN.store(max_len, Ordering::SeqCst);
        write_str(out, len, "5.12.1");
        0
    }

    static LAST_LEVEL: AtomicI32 = AtomicI32::new(-1);

    unsafe extern "C" fn set_log_level(level: c_int) -> c_int {
        LAST_LEVEL.store(level, Ordering::SeqCst);
        0
    }

    static MESSAGES: Mutex<Vec<(c_int, String)>> = Mutex::new(Vec::new());

    unsafe extern "C" fn log_message(level: c_int, message: *const c_char) -> c_int {
        MESSAGES.lock().unwrap().push((level, read_str(message)));
        0
    }

    fn controller() -> BoardController {
        let mut api = BoardControllerApi::unavailable();
        api.get_sampling_rate = sampling_rate;
        api.get_num_rows = unsupported_board;
        api.get_eeg_channels = eeg_channels;
        api.get_ppg_channels = negative_channel;
        api.get_eeg_names = eeg_names;
        api.get_device_name = device_name;
        api.get_board_descr = board_descr;
        api.get_board_presets = board_presets;
        api.get_version_board_controller = version;
        api.set_log_level_board_controller = set_log_level;
        api.log_message_board_controller = log_message;
        BoardController::from_api(Arc::new(api))
    }

    #[test]
    fn test_scalar_getter() {
        let controller = controller();
        let preset = BrainFlowPreset::DefaultPreset;
        assert_eq!(controller.sampling_rate(BoardId::SyntheticBoard, preset).unwrap(), 250);
        assert_eq!(
            controller
                .sampling_rate(BoardId::CytonBoard, BrainFlowPreset::AuxiliaryPreset)
                .unwrap(),
            50
        );
    }

    #[test]
    fn test_scalar_getter_error() {
        let err = controller()
            .num_rows(BoardId::CytonBoard, BrainFlowPreset::DefaultPreset)
            .unwrap_err();
        assert_eq!(err.kind(), Some(BrainFlowExitCode::UnsupportedBoardError));
    }

    #[test]
    fn test_channel_list() {
        let channels = controller()
            .eeg_channels(BoardId::SyntheticBoard, BrainFlowPreset::DefaultPreset)
            .unwrap();
        assert_eq!(channels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_negative_channel_rejected() {
        assert!(controller()
            .ppg_channels(BoardId::SyntheticBoard, BrainFlowPreset::DefaultPreset)
            .is_err());
    }

    #[test]
    fn test_unavailable_channel_list() {
        let err = controller()
            .gyro_channels(BoardId::SyntheticBoard, BrainFlowPreset::DefaultPreset)
            .unwrap_err();
        assert_eq!(err.exit_code(), 17);
    }

    #[test]
    fn test_strings() {
        let controller = controller();
        let preset = BrainFlowPreset::DefaultPreset;

        assert_eq!(
            controller.eeg_names(BoardId::SyntheticBoard, preset).unwrap(),
            vec!["Fz", "C3", "Cz", "C4"]
        );
        assert_eq!(controller.device_name(BoardId::SyntheticBoard, preset).unwrap(), "Synthetic");
        assert_eq!(controller.version().unwrap(), "5.12.1");
        assert_eq!(VERSION_MAX_LEN.load(Ordering::SeqCst), MAX_VERSION_CHARS as c_int);
    }

    #[test]
    fn test_board_descr() {
        let descr = controller()
            .board_descr(BoardId::SyntheticBoard, BrainFlowPreset::DefaultPreset)
            .unwrap();
        assert_eq!(descr.name, "Synthetic");
        assert_eq!(descr.num_rows, 32);
        assert_eq!(descr.eeg_channels, vec![1, 2]);
    }

    #[test]
    fn test_board_presets() {
        assert_eq!(
            controller().board_presets(BoardId::SyntheticBoard).unwrap(),
            vec![BrainFlowPreset::DefaultPreset, BrainFlowPreset::AuxiliaryPreset]
        );
    }

    #[test]
    fn test_logger_levels() {
        let controller = controller();

        controller.enable_dev_board_logger().unwrap();
        assert_eq!(LAST_LEVEL.load(Ordering::SeqCst), LogLevel::LevelTrace as i32);

        controller.disable_board_logger().unwrap();
        assert_eq!(LAST_LEVEL.load(Ordering::SeqCst), LogLevel::LevelOff as i32);

        controller.enable_board_logger().unwrap();
        assert_eq!(LAST_LEVEL.load(Ordering::SeqCst), LogLevel::LevelInfo as i32);
    }

    #[test]
    fn test_log_message() {
        controller().log_message(LogLevel::LevelWarn, "from rust").unwrap();
        let sent = (LogLevel::LevelWarn as c_int, "from rust".to_string());
        assert!(MESSAGES.lock().unwrap().contains(&sent));

        let err = controller().log_message(LogLevel::LevelWarn, "bad\0message").unwrap_err();
        assert!(matches!(err, BrainFlowError::Nul(_)));
    }

    #[test]
    fn test_release_all_sessions_unavailable() {
        let err = controller().release_all_sessions().unwrap_err();
        assert_eq!(err.exit_code(), 17);
    }
}
