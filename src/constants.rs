//! Enumerations mirrored from the native libraries.
//!
//! Every enum is `#[repr(i32)]` with exactly the values the native side uses,
//! converts into `i32` for FFI calls and back from `i32` fallibly.

use std::fmt;

use crate::error::{BrainFlowError, Result};

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $native:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Name of the constant on the native side.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $native, )+
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = BrainFlowError;

            fn try_from(value: i32) -> Result<Self> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    other => Err(BrainFlowError::invalid_argument(format!(
                        "{} has no variant with value {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

native_enum! {
    /// Exit codes returned by every native function.
    pub enum BrainFlowExitCode {
        StatusOk = 0 => "STATUS_OK",
        PortAlreadyOpenError = 1 => "PORT_ALREADY_OPEN_ERROR",
        UnableToOpenPortError = 2 => "UNABLE_TO_OPEN_PORT_ERROR",
        SetPortError = 3 => "SET_PORT_ERROR",
        BoardWriteError = 4 => "BOARD_WRITE_ERROR",
        IncommingMsgError = 5 => "INCOMMING_MSG_ERROR",
        InitialMsgError = 6 => "INITIAL_MSG_ERROR",
        BoardNotReadyError = 7 => "BOARD_NOT_READY_ERROR",
        StreamAlreadyRunError = 8 => "STREAM_ALREADY_RUN_ERROR",
        InvalidBufferSizeError = 9 => "INVALID_BUFFER_SIZE_ERROR",
        StreamThreadError = 10 => "STREAM_THREAD_ERROR",
        StreamThreadIsNotRunning = 11 => "STREAM_THREAD_IS_NOT_RUNNING",
        EmptyBufferError = 12 => "EMPTY_BUFFER_ERROR",
        InvalidArgumentsError = 13 => "INVALID_ARGUMENTS_ERROR",
        UnsupportedBoardError = 14 => "UNSUPPORTED_BOARD_ERROR",
        BoardNotCreatedError = 15 => "BOARD_NOT_CREATED_ERROR",
        AnotherBoardIsCreatedError = 16 => "ANOTHER_BOARD_IS_CREATED_ERROR",
        GeneralError = 17 => "GENERAL_ERROR",
        SyncTimeoutError = 18 => "SYNC_TIMEOUT_ERROR",
        JsonNotFoundError = 19 => "JSON_NOT_FOUND_ERROR",
        NoSuchDataInJsonError = 20 => "NO_SUCH_DATA_IN_JSON_ERROR",
        ClassifierIsNotPreparedError = 21 => "CLASSIFIER_IS_NOT_PREPARED_ERROR",
        AnotherClassifierIsPreparedError = 22 => "ANOTHER_CLASSIFIER_IS_PREPARED_ERROR",
        UnsupportedClassifierAndMetricCombinationError = 23 => "UNSUPPORTED_CLASSIFIER_AND_METRIC_COMBINATION_ERROR",
    }
}

native_enum! {
    /// Supported boards.
    pub enum BoardId {
        /// Placeholder for "no master board", never valid for a session.
        NoBoard = -100 => "NO_BOARD",
        PlaybackFileBoard = -3 => "PLAYBACK_FILE_BOARD",
        StreamingBoard = -2 => "STREAMING_BOARD",
        SyntheticBoard = -1 => "SYNTHETIC_BOARD",
        CytonBoard = 0 => "CYTON_BOARD",
        GanglionBoard = 1 => "GANGLION_BOARD",
        CytonDaisyBoard = 2 => "CYTON_DAISY_BOARD",
        GaleaBoard = 3 => "GALEA_BOARD",
        GanglionWifiBoard = 4 => "GANGLION_WIFI_BOARD",
        CytonWifiBoard = 5 => "CYTON_WIFI_BOARD",
        CytonDaisyWifiBoard = 6 => "CYTON_DAISY_WIFI_BOARD",
        BrainbitBoard = 7 => "BRAINBIT_BOARD",
        UnicornBoard = 8 => "UNICORN_BOARD",
        CallibriEegBoard = 9 => "CALLIBRI_EEG_BOARD",
        CallibriEmgBoard = 10 => "CALLIBRI_EMG_BOARD",
        CallibriEcgBoard = 11 => "CALLIBRI_ECG_BOARD",
        Notion1Board = 13 => "NOTION_1_BOARD",
        Notion2Board = 14 => "NOTION_2_BOARD",
        GforceProBoard = 16 => "GFORCE_PRO_BOARD",
        Freeeeg32Board = 17 => "FREEEEG32_BOARD",
        BrainbitBledBoard = 18 => "BRAINBIT_BLED_BOARD",
        GforceDualBoard = 19 => "GFORCE_DUAL_BOARD",
        GaleaSerialBoard = 20 => "GALEA_SERIAL_BOARD",
        MuseSBledBoard = 21 => "MUSE_S_BLED_BOARD",
        Muse2BledBoard = 22 => "MUSE_2_BLED_BOARD",
        CrownBoard = 23 => "CROWN_BOARD",
        AntNeuroEe410Board = 24 => "ANT_NEURO_EE_410_BOARD",
        AntNeuroEe411Board = 25 => "ANT_NEURO_EE_411_BOARD",
        AntNeuroEe430Board = 26 => "ANT_NEURO_EE_430_BOARD",
        AntNeuroEe211Board = 27 => "ANT_NEURO_EE_211_BOARD",
        AntNeuroEe212Board = 28 => "ANT_NEURO_EE_212_BOARD",
        AntNeuroEe213Board = 29 => "ANT_NEURO_EE_213_BOARD",
        AntNeuroEe214Board = 30 => "ANT_NEURO_EE_214_BOARD",
        AntNeuroEe215Board = 31 => "ANT_NEURO_EE_215_BOARD",
        AntNeuroEe221Board = 32 => "ANT_NEURO_EE_221_BOARD",
        AntNeuroEe222Board = 33 => "ANT_NEURO_EE_222_BOARD",
        AntNeuroEe223Board = 34 => "ANT_NEURO_EE_223_BOARD",
        AntNeuroEe224Board = 35 => "ANT_NEURO_EE_224_BOARD",
        AntNeuroEe225Board = 36 => "ANT_NEURO_EE_225_BOARD",
        EnophoneBoard = 37 => "ENOPHONE_BOARD",
        Muse2Board = 38 => "MUSE_2_BOARD",
        MuseSBoard = 39 => "MUSE_S_BOARD",
        BrainaliveBoard = 40 => "BRAINALIVE_BOARD",
        Muse2016Board = 41 => "MUSE_2016_BOARD",
        Muse2016BledBoard = 42 => "MUSE_2016_BLED_BOARD",
        Explore4ChanBoard = 44 => "EXPLORE_4_CHAN_BOARD",
        Explore8ChanBoard = 45 => "EXPLORE_8_CHAN_BOARD",
        GanglionNativeBoard = 46 => "GANGLION_NATIVE_BOARD",
        EmotibitBoard = 47 => "EMOTIBIT_BOARD",
        GaleaBoardV4 = 48 => "GALEA_BOARD_V4",
        GaleaSerialBoardV4 = 49 => "GALEA_SERIAL_BOARD_V4",
        NtlWifiBoard = 50 => "NTL_WIFI_BOARD",
        AntNeuroEe511Board = 51 => "ANT_NEURO_EE_511_BOARD",
        Freeeeg128Board = 52 => "FREEEEG128_BOARD",
        AavaaV3Board = 53 => "AAVAA_V3_BOARD",
    }
}

impl BoardId {
    /// Streaming and playback boards replay data recorded from another board.
    pub const fn needs_master_board(self) -> bool {
        matches!(self, BoardId::StreamingBoard | BoardId::PlaybackFileBoard)
    }
}

native_enum! {
    /// Data stream selector for boards with several streams.
    pub enum BrainFlowPreset {
        DefaultPreset = 0 => "DEFAULT_PRESET",
        AuxiliaryPreset = 1 => "AUXILIARY_PRESET",
        AncillaryPreset = 2 => "ANCILLARY_PRESET",
    }
}

impl Default for BrainFlowPreset {
    fn default() -> Self {
        BrainFlowPreset::DefaultPreset
    }
}

native_enum! {
    pub enum IpProtocolType {
        NoIpProtocol = 0 => "NO_IP_PROTOCOL",
        Udp = 1 => "UDP",
        Tcp = 2 => "TCP",
    }
}

native_enum! {
    pub enum FilterType {
        Butterworth = 0 => "BUTTERWORTH",
        ChebyshevType1 = 1 => "CHEBYSHEV_TYPE_1",
        Bessel = 2 => "BESSEL",
        ButterworthZeroPhase = 3 => "BUTTERWORTH_ZERO_PHASE",
        ChebyshevType1ZeroPhase = 4 => "CHEBYSHEV_TYPE_1_ZERO_PHASE",
        BesselZeroPhase = 5 => "BESSEL_ZERO_PHASE",
    }
}

native_enum! {
    /// Aggregation used by rolling filters and downsampling.
    pub enum AggOperation {
        Mean = 0 => "MEAN",
        Median = 1 => "MEDIAN",
        Each = 2 => "EACH",
    }
}

native_enum! {
    pub enum WindowOperation {
        NoWindow = 0 => "NO_WINDOW",
        Hanning = 1 => "HANNING",
        Hamming = 2 => "HAMMING",
        BlackmanHarris = 3 => "BLACKMAN_HARRIS",
    }
}

native_enum! {
    pub enum DetrendOperation {
        NoDetrend = 0 => "NO_DETREND",
        Constant = 1 => "CONSTANT",
        Linear = 2 => "LINEAR",
    }
}

native_enum! {
    /// Mains frequency removed by `remove_environmental_noise`.
    pub enum NoiseType {
        Fifty = 0 => "FIFTY",
        Sixty = 1 => "SIXTY",
        FiftyAndSixty = 2 => "FIFTY_AND_SIXTY",
    }
}

native_enum! {
    pub enum WaveletType {
        Haar = 0 => "HAAR",
        Db1 = 1 => "DB1",
        Db2 = 2 => "DB2",
        Db3 = 3 => "DB3",
        Db4 = 4 => "DB4",
        Db5 = 5 => "DB5",
        Db6 = 6 => "DB6",
        Db7 = 7 => "DB7",
        Db8 = 8 => "DB8",
        Db9 = 9 => "DB9",
        Db10 = 10 => "DB10",
        Db11 = 11 => "DB11",
        Db12 = 12 => "DB12",
        Db13 = 13 => "DB13",
        Db14 = 14 => "DB14",
        Db15 = 15 => "DB15",
        Bior1_1 = 16 => "BIOR1_1",
        Bior1_3 = 17 => "BIOR1_3",
        Bior1_5 = 18 => "BIOR1_5",
        Bior2_2 = 19 => "BIOR2_2",
        Bior2_4 = 20 => "BIOR2_4",
        Bior2_6 = 21 => "BIOR2_6",
        Bior2_8 = 22 => "BIOR2_8",
        Bior3_1 = 23 => "BIOR3_1",
        Bior3_3 = 24 => "BIOR3_3",
        Bior3_5 = 25 => "BIOR3_5",
        Bior3_7 = 26 => "BIOR3_7",
        Bior3_9 = 27 => "BIOR3_9",
        Bior4_4 = 28 => "BIOR4_4",
        Bior5_5 = 29 => "BIOR5_5",
        Bior6_8 = 30 => "BIOR6_8",
        Coif1 = 31 => "COIF1",
        Coif2 = 32 => "COIF2",
        Coif3 = 33 => "COIF3",
        Coif4 = 34 => "COIF4",
        Coif5 = 35 => "COIF5",
        Sym2 = 36 => "SYM2",
        Sym3 = 37 => "SYM3",
        Sym4 = 38 => "SYM4",
        Sym5 = 39 => "SYM5",
        Sym6 = 40 => "SYM6",
        Sym7 = 41 => "SYM7",
        Sym8 = 42 => "SYM8",
        Sym9 = 43 => "SYM9",
        Sym10 = 44 => "SYM10",
    }
}

native_enum! {
    pub enum WaveletDenoisingType {
        Visushrink = 0 => "VISUSHRINK",
        Sureshrink = 1 => "SURESHRINK",
    }
}

native_enum! {
    pub enum ThresholdType {
        Soft = 0 => "SOFT",
        Hard = 1 => "HARD",
    }
}

native_enum! {
    pub enum WaveletExtensionType {
        Symmetric = 0 => "SYMMETRIC",
        Periodic = 1 => "PERIODIC",
    }
}

native_enum! {
    pub enum NoiseEstimationLevel {
        FirstLevel = 0 => "FIRST_LEVEL",
        AllLevels = 1 => "ALL_LEVELS",
    }
}

native_enum! {
    /// Metric computed by an ML model.
    pub enum BrainFlowMetric {
        Mindfulness = 0 => "MINDFULNESS",
        Restfulness = 1 => "RESTFULNESS",
        UserDefined = 2 => "USER_DEFINED",
    }
}

native_enum! {
    pub enum BrainFlowClassifier {
        DefaultClassifier = 0 => "DEFAULT_CLASSIFIER",
        DynLibClassifier = 1 => "DYN_LIB_CLASSIFIER",
        OnnxClassifier = 2 => "ONNX_CLASSIFIER",
    }
}

native_enum! {
    /// Log levels of the native loggers.
    pub enum LogLevel {
        LevelTrace = 0 => "LEVEL_TRACE",
        LevelDebug = 1 => "LEVEL_DEBUG",
        LevelInfo = 2 => "LEVEL_INFO",
        LevelWarn = 3 => "LEVEL_WARN",
        LevelError = 4 => "LEVEL_ERROR",
        LevelCritical = 5 => "LEVEL_CRITICAL",
        LevelOff = 6 => "LEVEL_OFF",
    }
}

impl From<log::LevelFilter> for LogLevel {
    fn from(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => LogLevel::LevelOff,
            log::LevelFilter::Error => LogLevel::LevelError,
            log::LevelFilter::Warn => LogLevel::LevelWarn,
            log::LevelFilter::Info => LogLevel::LevelInfo,
            log::LevelFilter::Debug => LogLevel::LevelDebug,
            log::LevelFilter::Trace => LogLevel::LevelTrace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_contiguous() {
        for (i, code) in BrainFlowExitCode::ALL.iter().enumerate() {
            assert_eq!(i32::from(*code), i as i32);
        }
        assert_eq!(BrainFlowExitCode::ALL.len(), 24);
    }

    #[test]
    fn test_board_id_values() {
        assert_eq!(i32::from(BoardId::NoBoard), -100);
        assert_eq!(i32::from(BoardId::SyntheticBoard), -1);
        assert_eq!(i32::from(BoardId::AavaaV3Board), 53);
        assert_eq!(BoardId::try_from(46).unwrap(), BoardId::GanglionNativeBoard);
    }

    #[test]
    fn test_unknown_value_is_invalid_argument() {
        let err = BoardId::try_from(12).unwrap_err();
        assert_eq!(err.kind(), Some(BrainFlowExitCode::InvalidArgumentsError));
        assert!(WaveletType::try_from(45).is_err());
    }

    #[test]
    fn test_try_from_round_trips_every_variant() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::try_from(i32::from(*level)).unwrap(), *level);
        }
        for wavelet in WaveletType::ALL {
            assert_eq!(WaveletType::try_from(*wavelet as i32).unwrap(), *wavelet);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(BrainFlowPreset::AncillaryPreset.to_string(), "ANCILLARY_PRESET");
        assert_eq!(
            BrainFlowExitCode::UnsupportedClassifierAndMetricCombinationError.name(),
            "UNSUPPORTED_CLASSIFIER_AND_METRIC_COMBINATION_ERROR"
        );
    }

    #[test]
    fn test_log_level_from_filter() {
        assert_eq!(LogLevel::from(log::LevelFilter::Off), LogLevel::LevelOff);
        assert_eq!(LogLevel::from(log::LevelFilter::Trace), LogLevel::LevelTrace);
        assert_eq!(LogLevel::from(log::LevelFilter::Warn), LogLevel::LevelWarn);
    }

    #[test]
    fn test_master_board_requirement() {
        assert!(BoardId::StreamingBoard.needs_master_board());
        assert!(BoardId::PlaybackFileBoard.needs_master_board());
        assert!(!BoardId::SyntheticBoard.needs_master_board());
    }
}
