//! Sizes of the out-buffers handed to native functions.
//!
//! The native side writes at most this many elements and reports the used
//! length through a separate out-parameter.

/// Channel lists and preset lists.
pub const MAX_CHANNELS: usize = 512;

/// Board description JSON and EEG channel names.
pub const MAX_DESCR_CHARS: usize = 16000;

/// Device names.
pub const MAX_NAME_CHARS: usize = 4096;

/// Responses to `config_board`.
pub const MAX_CONFIG_RESPONSE_CHARS: usize = 8192;

/// Version strings.
pub const MAX_VERSION_CHARS: usize = 64;

/// Room for the coefficients of a wavelet transform: the longest supported
/// filter adds up to 40 values per side at each level.
///
/// `None` when the size overflows.
pub const fn wavelet_output_capacity(data_len: usize, decomposition_level: usize) -> Option<usize> {
    match decomposition_level.checked_mul(2 * (40 + 1)) {
        Some(extra) => data_len.checked_add(extra),
        None => None,
    }
}
