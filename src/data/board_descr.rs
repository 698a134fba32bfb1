//! Decoded board description.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Static layout of one board preset as reported by the native library.
///
/// Channel kinds a board does not have are absent from the JSON; their lists
/// decode as empty and their scalar indices as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardDescription {
    pub name: String,
    pub sampling_rate: u32,
    pub num_rows: usize,
    pub package_num_channel: Option<usize>,
    pub timestamp_channel: Option<usize>,
    pub marker_channel: Option<usize>,
    pub battery_channel: Option<usize>,
    pub eeg_channels: Vec<usize>,
    pub emg_channels: Vec<usize>,
    pub ecg_channels: Vec<usize>,
    pub eog_channels: Vec<usize>,
    pub exg_channels: Vec<usize>,
    pub eda_channels: Vec<usize>,
    pub ppg_channels: Vec<usize>,
    pub accel_channels: Vec<usize>,
    pub rotation_channels: Vec<usize>,
    pub gyro_channels: Vec<usize>,
    pub analog_channels: Vec<usize>,
    pub other_channels: Vec<usize>,
    pub temperature_channels: Vec<usize>,
    pub resistance_channels: Vec<usize>,
    pub magnetometer_channels: Vec<usize>,
    /// Comma separated 10-20 names of the EEG channels, if fixed.
    pub eeg_names: Option<String>,
}

impl BoardDescription {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// EEG channel names split into a list.
    pub fn eeg_names_list(&self) -> Vec<String> {
        self.eeg_names
            .as_deref()
            .map(split_names)
            .unwrap_or_default()
    }
}

pub(crate) fn split_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
