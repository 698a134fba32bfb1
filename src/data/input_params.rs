//! Connection parameters for a board session.

use serde::{Deserialize, Serialize};

use crate::constants::{BoardId, IpProtocolType};
use crate::error::Result;

/// Parameters identifying a physical or virtual board.
///
/// Serialized to JSON and passed with every session call; two sessions
/// with equal parameters and board id address the same native session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainFlowInputParams {
    pub serial_port: String,
    pub mac_address: String,
    pub ip_address: String,
    pub ip_address_aux: String,
    pub ip_address_anc: String,
    pub ip_port: i32,
    pub ip_port_aux: i32,
    pub ip_port_anc: i32,
    /// Raw [`IpProtocolType`] value.
    pub ip_protocol: i32,
    pub other_info: String,
    /// Timeout for device discovery, in seconds.
    pub timeout: i32,
    pub serial_number: String,
    pub file: String,
    pub file_aux: String,
    pub file_anc: String,
    /// Board whose data a streaming or playback board replays.
    pub master_board: i32,
}

impl Default for BrainFlowInputParams {
    fn default() -> Self {
        Self {
            serial_port: String::new(),
            mac_address: String::new(),
            ip_address: String::new(),
            ip_address_aux: String::new(),
            ip_address_anc: String::new(),
            ip_port: 0,
            ip_port_aux: 0,
            ip_port_anc: 0,
            ip_protocol: IpProtocolType::NoIpProtocol as i32,
            other_info: String::new(),
            timeout: 0,
            serial_number: String::new(),
            file: String::new(),
            file_aux: String::new(),
            file_anc: String::new(),
            master_board: BoardId::NoBoard as i32,
        }
    }
}

impl BrainFlowInputParams {
    pub fn builder() -> BrainFlowInputParamsBuilder {
        BrainFlowInputParamsBuilder::default()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Master board as a typed id, `None` for unknown values.
    pub fn master_board_id(&self) -> Option<BoardId> {
        BoardId::try_from(self.master_board).ok()
    }
}

/// Fluent builder for [`BrainFlowInputParams`].
#[derive(Debug, Clone, Default)]
pub struct BrainFlowInputParamsBuilder {
    params: BrainFlowInputParams,
}

impl BrainFlowInputParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serial_port(mut self, port: impl Into<String>) -> Self {
        self.params.serial_port = port.into();
        self
    }

    pub fn mac_address(mut self, address: impl Into<String>) -> Self {
        self.params.mac_address = address.into();
        self
    }

    pub fn ip_address(mut self, address: impl Into<String>) -> Self {
        self.params.ip_address = address.into();
        self
    }

    pub fn ip_address_aux(mut self, address: impl Into<String>) -> Self {
        self.params.ip_address_aux = address.into();
        self
    }

    pub fn ip_address_anc(mut self, address: impl Into<String>) -> Self {
        self.params.ip_address_anc = address.into();
        self
    }

    pub fn ip_port(mut self, port: i32) -> Self {
        self.params.ip_port = port;
        self
    }

    pub fn ip_port_aux(mut self, port: i32) -> Self {
        self.params.ip_port_aux = port;
        self
    }

    pub fn ip_port_anc(mut self, port: i32) -> Self {
        self.params.ip_port_anc = port;
        self
    }

    pub fn ip_protocol(mut self, protocol: IpProtocolType) -> Self {
        self.params.ip_protocol = protocol as i32;
        self
    }

    pub fn other_info(mut self, info: impl Into<String>) -> Self {
        self.params.other_info = info.into();
        self
    }

    pub fn timeout(mut self, seconds: i32) -> Self {
        self.params.timeout = seconds;
        self
    }

    pub fn serial_number(mut self, number: impl Into<String>) -> Self {
        self.params.serial_number = number.into();
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.params.file = file.into();
        self
    }

    pub fn file_aux(mut self, file: impl Into<String>) -> Self {
        self.params.file_aux = file.into();
        self
    }

    pub fn file_anc(mut self, file: impl Into<String>) -> Self {
        self.params.file_anc = file.into();
        self
    }

    pub fn master_board(mut self, board: BoardId) -> Self {
        self.params.master_board = board as i32;
        self
    }

    pub fn build(self) -> BrainFlowInputParams {
        self.params
    }
}
