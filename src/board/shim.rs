//! One board session.

use std::ffi::CString;

use libc::{c_char, c_double, c_int};
use ndarray::Array2;

use crate::board::controller::BoardController;
use crate::constants::{BoardId, BrainFlowPreset};
use crate::data::input_params::BrainFlowInputParams;
use crate::data::matrix::{buffer_len, read_c_string, to_array2, to_c_int, used_len};
use crate::error::{check, BrainFlowError, Result};
use crate::ffi::types::MAX_CONFIG_RESPONSE_CHARS;

/// Ring buffer size used when the caller has no preference: half an hour
/// at 250 Hz.
pub const DEFAULT_BUFFER_SIZE: usize = 1800 * 250;

/// Primary interface to a board.
///
/// The session itself lives in the native library and is keyed by board id
/// and serialized input params. Dropping a `BoardShim` does not release it.
#[derive(Debug, Clone)]
pub struct BoardShim {
    controller: BoardController,
    board_id: BoardId,
    master_board: BoardId,
    input_params: BrainFlowInputParams,
    input_json: CString,
}

impl BoardShim {
    /// Create a shim using the shared BoardController library.
    pub fn new(board_id: BoardId, input_params: BrainFlowInputParams) -> Result<Self> {
        Self::with_controller(BoardController::get()?, board_id, input_params)
    }

    pub fn with_controller(
        controller: BoardController,
        board_id: BoardId,
        input_params: BrainFlowInputParams,
    ) -> Result<Self> {
        let master_board = if board_id.needs_master_board() {
            match input_params.master_board_id() {
                Some(BoardId::NoBoard) | None => {
                    return Err(BrainFlowError::invalid_argument(format!(
                        "{} requires master_board, got {}",
                        board_id, input_params.master_board
                    )))
                }
                Some(master) => master,
            }
        } else {
            board_id
        };
        let input_json = CString::new(input_params.to_json()?)?;
        log::debug!("created shim for {} (master {})", board_id, master_board);
        Ok(Self {
            controller,
            board_id,
            master_board,
            input_params,
            input_json,
        })
    }

    /// Board whose data layout this session produces.
    ///
    /// Equals the master board for streaming and playback boards.
    pub fn board_id(&self) -> BoardId {
        self.master_board
    }

    /// Board id the session was created with.
    pub fn session_board_id(&self) -> BoardId {
        self.board_id
    }

    pub fn input_params(&self) -> &BrainFlowInputParams {
        &self.input_params
    }

    pub fn controller(&self) -> &BoardController {
        &self.controller
    }

    fn id(&self) -> c_int {
        self.board_id as c_int
    }

    fn json(&self) -> *const c_char {
        self.input_json.as_ptr()
    }

    /// Prepare the session and allocate native resources.
    pub fn prepare_session(&self) -> Result<()> {
        // SAFETY: `input_json` lives as long as `self`.
        let code = unsafe { (self.controller.api().prepare_session)(self.id(), self.json()) };
        check(code, "prepare_session")
    }

    pub fn is_prepared(&self) -> Result<bool> {
        let mut prepared: c_int = 0;
        // SAFETY: `prepared` outlives the call.
        let code =
            unsafe { (self.controller.api().is_prepared)(&mut prepared, self.id(), self.json()) };
        check(code, "is_prepared")?;
        Ok(prepared != 0)
    }

    /// Start streaming into a ring buffer of `buffer_size` samples.
    ///
    /// `streamer_params` optionally adds a streamer, e.g.
    /// `file://data.csv:w`; pass an empty string for none.
    pub fn start_stream(&self, buffer_size: usize, streamer_params: &str) -> Result<()> {
        let buffer_size = to_c_int(buffer_size, "buffer_size")?;
        let streamer_params = CString::new(streamer_params)?;
        // SAFETY: both strings outlive the call.
        let code = unsafe {
            (self.controller.api().start_stream)(
                buffer_size,
                streamer_params.as_ptr(),
                self.id(),
                self.json(),
            )
        };
        check(code, "start_stream")
    }

    pub fn stop_stream(&self) -> Result<()> {
        // SAFETY: `input_json` lives as long as `self`.
        let code = unsafe { (self.controller.api().stop_stream)(self.id(), self.json()) };
        check(code, "stop_stream")
    }

    pub fn release_session(&self) -> Result<()> {
        // SAFETY: `input_json` lives as long as `self`.
        let code = unsafe { (self.controller.api().release_session)(self.id(), self.json()) };
        check(code, "release_session")
    }

    pub fn add_streamer(&self, streamer_params: &str, preset: BrainFlowPreset) -> Result<()> {
        let streamer_params = CString::new(streamer_params)?;
        // SAFETY: both strings outlive the call.
        let code = unsafe {
            (self.controller.api().add_streamer)(
                streamer_params.as_ptr(),
                preset as c_int,
                self.id(),
                self.json(),
            )
        };
        check(code, "add_streamer")
    }

    pub fn delete_streamer(&self, streamer_params: &str, preset: BrainFlowPreset) -> Result<()> {
        let streamer_params = CString::new(streamer_params)?;
        // SAFETY: both strings outlive the call.
        let code = unsafe {
            (self.controller.api().delete_streamer)(
                streamer_params.as_ptr(),
                preset as c_int,
                self.id(),
                self.json(),
            )
        };
        check(code, "delete_streamer")
    }

    /// Insert a marker into the data stream.
    pub fn insert_marker(&self, value: f64, preset: BrainFlowPreset) -> Result<()> {
        // SAFETY: `input_json` lives as long as `self`.
        let code = unsafe {
            (self.controller.api().insert_marker)(
                value as c_double,
                preset as c_int,
                self.id(),
                self.json(),
            )
        };
        check(code, "insert_marker")
    }

    /// Send a raw config string to the board and return its response.
    pub fn config_board(&self, config: &str) -> Result<String> {
        let config = CString::new(config)?;
        let mut response = vec![0 as c_char; MAX_CONFIG_RESPONSE_CHARS];
        let mut response_len: c_int = 0;
        // SAFETY: the response buffer holds MAX_CONFIG_RESPONSE_CHARS bytes.
        let code = unsafe {
            (self.controller.api().config_board)(
                config.as_ptr(),
                response.as_mut_ptr(),
                &mut response_len,
                self.id(),
                self.json(),
            )
        };
        check(code, "config_board")?;
        read_c_string(&response, response_len)
    }

    /// Send raw bytes to the board.
    pub fn config_board_with_bytes(&self, bytes: &[u8]) -> Result<()> {
        let len = to_c_int(bytes.len(), "config length")?;
        // SAFETY: `len` matches the slice.
        let code = unsafe {
            (self.controller.api().config_board_with_bytes)(
                bytes.as_ptr() as *const c_char,
                len,
                self.id(),
                self.json(),
            )
        };
        check(code, "config_board_with_bytes")
    }

    /// Number of samples currently in the ring buffer.
    pub fn get_board_data_count(&self, preset: BrainFlowPreset) -> Result<usize> {
        let mut count: c_int = 0;
        // SAFETY: `count` outlives the call.
        let code = unsafe {
            (self.controller.api().get_board_data_count)(
                preset as c_int,
                &mut count,
                self.id(),
                self.json(),
            )
        };
        check(code, "get_board_data_count")?;
        Ok(used_len(count, usize::MAX))
    }

    /// Take up to `num_samples` samples (all if `None`) out of the ring
    /// buffer.
    ///
    /// Returns a `num_rows x samples` array, one row per channel.
    pub fn get_board_data(
        &self,
        num_samples: Option<usize>,
        preset: BrainFlowPreset,
    ) -> Result<Array2<f64>> {
        let available = self.get_board_data_count(preset)?;
        let samples = num_samples.map_or(available, |n| n.min(available));
        let rows = self.controller.num_rows(self.master_board, preset)?;

        let num_samples = to_c_int(samples, "num_samples")?;
        let mut buf = vec![0.0; buffer_len(rows, samples, "board data")?];
        // SAFETY: the buffer holds rows * samples values.
        let code = unsafe {
            (self.controller.api().get_board_data)(
                num_samples,
                preset as c_int,
                buf.as_mut_ptr(),
                self.id(),
                self.json(),
            )
        };
        check(code, "get_board_data")?;
        to_array2(buf, rows, samples)
    }

    /// Latest `num_samples` samples, or fewer if the buffer holds less.
    /// Data stays in the ring buffer.
    pub fn get_current_board_data(
        &self,
        num_samples: usize,
        preset: BrainFlowPreset,
    ) -> Result<Array2<f64>> {
        let requested = to_c_int(num_samples, "num_samples")?;
        let rows = self.controller.num_rows(self.master_board, preset)?;

        let mut buf = vec![0.0; buffer_len(rows, num_samples, "board data")?];
        let mut returned: c_int = 0;
        // SAFETY: the buffer holds rows * num_samples values.
        let code = unsafe {
            (self.controller.api().get_current_board_data)(
                requested,
                preset as c_int,
                buf.as_mut_ptr(),
                &mut returned,
                self.id(),
                self.json(),
            )
        };
        check(code, "get_current_board_data")?;
        to_array2(buf, rows, used_len(returned, num_samples))
    }
}
