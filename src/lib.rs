//! BrainFlow bindings - acquisition, signal processing and classification
//! for biosensor boards.
//!
//! The work is done by three native libraries loaded at runtime:
//!
//! - BoardController: board sessions and static board information
//! - DataHandler: filtering, transforms and file I/O
//! - MLModule: classifiers
//!
//! This crate resolves the library files for the current platform, binds
//! their C ABI and wraps every call in a typed, `Result`-returning API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                Typed API                     │
//! │  ┌─────────────┐ ┌────────────┐ ┌─────────┐  │
//! │  │ BoardShim / │ │ DataFilter │ │ MlModel │  │
//! │  │ BoardCtrl   │ │            │ │         │  │
//! │  └─────────────┘ └────────────┘ └─────────┘  │
//! │   params (serde JSON) · ndarray reshaping    │
//! └──────────────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌──────────────────────────────────────────────┐
//! │     FFI Layer (libloading symbol tables)     │
//! │  exit code -> BrainFlowError · LibraryCell   │
//! └──────────────────────────────────────────────┘
//!                   │
//!                   ▼
//!   libBoardController · libDataHandler · libMLModule
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use brainflow::{BoardId, BoardShim, BrainFlowInputParams, BrainFlowPreset, DataFilter};
//! use brainflow::constants::FilterType;
//!
//! # fn main() -> brainflow::Result<()> {
//! let board = BoardShim::new(BoardId::SyntheticBoard, BrainFlowInputParams::default())?;
//! board.prepare_session()?;
//! board.start_stream(brainflow::DEFAULT_BUFFER_SIZE, "")?;
//! std::thread::sleep(std::time::Duration::from_secs(5));
//! board.stop_stream()?;
//! let mut data = board.get_board_data(None, BrainFlowPreset::DefaultPreset)?;
//! board.release_session()?;
//!
//! let filter = DataFilter::get()?;
//! let eeg = board.controller().eeg_channels(board.board_id(), BrainFlowPreset::DefaultPreset)?;
//! let rate = board.controller().sampling_rate(board.board_id(), BrainFlowPreset::DefaultPreset)?;
//! for channel in eeg {
//!     let mut row = data.row(channel).to_vec();
//!     filter.perform_bandpass(&mut row, rate, 3.0, 45.0, 4, FilterType::Butterworth, 0.0)?;
//!     data.row_mut(channel).assign(&ndarray::Array1::from(row));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Library files are searched in the directories given to [`configure`],
//! then `BRAINFLOW_LIB_DIR`, then the directory picked at build time, then
//! next to the executable, then through the system loader.

pub mod board;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod ffi;
pub mod filter;
pub mod logger;
pub mod ml;

#[cfg(test)]
mod test_support;

pub use board::{BoardController, BoardShim, DEFAULT_BUFFER_SIZE};
pub use config::{configure, LibraryConfig};
pub use constants::{BoardId, BrainFlowExitCode, BrainFlowPreset, LogLevel};
pub use data::{BoardDescription, BrainFlowInputParams, BrainFlowModelParams};
pub use error::{BrainFlowError, Result};
pub use filter::DataFilter;
pub use logger::NativeLogger;
pub use ml::{MlModel, MlModule};
