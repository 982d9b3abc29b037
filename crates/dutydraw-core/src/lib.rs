//! # dutydraw-core
//!
//! Core library for DutyDraw: roster loading, the period registry, the draw
//! sequencer state machine, and the balanced duty assigner.

pub mod assign;
pub mod cancel;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod filler;
pub mod registry;
pub mod sequencer;
pub mod session;

// Re-exports
pub use constants::{exit_codes, DEFAULT_DATA_PATH, DELIMITER, IDENTITY_COLUMNS};
pub use dataset::{ColumnSet, Dataset, Record};
pub use error::{DrawError, LoadError};
pub use registry::PeriodRegistry;
pub use sequencer::{DrawSequencer, DrawState, IgnoredReason, TriggerLabel};
pub use session::{Draw, DrawSession};
