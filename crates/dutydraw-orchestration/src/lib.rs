//! # dutydraw-orchestration
//!
//! Reveal presentation, timer sequencing, and draw control shared by the
//! CLI and TUI frontends.

pub mod animation;
pub mod board;
pub mod controller;
pub mod interfaces;
pub mod timeline;

pub use board::{RevealPhase, RevealUnit, ResultsBoard};
pub use controller::{DrawController, TriggerOutcome};
pub use interfaces::{NullPresenter, RevealPresenter, RevealRequest};
pub use timeline::{TimerKind, TimerQueue, UnitId};
