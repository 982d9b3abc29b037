//! # dutydraw-cli
//!
//! CLI reveal output, the slot spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliRevealPresenter, RevealStyle};
