//! # dutydraw-tui
//!
//! Interactive reveal dashboard using ratatui with Elm architecture.

pub mod board;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod loader;
pub mod logs;
pub mod messages;
pub mod model;
pub mod periods;
pub mod scroll;
pub mod styles;

pub use loader::spawn_loader;
pub use messages::TuiMessage;
pub use model::{LoadStatus, TuiApp};
pub use scroll::ScrollState;
