//! TUI message types (Elm Messages).

use std::sync::Arc;

use dutydraw_core::dataset::Dataset;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// The roster finished loading.
    Loaded(Arc<Dataset>),
    /// The roster could not be loaded. Carries the user-facing message.
    LoadFailed(String),
    /// Line for the log panel.
    Log(String),
    /// Tick event: fire due reveal timers.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
}
