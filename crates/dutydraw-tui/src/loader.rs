//! Background roster loading for the TUI.

use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::warn;

use dutydraw_core::dataset::Dataset;

use crate::messages::TuiMessage;

/// Load the roster at `path` off the UI thread, reporting through `tx`.
pub fn spawn_loader(path: PathBuf, tx: Sender<TuiMessage>) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = tx.send(TuiMessage::Log(format!("Loading {}", path.display())));
        let msg = match Dataset::load(&path) {
            Ok(dataset) => TuiMessage::Loaded(Arc::new(dataset)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "roster load failed");
                TuiMessage::LoadFailed(err.to_string())
            }
        };
        // The UI may already be gone.
        let _ = tx.send(msg);
    })
}
