//! Presentation interfaces.

use serde::Serialize;

use dutydraw_core::sequencer::IgnoredReason;
use dutydraw_core::session::Draw;

/// Everything a presenter needs to reveal one record. The value is captured
/// when the trigger fires, so later period changes cannot alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealRequest {
    /// Roster position (0-based).
    pub index: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    /// `"{id}. {name}"`.
    pub label: String,
    pub period: String,
    /// `Record[Period]`; `None` when the row did not reach that column.
    pub value: Option<String>,
}

impl RevealRequest {
    #[must_use]
    pub fn from_draw(draw: &Draw<'_>) -> Self {
        Self {
            index: draw.index,
            id: draw.record.id().map(str::to_owned),
            name: draw.record.name().map(str::to_owned),
            label: draw.label(),
            period: draw.period.to_string(),
            value: draw.value().map(str::to_owned),
        }
    }
}

/// Trait for revealing draws to the user.
pub trait RevealPresenter {
    /// Start revealing one record. Must return without waiting for the
    /// animation to finish.
    fn present(&mut self, request: &RevealRequest);

    /// Remove every reveal from the output surface.
    fn clear(&mut self);

    /// A trigger was ignored.
    fn present_ignored(&mut self, _reason: IgnoredReason) {}
}

/// Presenter that shows nothing.
pub struct NullPresenter;

impl RevealPresenter for NullPresenter {
    fn present(&mut self, _request: &RevealRequest) {}
    fn clear(&mut self) {}
}
