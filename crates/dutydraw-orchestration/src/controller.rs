//! Draw control: turns period selections and triggers into reveals.

use tracing::{debug, info};

use dutydraw_core::cancel::CancellationToken;
use dutydraw_core::error::DrawError;
use dutydraw_core::sequencer::IgnoredReason;
use dutydraw_core::session::DrawSession;

use crate::interfaces::{RevealPresenter, RevealRequest};

/// Result of one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A record was handed to the presenter.
    Revealed(RevealRequest),
    /// Guarded no-op.
    Ignored(IgnoredReason),
}

impl TriggerOutcome {
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

/// Owns a draw session and the presenter that shows its reveals.
pub struct DrawController<P> {
    session: DrawSession,
    presenter: P,
}

impl<P: RevealPresenter> DrawController<P> {
    #[must_use]
    pub fn new(session: DrawSession, presenter: P) -> Self {
        Self { session, presenter }
    }

    /// Select a period by name: resets the cursor and clears the output.
    pub fn select_period(&mut self, name: &str) -> Result<(), DrawError> {
        self.session.select_period(name)?;
        self.presenter.clear();
        info!(period = name, roster = self.session.dataset().len(), "draw session started");
        Ok(())
    }

    /// Select a period by registry position.
    pub fn select_index(&mut self, index: usize) -> Result<(), DrawError> {
        self.session.select_index(index)?;
        self.presenter.clear();
        info!(
            period = self.session.selected_period().unwrap_or_default(),
            roster = self.session.dataset().len(),
            "draw session started"
        );
        Ok(())
    }

    /// Reveal the next record, or report why nothing happened.
    pub fn trigger(&mut self) -> TriggerOutcome {
        match self.session.trigger() {
            Ok(draw) => {
                let request = RevealRequest::from_draw(&draw);
                self.presenter.present(&request);
                debug!(
                    index = request.index,
                    remaining = self.session.remaining(),
                    "record revealed"
                );
                TriggerOutcome::Revealed(request)
            }
            Err(reason) => {
                debug!(%reason, "trigger ignored");
                self.presenter.present_ignored(reason);
                TriggerOutcome::Ignored(reason)
            }
        }
    }

    /// Trigger until the roster is exhausted or `limit` reveals have been made,
    /// checking for cancellation before each one.
    pub fn run_to_end(
        &mut self,
        cancel: &CancellationToken,
        limit: Option<usize>,
    ) -> Result<Vec<RevealRequest>, DrawError> {
        let mut revealed = Vec::new();
        while limit.map_or(true, |max| revealed.len() < max) {
            cancel.check_cancelled()?;
            match self.trigger() {
                TriggerOutcome::Revealed(request) => revealed.push(request),
                TriggerOutcome::Ignored(_) => break,
            }
        }
        Ok(revealed)
    }

    #[must_use]
    pub fn session(&self) -> &DrawSession {
        &self.session
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use dutydraw_core::dataset::Dataset;
    use dutydraw_core::sequencer::TriggerLabel;

    use crate::board::{RevealPhase, ResultsBoard};

    /// Presenter recording every call.
    #[derive(Default)]
    struct Recording {
        shown: Vec<RevealRequest>,
        clears: usize,
        ignored: Vec<IgnoredReason>,
    }

    impl RevealPresenter for Recording {
        fn present(&mut self, request: &RevealRequest) {
            self.shown.push(request.clone());
        }
        fn clear(&mut self) {
            self.clears += 1;
            self.shown.clear();
        }
        fn present_ignored(&mut self, reason: IgnoredReason) {
            self.ignored.push(reason);
        }
    }

    const SAMPLE: &str = "id,name,P1,P2\n1,Alice,X,Y\n2,Bob,Y,X\n";

    fn controller<P: RevealPresenter>(text: &str, presenter: P) -> DrawController<P> {
        let ds = Arc::new(Dataset::parse(text).unwrap());
        DrawController::new(DrawSession::new(ds), presenter)
    }

    #[test]
    fn alice_bob_scenario() {
        let mut c = controller(SAMPLE, Recording::default());
        c.select_period("P1").unwrap();

        let values: Vec<Option<String>> = (0..2)
            .map(|_| match c.trigger() {
                TriggerOutcome::Revealed(r) => r.value,
                TriggerOutcome::Ignored(r) => panic!("ignored: {r}"),
            })
            .collect();
        assert_eq!(values, vec![Some("X".to_string()), Some("Y".to_string())]);

        assert_eq!(c.trigger(), TriggerOutcome::Ignored(IgnoredReason::Exhausted));
        assert_eq!(c.session().label(), TriggerLabel::Complete);
        assert_eq!(c.presenter().shown.len(), 2);
    }

    #[test]
    fn period_change_clears_output() {
        let mut c = controller(SAMPLE, Recording::default());
        c.select_period("P1").unwrap();
        c.trigger();
        c.trigger();
        c.select_period("P2").unwrap();
        assert!(c.presenter().shown.is_empty());
        assert_eq!(c.presenter().clears, 2);
        assert_eq!(c.session().cursor(), 0);
    }

    #[test]
    fn unknown_period_keeps_output() {
        let mut c = controller(SAMPLE, Recording::default());
        c.select_period("P1").unwrap();
        c.trigger();
        assert!(c.select_period("nope").is_err());
        assert_eq!(c.presenter().shown.len(), 1);
        assert_eq!(c.session().cursor(), 1);
    }

    #[test]
    fn trigger_before_selection_is_reported() {
        let mut c = controller(SAMPLE, Recording::default());
        assert!(!c.trigger().is_revealed());
        assert_eq!(c.presenter().ignored, [IgnoredReason::NoPeriod]);
    }

    #[test]
    fn header_only_never_reveals() {
        let mut c = controller("id,name,P1\n", Recording::default());
        c.select_index(0).unwrap();
        for _ in 0..4 {
            assert_eq!(c.trigger(), TriggerOutcome::Ignored(IgnoredReason::EmptyRoster));
        }
        assert!(c.presenter().shown.is_empty());
    }

    #[test]
    fn run_to_end_respects_limit() {
        let mut c = controller(SAMPLE, NullPresenterCount::default());
        c.select_period("P2").unwrap();
        let first = c.run_to_end(&CancellationToken::new(), Some(1)).unwrap();
        assert_eq!(first.len(), 1);
        let rest = c.run_to_end(&CancellationToken::new(), None).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].label, "2. Bob");
    }

    #[test]
    fn run_to_end_stops_when_cancelled() {
        let mut c = controller(SAMPLE, NullPresenterCount::default());
        c.select_period("P1").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(matches!(
            c.run_to_end(&cancel, None),
            Err(DrawError::Cancelled)
        ));
        assert_eq!(c.session().cursor(), 0);
    }

    #[test]
    fn board_keeps_value_after_period_change() {
        let universe = vec!["X".to_string(), "Y".to_string()];
        let mut c = controller(SAMPLE, ResultsBoard::with_seed(universe, 9));
        c.select_period("P1").unwrap();
        c.trigger();
        let id = c.presenter().latest().unwrap().id;

        // Re-select before the reveal timer fires; the unit is detached.
        c.select_period("P2").unwrap();
        assert!(c.presenter().is_empty());
        let later = Instant::now() + Duration::from_secs(5);
        c.presenter_mut().advance(later);
        assert!(c.presenter().get(id).is_none());

        // The new session reveals P2 values.
        c.trigger();
        let unit = c.presenter().latest().unwrap();
        assert_eq!(unit.final_value.as_deref(), Some("Y"));
        assert_eq!(unit.phase, RevealPhase::Spinning);
    }

    #[derive(Default)]
    struct NullPresenterCount(usize);

    impl RevealPresenter for NullPresenterCount {
        fn present(&mut self, _request: &RevealRequest) {
            self.0 += 1;
        }
        fn clear(&mut self) {}
    }
}
