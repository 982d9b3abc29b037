//! Results board: the append-only list of reveal units and their timers.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use dutydraw_core::filler::build_filler;

use crate::animation::spin_frame;
use crate::interfaces::{RevealPresenter, RevealRequest};
use crate::timeline::{
    TimerKind, TimerQueue, UnitId, APPEAR_DELAY, IMPACT_DURATION, REVEAL_DELAY,
};

/// Where a unit is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Cycling through the filler.
    Spinning,
    /// Showing the final value.
    Revealed,
}

/// One animated reveal block.
#[derive(Debug, Clone)]
pub struct RevealUnit {
    pub id: UnitId,
    /// Roster position of the revealed record.
    pub index: usize,
    pub label: String,
    pub period: String,
    pub filler: Vec<String>,
    pub final_value: Option<String>,
    pub created_at: Instant,
    /// Set by the entrance transition.
    pub visible: bool,
    pub phase: RevealPhase,
    impact_started: Option<Instant>,
}

impl RevealUnit {
    /// Text shown in the slot at `now`: a filler entry while spinning, the
    /// final value once revealed.
    #[must_use]
    pub fn slot_text(&self, now: Instant) -> Option<&str> {
        match self.phase {
            RevealPhase::Spinning => {
                let elapsed = now.saturating_duration_since(self.created_at);
                spin_frame(elapsed, self.filler.len()).map(|i| self.filler[i].as_str())
            }
            RevealPhase::Revealed => self.final_value.as_deref(),
        }
    }

    /// Whether the impact cue is playing.
    #[must_use]
    pub fn is_impacting(&self) -> bool {
        self.impact_started.is_some()
    }

    /// Time since the impact cue started, while it plays.
    #[must_use]
    pub fn impact_elapsed(&self, now: Instant) -> Option<Duration> {
        self.impact_started
            .map(|start| now.saturating_duration_since(start))
    }

    fn apply(&mut self, kind: TimerKind, due: Instant, timers: &mut TimerQueue) {
        match kind {
            TimerKind::Appear => self.visible = true,
            TimerKind::FinalReveal => {
                self.phase = RevealPhase::Revealed;
                self.filler.clear();
                self.impact_started = Some(due);
                // The cue's completion listener: fires once, then is gone.
                timers.schedule(due + IMPACT_DURATION, self.id, TimerKind::ImpactEnd);
            }
            TimerKind::ImpactEnd => {
                self.impact_started = None;
            }
        }
    }
}

/// Append-only board of reveal units, cleared only when the period changes.
#[derive(Debug)]
pub struct ResultsBoard {
    units: Vec<RevealUnit>,
    timers: TimerQueue,
    universe: Vec<String>,
    rng: StdRng,
    next_id: u64,
}

impl ResultsBoard {
    /// Board drawing filler from `universe`.
    #[must_use]
    pub fn new(universe: Vec<String>) -> Self {
        Self::with_rng(universe, StdRng::from_entropy())
    }

    /// Board with a deterministic shuffle.
    #[must_use]
    pub fn with_seed(universe: Vec<String>, seed: u64) -> Self {
        Self::with_rng(universe, StdRng::seed_from_u64(seed))
    }

    fn with_rng(universe: Vec<String>, rng: StdRng) -> Self {
        Self {
            units: Vec::new(),
            timers: TimerQueue::new(),
            universe,
            rng,
            next_id: 0,
        }
    }

    /// Append a unit for `request` created at `now` and schedule its timers.
    pub fn present_at(&mut self, request: &RevealRequest, now: Instant) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;

        let filler = build_filler(&self.universe, &mut self.rng);
        self.units.push(RevealUnit {
            id,
            index: request.index,
            label: request.label.clone(),
            period: request.period.clone(),
            filler,
            final_value: request.value.clone(),
            created_at: now,
            visible: false,
            phase: RevealPhase::Spinning,
            impact_started: None,
        });
        self.timers.schedule(now + APPEAR_DELAY, id, TimerKind::Appear);
        self.timers
            .schedule(now + REVEAL_DELAY, id, TimerKind::FinalReveal);
        debug!(unit = %id, label = %request.label, "reveal unit appended");
        id
    }

    /// Fire every timer due at `now`. Returns how many fired.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now) {
            fired += 1;
            match self.units.binary_search_by_key(&timer.unit, |u| u.id) {
                Ok(pos) => self.units[pos].apply(timer.kind, timer.due, &mut self.timers),
                Err(_) => trace!(unit = %timer.unit, kind = ?timer.kind, "timer for cleared unit"),
            }
        }
        fired
    }

    /// Drop every unit. Pending timers stay queued and fire into nothing.
    pub fn clear_units(&mut self) {
        self.units.clear();
    }

    #[must_use]
    pub fn units(&self) -> &[RevealUnit] {
        &self.units
    }

    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&RevealUnit> {
        self.units
            .binary_search_by_key(&id, |u| u.id)
            .ok()
            .map(|pos| &self.units[pos])
    }

    #[must_use]
    pub fn latest(&self) -> Option<&RevealUnit> {
        self.units.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Timers still queued, including ones for cleared units.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether any unit is still spinning or playing its impact cue.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.units
            .iter()
            .any(|u| u.phase == RevealPhase::Spinning || u.is_impacting())
    }
}

impl RevealPresenter for ResultsBoard {
    fn present(&mut self, request: &RevealRequest) {
        self.present_at(request, Instant::now());
    }

    fn clear(&mut self) {
        self.clear_units();
    }
}
