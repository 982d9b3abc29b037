//! Fire-and-forget reveal timers.
//!
//! Timers are never cancelled. A timer whose unit has since been cleared
//! from the board fires into nothing.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between inserting a unit and its entrance transition.
pub const APPEAR_DELAY: Duration = Duration::from_millis(10);

/// Delay between inserting a unit and replacing its filler with the value.
pub const REVEAL_DELAY: Duration = Duration::from_millis(2000);

/// Length of the impact cue played when a value lands.
pub const IMPACT_DURATION: Duration = Duration::from_millis(450);

/// Identifier of a reveal unit. Never reused within a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transition a timer triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Entrance transition.
    Appear,
    /// Swap the filler for the final value and start the impact cue.
    FinalReveal,
    /// One-shot completion of the impact cue.
    ImpactEnd,
}

/// A scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub due: Instant,
    pub unit: UnitId,
    pub kind: TimerKind,
    seq: u64,
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deadline-ordered timer queue. Timers with equal deadlines fire in the
/// order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, unit: UnitId, kind: TimerKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Timer {
            due,
            unit,
            kind,
            seq,
        }));
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        match self.heap.peek() {
            Some(Reverse(timer)) if timer.due <= now => self.heap.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    /// Deadline of the next pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.heap.peek().map(|Reverse(t)| t.due)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
