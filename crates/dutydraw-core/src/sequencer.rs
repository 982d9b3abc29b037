//! Draw sequencer: a cursor over the roster, advanced one record per trigger.

use std::fmt;

/// Sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// No period selected, or the cursor was just reset.
    Idle,
    /// At least one record drawn, more remain.
    Active,
    /// Every record has been drawn.
    Exhausted,
}

/// Presentation of the trigger control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerLabel {
    /// Before any period is chosen. Enabled but inert.
    Default,
    /// A period is selected and records remain.
    Start,
    /// All records drawn. Disabled.
    Complete,
}

impl TriggerLabel {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Default => "Draw",
            Self::Start => "Start draw!",
            Self::Complete => "All done!",
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Complete)
    }
}

/// Why a trigger did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    NoPeriod,
    EmptyRoster,
    Exhausted,
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPeriod => write!(f, "no period selected"),
            Self::EmptyRoster => write!(f, "roster is empty"),
            Self::Exhausted => write!(f, "every student has been drawn"),
        }
    }
}

/// Cursor in `[0, roster_len]`, non-decreasing until the next reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSequencer {
    roster_len: usize,
    cursor: usize,
    armed: bool,
}

impl DrawSequencer {
    /// New sequencer with no period selected.
    #[must_use]
    pub fn new(roster_len: usize) -> Self {
        Self {
            roster_len,
            cursor: 0,
            armed: false,
        }
    }

    /// Start a new draw session: cursor back to 0, trigger enabled.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.armed = true;
    }

    /// Drop the selection: cursor back to 0, trigger inert.
    pub fn disarm(&mut self) {
        self.cursor = 0;
        self.armed = false;
    }

    /// Take the index of the next record to reveal and move past it.
    pub fn advance(&mut self) -> Result<usize, IgnoredReason> {
        if !self.armed {
            return Err(IgnoredReason::NoPeriod);
        }
        if self.roster_len == 0 {
            return Err(IgnoredReason::EmptyRoster);
        }
        if self.cursor >= self.roster_len {
            return Err(IgnoredReason::Exhausted);
        }
        let index = self.cursor;
        self.cursor += 1;
        Ok(index)
    }

    #[must_use]
    pub fn state(&self) -> DrawState {
        if self.armed && self.roster_len > 0 && self.cursor == self.roster_len {
            DrawState::Exhausted
        } else if self.cursor == 0 {
            DrawState::Idle
        } else {
            DrawState::Active
        }
    }

    #[must_use]
    pub fn label(&self) -> TriggerLabel {
        if !self.armed {
            TriggerLabel::Default
        } else if self.state() == DrawState::Exhausted {
            TriggerLabel::Complete
        } else {
            TriggerLabel::Start
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.roster_len
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Records left to draw in this session.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.roster_len - self.cursor
    }
}
