//! Draw session: the roster, its registry, and the sequencer, owned together.

use std::sync::Arc;

use tracing::debug;

use crate::dataset::{Dataset, Record};
use crate::error::DrawError;
use crate::registry::PeriodRegistry;
use crate::sequencer::{DrawSequencer, DrawState, IgnoredReason, TriggerLabel};

/// One record handed out by a trigger, paired with the period it is drawn for.
#[derive(Debug, Clone, Copy)]
pub struct Draw<'a> {
    /// Roster position of the record.
    pub index: usize,
    pub record: &'a Record,
    pub period: &'a str,
}

impl Draw<'_> {
    /// `Record[Period]`.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.record.get(self.period)
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.record.display_label()
    }
}

/// Session state for one loaded roster.
#[derive(Debug, Clone)]
pub struct DrawSession {
    dataset: Arc<Dataset>,
    registry: PeriodRegistry,
    sequencer: DrawSequencer,
    selected: Option<usize>,
}

impl DrawSession {
    /// Session in its load-complete state: idle, nothing selected.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let registry = PeriodRegistry::from_columns(dataset.columns());
        let sequencer = DrawSequencer::new(dataset.len());
        Self {
            dataset,
            registry,
            sequencer,
            selected: None,
        }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn registry(&self) -> &PeriodRegistry {
        &self.registry
    }

    #[must_use]
    pub fn selected_period(&self) -> Option<&str> {
        self.selected.and_then(|i| self.registry.get(i))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select a period by name, starting a new draw session.
    pub fn select_period(&mut self, name: &str) -> Result<(), DrawError> {
        let index = self
            .registry
            .position(name)
            .ok_or_else(|| DrawError::UnknownPeriod(name.to_string()))?;
        self.select_index(index)
    }

    /// Select a period by registry position, starting a new draw session.
    pub fn select_index(&mut self, index: usize) -> Result<(), DrawError> {
        let Some(period) = self.registry.get(index) else {
            return Err(DrawError::UnknownPeriod(format!("#{index}")));
        };
        debug!(period, "period selected; draw reset");
        self.selected = Some(index);
        self.sequencer.reset();
        Ok(())
    }

    /// Deselect, leaving the trigger inert.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.sequencer.disarm();
    }

    /// Hand out the record under the cursor and advance.
    pub fn trigger(&mut self) -> Result<Draw<'_>, IgnoredReason> {
        if self.selected.is_none() {
            return Err(IgnoredReason::NoPeriod);
        }
        let index = self.sequencer.advance()?;
        let period = self
            .selected
            .and_then(|i| self.registry.get(i))
            .ok_or(IgnoredReason::NoPeriod)?;
        let record = self
            .dataset
            .record(index)
            .ok_or(IgnoredReason::Exhausted)?;
        Ok(Draw {
            index,
            record,
            period,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.sequencer.cursor()
    }

    #[must_use]
    pub fn state(&self) -> DrawState {
        self.sequencer.state()
    }

    #[must_use]
    pub fn label(&self) -> TriggerLabel {
        self.sequencer.label()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sequencer.remaining()
    }
}
