//! Period registry: the selectable period list, in header order.

use crate::dataset::ColumnSet;

/// Periods available for selection. Empty until a roster is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodRegistry {
    periods: Vec<String>,
}

impl PeriodRegistry {
    /// Registry with no periods, used before loading completes or after it fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Derive the registry from the non-identity columns.
    #[must_use]
    pub fn from_columns(columns: &ColumnSet) -> Self {
        Self {
            periods: columns.periods().to_vec(),
        }
    }

    #[must_use]
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.periods.get(index).map(String::as_str)
    }

    /// First position of a period name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.periods.iter().position(|p| p == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.periods.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
