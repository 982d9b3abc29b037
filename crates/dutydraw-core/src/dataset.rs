//! Roster loading.
//!
//! The resource is read positionally: the first record is the header, and
//! field *i* of every following record belongs to header column *i*. Rows
//! shorter than the header leave their trailing fields undefined, rows longer
//! than the header have the excess ignored. Columns 0 and 1 are the identity
//! fields; every later column is a period.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::constants::{DELIMITER, IDENTITY_COLUMNS, UTF8_BOM};
use crate::error::LoadError;

/// Ordered header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    /// Build a column set, requiring both identity columns.
    pub fn new(names: Vec<String>) -> Result<Self, LoadError> {
        if names.len() < IDENTITY_COLUMNS {
            return Err(LoadError::MissingIdentityColumns { found: names.len() });
        }
        Ok(Self { names })
    }

    /// All column names in header order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the sequence-number column.
    #[must_use]
    pub fn id_column(&self) -> &str {
        &self.names[0]
    }

    /// Name of the display-name column.
    #[must_use]
    pub fn name_column(&self) -> &str {
        &self.names[1]
    }

    /// Period columns, in header order.
    #[must_use]
    pub fn periods(&self) -> &[String] {
        &self.names[IDENTITY_COLUMNS..]
    }

    /// Position of a column. A duplicated name resolves to its last occurrence,
    /// the same way a later assignment overwrites an earlier one.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().rposition(|n| n == name)
    }
}

/// One roster entry. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    columns: Arc<ColumnSet>,
    values: Vec<Option<String>>,
}

impl Record {
    fn from_fields(columns: Arc<ColumnSet>, fields: &csv::StringRecord) -> Self {
        let values = (0..columns.len())
            .map(|i| fields.get(i).map(str::to_owned))
            .collect();
        Self { columns, values }
    }

    /// Value of a named field. `None` when the column is unknown or the row
    /// was too short to reach it.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.columns
            .position(field)
            .and_then(|i| self.value_at(i))
    }

    /// Value at a header position.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }

    /// Sequence number field.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.value_at(0)
    }

    /// Display name field.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.value_at(1)
    }

    /// `"{id}. {name}"`, with undefined identity fields rendered empty.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{}. {}", self.id().unwrap_or(""), self.name().unwrap_or(""))
    }

    /// Column set this record was read against.
    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }
}

/// Loaded roster with its derived period list and department universe.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Arc<ColumnSet>,
    roster: Vec<Record>,
    universe: Vec<String>,
}

impl Dataset {
    /// Read and parse a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Unreachable {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_bytes(&bytes)?;
        info!(
            path = %path.display(),
            records = dataset.len(),
            periods = dataset.periods().len(),
            "roster loaded"
        );
        Ok(dataset)
    }

    /// Parse roster text.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Parse raw roster bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(LoadError::Empty);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(DELIMITER)
            .from_reader(bytes);
        let mut records = reader.records();

        let header = records.next().ok_or(LoadError::Empty)??;
        let columns = Arc::new(ColumnSet::new(
            header.iter().map(str::to_owned).collect(),
        )?);

        let mut roster = Vec::new();
        let mut short_rows = 0usize;
        for result in records {
            let fields = result?;
            if fields.len() < columns.len() {
                short_rows += 1;
            }
            roster.push(Record::from_fields(Arc::clone(&columns), &fields));
        }
        if short_rows > 0 {
            debug!(short_rows, "rows shorter than header; trailing fields left undefined");
        }

        let universe = department_universe(&columns, &roster);
        Ok(Self {
            columns,
            roster,
            universe,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Records in draw order.
    #[must_use]
    pub fn roster(&self) -> &[Record] {
        &self.roster
    }

    #[must_use]
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.roster.get(index)
    }

    #[must_use]
    pub fn periods(&self) -> &[String] {
        self.columns.periods()
    }

    /// Distinct period values in first-seen order.
    #[must_use]
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

fn department_universe(columns: &ColumnSet, roster: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut universe = Vec::new();
    for record in roster {
        for index in IDENTITY_COLUMNS..columns.len() {
            let Some(value) = record.value_at(index) else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            if seen.insert(value) {
                universe.push(value.to_owned());
            }
        }
    }
    universe
}
