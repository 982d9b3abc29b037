//! Balanced duty assignment.
//!
//! Fills in empty cells of the target period columns so that no student is
//! given a department they already held in a history period, and departments
//! stay as evenly staffed as possible. The table is then ordered by student
//! number and written back out as the CSV the reveal reads.

use std::cmp::Ordering;
use std::io::Write;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::constants::{DELIMITER, IDENTITY_COLUMNS, UTF8_BOM};
use crate::dataset::Dataset;
use crate::error::DrawError;

/// Mutable copy of a roster for assignment. Undefined cells read as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AssignmentTable {
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let columns = dataset.columns().names().to_vec();
        let rows = dataset
            .roster()
            .iter()
            .map(|record| {
                (0..columns.len())
                    .map(|i| record.value_at(i).unwrap_or("").to_string())
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().rposition(|c| c == name)
    }

    /// Cell value by row and column name.
    #[must_use]
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Index of `name`, appending an all-empty column if it does not exist.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.columns.len() - 1
    }

    /// Stable sort by the id column: numerically when every id is an integer,
    /// lexicographically otherwise.
    pub fn sort_by_id(&mut self) {
        let numeric: Option<Vec<u64>> = self.rows.iter().map(|r| r[0].trim().parse().ok()).collect();
        match numeric {
            Some(_) => self.rows.sort_by(|a, b| compare_numeric(&a[0], &b[0])),
            None => self.rows.sort_by(|a, b| a[0].cmp(&b[0])),
        }
    }

    /// Write as CSV with a leading byte-order mark.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<(), csv::Error> {
        writer.write_all(UTF8_BOM)?;
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(writer);
        csv_writer.write_record(&self.columns)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write to a file, replacing it.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), DrawError> {
        let path = path.as_ref();
        let to_write_error = |source: csv::Error| DrawError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::create(path).map_err(|e| to_write_error(e.into()))?;
        self.write_csv(std::io::BufWriter::new(file))
            .map_err(to_write_error)?;
        info!(path = %path.display(), rows = self.rows.len(), "assignment written");
        Ok(())
    }
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a: u64 = a.trim().parse().unwrap_or(u64::MAX);
    let b: u64 = b.trim().parse().unwrap_or(u64::MAX);
    a.cmp(&b)
}

/// What to assign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPlan {
    /// Every department a student can be placed in.
    pub departments: Vec<String>,
    /// Periods whose past assignments a student must not repeat.
    pub history: Vec<String>,
    /// Periods to fill in, in order. Already-filled cells are kept.
    pub targets: Vec<String>,
}

impl AssignmentPlan {
    /// Plan that uses the roster's own department universe and every period
    /// column as history.
    #[must_use]
    pub fn for_dataset(dataset: &Dataset, targets: Vec<String>) -> Self {
        Self {
            departments: dataset.universe().to_vec(),
            history: dataset.periods().to_vec(),
            targets,
        }
    }
}

/// A student who had already held every department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedRepeat {
    pub period: String,
    pub student: String,
    pub department: String,
}

/// Outcome of an assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentReport {
    /// Cells filled in.
    pub assigned: usize,
    /// Placements that had to repeat a past department.
    pub forced_repeats: Vec<ForcedRepeat>,
}

/// Fill the plan's target columns, then sort the table by student number.
pub fn assign_duties<R: Rng + ?Sized>(
    table: &mut AssignmentTable,
    plan: &AssignmentPlan,
    rng: &mut R,
) -> Result<AssignmentReport, DrawError> {
    if plan.departments.is_empty() {
        return Err(DrawError::Assign("no departments to assign from".into()));
    }
    if let Some(target) = plan
        .targets
        .iter()
        .find(|t| table.column_index(t).is_some_and(|i| i < IDENTITY_COLUMNS))
    {
        return Err(DrawError::Assign(format!(
            "'{target}' is an identity column, not a period"
        )));
    }

    let target_columns: Vec<usize> = plan.targets.iter().map(|t| table.ensure_column(t)).collect();
    let mut history_columns: Vec<usize> = plan
        .history
        .iter()
        .filter_map(|h| table.column_index(h))
        .filter(|&i| i >= IDENTITY_COLUMNS)
        .collect();
    for &col in &target_columns {
        if !history_columns.contains(&col) {
            history_columns.push(col);
        }
    }

    let mut report = AssignmentReport::default();
    for (period, &col) in plan.targets.iter().zip(&target_columns) {
        let mut counts: Vec<usize> = plan
            .departments
            .iter()
            .map(|d| table.rows.iter().filter(|r| &r[col] == d).count())
            .collect();

        for row in &mut table.rows {
            if !row[col].trim().is_empty() {
                continue;
            }

            let available: Vec<usize> = (0..plan.departments.len())
                .filter(|&d| {
                    !history_columns
                        .iter()
                        .any(|&h| row[h] == plan.departments[d])
                })
                .collect();

            let chosen = if available.is_empty() {
                let least = least_staffed(&counts, 0..counts.len())[0];
                warn!(
                    period = %period,
                    student = %row[1],
                    "student has held every department; repeating the least staffed one"
                );
                report.forced_repeats.push(ForcedRepeat {
                    period: period.clone(),
                    student: row[1].clone(),
                    department: plan.departments[least].clone(),
                });
                least
            } else {
                let candidates = least_staffed(&counts, available.into_iter());
                *candidates
                    .choose(rng)
                    .ok_or_else(|| DrawError::Assign("no candidate department".into()))?
            };

            row[col].clone_from(&plan.departments[chosen]);
            counts[chosen] += 1;
            report.assigned += 1;
        }
        debug!(period = %period, ?counts, "period assigned");
    }

    table.sort_by_id();
    info!(
        assigned = report.assigned,
        forced = report.forced_repeats.len(),
        "duty assignment complete"
    );
    Ok(report)
}

/// Departments among `pool` sharing the lowest head-count, in department order.
fn least_staffed(counts: &[usize], pool: impl Iterator<Item = usize>) -> Vec<usize> {
    let pool: Vec<usize> = pool.collect();
    let Some(min) = pool.iter().map(|&d| counts[d]).min() else {
        return Vec::new();
    };
    pool.into_iter().filter(|&d| counts[d] == min).collect()
}
