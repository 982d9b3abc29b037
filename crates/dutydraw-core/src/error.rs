//! Error types for loading and drawing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The roster could not be loaded. Terminal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be opened or read.
    #[error("cannot read roster from {}: {source}", path.display())]
    Unreachable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resource holds no header line.
    #[error("roster resource is empty")]
    Empty,

    /// The tabular reader rejected the resource.
    #[error("roster is malformed: {0}")]
    Malformed(#[from] csv::Error),

    /// The header is too short to carry the id and name columns.
    #[error("roster header needs an id and a name column, found {found} column(s)")]
    MissingIdentityColumns { found: usize },
}

/// Errors raised by draw sessions and the duty assigner.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Loading failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A period was requested that the registry does not list.
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),

    /// The assignment plan cannot be carried out.
    #[error("assignment error: {0}")]
    Assign(String),

    /// Writing a result file failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The draw was cancelled.
    #[error("draw cancelled")]
    Cancelled,
}
