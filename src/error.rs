//! Error types shared by the catalog store and the query engine.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading the backing catalog file.
///
/// A catalog that fails to load is never partially served.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read catalog header: {0}")]
    Header(#[source] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("invalid catalog row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("duplicate rank {rank} at line {line}")]
    DuplicateRank { rank: u32, line: u64 },

    #[error("catalog contains no movies")]
    Empty,
}

/// Raised when a reduction (year or rating range) is requested over zero records.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("catalog is empty; range facets are undefined")]
pub struct EmptyCatalogError;

/// No record satisfies the supplied filters. An expected outcome, not a failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no movie matches the selected filters")]
pub struct NotFound;
