//! Error types for the data-loader crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the ratings file.
///
/// Only whole-file failures surface as errors. A single malformed row is a
/// reported condition: the loader logs it and keeps going, so callers always
/// receive whatever records did parse.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be opened or read
    #[error("Failed to open ratings file {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader itself failed (not a per-row field problem)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, LoadError>;
