//! Error type definitions.
//!
//! This module defines the crate's error taxonomy: malformed caller input,
//! unresolvable time zones, and dataset loading failures. A lookup that
//! simply finds nothing is never an error anywhere in this crate; it
//! surfaces as `None`.

use thiserror::Error;

/// Errors for malformed query input and time-zone resolution.
#[derive(Error, Debug)]
pub enum AreaError {
    /// A latitude or longitude argument is not a decimal number.
    #[error("Malformed coordinate: {0:?}")]
    MalformedCoordinate(String),

    /// A code argument contains something other than ASCII digits.
    #[error("Malformed code: {0:?}")]
    MalformedCode(String),

    /// The IANA time-zone database has no zone under the given name.
    ///
    /// Recovered internally by the offset calculator, which falls back to
    /// the unadjusted base offset.
    #[error("Unknown time zone: {0}")]
    ZoneNotFound(String),
}

/// Errors while loading a reference dataset from disk.
#[derive(Error, Debug)]
pub enum TableError {
    /// Error reading the dataset file.
    #[error("Dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a CSV record into a row.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] csv::Error),
}
