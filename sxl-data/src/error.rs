//! Error types for loading the launch dataset.
//!
//! Every variant is fatal at startup: without a dataset the dashboard has no
//! slider defaults and nothing to chart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The CSV resource could not be opened
    #[error("Failed to open launch dataset {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV header could not be read
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A column the dashboard depends on is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row failed to deserialize into a launch record
    #[error("Malformed launch record at row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Outcome class outside {0, 1}
    #[error("Invalid outcome class {class} at row {row} (expected 0 or 1)")]
    InvalidClass { row: usize, class: u8 },

    /// Negative or non-finite payload mass
    #[error("Invalid payload mass {payload} at row {row}")]
    InvalidPayload { row: usize, payload: f64 },

    /// The file parsed but held no launch records
    #[error("Launch dataset contains no records")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LoadError>;
