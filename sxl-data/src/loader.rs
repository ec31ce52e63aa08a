//! CSV loading for the launch dataset.
//!
//! # CSV Format
//!
//! Headers are required. The loader needs `Launch Site`, `class`,
//! `Payload Mass (kg)` and `Booster Version Category`; `Flight Number` and
//! `Booster Version` are picked up when present and anything else (such as
//! the unnamed index column pandas writes) is ignored.
//!
//! ```text
//! ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
//! 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
//! ```

use crate::dataset::Dataset;
use crate::error::{LoadError, Result};
use crate::record::{LaunchRecord, REQUIRED_COLUMNS};
use std::fs::File;
use std::io::Read;
use std::path::Path;

impl Dataset {
    /// Load the dataset from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("[SXL] loader: reading {}", path.display());
        Self::from_reader(file)
    }

    /// Load the dataset from CSV text (typically embedded via `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Load the dataset from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (idx, result) in rdr.deserialize::<LaunchRecord>().enumerate() {
            // Row 1 is the first data row after the header
            let row = idx + 1;
            let record = result.map_err(|source| LoadError::Row { row, source })?;
            records.push(record);
        }

        // Dataset::new checks class and payload, numbering rows the same way
        let dataset = Dataset::new(records)?;
        log::info!("[SXL] loader: loaded {} launch records", dataset.len());
        Ok(dataset)
    }
}
