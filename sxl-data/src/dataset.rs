//! The immutable launch dataset and the scalars derived from it.

use crate::error::{LoadError, Result};
use crate::record::LaunchRecord;
use crate::ALL_SITES;
use serde::Serialize;

/// Values computed once at load time to parameterize the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    /// Smallest payload mass in the dataset (kg).
    pub min_payload: f64,
    /// Largest payload mass in the dataset (kg).
    pub max_payload: f64,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// `sites` followed by the "All sites" sentinel.
    pub site_options: Vec<String>,
}

/// All launch records, in file order.
///
/// Constructed once and never mutated; share it behind an `Arc` when more
/// than one owner needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    summary: DatasetSummary,
}

impl Dataset {
    /// Build a dataset from launch records.
    ///
    /// Every record must have a class of 0 or 1 and a finite, non-negative
    /// payload; the first offender is reported by its 1-based position.
    /// Fails with [`LoadError::Empty`] when `records` is empty, since payload
    /// bounds cannot be derived.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            validate(idx + 1, record)?;
        }
        let summary = summarize(&records).ok_or(LoadError::Empty)?;
        Ok(Self { records, summary })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    pub fn min_payload(&self) -> f64 {
        self.summary.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.summary.max_payload
    }

    pub fn sites(&self) -> &[String] {
        &self.summary.sites
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate(row: usize, record: &LaunchRecord) -> Result<()> {
    if record.class > 1 {
        return Err(LoadError::InvalidClass {
            row,
            class: record.class,
        });
    }
    if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
        return Err(LoadError::InvalidPayload {
            row,
            payload: record.payload_mass_kg,
        });
    }
    Ok(())
}

fn summarize(records: &[LaunchRecord]) -> Option<DatasetSummary> {
    let first = records.first()?;
    let mut min_payload = first.payload_mass_kg;
    let mut max_payload = first.payload_mass_kg;
    let mut sites: Vec<String> = Vec::new();

    for record in records {
        min_payload = min_payload.min(record.payload_mass_kg);
        max_payload = max_payload.max(record.payload_mass_kg);
        if !sites.iter().any(|s| s == &record.launch_site) {
            sites.push(record.launch_site.clone());
        }
    }

    let mut site_options = sites.clone();
    site_options.push(ALL_SITES.to_string());

    Some(DatasetSummary {
        record_count: records.len(),
        min_payload,
        max_payload,
        sites,
        site_options,
    })
}
