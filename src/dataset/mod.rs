//! Launch dataset loading and access.
//!
//! This module reads the row-oriented launch CSV once at startup and
//! exposes it as an immutable, shared [`Dataset`]. Both aggregators
//! borrow it read-only; nothing mutates it after load.

use crate::models::{LaunchRecord, Outcome};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading or validating the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The CSV file could not be opened or read.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A row could not be parsed against the expected columns.
    #[error("malformed row at line {line}: {source}")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A row parsed but violated a dataset invariant.
    #[error("invalid row at line {line}: {reason}")]
    Invalid { line: u64, reason: String },
}

/// Raw CSV row, named after the source file's headers.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
    #[serde(rename = "class")]
    class: u8,
}

impl RawRecord {
    /// Validate the row invariants and convert into a [`LaunchRecord`].
    fn into_record(self, line: u64) -> Result<LaunchRecord, DatasetError> {
        let invalid = |reason: String| DatasetError::Invalid { line, reason };

        if self.site.trim().is_empty() {
            return Err(invalid("empty launch site".to_string()));
        }
        if self.booster_category.trim().is_empty() {
            return Err(invalid("empty booster version category".to_string()));
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(invalid(format!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            )));
        }
        let outcome = Outcome::from_class(self.class)
            .ok_or_else(|| invalid(format!("class must be 0 or 1, got {}", self.class)))?;

        Ok(LaunchRecord {
            site: self.site,
            payload_mass_kg: self.payload_mass_kg,
            booster_category: self.booster_category,
            outcome,
        })
    }
}

/// The in-memory launch dataset.
///
/// An ordered sequence of [`LaunchRecord`], created once at process start
/// and never written back.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    /// Wrap an already-built record list (used by tests and callers that
    /// source rows elsewhere).
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    /// Load and validate the dataset from a CSV file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
            // Line 1 is the header, so data rows start at line 2.
            let line = index as u64 + 2;
            let raw = row.map_err(|source| DatasetError::Malformed { line, source })?;
            records.push(raw.into_record(line)?);
        }

        let dataset = Self { records };
        info!(
            "Loaded {} launch records from {}",
            dataset.len(),
            path.display()
        );
        debug!("Distinct sites: {:?}", dataset.sites());

        Ok(dataset)
    }

    /// All records, in file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-appearance order.
    ///
    /// This is the site dropdown's option list (plus the `ALL` sentinel
    /// added by the UI layer).
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.site.as_str()) {
                sites.push(&record.site);
            }
        }
        sites
    }

    /// Minimum and maximum payload mass, or `None` for an empty dataset.
    ///
    /// The payload range selector defaults to these bounds.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), mass| {
            (min.min(mass), max.max(mass))
        });
        Some((min, max))
    }
}
