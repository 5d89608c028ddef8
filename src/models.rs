//! Data models for the launch dashboard.
//!
//! This module contains all the core data structures used throughout
//! the application for representing launch records, filters, and the
//! display-ready series the aggregators produce.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The launch failed (class 0 in the source data).
    Failure,
    /// The launch succeeded (class 1 in the source data).
    Success,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

impl Outcome {
    /// Build an outcome from the dataset's binary `class` column.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The binary class value (1 = success, 0 = failure).
    #[allow(dead_code)] // Utility for numeric chart consumers
    pub fn as_class(&self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Returns true for a successful launch.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// A single launch event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier (e.g. `CCAFS LC-40`).
    pub site: String,
    /// Payload mass in kilograms. Never negative.
    pub payload_mass_kg: f64,
    /// Booster version category (e.g. `FT`, `v1.1`). The scatter chart's
    /// coloring dimension.
    pub booster_category: String,
    /// Whether the launch succeeded.
    pub outcome: Outcome,
}

/// Site selection for both aggregators.
///
/// The dashboard's site dropdown offers every distinct site plus the
/// `ALL` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteFilter {
    /// All sites (the `ALL` sentinel).
    All,
    /// A single named site.
    Site(String),
}

impl SiteFilter {
    /// Build a filter from a dropdown-style value: `ALL` is the sentinel,
    /// anything else names a site.
    pub fn from_value(value: &str) -> Self {
        if value == "ALL" {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }

    /// Returns true when the record passes this filter.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.site == *site,
        }
    }
}

impl FromStr for SiteFilter {
    type Err = std::convert::Infallible;

    /// Parsing never fails: an unknown site simply selects nothing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteFilter::from_value(s))
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "ALL"),
            SiteFilter::Site(site) => write!(f, "{}", site),
        }
    }
}

impl Serialize for SiteFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Inclusive payload mass range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    /// Lower bound (kg).
    pub low: f64,
    /// Upper bound (kg).
    pub high: f64,
}

impl PayloadRange {
    /// Create a range. Callers validate `low <= high` at the CLI boundary.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns true when the mass falls inside the range, bounds included.
    pub fn contains(&self, mass_kg: f64) -> bool {
        mass_kg >= self.low && mass_kg <= self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}-{:.0} kg", self.low, self.high)
    }
}

/// One slice of the outcome pie chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Slice label (a site name, or `Success`/`Failure`).
    pub label: String,
    /// Record count backing the slice.
    pub value: u64,
}

/// Display-ready pie chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSeries {
    /// Chart title.
    pub title: String,
    /// Slices in display order. Empty for an unknown site.
    pub slices: Vec<PieSlice>,
}

impl PieSeries {
    /// Sum of all slice values.
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Per-booster success rate for the textual summary under the scatter chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoosterRate {
    /// Booster version category.
    pub category: String,
    /// Mean success rate over the selection, in percent.
    pub success_rate_pct: f64,
}

/// Display-ready payload/outcome correlation view.
///
/// `rows` is the scatter-chart input: x = payload mass, y = outcome class,
/// color = booster category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationView {
    /// Chart title, including the overall success rate or a no-data marker.
    pub title: String,
    /// Overall success rate in percent; `None` when the selection is empty.
    pub success_rate_pct: Option<f64>,
    /// Records matching the site filter and payload range.
    pub rows: Vec<LaunchRecord>,
    /// Per-booster success rates, sorted descending by rate.
    pub booster_rates: Vec<BoosterRate>,
}

impl CorrelationView {
    /// Returns true when the selection matched no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Metadata about a generated dashboard report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Path of the dataset the report was built from.
    pub dataset_path: String,
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Total records in the dataset.
    pub total_records: usize,
    /// Records matching the current selection.
    pub selected_records: usize,
    /// The site filter applied.
    pub site_filter: SiteFilter,
    /// The payload range applied.
    pub payload_range: PayloadRange,
    /// Time spent loading and aggregating, in seconds.
    pub duration_seconds: f64,
}

/// The complete dashboard snapshot: one selection, both views.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Pie chart series from the site outcome aggregator.
    pub pie: PieSeries,
    /// Scatter view from the payload correlation aggregator.
    pub correlation: CorrelationView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
    }

    #[test]
    fn test_outcome_roundtrip() {
        assert_eq!(Outcome::Success.as_class(), 1);
        assert_eq!(Outcome::Failure.as_class(), 0);
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failure.is_success());
    }

    #[test]
    fn test_site_filter_parse() {
        assert_eq!("ALL".parse::<SiteFilter>().unwrap(), SiteFilter::All);
        assert_eq!(
            "KSC LC-39A".parse::<SiteFilter>().unwrap(),
            SiteFilter::Site("KSC LC-39A".to_string())
        );
        // Sentinel is case-sensitive, like the source dropdown value.
        assert_eq!(
            "all".parse::<SiteFilter>().unwrap(),
            SiteFilter::Site("all".to_string())
        );
    }

    #[test]
    fn test_site_filter_matches() {
        let record = LaunchRecord {
            site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            booster_category: "v1.0".to_string(),
            outcome: Outcome::Success,
        };

        assert!(SiteFilter::All.matches(&record));
        assert!(SiteFilter::Site("CCAFS LC-40".to_string()).matches(&record));
        assert!(!SiteFilter::Site("KSC LC-39A".to_string()).matches(&record));
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_pie_series_total() {
        let series = PieSeries {
            title: "test".to_string(),
            slices: vec![
                PieSlice {
                    label: "A".to_string(),
                    value: 3,
                },
                PieSlice {
                    label: "B".to_string(),
                    value: 2,
                },
            ],
        };
        assert_eq!(series.total(), 5);
    }
}
