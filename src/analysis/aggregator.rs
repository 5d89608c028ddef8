//! Launch outcome aggregation.
//!
//! Both functions here are pure: (dataset, selection) in, display series
//! out. They retain no state between calls, so the CLI (or any other
//! event-dispatch layer) can invoke them freely on every input change.
//! Degenerate selections never fail; they produce empty series and
//! placeholder titles instead.

use crate::dataset::Dataset;
use crate::models::{
    BoosterRate, CorrelationView, LaunchRecord, PayloadRange, PieSeries, PieSlice, SiteFilter,
};
use std::collections::HashMap;

/// Build the outcome pie chart series for a site selection.
///
/// With [`SiteFilter::All`], one slice per site valued by its success
/// count. With a single site, one slice per outcome present (success
/// first) valued by its record count. An unknown site yields an empty
/// slice list rather than an error.
pub fn site_outcome_breakdown(dataset: &Dataset, filter: &SiteFilter) -> PieSeries {
    match filter {
        SiteFilter::All => {
            let mut successes: HashMap<&str, u64> = HashMap::new();
            for record in dataset.records() {
                let count = successes.entry(record.site.as_str()).or_default();
                if record.outcome.is_success() {
                    *count += 1;
                }
            }

            // Sites with zero successes still get a slice.
            let mut slices: Vec<PieSlice> = successes
                .into_iter()
                .map(|(site, value)| PieSlice {
                    label: site.to_string(),
                    value,
                })
                .collect();
            slices.sort_by(|a, b| a.label.cmp(&b.label));

            PieSeries {
                title: "Total Successful Launches by Site".to_string(),
                slices,
            }
        }
        SiteFilter::Site(site) => {
            let (mut successes, mut failures) = (0u64, 0u64);
            for record in dataset.records() {
                if record.site != *site {
                    continue;
                }
                if record.outcome.is_success() {
                    successes += 1;
                } else {
                    failures += 1;
                }
            }

            let mut slices = Vec::new();
            if successes > 0 {
                slices.push(PieSlice {
                    label: "Success".to_string(),
                    value: successes,
                });
            }
            if failures > 0 {
                slices.push(PieSlice {
                    label: "Failure".to_string(),
                    value: failures,
                });
            }

            PieSeries {
                title: format!("Launch Outcomes (Success/Failure) for {}", site),
                slices,
            }
        }
    }
}

/// Build the payload/outcome correlation view for a selection.
///
/// Filters to the payload range (inclusive) and then the site, computes
/// the overall success rate for the title, and summarizes per-booster
/// success rates sorted descending. An empty selection produces an empty
/// row set, a no-data title, and no booster rates.
pub fn payload_correlation(
    dataset: &Dataset,
    filter: &SiteFilter,
    range: PayloadRange,
) -> CorrelationView {
    let rows: Vec<LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && filter.matches(r))
        .cloned()
        .collect();

    let base_title = match filter {
        SiteFilter::All => "Payload vs. Success Correlation (All Sites)".to_string(),
        SiteFilter::Site(site) => format!("Payload vs. Success Correlation for {}", site),
    };

    let success_rate_pct = mean_success_pct(&rows);
    let title = match success_rate_pct {
        Some(rate) => format!("{} - Overall Success: {:.2}%", base_title, rate),
        None => format!("{} - (No Data for this selection)", base_title),
    };

    let booster_rates = booster_success_rates(&rows);

    CorrelationView {
        title,
        success_rate_pct,
        rows,
        booster_rates,
    }
}

/// Mean success rate in percent, or `None` for an empty slice.
fn mean_success_pct(rows: &[LaunchRecord]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let successes = rows.iter().filter(|r| r.outcome.is_success()).count();
    Some(successes as f64 / rows.len() as f64 * 100.0)
}

/// Per-booster success rates, highest first. Ties break on category name
/// so output order is deterministic.
fn booster_success_rates(rows: &[LaunchRecord]) -> Vec<BoosterRate> {
    let mut counts: HashMap<&str, (u64, u64)> = HashMap::new();
    for record in rows {
        let (successes, total) = counts.entry(record.booster_category.as_str()).or_default();
        if record.outcome.is_success() {
            *successes += 1;
        }
        *total += 1;
    }

    let mut rates: Vec<BoosterRate> = counts
        .into_iter()
        .map(|(category, (successes, total))| BoosterRate {
            category: category.to_string(),
            success_rate_pct: successes as f64 / total as f64 * 100.0,
        })
        .collect();

    rates.sort_by(|a, b| {
        b.success_rate_pct
            .partial_cmp(&a.success_rate_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    rates
}
