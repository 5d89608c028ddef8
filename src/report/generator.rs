//! Markdown report generation.
//!
//! This module renders the dashboard snapshot - pie series, scatter rows,
//! and booster success rates - as a Markdown document, or serializes the
//! whole snapshot as JSON for an external plotting collaborator.

use crate::config::ReportConfig;
use crate::models::{CorrelationView, DashboardReport, PieSeries, ReportMetadata};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &DashboardReport, config: &ReportConfig) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Launch Records Dashboard\n\n");

    // Metadata section
    output.push_str(&generate_metadata_section(&report.metadata));

    // Pie chart series
    output.push_str(&generate_pie_section(&report.pie));

    // Scatter view and booster rates
    output.push_str(&generate_correlation_section(&report.correlation, config));

    // Footer
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Selection\n\n");
    section.push_str(&format!("- **Dataset:** `{}`\n", metadata.dataset_path));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Site:** {}\n", metadata.site_filter));
    section.push_str(&format!(
        "- **Payload Range:** {}\n",
        metadata.payload_range
    ));
    section.push_str(&format!(
        "- **Records:** {} of {} selected\n",
        metadata.selected_records, metadata.total_records
    ));
    section.push_str(&format!(
        "- **Duration:** {:.3}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the pie chart series section.
fn generate_pie_section(pie: &PieSeries) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}\n\n", pie.title));

    if pie.slices.is_empty() {
        section.push_str("No launches match this site selection.\n\n");
        return section;
    }

    section.push_str("| Category | Launches |\n");
    section.push_str("|:---|:---:|\n");
    for slice in &pie.slices {
        section.push_str(&format!("| {} | {} |\n", slice.label, slice.value));
    }
    section.push_str(&format!("| **Total** | **{}** |\n\n", pie.total()));

    section
}

/// Generate the payload correlation section.
fn generate_correlation_section(view: &CorrelationView, config: &ReportConfig) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}\n\n", view.title));

    if view.is_empty() {
        section.push_str("No launches match this selection.\n\n");
        return section;
    }

    // Booster rates, already sorted highest first
    section.push_str("### Booster Success Rates (Current Selection)\n\n");
    section.push_str("| Booster Version Category | Success Rate |\n");
    section.push_str("|:---|:---:|\n");
    for rate in &view.booster_rates {
        section.push_str(&format!(
            "| {} | {:.2}% |\n",
            rate.category, rate.success_rate_pct
        ));
    }
    section.push('\n');

    // Scatter rows: x = payload, y = outcome class, color = booster
    if config.include_scatter_rows {
        section.push_str("### Scatter Rows\n\n");
        section.push_str("| Payload Mass (kg) | Outcome | Booster Version Category | Site |\n");
        section.push_str("|:---:|:---:|:---|:---|\n");

        for row in view.rows.iter().take(config.max_scatter_rows) {
            section.push_str(&format!(
                "| {:.1} | {} | {} | {} |\n",
                row.payload_mass_kg, row.outcome, row.booster_category, row.site
            ));
        }

        if view.rows.len() > config.max_scatter_rows {
            section.push_str(&format!(
                "\n*…and {} more rows (see the JSON report for the full set).*\n",
                view.rows.len() - config.max_scatter_rows
            ));
        }
        section.push('\n');
    }

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by launchboard*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &DashboardReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write a Markdown report to a file.
#[allow(dead_code)] // Convenience wrapper
pub fn write_markdown_report(
    report: &DashboardReport,
    config: &ReportConfig,
    path: &Path,
) -> Result<()> {
    let content = generate_markdown_report(report, config);

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BoosterRate, LaunchRecord, Outcome, PayloadRange, PieSlice, SiteFilter,
    };
    use chrono::Utc;

    fn create_test_report() -> DashboardReport {
        let metadata = ReportMetadata {
            dataset_path: "launches.csv".to_string(),
            generated_at: Utc::now(),
            total_records: 3,
            selected_records: 3,
            site_filter: SiteFilter::All,
            payload_range: PayloadRange::new(0.0, 10000.0),
            duration_seconds: 0.012,
        };

        DashboardReport {
            metadata,
            pie: PieSeries {
                title: "Total Successful Launches by Site".to_string(),
                slices: vec![
                    PieSlice {
                        label: "SiteA".to_string(),
                        value: 1,
                    },
                    PieSlice {
                        label: "SiteB".to_string(),
                        value: 1,
                    },
                ],
            },
            correlation: CorrelationView {
                title: "Payload vs. Success Correlation (All Sites) - Overall Success: 66.67%"
                    .to_string(),
                success_rate_pct: Some(66.67),
                rows: vec![
                    LaunchRecord {
                        site: "SiteA".to_string(),
                        payload_mass_kg: 500.0,
                        booster_category: "BoosterX".to_string(),
                        outcome: Outcome::Success,
                    },
                    LaunchRecord {
                        site: "SiteA".to_string(),
                        payload_mass_kg: 1500.0,
                        booster_category: "BoosterY".to_string(),
                        outcome: Outcome::Failure,
                    },
                    LaunchRecord {
                        site: "SiteB".to_string(),
                        payload_mass_kg: 2000.0,
                        booster_category: "BoosterX".to_string(),
                        outcome: Outcome::Success,
                    },
                ],
                booster_rates: vec![
                    BoosterRate {
                        category: "BoosterX".to_string(),
                        success_rate_pct: 100.0,
                    },
                    BoosterRate {
                        category: "BoosterY".to_string(),
                        success_rate_pct: 0.0,
                    },
                ],
            },
        }
    }

    #[test]
    fn test_generate_markdown_report() {
        let report = create_test_report();
        let markdown = generate_markdown_report(&report, &ReportConfig::default());

        assert!(markdown.contains("# Launch Records Dashboard"));
        assert!(markdown.contains("## Selection"));
        assert!(markdown.contains("## Total Successful Launches by Site"));
        assert!(markdown.contains("Overall Success: 66.67%"));
        assert!(markdown.contains("Booster Success Rates"));
        assert!(markdown.contains("| BoosterX | 100.00% |"));
        assert!(markdown.contains("| BoosterY | 0.00% |"));
    }

    #[test]
    fn test_markdown_scatter_rows_capped() {
        let report = create_test_report();
        let config = ReportConfig {
            include_scatter_rows: true,
            max_scatter_rows: 2,
        };

        let markdown = generate_markdown_report(&report, &config);
        assert!(markdown.contains("1 more rows"));
    }

    #[test]
    fn test_markdown_scatter_rows_omitted() {
        let report = create_test_report();
        let config = ReportConfig {
            include_scatter_rows: false,
            max_scatter_rows: 50,
        };

        let markdown = generate_markdown_report(&report, &config);
        assert!(!markdown.contains("### Scatter Rows"));
        // Booster rates stay even without the row table.
        assert!(markdown.contains("Booster Success Rates"));
    }

    #[test]
    fn test_markdown_empty_selection() {
        let mut report = create_test_report();
        report.pie.slices.clear();
        report.correlation = CorrelationView {
            title: "Payload vs. Success Correlation (All Sites) - (No Data for this selection)"
                .to_string(),
            success_rate_pct: None,
            rows: Vec::new(),
            booster_rates: Vec::new(),
        };

        let markdown = generate_markdown_report(&report, &ReportConfig::default());
        assert!(markdown.contains("No launches match this site selection."));
        assert!(markdown.contains("(No Data for this selection)"));
        assert!(!markdown.contains("### Scatter Rows"));
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report();
        let json = generate_json_report(&report).unwrap();

        assert!(json.contains("\"pie\""));
        assert!(json.contains("\"correlation\""));
        assert!(json.contains("\"booster_rates\""));
        assert!(json.contains("\"site_filter\": \"ALL\""));
    }
}
