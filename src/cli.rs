//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::SiteFilter;
use clap::Parser;
use std::path::PathBuf;

/// Launchboard - launch-records dashboard reports from launch CSVs
///
/// Load a launch-outcome dataset and render the site outcome pie series,
/// the payload/success scatter rows, and per-booster success rates as a
/// Markdown or JSON report.
///
/// Examples:
///   launchboard --data spacex_launch_dash.csv
///   launchboard --data launches.csv --site "KSC LC-39A"
///   launchboard --data launches.csv --payload-min 2500 --payload-max 7500 --format json
///   launchboard --data launches.csv --list-sites
///   launchboard --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the launch records CSV file
    ///
    /// Expects the columns `Launch Site`, `Payload Mass (kg)`,
    /// `Booster Version Category`, and `class`. Can also be set via the
    /// LAUNCHBOARD_DATA env var or .launchboard.toml config.
    #[arg(short, long, value_name = "FILE", env = "LAUNCHBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Launch site to select, or ALL for every site
    ///
    /// An unknown site produces an empty report rather than an error,
    /// matching the dashboard's dropdown behavior.
    #[arg(short, long, default_value = "ALL", value_name = "SITE")]
    pub site: String,

    /// Lower payload mass bound in kg (inclusive)
    ///
    /// Defaults to the dataset's minimum payload mass.
    #[arg(long, value_name = "KG")]
    pub payload_min: Option<f64>,

    /// Upper payload mass bound in kg (inclusive)
    ///
    /// Defaults to the dataset's maximum payload mass.
    #[arg(long, value_name = "KG")]
    pub payload_max: Option<f64>,

    /// Output file path for the report
    #[arg(
        short,
        long,
        default_value = "launchboard_report.md",
        value_name = "FILE"
    )]
    pub output: PathBuf,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .launchboard.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// List distinct launch sites and payload bounds, then exit
    ///
    /// No report is written. Useful for discovering valid --site values.
    #[arg(long)]
    pub list_sites: bool,

    /// Generate a default .launchboard.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The site selection as a filter. `ALL` is the all-sites sentinel.
    pub fn site_filter(&self) -> SiteFilter {
        SiteFilter::from_value(&self.site)
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Validate payload bounds
        if let Some(min) = self.payload_min {
            if !min.is_finite() || min < 0.0 {
                return Err("--payload-min must be a non-negative number".to_string());
            }
        }
        if let Some(max) = self.payload_max {
            if !max.is_finite() || max < 0.0 {
                return Err("--payload-max must be a non-negative number".to_string());
            }
        }
        if let (Some(min), Some(max)) = (self.payload_min, self.payload_max) {
            if min > max {
                return Err(format!(
                    "--payload-min ({}) must not exceed --payload-max ({})",
                    min, max
                ));
            }
        }

        // Validate site value
        if self.site.trim().is_empty() {
            return Err("--site must not be empty (use ALL for every site)".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate data path if provided
        if let Some(ref data_path) = self.data {
            if !data_path.exists() {
                return Err(format!(
                    "Dataset file does not exist: {}",
                    data_path.display()
                ));
            }
            if !data_path.is_file() {
                return Err(format!("Dataset path is not a file: {}", data_path.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            data: None,
            site: "ALL".to_string(),
            payload_min: None,
            payload_max: None,
            output: PathBuf::from("test.md"),
            format: OutputFormat::Markdown,
            config: None,
            verbose: false,
            quiet: false,
            list_sites: false,
            init_config: false,
        }
    }

    #[test]
    fn test_site_filter_sentinel() {
        let mut args = make_args();
        assert_eq!(args.site_filter(), SiteFilter::All);

        args.site = "CCAFS LC-40".to_string();
        assert_eq!(
            args.site_filter(),
            SiteFilter::Site("CCAFS LC-40".to_string())
        );
    }

    #[test]
    fn test_validation_inverted_range() {
        let mut args = make_args();
        args.payload_min = Some(5000.0);
        args.payload_max = Some(1000.0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_negative_bound() {
        let mut args = make_args();
        args.payload_min = Some(-1.0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_single_bound_ok() {
        let mut args = make_args();
        args.payload_max = Some(5000.0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_site() {
        let mut args = make_args();
        args.site = "  ".to_string();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_data_file() {
        let mut args = make_args();
        args.data = Some(PathBuf::from("/nonexistent/launches.csv"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
