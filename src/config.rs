//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.launchboard.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Dataset settings.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
        }
    }
}

fn default_output() -> String {
    "launchboard_report.md".to_string()
}

/// Dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the launch records CSV.
    #[serde(default = "default_data_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> String {
    "spacex_launch_dash.csv".to_string()
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the scatter row table in Markdown reports.
    #[serde(default = "default_true")]
    pub include_scatter_rows: bool,

    /// Maximum scatter rows to render in Markdown reports.
    ///
    /// JSON reports always carry the full row set.
    #[serde(default = "default_max_scatter_rows")]
    pub max_scatter_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_scatter_rows: true,
            max_scatter_rows: default_max_scatter_rows(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_scatter_rows() -> usize {
    50
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".launchboard.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        // Dataset path - only override if explicitly provided
        if let Some(ref data) = args.data {
            self.dataset.path = data.display().to_string();
        }

        // Flags always override
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset.path, "spacex_launch_dash.csv");
        assert_eq!(config.general.output, "launchboard_report.md");
        assert!(config.report.include_scatter_rows);
        assert_eq!(config.report.max_scatter_rows, 50);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "custom_report.md"
verbose = true

[dataset]
path = "launches_2024.csv"

[report]
include_scatter_rows = false
max_scatter_rows = 10
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, "custom_report.md");
        assert!(config.general.verbose);
        assert_eq!(config.dataset.path, "launches_2024.csv");
        assert!(!config.report.include_scatter_rows);
        assert_eq!(config.report.max_scatter_rows, 10);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[dataset]\npath = \"x.csv\"\n").unwrap();
        assert_eq!(config.dataset.path, "x.csv");
        assert_eq!(config.general.output, "launchboard_report.md");
        assert_eq!(config.report.max_scatter_rows, 50);
    }

    #[test]
    fn test_merge_with_args() {
        use crate::cli::{Args, OutputFormat};
        use std::path::PathBuf;

        let mut config = Config::default();
        let args = Args {
            data: Some(PathBuf::from("cli_launches.csv")),
            site: "ALL".to_string(),
            payload_min: None,
            payload_max: None,
            output: PathBuf::from("out.md"),
            format: OutputFormat::Markdown,
            config: None,
            verbose: true,
            quiet: false,
            list_sites: false,
            init_config: false,
        };

        config.merge_with_args(&args);
        assert_eq!(config.dataset.path, "cli_launches.csv");
        assert!(config.general.verbose);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[dataset]"));
        assert!(toml_str.contains("[report]"));
    }
}
