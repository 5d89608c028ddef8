//! Launchboard - Launch Records Dashboard
//!
//! A CLI tool that loads a launch-outcome CSV and renders the dashboard
//! views (site outcome pie series, payload/success scatter rows, and
//! per-booster success rates) as Markdown or JSON reports.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (dataset load, config, report write failure, etc.)

mod analysis;
mod cli;
mod config;
mod dataset;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use dataset::Dataset;
use models::{DashboardReport, PayloadRange, ReportMetadata};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Launchboard v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Build the dashboard snapshot
    match run_dashboard(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Dashboard run failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .launchboard.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".launchboard.toml");

    if path.exists() {
        eprintln!("⚠️  .launchboard.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .launchboard.toml")?;

    println!("✅ Created .launchboard.toml with default settings.");
    println!("   Edit it to customize the dataset path and report options.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete dashboard workflow. Returns exit code 0.
fn run_dashboard(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load the dataset
    let data_path = config.dataset.path.clone();
    println!("📥 Loading dataset: {}", data_path);

    let dataset = Dataset::load(Path::new(&data_path))
        .with_context(|| format!("Failed to load dataset from {}", data_path))?;

    // Handle --list-sites: print dropdown options and exit
    if args.list_sites {
        return handle_list_sites(&dataset);
    }

    // Step 2: Resolve the selection
    let site_filter = args.site_filter();
    let payload_range = resolve_payload_range(&args, &dataset);

    if let models::SiteFilter::Site(ref site) = site_filter {
        if !dataset.sites().contains(&site.as_str()) {
            // Documented behavior: unknown sites yield an empty report.
            warn!("Site {:?} not present in dataset; report will be empty", site);
        }
    }

    println!("🔎 Selection: site = {}, payload = {}", site_filter, payload_range);

    // Step 3: Run both aggregators over the shared dataset
    let pie = analysis::site_outcome_breakdown(&dataset, &site_filter);
    let correlation = analysis::payload_correlation(&dataset, &site_filter, payload_range);

    // Step 4: Build the report
    println!("\n📝 Generating report...");

    let duration = start_time.elapsed().as_secs_f64();
    let metadata = ReportMetadata {
        dataset_path: data_path,
        generated_at: Utc::now(),
        total_records: dataset.len(),
        selected_records: correlation.rows.len(),
        site_filter,
        payload_range,
        duration_seconds: duration,
    };

    let dashboard = DashboardReport {
        metadata,
        pie,
        correlation,
    };

    // Step 5: Render and save
    let output = match args.format {
        OutputFormat::Json => report::generate_json_report(&dashboard)?,
        OutputFormat::Markdown => report::generate_markdown_report(&dashboard, &config.report),
    };

    std::fs::write(&args.output, &output)
        .with_context(|| format!("Failed to write report to {}", args.output.display()))?;

    // Print summary
    println!("\n📊 Dashboard Summary:");
    println!(
        "   Records: {} of {} selected",
        dashboard.metadata.selected_records, dashboard.metadata.total_records
    );
    match dashboard.correlation.success_rate_pct {
        Some(rate) => println!("   Overall success rate: {:.2}%", rate),
        None => println!("   Overall success rate: no data for this selection"),
    }
    for rate in &dashboard.correlation.booster_rates {
        println!("   - {}: {:.2}%", rate.category, rate.success_rate_pct);
    }
    println!(
        "\n✅ Report saved to: {}",
        args.output.display()
    );

    Ok(0)
}

/// Handle --list-sites: print distinct sites and payload bounds, exit.
fn handle_list_sites(dataset: &Dataset) -> Result<i32> {
    println!("\n🗺️  Launch sites in dataset:\n");

    for site in dataset.sites() {
        println!("     🚀 {}", site);
    }
    println!("     (plus the ALL sentinel for every site)");

    if let Some((min, max)) = dataset.payload_bounds() {
        println!("\n   Payload mass bounds: {:.1} - {:.1} kg", min, max);
    }
    println!("   Total records: {}", dataset.len());

    Ok(0)
}

/// Payload range from CLI bounds, falling back to dataset bounds.
///
/// A single bound past the dataset's own extreme can invert the range;
/// an inverted range selects nothing and the report degrades to no-data.
fn resolve_payload_range(args: &Args, dataset: &Dataset) -> PayloadRange {
    let (data_min, data_max) = dataset.payload_bounds().unwrap_or((0.0, 0.0));

    PayloadRange::new(
        args.payload_min.unwrap_or(data_min),
        args.payload_max.unwrap_or(data_max),
    )
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .launchboard.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
