//! signal-report: rank states, cycles and outlier series from CSV recordings
//!
//! Run: `signal-report --config report.json`
//!
//! Results go to stdout, logs to stderr. Set `RUST_LOG` to change the log level.

use anyhow::{Context, Result};
use clap::Parser;
use signal_polars::ReportConfig;
use signal_stats::run_report;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Rank states, cycles and outlier series from CSV recordings
#[derive(Parser, Debug)]
#[command(name = "signal-report")]
#[command(version)]
#[command(about = "State-signal report: occurrence, dwell, cycles and DTW outliers", long_about = None)]
struct Cli {
    /// Report configuration file (JSON)
    #[arg(short, long)]
    config: PathBuf,

    /// Override the directory holding the tables
    #[arg(long)]
    data_folder: Option<PathBuf>,

    /// Override the table analysed by the single-series analyses
    #[arg(long)]
    csv_name: Option<String>,

    /// Override the outlier subsampling fraction
    #[arg(long)]
    sample_fraction: Option<f64>,

    /// Fix the outlier subsampling seed
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the population outlier ranking
    #[arg(long)]
    skip_outliers: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut ReportConfig) {
        if let Some(folder) = &self.data_folder {
            config.input.data_folder = folder.clone();
        }
        if let Some(name) = &self.csv_name {
            config.input.csv_name = name.clone();
        }
        if let Some(fraction) = self.sample_fraction {
            config.outliers.sample_fraction = fraction;
        }
        if let Some(seed) = self.seed {
            config.outliers.seed = Some(seed);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = ReportConfig::from_path(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    cli.apply_overrides(&mut config);

    info!(
        "Analysing {} in {}",
        config.input.csv_name,
        config.input.data_folder.display()
    );

    let report = run_report(&config, !cli.skip_outliers).context("Report failed")?;
    println!("{report}");
    Ok(())
}
