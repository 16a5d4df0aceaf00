//! CLI entry point for the taxi trip preparation tool.
//!
//! Reads a raw trip CSV export and writes the derived artifacts consumed
//! by the visualization front end: daily and hourly summary tables, a
//! seeded random sample, and a run metadata descriptor.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use taxi_trip_prep::pipeline::{self, RunConfig};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "taxi_trip_prep")]
#[command(about = "Prepares raw taxi trip CSVs for the visualization front end", long_about = None)]
struct Cli {
    /// Path to the raw trip CSV
    #[arg(long)]
    input: PathBuf,

    /// Output directory (e.g., web/data)
    #[arg(long)]
    out: PathBuf,

    /// Number of rows to draw for sample.csv
    #[arg(long, default_value_t = 50_000)]
    sample: usize,

    /// Seed for the sample draw
    #[arg(long, default_value_t = 42)]
    random_seed: u64,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/taxi_trip_prep.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("taxi_trip_prep.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        input: cli.input,
        out_dir: cli.out,
        sample_size: cli.sample,
        seed: cli.random_seed,
    };

    let meta = pipeline::run(&config)?;

    info!(
        dataset = %meta.dataset,
        rows_raw = meta.rows_raw,
        rows_clean = meta.rows_clean,
        sample_size = meta.sample_size,
        "Run complete"
    );

    Ok(())
}
