//! End-to-end batch run: ingest, clean, aggregate, sample, describe.
//!
//! The three consumers of the cleaned set (daily summary, hourly summary,
//! sample) are independent of each other; the run either writes all four
//! artifacts or fails before any downstream misread can happen.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ingest;
use crate::meta::RunMeta;
use crate::output::{DAILY_COLUMNS, HOURLY_COLUMNS, SAMPLE_COLUMNS, write_csv, write_json};
use crate::sample;
use crate::summaries::{daily, hourly};
use crate::trip;

/// Parameters for one pipeline run, as collected from the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub sample_size: usize,
    pub seed: u64,
}

/// Runs the whole pipeline and returns the run metadata that was written
/// to `meta.json`.
pub fn run(config: &RunConfig) -> Result<RunMeta> {
    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.out_dir.display()
        )
    })?;

    info!(input = %config.input.display(), "Reading raw trips");
    let table = ingest::read_trips(&config.input)?;
    info!(rows_raw = table.rows_raw, "Raw rows loaded");

    let cleaned = trip::clean(&table.trips);
    info!(
        rows_clean = cleaned.len(),
        dropped = table.rows_raw - cleaned.len(),
        "Validity filter applied"
    );

    let daily_rows = daily::summarize(&cleaned);
    write_csv(
        &config.out_dir.join("daily.csv"),
        &DAILY_COLUMNS,
        &daily_rows,
    )?;
    info!(rows = daily_rows.len(), "Wrote daily.csv");

    let hourly_rows = hourly::summarize(&cleaned);
    write_csv(
        &config.out_dir.join("daily_hour.csv"),
        &HOURLY_COLUMNS,
        &hourly_rows,
    )?;
    info!(rows = hourly_rows.len(), "Wrote daily_hour.csv");

    let sample_rows = sample::draw(&cleaned, config.sample_size, config.seed)?;
    write_csv(
        &config.out_dir.join("sample.csv"),
        &SAMPLE_COLUMNS,
        &sample_rows,
    )?;
    info!(rows = sample_rows.len(), "Wrote sample.csv");

    let meta = RunMeta::build(
        &dataset_name(&config.input),
        table.rows_raw,
        &cleaned,
        sample_rows.len(),
    );
    write_json(&config.out_dir.join("meta.json"), &meta)?;
    info!("Wrote meta.json");

    Ok(meta)
}

/// Dataset identifier recorded in the metadata: the input file name.
fn dataset_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_name_is_file_name() {
        assert_eq!(dataset_name(Path::new("data/raw/trips.csv")), "trips.csv");
    }
}
