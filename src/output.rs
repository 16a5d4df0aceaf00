//! Artifact writers for the output directory.
//!
//! Every artifact is rewritten from scratch on each run; nothing is
//! appended. The header row is written explicitly so that an empty table
//! still produces a header-only file.

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use csv::WriterBuilder;

/// Column order for `daily.csv`.
pub const DAILY_COLUMNS: [&str; 6] = [
    "date",
    "trips",
    "avg_distance",
    "avg_total",
    "avg_tip",
    "pct_tipped",
];

/// Column order for `daily_hour.csv`.
pub const HOURLY_COLUMNS: [&str; 6] = ["date", "dow", "hour", "trips", "avg_total", "avg_distance"];

/// Column order for `sample.csv`.
pub const SAMPLE_COLUMNS: [&str; 13] = [
    "pickup_dt_iso",
    "date",
    "hour",
    "dow",
    "passenger_count",
    "trip_distance",
    "duration_min",
    "PULocationID",
    "DOLocationID",
    "payment_type",
    "fare_amount",
    "tip_amount",
    "total_amount",
];

/// Writes a CSV artifact: one explicit header record, then one row per
/// item. Overwrites any existing file at `path`.
pub fn write_csv<S: Serialize>(path: &Path, columns: &[&str], rows: &[S]) -> Result<()> {
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV artifact");

    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Serializes a value as pretty-printed JSON and writes it to `path`,
/// overwriting any existing file.
pub fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON artifact");

    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;

    Ok(())
}
