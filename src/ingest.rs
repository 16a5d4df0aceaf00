//! CSV ingestion for the raw trip table.
//!
//! Validates the column contract up front, then deserializes rows with
//! lenient per-cell coercion: a malformed cell becomes a missing value,
//! never an error.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::trip::RawTrip;

/// Columns the source table must expose. A missing column aborts the run.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "tpep_pickup_datetime",
    "tpep_dropoff_datetime",
    "passenger_count",
    "trip_distance",
    "PULocationID",
    "DOLocationID",
    "payment_type",
    "fare_amount",
    "tip_amount",
    "total_amount",
];

/// The raw table in memory, with the pre-filter row count.
#[derive(Debug)]
pub struct RawTable {
    pub trips: Vec<RawTrip>,
    pub rows_raw: usize,
}

/// Reads the full raw table from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a required column is
/// absent, or a row is structurally unreadable. Cell-level parse failures
/// are not errors; they become missing values on the row.
pub fn read_trips(path: &Path) -> Result<RawTable> {
    let file =
        File::open(path).with_context(|| format!("failed to open input {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    check_columns(&headers)?;
    debug!(columns = headers.len(), "Header row validated");

    let mut trips = Vec::new();
    for result in reader.deserialize() {
        let record: RawTrip = result?;
        trips.push(record);
    }

    let rows_raw = trips.len();
    Ok(RawTable { trips, rows_raw })
}

fn check_columns(headers: &csv::StringRecord) -> Result<()> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            bail!("input is missing required column `{required}`");
        }
    }
    Ok(())
}
