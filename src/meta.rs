//! Run-level metadata descriptor, written as `meta.json`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::trip::CleanTrip;

/// Summary of one pipeline run. Date bounds are null when the cleaned
/// set is empty.
#[derive(Debug, Serialize, PartialEq)]
pub struct RunMeta {
    pub dataset: String,
    pub rows_raw: usize,
    pub rows_clean: usize,
    pub sample_size: usize,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
}

impl RunMeta {
    pub fn build(dataset: &str, rows_raw: usize, trips: &[CleanTrip], sample_size: usize) -> Self {
        RunMeta {
            dataset: dataset.to_string(),
            rows_raw,
            rows_clean: trips.len(),
            sample_size,
            date_min: trips.iter().map(|t| t.date).min(),
            date_max: trips.iter().map(|t| t.date).max(),
        }
    }
}
