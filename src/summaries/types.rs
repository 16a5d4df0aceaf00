//! Output row types emitted by the aggregation pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// One row of `daily.csv`: per-date trip volume and fare statistics.
#[derive(Debug, Serialize, PartialEq)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub trips: usize,
    pub avg_distance: f64,
    pub avg_total: f64,
    /// Mean over present tip values; empty when no trip in the group has
    /// a usable tip amount.
    pub avg_tip: Option<f64>,
    /// Fraction of the group with a tip strictly greater than zero.
    pub pct_tipped: f64,
}

/// One row of `daily_hour.csv`, keyed by date and pickup hour with the
/// day of week carried along.
#[derive(Debug, Serialize, PartialEq)]
pub struct HourlyRow {
    pub date: NaiveDate,
    pub dow: u32,
    pub hour: u32,
    pub trips: usize,
    pub avg_total: f64,
    pub avg_distance: f64,
}
