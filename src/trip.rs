//! Trip record types: raw rows as read from the source CSV, and the
//! derived fields and validity predicate that produce the cleaned set.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer};

/// Timestamp format used by the raw export, minute resolution.
pub const DT_FORMAT: &str = "%m-%d-%y %H:%M";

/// A single row of the raw trip table. Every field is optional: a cell
/// that fails to parse becomes `None` instead of failing the row.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "tpep_pickup_datetime", deserialize_with = "lenient_datetime")]
    pub pickup_dt: Option<NaiveDateTime>,
    #[serde(rename = "tpep_dropoff_datetime", deserialize_with = "lenient_datetime")]
    pub dropoff_dt: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_number")]
    pub passenger_count: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub trip_distance: Option<f64>,
    #[serde(rename = "PULocationID", deserialize_with = "lenient_number")]
    pub pu_location_id: Option<f64>,
    #[serde(rename = "DOLocationID", deserialize_with = "lenient_number")]
    pub do_location_id: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub payment_type: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub fare_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub tip_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub total_amount: Option<f64>,
}

fn lenient_datetime<'de, D>(de: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.and_then(|s| NaiveDateTime::parse_from_str(s.trim(), DT_FORMAT).ok()))
}

fn lenient_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    // Non-finite values ("nan", "inf") are treated as missing, like any
    // other unusable cell.
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}

/// Time fields derived from the pickup/dropoff timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derived {
    /// Dropoff minus pickup, in minutes. Negative if the timestamps are
    /// inverted.
    pub duration_min: f64,
    pub date: NaiveDate,
    /// Pickup hour, 0-23.
    pub hour: u32,
    /// Day of week, Monday = 0 through Sunday = 6.
    pub dow: u32,
}

/// Computes derived fields for a raw trip, or `None` if either timestamp
/// is missing.
pub fn derive(raw: &RawTrip) -> Option<Derived> {
    let pickup = raw.pickup_dt?;
    let dropoff = raw.dropoff_dt?;
    Some(Derived {
        duration_min: (dropoff - pickup).num_seconds() as f64 / 60.0,
        date: pickup.date(),
        hour: pickup.hour(),
        dow: pickup.weekday().num_days_from_monday(),
    })
}

/// The validity predicate. A trip is kept iff both timestamps parsed and
/// duration, distance, and total fall inside their plausible ranges.
/// Passenger count, location ids, payment type, fare, and tip are not
/// checked and may still be missing on a valid trip.
pub fn is_valid(raw: &RawTrip, derived: &Derived) -> bool {
    let (Some(distance), Some(total)) = (raw.trip_distance, raw.total_amount) else {
        return false;
    };
    derived.duration_min > 0.0
        && derived.duration_min <= 180.0
        && distance > 0.0
        && distance <= 50.0
        && total > 0.0
        && total <= 500.0
}

/// A trip that passed the validity filter, with derived fields attached.
/// `trip_distance` and `total_amount` are always present here since the
/// filter range-checks them; the remaining optional fields may still be
/// missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTrip {
    pub pickup_dt: NaiveDateTime,
    pub duration_min: f64,
    pub date: NaiveDate,
    pub hour: u32,
    pub dow: u32,
    pub trip_distance: f64,
    pub total_amount: f64,
    pub passenger_count: Option<f64>,
    pub pu_location_id: Option<f64>,
    pub do_location_id: Option<f64>,
    pub payment_type: Option<f64>,
    pub fare_amount: Option<f64>,
    pub tip_amount: Option<f64>,
}

/// Applies the validity filter over the raw table, materializing the
/// cleaned set in input order. Pure: raw records are only read.
pub fn clean(rows: &[RawTrip]) -> Vec<CleanTrip> {
    rows.iter()
        .filter_map(|raw| {
            let derived = derive(raw)?;
            if !is_valid(raw, &derived) {
                return None;
            }
            let (Some(pickup_dt), Some(trip_distance), Some(total_amount)) =
                (raw.pickup_dt, raw.trip_distance, raw.total_amount)
            else {
                return None;
            };
            Some(CleanTrip {
                pickup_dt,
                duration_min: derived.duration_min,
                date: derived.date,
                hour: derived.hour,
                dow: derived.dow,
                trip_distance,
                total_amount,
                passenger_count: raw.passenger_count,
                pu_location_id: raw.pu_location_id,
                do_location_id: raw.do_location_id,
                payment_type: raw.payment_type,
                fare_amount: raw.fare_amount,
                tip_amount: raw.tip_amount,
            })
        })
        .collect()
}
