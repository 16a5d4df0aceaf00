//! Seeded, reproducible sampling of the cleaned trip set.
//!
//! Draws are uniform without replacement using `StdRng` seeded directly
//! from the configured integer seed, so a fixed seed over a fixed cleaned
//! set always yields the same rows in the same order.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample as sample_indices;
use serde::Serialize;

use crate::trip::CleanTrip;

/// One exported sample row. Field order is the on-disk column order.
#[derive(Debug, Serialize, PartialEq)]
pub struct SampleRow {
    pub pickup_dt_iso: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub dow: u32,
    pub passenger_count: i64,
    pub trip_distance: f64,
    pub duration_min: f64,
    #[serde(rename = "PULocationID")]
    pub pu_location_id: i64,
    #[serde(rename = "DOLocationID")]
    pub do_location_id: i64,
    pub payment_type: i64,
    pub fare_amount: Option<f64>,
    pub tip_amount: Option<f64>,
    pub total_amount: f64,
}

/// Draws `min(requested, trips.len())` trips without replacement and
/// re-encodes each for export. Rows come out in draw order.
///
/// # Errors
///
/// Fails if a drawn trip is missing one of the integer-coded fields
/// (passenger count, location ids, payment type); the validity filter
/// does not guarantee their presence.
pub fn draw(trips: &[CleanTrip], requested: usize, seed: u64) -> Result<Vec<SampleRow>> {
    let amount = requested.min(trips.len());
    let mut rng = StdRng::seed_from_u64(seed);

    sample_indices(&mut rng, trips.len(), amount)
        .iter()
        .map(|i| encode(&trips[i]))
        .collect()
}

fn encode(trip: &CleanTrip) -> Result<SampleRow> {
    Ok(SampleRow {
        pickup_dt_iso: trip.pickup_dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        date: trip.date,
        hour: trip.hour,
        dow: trip.dow,
        passenger_count: int_field(trip.passenger_count, "passenger_count")?,
        trip_distance: trip.trip_distance,
        duration_min: trip.duration_min,
        pu_location_id: int_field(trip.pu_location_id, "PULocationID")?,
        do_location_id: int_field(trip.do_location_id, "DOLocationID")?,
        payment_type: int_field(trip.payment_type, "payment_type")?,
        fare_amount: trip.fare_amount,
        tip_amount: trip.tip_amount,
        total_amount: trip.total_amount,
    })
}

fn int_field(value: Option<f64>, column: &str) -> Result<i64> {
    match value {
        Some(v) => Ok(v as i64),
        None => bail!("cannot export sample row: column `{column}` is missing on a trip that passed cleaning"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{DT_FORMAT, RawTrip, clean};
    use chrono::NaiveDateTime;

    fn cleaned(n: usize) -> Vec<CleanTrip> {
        let rows: Vec<RawTrip> = (0..n)
            .map(|i| {
                let pickup = NaiveDateTime::parse_from_str("01-15-25 07:00", DT_FORMAT).unwrap()
                    + chrono::Duration::minutes(i as i64);
                RawTrip {
                    pickup_dt: Some(pickup),
                    dropoff_dt: Some(pickup + chrono::Duration::minutes(20)),
                    passenger_count: Some(1.0),
                    trip_distance: Some(2.5),
                    pu_location_id: Some(132.0),
                    do_location_id: Some(48.0),
                    payment_type: Some(1.0),
                    fare_amount: Some(10.0),
                    tip_amount: Some(2.0),
                    total_amount: Some(14.0),
                }
            })
            .collect();
        clean(&rows)
    }

    #[test]
    fn test_draw_is_deterministic_for_fixed_seed() {
        let trips = cleaned(100);
        let first = draw(&trips, 10, 42).unwrap();
        let second = draw(&trips, 10, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_changes_draw() {
        let trips = cleaned(100);
        let a = draw(&trips, 10, 42).unwrap();
        let b = draw(&trips, 10, 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_draw_without_replacement() {
        let trips = cleaned(50);
        let rows = draw(&trips, 50, 42).unwrap();

        let mut keys: Vec<&str> = rows.iter().map(|r| r.pickup_dt_iso.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 50);
    }

    #[test]
    fn test_oversized_request_returns_everything() {
        let trips = cleaned(10);
        let rows = draw(&trips, 100_000, 42).unwrap();
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn test_empty_set_draws_nothing() {
        let rows = draw(&[], 50_000, 42).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_iso_encoding_pads_seconds() {
        let trips = cleaned(1);
        let rows = draw(&trips, 1, 42).unwrap();
        assert_eq!(rows[0].pickup_dt_iso, "2025-01-15T07:00:00");
    }

    #[test]
    fn test_missing_integer_field_is_an_error() {
        let mut trips = cleaned(1);
        trips[0].passenger_count = None;

        let err = draw(&trips, 1, 42).unwrap_err();
        assert!(err.to_string().contains("passenger_count"), "{err}");
    }
}
