//! Per-(date, hour) aggregation of the cleaned trip set.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::HourlyRow;
use crate::trip::CleanTrip;

/// Running sums for one (date, hour) group. The day of week is an
/// attribute of the group, not part of the key: every trip on one date
/// shares it.
#[derive(Debug)]
struct HourlyAcc {
    dow: u32,
    trips: usize,
    total_sum: f64,
    distance_sum: f64,
}

impl HourlyAcc {
    fn new(dow: u32) -> Self {
        Self {
            dow,
            trips: 0,
            total_sum: 0.0,
            distance_sum: 0.0,
        }
    }

    fn add(&mut self, trip: &CleanTrip) {
        self.trips += 1;
        self.total_sum += trip.total_amount;
        self.distance_sum += trip.trip_distance;
    }
}

/// Groups cleaned trips by (date, hour) and emits one row per group,
/// sorted ascending by date then hour.
pub fn summarize(trips: &[CleanTrip]) -> Vec<HourlyRow> {
    let mut groups: BTreeMap<(NaiveDate, u32), HourlyAcc> = BTreeMap::new();
    for trip in trips {
        groups
            .entry((trip.date, trip.hour))
            .or_insert_with(|| HourlyAcc::new(trip.dow))
            .add(trip);
    }
    groups
        .into_iter()
        .map(|((date, hour), acc)| HourlyRow {
            date,
            dow: acc.dow,
            hour,
            trips: acc.trips,
            avg_total: acc.total_sum / acc.trips as f64,
            avg_distance: acc.distance_sum / acc.trips as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{DT_FORMAT, RawTrip, clean};
    use chrono::NaiveDateTime;

    fn clean_trip(pickup: &str, distance: f64, total: f64) -> CleanTrip {
        let pickup_dt = NaiveDateTime::parse_from_str(pickup, DT_FORMAT).unwrap();
        let raw = RawTrip {
            pickup_dt: Some(pickup_dt),
            dropoff_dt: Some(pickup_dt + chrono::Duration::minutes(20)),
            passenger_count: Some(1.0),
            trip_distance: Some(distance),
            pu_location_id: Some(132.0),
            do_location_id: Some(48.0),
            payment_type: Some(1.0),
            fare_amount: Some(total - 2.0),
            tip_amount: Some(1.0),
            total_amount: Some(total),
        };
        clean(&[raw]).into_iter().next().unwrap()
    }

    #[test]
    fn test_groups_by_date_and_hour() {
        let trips = vec![
            clean_trip("01-15-25 07:10", 2.0, 10.0),
            clean_trip("01-15-25 07:50", 4.0, 20.0),
            clean_trip("01-15-25 08:10", 1.0, 5.0),
        ];
        let rows = summarize(&trips);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].hour, 7);
        assert_eq!(rows[0].trips, 2);
        assert_eq!(rows[0].avg_total, 15.0);
        assert_eq!(rows[0].avg_distance, 3.0);
        assert_eq!(rows[1].hour, 8);
        assert_eq!(rows[1].trips, 1);
    }

    #[test]
    fn test_sorted_by_date_then_hour() {
        let trips = vec![
            clean_trip("01-16-25 03:00", 2.0, 10.0),
            clean_trip("01-15-25 23:00", 2.0, 10.0),
            clean_trip("01-15-25 05:00", 2.0, 10.0),
        ];
        let rows = summarize(&trips);

        let keys: Vec<_> = rows.iter().map(|r| (r.date.to_string(), r.hour)).collect();
        assert_eq!(
            keys,
            [
                ("2025-01-15".to_string(), 5),
                ("2025-01-15".to_string(), 23),
                ("2025-01-16".to_string(), 3),
            ]
        );
    }

    #[test]
    fn test_dow_carried_per_group() {
        // 2025-01-15 is a Wednesday (dow 2), 2025-01-18 a Saturday (dow 5).
        let trips = vec![
            clean_trip("01-15-25 07:10", 2.0, 10.0),
            clean_trip("01-18-25 07:10", 2.0, 10.0),
        ];
        let rows = summarize(&trips);

        assert_eq!(rows[0].dow, 2);
        assert_eq!(rows[1].dow, 5);
    }

    #[test]
    fn test_trip_totals_partition_input() {
        let trips = vec![
            clean_trip("01-15-25 07:10", 2.0, 10.0),
            clean_trip("01-15-25 07:20", 2.0, 10.0),
            clean_trip("01-16-25 09:30", 2.0, 10.0),
        ];
        let rows = summarize(&trips);
        let total: usize = rows.iter().map(|r| r.trips).sum();
        assert_eq!(total, trips.len());
    }
}
