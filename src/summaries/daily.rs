//! Per-date aggregation of the cleaned trip set.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::DailyRow;
use super::utility::fraction;
use crate::trip::CleanTrip;

/// Running sums for one date group. Means are finalized at emission.
#[derive(Debug, Default)]
struct DailyAcc {
    trips: usize,
    distance_sum: f64,
    total_sum: f64,
    tip_sum: f64,
    tip_count: usize,
    tipped: usize,
}

impl DailyAcc {
    fn add(&mut self, trip: &CleanTrip) {
        self.trips += 1;
        self.distance_sum += trip.trip_distance;
        self.total_sum += trip.total_amount;
        if let Some(tip) = trip.tip_amount {
            self.tip_sum += tip;
            self.tip_count += 1;
            if tip > 0.0 {
                self.tipped += 1;
            }
        }
    }

    fn finish(self, date: NaiveDate) -> DailyRow {
        DailyRow {
            date,
            trips: self.trips,
            avg_distance: self.distance_sum / self.trips as f64,
            avg_total: self.total_sum / self.trips as f64,
            avg_tip: (self.tip_count > 0).then(|| self.tip_sum / self.tip_count as f64),
            pct_tipped: fraction(self.tipped, self.trips),
        }
    }
}

/// Groups cleaned trips by date and emits one summary row per date,
/// ascending. Trips with a missing tip count toward the group size and
/// toward `pct_tipped`'s denominator, but not toward `avg_tip`.
pub fn summarize(trips: &[CleanTrip]) -> Vec<DailyRow> {
    let mut groups: BTreeMap<NaiveDate, DailyAcc> = BTreeMap::new();
    for trip in trips {
        groups.entry(trip.date).or_default().add(trip);
    }
    groups
        .into_iter()
        .map(|(date, acc)| acc.finish(date))
        .collect()
}
