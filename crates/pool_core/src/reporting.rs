//! Read-only summaries of rides and per-user ride stats.

use std::fmt;

use crate::model::{Ride, RideId, RideStats};
use crate::store::RecordStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideSummary {
    pub id: RideId,
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub available_seats: u32,
    pub vehicle: String,
    pub active: bool,
}

impl From<&Ride> for RideSummary {
    fn from(ride: &Ride) -> Self {
        Self {
            id: ride.id,
            driver: ride.driver.clone(),
            origin: ride.origin.clone(),
            destination: ride.destination.clone(),
            available_seats: ride.available_seats,
            vehicle: ride.vehicle.to_string(),
            active: ride.active,
        }
    }
}

impl fmt::Display for RideSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} -- Driver: {} -- Origin: {} -- Destination: {} -- AvailableSeats: {} -- Vehicle: {} -- Active:{}",
            self.id,
            self.driver,
            self.origin,
            self.destination,
            self.available_seats,
            self.vehicle,
            self.active
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub user: String,
    pub stats: RideStats,
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} Taken, {} Offered",
            self.user, self.stats.taken, self.stats.offered
        )
    }
}

/// Ride lines in id order.
pub fn ride_summaries(store: &RecordStore, active_only: bool) -> Vec<RideSummary> {
    store
        .rides()
        .filter(|ride| !active_only || ride.active)
        .map(RideSummary::from)
        .collect()
}

/// One line per user with a stats record, sorted by name.
pub fn stats_summaries(store: &RecordStore) -> Vec<StatsSummary> {
    store
        .all_stats()
        .map(|(user, stats)| StatsSummary {
            user: user.to_string(),
            stats,
        })
        .collect()
}

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolTotals {
    pub users: usize,
    pub rides: usize,
    pub active_rides: usize,
    pub open_seats: u64,
}

pub fn totals(store: &RecordStore) -> PoolTotals {
    PoolTotals {
        users: store.users().count(),
        rides: store.ride_count(),
        active_rides: store.active_rides().count(),
        open_seats: store
            .active_rides()
            .map(|ride| u64::from(ride.available_seats))
            .sum(),
    }
}

impl fmt::Display for PoolTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} users, {} rides ({} active, {} open seats)",
            self.users, self.rides, self.active_rides, self.open_seats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatKind;
    use crate::offering::end_ride;
    use crate::registration::add_user;
    use crate::test_helpers::store_with_rides;

    #[test]
    fn ride_line_matches_console_format() {
        let store = store_with_rides(&[("Hyderabad", "Bangalore", 2)]);
        let lines = ride_summaries(&store, false);
        assert_eq!(
            lines[0].to_string(),
            "ID: 0 -- Driver: driver-0 -- Origin: Hyderabad -- Destination: Bangalore -- \
             AvailableSeats: 2 -- Vehicle: driver-0 Swift (TEST-0000) -- Active:true"
        );
    }

    #[test]
    fn active_only_hides_ended_rides() {
        let mut store = store_with_rides(&[("A", "B", 1), ("B", "C", 1)]);
        end_ride(&mut store, 0).unwrap();
        let ids: Vec<_> = ride_summaries(&store, true).iter().map(|s| s.id.0).collect();
        assert_eq!(ids, [1]);
        assert_eq!(ride_summaries(&store, false).len(), 2);
    }

    #[test]
    fn stats_are_sorted_by_user() {
        let mut store = RecordStore::new();
        add_user(&mut store, "Shipra", "F", 27);
        add_user(&mut store, "Gaurav", "M", 29);
        store.increment_stat("Shipra", StatKind::Offered);

        let lines: Vec<String> = stats_summaries(&store).iter().map(|s| s.to_string()).collect();
        assert_eq!(lines, ["Gaurav: 0 Taken, 0 Offered", "Shipra: 0 Taken, 1 Offered"]);
    }

    #[test]
    fn totals_count_open_seats_on_active_rides() {
        let mut store = store_with_rides(&[("A", "B", 2), ("B", "C", 3)]);
        end_ride(&mut store, 1).unwrap();
        let totals = totals(&store);
        assert_eq!(totals.rides, 2);
        assert_eq!(totals.active_rides, 1);
        assert_eq!(totals.open_seats, 2);
    }
}
