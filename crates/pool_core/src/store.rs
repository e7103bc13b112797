//! Record store: users, vehicles by owner, rides by id and per-user ride stats.
//!
//! Pure container. Missing keys read as empty and no operation fails; validation
//! lives in the services that call it.

use std::collections::BTreeMap;

use crate::model::{Ride, RideId, RideStats, StatKind, User, Vehicle};

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    users: BTreeMap<String, User>,
    vehicles: BTreeMap<String, Vec<Vehicle>>,
    /// Indexed by `RideId`; ids are dense so position == id.
    rides: Vec<Ride>,
    stats: BTreeMap<String, RideStats>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the user keyed by name.
    pub fn upsert_user(&mut self, user: User) {
        self.users.insert(user.name.clone(), user);
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn append_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles
            .entry(vehicle.owner.clone())
            .or_default()
            .push(vehicle);
    }

    pub fn vehicles(&self, owner: &str) -> &[Vehicle] {
        self.vehicles.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Id the next inserted ride will receive.
    pub fn next_ride_id(&self) -> RideId {
        RideId(self.rides.len())
    }

    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }

    /// Append the ride built by `build` under the next free id and return that id.
    ///
    /// The store owns id assignment: whatever `id` the built ride carries is
    /// replaced, so position and id never drift apart.
    pub fn insert_ride(&mut self, build: impl FnOnce(RideId) -> Ride) -> RideId {
        let id = self.next_ride_id();
        let mut ride = build(id);
        ride.id = id;
        self.rides.push(ride);
        id
    }

    pub fn ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(id.0)
    }

    /// Write back a mutated copy. Unknown ids are ignored.
    pub fn update_ride(&mut self, ride: Ride) {
        if let Some(slot) = self.rides.get_mut(ride.id.0) {
            *slot = ride;
        }
    }

    /// Rides in id order.
    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }

    pub fn active_rides(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter().filter(|ride| ride.active)
    }

    /// Overwrite the user's counters with zeros.
    pub fn reset_stats(&mut self, user: &str) {
        self.stats.insert(user.to_string(), RideStats::default());
    }

    /// Current counters, creating a zeroed record if absent.
    pub fn stats_or_init(&mut self, user: &str) -> RideStats {
        *self.stats.entry(user.to_string()).or_default()
    }

    pub fn stats(&self, user: &str) -> Option<RideStats> {
        self.stats.get(user).copied()
    }

    /// Stats in user-name order.
    pub fn all_stats(&self) -> impl Iterator<Item = (&str, RideStats)> {
        self.stats.iter().map(|(name, stats)| (name.as_str(), *stats))
    }

    /// Increment a counter, lazily creating the record for unseen users.
    pub fn increment_stat(&mut self, user: &str, kind: StatKind) {
        self.stats.entry(user.to_string()).or_default().increment(kind);
    }
}
