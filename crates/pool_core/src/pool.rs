//! `RidePool`: one record store plus configuration, with every operation on it.

use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::matching::{self, RideRequest, SearchOutcome};
use crate::model::{Itinerary, Ride, RideId, User, Vehicle};
use crate::offering::{self, RideOffer};
use crate::registration;
use crate::reporting::{self, PoolTotals, RideSummary, StatsSummary};
use crate::store::RecordStore;

/// Result of a direct selection that may fall back to multi-hop discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A direct ride was booked.
    Direct(RideId),
    /// No direct ride; the chains that could be reserved instead (possibly
    /// none), with any search truncation reported alongside.
    Itineraries(SearchOutcome),
}

#[derive(Debug, Default, Clone)]
pub struct RidePool {
    store: RecordStore,
    config: PoolConfig,
}

impl RidePool {
    pub fn new(config: PoolConfig) -> Self {
        Self {
            store: RecordStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Limits and defaults this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn add_user(&mut self, name: &str, gender: &str, age: u32) -> User {
        registration::add_user(&mut self.store, name, gender, age)
    }

    pub fn add_vehicle(&mut self, owner: &str, model: &str, plate: &str) -> Vehicle {
        registration::add_vehicle(&mut self.store, owner, model, plate)
    }

    pub fn offer_ride(&mut self, offer: &RideOffer) -> PoolResult<RideId> {
        offering::offer_ride(&mut self.store, offer)
    }

    pub fn end_ride(&mut self, id: i64) -> PoolResult<Ride> {
        offering::end_ride(&mut self.store, id)
    }

    pub fn select_ride(&mut self, request: &RideRequest) -> PoolResult<RideId> {
        matching::select_ride(&mut self.store, request)
    }

    /// Direct selection, falling back to itinerary discovery on `NoRideFound`.
    pub fn select_or_discover(&mut self, request: &RideRequest) -> PoolResult<Selection> {
        match matching::select_ride(&mut self.store, request) {
            Ok(id) => Ok(Selection::Direct(id)),
            Err(PoolError::NoRideFound { .. }) => {
                let outcome =
                    self.find_possible_rides(&request.origin, &request.destination, request.seats)?;
                Ok(Selection::Itineraries(outcome))
            }
            Err(error) => Err(error),
        }
    }

    pub fn find_possible_rides(
        &self,
        origin: &str,
        destination: &str,
        seats: u32,
    ) -> PoolResult<SearchOutcome> {
        matching::find_possible_rides(&self.store, origin, destination, seats, self.config.search)
    }

    pub fn reserve_itinerary(
        &mut self,
        rider: &str,
        ride_ids: &[RideId],
        seats: u32,
    ) -> PoolResult<Itinerary> {
        matching::reserve_itinerary(&mut self.store, rider, ride_ids, seats)
    }

    pub fn ride_summaries(&self, active_only: bool) -> Vec<RideSummary> {
        reporting::ride_summaries(&self.store, active_only)
    }

    pub fn stats_summaries(&self) -> Vec<StatsSummary> {
        reporting::stats_summaries(&self.store)
    }

    pub fn totals(&self) -> PoolTotals {
        reporting::totals(&self.store)
    }
}
