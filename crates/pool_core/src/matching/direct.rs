//! Direct (single-hop) ride selection.

use tracing::{debug, info};

use super::strategy::SelectionStrategy;
use crate::error::{PoolError, PoolResult};
use crate::model::{Ride, RideId, StatKind};
use crate::store::RecordStore;

/// A rider asking for seats on an exact origin/destination route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideRequest {
    pub rider: String,
    pub origin: String,
    pub destination: String,
    pub seats: u32,
    pub strategy: SelectionStrategy,
}

impl RideRequest {
    fn no_ride(&self) -> PoolError {
        PoolError::NoRideFound {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            seats: self.seats,
        }
    }
}

/// Active rides on exactly this route with at least `seats` free, in id order.
pub fn candidate_rides<'a>(
    store: &'a RecordStore,
    origin: &str,
    destination: &str,
    seats: u32,
) -> Vec<&'a Ride> {
    store
        .active_rides()
        .filter(|ride| ride.serves(origin, destination) && ride.can_seat(seats))
        .collect()
}

/// Pick a direct ride for the request, take its seats and count it for the rider.
///
/// Fails with `NoRideFound` when no ride serves the route; falling back to a
/// multi-hop search is the caller's decision. Repeating a request takes seats
/// again; selection is not idempotent.
pub fn select_ride(store: &mut RecordStore, request: &RideRequest) -> PoolResult<RideId> {
    if request.seats == 0 {
        return Err(PoolError::InvalidSeatCount(request.seats));
    }

    let candidates = candidate_rides(store, &request.origin, &request.destination, request.seats);
    debug!(
        origin = %request.origin,
        destination = %request.destination,
        seats = request.seats,
        candidates = candidates.len(),
        strategy = %request.strategy,
        "filtered direct rides"
    );
    if candidates.is_empty() {
        return Err(request.no_ride());
    }

    let mut ride = request
        .strategy
        .selector()
        .select(&candidates)
        .cloned()
        .ok_or_else(|| request.strategy.rejection(request.no_ride()))?;

    ride.available_seats = ride
        .available_seats
        .checked_sub(request.seats)
        .ok_or(PoolError::InsufficientSeats {
            ride: ride.id,
            available: ride.available_seats,
            requested: request.seats,
        })?;
    let id = ride.id;
    let remaining = ride.available_seats;
    store.update_ride(ride);
    store.increment_stat(&request.rider, StatKind::Taken);

    info!(
        ride_id = %id,
        rider = %request.rider,
        seats = request.seats,
        remaining,
        "ride selected"
    );
    Ok(id)
}
