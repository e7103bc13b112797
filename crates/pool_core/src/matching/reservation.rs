//! All-or-nothing seat reservation across a multi-hop itinerary.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::{PoolError, PoolResult};
use crate::model::{Itinerary, Ride, RideId, StatKind};
use crate::store::RecordStore;

/// Take `seats` on every ride of the chain, or on none of them.
///
/// The whole chain is validated before anything is written: every id must
/// exist, every ride must be active and connected to the next, and each ride
/// must have enough seats for all the legs that use it. The rider's `taken`
/// counter grows by one per leg.
pub fn reserve_itinerary(
    store: &mut RecordStore,
    rider: &str,
    ride_ids: &[RideId],
    seats: u32,
) -> PoolResult<Itinerary> {
    if seats == 0 {
        return Err(PoolError::InvalidSeatCount(seats));
    }
    if ride_ids.is_empty() {
        return Err(PoolError::EmptyItinerary);
    }

    let mut rides: Vec<Ride> = Vec::with_capacity(ride_ids.len());
    for &id in ride_ids {
        let ride = store
            .ride(id)
            .ok_or_else(|| PoolError::unknown_ride(id))?;
        if !ride.active {
            return Err(PoolError::RideInactive(id));
        }
        if let Some(previous) = rides.last() {
            if previous.destination != ride.origin {
                return Err(PoolError::DisconnectedItinerary {
                    from: previous.id,
                    to: id,
                });
            }
        }
        rides.push(ride.clone());
    }

    let mut demand: BTreeMap<RideId, u32> = BTreeMap::new();
    for ride in &rides {
        *demand.entry(ride.id).or_default() += seats;
    }
    let mut updated = Vec::with_capacity(demand.len());
    for (&id, &requested) in &demand {
        let mut ride = store
            .ride(id)
            .cloned()
            .ok_or_else(|| PoolError::unknown_ride(id))?;
        ride.available_seats =
            ride.available_seats
                .checked_sub(requested)
                .ok_or(PoolError::InsufficientSeats {
                    ride: id,
                    available: ride.available_seats,
                    requested,
                })?;
        updated.push(ride);
    }

    for ride in updated {
        store.update_ride(ride);
    }
    for _ in &rides {
        store.increment_stat(rider, StatKind::Taken);
    }

    let itinerary = Itinerary {
        rides: ride_ids
            .iter()
            .filter_map(|&id| store.ride(id).cloned())
            .collect(),
    };
    info!(
        rider,
        seats,
        hops = itinerary.hops(),
        rides = ?itinerary.ride_ids(),
        "itinerary reserved"
    );
    Ok(itinerary)
}
