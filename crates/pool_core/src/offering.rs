//! Ride offering and ride lifecycle.

use tracing::{info, warn};

use crate::error::{PoolError, PoolResult};
use crate::model::{Ride, RideId, StatKind, Vehicle};
use crate::store::RecordStore;

/// Driver-side request to publish a ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RideOffer {
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub seats: u32,
    pub vehicle_model: String,
    pub plate: String,
}

/// First of the owner's vehicles matching both model and plate.
pub fn find_vehicle<'a>(
    store: &'a RecordStore,
    owner: &str,
    model: &str,
    plate: &str,
) -> Option<&'a Vehicle> {
    store
        .vehicles(owner)
        .iter()
        .find(|vehicle| vehicle.model == model && vehicle.plate == plate)
}

/// Create a new active ride for the driver's vehicle.
///
/// At most one active ride may reference an equal vehicle; the scan over all
/// rides here is the only place that invariant is enforced. A rejected offer
/// does not consume a ride id.
pub fn offer_ride(store: &mut RecordStore, offer: &RideOffer) -> PoolResult<RideId> {
    if offer.seats == 0 {
        return Err(PoolError::InvalidSeatCount(offer.seats));
    }

    let vehicle = find_vehicle(store, &offer.driver, &offer.vehicle_model, &offer.plate)
        .cloned()
        .ok_or_else(|| PoolError::VehicleNotFound {
            owner: offer.driver.clone(),
            model: offer.vehicle_model.clone(),
            plate: offer.plate.clone(),
        })?;

    if let Some(existing) = store
        .active_rides()
        .find(|ride| ride.vehicle == vehicle)
    {
        warn!(
            plate = %vehicle.plate,
            active_ride = %existing.id,
            "offer rejected, vehicle already on an active ride"
        );
        return Err(PoolError::VehicleAlreadyActive {
            plate: vehicle.plate,
        });
    }

    let id = store.insert_ride(|id| Ride {
        id,
        driver: offer.driver.clone(),
        origin: offer.origin.clone(),
        destination: offer.destination.clone(),
        available_seats: offer.seats,
        vehicle,
        active: true,
    });
    store.increment_stat(&offer.driver, StatKind::Offered);

    info!(
        ride_id = %id,
        driver = %offer.driver,
        origin = %offer.origin,
        destination = %offer.destination,
        seats = offer.seats,
        "ride offered"
    );
    Ok(id)
}

/// Mark a ride inactive. Ending an ended ride rewrites the same state.
pub fn end_ride(store: &mut RecordStore, id: i64) -> PoolResult<Ride> {
    let mut ride = usize::try_from(id)
        .ok()
        .and_then(|index| store.ride(RideId(index)))
        .cloned()
        .ok_or(PoolError::InvalidRideId(id))?;
    ride.active = false;
    store.update_ride(ride.clone());
    info!(ride_id = %ride.id, "ride ended");
    Ok(ride)
}
