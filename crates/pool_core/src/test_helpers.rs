//! Test helpers for common fixture setup.
//!
//! Shared by unit tests, integration tests, doc examples and benchmarks.

use crate::model::{Ride, RideId, Vehicle};
use crate::offering::{offer_ride, RideOffer};
use crate::registration::add_vehicle;
use crate::store::RecordStore;

/// Vehicle model used by [`sample_ride`].
pub const TEST_MODEL: &str = "Swift";

/// A detached active ride, not stored anywhere.
pub fn sample_ride(id: usize, origin: &str, destination: &str, seats: u32) -> Ride {
    sample_ride_with_model(id, origin, destination, seats, TEST_MODEL)
}

pub fn sample_ride_with_model(
    id: usize,
    origin: &str,
    destination: &str,
    seats: u32,
    model: &str,
) -> Ride {
    Ride {
        id: RideId(id),
        driver: format!("driver-{id}"),
        origin: origin.to_string(),
        destination: destination.to_string(),
        available_seats: seats,
        vehicle: Vehicle {
            owner: format!("driver-{id}"),
            model: model.to_string(),
            plate: format!("TEST-{id:04}"),
        },
        active: true,
    }
}

/// Store with one offered ride per `(origin, destination, seats)` leg.
///
/// Leg `i` gets ride id `i`, driver `driver-i` and a vehicle of its own, so no
/// offer trips the one-active-ride-per-vehicle check.
///
/// # Panics
///
/// Panics if an offer is rejected (zero seats).
pub fn store_with_rides(legs: &[(&str, &str, u32)]) -> RecordStore {
    let mut store = RecordStore::new();
    for (index, &(origin, destination, seats)) in legs.iter().enumerate() {
        let driver = format!("driver-{index}");
        let plate = format!("TEST-{index:04}");
        add_vehicle(&mut store, &driver, TEST_MODEL, &plate);
        offer_ride(
            &mut store,
            &RideOffer {
                driver,
                origin: origin.to_string(),
                destination: destination.to_string(),
                seats,
                vehicle_model: TEST_MODEL.to_string(),
                plate,
            },
        )
        .expect("fixture offer should be accepted");
    }
    store
}
