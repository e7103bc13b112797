//! Demo population: a handful of users, vehicles, rides and selections around
//! Hyderabad, Bangalore, Mysore, Pune and Mumbai.

use std::fmt;

use crate::error::PoolError;
use crate::matching::{RideRequest, SelectionStrategy};
use crate::model::{RideId, User, Vehicle};
use crate::offering::RideOffer;
use crate::pool::{RidePool, Selection};

const USERS: &[(&str, &str, u32)] = &[
    ("Rohan", "M", 36),
    ("Shashank", "M", 29),
    ("Nandini", "F", 29),
    ("Shipra", "F", 27),
    ("Gaurav", "M", 29),
    ("Rahul", "M", 35),
];

const VEHICLES: &[(&str, &str, &str)] = &[
    ("Rohan", "Swift", "KA-01-12345"),
    ("Shashank", "Baleno", "TS-05-62395"),
    ("Shipra", "Polo", "KA-05-41491"),
    ("Shipra", "Activa", "KA-12-12332"),
    ("Rahul", "XUV", "KA-05-1234"),
    ("Rohan", "Polo", "KA-01-44252"),
];

/// (driver, origin, seats, model, plate, destination)
const OFFERS: &[(&str, &str, u32, &str, &str, &str)] = &[
    ("Rohan", "Hyderabad", 1, "Swift", "KA-01-12345", "Bangalore"),
    ("Shipra", "Bangalore", 1, "Activa", "KA-12-12332", "Mysore"),
    ("Shipra", "Bangalore", 2, "Polo", "KA-05-41491", "Mysore"),
    ("Shashank", "Hyderabad", 2, "Baleno", "TS-05-62395", "Bangalore"),
    ("Rahul", "Pune", 5, "XUV", "KA-05-1234", "Bangalore"),
    // Swift is still on ride 0, so this one is rejected.
    ("Rohan", "Mumbai", 1, "Swift", "KA-01-12345", "Delhi"),
    ("Rohan", "Mumbai", 1, "Polo", "KA-01-44252", "Pune"),
];

/// (rider, origin, destination, seats, strategy)
const SELECTIONS: &[(&str, &str, &str, u32, &str)] = &[
    ("Nandini", "Bangalore", "Mysore", 1, "Most Vacant"),
    ("Gaurav", "Bangalore", "Mysore", 1, "Preferred Vehicle=Activa"),
    ("Shashank", "Mumbai", "Mysore", 1, "Most Vacant"),
    ("Rohan", "Hyderabad", "Bangalore", 1, "Preferred Vehicle=Baleno"),
    ("Shashank", "Hyderabad", "Bangalore", 1, "Preferred Vehicle=Polo"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoEvent {
    UserAdded(User),
    VehicleAdded(Vehicle),
    RideOffered(RideId),
    OfferRejected(PoolError),
    Selected {
        request: RideRequest,
        outcome: Result<Selection, PoolError>,
    },
}

impl fmt::Display for DemoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAdded(user) => {
                write!(f, "User added: {} ({}, {})", user.name, user.gender, user.age)
            }
            Self::VehicleAdded(vehicle) => write!(f, "Vehicle added: {vehicle}"),
            Self::RideOffered(id) => write!(f, "Ride offered: #{id}"),
            Self::OfferRejected(error) => write!(f, "Offer rejected: {error}"),
            Self::Selected { request, outcome } => {
                write!(
                    f,
                    "{} asked for {} seat(s) {} -> {} [{}]: ",
                    request.rider,
                    request.seats,
                    request.origin,
                    request.destination,
                    request.strategy
                )?;
                match outcome {
                    Ok(Selection::Direct(id)) => write!(f, "selected ride #{id}"),
                    Ok(Selection::Itineraries(found)) => {
                        match found.itineraries.first() {
                            None => write!(f, "no direct or multi-hop ride")?,
                            Some(first) => write!(
                                f,
                                "no direct ride, first of {} itinerary(ies): {first}",
                                found.itineraries.len()
                            )?,
                        }
                        if found.is_truncated() {
                            write!(f, " (search limit reached)")?;
                        }
                        Ok(())
                    }
                    Err(error) => write!(f, "{error}"),
                }
            }
        }
    }
}

/// Load the demo data into `pool`, returning what happened at each step.
pub fn populate(pool: &mut RidePool) -> Vec<DemoEvent> {
    let mut events = Vec::new();

    for &(name, gender, age) in USERS {
        events.push(DemoEvent::UserAdded(pool.add_user(name, gender, age)));
    }
    for &(owner, model, plate) in VEHICLES {
        events.push(DemoEvent::VehicleAdded(pool.add_vehicle(owner, model, plate)));
    }
    for &(driver, origin, seats, model, plate, destination) in OFFERS {
        let offer = RideOffer {
            driver: driver.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            seats,
            vehicle_model: model.to_string(),
            plate: plate.to_string(),
        };
        events.push(match pool.offer_ride(&offer) {
            Ok(id) => DemoEvent::RideOffered(id),
            Err(error) => DemoEvent::OfferRejected(error),
        });
    }
    for &(rider, origin, destination, seats, strategy) in SELECTIONS {
        let request = RideRequest {
            rider: rider.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            seats,
            strategy: SelectionStrategy::parse(strategy),
        };
        let outcome = pool.select_or_discover(&request);
        events.push(DemoEvent::Selected { request, outcome });
    }

    events
}
