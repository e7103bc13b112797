pub mod direct;
pub mod multi_hop;
pub mod reservation;
pub mod selector;
pub mod strategy;

pub use direct::{candidate_rides, select_ride, RideRequest};
pub use multi_hop::{find_possible_rides, SearchLimits, SearchOutcome};
pub use reservation::reserve_itinerary;
pub use selector::RideSelector;
pub use strategy::{FirstAvailable, MostVacant, PreferredVehicle, SelectionStrategy};
