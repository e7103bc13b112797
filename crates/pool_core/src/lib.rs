//! Ride-pooling registry and matching engine.
//!
//! Users register, vehicles are attached to owners, drivers offer rides with a
//! seat capacity, and riders select a matching ride under a selection strategy.
//! When no direct ride exists, [`matching::find_possible_rides`] discovers
//! multi-hop itineraries that [`matching::reserve_itinerary`] can book atomically.

pub mod config;
pub mod demo;
pub mod error;
pub mod matching;
pub mod model;
pub mod offering;
pub mod pool;
pub mod registration;
pub mod reporting;
pub mod store;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use pool::{RidePool, Selection};
pub use store::RecordStore;
