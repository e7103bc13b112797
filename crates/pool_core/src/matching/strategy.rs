//! Selection strategies for direct rides.
//!
//! Every strategy sees the same candidate list: active rides on the requested
//! route with enough free seats, in ride-id order. None of them mutate rides;
//! seat booking happens in [`super::select_ride`] after a pick is made.

use std::fmt;

use super::selector::RideSelector;
use crate::error::PoolError;
use crate::model::Ride;

const MOST_VACANT: &str = "Most Vacant";
const PREFERRED_VEHICLE_PREFIX: &str = "Preferred Vehicle=";

/// First candidate in ride-id order.
///
/// # Algorithm Behavior
///
/// Returns the oldest matching offer, so riders are spread across drivers in
/// the order rides were offered.
///
/// # Performance
///
/// O(1).
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl RideSelector for FirstAvailable {
    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride> {
        candidates.first().copied()
    }
}

/// Candidate with the most available seats.
///
/// # Algorithm Behavior
///
/// 1. Walk the candidates in ride-id order, keeping the current best.
/// 2. A later ride replaces the best only with a strictly larger seat count,
///    so ties go to the earliest ride.
///
/// # Performance
///
/// O(n) in the number of candidates, single pass, no allocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct MostVacant;

impl RideSelector for MostVacant {
    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride> {
        candidates.iter().copied().fold(None, |best, ride| match best {
            Some(current) if current.available_seats >= ride.available_seats => Some(current),
            _ => Some(ride),
        })
    }
}

/// First candidate driven with the given vehicle model.
///
/// # Algorithm Behavior
///
/// Model names compare exactly. When no candidate matches, selection fails with
/// `PreferredVehicleNotFound` rather than falling back to another model.
///
/// # Performance
///
/// O(n) in the number of candidates; stops at the first match.
#[derive(Debug, Clone)]
pub struct PreferredVehicle {
    pub model: String,
}

impl RideSelector for PreferredVehicle {
    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride> {
        candidates
            .iter()
            .copied()
            .find(|ride| ride.vehicle.model == self.model)
    }
}

/// Strategy keyword as typed by the rider.
///
/// `"Most Vacant"` and `"Preferred Vehicle=<model>"` are recognised; anything
/// else falls back to the first matching ride.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    #[default]
    FirstAvailable,
    MostVacant,
    PreferredVehicle(String),
}

impl SelectionStrategy {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == MOST_VACANT {
            Self::MostVacant
        } else if let Some(model) = input.strip_prefix(PREFERRED_VEHICLE_PREFIX) {
            Self::PreferredVehicle(model.to_string())
        } else {
            Self::FirstAvailable
        }
    }

    pub fn selector(&self) -> Box<dyn RideSelector> {
        match self {
            Self::FirstAvailable => Box::new(FirstAvailable),
            Self::MostVacant => Box::new(MostVacant),
            Self::PreferredVehicle(model) => Box::new(PreferredVehicle {
                model: model.clone(),
            }),
        }
    }

    /// Error reported when candidates exist but the selector rejected all of them.
    pub(crate) fn rejection(&self, no_ride: PoolError) -> PoolError {
        match self {
            Self::PreferredVehicle(model) => PoolError::PreferredVehicleNotFound {
                model: model.clone(),
            },
            _ => no_ride,
        }
    }
}

impl From<&str> for SelectionStrategy {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstAvailable => write!(f, "First Available"),
            Self::MostVacant => write!(f, "{MOST_VACANT}"),
            Self::PreferredVehicle(model) => write!(f, "{PREFERRED_VEHICLE_PREFIX}{model}"),
        }
    }
}
