//! Error kinds surfaced by the registry and the matching engine.

use crate::model::RideId;

pub type PoolResult<T> = Result<T, PoolError>;

/// Every failure is recoverable by the caller; none leaves the store half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("vehicle not found: {owner} has no {model} with plate {plate}")]
    VehicleNotFound {
        owner: String,
        model: String,
        plate: String,
    },

    #[error("ride already active for vehicle {plate}")]
    VehicleAlreadyActive { plate: String },

    #[error("no rides found from {origin} to {destination} with {seats} seat(s)")]
    NoRideFound {
        origin: String,
        destination: String,
        seats: u32,
    },

    #[error("no rides found with the preferred vehicle {model}")]
    PreferredVehicleNotFound { model: String },

    #[error("invalid ride id {0}")]
    InvalidRideId(i64),

    #[error("expected {expected} comma-separated fields, got {found}")]
    InvalidFieldCount { expected: usize, found: usize },

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// A `Key=value` field arrived without the `=`.
    #[error("malformed field {field:?}, expected Key=value")]
    MalformedField { field: String },

    #[error("seat count must be at least 1, got {0}")]
    InvalidSeatCount(u32),

    #[error("ride {ride} has {available} seat(s) left, {requested} requested")]
    InsufficientSeats {
        ride: RideId,
        available: u32,
        requested: u32,
    },

    #[error("ride {0} has already ended")]
    RideInactive(RideId),

    #[error("itinerary has no rides")]
    EmptyItinerary,

    #[error("ride {to} does not start where ride {from} ends")]
    DisconnectedItinerary { from: RideId, to: RideId },
}

impl PoolError {
    /// `InvalidRideId` for an id that does not fit the signed wire form
    /// saturates at `i64::MAX` instead of wrapping negative.
    pub fn unknown_ride(id: RideId) -> Self {
        Self::InvalidRideId(i64::try_from(id.0).unwrap_or(i64::MAX))
    }

    /// Build an `InvalidNumber` from the field label and the raw text.
    pub fn invalid_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
        }
    }
}
