//! Parsing of the comma-separated menu input.
//!
//! Fields are split on `", "` and must arrive in the exact count each command
//! expects. Numbers are parsed strictly: malformed text is an `InvalidNumber`.

use pool_core::offering::RideOffer;
use pool_core::{PoolError, PoolResult};

pub const FIELD_DELIMITER: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub gender: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub owner: String,
    pub model: String,
    pub plate: String,
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddUser,
    AddVehicle,
    OfferRide,
    SelectRide,
    EndRide,
    PrintStats,
    PrintRides,
    FindRoutes,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddUser,
        MenuChoice::AddVehicle,
        MenuChoice::OfferRide,
        MenuChoice::SelectRide,
        MenuChoice::EndRide,
        MenuChoice::PrintStats,
        MenuChoice::PrintRides,
        MenuChoice::FindRoutes,
        MenuChoice::Quit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddUser => "Add New User Details",
            MenuChoice::AddVehicle => "Add New Vehicle Details",
            MenuChoice::OfferRide => "Offer Ride",
            MenuChoice::SelectRide => "Select Ride",
            MenuChoice::EndRide => "End Ride",
            MenuChoice::PrintStats => "Print Ride Stats",
            MenuChoice::PrintRides => "Print Existing Rides",
            MenuChoice::FindRoutes => "Find Multi-hop Rides",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Split `line` into exactly `expected` trimmed fields.
pub fn split_fields(line: &str, expected: usize) -> PoolResult<Vec<&str>> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != expected {
        return Err(PoolError::InvalidFieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

pub fn parse_u32(field: &str, value: &str) -> PoolResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| PoolError::invalid_number(field, value))
}

pub fn parse_i64(field: &str, value: &str) -> PoolResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| PoolError::invalid_number(field, value))
}

/// Value part of a `Key=value` field. The key itself is not checked.
pub fn keyed_value(field: &str) -> PoolResult<&str> {
    field
        .split_once('=')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| PoolError::MalformedField {
            field: field.to_string(),
        })
}

/// `Name, Gender, Age`
pub fn parse_user(line: &str) -> PoolResult<NewUser> {
    let fields = split_fields(line, 3)?;
    Ok(NewUser {
        name: fields[0].to_string(),
        gender: fields[1].to_string(),
        age: parse_u32("age", fields[2])?,
    })
}

/// `Owner, Model, Plate`
pub fn parse_vehicle(line: &str) -> PoolResult<NewVehicle> {
    let fields = split_fields(line, 3)?;
    Ok(NewVehicle {
        owner: fields[0].to_string(),
        model: fields[1].to_string(),
        plate: fields[2].to_string(),
    })
}

/// `Driver, Origin=..., Available Seats=..., Vehicle=..., Plate, Destination=...`
pub fn parse_offer(line: &str) -> PoolResult<RideOffer> {
    let fields = split_fields(line, 6)?;
    Ok(RideOffer {
        driver: fields[0].to_string(),
        origin: keyed_value(fields[1])?.to_string(),
        seats: parse_u32("available seats", keyed_value(fields[2])?)?,
        vehicle_model: keyed_value(fields[3])?.to_string(),
        plate: fields[4].to_string(),
        destination: keyed_value(fields[5])?.to_string(),
    })
}
