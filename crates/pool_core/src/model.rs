use std::fmt;

/// Dense ride identifier: the number of rides that existed when it was offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RideId(pub usize);

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub gender: String,
    pub age: u32,
}

/// A vehicle registered under an owner name. The owner does not have to be a
/// registered user. Equality over (owner, model, plate) identifies the vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    pub owner: String,
    pub model: String,
    pub plate: String,
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.owner, self.model, self.plate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    pub id: RideId,
    pub driver: String,
    pub origin: String,
    pub destination: String,
    pub available_seats: u32,
    /// Copy of the vehicle record at offer time.
    pub vehicle: Vehicle,
    pub active: bool,
}

impl Ride {
    /// Active with at least `seats` seats left.
    pub fn can_seat(&self, seats: u32) -> bool {
        self.active && self.available_seats >= seats
    }

    /// Exact, case-sensitive route match.
    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Offered,
    Taken,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RideStats {
    pub offered: u32,
    pub taken: u32,
}

impl RideStats {
    pub fn increment(&mut self, kind: StatKind) {
        match kind {
            StatKind::Offered => self.offered += 1,
            StatKind::Taken => self.taken += 1,
        }
    }
}

/// Ordered chain of rides connecting a source to a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub rides: Vec<Ride>,
}

impl Itinerary {
    pub fn ride_ids(&self) -> Vec<RideId> {
        self.rides.iter().map(|ride| ride.id).collect()
    }

    pub fn hops(&self) -> usize {
        self.rides.len()
    }

    pub fn origin(&self) -> Option<&str> {
        self.rides.first().map(|ride| ride.origin.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.rides.last().map(|ride| ride.destination.as_str())
    }

    /// Every ride starts where the previous one ends.
    pub fn is_connected(&self) -> bool {
        self.rides
            .windows(2)
            .all(|pair| pair[0].destination == pair[1].origin)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ride in &self.rides {
            if first {
                write!(f, "{}", ride.origin)?;
                first = false;
            }
            write!(
                f,
                " -[#{} {}]-> {}",
                ride.id, ride.vehicle.model, ride.destination
            )?;
        }
        Ok(())
    }
}
