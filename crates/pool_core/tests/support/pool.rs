#![allow(dead_code)]

use pool_core::matching::{RideRequest, SearchLimits, SelectionStrategy};
use pool_core::offering::RideOffer;
use pool_core::{PoolConfig, RidePool};

#[derive(Debug, Clone)]
struct PlannedRide {
    driver: String,
    model: String,
    plate: String,
    origin: String,
    destination: String,
    seats: u32,
}

/// Builds a `RidePool` with registered users, vehicles and offered rides.
#[derive(Debug, Default, Clone)]
pub struct TestPoolBuilder {
    config: PoolConfig,
    users: Vec<(String, String, u32)>,
    rides: Vec<PlannedRide>,
}

impl TestPoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_limits(mut self, limits: SearchLimits) -> Self {
        self.config.search = limits;
        self
    }

    pub fn with_user(mut self, name: &str, gender: &str, age: u32) -> Self {
        self.users
            .push((name.to_string(), gender.to_string(), age));
        self
    }

    /// Register `driver`'s vehicle and offer a ride with it. Rides are offered in
    /// call order, so the n-th call yields ride id n.
    pub fn with_ride(
        mut self,
        driver: &str,
        model: &str,
        plate: &str,
        origin: &str,
        destination: &str,
        seats: u32,
    ) -> Self {
        self.rides.push(PlannedRide {
            driver: driver.to_string(),
            model: model.to_string(),
            plate: plate.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            seats,
        });
        self
    }

    pub fn build(self) -> RidePool {
        let mut pool = RidePool::new(self.config);
        for (name, gender, age) in &self.users {
            pool.add_user(name, gender, *age);
        }
        for ride in &self.rides {
            if !pool
                .store()
                .vehicles(&ride.driver)
                .iter()
                .any(|vehicle| vehicle.model == ride.model && vehicle.plate == ride.plate)
            {
                pool.add_vehicle(&ride.driver, &ride.model, &ride.plate);
            }
            pool.offer_ride(&RideOffer {
                driver: ride.driver.clone(),
                origin: ride.origin.clone(),
                destination: ride.destination.clone(),
                seats: ride.seats,
                vehicle_model: ride.model.clone(),
                plate: ride.plate.clone(),
            })
            .expect("planned ride should be offered");
        }
        pool
    }
}

pub fn request(
    rider: &str,
    origin: &str,
    destination: &str,
    seats: u32,
    strategy: &str,
) -> RideRequest {
    RideRequest {
        rider: rider.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        seats,
        strategy: SelectionStrategy::parse(strategy),
    }
}
