mod support;

use pool_core::matching::SearchLimits;
use pool_core::model::{Itinerary, RideId};
use pool_core::{PoolError, RidePool, Selection};
use support::pool::{request, TestPoolBuilder};

fn assert_valid(itinerary: &Itinerary, origin: &str, destination: &str, seats: u32) {
    assert_eq!(itinerary.origin(), Some(origin));
    assert_eq!(itinerary.destination(), Some(destination));
    assert!(itinerary.is_connected(), "disconnected: {itinerary}");
    assert!(itinerary
        .rides
        .iter()
        .all(|ride| ride.active && ride.available_seats >= seats));
}

fn dense_pool() -> RidePool {
    TestPoolBuilder::new()
        .with_search_limits(SearchLimits::unbounded())
        .with_ride("d0", "M", "P-0", "Mumbai", "Pune", 2)
        .with_ride("d1", "M", "P-1", "Pune", "Bangalore", 1)
        .with_ride("d2", "M", "P-2", "Pune", "Bangalore", 3)
        .with_ride("d3", "M", "P-3", "Bangalore", "Mysore", 2)
        .with_ride("d4", "M", "P-4", "Mumbai", "Bangalore", 4)
        .with_ride("d5", "M", "P-5", "Bangalore", "Pune", 2)
        .with_ride("d6", "M", "P-6", "Pune", "Mysore", 1)
        .with_ride("d7", "M", "P-7", "Mysore", "Mumbai", 5)
        .build()
}

#[test]
fn two_leg_chain_is_the_only_itinerary() {
    let pool = TestPoolBuilder::new()
        .with_ride("Rohan", "Swift", "KA-01-12345", "A", "B", 1)
        .with_ride("Shipra", "Polo", "KA-05-41491", "B", "C", 1)
        .build();

    let outcome = pool.find_possible_rides("A", "C", 1).unwrap();
    assert_eq!(outcome.itineraries.len(), 1);
    assert_eq!(
        outcome.itineraries[0].ride_ids(),
        vec![RideId(0), RideId(1)]
    );
}

#[test]
fn every_itinerary_in_a_cyclic_graph_is_valid() {
    let pool = dense_pool();
    for seats in 1..=3 {
        let outcome = pool.find_possible_rides("Mumbai", "Mysore", seats).unwrap();
        for itinerary in &outcome.itineraries {
            assert_valid(itinerary, "Mumbai", "Mysore", seats);
        }
        assert!(!outcome.capped);
    }
}

#[test]
fn enumerates_all_branches() {
    let pool = dense_pool();
    let found: Vec<Vec<RideId>> = pool
        .find_possible_rides("Mumbai", "Mysore", 1)
        .unwrap()
        .itineraries
        .iter()
        .map(Itinerary::ride_ids)
        .collect();

    let ids = |raw: &[usize]| raw.iter().copied().map(RideId).collect::<Vec<_>>();
    assert_eq!(
        found,
        vec![
            ids(&[0, 1, 3]),
            ids(&[0, 2, 3]),
            ids(&[0, 6]),
            ids(&[4, 3]),
            ids(&[4, 5, 6]),
        ]
    );
}

#[test]
fn seat_requirement_filters_legs() {
    let pool = dense_pool();
    let found: Vec<Vec<RideId>> = pool
        .find_possible_rides("Mumbai", "Mysore", 2)
        .unwrap()
        .itineraries
        .iter()
        .map(Itinerary::ride_ids)
        .collect();
    assert_eq!(
        found,
        vec![vec![RideId(0), RideId(2), RideId(3)], vec![RideId(4), RideId(3)]]
    );
}

#[test]
fn discovery_does_not_reserve_anything() {
    let pool = dense_pool();
    let before: Vec<u32> = pool.store().rides().map(|r| r.available_seats).collect();
    pool.find_possible_rides("Mumbai", "Mysore", 1).unwrap();
    let after: Vec<u32> = pool.store().rides().map(|r| r.available_seats).collect();
    assert_eq!(before, after);
}

#[test]
fn no_itineraries_when_nothing_connects() {
    let pool = dense_pool();
    assert!(pool
        .find_possible_rides("Mumbai", "Delhi", 1)
        .unwrap()
        .itineraries
        .is_empty());
}

#[test]
fn select_or_discover_falls_back_then_reserves() {
    let mut pool = TestPoolBuilder::new()
        .with_ride("Rohan", "Polo", "KA-01-44252", "Mumbai", "Pune", 1)
        .with_ride("Rahul", "XUV", "KA-05-1234", "Pune", "Bangalore", 5)
        .with_ride("Shipra", "Polo", "KA-05-41491", "Bangalore", "Mysore", 2)
        .build();

    let req = request("Shashank", "Mumbai", "Mysore", 1, "Most Vacant");
    let itineraries = match pool.select_or_discover(&req).unwrap() {
        Selection::Itineraries(found) => found.itineraries,
        other => panic!("expected itineraries, got {other:?}"),
    };
    assert_eq!(itineraries.len(), 1);

    let reserved = pool
        .reserve_itinerary("Shashank", &itineraries[0].ride_ids(), 1)
        .unwrap();
    let seats: Vec<u32> = reserved.rides.iter().map(|r| r.available_seats).collect();
    assert_eq!(seats, [0, 4, 1]);
    assert_eq!(pool.store().stats("Shashank").unwrap().taken, 3);

    // Mumbai -> Pune is now full.
    match pool.select_or_discover(&req).unwrap() {
        Selection::Itineraries(found) => assert!(found.itineraries.is_empty()),
        other => panic!("expected no itineraries, got {other:?}"),
    }
    assert!(matches!(
        pool.reserve_itinerary("Shashank", &itineraries[0].ride_ids(), 1),
        Err(PoolError::InsufficientSeats { ride: RideId(0), .. })
    ));
}

#[test]
fn select_or_discover_prefers_direct_ride() {
    let mut pool = TestPoolBuilder::new()
        .with_ride("Rohan", "Swift", "KA-01-12345", "A", "C", 1)
        .with_ride("Rohan", "Polo", "KA-01-44252", "A", "B", 1)
        .with_ride("Shipra", "Polo", "KA-05-41491", "B", "C", 1)
        .build();
    assert_eq!(
        pool.select_or_discover(&request("Nandini", "A", "C", 1, ""))
            .unwrap(),
        Selection::Direct(RideId(0))
    );
}

#[test]
fn zero_seat_discovery_is_rejected_when_every_ride_is_full() {
    let mut pool = TestPoolBuilder::new()
        .with_ride("Rohan", "Swift", "KA-01-12345", "A", "B", 1)
        .build();
    pool.reserve_itinerary("Nandini", &[RideId(0)], 1).unwrap();

    assert_eq!(
        pool.find_possible_rides("A", "B", 0),
        Err(PoolError::InvalidSeatCount(0))
    );
    assert_eq!(pool.store().ride(RideId(0)).unwrap().available_seats, 0);
}

#[test]
fn default_hop_limit_reports_the_chain_it_skipped() {
    let chain = TestPoolBuilder::new()
        .with_ride("d0", "M", "P-0", "A", "B", 1)
        .with_ride("d1", "M", "P-1", "B", "C", 1)
        .with_ride("d2", "M", "P-2", "C", "D", 1)
        .with_ride("d3", "M", "P-3", "D", "E", 1)
        .with_ride("d4", "M", "P-4", "E", "F", 1);

    let mut pool = chain.clone().build();
    let req = request("Nandini", "A", "F", 1, "");
    match pool.select_or_discover(&req).unwrap() {
        Selection::Itineraries(found) => {
            assert!(found.itineraries.is_empty());
            assert!(found.hop_pruned > 0);
            assert!(found.is_truncated());
        }
        other => panic!("expected itineraries, got {other:?}"),
    }

    let unbounded = chain.with_search_limits(SearchLimits::unbounded()).build();
    let outcome = unbounded.find_possible_rides("A", "F", 1).unwrap();
    assert_eq!(outcome.itineraries.len(), 1);
    assert_eq!(outcome.hop_pruned, 0);
}
