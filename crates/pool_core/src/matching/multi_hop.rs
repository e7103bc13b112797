//! Multi-hop itinerary discovery.
//!
//! Locations are graph nodes and every active ride with enough free seats is a
//! directed edge from its origin to its destination. A depth-first search from
//! the source enumerates every chain of rides ending at the destination,
//! branching on all rides at each node.
//!
//! Termination on cyclic ride graphs comes from a per-path visited-location set:
//! a path never re-enters a location it already passed through. [`SearchLimits`]
//! additionally caps path length and the number of itineraries returned, since
//! the itinerary count grows exponentially with graph density.
//!
//! Discovery never reserves seats; see [`super::reserve_itinerary`].
//!
//! # Algorithm Behavior
//!
//! 1. Rides that are inactive or have fewer than `seats` free are dropped.
//! 2. A breadth-first walk over the reversed ride graph collects every location
//!    that can still reach the destination; legs leading anywhere else are skipped.
//! 3. From the source, every qualifying outgoing ride is tried in ride-id order.
//!    A ride ending at the destination closes an itinerary; any other ride is
//!    followed if its destination is unvisited on the current path and the hop
//!    limit leaves room for another leg.
//!
//! # Performance
//!
//! The reachability pass is O(rides). The DFS is exponential in graph density
//! in the worst case, which is what `max_hops` and `max_itineraries` bound.

use std::collections::{HashMap, HashSet};

use pathfinding::prelude::bfs_reach;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PoolError, PoolResult};
use crate::model::{Itinerary, Ride};
use crate::store::RecordStore;

/// Bounds on the multi-hop search. `0` disables a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum number of rides in one itinerary.
    pub max_hops: usize,
    /// Stop after this many itineraries have been found.
    pub max_itineraries: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_hops: 4,
            max_itineraries: 32,
        }
    }
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self {
            max_hops: 0,
            max_itineraries: 0,
        }
    }

    fn allows_extension(&self, current_hops: usize) -> bool {
        // A ride added now leaves room for at least one more before the cap.
        self.max_hops == 0 || current_hops + 2 <= self.max_hops
    }

    fn allows_leg(&self, current_hops: usize) -> bool {
        self.max_hops == 0 || current_hops < self.max_hops
    }

    fn is_full(&self, found: usize) -> bool {
        self.max_itineraries != 0 && found >= self.max_itineraries
    }
}

/// Itineraries found plus whether a limit cut the search short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub itineraries: Vec<Itinerary>,
    /// The itinerary cap was hit; more itineraries may exist.
    pub capped: bool,
    /// Branches abandoned because of the hop limit.
    pub hop_pruned: usize,
}

impl SearchOutcome {
    /// A limit cut the search short, so longer or further itineraries may exist.
    pub fn is_truncated(&self) -> bool {
        self.capped || self.hop_pruned > 0
    }
}

struct Search<'a, 'e> {
    edges: &'e [&'a Ride],
    reaches_target: HashSet<&'a str>,
    destination: &'a str,
    limits: SearchLimits,
    outcome: SearchOutcome,
}

impl<'a> Search<'a, '_> {
    fn visit(&mut self, location: &str, path: &mut Vec<&'a Ride>, visited: &mut HashSet<&'a str>) {
        let edges = self.edges;
        for &ride in edges {
            if self.outcome.capped {
                return;
            }
            if ride.origin != location || !self.limits.allows_leg(path.len()) {
                continue;
            }

            if ride.destination == self.destination {
                if self.limits.is_full(self.outcome.itineraries.len()) {
                    self.outcome.capped = true;
                    return;
                }
                let rides = path
                    .iter()
                    .chain(std::iter::once(&ride))
                    .map(|&hop| hop.clone())
                    .collect();
                self.outcome.itineraries.push(Itinerary { rides });
                continue;
            }

            let next = ride.destination.as_str();
            if visited.contains(next) || !self.reaches_target.contains(next) {
                continue;
            }
            if !self.limits.allows_extension(path.len()) {
                self.outcome.hop_pruned += 1;
                continue;
            }

            path.push(ride);
            visited.insert(next);
            self.visit(next, path, visited);
            visited.remove(next);
            path.pop();
        }
    }
}

/// Locations from which `destination` can be reached over the given rides.
fn locations_reaching<'a>(edges: &[&'a Ride], destination: &'a str) -> HashSet<&'a str> {
    let mut incoming: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
    for ride in edges {
        incoming
            .entry(ride.destination.as_str())
            .or_default()
            .push(ride.origin.as_str());
    }
    bfs_reach(destination, |location| {
        incoming.get(location).into_iter().flatten().copied()
    })
    .collect()
}

/// Enumerate ride chains from `origin` to `destination` where every ride is
/// active with at least `seats` free.
///
/// Each itinerary starts at `origin`, ends at `destination` and is connected;
/// itineraries are produced in depth-first ride-id order. Asking for zero seats
/// fails with `InvalidSeatCount`.
pub fn find_possible_rides(
    store: &RecordStore,
    origin: &str,
    destination: &str,
    seats: u32,
    limits: SearchLimits,
) -> PoolResult<SearchOutcome> {
    if seats == 0 {
        return Err(PoolError::InvalidSeatCount(seats));
    }

    let edges: Vec<&Ride> = store.rides().filter(|ride| ride.can_seat(seats)).collect();
    let reaches_target = locations_reaching(&edges, destination);

    let mut search = Search {
        edges: &edges,
        reaches_target,
        destination,
        limits,
        outcome: SearchOutcome::default(),
    };
    if search.reaches_target.contains(origin) {
        let mut visited = HashSet::from([origin]);
        search.visit(origin, &mut Vec::new(), &mut visited);
    }

    let outcome = search.outcome;
    debug!(
        origin,
        destination,
        seats,
        edges = edges.len(),
        itineraries = outcome.itineraries.len(),
        hop_pruned = outcome.hop_pruned,
        "multi-hop search finished"
    );
    if outcome.capped {
        warn!(
            origin,
            destination,
            max_itineraries = limits.max_itineraries,
            "multi-hop search stopped at the itinerary cap"
        );
    }
    if outcome.hop_pruned > 0 {
        warn!(
            origin,
            destination,
            max_hops = limits.max_hops,
            hop_pruned = outcome.hop_pruned,
            "multi-hop search skipped chains longer than the hop limit"
        );
    }
    Ok(outcome)
}
