use crate::model::Ride;

/// Policy that picks one ride among direct-route candidates.
///
/// Candidates are active rides on the requested route with enough seats, in
/// ride-id order. Different policies optimise for different things (first come,
/// most free seats, a specific vehicle model).
///
/// # Examples
///
/// ```rust
/// use pool_core::matching::{MostVacant, RideSelector};
/// use pool_core::test_helpers::sample_ride;
///
/// let small = sample_ride(0, "Bangalore", "Mysore", 1);
/// let large = sample_ride(1, "Bangalore", "Mysore", 3);
/// let picked = MostVacant.select(&[&small, &large]);
/// assert_eq!(picked.map(|ride| ride.id.0), Some(1));
/// ```
pub trait RideSelector: Send + Sync {
    /// Return the chosen candidate, or `None` when the policy accepts none of them.
    ///
    /// An empty candidate list always yields `None`.
    fn select<'a>(&self, candidates: &[&'a Ride]) -> Option<&'a Ride>;
}
