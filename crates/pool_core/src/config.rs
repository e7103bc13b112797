use serde::{Deserialize, Serialize};

use crate::matching::SearchLimits;

/// Engine configuration. Every field falls back to its default when missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Bounds for multi-hop itinerary discovery.
    pub search: SearchLimits,
}

impl PoolConfig {
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.search.max_hops = max_hops;
        self
    }

    pub fn with_max_itineraries(mut self, max_itineraries: usize) -> Self {
        self.search.max_itineraries = max_itineraries;
        self
    }
}
