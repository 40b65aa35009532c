//! Cache configuration

use serde::{Deserialize, Serialize};

/// Capacity substituted when the requested one is unusable
pub const DEFAULT_CAPACITY: usize = 16;

/// Settings for building an [`Lru`](crate::Lru)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Requested capacity. Values `<= 1` fall back to [`DEFAULT_CAPACITY`].
    pub capacity: isize,
}

/// Requests `DEFAULT_CAPACITY + 1`, which yields the same slot budget as
/// the fallback for unusable capacities.
impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as isize + 1,
        }
    }
}

impl CacheConfig {
    /// Config with the given requested capacity
    pub fn with_capacity(capacity: isize) -> Self {
        Self { capacity }
    }

    /// Internal slot budget derived from the requested capacity.
    ///
    /// The budget is `capacity - 1`; anything `<= 0` becomes
    /// [`DEFAULT_CAPACITY`]. Eviction starts once the entry count exceeds
    /// the budget, so a request of `N >= 2` holds at most `N` entries.
    pub fn slot_budget(&self) -> usize {
        match self.capacity.saturating_sub(1) {
            budget if budget <= 0 => DEFAULT_CAPACITY,
            budget => budget as usize,
        }
    }
}
