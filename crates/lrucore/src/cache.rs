//! Thread-safe LRU cache handle

use std::borrow::Borrow;
use std::hash::Hash;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::{CacheConfig, DEFAULT_CAPACITY};
use crate::entry::Entry;
use crate::error::Result;
use crate::lru::LruState;
use crate::stats::CacheStats;
use crate::traits::Cache;

/// Fixed-capacity LRU cache safe to share between threads.
///
/// The recency list and the lookup table sit behind one lock and are
/// always mutated together. Operations that reorder entries (`set`,
/// `get`, `remove`, `purge`, `drain`) take the write side; pure
/// inspection takes the read side.
pub struct Lru<K, V> {
    /// Recency list + lookup table
    state: RwLock<LruState<K, V>>,

    /// Cache statistics
    stats: CacheStats,
}

impl<K, V> Lru<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new cache from a requested capacity
    ///
    /// # Arguments
    /// * `capacity` - Requested capacity; values `<= 1` fall back to
    ///   [`DEFAULT_CAPACITY`]
    pub fn new(capacity: isize) -> Self {
        Self::with_config(&CacheConfig::with_capacity(capacity))
    }

    /// Create a new cache from a [`CacheConfig`]
    pub fn with_config(config: &CacheConfig) -> Self {
        let budget = config.slot_budget();
        if config.capacity <= 1 {
            debug!(
                requested = config.capacity,
                fallback = DEFAULT_CAPACITY,
                "requested lru capacity unusable, using default"
            );
        }
        debug!(capacity = budget, "lru cache created");

        Self {
            state: RwLock::new(LruState::new(budget)),
            stats: CacheStats::new(),
        }
    }

    /// Insert or update a value
    ///
    /// # Returns
    /// * `Result<bool>` - `true` when `key` was not cached before
    pub fn set(&self, key: K, value: V) -> Result<bool> {
        let outcome = self.state.write().set(key, value)?;

        if outcome.evicted {
            self.stats.record_eviction();
        }
        if outcome.is_new {
            self.stats.record_insert();
        } else {
            self.stats.record_update();
        }

        Ok(outcome.is_new)
    }

    /// Fetch a value and mark it most recently used
    ///
    /// # Returns
    /// * `Result<Option<V>>` - `Ok(None)` on a miss; errors only signal
    ///   corrupted internal state
    pub fn get<Q>(&self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut state = self.state.write();
        match state.get(key)? {
            Some(entry) => {
                self.stats.record_hit();
                Ok(Some(entry.value().clone()))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    /// Fetch a value without touching counters or recency order
    pub fn read<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.read().read(key).map(|entry| entry.value().clone())
    }

    /// Copy of the full entry for `key`, including its access counter
    pub fn peek_entry<Q>(&self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.read().read(key).cloned()
    }

    /// Check whether `key` is cached, without touching it
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.state.read().read(key).is_some()
    }

    /// Remove a key from the cache
    ///
    /// # Returns
    /// * `bool` - `true` if an entry was removed
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.state.write().remove(key).is_some();
        if removed {
            self.stats.record_removal();
        }
        removed
    }

    /// Drop every entry and reset counters. Capacity is kept.
    pub fn purge(&self) {
        let mut state = self.state.write();
        let dropped = state.len();
        state.reset();
        self.stats.reset();
        debug!(dropped, "lru cache purged");
    }

    /// Take every entry out of the cache, most recently used first
    ///
    /// The touch counter is left untouched.
    pub fn drain(&self) -> Result<Vec<Entry<K, V>>> {
        let entries = self.state.write().drain()?;
        debug!(drained = entries.len(), "lru cache drained");
        Ok(entries)
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot budget; eviction fires once the entry count exceeds it
    pub fn capacity(&self) -> usize {
        self.state.read().capacity()
    }

    /// Global touch counter, bumped by every `set` and `get`
    pub fn touches(&self) -> u64 {
        self.state.read().touches()
    }

    /// Key at the head of the recency list
    pub fn most_recent(&self) -> Option<K> {
        self.state.read().front().map(|entry| entry.key().clone())
    }

    /// Key at the tail of the recency list, next in line for eviction
    pub fn least_recent(&self) -> Option<K> {
        self.state.read().back().map(|entry| entry.key().clone())
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> Vec<K> {
        self.state.read().iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl<K, V> Default for Lru<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::with_config(&CacheConfig::default())
    }
}

impl<K, V> Cache<K, V> for Lru<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn set(&self, key: K, value: V) -> Result<bool> {
        Lru::set(self, key, value)
    }

    fn get(&self, key: &K) -> Result<Option<V>> {
        Lru::get(self, key)
    }

    fn read(&self, key: &K) -> Option<V> {
        Lru::read(self, key)
    }

    fn remove(&self, key: &K) -> bool {
        Lru::remove(self, key)
    }

    fn purge(&self) {
        Lru::purge(self)
    }

    fn len(&self) -> usize {
        Lru::len(self)
    }
}
