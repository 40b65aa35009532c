//! LRU (Least Recently Used) policy over a recency list and lookup table
//!
//! Nothing in here locks; [`Lru`](crate::Lru) wraps this state and
//! serializes access to it.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{error, trace};

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::list::RecencyList;

/// Upper bound on slots reserved up front; larger caches grow on demand
const PREALLOC_LIMIT: usize = 1024;

/// What a `set` did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SetOutcome {
    pub(crate) is_new: bool,
    pub(crate) evicted: bool,
}

/// Unsynchronized LRU state
pub(crate) struct LruState<K, V> {
    lookup: HashMap<K, usize, RandomState>,
    items: RecencyList<K, V>,
    capacity: usize,
    touches: u64,
}

impl<K, V> LruState<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create empty state with the given slot budget (must be >= 1)
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "slot budget must be greater than 0");

        // One slot above the budget can be occupied before eviction kicks in
        let slots = capacity.saturating_add(1).min(PREALLOC_LIMIT);
        Self {
            lookup: HashMap::with_capacity_and_hasher(slots, RandomState::new()),
            items: RecencyList::with_capacity(slots),
            capacity,
            touches: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn touches(&self) -> u64 {
        self.touches
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert or update `key`, evicting the tail when over budget
    pub(crate) fn set(&mut self, key: K, value: V) -> Result<SetOutcome> {
        self.touches += 1;
        let over_budget = self.items.len() > self.capacity;

        let Some(&idx) = self.lookup.get(&key) else {
            if over_budget {
                self.evict()?;
            }
            let idx = self
                .items
                .push_front(Entry::new(key.clone(), value, self.touches));
            self.lookup.insert(key, idx);
            return Ok(SetOutcome {
                is_new: true,
                evicted: over_budget,
            });
        };

        let entry = self.items.get_mut(idx).ok_or_else(|| {
            error!(slot = idx, "lookup handle resolved to an empty slot on set");
            Error::InvalidItemType
        })?;
        entry.touch();
        entry.value = value;
        self.items.move_to_front(idx);

        // Promoted first so the updated entry can never be the one evicted
        if over_budget {
            self.evict()?;
        }

        Ok(SetOutcome {
            is_new: false,
            evicted: over_budget,
        })
    }

    /// Touch `key` and promote it to most recently used
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Result<Option<&Entry<K, V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.touches += 1;
        let Some(&idx) = self.lookup.get(key) else {
            return Ok(None);
        };

        let entry = self.items.get_mut(idx).ok_or_else(|| {
            error!(slot = idx, "lookup handle resolved to an empty slot on get");
            Error::InvalidItemType
        })?;
        entry.touch();
        self.items.move_to_front(idx);

        Ok(self.items.get(idx))
    }

    /// Look at `key` without touching counters or order
    pub(crate) fn read<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.lookup.get(key)?;
        self.items.get(idx)
    }

    /// Remove `key` from both the list and the lookup table
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.lookup.remove(key)?;
        self.items.remove(idx)
    }

    pub(crate) fn front(&self) -> Option<&Entry<K, V>> {
        self.items.front()
    }

    pub(crate) fn back(&self) -> Option<&Entry<K, V>> {
        self.items.back()
    }

    /// Entries from most to least recently used
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.items.iter()
    }

    /// Drop every entry and restart the touch counter
    pub(crate) fn reset(&mut self) {
        self.items.clear();
        self.lookup.clear();
        self.touches = 0;
    }

    /// Take every entry out, most recently used first
    pub(crate) fn drain(&mut self) -> Result<Vec<Entry<K, V>>> {
        let count = self.items.len();
        let mut entries = Vec::with_capacity(count);

        for _ in 0..count {
            let entry = self.items.pop_front().ok_or_else(|| {
                error!(
                    expected = count,
                    got = entries.len(),
                    "recency list ran dry during drain"
                );
                Error::FatalState
            })?;
            self.lookup.remove(&entry.key);
            entries.push(entry);
        }

        if !self.lookup.is_empty() {
            error!(
                stale = self.lookup.len(),
                "lookup table outlived recency list during drain"
            );
            self.lookup.clear();
            return Err(Error::FatalState);
        }

        Ok(entries)
    }

    /// Evict the least recently used entry
    fn evict(&mut self) -> Result<Entry<K, V>> {
        let entry = self.items.pop_back().ok_or_else(|| {
            error!("eviction requested on an empty recency list");
            Error::FatalState
        })?;
        self.lookup.remove(&entry.key);
        trace!(
            len = self.items.len(),
            count = entry.count,
            "evicted least recently used entry"
        );

        Ok(entry)
    }
}
