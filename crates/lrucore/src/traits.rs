//! Common cache interface

use crate::error::Result;

/// Operations every cache in this crate supports.
///
/// Methods take `&self`; implementations handle their own locking so a
/// cache can sit behind an `Arc` and be used from many threads.
pub trait Cache<K, V> {
    /// Insert or update `key`, returning `true` if it was not cached
    fn set(&self, key: K, value: V) -> Result<bool>;

    /// Fetch `key` and mark it as used. A miss is `Ok(None)`.
    fn get(&self, key: &K) -> Result<Option<V>>;

    /// Fetch `key` without side effects
    fn read(&self, key: &K) -> Option<V>;

    /// Remove `key`, returning `true` if it was present
    fn remove(&self, key: &K) -> bool;

    /// Drop all entries
    fn purge(&self);

    /// Number of cached entries
    fn len(&self) -> usize;

    /// Whether the cache holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
