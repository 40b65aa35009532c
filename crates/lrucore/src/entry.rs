//! Cache entry record

/// A single key/value record tracked by the cache.
///
/// `count` is bumped on every touch of the entry and is only exposed
/// for introspection; ordering is driven by list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) count: u64,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V, count: u64) -> Self {
        Self { key, value, count }
    }

    /// Key of this entry
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Current value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Access counter
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Split into `(key, value, count)`
    pub fn into_parts(self) -> (K, V, u64) {
        (self.key, self.value, self.count)
    }

    pub(crate) fn touch(&mut self) {
        self.count += 1;
    }
}
