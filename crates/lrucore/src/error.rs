//! Error types for lrucore

use thiserror::Error;

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Internal-consistency faults raised by the cache.
///
/// A cache miss is never an error; these only surface when the lookup
/// table and the recency list have gone out of sync.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A lookup handle pointed at a slot holding no entry
    #[error("cache(lru): invalid item type")]
    InvalidItemType,

    /// The recency list and its declared length disagree
    #[error("cache(lru): fatal state")]
    FatalState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidItemType.to_string(), "cache(lru): invalid item type");
        assert_eq!(Error::FatalState.to_string(), "cache(lru): fatal state");
    }
}
