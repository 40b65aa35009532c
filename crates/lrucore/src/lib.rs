//! # lrucore
//!
//! Thread-safe, fixed-capacity LRU cache.
//!
//! ## Architecture
//! - **Lookup table**: AHash map from key to list slot (O(1))
//! - **Recency list**: Arena-backed doubly-linked list, head = most recent (O(1))
//! - **Lru**: Owns both behind one `RwLock` and enforces the slot budget
//!
//! ## Example
//!
//! ```
//! use lrucore::Lru;
//!
//! let cache = Lru::new(2);
//! cache.set("a", 1).unwrap();
//! cache.set("b", 2).unwrap();
//! cache.get(&"a").unwrap();
//! cache.set("c", 3).unwrap();
//!
//! assert_eq!(cache.len(), 2);
//! assert_eq!(cache.read(&"b"), None);
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod entry;
mod error;
mod list;
mod lru;
mod stats;
mod traits;

pub use cache::Lru;
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use entry::Entry;
pub use error::{Error, Result};
pub use stats::CacheStats;
pub use traits::Cache;
