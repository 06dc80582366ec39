//! Cache Module
//!
//! Bounded in-memory key-value cache with LRU eviction, adjustable capacity,
//! and sorted dumps.

mod entry;
mod recency;
mod snapshot;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, EntryId};
pub use recency::RecencyList;
pub use snapshot::{SnapshotEntry, SortedSnapshot};
pub use stats::CacheStats;
pub use store::LruCache;
