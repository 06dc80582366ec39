//! Cache Statistics Module
//!
//! Tracks hits, misses, and evictions of a cache.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing how a cache has been used.
///
/// Only `get` records hits and misses; `peek` and `dump` leave the counters
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that found their key
    pub hits: u64,
    /// Number of `get` calls that missed
    pub misses: u64,
    /// Entries dropped by overflow on `set` or by shrinking the bound
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Current bound
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed counters for a cache with the given bound.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if `get` was never called.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
