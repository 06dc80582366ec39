//! Cache Store Module
//!
//! Main cache engine combining a HashMap lookup table with an arena-backed
//! recency list. Sorted dumps are built lazily from the live entries.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EntryId, RecencyList, SortedSnapshot};

// == LRU Cache ==
/// Bounded key-value cache with least recently used eviction.
///
/// The lookup table maps keys to [`EntryId`]s into the recency list, which
/// owns the entries. Both structures always hold exactly the same entries,
/// and the number of entries never exceeds `capacity` once an operation
/// returns.
///
/// No operation fails: a missing key is reported as `None`.
#[derive(Debug)]
pub struct LruCache {
    /// Key to arena slot
    lookup: HashMap<String, EntryId>,
    /// Entries ordered from least to most recently used
    recency: RecencyList,
    /// Usage counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is legal; every `set` is then evicted immediately.
    pub fn new(capacity: usize) -> Self {
        Self {
            lookup: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    // == Bound ==
    /// Changes the capacity, evicting least recently used entries if the
    /// cache now holds more than `new_capacity`.
    ///
    /// Returns the number of evicted entries.
    pub fn bound(&mut self, new_capacity: usize) -> usize {
        let excess = self.len().saturating_sub(new_capacity);
        let mut evicted = 0;

        while evicted < excess {
            if self.evict_front().is_none() {
                break;
            }
            evicted += 1;
        }

        debug!(
            old_capacity = self.capacity,
            new_capacity, evicted, "cache bound changed"
        );
        self.capacity = new_capacity;
        evicted
    }

    // == Set ==
    /// Stores a key-value pair and marks it most recently used.
    ///
    /// An existing key is overwritten in place and never causes an eviction.
    /// A new key that pushes the cache past its capacity evicts the least
    /// recently used entry, which is the new entry itself when the capacity
    /// is zero.
    pub fn set(&mut self, key: String, value: String) {
        if let Some(&id) = self.lookup.get(&key) {
            if let Some(entry) = self.recency.get_mut(id) {
                entry.replace_value(value);
            }
            self.recency.move_to_back(id);
            return;
        }

        let id = self.recency.append(CacheEntry::new(key.clone(), value));
        self.lookup.insert(key, id);

        if self.len() > self.capacity {
            self.evict_front();
        }
    }

    // == Get ==
    /// Retrieves a value and marks the key most recently used.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let Some(&id) = self.lookup.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.recency.move_to_back(id);
        self.recency.get(id).map(|entry| entry.value.as_str())
    }

    // == Peek ==
    /// Retrieves a value without touching recency order or statistics.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.lookup
            .get(key)
            .and_then(|&id| self.recency.get(id))
            .map(|entry| entry.value.as_str())
    }

    // == Dump ==
    /// Returns every live entry in ascending key order.
    pub fn dump(&self) -> SortedSnapshot<'_> {
        SortedSnapshot::from_entries(&self.recency)
    }

    // == Contains ==
    pub fn contains(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    /// Keys from least to most recently used.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = &str> {
        self.recency.iter().map(|entry| entry.key.as_str())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.len();
        stats.capacity = self.capacity;
        stats
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.recency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recency.is_empty()
    }

    /// Drops the least recently used entry from both structures.
    fn evict_front(&mut self) -> Option<CacheEntry> {
        let entry = self.recency.pop_front()?;
        self.lookup.remove(&entry.key);
        self.stats.record_eviction();
        debug!(key = %entry.key, "evicted least recently used entry");
        Some(entry)
    }

    #[cfg(test)]
    pub(crate) fn validate_invariants(&self) {
        self.recency.validate_invariants();
        assert_eq!(self.lookup.len(), self.recency.len(), "table/list size");
        assert!(self.len() <= self.capacity, "count exceeds capacity");
        for (key, &id) in &self.lookup {
            let entry = self.recency.get(id).expect("lookup points at a free slot");
            assert_eq!(&entry.key, key, "lookup points at the wrong entry");
        }
    }
}
