//! Cache Entry Module
//!
//! Defines a single cached key/value pair and its position in the recency chain.

use std::fmt;

// == Entry Id ==
/// Stable handle to an entry slot inside the recency arena.
///
/// The lookup table stores these instead of references, so relocating an
/// entry never invalidates anything held by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// == Cache Entry ==
/// A key/value pair linked into the recency chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The key, unique within a cache
    pub key: String,
    /// The stored value
    pub value: String,
    /// Neighbour towards the least recently used end
    pub(crate) prev: Option<EntryId>,
    /// Neighbour towards the most recently used end
    pub(crate) next: Option<EntryId>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            prev: None,
            next: None,
        }
    }

    // == Replace Value ==
    /// Overwrites the value in place, returning the previous one.
    pub fn replace_value(&mut self, value: String) -> String {
        std::mem::replace(&mut self.value, value)
    }

    /// Returns true if the entry is not linked to any neighbour.
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}
