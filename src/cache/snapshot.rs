//! Sorted Snapshot Module
//!
//! Materializes the live key set in lexicographic order for dumps.

use std::fmt;

use crate::cache::CacheEntry;

// == Snapshot Entry ==
/// A borrowed key/value pair inside a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

// == Sorted Snapshot ==
/// Entries of a cache sorted by key, built on demand.
///
/// Borrows from the cache, so the cache cannot change while a snapshot is
/// alive. Sorting happens once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedSnapshot<'a> {
    entries: Vec<SnapshotEntry<'a>>,
}

impl<'a> SortedSnapshot<'a> {
    /// Builds a snapshot from entries in any order.
    ///
    /// Keys are assumed unique, so an unstable sort is enough.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a CacheEntry>,
    {
        let mut entries: Vec<SnapshotEntry<'a>> = entries
            .into_iter()
            .map(|entry| SnapshotEntry {
                key: &entry.key,
                value: &entry.value,
            })
            .collect();
        entries.sort_unstable_by(|a, b| a.key.cmp(b.key));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Copies the snapshot out so it can outlive the cache borrow.
    pub fn to_owned_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.key.to_string(), e.value.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for SortedSnapshot<'a> {
    type Item = SnapshotEntry<'a>;
    type IntoIter = std::vec::IntoIter<SnapshotEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Renders one `key value` line per entry.
impl fmt::Display for SortedSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_sorts_keys() {
        let entries = vec![
            CacheEntry::new("pear", "3"),
            CacheEntry::new("apple", "1"),
            CacheEntry::new("fig", "2"),
        ];

        let snapshot = SortedSnapshot::from_entries(&entries);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(
            snapshot.keys().collect::<Vec<_>>(),
            vec!["apple", "fig", "pear"]
        );
    }

    #[test]
    fn test_snapshot_is_byte_lexicographic() {
        let entries = vec![
            CacheEntry::new("b", "1"),
            CacheEntry::new("B", "2"),
            CacheEntry::new("a10", "3"),
            CacheEntry::new("a9", "4"),
        ];

        let snapshot = SortedSnapshot::from_entries(&entries);

        assert_eq!(
            snapshot.keys().collect::<Vec<_>>(),
            vec!["B", "a10", "a9", "b"]
        );
    }

    #[test]
    fn test_snapshot_empty() {
        let entries: Vec<CacheEntry> = Vec::new();
        let snapshot = SortedSnapshot::from_entries(&entries);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_string(), "");
    }

    #[test]
    fn test_snapshot_display() {
        let entries = vec![CacheEntry::new("d", "4"), CacheEntry::new("b", "2")];

        let snapshot = SortedSnapshot::from_entries(&entries);

        assert_eq!(snapshot.to_string(), "b 2\nd 4\n");
    }

    #[test]
    fn test_to_owned_pairs() {
        let entries = vec![CacheEntry::new("z", "26"), CacheEntry::new("a", "1")];

        let pairs = SortedSnapshot::from_entries(&entries).to_owned_pairs();

        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("z".to_string(), "26".to_string())
            ]
        );
    }
}
