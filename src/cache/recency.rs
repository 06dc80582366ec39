//! Recency List Module
//!
//! Arena-backed doubly linked list ordering entries by last use.

use crate::cache::{CacheEntry, EntryId};

// == Recency List ==
/// Orders live entries from least recently used to most recently used.
///
/// - Front = Least recently used (next eviction candidate)
/// - Back = Most recently used
///
/// Entries live in a slot arena and link to each other by [`EntryId`], so
/// relocating an entry is O(1) given its id. Slots freed by `pop_front` are
/// recycled by later appends.
#[derive(Debug, Default)]
pub struct RecencyList {
    /// Entry storage, `None` marks a free slot
    slots: Vec<Option<CacheEntry>>,
    /// Indices of free slots
    free: Vec<usize>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl RecencyList {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the id of the least recently used entry.
    pub fn front_id(&self) -> Option<EntryId> {
        self.head
    }

    /// Returns the id of the most recently used entry.
    pub fn back_id(&self) -> Option<EntryId> {
        self.tail
    }

    /// Returns true if `id` refers to a live entry.
    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntryId) -> Option<&CacheEntry> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut CacheEntry> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    // == Append ==
    /// Links `entry` at the back and returns its id.
    pub fn append(&mut self, entry: CacheEntry) -> EntryId {
        let id = self.alloc(entry);
        self.link_back(id);
        self.len += 1;
        id
    }

    // == Pop Front ==
    /// Unlinks and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_front(&mut self) -> Option<CacheEntry> {
        let id = self.head?;
        self.unlink(id);
        let entry = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(entry)
    }

    // == Move To Back ==
    /// Relocates `id` to the most recently used position.
    ///
    /// Returns false if `id` is not a live entry.
    pub fn move_to_back(&mut self, id: EntryId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.tail == Some(id) {
            return true;
        }
        self.unlink(id);
        self.link_back(id);
        true
    }

    // == Iteration ==
    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn alloc(&mut self, entry: CacheEntry) -> EntryId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(entry);
                EntryId(index)
            }
            None => {
                self.slots.push(Some(entry));
                EntryId(self.slots.len() - 1)
            }
        }
    }

    /// Detaches `id`, patching its neighbours and the head/tail markers.
    fn unlink(&mut self, id: EntryId) {
        let (prev, next) = match self.get(id) {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(node) = self.get_mut(prev_id) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(node) = self.get_mut(next_id) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn link_back(&mut self, id: EntryId) {
        let old_tail = self.tail;
        if let Some(node) = self.get_mut(id) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail_id) => {
                if let Some(node) = self.get_mut(tail_id) {
                    node.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Walks the chain in both directions and checks it against `len`.
    #[cfg(test)]
    pub(crate) fn validate_invariants(&self) {
        let forward: Vec<EntryId> = {
            let mut ids = Vec::new();
            let mut current = self.head;
            while let Some(id) = current {
                ids.push(id);
                current = self.get(id).and_then(|e| e.next);
            }
            ids
        };
        let mut backward: Vec<EntryId> = {
            let mut ids = Vec::new();
            let mut current = self.tail;
            while let Some(id) = current {
                ids.push(id);
                current = self.get(id).and_then(|e| e.prev);
            }
            ids
        };
        backward.reverse();

        assert_eq!(forward.len(), self.len, "forward walk length");
        assert_eq!(forward, backward, "chain is not symmetric");
        assert_eq!(
            self.slots.iter().filter(|s| s.is_some()).count(),
            self.len,
            "orphaned slots"
        );
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a> {
    list: &'a RecencyList,
    current: Option<EntryId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.current?)?;
        self.current = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RecencyList {
    type Item = &'a CacheEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
