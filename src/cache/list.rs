//! Recency List Module
//!
//! Doubly-linked ordering of entries from most- to least-recently touched,
//! backed by a slot arena so links are plain indices instead of pointers.
//! All reordering operations are O(1).

use crate::cache::Entry;

// == Recency List ==
/// Recency-ordered storage for cache entries.
///
/// Slots live in a `Vec` that never grows past the cache capacity: freed
/// slots go on a free list and are recycled before the arena extends.
/// Head = most recently touched, tail = least recently touched.
#[derive(Debug)]
pub(crate) struct RecencyList<K, V> {
    /// Slot arena; `None` marks a vacant slot awaiting reuse
    slots: Vec<Option<Entry<K, V>>>,
    /// Indices of vacant slots
    free: Vec<usize>,
    /// Most recently touched entry
    head: Option<usize>,
    /// Least recently touched entry
    tail: Option<usize>,
    /// Number of live entries
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot of the least recently touched entry.
    pub(crate) fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Borrows the entry in `slot`.
    ///
    /// Panics on a vacant slot: that would mean the key index and the list
    /// disagree about which slots are live.
    pub(crate) fn entry(&self, slot: usize) -> &Entry<K, V> {
        self.slots[slot].as_ref().expect("vacant recency slot")
    }

    pub(crate) fn entry_mut(&mut self, slot: usize) -> &mut Entry<K, V> {
        self.slots[slot].as_mut().expect("vacant recency slot")
    }

    // == Push Head ==
    /// Inserts an unlinked entry as most recently touched, returning its
    /// slot. Recycles a vacant slot when one exists.
    pub(crate) fn push_head(&mut self, entry: Entry<K, V>) -> usize {
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        };

        self.link_at_head(slot);
        self.len += 1;
        slot
    }

    // == Move To Head ==
    /// Relinks `slot` as most recently touched.
    pub(crate) fn move_to_head(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.unlink(slot);
        self.link_at_head(slot);
    }

    // == Remove ==
    /// Unlinks `slot`, vacates it for reuse, and returns the entry.
    pub(crate) fn remove(&mut self, slot: usize) -> Entry<K, V> {
        self.unlink(slot);
        let entry = self.slots[slot].take().expect("vacant recency slot");
        self.free.push(slot);
        self.len -= 1;
        entry
    }

    /// Detaches `slot` from its neighbors, patching the head/tail ends.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = {
            let entry = self.entry(slot);
            (entry.prev, entry.next)
        };

        match prev {
            Some(p) => self.entry_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.entry_mut(n).prev = prev,
            None => self.tail = prev,
        }

        let entry = self.entry_mut(slot);
        entry.prev = None;
        entry.next = None;
    }

    /// Links a detached `slot` in front of the current head.
    fn link_at_head(&mut self, slot: usize) {
        let old_head = self.head;

        {
            let entry = self.entry_mut(slot);
            entry.prev = None;
            entry.next = old_head;
        }

        if let Some(h) = old_head {
            self.entry_mut(h).prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    /// Keys from most- to least-recently touched. Test helper.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let entry = self.entry(slot);
            out.push(&entry.key);
            cursor = entry.next;
        }
        out
    }

    /// Physical size of the arena, vacant slots included. Test helper.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
