//! Binary heap priority queue
//!
//! An array-backed complete binary tree: the entry at index `i` has its
//! children at `2i + 1` and `2i + 2` and its parent at `(i - 1) / 2`, and no
//! entry ranks before its parent. The tree holds [`EntryHandle`]s; the
//! entries live in an [`EntryStore`] that also records each entry's current
//! index, which is what makes `replace_key` and `remove` by handle
//! O(log n).
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(log n)   |
//! | `min`         | O(1)       |
//! | `remove_min`  | O(log n)   |
//! | `replace_key` | O(log n)   |
//! | `remove`      | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use priority_queue_adt::PriorityQueue;
//! use priority_queue_adt::comparator::ReverseOrder;
//! use priority_queue_adt::heap::HeapPriorityQueue;
//!
//! let mut max = HeapPriorityQueue::with_comparator(ReverseOrder);
//! for key in [5, 3, 8, 1] {
//!     max.insert(key, ()).unwrap();
//! }
//! let keys: Vec<_> = std::iter::from_fn(|| max.remove_min().map(|e| e.into_key())).collect();
//! assert_eq!(keys, vec![8, 5, 3, 1]);
//! ```

use crate::comparator::{KeyComparator, NaturalOrder};
use crate::entry::{Entry, EntryHandle};
use crate::error::PqError;
use crate::order::PriorityOrder;
use crate::storage::EntryStore;
use crate::traits::{KeyedPriorityQueue, PriorityQueue};

/// A binary-heap priority queue
///
/// Equal keys are not returned in any particular order.
#[derive(Debug, Clone)]
pub struct HeapPriorityQueue<K, V, C = NaturalOrder> {
    order: PriorityOrder<K, C>,
    /// Entries, each tagged with its index in `tree`
    store: EntryStore<K, V, usize>,
    tree: Vec<EntryHandle>,
}

impl<K: PartialOrd, V> HeapPriorityQueue<K, V> {
    /// Creates an empty queue ordered by the keys' natural order
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K: PartialOrd, V> Default for HeapPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparator<K>> HeapPriorityQueue<K, V, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            order: PriorityOrder::new(cmp),
            store: EntryStore::with_capacity(capacity),
            tree: Vec::with_capacity(capacity),
        }
    }

    /// The key comparator in use
    pub fn comparator(&self) -> &C {
        self.order.comparator()
    }

    /// Iterates over the entries in heap-array order
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.tree.iter().filter_map(move |&h| self.store.get(h))
    }

    /// Drains the queue into a vector, highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<Entry<K, V>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(entry) = self.remove_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Returns true if the entry at index `a` ranks strictly before the one at `b`
    fn precedes_at(&self, a: usize, b: usize) -> bool {
        match (self.store.get(self.tree[a]), self.store.get(self.tree[b])) {
            (Some(ea), Some(eb)) => self.order.precedes(ea, eb),
            _ => false,
        }
    }

    /// Swaps two tree slots and records their new positions
    fn swap(&mut self, a: usize, b: usize) {
        self.tree.swap(a, b);
        for index in [a, b] {
            if let Some(pos) = self.store.meta_mut(self.tree[index]) {
                *pos = index;
            }
        }
    }

    /// Move the entry at index up until its parent does not rank after it
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes_at(index, parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    /// Move the entry at index down until no child ranks before it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.tree.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut first = index;

            if left < len && self.precedes_at(left, first) {
                first = left;
            }
            if right < len && self.precedes_at(right, first) {
                first = right;
            }

            if first != index {
                self.swap(index, first);
                index = first;
            } else {
                break;
            }
        }
    }

    /// Restore heap order around an index whose entry changed
    fn restore(&mut self, index: usize) {
        let index = self.sift_up(index);
        self.sift_down(index);
    }

    fn remove_at(&mut self, index: usize) -> Option<Entry<K, V>> {
        let last = self.tree.len().checked_sub(1)?;
        self.swap(index, last);
        let handle = self.tree.pop()?;
        if index < self.tree.len() {
            self.restore(index);
        }
        self.store.remove(handle)
    }

    #[cfg(test)]
    fn assert_heap_order(&self) {
        for i in 1..self.tree.len() {
            assert!(!self.precedes_at(i, (i - 1) / 2), "heap order broken at {i}");
            assert_eq!(self.store.meta(self.tree[i]), Some(&i));
        }
        assert_eq!(self.tree.len(), self.store.len());
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for HeapPriorityQueue<K, V, C> {
    fn len(&self) -> usize {
        self.tree.len()
    }

    fn insert_nullable(&mut self, key: Option<K>, value: V) -> Result<EntryHandle, PqError> {
        let key = self.order.accept(key)?;
        let handle = self.store.insert(Entry::new(key, value), self.tree.len());
        self.tree.push(handle);
        let index = self.sift_up(self.tree.len() - 1);
        log::trace!("heap insert at index {index}, len {}", self.tree.len());
        Ok(handle)
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.tree.first().and_then(|&h| self.store.get(h))
    }

    fn remove_min(&mut self) -> Option<Entry<K, V>> {
        let entry = self.remove_at(0)?;
        log::trace!("heap remove_min, len {}", self.tree.len());
        Some(entry)
    }

    fn get(&self, handle: EntryHandle) -> Option<&Entry<K, V>> {
        self.store.get(handle)
    }

    fn clear(&mut self) {
        self.tree.clear();
        self.store.clear();
    }
}

impl<K, V, C: KeyComparator<K>> KeyedPriorityQueue<K, V> for HeapPriorityQueue<K, V, C> {
    fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, PqError> {
        let index = *self.store.meta(handle).ok_or(PqError::InvalidHandle)?;
        self.order.validate(Some(&key))?;
        let old = self
            .store
            .get_mut(handle)
            .ok_or(PqError::InvalidHandle)?
            .replace_key(key);
        self.restore(index);
        Ok(old)
    }

    fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, PqError> {
        self.store
            .get_mut(handle)
            .map(|entry| entry.replace_value(value))
            .ok_or(PqError::InvalidHandle)
    }

    fn remove(&mut self, handle: EntryHandle) -> Result<Entry<K, V>, PqError> {
        let index = *self.store.meta(handle).ok_or(PqError::InvalidHandle)?;
        self.remove_at(index).ok_or(PqError::InvalidHandle)
    }
}
