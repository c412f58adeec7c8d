//! Sorted-list priority queue
//!
//! Keeps handles in a [`VecDeque`] in priority order, highest priority at the
//! front. Inserting places the new entry after every entry that does not
//! rank after it, so entries with equal keys leave in insertion order.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(n)       |
//! | `min`         | O(1)       |
//! | `remove_min`  | O(1)       |
//! | `replace_key` | O(n)       |
//! | `remove`      | O(n)       |

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::comparator::{KeyComparator, NaturalOrder};
use crate::entry::{Entry, EntryHandle};
use crate::error::PqError;
use crate::order::PriorityOrder;
use crate::storage::EntryStore;
use crate::traits::{KeyedPriorityQueue, PriorityQueue};

/// A priority queue backed by a list kept in priority order
#[derive(Debug, Clone)]
pub struct SortedListPriorityQueue<K, V, C = NaturalOrder> {
    order: PriorityOrder<K, C>,
    store: EntryStore<K, V>,
    list: VecDeque<EntryHandle>,
}

impl<K: PartialOrd, V> SortedListPriorityQueue<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K: PartialOrd, V> Default for SortedListPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparator<K>> SortedListPriorityQueue<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            order: PriorityOrder::new(cmp),
            store: EntryStore::with_capacity(capacity),
            list: VecDeque::with_capacity(capacity),
        }
    }

    pub fn comparator(&self) -> &C {
        self.order.comparator()
    }

    /// Iterates over the entries in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter().filter_map(move |&h| self.store.get(h))
    }

    /// Index after the last queued entry that does not rank after `key`
    fn insertion_point(&self, key: &K) -> usize {
        self.list.partition_point(|&h| self.ranks_no_later(h, key))
    }

    /// Where the entry at `from` belongs once re-keyed to `key`, counted
    /// as if it had already been taken out of the list
    fn reinsertion_point(&self, from: usize, key: &K) -> usize {
        self.list
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != from)
            .take_while(|&(_, &h)| self.ranks_no_later(h, key))
            .count()
    }

    fn ranks_no_later(&self, handle: EntryHandle, key: &K) -> bool {
        self.store
            .get(handle)
            .map_or(true, |e| self.order.compare_keys(e.key(), key) != Ordering::Greater)
    }

    fn position(&self, handle: EntryHandle) -> Option<usize> {
        self.list.iter().position(|&h| h == handle)
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for SortedListPriorityQueue<K, V, C> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn insert_nullable(&mut self, key: Option<K>, value: V) -> Result<EntryHandle, PqError> {
        let key = self.order.accept(key)?;
        let index = self.insertion_point(&key);
        let handle = self.store.insert(Entry::new(key, value), ());
        self.list.insert(index, handle);
        log::trace!("sorted list insert at index {index}, len {}", self.list.len());
        Ok(handle)
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.list.front().and_then(|&h| self.store.get(h))
    }

    fn remove_min(&mut self) -> Option<Entry<K, V>> {
        let handle = self.list.pop_front()?;
        self.store.remove(handle)
    }

    fn get(&self, handle: EntryHandle) -> Option<&Entry<K, V>> {
        self.store.get(handle)
    }

    fn clear(&mut self) {
        self.list.clear();
        self.store.clear();
    }
}

impl<K, V, C: KeyComparator<K>> KeyedPriorityQueue<K, V> for SortedListPriorityQueue<K, V, C> {
    /// The re-keyed entry ranks as if it had just been inserted.
    fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, PqError> {
        let from = self.position(handle).ok_or(PqError::InvalidHandle)?;
        self.order.validate(Some(&key))?;
        let to = self.reinsertion_point(from, &key);
        let old = self
            .store
            .get_mut(handle)
            .ok_or(PqError::InvalidHandle)?
            .replace_key(key);
        self.list.remove(from);
        self.list.insert(to, handle);
        Ok(old)
    }

    fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, PqError> {
        self.store
            .get_mut(handle)
            .map(|entry| entry.replace_value(value))
            .ok_or(PqError::InvalidHandle)
    }

    fn remove(&mut self, handle: EntryHandle) -> Result<Entry<K, V>, PqError> {
        let index = self.position(handle).ok_or(PqError::InvalidHandle)?;
        self.list.remove(index);
        self.store.remove(handle).ok_or(PqError::InvalidHandle)
    }
}
