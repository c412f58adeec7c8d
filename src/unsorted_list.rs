//! Unsorted-list priority queue
//!
//! Appends handles in insertion order and finds the minimum with a linear
//! scan. Among entries with equal keys the earliest inserted wins. Useful
//! when inserts vastly outnumber removals, and as a reference strategy.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(1)       |
//! | `min`         | O(n)       |
//! | `remove_min`  | O(n)       |
//! | `replace_key` | O(1)       |
//! | `remove`      | O(n)       |

use crate::comparator::{KeyComparator, NaturalOrder};
use crate::entry::{Entry, EntryHandle};
use crate::error::PqError;
use crate::order::PriorityOrder;
use crate::storage::EntryStore;
use crate::traits::{KeyedPriorityQueue, PriorityQueue};

/// A priority queue backed by an unordered list
#[derive(Debug, Clone)]
pub struct UnsortedListPriorityQueue<K, V, C = NaturalOrder> {
    order: PriorityOrder<K, C>,
    store: EntryStore<K, V>,
    list: Vec<EntryHandle>,
}

impl<K: PartialOrd, V> UnsortedListPriorityQueue<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K: PartialOrd, V> Default for UnsortedListPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: KeyComparator<K>> UnsortedListPriorityQueue<K, V, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            order: PriorityOrder::new(cmp),
            store: EntryStore::with_capacity(capacity),
            list: Vec::with_capacity(capacity),
        }
    }

    pub fn comparator(&self) -> &C {
        self.order.comparator()
    }

    /// Iterates over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter().filter_map(move |&h| self.store.get(h))
    }

    /// Index of the earliest-inserted entry among those ranking first
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<(usize, &Entry<K, V>)> = None;
        for (index, &handle) in self.list.iter().enumerate() {
            let Some(entry) = self.store.get(handle) else {
                continue;
            };
            match best {
                Some((_, current)) if !self.order.precedes(entry, current) => {}
                _ => best = Some((index, entry)),
            }
        }
        best.map(|(index, _)| index)
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for UnsortedListPriorityQueue<K, V, C> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn insert_nullable(&mut self, key: Option<K>, value: V) -> Result<EntryHandle, PqError> {
        let key = self.order.accept(key)?;
        let handle = self.store.insert(Entry::new(key, value), ());
        self.list.push(handle);
        log::trace!("unsorted list insert, len {}", self.list.len());
        Ok(handle)
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        let index = self.min_index()?;
        self.store.get(self.list[index])
    }

    fn remove_min(&mut self) -> Option<Entry<K, V>> {
        let index = self.min_index()?;
        let handle = self.list.remove(index);
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

impl<K, V, C: KeyComparator<K>> KeyedPriorityQueue<K, V> for UnsortedListPriorityQueue<K, V, C> {
    fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, PqError> {
        if !self.store.contains(handle) {
            return Err(PqError::InvalidHandle);
        }
        self.order.validate(Some(&key))?;
        self.store
            .get_mut(handle)
            .map(|entry| entry.replace_key(key))
            .ok_or(PqError::InvalidHandle)
    }

    fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, PqError> {
        self.store
            .get_mut(handle)
            .map(|entry| entry.replace_value(value))
            .ok_or(PqError::InvalidHandle)
    }

    fn remove(&mut self, handle: EntryHandle) -> Result<Entry<K, V>, PqError> {
        let index = self
            .list
            .iter()
            .position(|&h| h == handle)
            .ok_or(PqError::InvalidHandle)?;
        self.list.remove(index);
        self.store.remove(handle).ok_or(PqError::InvalidHandle)
    }
}
