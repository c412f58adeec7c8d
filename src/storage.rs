//! Handle-addressed storage for queued entries
//!
//! Every strategy in this crate keeps its entries in an [`EntryStore`] and
//! arranges only [`EntryHandle`]s in its ordering structure. Moving a handle
//! is cheap regardless of the key and value types, and a handle stays valid
//! for exactly as long as its entry is queued.
//!
//! The store is backed by a [`SlotMap`], so handles are generational: a
//! handle to a removed entry is reported as missing even after its slot has
//! been reused by a newer entry of the same store. Handles carry no store
//! identity, so one store cannot recognize a handle issued by another.

use slotmap::SlotMap;

use crate::entry::{Entry, EntryHandle};

#[derive(Debug, Clone)]
struct Slot<K, V, M> {
    entry: Entry<K, V>,
    meta: M,
}

/// Arena owning the entries of one queue
///
/// `M` is per-entry bookkeeping owned by the strategy, such as the heap's
/// array position.
#[derive(Debug, Clone)]
pub struct EntryStore<K, V, M = ()> {
    slots: SlotMap<EntryHandle, Slot<K, V, M>>,
}

impl<K, V, M> EntryStore<K, V, M> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores a new entry and returns its handle
    pub fn insert(&mut self, entry: Entry<K, V>, meta: M) -> EntryHandle {
        self.slots.insert(Slot { entry, meta })
    }

    /// Removes an entry, returning it if the handle was live
    pub fn remove(&mut self, handle: EntryHandle) -> Option<Entry<K, V>> {
        self.slots.remove(handle).map(|slot| slot.entry)
    }

    #[inline]
    pub fn get(&self, handle: EntryHandle) -> Option<&Entry<K, V>> {
        self.slots.get(handle).map(|slot| &slot.entry)
    }

    #[inline]
    pub fn get_mut(&mut self, handle: EntryHandle) -> Option<&mut Entry<K, V>> {
        self.slots.get_mut(handle).map(|slot| &mut slot.entry)
    }

    #[inline]
    pub fn meta(&self, handle: EntryHandle) -> Option<&M> {
        self.slots.get(handle).map(|slot| &slot.meta)
    }

    #[inline]
    pub fn meta_mut(&mut self, handle: EntryHandle) -> Option<&mut M> {
        self.slots.get_mut(handle).map(|slot| &mut slot.meta)
    }

    #[inline]
    pub fn contains(&self, handle: EntryHandle) -> bool {
        self.slots.contains_key(handle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (EntryHandle, &Entry<K, V>)> {
        self.slots.iter().map(|(handle, slot)| (handle, &slot.entry))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<K, V, M> Default for EntryStore<K, V, M> {
    fn default() -> Self {
        Self::new()
    }
}
