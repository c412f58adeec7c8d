//! Entries stored in a priority queue
//!
//! An [`Entry`] is a key/value pair: the key decides where the entry ranks,
//! the value is the payload carried along with it. Queues create entries in
//! `insert` and hand back an [`EntryHandle`], an opaque token that can be
//! used to look the entry up again while it is still queued.
//!
//! Clients only see `&Entry` while an entry is owned by a queue, so the key
//! cannot be changed behind the queue's back. Key updates go through
//! [`KeyedPriorityQueue::replace_key`](crate::KeyedPriorityQueue::replace_key),
//! which re-validates the key and restores the ordering.

use std::fmt;

slotmap::new_key_type! {
    /// Opaque handle to an entry held by a queue
    ///
    /// A handle is only meaningful to the queue that issued it. Every queue
    /// numbers its handles independently, so a handle passed to a different
    /// queue may match one of that queue's unrelated entries.
    ///
    /// Within the issuing queue handles are generational: once the entry is
    /// removed the handle goes stale and never refers to a later entry of
    /// that queue, even if its slot is reused.
    pub struct EntryHandle;
}

/// A key/value pair held by a priority queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a detached entry
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key of the entry
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the entry
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning `(key, value)`
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    pub fn into_key(self) -> K {
        self.key
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Swaps in a new key, returning the old one
    ///
    /// Only the owning queue may call this, and it must restore its ordering
    /// afterwards.
    pub(crate) fn replace_key(&mut self, key: K) -> K {
        std::mem::replace(&mut self.key, key)
    }

    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}
