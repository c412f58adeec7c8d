//! Common traits for priority queue strategies
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the contract every storage strategy implements
//!   (`len`, `insert`, `min`, `remove_min`), with `is_empty` provided once
//! - [`KeyedPriorityQueue`]: handle-based updates that re-validate and
//!   re-order the affected entry
//!
//! Ordering never appears in these signatures. Each strategy owns a
//! [`PriorityOrder`](crate::order::PriorityOrder) built from its key
//! comparator, so "minimum" always means "first under the active policy".

use crate::entry::{Entry, EntryHandle};
use crate::error::PqError;

/// Base trait for priority queue storage strategies
///
/// # Example
///
/// ```rust
/// use priority_queue_adt::PriorityQueue;
/// use priority_queue_adt::heap::HeapPriorityQueue;
///
/// let mut pq = HeapPriorityQueue::new();
/// pq.insert(3, "three").unwrap();
/// pq.insert(1, "one").unwrap();
/// pq.insert(2, "two").unwrap();
///
/// assert_eq!(pq.min().map(|e| *e.key()), Some(1));
/// assert_eq!(pq.remove_min().map(|e| e.into_pair()), Some((1, "one")));
/// assert_eq!(pq.len(), 2);
/// ```
pub trait PriorityQueue<K, V> {
    /// Returns the number of entries in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates `key`, stores a new entry and returns its handle
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument [`PqError`] if the active comparator
    /// rejects the key. The queue is left unchanged.
    fn insert(&mut self, key: K, value: V) -> Result<EntryHandle, PqError> {
        self.insert_nullable(Some(key), value)
    }

    /// Inserts an entry whose key may be absent
    ///
    /// This is the operation strategies implement. The key, present or
    /// not, goes through the strategy's
    /// [`PriorityOrder::accept`](crate::order::PriorityOrder::accept) before
    /// anything is stored.
    ///
    /// # Errors
    ///
    /// Returns [`PqError::NullKey`] for `None`, or another invalid-argument
    /// error if the comparator rejects the key. The queue is left unchanged.
    fn insert_nullable(&mut self, key: Option<K>, value: V) -> Result<EntryHandle, PqError>;

    /// Returns the highest-priority entry without removing it
    fn min(&self) -> Option<&Entry<K, V>>;

    /// Removes and returns the highest-priority entry
    fn remove_min(&mut self) -> Option<Entry<K, V>>;

    /// Looks up a queued entry by a handle this queue issued
    fn get(&self, handle: EntryHandle) -> Option<&Entry<K, V>>;

    /// Returns true if `handle` refers to a queued entry
    fn contains(&self, handle: EntryHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Removes every entry
    fn clear(&mut self);
}

/// Priority queue whose entries can be updated in place through handles
///
/// # Example
///
/// ```rust
/// use priority_queue_adt::{KeyedPriorityQueue, PriorityQueue};
/// use priority_queue_adt::heap::HeapPriorityQueue;
///
/// let mut pq = HeapPriorityQueue::new();
/// pq.insert(10, "a").unwrap();
/// let b = pq.insert(20, "b").unwrap();
///
/// assert_eq!(pq.replace_key(b, 5), Ok(20));
/// assert_eq!(pq.min().map(|e| *e.value()), Some("b"));
/// ```
pub trait KeyedPriorityQueue<K, V>: PriorityQueue<K, V> {
    /// Replaces the key of a queued entry, returning the old key
    ///
    /// The new key is validated before anything changes, then the entry is
    /// moved to its new rank.
    ///
    /// # Errors
    ///
    /// Returns [`PqError::InvalidHandle`] if the entry has left the queue,
    /// or an invalid-argument error if the comparator rejects `key`.
    fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, PqError>;

    /// Replaces the value of a queued entry, returning the old value
    ///
    /// # Errors
    ///
    /// Returns [`PqError::InvalidHandle`] if the entry has left the queue.
    fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, PqError>;

    /// Removes an arbitrary queued entry
    ///
    /// # Errors
    ///
    /// Returns [`PqError::InvalidHandle`] if the entry has left the queue.
    fn remove(&mut self, handle: EntryHandle) -> Result<Entry<K, V>, PqError>;
}
