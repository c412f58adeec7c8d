//! Runtime selection of a storage strategy
//!
//! The strategy types can be named directly when the choice is fixed at
//! compile time. [`QueueBuilder`] covers the case where it is not: it builds
//! a [`Queue`], one type that wraps any of the strategies and implements the
//! same traits.
//!
//! # Example
//!
//! ```rust
//! use priority_queue_adt::builder::{QueueBuilder, Strategy};
//! use priority_queue_adt::comparator::ReverseOrder;
//! use priority_queue_adt::PriorityQueue;
//!
//! let mut pq = QueueBuilder::new()
//!     .capacity(16)
//!     .build_with::<i32, &str, _>(Strategy::SortedList, ReverseOrder);
//! pq.insert(1, "low").unwrap();
//! pq.insert(9, "high").unwrap();
//! assert_eq!(pq.min().map(|e| *e.value()), Some("high"));
//! ```

use crate::comparator::{KeyComparator, NaturalOrder};
use crate::entry::{Entry, EntryHandle};
use crate::error::PqError;
use crate::heap::HeapPriorityQueue;
use crate::sorted_list::SortedListPriorityQueue;
use crate::traits::{KeyedPriorityQueue, PriorityQueue};
use crate::unsorted_list::UnsortedListPriorityQueue;

/// Available storage strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Array-backed binary heap.
    #[default]
    Heap,
    /// List kept in priority order; FIFO among equal keys.
    SortedList,
    /// Insertion-ordered list scanned on `min`; FIFO among equal keys.
    UnsortedList,
}

/// A priority queue whose strategy was chosen at runtime
#[derive(Debug, Clone)]
pub enum Queue<K, V, C = NaturalOrder> {
    Heap(HeapPriorityQueue<K, V, C>),
    SortedList(SortedListPriorityQueue<K, V, C>),
    UnsortedList(UnsortedListPriorityQueue<K, V, C>),
}

macro_rules! dispatch {
    ($queue:expr, $pq:ident => $body:expr) => {
        match $queue {
            Queue::Heap($pq) => $body,
            Queue::SortedList($pq) => $body,
            Queue::UnsortedList($pq) => $body,
        }
    };
}

impl<K, V, C> Queue<K, V, C> {
    /// The strategy backing this queue
    pub fn strategy(&self) -> Strategy {
        match self {
            Queue::Heap(_) => Strategy::Heap,
            Queue::SortedList(_) => Strategy::SortedList,
            Queue::UnsortedList(_) => Strategy::UnsortedList,
        }
    }
}

impl<K, V, C: KeyComparator<K>> Queue<K, V, C> {
    pub fn comparator(&self) -> &C {
        dispatch!(self, pq => pq.comparator())
    }
}

impl<K, V, C: KeyComparator<K>> PriorityQueue<K, V> for Queue<K, V, C> {
    fn len(&self) -> usize {
        dispatch!(self, pq => pq.len())
    }

    fn insert_nullable(&mut self, key: Option<K>, value: V) -> Result<EntryHandle, PqError> {
        dispatch!(self, pq => pq.insert_nullable(key, value))
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        dispatch!(self, pq => pq.min())
    }

    fn remove_min(&mut self) -> Option<Entry<K, V>> {
        dispatch!(self, pq => pq.remove_min())
    }

    fn get(&self, handle: EntryHandle) -> Option<&Entry<K, V>> {
        dispatch!(self, pq => pq.get(handle))
    }

    fn clear(&mut self) {
        dispatch!(self, pq => pq.clear())
    }
}

impl<K, V, C: KeyComparator<K>> KeyedPriorityQueue<K, V> for Queue<K, V, C> {
    fn replace_key(&mut self, handle: EntryHandle, key: K) -> Result<K, PqError> {
        dispatch!(self, pq => pq.replace_key(handle, key))
    }

    fn replace_value(&mut self, handle: EntryHandle, value: V) -> Result<V, PqError> {
        dispatch!(self, pq => pq.replace_value(handle, value))
    }

    fn remove(&mut self, handle: EntryHandle) -> Result<Entry<K, V>, PqError> {
        dispatch!(self, pq => pq.remove(handle))
    }
}

/// Construction-time configuration for a [`Queue`]
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueBuilder {
    capacity: usize,
}

impl QueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries to pre-allocate room for
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds a queue ordered by the keys' natural order
    pub fn build<K: PartialOrd, V>(self, strategy: Strategy) -> Queue<K, V> {
        self.build_with(strategy, NaturalOrder)
    }

    /// Builds a queue ordered by `cmp`
    pub fn build_with<K, V, C: KeyComparator<K>>(self, strategy: Strategy, cmp: C) -> Queue<K, V, C> {
        log::debug!("building {strategy:?} queue, capacity {}", self.capacity);
        match strategy {
            Strategy::Heap => {
                Queue::Heap(HeapPriorityQueue::with_capacity_and_comparator(self.capacity, cmp))
            }
            Strategy::SortedList => Queue::SortedList(
                SortedListPriorityQueue::with_capacity_and_comparator(self.capacity, cmp),
            ),
            Strategy::UnsortedList => Queue::UnsortedList(
                UnsortedListPriorityQueue::with_capacity_and_comparator(self.capacity, cmp),
            ),
        }
    }
}
