//! Priority queues with pluggable ordering
//!
//! This crate separates *what* ranks first from *how* entries are stored.
//! The ordering policy is a [`KeyComparator`](comparator::KeyComparator)
//! supplied at construction time, or the keys' natural order when none is
//! given. The storage strategy is any type implementing [`PriorityQueue`]:
//!
//! - [`HeapPriorityQueue`](heap::HeapPriorityQueue): array-backed binary heap, O(log n) insert and remove
//! - [`SortedListPriorityQueue`](sorted_list::SortedListPriorityQueue): O(1) removal, entries kept in order
//! - [`UnsortedListPriorityQueue`](unsorted_list::UnsortedListPriorityQueue): O(1) insert, scan on removal
//!
//! Every strategy embeds a [`PriorityOrder`](order::PriorityOrder), which
//! composes the key comparator into an entry comparator and validates keys
//! before they are inserted. A key the comparator cannot order against
//! itself is rejected with an invalid-argument [`PqError`] and the queue is
//! left untouched. An empty queue is not an error: `min` and `remove_min`
//! return `None`.
//!
//! # Example
//!
//! ```rust
//! use priority_queue_adt::heap::HeapPriorityQueue;
//! use priority_queue_adt::{PqError, PriorityQueue};
//!
//! let mut pq = HeapPriorityQueue::new();
//! for key in [5, 3, 8, 1] {
//!     pq.insert(key, key.to_string())?;
//! }
//! assert_eq!(pq.min().map(|e| e.value().as_str()), Some("1"));
//!
//! let mut floats = HeapPriorityQueue::new();
//! assert_eq!(floats.insert(f64::NAN, ()), Err(PqError::IncomparableKey));
//! assert!(floats.is_empty());
//! # Ok::<(), PqError>(())
//! ```

pub mod builder;
pub mod comparator;
pub mod entry;
pub mod error;
pub mod heap;
pub mod order;
pub mod sorted_list;
pub mod storage;
pub mod traits;
pub mod unsorted_list;

// Re-export the main types for convenience
pub use entry::{Entry, EntryHandle};
pub use error::PqError;
pub use traits::{KeyedPriorityQueue, PriorityQueue};
