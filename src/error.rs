//! Error type for priority queue operations
//!
//! Every error the queues report is a caller-contract violation: a key the
//! active comparator cannot order, or a handle to an entry that has already
//! left the queue. Asking an empty queue for its minimum is not an error;
//! [`min`](crate::PriorityQueue::min) and
//! [`remove_min`](crate::PriorityQueue::remove_min) return `None` instead.

use thiserror::Error;

/// Error type for priority queue operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PqError {
    /// The key was absent
    #[error("key is null")]
    NullKey,
    /// The comparator could not order the key against itself
    #[error("key does not match comparator requirements")]
    IncomparableKey,
    /// The comparator ordered the key strictly before or after itself
    #[error("comparator does not rank key equal to itself")]
    IrreflexiveComparator,
    /// The handle refers to an entry that is no longer in the queue
    #[error("handle is no longer valid (entry was removed)")]
    InvalidHandle,
}

impl PqError {
    /// Returns true for errors raised by key validation
    ///
    /// These are the invalid-argument failures of `insert` and
    /// `replace_key`; [`PqError::InvalidHandle`] is the only other kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PqError::NullKey | PqError::IncomparableKey | PqError::IrreflexiveComparator
        )
    }
}
