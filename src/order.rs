//! Shared ordering base for every storage strategy
//!
//! [`PriorityOrder`] is the part of a priority queue that does not depend on
//! how entries are stored. A strategy embeds one and routes every ordering
//! decision through [`PriorityOrder::compare`] and every key it accepts
//! through [`PriorityOrder::validate`], so the configured policy is applied
//! the same way by the heap, the sorted list and the unsorted list.

use std::cmp::Ordering;
use std::fmt;

use crate::comparator::{EntryComparator, KeyComparator, NaturalOrder};
use crate::entry::Entry;
use crate::error::PqError;

/// Entry ordering derived from a key comparator
pub struct PriorityOrder<K, C = NaturalOrder> {
    entry_cmp: EntryComparator<K, C>,
}

impl<K, C: KeyComparator<K>> PriorityOrder<K, C> {
    /// Builds the entry ordering for `cmp`
    pub fn new(cmp: C) -> Self {
        Self {
            entry_cmp: EntryComparator::new(cmp),
        }
    }

    /// Compares two entries under the active policy
    ///
    /// A pair the comparator cannot order is treated as `Equal`.
    #[inline]
    pub fn compare<V>(&self, e1: &Entry<K, V>, e2: &Entry<K, V>) -> Ordering {
        self.compare_keys(e1.key(), e2.key())
    }

    /// Compares two bare keys under the active policy, as [`compare`](Self::compare) does
    #[inline]
    pub fn compare_keys(&self, a: &K, b: &K) -> Ordering {
        match self.entry_cmp.compare_keys(a, b) {
            Some(ord) => ord,
            None => {
                log::trace!("incomparable keys treated as equal");
                Ordering::Equal
            }
        }
    }

    /// Returns true if `e1` ranks strictly before `e2`
    #[inline]
    pub fn precedes<V>(&self, e1: &Entry<K, V>, e2: &Entry<K, V>) -> bool {
        self.compare(e1, e2) == Ordering::Less
    }

    /// Checks that `key` is acceptable under the active comparator
    ///
    /// The key is compared with itself. Anything other than `Equal` rejects
    /// it: `None` means the key does not fit the comparator, and `Less` or
    /// `Greater` means the comparator is not reflexive on it.
    ///
    /// # Errors
    ///
    /// - [`PqError::NullKey`] if `key` is `None`
    /// - [`PqError::IncomparableKey`] if the comparator cannot order the key
    /// - [`PqError::IrreflexiveComparator`] if the key does not compare equal to itself
    pub fn validate(&self, key: Option<&K>) -> Result<(), PqError> {
        let result = match key.map(|k| self.entry_cmp.compare_keys(k, k)) {
            None => Err(PqError::NullKey),
            Some(Some(Ordering::Equal)) => Ok(()),
            Some(Some(_)) => Err(PqError::IrreflexiveComparator),
            Some(None) => Err(PqError::IncomparableKey),
        };
        if let Err(e) = &result {
            log::debug!("rejected key: {e}");
        }
        result
    }

    /// Validates a possibly-absent key and hands it back on success
    ///
    /// Strategies call this at the top of
    /// [`insert_nullable`](crate::PriorityQueue::insert_nullable).
    ///
    /// # Errors
    ///
    /// As [`validate`](Self::validate).
    pub fn accept(&self, key: Option<K>) -> Result<K, PqError> {
        self.validate(key.as_ref())?;
        key.ok_or(PqError::NullKey)
    }

    /// The key comparator this ordering was built from
    pub fn comparator(&self) -> &C {
        self.entry_cmp.key_comparator()
    }
}

impl<K: PartialOrd> Default for PriorityOrder<K, NaturalOrder> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<K, C: Clone> Clone for PriorityOrder<K, C> {
    fn clone(&self) -> Self {
        Self {
            entry_cmp: self.entry_cmp.clone(),
        }
    }
}

impl<K, C: fmt::Debug> fmt::Debug for PriorityOrder<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityOrder")
            .field("cmp", self.entry_cmp.key_comparator())
            .finish()
    }
}
