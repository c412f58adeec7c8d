//! Ordering policies for keys and entries
//!
//! A queue never compares keys with `<` directly. It holds a
//! [`KeyComparator`] chosen at construction time and wraps it in an
//! [`EntryComparator`], which compares entries by extracting their keys.
//! Swapping the comparator changes what "minimum" means without touching
//! the storage strategy: [`ReverseOrder`] turns every queue in this crate
//! into a max-queue.
//!
//! Comparators return `Option<Ordering>`. `None` means the two keys cannot
//! be ordered under this policy, which is how a key that does not fit the
//! comparator (for example `f64::NAN` under [`NaturalOrder`]) is detected
//! when it is inserted.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use priority_queue_adt::comparator::{self, KeyComparator, NaturalOrder, ReverseOrder};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Some(Ordering::Less));
//! assert_eq!(ReverseOrder.compare(&1, &2), Some(Ordering::Greater));
//! assert_eq!(NaturalOrder.compare(&f64::NAN, &f64::NAN), None);
//!
//! let by_len = comparator::from_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_len.compare(&"abc", &"de"), Some(Ordering::Greater));
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::entry::Entry;

/// Policy deciding the relative order of two keys
///
/// Implementations should describe a strict weak ordering over the keys a
/// queue accepts, and must rank every acceptable key `Equal` to itself:
/// queues reject a key whose self-comparison is anything else.
pub trait KeyComparator<K: ?Sized> {
    /// Compares two keys, returning `None` if they cannot be ordered
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

impl<K: ?Sized, C: KeyComparator<K> + ?Sized> KeyComparator<K> for &C {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (**self).compare(a, b)
    }
}

impl<K: ?Sized, C: KeyComparator<K> + ?Sized> KeyComparator<K> for Box<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (**self).compare(a, b)
    }
}

impl<K: ?Sized, C: KeyComparator<K> + ?Sized> KeyComparator<K> for Rc<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (**self).compare(a, b)
    }
}

/// The key type's own ordering (the default policy)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd + ?Sized> KeyComparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// The key type's own ordering, reversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: PartialOrd + ?Sized> KeyComparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        b.partial_cmp(a)
    }
}

/// Comparator backed by a total ordering closure
///
/// Built with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    f: F,
}

/// Wraps a closure `Fn(&K, &K) -> Ordering` as a [`KeyComparator`]
pub fn from_fn<K: ?Sized, F>(f: F) -> FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    FnComparator { f }
}

impl<K: ?Sized, F> KeyComparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        Some((self.f)(a, b))
    }
}

/// Comparator backed by a closure that may report keys incomparable
///
/// Built with [`from_partial_fn`].
#[derive(Clone, Copy)]
pub struct PartialFnComparator<F> {
    f: F,
}

/// Wraps a closure `Fn(&K, &K) -> Option<Ordering>` as a [`KeyComparator`]
pub fn from_partial_fn<K: ?Sized, F>(f: F) -> PartialFnComparator<F>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    PartialFnComparator { f }
}

impl<K: ?Sized, F> KeyComparator<K> for PartialFnComparator<F>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (self.f)(a, b)
    }
}

/// Compares entries by comparing their keys with a [`KeyComparator`]
pub struct EntryComparator<K, C> {
    cmp: C,
    _key: PhantomData<fn(&K)>,
}

impl<K, C> EntryComparator<K, C> {
    pub fn new(cmp: C) -> Self {
        Self {
            cmp,
            _key: PhantomData,
        }
    }

    /// The wrapped key comparator
    pub fn key_comparator(&self) -> &C {
        &self.cmp
    }
}

impl<K, C: KeyComparator<K>> EntryComparator<K, C> {
    /// Compares two entries by key
    #[inline]
    pub fn compare<V>(&self, e1: &Entry<K, V>, e2: &Entry<K, V>) -> Option<Ordering> {
        self.cmp.compare(e1.key(), e2.key())
    }

    /// Compares two bare keys under the same policy
    #[inline]
    pub fn compare_keys(&self, a: &K, b: &K) -> Option<Ordering> {
        self.cmp.compare(a, b)
    }
}

impl<K, C: Clone> Clone for EntryComparator<K, C> {
    fn clone(&self) -> Self {
        Self {
            cmp: self.cmp.clone(),
            _key: PhantomData,
        }
    }
}

impl<K, C: std::fmt::Debug> std::fmt::Debug for EntryComparator<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryComparator")
            .field("cmp", &self.cmp)
            .finish()
    }
}
