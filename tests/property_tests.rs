//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check every
//! strategy against a plain sorted model of the queued keys.

use proptest::prelude::*;
use priority_queue_adt::comparator::{KeyComparator, ReverseOrder};
use priority_queue_adt::heap::HeapPriorityQueue;
use priority_queue_adt::sorted_list::SortedListPriorityQueue;
use priority_queue_adt::unsorted_list::UnsortedListPriorityQueue;
use priority_queue_adt::{EntryHandle, KeyedPriorityQueue, PriorityQueue};

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    RemoveMin,
    Min,
    ReplaceKey(usize, i32),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-100i32..100).prop_map(Op::Insert),
        2 => Just(Op::RemoveMin),
        1 => Just(Op::Min),
        1 => (0usize..64, -100i32..100).prop_map(|(i, k)| Op::ReplaceKey(i, k)),
        1 => (0usize..64).prop_map(Op::Remove),
    ]
}

/// len() equals inserts minus removals after every operation
fn test_len_invariant<Q: PriorityQueue<i32, i32>>(
    mut pq: Q,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut inserted = 0usize;
    let mut removed = 0usize;

    for (should_pop, value) in ops {
        if should_pop {
            if pq.remove_min().is_some() {
                removed += 1;
            }
        } else {
            pq.insert(value, value).unwrap();
            inserted += 1;
        }

        prop_assert_eq!(pq.len(), inserted - removed);
        prop_assert_eq!(pq.is_empty(), inserted == removed);
    }

    Ok(())
}

/// min() and remove_min() always agree with the model's first key
///
/// `descending` flips the model to match a `ReverseOrder` queue.
fn test_model_invariant<Q: KeyedPriorityQueue<i32, i32>>(
    mut pq: Q,
    ops: Vec<Op>,
    descending: bool,
) -> Result<(), TestCaseError> {
    let mut model: Vec<(EntryHandle, i32)> = Vec::new();
    let first = |model: &[(EntryHandle, i32)]| {
        let keys = model.iter().map(|&(_, k)| k);
        if descending {
            keys.max()
        } else {
            keys.min()
        }
    };

    for op in ops {
        match op {
            Op::Insert(key) => {
                let handle = pq.insert(key, key).unwrap();
                model.push((handle, key));
            }
            Op::RemoveMin => {
                let expected = first(&model[..]);
                let removed = pq.remove_min();
                prop_assert_eq!(removed.as_ref().map(|e| *e.key()), expected);
                if let Some(entry) = removed {
                    let pos = model.iter().position(|&(h, _)| !pq.contains(h));
                    prop_assert!(pos.is_some(), "no tracked handle went stale after removing {:?}", entry);
                    if let Some(pos) = pos {
                        model.remove(pos);
                    }
                }
            }
            Op::Min => {
                let before = pq.len();
                prop_assert_eq!(pq.min().map(|e| *e.key()), first(&model[..]));
                prop_assert_eq!(pq.len(), before);
            }
            Op::ReplaceKey(index, key) if !model.is_empty() => {
                let index = index % model.len();
                let (handle, old) = model[index];
                prop_assert_eq!(pq.replace_key(handle, key), Ok(old));
                model[index].1 = key;
            }
            Op::Remove(index) if !model.is_empty() => {
                let (handle, key) = model.remove(index % model.len());
                let entry = pq.remove(handle);
                prop_assert_eq!(entry.map(|e| *e.key()), Ok(key));
            }
            Op::ReplaceKey(..) | Op::Remove(_) => {}
        }

        prop_assert_eq!(pq.len(), model.len());
        for &(handle, key) in &model {
            prop_assert_eq!(pq.get(handle).map(|e| *e.key()), Some(key));
        }
    }

    Ok(())
}

/// Draining yields keys in non-decreasing order under the comparator
fn test_drain_order<C, Q>(mut pq: Q, values: Vec<i32>, cmp: C) -> Result<(), TestCaseError>
where
    C: KeyComparator<i32>,
    Q: PriorityQueue<i32, ()>,
{
    for v in &values {
        pq.insert(*v, ()).unwrap();
    }

    let mut last: Option<i32> = None;
    while let Some(entry) = pq.remove_min() {
        if let Some(prev) = last {
            prop_assert!(
                cmp.compare(&prev, entry.key()) != Some(std::cmp::Ordering::Greater),
                "{} came out after {}",
                entry.key(),
                prev
            );
        }
        last = Some(*entry.key());
    }
    prop_assert!(pq.is_empty());

    Ok(())
}

proptest! {
    #[test]
    fn test_heap_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant(HeapPriorityQueue::new(), ops)?;
    }

    #[test]
    fn test_heap_model_invariant(ops in prop::collection::vec(op_strategy(), 0..150)) {
        test_model_invariant(HeapPriorityQueue::new(), ops, false)?;
    }

    #[test]
    fn test_heap_reverse_model_invariant(ops in prop::collection::vec(op_strategy(), 0..150)) {
        test_model_invariant(HeapPriorityQueue::with_comparator(ReverseOrder), ops, true)?;
    }

    #[test]
    fn test_heap_drain_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_drain_order(HeapPriorityQueue::with_comparator(ReverseOrder), values, ReverseOrder)?;
    }

    // Sorted list tests
    #[test]
    fn test_sorted_list_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant(SortedListPriorityQueue::new(), ops)?;
    }

    #[test]
    fn test_sorted_list_model_invariant(ops in prop::collection::vec(op_strategy(), 0..150)) {
        test_model_invariant(SortedListPriorityQueue::new(), ops, false)?;
    }

    #[test]
    fn test_sorted_list_drain_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        test_drain_order(SortedListPriorityQueue::new(), values, priority_queue_adt::comparator::NaturalOrder)?;
    }

    // Unsorted list tests
    #[test]
    fn test_unsorted_list_len_invariant(ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)) {
        test_len_invariant(UnsortedListPriorityQueue::new(), ops)?;
    }

    #[test]
    fn test_unsorted_list_model_invariant(ops in prop::collection::vec(op_strategy(), 0..150)) {
        test_model_invariant(UnsortedListPriorityQueue::with_capacity(16), ops, false)?;
    }

    #[test]
    fn test_unsorted_list_reverse_model_invariant(ops in prop::collection::vec(op_strategy(), 0..150)) {
        test_model_invariant(UnsortedListPriorityQueue::with_comparator(ReverseOrder), ops, true)?;
    }
}
