//! Storage strategy benchmarks
//!
//! Compares the three strategies on the same workloads:
//!
//! - **fill_drain**: insert n random keys, then remove them all
//! - **churn**: keep n entries queued while alternating insert and remove_min
//! - **replace_key**: re-key random queued entries through their handles
//!
//! Keys come from a seeded LCG so every run sees the same sequence.
//!
//! ```sh
//! cargo bench --bench queue_ops
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use priority_queue_adt::heap::HeapPriorityQueue;
use priority_queue_adt::sorted_list::SortedListPriorityQueue;
use priority_queue_adt::unsorted_list::UnsortedListPriorityQueue;
use priority_queue_adt::{KeyedPriorityQueue, PriorityQueue};

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }
}

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() % 1_000_000).collect()
}

fn fill_drain<Q: PriorityQueue<u64, u64>>(mut pq: Q, keys: &[u64]) -> u64 {
    for &k in keys {
        let _ = pq.insert(k, k);
    }
    let mut sum = 0;
    while let Some(entry) = pq.remove_min() {
        sum ^= *entry.value();
    }
    sum
}

fn churn<Q: PriorityQueue<u64, u64>>(mut pq: Q, keys: &[u64], queued: usize) -> u64 {
    let (warm, rest) = keys.split_at(queued.min(keys.len()));
    for &k in warm {
        let _ = pq.insert(k, k);
    }
    let mut sum = 0;
    for &k in rest {
        let _ = pq.insert(k, k);
        if let Some(entry) = pq.remove_min() {
            sum ^= *entry.key();
        }
    }
    sum
}

fn replace_keys<Q: KeyedPriorityQueue<u64, u64>>(mut pq: Q, keys: &[u64]) -> usize {
    let handles: Vec<_> = keys.iter().filter_map(|&k| pq.insert(k, k).ok()).collect();
    let mut rng = Lcg::new(7);
    for _ in 0..handles.len() {
        let handle = handles[(rng.next() as usize) % handles.len()];
        let _ = pq.replace_key(handle, rng.next() % 1_000_000);
    }
    pq.len()
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    for n in [100usize, 1_000, 10_000] {
        let keys = random_keys(n, 42);
        group.bench_with_input(BenchmarkId::new("heap", n), &keys, |b, keys| {
            b.iter(|| black_box(fill_drain(HeapPriorityQueue::with_capacity(n), keys)))
        });
        group.bench_with_input(BenchmarkId::new("sorted_list", n), &keys, |b, keys| {
            b.iter(|| black_box(fill_drain(SortedListPriorityQueue::with_capacity(n), keys)))
        });
        // Quadratic drain; skip the largest size.
        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("unsorted_list", n), &keys, |b, keys| {
                b.iter(|| black_box(fill_drain(UnsortedListPriorityQueue::with_capacity(n), keys)))
            });
        }
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    let keys = random_keys(5_000, 1);
    group.bench_function("heap", |b| {
        b.iter(|| black_box(churn(HeapPriorityQueue::new(), &keys, 500)))
    });
    group.bench_function("sorted_list", |b| {
        b.iter(|| black_box(churn(SortedListPriorityQueue::new(), &keys, 500)))
    });
    group.bench_function("unsorted_list", |b| {
        b.iter(|| black_box(churn(UnsortedListPriorityQueue::new(), &keys, 500)))
    });
    group.finish();
}

fn bench_replace_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_key");
    let keys = random_keys(2_000, 9);
    group.bench_function("heap", |b| {
        b.iter(|| black_box(replace_keys(HeapPriorityQueue::new(), &keys)))
    });
    group.bench_function("sorted_list", |b| {
        b.iter(|| black_box(replace_keys(SortedListPriorityQueue::new(), &keys)))
    });
    group.bench_function("unsorted_list", |b| {
        b.iter(|| black_box(replace_keys(UnsortedListPriorityQueue::new(), &keys)))
    });
    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_churn, bench_replace_key);
criterion_main!(benches);
