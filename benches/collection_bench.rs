//! Benchmark for immutars containers vs standard library structures.
//!
//! Compares List against VecDeque and Map against the standard HashMap for
//! common operations, to keep the cost of persistent value semantics visible.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use immutars::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::hint::black_box;

// =============================================================================
// cons Benchmark (prepend)
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        // List cons (O(1), shares the tail)
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::empty();
                for index in 0..size {
                    list = list.cons(black_box(index));
                }
                black_box(list)
            });
        });

        // VecDeque push_front
        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_front(black_box(index));
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// put Benchmark (insert)
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [10, 100, 1000] {
        // Map put (clone-and-modify persistent value)
        group.bench_with_input(BenchmarkId::new("Map", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = Map::empty();
                for index in 0..size {
                    map = map.put(index, black_box(index));
                }
                black_box(map)
            });
        });

        // HashMap insert (in-place)
        group.bench_with_input(
            BenchmarkId::new("HashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = HashMap::new();
                    for index in 0..size {
                        map.insert(index.to_string(), black_box(index));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// fold Benchmark (traversal)
// =============================================================================

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold");

    for size in [100i64, 1000, 10000] {
        let list: List<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("List", size), &list, |bencher, list| {
            bencher.iter(|| list.fold(0i64, |sum, element| sum + black_box(element)));
        });

        let vector: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                vector
                    .iter()
                    .fold(0i64, |sum, element| sum + black_box(element))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_cons, benchmark_put, benchmark_fold);
criterion_main!(benches);
