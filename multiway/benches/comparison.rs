use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multiway::OrderedMultiwayTree;
use std::collections::BTreeMap;

const TREE_ORDER: usize = 16;

fn insert_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_comparison");

    for &size in &[1_000i64, 10_000] {
        group.bench_with_input(BenchmarkId::new("multiway", size), &size, |b, &n| {
            b.iter(|| {
                let mut tree = OrderedMultiwayTree::new(TREE_ORDER).unwrap();
                for key in 0..n {
                    tree.put(black_box(key), key * 2);
                }
                black_box(tree.size())
            })
        });

        group.bench_with_input(BenchmarkId::new("std_btreemap", size), &size, |b, &n| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for key in 0..n {
                    map.insert(black_box(key), key * 2);
                }
                black_box(map.len())
            })
        });
    }

    group.finish();
}

fn lookup_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_comparison");
    const SIZE: i64 = 10_000;

    let mut tree = OrderedMultiwayTree::new(TREE_ORDER).unwrap();
    let mut map = BTreeMap::new();
    for key in 0..SIZE {
        tree.put(key, key * 2);
        map.insert(key, key * 2);
    }

    group.bench_function("multiway", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in (0..SIZE).step_by(7) {
                if tree.search(black_box(&key)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.bench_function("std_btreemap", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for key in (0..SIZE).step_by(7) {
                if map.get(black_box(&key)).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });

    group.finish();
}

criterion_group!(benches, insert_comparison, lookup_comparison);
criterion_main!(benches);
