//! Benchmarks for the cache hot paths.
//!
//! Targets:
//! - Hit path: `get` on a resident key (promotion included)
//! - Miss path: `get` on an absent key
//! - Insert with eviction: `put` churn through a full cache
//! - Mixed workload: 80/20 get/put over a warm cache

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use recache::LruCache;

const CAPACITY: usize = 1024;

fn warm_cache() -> LruCache<u64, u64> {
    let mut cache = LruCache::new(CAPACITY).expect("positive capacity");
    for i in 0..CAPACITY as u64 {
        cache.put(i, i * 2);
    }
    cache
}

fn bench_get_hit(c: &mut Criterion) {
    let mut cache = warm_cache();
    let mut key = 0u64;
    c.bench_function("cache_ops/get_hit", |b| {
        b.iter(|| {
            key = (key + 1) % CAPACITY as u64;
            black_box(cache.get(&key).copied())
        });
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let mut cache = warm_cache();
    c.bench_function("cache_ops/get_miss", |b| {
        b.iter(|| black_box(cache.get(&u64::MAX).copied()));
    });
}

fn bench_put_with_eviction(c: &mut Criterion) {
    let mut cache = warm_cache();
    let mut next = CAPACITY as u64;
    c.bench_function("cache_ops/put_evicting", |b| {
        b.iter(|| {
            next += 1;
            black_box(cache.put(next, next))
        });
    });
}

fn bench_put_update_in_place(c: &mut Criterion) {
    let mut cache = warm_cache();
    let mut key = 0u64;
    c.bench_function("cache_ops/put_update", |b| {
        b.iter(|| {
            key = (key + 1) % CAPACITY as u64;
            black_box(cache.put(key, key))
        });
    });
}

fn bench_mixed_workload(c: &mut Criterion) {
    c.bench_function("cache_ops/mixed_80_20", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                let mut next = CAPACITY as u64;
                for i in 0..10_000u64 {
                    if i % 5 == 0 {
                        next += 1;
                        cache.put(next, next);
                    } else {
                        cache.get(&(i % CAPACITY as u64));
                    }
                }
                black_box(cache.stats().clone())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_put_with_eviction,
    bench_put_update_in_place,
    bench_mixed_workload
);
criterion_main!(benches);
