use std::collections::BTreeMap;

use cesium_skiplist::SkipList;
use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
    Throughput,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

static SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..count).map(|_| rng.gen()).collect()
}

fn filled(keys: &[u64]) -> SkipList<u64, u64> {
    let mut list = SkipList::with_rng(SmallRng::seed_from_u64(1));
    for &k in keys {
        list.upsert(k, k);
    }
    list
}

pub fn upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("upsert");
    for size in SIZES.iter() {
        let keys = random_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("skiplist", size), &keys, |b, keys| {
            b.iter(|| filled(keys))
        });
        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| keys.iter().map(|&k| (k, k)).collect::<BTreeMap<_, _>>())
        });
    }
    group.finish();
}

pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in SIZES.iter() {
        let keys = random_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("skiplist", size), &keys, |b, keys| {
            b.iter_batched(
                || filled(keys),
                |mut list| {
                    for k in keys {
                        black_box(list.remove(k));
                    }
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<_, _>>(),
                |mut map| {
                    for k in keys {
                        black_box(map.remove(k));
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for size in SIZES.iter() {
        let keys = random_keys(*size);
        let list = filled(&keys);
        let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("skiplist", size), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| list.contains(*k)).count())
        });
        group.bench_with_input(BenchmarkId::new("btreemap", size), &keys, |b, keys| {
            b.iter(|| keys.iter().filter(|k| map.contains_key(*k)).count())
        });
    }
    group.finish();
}

criterion_group!(benches, upsert, remove, contains);
criterion_main!(benches);
