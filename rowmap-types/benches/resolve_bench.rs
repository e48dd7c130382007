//! Bench descriptor resolution and holder allocation for a mix of scalar and
//! nested column types.

#![forbid(unsafe_code)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use rowmap_types::{Holder, TypeInfo, resolve};

const N: usize = 10_000;

const NAMES: &[&str] = &[
    "varchar",
    "bigint",
    "timestamp",
    "blob",
    "boolean",
    "double",
    "int",
    "uuid",
    "list<text>",
    "set<timeuuid>",
    "map<text, list<bigint>>",
    "map<uuid, map<int, set<float>>>",
    "decimal",
];

fn make_descriptors(n: usize) -> Vec<TypeInfo> {
    let parsed: Vec<TypeInfo> = NAMES
        .iter()
        .map(|name| name.parse().expect("bench type name"))
        .collect();
    let mut rng = SmallRng::seed_from_u64(0x5EED_CAFE_F00D_0001);
    (0..n)
        .map(|_| parsed[rng.random_range(0..parsed.len())].clone())
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let descriptors = make_descriptors(N);

    c.bench_function("resolve_mixed_10k", |b| {
        b.iter(|| {
            let mut resolved = 0usize;
            for info in &descriptors {
                if resolve(black_box(info)).is_some() {
                    resolved += 1;
                }
            }
            black_box(resolved)
        })
    });

    c.bench_function("holder_new_mixed_10k", |b| {
        b.iter(|| {
            let holders: Vec<Holder> = descriptors.iter().map(Holder::new).collect();
            black_box(holders)
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
