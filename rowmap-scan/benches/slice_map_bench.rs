//! Bench collecting 100_000 rows of a mixed scalar/collection schema into
//! generic records.

#![forbid(unsafe_code)]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use rowmap_scan::RowIteratorExt;
use rowmap_test_utils::{MockIter, column};
use rowmap_types::{Uuid, Value};

const N: usize = 100_000;

fn make_rows(n: usize) -> Vec<Vec<Value>> {
    let mut rng = SmallRng::seed_from_u64(0xC0FF_EE00_DADA_BEEF);
    (0..n)
        .map(|i| {
            let tags = (0..rng.random_range(0..4))
                .map(|t| Value::from(format!("tag{t}")))
                .collect();
            vec![
                Value::Uuid(Uuid::from_u128(rng.random::<u128>())),
                Value::from(format!("user{i:06}")),
                Value::BigInt(rng.random::<i64>()),
                Value::Double(rng.random::<f64>()),
                Value::List(tags),
            ]
        })
        .collect()
}

fn make_iter(rows: &[Vec<Value>]) -> MockIter {
    MockIter::new(vec![
        column("id", "uuid"),
        column("name", "varchar"),
        column("visits", "counter"),
        column("score", "double"),
        column("tags", "set<text>"),
    ])
    .with_rows(rows.iter().cloned())
}

fn bench_slice_map(c: &mut Criterion) {
    let rows = make_rows(N);

    c.bench_function("slice_map_100k", |b| {
        b.iter_batched(
            || make_iter(&rows),
            |mut iter| black_box(iter.slice_map().expect("slice_map")),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("map_scan_100k", |b| {
        b.iter_batched(
            || make_iter(&rows),
            |mut iter| {
                let mut m = rowmap_types::RowMap::default();
                let mut count = 0usize;
                while iter.map_scan(&mut m).expect("map_scan") {
                    count += 1;
                }
                black_box(count)
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_slice_map);
criterion_main!(benches);
