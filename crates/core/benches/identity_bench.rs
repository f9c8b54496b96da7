//! Benchmarks for container shape deduplication and item padding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use u_packing_core::{dedup_by_shape, Container, Decimal, Item};

fn random_containers(n: usize) -> Vec<Container> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            // Few distinct edges so many records share a shape.
            let mut edge = || Decimal::from(rng.gen_range(1..=4) * 10);
            Container::new(format!("C{}", i), edge(), edge(), edge())
                .expect("generated dimensions are positive")
        })
        .collect()
}

fn dedup_benchmark(c: &mut Criterion) {
    let containers = random_containers(1000);

    c.bench_function("dedup_1000_containers", |b| {
        b.iter(|| black_box(dedup_by_shape(black_box(&containers))))
    });
}

fn padding_benchmark(c: &mut Criterion) {
    let item = Item::builder("B", Decimal::new(1234, 2), Decimal::from(20), Decimal::from(30))
        .material_buffer(Decimal::new(5, 1))
        .build()
        .expect("valid item");

    c.bench_function("unpad_pad_cycle", |b| {
        b.iter(|| {
            let mut it = item.clone();
            it.unpad_measurements().expect("in range");
            it.pad_measurements().expect("in range");
            black_box(it)
        })
    });
}

criterion_group!(benches, dedup_benchmark, padding_benchmark);
criterion_main!(benches);
