// Benchmarks for value comparison, hashing and copying
//
// Comparison runs on every index probe, so these cover the hot paths.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nebula_field::{Object, Timestamp, Value};

// ===== NUMBERS =====

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    let int = Value::integer(9_007_199_254_740_993);
    let double = Value::double(9_007_199_254_740_992.0);
    group.bench_function("integer_vs_integer", |b| {
        let other = Value::integer(42);
        b.iter(|| black_box(&int).cmp(black_box(&other)));
    });
    group.bench_function("integer_vs_double", |b| {
        b.iter(|| black_box(&int).cmp(black_box(&double)));
    });
    group.bench_function("double_vs_nan", |b| {
        let nan = Value::nan();
        b.iter(|| black_box(&double).cmp(black_box(&nan)));
    });

    group.finish();
}

// ===== SCALARS =====

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");

    group.bench_function("cross_kind", |b| {
        let lhs = Value::string("name");
        let rhs = Value::integer(1);
        b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
    });

    group.bench_function("server_timestamp", |b| {
        let t = Timestamp::ORIGIN;
        let lhs = Value::server_timestamp(t, t);
        let rhs = Value::server_timestamp(t, t);
        b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
    });

    for size in [8, 64, 512] {
        group.bench_with_input(BenchmarkId::new("string", size), &size, |b, &size| {
            let lhs = Value::string("a".repeat(size));
            let rhs = Value::string("a".repeat(size));
            b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
        });
    }

    group.finish();
}

// ===== COLLECTIONS =====

fn make_array(size: usize) -> Value {
    Value::array((0..size as i64).map(Value::integer).collect::<Vec<_>>())
}

fn make_object(size: usize) -> Value {
    Value::object(
        (0..size)
            .map(|i| (format!("key{i:05}"), Value::integer(i as i64)))
            .collect::<Object>(),
    )
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("array_cmp", size), &size, |b, &size| {
            let lhs = make_array(size);
            let rhs = make_array(size);
            b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
        });

        group.bench_with_input(BenchmarkId::new("object_cmp", size), &size, |b, &size| {
            let lhs = make_object(size);
            let rhs = make_object(size);
            b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
        });

        group.bench_with_input(BenchmarkId::new("object_clone", size), &size, |b, &size| {
            let value = make_object(size);
            b.iter(|| black_box(&value).clone());
        });

        group.bench_with_input(BenchmarkId::new("object_hash", size), &size, |b, &size| {
            let value = make_object(size);
            b.iter(|| {
                let mut hasher = DefaultHasher::new();
                black_box(&value).hash(&mut hasher);
                hasher.finish()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_numbers, bench_scalars, bench_collections);
criterion_main!(benches);
