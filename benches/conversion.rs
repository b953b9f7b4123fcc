//! Benchmarks for term-list and column-string conversions.
//!
//! Run with:
//! ```bash
//! cargo bench --bench conversion
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use minterm_rs::function::BooleanFunction;

/// Every third row as a minterm, every seventh (if free) as a don't-care.
fn sparse_function(width: u32) -> BooleanFunction {
    let size = 1i64 << width;
    let minterms: Vec<i64> = (0..size).filter(|i| i % 3 == 0).collect();
    let dontcares: Vec<i64> = (0..size).filter(|i| i % 7 == 0 && i % 3 != 0).collect();
    BooleanFunction::builder(width)
        .minterms(minterms)
        .dontcares(dontcares)
        .build()
        .expect("valid function")
}

fn bench_to_column_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_column_string");
    for width in [8u32, 12, 16] {
        let f = sparse_function(width);
        group.throughput(Throughput::Elements(1 << width));
        group.bench_with_input(BenchmarkId::from_parameter(width), &f, |b, f| {
            b.iter(|| f.to_column_string())
        });
    }
    group.finish();
}

fn bench_break_column_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("break_column_string");
    for width in [8u32, 12, 16] {
        let column = sparse_function(width).to_column_string();
        let f = BooleanFunction::from_column_string(width, column).expect("valid column");
        group.throughput(Throughput::Elements(1 << width));
        group.bench_with_input(BenchmarkId::from_parameter(width), &f, |b, f| {
            b.iter(|| f.break_column_string())
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for width in [8u32, 12, 16] {
        let size = 1i64 << width;
        let minterms: Vec<i64> = (0..size).step_by(2).collect();
        group.throughput(Throughput::Elements(1 << width));
        group.bench_with_input(BenchmarkId::from_parameter(width), &minterms, |b, minterms| {
            b.iter(|| BooleanFunction::from_minterms(width, minterms.iter().copied()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_to_column_string,
    bench_break_column_string,
    bench_build
);
criterion_main!(benches);
