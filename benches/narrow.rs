//! Narrowing microbenchmarks - per-column scan + rewrite cost
//!
//! Run with: cargo bench --bench narrow
//!
//! Metrics:
//! - ns/element for the range scan and rewrite
//! - throughput (GB/s, input width) per column kind

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slimtab::{narrow, narrow_with, Column, NarrowOptions, Table};

fn int_table(n: usize) -> Table {
    // fits u16, so both passes (scan + rewrite) run
    let data: Vec<i64> = (0..n).map(|i| (i % 50_000) as i64).collect();
    Table::new(vec!["v".to_string()], vec![Column::I64(data)])
}

fn float_table(n: usize) -> Table {
    // quarter steps are exact in f32, so the rewrite runs
    let data: Vec<f64> = (0..n).map(|i| (i % 1000) as f64 * 0.25).collect();
    Table::new(vec!["v".to_string()], vec![Column::F64(data)])
}

fn text_table(n: usize) -> Table {
    let symbols = ["buy", "sell", "hold"];
    let data: Vec<String> = (0..n).map(|i| symbols[i % 3].to_string()).collect();
    Table::new(vec!["v".to_string()], vec![Column::Str(data)])
}

fn bench_narrow(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow");

    for &n in &[10_000usize, 1_000_000] {
        group.throughput(Throughput::Bytes((n * 8) as u64));

        group.bench_with_input(BenchmarkId::new("i64_to_u16", n), &n, |b, &n| {
            b.iter_batched(
                || int_table(n),
                |t| black_box(narrow(t).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("f64_to_f32", n), &n, |b, &n| {
            b.iter_batched(
                || float_table(n),
                |t| black_box(narrow(t).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("str_to_categorical", n), &n, |b, &n| {
            let opts = NarrowOptions {
                text_to_categorical: true,
            };
            b.iter_batched(
                || text_table(n),
                |t| black_box(narrow_with(t, &opts).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_narrow);
criterion_main!(benches);
