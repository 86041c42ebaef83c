//! Benchmarks for the split engine and field tokenizers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use runeseq_core::{fields, fields_from_bytes, split, split_n};
use std::hint::black_box;

/// Generate comma-separated records with `num_records` entries
fn generate_records(num_records: usize) -> String {
    let records = ["tokyo", "osaka,", "京都", "  sapporo ", "naha"];

    records
        .iter()
        .cycle()
        .take(num_records)
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

fn benchmark_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let sep = [','];

    for size in [100, 1_000, 10_000].iter() {
        let text: Vec<char> = generate_records(*size).chars().collect();

        group.bench_with_input(BenchmarkId::new("unbounded", size), &text, |b, text| {
            b.iter(|| split(black_box(text), black_box(&sep)));
        });
        group.bench_with_input(BenchmarkId::new("limit_8", size), &text, |b, text| {
            b.iter(|| split_n(black_box(text), black_box(&sep), 8));
        });
    }

    group.finish();
}

fn benchmark_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("fields");

    for size in [100, 1_000, 10_000].iter() {
        let text = generate_records(*size).replace(',', " ");
        let chars: Vec<char> = text.chars().collect();

        group.bench_with_input(BenchmarkId::new("slice", size), &chars, |b, chars| {
            b.iter(|| fields(black_box(chars)));
        });
        group.bench_with_input(BenchmarkId::new("bytes", size), &text, |b, text| {
            b.iter(|| fields_from_bytes(black_box(text.as_bytes())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_split, benchmark_fields);
criterion_main!(benches);
