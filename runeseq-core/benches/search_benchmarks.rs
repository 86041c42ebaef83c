//! Benchmarks for subsequence search and counting

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use runeseq_core::{count, index, last_index};
use std::hint::black_box;

/// Generate mixed-script text of roughly `num_words` words
fn generate_text(num_words: usize) -> Vec<char> {
    let words = ["alpha", "βήτα", "gamma", "デルタ", "epsilon", "ζήτα"];

    words
        .iter()
        .cycle()
        .take(num_words)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .collect()
}

fn benchmark_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    let needle: Vec<char> = "needle".chars().collect();

    for size in [100, 1_000, 10_000].iter() {
        let mut text = generate_text(*size);
        text.extend(" needle".chars());

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| index(black_box(text), black_box(&needle)));
        });
    }

    group.finish();
}

fn benchmark_near_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_near_miss");

    // Every window shares the first element with the pattern
    for size in [100, 1_000, 10_000].iter() {
        let text = vec!['a'; *size];
        let mut needle = vec!['a'; 16];
        needle.push('b');

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| index(black_box(text), black_box(&needle)));
        });
    }

    group.finish();
}

fn benchmark_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    let sep = [' '];

    for size in [100, 1_000, 10_000].iter() {
        let text = generate_text(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| count(black_box(text), black_box(&sep)));
        });
    }

    group.finish();
}

fn benchmark_last_index(c: &mut Criterion) {
    let text = generate_text(10_000);
    let needle: Vec<char> = "alpha".chars().collect();

    c.bench_function("last_index", |b| {
        b.iter(|| last_index(black_box(&text), black_box(&needle)));
    });
}

criterion_group!(
    benches,
    benchmark_index,
    benchmark_near_miss,
    benchmark_count,
    benchmark_last_index
);
criterion_main!(benches);
