//! Performance benchmarks for letter-pair extraction and aggregation
//! Measures the map phase, the grouped reduce and end-to-end rendering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lettermatrix::mapreduce::aggregation::{fold_group, render_report, Matrix};
use lettermatrix::mapreduce::{analyze_lines, shuffle, PairExtractor};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "the", "Quick", "brown", "fox", "jumps", "over", "lazy", "dog's", "back", "1984",
    "letter", "matrix", "adjacency", "frequency", "zebra", "quartz",
];

/// Build a synthetic corpus of `count` lines
fn create_corpus(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..12)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let extractor = PairExtractor::new();

    for size in [100, 1_000, 10_000] {
        let corpus = create_corpus(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &corpus, |b, corpus| {
            b.iter(|| black_box(extractor.extract_chunk(corpus)));
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for size in [100, 1_000, 10_000] {
        let groups = shuffle(PairExtractor::new().extract_chunk(&create_corpus(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &groups, |b, groups| {
            b.iter(|| {
                let matrix = groups.iter().fold(Matrix::new(), fold_group);
                black_box(render_report(&matrix))
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let corpus = create_corpus(5_000);
    c.bench_function("analyze_lines_5000", |b| {
        b.iter(|| black_box(analyze_lines(&corpus).to_text()));
    });
}

criterion_group!(benches, bench_extract, bench_reduce, bench_end_to_end);
criterion_main!(benches);
