//! Benchmarks for dictionary compilation and header generation.

use autocorrect_trie::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Create `size` pairs with distinct, equal-length typos so none overlap.
fn create_pairs(size: usize) -> Vec<AutocorrectPair> {
    let letters: Vec<char> = ('a'..='z').collect();
    (0..size)
        .map(|i| {
            let typo: String = [
                letters[(i / 17_576) % 26],
                letters[(i / 676) % 26],
                letters[(i / 26) % 26],
                letters[i % 26],
                'q',
            ]
            .iter()
            .collect();
            // Shares the first two letters, so the edit keeps a prefix.
            let correction = format!("{}{}", &typo[..2], "correction");
            AutocorrectPair::new(typo, correction)
        })
        .collect()
}

/// Benchmark: full table compilation for one dictionary
fn bench_compile_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_table");

    for size in [100, 1000, 5000, 20_000].iter() {
        let pairs = create_pairs(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let table = AutocorrectTable::compile("bench", black_box(&pairs))
                    .expect("Compilation failed");
                black_box(table);
            });
        });
    }
    group.finish();
}

/// Benchmark: trie construction alone
fn bench_build_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_trie");

    for size in [1000, 20_000].iter() {
        let pairs = create_pairs(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let trie = Trie::from_pairs(black_box(&pairs)).expect("Trie build failed");
                black_box(trie);
            });
        });
    }
    group.finish();
}

/// Benchmark: rendering the C header
fn bench_header_output(c: &mut Criterion) {
    let pairs = create_pairs(5000);
    let output = compile(&[Dictionary::new("bench", pairs)]).expect("Compilation failed");

    c.bench_function("header_output_5000", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            CHeaderSerializer::serialize(black_box(&output), &mut buffer)
                .expect("Serialization failed");
            black_box(buffer);
        });
    });
}

criterion_group!(
    compile_benches,
    bench_compile_table,
    bench_build_trie,
    bench_header_output,
);
criterion_main!(compile_benches);
