// benches/normalize_bench.rs
// Criterion benchmarks for the Sinhala pipeline:
//  - full normalize over a deterministic mixed-script corpus
//  - tokenizer alone
//  - zero-copy hit rate of the tokenizer cleanup on already-clean text

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::borrow::Cow;
use std::hint::black_box;

use sinhala_norm::{Context, Normalizer, Tokenizer, normalize};

fn tweet_corpus(seed: u64, lines: usize) -> Vec<String> {
    const POOL: &[&str] = &[
        "ආයුබෝවන් ළමයිනේ",
        "RT @sam92ky: මචං කොහොමද",
        "\u{0DD9}\u{0D9C}\u{0DAF}\u{0DBB}\u{0DA7} යනවද",
        "හරි😂😂නියමයි",
        "check this http://example.com/page now",
        "#ලංකාව #SriLanka 2024",
        "hello @friend how are you",
        "\"මිනිසෙක් පොතක් ගෙනාවා\"",
    ];

    let mut rng = StdRng::seed_from_u64(seed);
    (0..lines)
        .map(|_| {
            let words = rng.random_range(1..4);
            (0..words)
                .map(|_| POOL[rng.random_range(0..POOL.len())])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn benches_main(c: &mut Criterion) {
    let corpus = tweet_corpus(42, 1_000);
    let bytes: usize = corpus.iter().map(String::len).sum();
    let normalizer = Normalizer::default();

    let mut group = c.benchmark_group("sinhala-norm");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("normalize/corpus", |b| {
        b.iter(|| {
            for line in &corpus {
                black_box(normalizer.normalize(black_box(line)));
            }
        })
    });

    group.bench_function("normalize/free-fn", |b| {
        b.iter(|| {
            for line in &corpus {
                black_box(normalize(black_box(line)));
            }
        })
    });

    let tokenizer = Tokenizer::new();
    let ctx = Context::default();
    group.bench_function("tokenize/corpus", |b| {
        b.iter(|| {
            for line in &corpus {
                black_box(tokenizer.tokenize(black_box(line), &ctx));
            }
        })
    });
    group.finish();

    let clean = "මචං කොහොමද අද ගෙදර යනවා";
    let borrowed = matches!(tokenizer.clean(clean, &ctx), Cow::Borrowed(_));
    println!("tokenizer cleanup zero-copy on clean text: {borrowed}");
    c.bench_function("tokenizer/clean-zero-copy", |b| {
        b.iter(|| black_box(tokenizer.clean(black_box(clean), &ctx)))
    });
}

criterion_group!(benches, benches_main);
criterion_main!(benches);
