//! Benchmarks for parsing and rendering a whole note sequence.

use std::hint::black_box;

use criterion::Criterion;
use saavy_pluck::{parse_sequence, EngineConfig, KarplusStrong};

const MELODY: &str = "A3q A3q E3q E3q F#3q F#3q E3h D3q D3q C#3q C#3q B2q B2q A2h";

pub fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/sequence");

    group.bench_function("parse", |b| {
        b.iter(|| parse_sequence(black_box(MELODY), black_box(120.0)))
    });

    let mut ks = KarplusStrong::with_seed(EngineConfig::default(), 3).unwrap();
    group.sample_size(10);
    group.bench_function("render_melody", |b| {
        b.iter(|| {
            ks.clear();
            black_box(ks.add_notes(parse_sequence(MELODY, 240.0)))
        })
    });

    group.finish();
}
