//! Benchmarks for single note, slide and vibrato rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_pluck::{BitDepth, EngineConfig, KarplusStrong, SlideSpec};

pub fn bench_notes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/notes");

    for bits in [8u16, 16, 24, 32] {
        let config = EngineConfig::new(48_000, BitDepth::try_from(bits).unwrap(), 2);
        let mut ks = KarplusStrong::with_seed(config, 7).unwrap();

        // A quarter second A4, the common case
        group.bench_with_input(BenchmarkId::new("note", bits), &bits, |b, _| {
            b.iter(|| {
                ks.clear();
                ks.add_note(black_box(440.0), black_box(0.25)).unwrap();
            })
        });
    }

    let config = EngineConfig::default();
    let mut ks = KarplusStrong::with_seed(config, 7).unwrap();

    // Octave glide down - exercises insert() spread over the window
    group.bench_function("slide_octave_down", |b| {
        b.iter(|| {
            ks.clear();
            ks.add_slide(black_box(SlideSpec {
                initial_frequency: 220.0,
                initial_duration: 0.1,
                slide_duration: 0.1,
                final_frequency: 110.0,
                final_duration: 0.1,
            }))
            .unwrap();
        })
    });

    // Half-semitone vibrato - a resize nearly every frame
    group.bench_function("vibrato", |b| {
        b.iter(|| {
            ks.clear();
            ks.add_vibrato(black_box(196.0), 0.3, 0.5, 6.0).unwrap();
        })
    });

    group.finish();
}
