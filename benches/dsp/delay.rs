//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use saavy_pluck::{dsp::delay::DelayLine, DEFAULT_DECAY};

use crate::LINE_LENGTHS;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");
    let mut rng = Pcg32::seed_from_u64(1);

    for &len in LINE_LENGTHS {
        // One full pass around the string (the per-period cost of a note)
        let mut line = DelayLine::new(len, DEFAULT_DECAY, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("update_pass", len), &len, |b, &len| {
            b.iter(|| {
                let mut sum = 0.0;
                for _ in 0..len {
                    sum += line.value();
                    line.update();
                    line.advance();
                }
                black_box(sum)
            })
        });

        // Insert then delete - the cost of one slide/vibrato resize pair
        let mut line = DelayLine::new(len, DEFAULT_DECAY, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("insert_delete", len), &len, |b, _| {
            b.iter(|| {
                line.insert();
                black_box(line.delete());
                line.advance();
            })
        });
    }

    group.finish();
}
