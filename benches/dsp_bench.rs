//! Benchmarks for the delay line and note rendering.
//!
//! Run with: cargo bench
//!
//! Rendering is offline, so these track throughput rather than deadlines.
//! For scale, one second of 48 kHz mono audio is 48,000 update/advance steps.
//!
//! Benchmark groups:
//!   - dsp/*        Delay line primitives (update, insert/delete)
//!   - scenarios/*  Notes, slides, vibrato and whole sequences

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Delay line lengths from a high treble note down to a low bass note at 48 kHz.
pub const LINE_LENGTHS: &[usize] = &[24, 109, 436, 1_745];

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_delay,
    // Real-world scenarios
    scenarios::bench_notes,
    scenarios::bench_sequence,
);
criterion_main!(benches);
