//! Benchmarks for low-level DSP primitives.

mod delay;

pub use delay::bench_delay;
