//! Real-world scenario benchmarks.
//!
//! These render complete notes and sequences the way the `pluck` binary
//! does, including quantization into the PCM payload.

mod notes;
mod sequence;

pub use notes::bench_notes;
pub use sequence::bench_sequence;
