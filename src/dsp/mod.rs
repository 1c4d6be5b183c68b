//! Low-level DSP primitives used by the synthesis engine.
//!
//! These components stay focused on the signal-processing math. The engine in
//! [`crate::synth`] layers quantization, note timing and pitch glides on top.

/// Circular Karplus-Strong delay line with resizable period.
pub mod delay;

pub use delay::DelayLine;
