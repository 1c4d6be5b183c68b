pub mod dsp; // Delay line primitive
pub mod error;
pub mod io; // PCM quantization and WAV output
pub mod sequencing; // Note names, durations and the text sequence format
pub mod synth; // Karplus-Strong engine

pub use error::{NoteError, SynthError};
pub use io::pcm::PcmFormat;
pub use sequencing::{parse_sequence, Note};
pub use synth::{BitDepth, EngineConfig, KarplusStrong, SlideSpec};

/// How much energy each sample keeps per `update()` (1.0 = never decays).
pub const DEFAULT_DECAY: f64 = 0.996;
/// Output volume as a fraction of full scale.
pub const DEFAULT_VOLUME: f64 = 0.75;
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
