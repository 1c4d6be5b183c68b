//! Error types for synthesis and note parsing.

use std::io;

/// Errors raised by the engine and the WAV writer.
///
/// Every generation call validates its arguments before it appends anything,
/// so a returned error always leaves the PCM payload untouched.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("frequency must be positive and finite, got {0} Hz")]
    InvalidFrequency(f64),

    #[error("duration must be positive and finite, got {0} s")]
    InvalidDuration(f64),

    #[error("{frequency} Hz at {sample_rate} Hz sample rate gives an unusable delay line length")]
    InvalidBufferLength { frequency: f64, sample_rate: u32 },

    #[error("delay line needs at least one sample")]
    EmptyDelayLine,

    #[error("unsupported bit depth {0}, expected 8, 16, 24 or 32")]
    UnsupportedBitDepth(u16),

    #[error("sample rate must be non-zero")]
    ZeroSampleRate,

    #[error("channel count must be non-zero")]
    ZeroChannels,

    #[error("{channels} channels of {bits} bit audio at {sample_rate} Hz overflow the WAV header fields")]
    FormatTooWide {
        sample_rate: u32,
        bits: u16,
        channels: u16,
    },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("PCM payload of {0} bytes does not fit in a WAV file")]
    PayloadTooLarge(usize),

    #[error("failed to write audio: {0}")]
    Io(#[from] io::Error),
}

/// Errors for a single token of a note sequence.
///
/// Parsing reports these per token; one bad token never aborts the rest of
/// the sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoteError {
    #[error("{0:?} was not parsable, expected <pitch><octave><duration> such as A4q")]
    Unparsable(String),

    #[error("{0} is an unknown note, valid values are: A A# Bb B C C# Db D D# Eb E F F# Gb G G# Ab")]
    UnknownPitch(String),

    #[error("{0} is an unknown note type, valid values are: w h q e s")]
    UnknownDuration(String),

    #[error("both beats per note ({beats}) and beats per minute ({bpm}) must be positive")]
    NonPositive { beats: f64, bpm: f64 },
}
