/*
Pitch Names
===========

Pitches are written as a letter with an optional sharp (#) or flat (b), and
mapped to a tone offset in semitones counted up from A:

    A  A#  B  C  C#  D  D#  E  F  F#  G  G#
    0  1   2  3  4   5  6   7  8  9   10 11

Flats are aliases for the sharp a semitone below: Bb = A#, Db = C#, Eb = D#,
Gb = F#, Ab = G#. Spellings without a key such as E# or Cb are rejected.

Octaves count from A, not from C: "A4" is 440 Hz and "C4" is the C three
semitones above it (523.25 Hz). The frequency formula on the well-tempered
scale is

    f = 440 * 2^(((octave - 4) * 12 + tone) / 12)

Example:
  A3 = 440 * 2^(-12/12)    = 220.00 Hz
  E3 = 440 * 2^(-5/12)     = 329.63 Hz
  F#3 = 440 * 2^(-3/12)    = 369.99 Hz
*/

use crate::error::NoteError;

/// Reference pitch for tone 0 of octave 4.
pub const A4_HZ: f64 = 440.0;

/// Every accepted pitch spelling and its semitone offset from A.
pub const NOTATION: &[(&str, u8)] = &[
    ("A", 0),
    ("A#", 1),
    ("B", 2),
    ("C", 3),
    ("C#", 4),
    ("D", 5),
    ("D#", 6),
    ("E", 7),
    ("F", 8),
    ("F#", 9),
    ("G", 10),
    ("G#", 11),
    // flat spellings
    ("Bb", 1),
    ("Db", 4),
    ("Eb", 6),
    ("Gb", 9),
    ("Ab", 11),
];

/// Convert a pitch spelling such as `"F#"` to its tone offset.
pub fn note_to_tone(pitch: &str) -> Result<u8, NoteError> {
    NOTATION
        .iter()
        .find(|(name, _)| *name == pitch)
        .map(|&(_, tone)| tone)
        .ok_or_else(|| NoteError::UnknownPitch(pitch.to_string()))
}

/// Frequency in Hz of `tone` semitones above A in `octave`.
///
/// `tone` is fractional so callers can ask for detuned pitches.
pub fn calculate_frequency(tone: f64, octave: i32) -> f64 {
    A4_HZ * 2.0_f64.powf(((octave - 4) as f64 * 12.0 + tone) / 12.0)
}
