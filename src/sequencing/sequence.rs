use std::sync::OnceLock;

use regex::Regex;

use super::duration::{calculate_duration, note_to_beats};
use super::notes::{calculate_frequency, note_to_tone};
use crate::error::NoteError;

/// A note ready for the engine: pitch in Hz and length in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub frequency: f64,
    pub duration: f64,
}

/// `<pitch><octave><duration>`, e.g. `A4q`, `F#3h`, `Bb2e`.
///
/// The duration letter is matched loosely so that `Bb2t` reports an unknown
/// duration rather than an unparsable token.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-G][#b]?)([0-9])([A-Za-z])$").expect("token pattern is valid")
    })
}

/// Frequency and duration for one already-split note.
pub fn frequency_duration(pitch: &str, octave: i32, code: &str, bpm: f64) -> Result<Note, NoteError> {
    let beats = note_to_beats(code)?;
    let duration = calculate_duration(beats, bpm)?;
    let tone = note_to_tone(pitch)?;
    Ok(Note {
        frequency: calculate_frequency(tone as f64, octave),
        duration,
    })
}

/// Parse a single token such as `"C#4e"`.
pub fn parse_note(token: &str, bpm: f64) -> Result<Note, NoteError> {
    let caps = token_pattern()
        .captures(token)
        .ok_or_else(|| NoteError::Unparsable(token.to_string()))?;

    let pitch = &caps[1];
    // a single ASCII digit, always parses
    let octave = caps[2].parse::<i32>().unwrap_or_default();
    let code = &caps[3];

    frequency_duration(pitch, octave, code, bpm)
}

/// Parse a whitespace separated sequence at `bpm`.
///
/// Returns one entry per token, in order. Bad tokens carry their error and
/// do not stop the rest of the sequence from parsing.
pub fn parse_sequence(input: &str, bpm: f64) -> Vec<Result<Note, NoteError>> {
    input
        .split_whitespace()
        .map(|token| parse_note(token, bpm))
        .collect()
}
