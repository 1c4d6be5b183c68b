use crate::error::NoteError;

/// Note length as written in a sequence, in 4/4 time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValue {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteValue {
    /// Parse the one-letter code used in sequences (`w h q e s`).
    pub fn from_code(code: &str) -> Result<Self, NoteError> {
        match code {
            "w" => Ok(NoteValue::Whole),
            "h" => Ok(NoteValue::Half),
            "q" => Ok(NoteValue::Quarter),
            "e" => Ok(NoteValue::Eighth),
            "s" => Ok(NoteValue::Sixteenth),
            other => Err(NoteError::UnknownDuration(other.to_string())),
        }
    }

    /// How many beats (quarter notes) this value lasts.
    pub const fn beats(self) -> f64 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
        }
    }
}

/// Beats for a duration code.
pub fn note_to_beats(code: &str) -> Result<f64, NoteError> {
    NoteValue::from_code(code).map(NoteValue::beats)
}

/// Seconds that `beats` last at `bpm` beats per minute.
///
/// Both must be strictly positive.
pub fn calculate_duration(beats: f64, bpm: f64) -> Result<f64, NoteError> {
    // written as negated comparisons so NaN is rejected too
    if !(beats > 0.0) || !(bpm > 0.0) {
        return Err(NoteError::NonPositive { beats, bpm });
    }
    Ok(beats / (bpm / 60.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_beats() {
        assert_eq!(note_to_beats("w"), Ok(4.0));
        assert_eq!(note_to_beats("h"), Ok(2.0));
        assert_eq!(note_to_beats("q"), Ok(1.0));
        assert_eq!(note_to_beats("e"), Ok(0.5));
        assert_eq!(note_to_beats("s"), Ok(0.25));
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            note_to_beats("t"),
            Err(NoteError::UnknownDuration("t".to_string()))
        );
        assert!(note_to_beats("Q").is_err());
    }

    #[test]
    fn quarter_at_120_is_half_a_second() {
        assert_eq!(calculate_duration(1.0, 120.0), Ok(0.5));
        assert_eq!(calculate_duration(4.0, 60.0), Ok(4.0));
    }

    #[test]
    fn non_positive_inputs_fail() {
        assert!(matches!(
            calculate_duration(-1.0, 120.0),
            Err(NoteError::NonPositive { .. })
        ));
        assert!(matches!(
            calculate_duration(1.0, -5.0),
            Err(NoteError::NonPositive { .. })
        ));
        assert!(calculate_duration(0.0, 120.0).is_err());
        assert!(calculate_duration(1.0, 0.0).is_err());
        assert!(calculate_duration(1.0, f64::NAN).is_err());
    }
}
