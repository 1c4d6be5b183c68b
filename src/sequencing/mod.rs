pub mod duration;
pub mod notes;
pub mod sequence;

pub use duration::{calculate_duration, note_to_beats, NoteValue};
pub use notes::{calculate_frequency, note_to_tone};
pub use sequence::{frequency_duration, parse_note, parse_sequence, Note};
