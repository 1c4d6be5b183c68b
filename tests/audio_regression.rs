use saavy_pluck::{
    io::wav::HEADER_LEN, parse_sequence, BitDepth, EngineConfig, KarplusStrong, NoteError,
    SlideSpec,
};

fn u32_at(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[test]
fn a440_for_one_second_writes_88244_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("A440_1sec.wav");

    let config = EngineConfig::new(44_100, BitDepth::Sixteen, 1);
    let mut ks = KarplusStrong::new(config).unwrap();
    ks.add_note(440.0, 1.0).unwrap();
    ks.write_wav(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN + 88_200);
    assert_eq!(u32_at(&bytes, 4), 36 + 88_200);
    assert_eq!(u32_at(&bytes, 40), 88_200);
    assert_eq!(&bytes[HEADER_LEN..], ks.data());
}

#[test]
fn pluck_decays_toward_silence() {
    let config = EngineConfig::new(8_000, BitDepth::Sixteen, 1).with_volume(1.0);
    let mut ks = KarplusStrong::with_seed(config, 42).unwrap();
    ks.add_note(200.0, 2.0).unwrap();

    let samples: Vec<i16> = ks
        .data()
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    let peak = |window: &[i16]| window.iter().map(|s| s.unsigned_abs()).max().unwrap_or(0);

    let start = peak(&samples[..800]);
    let end = peak(&samples[samples.len() - 800..]);
    assert!(start > 10_000, "pluck should start loud, got {start}");
    assert!(end < start / 4, "pluck should fade: {start} -> {end}");
}

#[test]
fn sequence_renders_valid_notes_only() {
    let config = EngineConfig::new(8_000, BitDepth::Eight, 2);
    let mut ks = KarplusStrong::with_seed(config, 3).unwrap();

    let notes = parse_sequence("A3q Not E3h Bb2t", 120.0);
    let rendered = ks.add_notes(notes);

    assert_eq!(rendered, 2);
    // 0.5 s + 1.0 s at 8 kHz, 1 byte x 2 channels
    assert_eq!(ks.data().len(), (4_000 + 8_000) * 2);
}

#[test]
fn sequence_errors_are_per_token() {
    let notes = parse_sequence("Not E#3w Bb2t", 120.0);
    assert!(matches!(notes[0], Err(NoteError::Unparsable(_))));
    assert!(matches!(notes[1], Err(NoteError::UnknownPitch(_))));
    assert!(matches!(notes[2], Err(NoteError::UnknownDuration(_))));
}

#[test]
fn odd_eight_bit_payload_is_padded_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("odd.wav");

    let config = EngineConfig::new(1_000, BitDepth::Eight, 1);
    let mut ks = KarplusStrong::with_seed(config, 9).unwrap();
    ks.add_note(100.0, 0.001).unwrap(); // one frame, one byte
    assert_eq!(ks.data().len(), 1);
    ks.write_wav(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), HEADER_LEN + 2);
    assert_eq!(u32_at(&bytes, 40), 2);
    assert_eq!(bytes[HEADER_LEN + 1], 0);
}

#[test]
fn slide_and_vibrato_append_after_notes() {
    let config = EngineConfig::new(16_000, BitDepth::TwentyFour, 1);
    let mut ks = KarplusStrong::with_seed(config, 11).unwrap();

    ks.add_note(330.0, 0.25).unwrap();
    ks.add_slide(SlideSpec {
        initial_frequency: 330.0,
        initial_duration: 0.25,
        slide_duration: 0.5,
        final_frequency: 165.0,
        final_duration: 0.25,
    })
    .unwrap();
    ks.add_vibrato(220.0, 0.5, 0.5, 5.0).unwrap();

    assert_eq!(ks.frame_count(), 4_000 + 16_000 + 8_000);
    assert_eq!(ks.data().len(), ks.frame_count() * 3);
}
