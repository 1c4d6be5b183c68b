//! pluck - render a note sequence file to a WAV file
//!
//! Run with: cargo run --bin pluck -- -f song.txt --bpm 100
//!
//! The input is whitespace separated notes such as `A3q E3q F#3h`
//! (`<pitch><octave><duration>`, durations w h q e s). Bad notes are logged
//! and skipped; the output is written next to the input as `<name>.wav`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;

use saavy_pluck::{
    parse_sequence, BitDepth, EngineConfig, KarplusStrong, DEFAULT_DECAY, DEFAULT_SAMPLE_RATE,
    DEFAULT_VOLUME,
};

/// Render a note sequence with Karplus-Strong plucked strings
#[derive(Parser, Debug)]
#[command(name = "pluck")]
#[command(version)]
struct Args {
    /// The input file to parse; writes <name>.wav next to it
    #[arg(short = 'f', long = "file", default_value = "input_seq.txt")]
    input: PathBuf,

    /// Output path (defaults to the input path with a .wav extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tempo in beats per minute
    #[arg(long, default_value_t = 120.0)]
    bpm: f64,

    /// Sample rate in samples per second
    #[arg(long = "sr", default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Bits per sample: 8, 16, 24 or 32
    #[arg(long = "br", default_value_t = 16)]
    bits_per_sample: u16,

    /// Number of audio channels
    #[arg(long = "nc", default_value_t = 1)]
    channels: u16,

    /// Output volume between 0.0 and 1.0
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    volume: f64,

    /// Energy each sample keeps per pass around the string
    #[arg(long, default_value_t = DEFAULT_DECAY)]
    decay: f64,

    /// Seed for the pluck noise, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

/// Replace the input's extension with `.wav`.
fn output_path(input: &Path) -> PathBuf {
    input.with_extension("wav")
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let bit_depth = BitDepth::try_from(args.bits_per_sample)?;
    let config = EngineConfig::new(args.sample_rate, bit_depth, args.channels)
        .with_volume(args.volume)
        .with_decay(args.decay);

    let mut engine = match args.seed {
        Some(seed) => KarplusStrong::with_seed(config, seed),
        None => KarplusStrong::new(config),
    }
    .wrap_err("invalid engine configuration")?;

    let input = fs::read_to_string(&args.input)
        .wrap_err_with(|| format!("failed to read {}", args.input.display()))?;

    let notes = parse_sequence(&input, args.bpm);
    let total = notes.len();
    let rendered = engine.add_notes(notes);

    let output = args.output.unwrap_or_else(|| output_path(&args.input));
    engine
        .write_wav(&output)
        .wrap_err_with(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        rendered,
        skipped = total - rendered,
        seconds = engine.duration_secs(),
        output = %output.display(),
        "done"
    );
    Ok(())
}
