use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::EngineConfig;
use super::schedule::{SlideSchedule, VibratoSchedule, MAX_VIBRATO_DEPTH};
use crate::dsp::delay::DelayLine;
use crate::error::{NoteError, SynthError};
use crate::io::pcm::{PcmFormat, SampleEncoder};
use crate::io::wav::{self, MAX_PAYLOAD_LEN};
use crate::sequencing::Note;

/*
Karplus-Strong Engine
=====================

Every note starts as a burst of white noise in a delay line one period long.
For each output frame the engine

    1. reads the value under the cursor
    2. quantizes it and appends it once per channel
    3. averages it with its neighbour (update)
    4. steps the cursor (advance)

so frame i is always the value *before* the i-th update. The payload grows
append-only; notes are simply concatenated in call order.

Slides and vibrato run the same loop but resize the line between steps 3
and 4 (see `schedule`). A slide keeps the same line from its first segment to
its last, so the string never re-plucks mid-glide.
*/

/// Parameters for [`KarplusStrong::add_slide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSpec {
    /// Starting pitch in Hz.
    pub initial_frequency: f64,
    /// Seconds held at the starting pitch.
    pub initial_duration: f64,
    /// Seconds spent gliding. Zero jumps straight to the final pitch.
    pub slide_duration: f64,
    /// Target pitch in Hz.
    pub final_frequency: f64,
    /// Seconds held at the target pitch.
    pub final_duration: f64,
}

/// Plucked string synthesizer accumulating an interleaved PCM payload.
pub struct KarplusStrong {
    config: EngineConfig,
    encoder: SampleEncoder,
    rng: Pcg32,
    data: Vec<u8>,
}

impl KarplusStrong {
    /// Create an engine whose noise bursts are seeded from the thread RNG.
    pub fn new(config: EngineConfig) -> Result<Self, SynthError> {
        Self::with_rng(config, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Create an engine with reproducible noise bursts.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, SynthError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, rng: Pcg32) -> Result<Self, SynthError> {
        config.validate()?;
        Ok(Self {
            encoder: config.format().encoder(config.volume()),
            config,
            rng,
            data: Vec::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn format(&self) -> PcmFormat {
        self.config.format()
    }

    /// Change the volume for everything rendered from now on.
    pub fn set_volume(&mut self, volume: f64) {
        self.config.set_volume(volume);
        self.encoder = self.config.format().encoder(self.config.volume());
    }

    /// Accumulated little-endian PCM payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> usize {
        self.data.len() / self.format().block_align()
    }

    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.config.sample_rate as f64
    }

    /// Drop everything rendered so far.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write the payload as a WAV file.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<(), SynthError> {
        wav::write_wav_file(path, self.format(), &self.data)
    }

    /// Pluck a note at `frequency` Hz for `duration` seconds.
    pub fn add_note(&mut self, frequency: f64, duration: f64) -> Result<(), SynthError> {
        let len = self.buffer_len(frequency)?;
        let frames = self.frames_for(duration)?;
        self.reserve(&[frames])?;

        let mut line = self.pluck(len)?;
        self.render(&mut line, frames);

        tracing::debug!(frequency, duration, len, frames, "rendered note");
        Ok(())
    }

    /// Pluck a note and glide its pitch to a second note.
    pub fn add_slide(&mut self, slide: SlideSpec) -> Result<(), SynthError> {
        let initial_len = self.buffer_len(slide.initial_frequency)?;
        let final_len = self.buffer_len(slide.final_frequency)?;
        let initial_frames = self.frames_for(slide.initial_duration)?;
        let final_frames = self.frames_for(slide.final_duration)?;
        let slide_frames = self.window_frames(slide.slide_duration)?;

        self.reserve(&[initial_frames, slide_frames, final_frames])?;

        let mut line = self.pluck(initial_len)?;

        self.render(&mut line, initial_frames);
        self.glide(&mut line, final_len, slide_frames);
        self.render(&mut line, final_frames);

        tracing::debug!(
            initial_len,
            final_len,
            slide_frames,
            frames = initial_frames + slide_frames + final_frames,
            "rendered slide"
        );
        Ok(())
    }

    /// Positional form of [`add_slide`](Self::add_slide).
    pub fn add_slide_between(
        &mut self,
        initial_frequency: f64,
        final_frequency: f64,
        initial_duration: f64,
        slide_duration: f64,
        final_duration: f64,
    ) -> Result<(), SynthError> {
        self.add_slide(SlideSpec {
            initial_frequency,
            initial_duration,
            slide_duration,
            final_frequency,
            final_duration,
        })
    }

    /// Pluck a note with vibrato of `depth` semitones at `speed` Hz.
    ///
    /// A depth or speed of zero renders exactly what [`add_note`](Self::add_note) would.
    /// Depth is limited to an octave either way.
    pub fn add_vibrato(
        &mut self,
        frequency: f64,
        duration: f64,
        depth: f64,
        speed: f64,
    ) -> Result<(), SynthError> {
        let len = self.buffer_len(frequency)?;
        let frames = self.frames_for(duration)?;
        non_negative("vibrato depth", depth)?;
        non_negative("vibrato speed", speed)?;
        if depth > MAX_VIBRATO_DEPTH {
            return Err(SynthError::InvalidParameter {
                name: "vibrato depth",
                value: depth,
            });
        }

        let schedule = VibratoSchedule::new(self.config.sample_rate, frequency, depth, speed);
        self.reserve(&[frames])?;
        let mut line = self.pluck(len)?;

        for frame in 0..frames {
            self.encoder.write_frame(line.value(), &mut self.data);
            line.update();

            let target = schedule.target_len(frame);
            while line.len() < target {
                line.insert();
            }
            while line.len() > target && line.delete() {}

            line.advance();
        }

        let (shortest, longest) = schedule.bounds();
        tracing::debug!(frequency, len, shortest, longest, frames, "rendered vibrato");
        Ok(())
    }

    /// Append `duration` seconds of silence.
    pub fn add_rest(&mut self, duration: f64) -> Result<(), SynthError> {
        let frames = self.frames_for(duration)?;
        self.reserve(&[frames])?;
        for _ in 0..frames {
            self.encoder.write_frame(0.0, &mut self.data);
        }
        Ok(())
    }

    /// Render parsed notes in order, skipping any that failed to parse or render.
    ///
    /// Returns how many notes were rendered.
    pub fn add_notes<I>(&mut self, notes: I) -> usize
    where
        I: IntoIterator<Item = Result<Note, NoteError>>,
    {
        let mut rendered = 0;
        for (index, note) in notes.into_iter().enumerate() {
            match note {
                Ok(note) => match self.add_note(note.frequency, note.duration) {
                    Ok(()) => rendered += 1,
                    Err(err) => tracing::warn!(index, %err, "skipping note"),
                },
                Err(err) => tracing::warn!(index, %err, "skipping note"),
            }
        }
        rendered
    }

    /// Delay line length for `frequency`: round(sample_rate / frequency).
    ///
    /// The line must hold between one sample and one second of audio, which
    /// puts the playable range at 1 Hz up to twice the sample rate.
    fn buffer_len(&self, frequency: f64) -> Result<usize, SynthError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(SynthError::InvalidFrequency(frequency));
        }
        let sample_rate = self.config.sample_rate as f64;
        let len = (sample_rate / frequency).round();
        if len < 1.0 || len > sample_rate {
            return Err(SynthError::InvalidBufferLength {
                frequency,
                sample_rate: self.config.sample_rate,
            });
        }
        Ok(len as usize)
    }

    /// Frame count for a note segment: round(sample_rate * duration).
    ///
    /// Durations too long for a WAV payload on their own are rejected here,
    /// before the count can saturate.
    fn frames_for(&self, duration: f64) -> Result<usize, SynthError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SynthError::InvalidDuration(duration));
        }
        let frames = (self.config.sample_rate as f64 * duration).round();
        let max_frames = MAX_PAYLOAD_LEN / self.format().block_align();
        if frames > max_frames as f64 {
            return Err(SynthError::InvalidDuration(duration));
        }
        Ok(frames as usize)
    }

    /// Like `frames_for`, but a zero length glide window is allowed.
    fn window_frames(&self, duration: f64) -> Result<usize, SynthError> {
        if duration == 0.0 {
            return Ok(0);
        }
        self.frames_for(duration)
    }

    fn pluck(&mut self, len: usize) -> Result<DelayLine, SynthError> {
        DelayLine::new(len, self.config.decay, &mut self.rng)
    }

    /// Make room for `segments` more frames, failing if the payload would
    /// outgrow a WAV file.
    fn reserve(&mut self, segments: &[usize]) -> Result<(), SynthError> {
        let block_align = self.format().block_align();
        let total = segments.iter().try_fold(self.data.len(), |total, &frames| {
            frames.checked_mul(block_align)?.checked_add(total)
        });

        match total {
            Some(total) if total <= MAX_PAYLOAD_LEN => {
                self.data.reserve(total - self.data.len());
                Ok(())
            }
            _ => Err(SynthError::PayloadTooLarge(total.unwrap_or(usize::MAX))),
        }
    }

    fn render(&mut self, line: &mut DelayLine, frames: usize) {
        for _ in 0..frames {
            self.encoder.write_frame(line.value(), &mut self.data);
            line.update();
            line.advance();
        }
    }

    /// Render `frames` frames while resizing `line` to `target_len`.
    fn glide(&mut self, line: &mut DelayLine, target_len: usize, frames: usize) {
        let lengthen = target_len > line.len();
        let mut schedule = SlideSchedule::new(target_len.abs_diff(line.len()), frames);

        for frame in 0..frames {
            self.encoder.write_frame(line.value(), &mut self.data);
            line.update();
            let resizes = schedule.resizes_at(frame);
            if resizes > 0 {
                tracing::trace!(frame, resizes, len = line.len(), "resizing delay line");
            }
            resize(line, lengthen, resizes);
            line.advance();
        }

        resize(line, lengthen, schedule.drain());
    }
}

fn resize(line: &mut DelayLine, lengthen: bool, count: usize) {
    for _ in 0..count {
        if lengthen {
            line.insert();
        } else {
            line.delete();
        }
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<(), SynthError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SynthError::InvalidParameter { name, value });
    }
    Ok(())
}
