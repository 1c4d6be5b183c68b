//! When to resize the delay line during slides and vibrato.

/*
Pitch Changes by Resizing
=========================

The delay line length sets the pitch: len = sample_rate / frequency. Changing
pitch mid-note means inserting samples (longer period, lower pitch) or
deleting them (shorter period, higher pitch) while the string keeps ringing.

Slide
-----

A slide moves from an initial length to a final length over a window of N
frames. The cadence is bounded by

    steps_per_resize  = ceil(N / |delta|)    most frames between resize bursts
    resizes_per_step  = ceil(|delta| / N)    most resizes in one burst

and inside those bounds the |delta| resizes are spread evenly: by the end of
frame i the schedule has issued ceil((i + 1) * |delta| / N) of them.

    N = 10, delta = -3   ->  1 delete on frames 0, 3, 6
    N = 10, delta = +7   ->  1 insert on frames 0, 1, 2, 4, 5, 7, 8
    N = 2,  delta = +5   ->  3 inserts on frame 0, 2 on frame 1

The count reaches exactly |delta| on the last frame, so the line always lands
on the final length without a catch-up burst. A window of zero frames resizes
all at once.

Vibrato
-------

Vibrato swings the pitch around the base note with a sine LFO:

    target_len(i) = round(sample_rate / (f * 2^(depth * sin(2 pi speed i / sample_rate) / 12)))

depth is in semitones (0.5 = a quarter tone either way), speed in Hz. The
engine inserts or deletes one sample at a time until the line matches the
target, so the length oscillates between the bounds and keeps returning to
the base length.
*/

use std::f64::consts::TAU;

/// Deepest vibrato in semitones, an octave either way.
pub const MAX_VIBRATO_DEPTH: f64 = 12.0;

/// Even spread of `total` resizes over a window of frames.
#[derive(Debug, Clone)]
pub struct SlideSchedule {
    total: usize,
    issued: usize,
    frames: usize,
    steps_per_resize: usize,
    resizes_per_step: usize,
}

impl SlideSchedule {
    pub fn new(total: usize, frames: usize) -> Self {
        let (steps_per_resize, resizes_per_step) = if total == 0 || frames == 0 {
            (1, total)
        } else {
            (frames.div_ceil(total), total.div_ceil(frames))
        };

        Self {
            total,
            issued: 0,
            frames,
            steps_per_resize,
            resizes_per_step,
        }
    }

    pub fn steps_per_resize(&self) -> usize {
        self.steps_per_resize
    }

    pub fn resizes_per_step(&self) -> usize {
        self.resizes_per_step
    }

    /// Resizes left to issue.
    pub fn remaining(&self) -> usize {
        self.total - self.issued
    }

    /// How many resizes to perform on `frame`, counting them as issued.
    ///
    /// Frames are expected in order, starting at 0.
    pub fn resizes_at(&mut self, frame: usize) -> usize {
        let due = if frame + 1 >= self.frames {
            self.total
        } else {
            // u128: frames and total can both approach u32::MAX
            ((frame as u128 + 1) * self.total as u128).div_ceil(self.frames as u128) as usize
        };
        let count = due.saturating_sub(self.issued);
        self.issued += count;
        count
    }

    /// Issue everything left over, e.g. after a zero length window.
    pub fn drain(&mut self) -> usize {
        let remaining = self.remaining();
        self.issued = self.total;
        remaining
    }
}

/// Sine modulated delay line length around a base frequency.
#[derive(Debug, Clone, Copy)]
pub struct VibratoSchedule {
    sample_rate: f64,
    frequency: f64,
    depth: f64,
    speed: f64,
}

impl VibratoSchedule {
    pub fn new(sample_rate: u32, frequency: f64, depth: f64, speed: f64) -> Self {
        Self {
            sample_rate: sample_rate as f64,
            frequency,
            depth,
            speed,
        }
    }

    fn length_for(&self, semitones: f64) -> usize {
        let frequency = self.frequency * 2.0_f64.powf(semitones / 12.0);
        ((self.sample_rate / frequency).round() as usize).max(1)
    }

    /// Target length on `frame`.
    pub fn target_len(&self, frame: usize) -> usize {
        let phase = TAU * self.speed * frame as f64 / self.sample_rate;
        self.length_for(self.depth * phase.sin())
    }

    /// Shortest and longest lengths the vibrato can ask for.
    pub fn bounds(&self) -> (usize, usize) {
        (self.length_for(self.depth), self.length_for(-self.depth))
    }
}
