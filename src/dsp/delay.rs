use rand::Rng;

use crate::error::SynthError;

/*
Karplus-Strong Delay Line
=========================

A plucked string is modelled as one period of its vibration, stored as a ring
of samples. Reading the ring over and over produces a tone whose pitch is
sample_rate / len. Each time a sample is read it is replaced by the average of
itself and its neighbour, scaled by a decay factor. That averaging is a tiny
low-pass filter, so the high harmonics of the initial noise burst die away
first and the tone mellows out as it fades, just like a real string.

Vocabulary
----------

  cursor      The "current" sample. Advances one step per output frame and
              wraps back to the start after the last element.

  next        The sample immediately after the cursor in ring order.

  decay       Multiplier applied on every update (default 0.996). Close to 1.0
              rings for a long time, lower values die out quickly.

  period      The ring length. Changing it mid-note changes the pitch without
              restarting the waveform, which is how slides and vibrato work.


Update
------

    cursor   next
      │       │
      ▼       ▼
    [ a ] → [ b ] → [ c ] → ... → back to [ a ]

    a' = decay * (a + b) / 2


Resizing
--------

insert() places the midpoint of cursor and next between them:

    [ a ] → [ (a+b)/2 ] → [ b ] → ...      len + 1, pitch goes down

delete() drops the element after the cursor:

    [ a ] → [ c ] → ...                     len - 1, pitch goes up

Neither operation touches the cursor's value or which sample it points at,
so the waveform carries on seamlessly.


Implementation Notes
--------------------

The ring is a Vec with a cursor index rather than a linked list. Insert and
delete are O(len) element shifts, which is cheap next to the rest of the work
for audio-rate periods (a 20 Hz string at 48 kHz is only 2400 samples).
*/

pub struct DelayLine {
    samples: Vec<f64>,
    cursor: usize,
    decay: f64,
}

impl DelayLine {
    /// Create a delay line of exactly `len` samples of uniform noise in [-1, 1].
    pub fn new<R: Rng>(len: usize, decay: f64, rng: &mut R) -> Result<Self, SynthError> {
        if len == 0 {
            return Err(SynthError::EmptyDelayLine);
        }

        let samples = (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect();

        Ok(Self {
            samples,
            cursor: 0,
            decay,
        })
    }

    /// Create a delay line from known values, cursor on the first one.
    pub fn with_values(values: Vec<f64>, decay: f64) -> Result<Self, SynthError> {
        if values.is_empty() {
            return Err(SynthError::EmptyDelayLine);
        }

        Ok(Self {
            samples: values,
            cursor: 0,
            decay,
        })
    }

    /// Current period in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a delay line never holds fewer than one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Storage index of the cursor.
    #[cfg(test)]
    fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    fn next_index(&self) -> usize {
        (self.cursor + 1) % self.samples.len()
    }

    /// Value under the cursor.
    #[inline]
    pub fn value(&self) -> f64 {
        self.samples[self.cursor]
    }

    /// Value of the element after the cursor.
    #[inline]
    pub fn next_value(&self) -> f64 {
        self.samples[self.next_index()]
    }

    /// Move the cursor one step around the ring.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor = self.next_index();
    }

    /// Average the cursor with its neighbour and apply decay, in place.
    #[inline]
    pub fn update(&mut self) {
        let next = self.next_value();
        let current = &mut self.samples[self.cursor];
        *current = self.decay * (*current + next) / 2.0;
    }

    /// Lengthen the period by one, interpolating between cursor and next.
    pub fn insert(&mut self) {
        let midpoint = (self.value() + self.next_value()) / 2.0;
        // cursor + 1 == len appends, which is still "between last and first"
        self.samples.insert(self.cursor + 1, midpoint);
    }

    /// Shorten the period by one by dropping the element after the cursor.
    ///
    /// Returns `false` without changing anything when only the cursor is left.
    pub fn delete(&mut self) -> bool {
        if self.samples.len() <= 1 {
            return false;
        }

        let next = self.next_index();
        self.samples.remove(next);
        if next < self.cursor {
            // removed the wrap-around element, everything shifted down by one
            self.cursor -= 1;
        }
        true
    }

    /// Values in ring order, starting at the cursor.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let (before, from_cursor) = self.samples.split_at(self.cursor);
        from_cursor.iter().chain(before.iter()).copied()
    }
}
