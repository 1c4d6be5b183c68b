use crate::error::SynthError;
use crate::io::pcm::{BitDepth, PcmFormat};
use crate::{DEFAULT_DECAY, DEFAULT_SAMPLE_RATE, DEFAULT_VOLUME};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output format and tone settings for one [`KarplusStrong`](super::KarplusStrong) engine.
///
/// Built with chainable setters:
///
/// ```
/// use saavy_pluck::{BitDepth, EngineConfig};
///
/// let config = EngineConfig::new(44_100, BitDepth::Sixteen, 2)
///     .with_volume(0.5)
///     .with_decay(0.99);
/// assert_eq!(config.volume(), 0.5);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: u32,
    pub bit_depth: BitDepth,
    pub channels: u16,
    /// Fraction of full scale, kept in [0, 1] by the setters.
    volume: f64,
    /// Energy kept per update, in [0, 1].
    pub decay: f64,
}

impl EngineConfig {
    pub fn new(sample_rate: u32, bit_depth: BitDepth, channels: u16) -> Self {
        Self {
            sample_rate,
            bit_depth,
            channels,
            ..Self::default()
        }
    }

    /// Set the volume, clamped to [0, 1]. NaN is treated as silence.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.set_volume(volume);
        self
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    pub fn volume(&self) -> f64 {
        // a deserialized config may hold anything
        if self.volume.is_nan() {
            0.0
        } else {
            self.volume.clamp(0.0, 1.0)
        }
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn format(&self) -> PcmFormat {
        PcmFormat {
            sample_rate: self.sample_rate,
            bit_depth: self.bit_depth,
            channels: self.channels,
        }
    }

    /// Reject settings that would produce no audio, an unwritable header or a
    /// runaway string.
    pub fn validate(&self) -> Result<(), SynthError> {
        self.format().validate()?;
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(SynthError::InvalidParameter {
                name: "decay",
                value: self.decay,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: BitDepth::Sixteen,
            channels: 1,
            volume: DEFAULT_VOLUME,
            decay: DEFAULT_DECAY,
        }
    }
}
