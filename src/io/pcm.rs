//! Linear PCM sample encoding.

/*
Quantization
============

The engine works in floating point, in the range -1.0 to +1.0. A PCM file
stores integers, so every value is scaled and truncated:

    amplitude = volume * 2^(bits - 1)
    sample    = trunc(value * amplitude)

16, 24 and 32 bit samples are signed two's complement. 8 bit samples are the
odd one out: they are unsigned with silence at 128 (offset binary), so 128 is
added before the value is wrapped to 8 bits.

    bits   silence   full scale negative   bytes per sample
    8      0x80      0x00                  1
    16     0x0000    0x8000                2
    24     0x000000  0x800000              3
    32     0x0...0   0x80000000            4

Bytes are written least significant first. Every channel gets its own copy of
the same sample, so a frame is `bytes_per_sample * channels` bytes.
*/

use crate::error::SynthError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported bits per sample.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    Eight,
    #[default]
    Sixteen,
    TwentyFour,
    ThirtyTwo,
}

impl BitDepth {
    pub const fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
            BitDepth::ThirtyTwo => 32,
        }
    }

    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Mask keeping the low `bits` of a wrapped sample.
    const fn mask(self) -> u32 {
        match self {
            BitDepth::ThirtyTwo => u32::MAX,
            other => (1u32 << other.bits() as u32) - 1,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = SynthError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            32 => Ok(BitDepth::ThirtyTwo),
            other => Err(SynthError::UnsupportedBitDepth(other)),
        }
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

/// Layout of an interleaved PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub bit_depth: BitDepth,
    pub channels: u16,
}

impl PcmFormat {
    pub fn bytes_per_sample(&self) -> usize {
        self.bit_depth.bytes()
    }

    /// Bytes in one frame (one sample for every channel).
    pub fn block_align(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Bytes per second, or `None` when it does not fit the header's u32.
    pub fn byte_rate(&self) -> Option<u32> {
        u32::try_from(self.block_align())
            .ok()?
            .checked_mul(self.sample_rate)
    }

    /// Reject layouts a WAV header cannot describe.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.sample_rate == 0 {
            return Err(SynthError::ZeroSampleRate);
        }
        if self.channels == 0 {
            return Err(SynthError::ZeroChannels);
        }
        if u16::try_from(self.block_align()).is_err() || self.byte_rate().is_none() {
            return Err(self.too_wide());
        }
        Ok(())
    }

    pub(crate) fn too_wide(&self) -> SynthError {
        SynthError::FormatTooWide {
            sample_rate: self.sample_rate,
            bits: self.bit_depth.bits(),
            channels: self.channels,
        }
    }

    /// Build an encoder for this format at the given volume.
    pub fn encoder(&self, volume: f64) -> SampleEncoder {
        SampleEncoder::new(*self, volume)
    }
}

/// Quantizes floating point values into interleaved little-endian frames.
#[derive(Debug, Clone, Copy)]
pub struct SampleEncoder {
    format: PcmFormat,
    amplitude: f64,
}

impl SampleEncoder {
    pub fn new(format: PcmFormat, volume: f64) -> Self {
        let amplitude = volume * (1u64 << (format.bit_depth.bits() - 1)) as f64;
        Self { format, amplitude }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Quantize one value to the low `bits` of a `u32`.
    pub fn encode(&self, value: f64) -> u32 {
        // `as` truncates toward zero (and saturates instead of overflowing)
        let scaled = (value * self.amplitude) as i64;
        let offset = match self.format.bit_depth {
            BitDepth::Eight => 1 << 7,
            _ => 0,
        };
        ((scaled + offset) as u32) & self.format.bit_depth.mask()
    }

    /// Append one frame: the quantized value once per channel.
    pub fn write_frame(&self, value: f64, out: &mut Vec<u8>) {
        let bytes = self.encode(value).to_le_bytes();
        let width = self.format.bytes_per_sample();
        for _ in 0..self.format.channels {
            out.extend_from_slice(&bytes[..width]);
        }
    }
}
