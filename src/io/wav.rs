//! RIFF/WAVE container output.
//!
//! Writes the canonical 44-byte header (RIFF + `fmt ` + `data` chunks) in
//! front of an already interleaved PCM payload. RIFF chunks must have an even
//! size, so an odd payload gets one zero pad byte, and the `data` size counts it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SynthError;
use crate::io::pcm::PcmFormat;

pub const HEADER_LEN: usize = 44;

/// Largest payload whose padded length still fits the RIFF size field.
pub const MAX_PAYLOAD_LEN: usize = (u32::MAX - 36 - 1) as usize;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 0x0001;

/// Header fields for a linear PCM WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// 4 + (8 + fmt chunk) + (8 + data chunk) = 36 + data_len
    pub riff_len: u32,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Payload length including the pad byte, if any.
    pub data_len: u32,
}

impl WavHeader {
    /// Header for `payload_len` bytes of PCM in `format`.
    pub fn new(format: PcmFormat, payload_len: usize) -> Result<Self, SynthError> {
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(SynthError::PayloadTooLarge(payload_len));
        }
        let data_len = (payload_len + payload_len % 2) as u32;

        let byte_rate = format.byte_rate().ok_or_else(|| format.too_wide())?;
        let block_align =
            u16::try_from(format.block_align()).map_err(|_| format.too_wide())?;

        Ok(Self {
            riff_len: 36 + data_len,
            channels: format.channels,
            sample_rate: format.sample_rate,
            byte_rate,
            block_align,
            bits_per_sample: format.bit_depth.bits(),
            data_len,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(RIFF_TAG);
        out[4..8].copy_from_slice(&self.riff_len.to_le_bytes());
        out[8..12].copy_from_slice(WAVE_TAG);

        out[12..16].copy_from_slice(FMT_TAG);
        out[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        out[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());

        out[36..40].copy_from_slice(DATA_TAG);
        out[40..44].copy_from_slice(&self.data_len.to_le_bytes());
        out
    }
}

/// Write header, payload and pad byte to `writer`.
pub fn write_wav<W: Write>(mut writer: W, format: PcmFormat, data: &[u8]) -> Result<(), SynthError> {
    let header = WavHeader::new(format, data.len())?;
    writer.write_all(&header.to_bytes())?;
    writer.write_all(data)?;
    if data.len() % 2 != 0 {
        writer.write_all(&[0])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write a WAV file to it.
pub fn write_wav_file(path: impl AsRef<Path>, format: PcmFormat, data: &[u8]) -> Result<(), SynthError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_wav(BufWriter::new(file), format, data)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "wrote wav file");
    Ok(())
}
