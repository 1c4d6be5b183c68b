// Purpose - sample encoding and file output

pub mod pcm;
pub mod wav;

pub use pcm::{BitDepth, PcmFormat, SampleEncoder};
pub use wav::{write_wav, write_wav_file, WavHeader};
