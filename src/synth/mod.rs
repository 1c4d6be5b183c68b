// Purpose: Karplus-Strong note rendering
// This layer drives a delay line per note and accumulates PCM frames

pub mod config;
pub mod engine;
pub mod schedule;

pub use crate::io::pcm::BitDepth;
pub use config::EngineConfig;
pub use engine::{KarplusStrong, SlideSpec};
