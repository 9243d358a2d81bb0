//! RIFF/WAVE codec for 8-bit and 16-bit linear PCM.
//!
//! [`decode`] turns a container into a [`Clip`]; [`encode`] writes a clip
//! back out as a canonical 44-byte-header container. Decoding an encoded clip
//! always yields the same clip.

mod clip;
mod error;
mod format;
mod pcm;
mod reader;
mod writer;


// Re-export public API
pub use clip::Clip;
pub use error::WavError;
pub use format::{BitDepth, PcmFormat};
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash};
pub use reader::decode;
pub use writer::{encode, pack_samples, write_wav, WAV_HEADER_SIZE};
