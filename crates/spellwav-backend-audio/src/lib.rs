//! spellwav audio backend
//!
//! Turns a string into a spoken WAV file by concatenating one prerecorded clip
//! per character.
//!
//! # Overview
//!
//! Every character of the input is looked up as a clip in a directory of WAV
//! files (`a.wav`, `7.wav`, `35.wav` for `#`, ...). Uppercase letters are
//! announced by an extra `CAPITAL.wav` clip, spoken before or after the
//! letter. All clips in one output must share sample rate, channel count and
//! bit depth; the output uses that same format and ends with one second of
//! silence.
//!
//! Two optional effects make the output harder for machines to transcribe:
//! a mirror-mix distortion over the spoken part and a feedback echo that rings
//! into the trailing silence.
//!
//! # Example
//!
//! ```no_run
//! use spellwav_backend_audio::{render, ClipCache};
//! use spellwav_spec::{OutputSpec, RenderOptions};
//!
//! let cache = ClipCache::new();
//! let spec = OutputSpec::with_options("Xy7", RenderOptions::distorted().with_sound_dir("sounds/en"));
//! let result = render(&spec, &cache)?;
//!
//! std::fs::write("captcha.wav", &result.wav_data)?;
//! println!("PCM hash: {}", result.pcm_hash);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Main entry point
//! - [`SpellAudio`] - Options plus a cache, for repeated renders
//! - [`cache`] - Clip naming and the shared clip cache
//! - [`assemble`] - Clip concatenation and capital markers
//! - [`effects`] - Distortion and echo
//! - [`wav`] - RIFF/WAVE codec

pub mod assemble;
pub mod cache;
pub mod effects;
pub mod error;
pub mod render;
pub mod silence;
pub mod speller;
pub mod wav;

// Re-export main types at crate root
pub use cache::{clip_file_name, ClipCache, ClipId, ClipSource, DirectorySource};
pub use error::{AudioError, AudioResult};
pub use render::{render, RenderResult};
pub use speller::SpellAudio;
pub use wav::{BitDepth, Clip, PcmFormat, WavError};
