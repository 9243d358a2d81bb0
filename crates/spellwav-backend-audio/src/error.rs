//! Error types for the audio backend.

use std::path::PathBuf;

use spellwav_spec::BackendError;
use thiserror::Error;

use crate::wav::{PcmFormat, WavError};

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering text to audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A character's clip file does not exist.
    #[error("clip '{name}' not found at {}", .path.display())]
    SourceNotFound {
        /// Clip name (file stem).
        name: String,
        /// Where the clip was looked for.
        path: PathBuf,
    },

    /// Reading a clip failed for a reason other than absence.
    #[error("failed to read clip '{name}' from {}: {source}", .path.display())]
    Io {
        /// Clip name (file stem).
        name: String,
        /// Where the clip was read from.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A clip file is not a supported WAV container.
    #[error("clip '{name}' is an unsupported format or invalid wav file: {source}")]
    Decode {
        /// Clip name (file stem).
        name: String,
        /// What the decoder rejected.
        #[source]
        source: WavError,
    },

    /// Two clips used in one output disagree on format.
    #[error("clip '{name}' has format {found}, expected {expected} like the clips before it")]
    FormatMismatch {
        /// Clip whose format differs.
        name: String,
        /// Format established by the first resolved clip.
        expected: PcmFormat,
        /// Format of the offending clip.
        found: PcmFormat,
    },

    /// Nothing to render.
    #[error("text to render is empty")]
    EmptyText,

    /// The assembled output could not be written as a WAV container.
    #[error("failed to encode output: {0}")]
    Encode(#[source] WavError),

    /// Writing the rendered container to its destination failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl AudioError {
    /// Creates a decode error for the named clip.
    pub fn decode(name: impl Into<String>, source: WavError) -> Self {
        Self::Decode {
            name: name.into(),
            source,
        }
    }

    /// Creates a read error for the named clip, mapping `NotFound` to
    /// [`AudioError::SourceNotFound`].
    pub fn read(name: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound {
                name: name.into(),
                path: path.into(),
            }
        } else {
            Self::Io {
                name: name.into(),
                path: path.into(),
                source,
            }
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::SourceNotFound { .. } => "AUDIO_001",
            AudioError::Io { .. } => "AUDIO_002",
            AudioError::Decode { source, .. } => source.code(),
            AudioError::FormatMismatch { .. } => "AUDIO_003",
            AudioError::EmptyText => "AUDIO_004",
            AudioError::Encode(source) => source.code(),
            AudioError::Write(_) => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            AudioError::Decode { .. } | AudioError::Encode(_) => "wav",
            _ => "audio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::BitDepth;

    #[test]
    fn test_read_maps_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AudioError::read("q", "/clips/q.wav", io_err);
        assert!(matches!(err, AudioError::SourceNotFound { .. }));
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.to_string(), "clip 'q' not found at /clips/q.wav");
    }

    #[test]
    fn test_read_keeps_other_io_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = AudioError::read("q", "/clips/q.wav", io_err);
        assert!(matches!(err, AudioError::Io { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_decode_error_delegates_code() {
        let err = AudioError::decode("35", WavError::UnsupportedBitDepth { bits: 24 });
        assert_eq!(err.code(), "WAV_004");
        assert_eq!(err.category(), "wav");
        assert!(err.to_string().contains("'35'"));
        assert!(err.to_string().contains("24 bits"));
    }

    #[test]
    fn test_format_mismatch_display() {
        let err = AudioError::FormatMismatch {
            name: "b".to_string(),
            expected: PcmFormat::mono(8000, BitDepth::U8),
            found: PcmFormat::mono(11025, BitDepth::U8),
        };
        assert_eq!(err.code(), "AUDIO_003");
        assert!(err.to_string().contains("11025 Hz"));
        assert!(err.to_string().contains("8000 Hz"));
    }
}
