//! Container errors.

use spellwav_spec::BackendError;
use thiserror::Error;

/// Errors raised while decoding or encoding a RIFF/WAVE container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WavError {
    /// The RIFF or WAVE tag is missing.
    #[error("not a RIFF/WAVE container")]
    InvalidContainer,

    /// Compression code other than 1 (linear PCM).
    #[error("unsupported compression code {code} (only uncompressed PCM is supported)")]
    UnsupportedCompression {
        /// The compression code found in the format chunk.
        code: u16,
    },

    /// The format or data chunk is missing or inconsistent.
    #[error("malformed chunk: {message}")]
    MalformedChunk {
        /// What was wrong.
        message: String,
    },

    /// Bits per sample other than 8 or 16.
    #[error("unsupported bit depth: {bits} bits per sample")]
    UnsupportedBitDepth {
        /// The bits-per-sample value found.
        bits: u16,
    },

    /// The sample data does not fit the 32-bit size fields.
    #[error("sample data too large for a WAV container: {bytes} bytes")]
    TooLarge {
        /// Size of the sample data in bytes.
        bytes: usize,
    },
}

impl WavError {
    /// Creates a malformed chunk error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedChunk {
            message: message.into(),
        }
    }
}

impl BackendError for WavError {
    fn code(&self) -> &'static str {
        match self {
            WavError::InvalidContainer => "WAV_001",
            WavError::UnsupportedCompression { .. } => "WAV_002",
            WavError::MalformedChunk { .. } => "WAV_003",
            WavError::UnsupportedBitDepth { .. } => "WAV_004",
            WavError::TooLarge { .. } => "WAV_005",
        }
    }

    fn category(&self) -> &'static str {
        "wav"
    }
}
