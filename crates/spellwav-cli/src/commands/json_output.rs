//! JSON output types for machine-readable CLI output.
//!
//! Every command accepting `--json` prints exactly one of these documents to
//! stdout.

use serde::{Deserialize, Serialize};
use spellwav_backend_audio::{PcmFormat, RenderResult};
use spellwav_spec::{BackendError, ValidationError, ValidationWarning};

/// Error codes for CLI operations.
///
/// Validation and backend codes (`E001`, `AUDIO_001`, ...) are passed through
/// unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Options file could not be loaded
    pub const CONFIG: &str = "CLI_003";
    /// `--json` needs the audio to go to a file
    pub const OUTPUT_REQUIRED: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "WAV_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Creates an error carrying a backend error's code.
    pub fn from_backend(err: &impl BackendError) -> Self {
        Self::new(err.code(), err.message())
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&ValidationError> for JsonError {
    fn from(err: &ValidationError) -> Self {
        Self {
            code: err.code.code().to_string(),
            message: err.message.clone(),
            path: err.path.clone(),
            file: None,
        }
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// Path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationWarning> for JsonWarning {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Format fields shared by `say` and `inspect` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatInfo {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
    /// 8 or 16
    pub bits_per_sample: u16,
}

impl From<PcmFormat> for FormatInfo {
    fn from(format: PcmFormat) -> Self {
        Self {
            sample_rate: format.sample_rate,
            channels: format.channels,
            bits_per_sample: format.bits_per_sample(),
        }
    }
}

/// Details of a rendered file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SayResult {
    /// Where the WAV was written
    pub output: String,
    /// Output format
    pub format: FormatInfo,
    /// Interleaved sample count, trailing silence included
    pub num_samples: usize,
    /// Playing time in seconds
    pub duration_seconds: f64,
    /// Size of the container in bytes
    pub size_bytes: usize,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
    /// Media type to deliver the file with
    pub content_type: String,
}

impl SayResult {
    /// Summarizes a render written to `output`.
    pub fn new(output: impl Into<String>, result: &RenderResult) -> Self {
        Self {
            output: output.into(),
            format: result.format.into(),
            num_samples: result.num_samples,
            duration_seconds: result.duration_seconds,
            size_bytes: result.wav_data.len(),
            pcm_hash: result.pcm_hash.clone(),
            content_type: result.content_type.clone(),
        }
    }
}

/// JSON output for the `say` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SayOutput {
    /// Whether the render succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Render details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SayResult>,
}

impl SayOutput {
    /// Creates a successful say output.
    pub fn success(result: SayResult, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed say output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// Details of an inspected file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Inspected file
    pub input: String,
    /// Decoded format
    pub format: FormatInfo,
    /// Interleaved sample count
    pub num_samples: usize,
    /// Playing time in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Whether the file decoded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// File details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// One clip file needed to speak a text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipFileEntry {
    /// The character, or `CAPITAL` for the capital marker
    pub clip: String,
    /// Expected file name inside the clip directory
    pub file_name: String,
}

/// JSON output for the `filename` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilenameOutput {
    /// Whether lookup was case-insensitive
    pub fold_cases: bool,
    /// Clip files in first-use order
    pub files: Vec<ClipFileEntry>,
}
