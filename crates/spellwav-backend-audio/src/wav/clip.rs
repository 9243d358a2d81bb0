//! Decoded PCM clips.

use super::format::PcmFormat;

/// A decoded clip: format metadata plus flat, channel-interleaved samples.
///
/// 8-bit clips hold unsigned byte values (0..=255); 16-bit clips hold the
/// signed halfword values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    /// Sample format.
    pub format: PcmFormat,
    /// Interleaved sample values.
    pub samples: Vec<i16>,
}

impl Clip {
    /// Creates a clip.
    pub fn new(format: PcmFormat, samples: Vec<i16>) -> Self {
        Self { format, samples }
    }

    /// Number of interleaved samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the clip holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the sample data once encoded.
    pub fn data_size(&self) -> usize {
        self.samples.len() * self.format.depth.bytes()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        let per_second = self.format.samples_per_second();
        if per_second == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / per_second as f64
    }
}
