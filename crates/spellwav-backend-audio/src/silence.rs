//! Trailing silence.

use crate::wav::PcmFormat;

/// Number of samples in one second of audio for `format`, across all channels.
pub fn silence_len(format: &PcmFormat) -> usize {
    format.samples_per_second()
}

/// One second of silence in `format`.
///
/// Silence is the midpoint of the sample range: 128 for 8-bit unsigned, 0 for
/// 16-bit signed.
pub fn silence(format: &PcmFormat) -> Vec<i16> {
    vec![format.depth.silence(); silence_len(format)]
}
