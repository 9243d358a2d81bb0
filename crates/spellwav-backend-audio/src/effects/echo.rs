//! Single-tap feedback echo.

use crate::wav::PcmFormat;

/// Gain of the delayed signal.
pub const ECHO_FEEDBACK: f64 = 0.2;

/// Echo delay in samples: 0.4 seconds across all channels, rounded down.
pub fn echo_delay(format: &PcmFormat) -> usize {
    // floor(n * 0.4) without float rounding
    format.samples_per_second() * 2 / 5
}

/// Adds a delayed copy of the buffer onto itself.
///
/// The sweep runs front to back in place, so each sample picks up the
/// already-echoed value `delay` samples earlier and repeats decay
/// geometrically.
pub fn echo(samples: &mut [f64], format: &PcmFormat) {
    let delay = echo_delay(format);
    for i in delay..samples.len() {
        samples[i] += ECHO_FEEDBACK * samples[i - delay];
    }
}
