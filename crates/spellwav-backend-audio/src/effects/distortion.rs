//! Mirror-mix distortion.

/// Share of the mirrored sample mixed into each position.
pub const DISTORTION_MIX: f64 = 0.2;

/// Mixes each sample with its mirror image around the buffer.
///
/// For every `i` in `1..n`, position `n - i` gains `DISTORTION_MIX` times the
/// original (pre-mix) value at `i`. Position 0 is untouched.
///
/// Positions are processed in mirrored pairs, which reads both originals before
/// writing either and needs no copy of the buffer.
///
/// ```
/// use spellwav_backend_audio::effects::distort;
///
/// let mut samples = [10.0, 20.0, 30.0, 40.0, 50.0];
/// distort(&mut samples);
/// assert_eq!(samples, [10.0, 30.0, 38.0, 46.0, 54.0]);
/// ```
pub fn distort(samples: &mut [f64]) {
    let n = samples.len();
    for j in 1..=n / 2 {
        let k = n - j;
        if j == k {
            samples[j] += DISTORTION_MIX * samples[j];
        } else {
            let (a, b) = (samples[j], samples[k]);
            samples[j] = a + DISTORTION_MIX * b;
            samples[k] = b + DISTORTION_MIX * a;
        }
    }
}
