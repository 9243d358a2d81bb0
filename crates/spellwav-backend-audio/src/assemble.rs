//! Joining per-character clips into one sample buffer.

use std::collections::HashMap;
use std::sync::Arc;

use spellwav_spec::{CapitalPlacement, OutputSpec};

use crate::cache::ClipId;
use crate::error::{AudioError, AudioResult};
use crate::silence;
use crate::wav::{Clip, PcmFormat};

/// Returns true if `c` counts as a capital letter.
///
/// A character is capital when it is its own uppercase form and differs from
/// its lowercase form, so digits and symbols never are.
pub fn is_capital(c: char) -> bool {
    let mut upper = c.to_uppercase();
    let mut lower = c.to_lowercase();
    let is_upper = upper.next() == Some(c) && upper.next().is_none();
    let is_lower = lower.next() == Some(c) && lower.next().is_none();
    is_upper && !is_lower
}

/// The spoken content of one render, before effects and silence.
///
/// Samples are held as `f64` so the effects can mix without clipping; they
/// are narrowed back to the bit depth by [`Assembly::into_clip`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Format shared by every clip that went in.
    pub format: PcmFormat,
    /// Concatenated samples in input order.
    pub samples: Vec<f64>,
}

impl Assembly {
    /// Appends one second of silence.
    ///
    /// The buffer built by [`assemble`] already has room for it.
    pub fn append_silence(&mut self) {
        let block = silence::silence(&self.format);
        self.samples.extend(block.into_iter().map(f64::from));
    }

    /// Narrows the samples to the output bit depth.
    pub fn into_clip(self) -> Clip {
        let depth = self.format.depth;
        let samples = self.samples.into_iter().map(|s| depth.narrow(s)).collect();
        Clip::new(self.format, samples)
    }
}

/// Builds the ordered sample buffer for `spec.text`.
///
/// `resolve` is called once per distinct character, plus once for the capital
/// marker if any character is capital. Every resolved clip must share one
/// format; nothing is assembled until that holds.
///
/// # Errors
/// - [`AudioError::EmptyText`] if there is nothing to render
/// - [`AudioError::FormatMismatch`] if two clips disagree on format
/// - whatever `resolve` returns
pub fn assemble<F>(spec: &OutputSpec, mut resolve: F) -> AudioResult<Assembly>
where
    F: FnMut(ClipId) -> AudioResult<Arc<Clip>>,
{
    let chars: Vec<char> = spec.text.chars().collect();
    if chars.is_empty() {
        return Err(AudioError::EmptyText);
    }

    let mut clips: HashMap<char, Arc<Clip>> = HashMap::new();
    let mut capital: Option<Arc<Clip>> = None;
    let mut format: Option<PcmFormat> = None;

    for &c in &chars {
        if clips.contains_key(&c) {
            continue;
        }
        if capital.is_none() && is_capital(c) {
            capital = Some(resolve(ClipId::Capital)?);
        }

        let clip = resolve(ClipId::Char(c))?;
        check_format(&mut format, ClipId::Char(c), &clip)?;
        clips.insert(c, clip);
    }

    let Some(format) = format else {
        return Err(AudioError::EmptyText);
    };
    if let Some(capital) = &capital {
        check_format(&mut Some(format), ClipId::Capital, capital)?;
    }

    let placement = spec.options.capital;
    let marker: &[i16] = match &capital {
        Some(clip) => &clip.samples,
        None => &[],
    };

    let spoken: usize = chars
        .iter()
        .map(|c| {
            let own = clips[c].len();
            if is_capital(*c) {
                own + marker.len()
            } else {
                own
            }
        })
        .sum();

    let mut samples = Vec::with_capacity(spoken + silence::silence_len(&format));
    for c in &chars {
        let capital_here = is_capital(*c);
        if capital_here && placement == CapitalPlacement::Before {
            extend(&mut samples, marker);
        }
        extend(&mut samples, &clips[c].samples);
        if capital_here && placement == CapitalPlacement::After {
            extend(&mut samples, marker);
        }
    }

    Ok(Assembly { format, samples })
}

fn check_format(established: &mut Option<PcmFormat>, id: ClipId, clip: &Clip) -> AudioResult<()> {
    match *established {
        None => {
            *established = Some(clip.format);
            Ok(())
        }
        Some(expected) if expected == clip.format => Ok(()),
        Some(expected) => Err(AudioError::FormatMismatch {
            name: id.to_string(),
            expected,
            found: clip.format,
        }),
    }
}

fn extend(buffer: &mut Vec<f64>, samples: &[i16]) {
    buffer.extend(samples.iter().map(|&s| f64::from(s)));
}
