//! The render pipeline: resolve, assemble, apply effects, encode.

use std::path::Path;

use spellwav_spec::OutputSpec;
use tracing::debug;

use crate::assemble::assemble;
use crate::cache::ClipCache;
use crate::effects;
use crate::error::{AudioError, AudioResult};
use crate::wav::{self, PcmFormat, WAV_HEADER_SIZE};

/// Result of rendering one text.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Format of the output, identical to the source clips.
    pub format: PcmFormat,
    /// Number of interleaved samples, trailing silence included.
    pub num_samples: usize,
    /// Playing time in seconds.
    pub duration_seconds: f64,
    /// Media type to deliver the bytes with.
    pub content_type: String,
}

/// Renders `spec` to a WAV container, loading clips through `cache`.
///
/// Clips are looked up in `spec.options.sound_dir`, or the current directory
/// when none is set. Every error is detected before any output is built.
pub fn render(spec: &OutputSpec, cache: &ClipCache) -> AudioResult<RenderResult> {
    let options = &spec.options;
    let directory = options.sound_dir.as_deref().unwrap_or(Path::new("."));

    let mut assembly = assemble(spec, |id| cache.resolve(directory, id, options.fold_cases))?;
    let spoken = assembly.samples.len();

    if options.distort {
        effects::distort(&mut assembly.samples);
    }
    assembly.append_silence();
    if options.echo {
        effects::echo(&mut assembly.samples, &assembly.format);
    }

    let clip = assembly.into_clip();
    let wav_data = wav::encode(&clip).map_err(AudioError::Encode)?;
    let pcm_hash = wav::pcm_hash(&wav_data[WAV_HEADER_SIZE..]);

    debug!(
        chars = spec.text.chars().count(),
        spoken,
        samples = clip.len(),
        format = %clip.format,
        distort = options.distort,
        echo = options.echo,
        "rendered text"
    );

    Ok(RenderResult {
        pcm_hash,
        format: clip.format,
        num_samples: clip.len(),
        duration_seconds: clip.duration_seconds(),
        content_type: options.content_type.clone(),
        wav_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ClipSource;
    use crate::wav::{decode, encode, BitDepth, Clip};
    use pretty_assertions::assert_eq;
    use spellwav_spec::RenderOptions;
    use std::collections::HashMap;

    /// In-memory clips, all 10 Hz mono 8-bit so silence stays short.
    struct Clips(HashMap<String, Vec<u8>>);

    impl Clips {
        fn new(entries: &[(&str, &[i16])]) -> Self {
            let format = PcmFormat::mono(10, BitDepth::U8);
            let map = entries
                .iter()
                .map(|(name, samples)| {
                    let clip = Clip::new(format, samples.to_vec());
                    (name.to_string(), encode(&clip).unwrap())
                })
                .collect();
            Self(map)
        }
    }

    impl ClipSource for Clips {
        fn read(&self, directory: &Path, name: &str) -> AudioResult<Vec<u8>> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| AudioError::SourceNotFound {
                    name: name.to_string(),
                    path: directory.join(name),
                })
        }
    }

    fn cache() -> ClipCache {
        ClipCache::with_source(Clips::new(&[
            ("a", &[10, 20][..]),
            ("b", &[30, 40, 50][..]),
            ("CAPITAL", &[200][..]),
        ]))
    }

    fn samples(result: &RenderResult) -> Vec<i16> {
        decode(&result.wav_data).unwrap().samples
    }

    #[test]
    fn test_plain_render() {
        let result = render(&OutputSpec::new("ab"), &cache()).unwrap();

        let mut expected = vec![10, 20, 30, 40, 50];
        expected.extend([128; 10]);
        assert_eq!(samples(&result), expected);
        assert_eq!(result.num_samples, 15);
        assert_eq!(result.duration_seconds, 1.5);
        assert_eq!(result.content_type, "audio/x-wav");
        assert_eq!(result.format, PcmFormat::mono(10, BitDepth::U8));
        assert_eq!(
            result.pcm_hash,
            wav::compute_pcm_hash(&result.wav_data).unwrap()
        );
    }

    #[test]
    fn test_distort_applies_to_spoken_only() {
        let spec = OutputSpec::with_options(
            "ab",
            RenderOptions {
                distort: true,
                ..RenderOptions::default()
            },
        );
        let result = render(&spec, &cache()).unwrap();

        let mut expected = vec![10, 30, 38, 46, 54];
        expected.extend([128; 10]);
        assert_eq!(samples(&result), expected);
    }

    #[test]
    fn test_echo_rings_into_silence() {
        let spec = OutputSpec::with_options(
            "a",
            RenderOptions {
                echo: true,
                ..RenderOptions::default()
            },
        );
        let result = render(&spec, &cache()).unwrap();
        let out = samples(&result);

        // delay = 4 samples at 10 Hz mono
        assert_eq!(&out[..4], &[10, 20, 128, 128]);
        assert_eq!(out[4], 130);
        assert_eq!(out[5], 132);
        assert_eq!(out[6], 153);
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_clipping_saturates() {
        let cache = ClipCache::with_source(Clips::new(&[("z", &[250, 250][..])]));
        let spec = OutputSpec::with_options(
            "z",
            RenderOptions {
                distort: true,
                ..RenderOptions::default()
            },
        );
        let result = render(&spec, &cache).unwrap();
        assert_eq!(&samples(&result)[..2], &[250, 255]);
    }

    #[test]
    fn test_missing_clip_fails() {
        let err = render(&OutputSpec::new("abc"), &cache()).unwrap_err();
        assert!(matches!(err, AudioError::SourceNotFound { ref name, .. } if name == "c"));
    }

    #[test]
    fn test_empty_text_fails() {
        let err = render(&OutputSpec::new(""), &cache()).unwrap_err();
        assert!(matches!(err, AudioError::EmptyText));
    }

    #[test]
    fn test_custom_content_type_passed_through() {
        let mut options = RenderOptions::default();
        options.content_type = "audio/wav".to_string();
        let result = render(&OutputSpec::with_options("a", options), &cache()).unwrap();
        assert_eq!(result.content_type, "audio/wav");
    }
}
