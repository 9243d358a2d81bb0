//! Integration tests rendering from clip directories on disk.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use spellwav_backend_audio::wav::{decode, encode};
use spellwav_backend_audio::{
    render, AudioError, AudioResult, BitDepth, Clip, ClipCache, ClipSource, DirectorySource,
    PcmFormat, SpellAudio,
};
use spellwav_spec::{CapitalPlacement, OutputSpec, RenderOptions};
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

/// Writes `<name>.wav` clips of one format into a fresh directory.
fn clip_dir(format: PcmFormat, clips: &[(&str, &[i16])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, samples) in clips {
        write_clip(dir.path(), name, format, samples);
    }
    dir
}

fn write_clip(dir: &Path, name: &str, format: PcmFormat, samples: &[i16]) {
    let clip = Clip::new(format, samples.to_vec());
    std::fs::write(dir.join(format!("{}.wav", name)), encode(&clip).unwrap()).unwrap();
}

fn options(dir: &TempDir) -> RenderOptions {
    RenderOptions::default().with_sound_dir(dir.path())
}

fn rendered_samples(spec: &OutputSpec) -> Vec<i16> {
    let result = render(spec, &ClipCache::new()).unwrap();
    decode(&result.wav_data).unwrap().samples
}

/// Counts reads per clip while delegating to the file system.
#[derive(Default)]
struct CountingSource {
    capital_reads: Arc<AtomicUsize>,
}

impl ClipSource for CountingSource {
    fn read(&self, directory: &Path, name: &str) -> AudioResult<Vec<u8>> {
        if name == "CAPITAL" {
            self.capital_reads.fetch_add(1, Ordering::SeqCst);
        }
        DirectorySource.read(directory, name)
    }
}

const U8_8K: PcmFormat = PcmFormat {
    sample_rate: 8000,
    channels: 1,
    depth: BitDepth::U8,
};

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_capital_before_letter() {
    let dir = clip_dir(
        U8_8K,
        &[("a", &[1, 1]), ("b", &[2]), ("CAPITAL", &[9, 9, 9])],
    );
    let spec = OutputSpec::with_options("Ab", options(&dir));

    let samples = rendered_samples(&spec);

    assert_eq!(&samples[..6], &[9, 9, 9, 1, 1, 2]);
    assert_eq!(samples.len(), 6 + 8000);
}

#[test]
fn test_capital_after_letter() {
    let dir = clip_dir(
        U8_8K,
        &[("a", &[1, 1]), ("b", &[2]), ("CAPITAL", &[9, 9, 9])],
    );
    let spec = OutputSpec::with_options(
        "Ab",
        options(&dir).with_capital(CapitalPlacement::After),
    );

    let samples = rendered_samples(&spec);

    assert_eq!(&samples[..6], &[1, 1, 9, 9, 9, 2]);
}

#[test]
fn test_case_sensitive_lookup() {
    let dir = clip_dir(
        U8_8K,
        &[("a", &[1]), ("A", &[50]), ("CAPITAL", &[9])],
    );
    let spec = OutputSpec::with_options("aA", options(&dir).with_fold_cases(false));

    let samples = rendered_samples(&spec);

    assert_eq!(&samples[..3], &[1, 9, 50]);
}

#[test]
fn test_symbols_use_code_point_names() {
    let dir = clip_dir(U8_8K, &[("35", &[3, 5]), ("64", &[6, 4]), ("1", &[1])]);
    let spec = OutputSpec::with_options("#1@", options(&dir));

    let samples = rendered_samples(&spec);

    assert_eq!(&samples[..5], &[3, 5, 1, 6, 4]);
}

// ============================================================================
// Lengths and silence
// ============================================================================

#[test]
fn test_length_without_capitals() {
    let dir = clip_dir(U8_8K, &[("x", &[10; 100]), ("7", &[20; 250])]);
    let spec = OutputSpec::with_options("x7x", options(&dir));

    let result = render(&spec, &ClipCache::new()).unwrap();

    assert_eq!(result.num_samples, 100 + 250 + 100 + 8000);
    assert_eq!(result.wav_data.len(), 44 + result.num_samples);
}

#[test]
fn test_silence_8bit() {
    let dir = clip_dir(U8_8K, &[("a", &[10])]);
    let samples = rendered_samples(&OutputSpec::with_options("a", options(&dir)));

    assert_eq!(samples.len(), 8001);
    assert!(samples[1..].iter().all(|&s| s == 128));
}

#[test]
fn test_silence_16bit_stereo() {
    let format = PcmFormat::stereo(8000, BitDepth::S16);
    let dir = clip_dir(format, &[("a", &[-500, 500])]);

    let result = render(&OutputSpec::with_options("a", options(&dir)), &ClipCache::new()).unwrap();
    let clip = decode(&result.wav_data).unwrap();

    assert_eq!(clip.format, format);
    assert_eq!(clip.samples.len(), 2 + 16000);
    assert!(clip.samples[2..].iter().all(|&s| s == 0));
    assert_eq!(result.duration_seconds, 1.000125);
}

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_capital_clip_read_once() {
    let dir = clip_dir(U8_8K, &[("a", &[1]), ("b", &[2]), ("CAPITAL", &[9])]);
    let source = CountingSource::default();
    let reads = Arc::clone(&source.capital_reads);
    let cache = ClipCache::with_source(source);

    for text in ["AB", "BAAB", "aB"] {
        render(&OutputSpec::with_options(text, options(&dir)), &cache).unwrap();
    }

    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_shared_cache_across_spellers() {
    let dir = clip_dir(U8_8K, &[("a", &[1]), ("b", &[2])]);
    let cache = Arc::new(ClipCache::new());

    let first = SpellAudio::with_cache(options(&dir), Arc::clone(&cache));
    let second = SpellAudio::with_cache(RenderOptions::distorted().with_sound_dir(dir.path()), Arc::clone(&cache));

    first.render("ab").unwrap();
    second.render("ba").unwrap();

    assert_eq!(cache.len(), 2);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_mixed_sample_rates_rejected() {
    let dir = clip_dir(U8_8K, &[("a", &[1])]);
    write_clip(dir.path(), "b", PcmFormat::mono(11025, BitDepth::U8), &[2]);

    let err = render(&OutputSpec::with_options("ab", options(&dir)), &ClipCache::new()).unwrap_err();

    assert!(matches!(err, AudioError::FormatMismatch { .. }));
}

#[test]
fn test_missing_clip_reports_path() {
    let dir = clip_dir(U8_8K, &[("a", &[1])]);

    let err = render(&OutputSpec::with_options("a%", options(&dir)), &ClipCache::new()).unwrap_err();

    match err {
        AudioError::SourceNotFound { name, path } => {
            assert_eq!(name, "37");
            assert_eq!(path, dir.path().join("37.wav"));
        }
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_corrupt_clip_rejected() {
    let dir = clip_dir(U8_8K, &[("a", &[1])]);
    std::fs::write(dir.path().join("b.wav"), b"RIFF\x04\x00\x00\x00WAVE").unwrap();

    let err = render(&OutputSpec::with_options("ab", options(&dir)), &ClipCache::new()).unwrap_err();

    assert!(matches!(err, AudioError::Decode { ref name, .. } if name == "b"));
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_distorted_render_is_deterministic() {
    let dir = clip_dir(
        U8_8K,
        &[("q", &[100, 140, 160]), ("9", &[90, 200]), ("CAPITAL", &[60])],
    );
    let spec = OutputSpec::with_options("Q9q", RenderOptions::distorted().with_sound_dir(dir.path()));

    let first = render(&spec, &ClipCache::new()).unwrap();
    let second = render(&spec, &ClipCache::new()).unwrap();
    let plain = render(
        &OutputSpec::with_options("Q9q", options(&dir)),
        &ClipCache::new(),
    )
    .unwrap();

    assert_eq!(first.pcm_hash, second.pcm_hash);
    assert_eq!(first.wav_data, second.wav_data);
    assert_ne!(first.pcm_hash, plain.pcm_hash);
    assert_eq!(first.num_samples, plain.num_samples);
}
