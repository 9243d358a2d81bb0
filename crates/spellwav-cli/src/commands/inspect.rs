//! Inspect command implementation
//!
//! Decodes a WAV file the way clips are decoded and reports its format, length
//! and PCM hash. Useful for checking a clip directory before rendering.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use spellwav_backend_audio::wav::{decode, pack_samples, pcm_hash, Clip};
use spellwav_backend_audio::WavError;
use spellwav_spec::GenerationError;

use super::json_output::{error_codes, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn inspect(data: &[u8]) -> Result<(Clip, String), WavError> {
    let clip = decode(data)?;
    let hash = pcm_hash(&pack_samples(&clip.samples, clip.format.depth));
    Ok((clip, hash))
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    let data = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let (clip, hash) = inspect(&data).map_err(GenerationError::from_backend)?;

    println!("{} {}", "Inspecting".cyan().bold(), input);
    println!("  {} {}", "Format:".dimmed(), clip.format);
    println!(
        "  {} {} ({:.3}s)",
        "Samples:".dimmed(),
        clip.len(),
        clip.duration_seconds()
    );
    println!("  {} {}", "PCM hash:".dimmed(), hash);

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let output = match fs::read(input) {
        Err(e) => InspectOutput::failure(vec![JsonError::new(
            error_codes::FILE_READ,
            format!("Failed to read file: {}", e),
        )
        .with_file(input)]),
        Ok(data) => match inspect(&data) {
            Err(e) => InspectOutput::failure(vec![JsonError::from_backend(&e).with_file(input)]),
            Ok((clip, hash)) => InspectOutput::success(InspectResult {
                input: input.to_string(),
                format: clip.format.into(),
                num_samples: clip.len(),
                duration_seconds: clip.duration_seconds(),
                pcm_hash: hash,
            }),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellwav_backend_audio::wav::encode;
    use spellwav_backend_audio::{BitDepth, PcmFormat};

    #[test]
    fn test_inspect_hash_matches_encoded_pcm() {
        let clip = Clip::new(PcmFormat::mono(8000, BitDepth::S16), vec![1, -1, 300]);
        let data = encode(&clip).unwrap();

        let (decoded, hash) = inspect(&data).unwrap();

        assert_eq!(decoded, clip);
        assert_eq!(hash, pcm_hash(&data[44..]));
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        let err = inspect(b"definitely not audio").unwrap_err();
        assert_eq!(err, WavError::InvalidContainer);
    }

    #[test]
    fn test_run_exit_codes() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("a.wav");
        let clip = Clip::new(PcmFormat::mono(8000, BitDepth::U8), vec![128; 10]);
        fs::write(&good, encode(&clip).unwrap()).unwrap();
        let bad = tmp.path().join("b.wav");
        fs::write(&bad, b"RIFF").unwrap();

        assert_eq!(run(good.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(bad.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
        assert!(run(bad.to_str().unwrap(), false).is_err());
        assert!(run("/nonexistent/c.wav", false).is_err());
    }
}
