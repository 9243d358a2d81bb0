//! Say command implementation
//!
//! Renders text to a WAV file, or to stdout when no output path is given.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use spellwav_backend_audio::{render, ClipCache, RenderResult};
use spellwav_spec::{CapitalPlacement, GenerationError, OutputSpec, RenderOptions, SpecError};

use super::json_output::{error_codes, JsonError, JsonWarning, SayOutput, SayResult};
use crate::sound_dir::default_sound_dir;

/// Arguments of the say command.
#[derive(Debug, Clone, Default)]
pub struct SayArgs {
    /// Text to spell out
    pub text: String,
    /// Output WAV path; stdout if unset
    pub output: Option<String>,
    /// JSON options file applied before the flags below
    pub config: Option<String>,
    /// Clip directory
    pub sound_dir: Option<String>,
    /// Turn on distortion
    pub distort: bool,
    /// Turn on echo
    pub echo: bool,
    /// Capital-marker placement
    pub capital: Option<CapitalPlacement>,
    /// Look up letters case-sensitively
    pub case_sensitive: bool,
    /// Content type to report
    pub content_type: Option<String>,
}

/// Builds render options from the options file, flags, and defaults, in that
/// order of increasing precedence for flags.
pub fn resolve_options(args: &SayArgs) -> Result<RenderOptions> {
    let mut options = match &args.config {
        Some(path) => RenderOptions::from_file(path)
            .with_context(|| format!("Failed to load options file: {}", path))?,
        None => RenderOptions::default(),
    };

    if let Some(dir) = &args.sound_dir {
        options.sound_dir = Some(PathBuf::from(dir));
    } else if options.sound_dir.is_none() {
        options.sound_dir = default_sound_dir();
    }
    if args.distort {
        options.distort = true;
    }
    if args.echo {
        options.echo = true;
    }
    if let Some(capital) = args.capital {
        options.capital = capital;
    }
    if args.case_sensitive {
        options.fold_cases = false;
    }
    if let Some(content_type) = &args.content_type {
        options.content_type = content_type.clone();
    }

    debug!(?options, "resolved render options");
    Ok(options)
}

/// Run the say command
///
/// # Arguments
/// * `args` - Text, destination and option overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error. Without `json_output`, failures
/// (validation included) are returned as errors instead.
pub fn run(args: &SayArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run say with human-readable (colored) output
///
/// Status lines go to stderr when the audio itself goes to stdout.
fn run_human(args: &SayArgs) -> Result<ExitCode> {
    let options = resolve_options(args)?;
    let spec = OutputSpec::with_options(args.text.as_str(), options);

    let validation = spec.validate();
    for warning in &validation.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        return Err(SpecError::ValidationFailed(validation.errors.len()).into());
    }

    let result = render(&spec, &ClipCache::new()).map_err(GenerationError::from_backend)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &result.wav_data)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!(path = %path, bytes = result.wav_data.len(), "wrote wav");
            print_summary(&mut std::io::stdout(), path, &result)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&result.wav_data)
                .context("Failed to write audio to stdout")?;
            stdout.flush().context("Failed to write audio to stdout")?;
            print_summary(&mut std::io::stderr(), "<stdout>", &result)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(out: &mut impl Write, destination: &str, result: &RenderResult) -> Result<()> {
    writeln!(out, "{} {}", "Rendered".green().bold(), destination)?;
    writeln!(out, "  {} {}", "Format:".dimmed(), result.format)?;
    writeln!(
        out,
        "  {} {} ({:.2}s)",
        "Samples:".dimmed(),
        result.num_samples,
        result.duration_seconds
    )?;
    writeln!(out, "  {} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16])?;
    writeln!(out, "  {} {}", "Content type:".dimmed(), result.content_type)?;
    Ok(())
}

/// Run say with machine-readable JSON output
fn run_json(args: &SayArgs) -> Result<ExitCode> {
    let Some(path) = &args.output else {
        let error = JsonError::new(
            error_codes::OUTPUT_REQUIRED,
            "--json reports on stdout, so the audio needs --output",
        );
        return print_json(&SayOutput::failure(vec![error], Vec::new()));
    };

    let options = match resolve_options(args) {
        Ok(options) => options,
        Err(e) => {
            let mut error = JsonError::new(error_codes::CONFIG, format!("{:#}", e));
            if let Some(config) = &args.config {
                error = error.with_file(config.as_str());
            }
            return print_json(&SayOutput::failure(vec![error], Vec::new()));
        }
    };
    let spec = OutputSpec::with_options(args.text.as_str(), options);

    let validation = spec.validate();
    let warnings: Vec<JsonWarning> = validation.warnings.iter().map(JsonWarning::from).collect();
    if !validation.is_ok() {
        let errors = validation.errors.iter().map(JsonError::from).collect();
        return print_json(&SayOutput::failure(errors, warnings));
    }

    let result = match render(&spec, &ClipCache::new()) {
        Ok(result) => result,
        Err(e) => {
            let error = JsonError::from_backend(&e);
            return print_json(&SayOutput::failure(vec![error], warnings));
        }
    };

    if let Err(e) = fs::write(path, &result.wav_data) {
        let error = JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write output file: {}", e),
        )
        .with_file(path.as_str());
        return print_json(&SayOutput::failure(vec![error], warnings));
    }

    print_json(&SayOutput::success(SayResult::new(path.as_str(), &result), warnings))
}

fn print_json(output: &SayOutput) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellwav_backend_audio::wav::{decode, encode};
    use spellwav_backend_audio::{BitDepth, Clip, PcmFormat};
    use std::path::Path;

    fn write_clip(dir: &Path, name: &str, samples: Vec<i16>) {
        let clip = Clip::new(PcmFormat::mono(8000, BitDepth::U8), samples);
        fs::write(dir.join(format!("{}.wav", name)), encode(&clip).unwrap()).unwrap();
    }

    #[test]
    fn test_flags_override_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("options.json");
        fs::write(
            &config,
            r#"{ "sound_dir": "/from/config", "capital": "after", "echo": true }"#,
        )
        .unwrap();

        let args = SayArgs {
            text: "a".to_string(),
            config: Some(config.to_string_lossy().into_owned()),
            sound_dir: Some("/from/flag".to_string()),
            distort: true,
            case_sensitive: true,
            ..SayArgs::default()
        };
        let options = resolve_options(&args).unwrap();

        assert_eq!(options.sound_dir, Some(PathBuf::from("/from/flag")));
        assert_eq!(options.capital, CapitalPlacement::After);
        assert!(options.echo);
        assert!(options.distort);
        assert!(!options.fold_cases);
    }

    #[test]
    fn test_config_sound_dir_kept_without_flag() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("options.json");
        fs::write(&config, r#"{ "sound_dir": "/from/config" }"#).unwrap();

        let args = SayArgs {
            config: Some(config.to_string_lossy().into_owned()),
            ..SayArgs::default()
        };
        let options = resolve_options(&args).unwrap();

        assert_eq!(options.sound_dir, Some(PathBuf::from("/from/config")));
    }

    #[test]
    fn test_unknown_option_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("options.json");
        fs::write(&config, r#"{ "volume": 11 }"#).unwrap();

        let args = SayArgs {
            config: Some(config.to_string_lossy().into_owned()),
            ..SayArgs::default()
        };
        let err = resolve_options(&args).unwrap_err();

        assert!(err.to_string().contains("options.json"));
    }

    #[test]
    fn test_run_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        write_clip(tmp.path(), "o", vec![1, 2]);
        write_clip(tmp.path(), "k", vec![3]);
        let out = tmp.path().join("ok.wav");

        let args = SayArgs {
            text: "ok".to_string(),
            output: Some(out.to_string_lossy().into_owned()),
            sound_dir: Some(tmp.path().to_string_lossy().into_owned()),
            ..SayArgs::default()
        };
        let code = run(&args, true).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let clip = decode(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(&clip.samples[..3], &[1, 2, 3]);
        assert_eq!(clip.samples.len(), 3 + 8000);
    }

    #[test]
    fn test_run_json_requires_output() {
        let args = SayArgs {
            text: "ok".to_string(),
            ..SayArgs::default()
        };
        assert_eq!(run(&args, true).unwrap(), ExitCode::from(1));
    }

    #[test]
    fn test_run_human_reports_validation_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("empty.wav");
        let args = SayArgs {
            text: String::new(),
            output: Some(out.to_string_lossy().into_owned()),
            sound_dir: Some(tmp.path().to_string_lossy().into_owned()),
            ..SayArgs::default()
        };

        let err = run(&args, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SpecError>(),
            Some(SpecError::ValidationFailed(1))
        ));
        assert_eq!(run(&args, true).unwrap(), ExitCode::from(1));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_missing_clip_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("x.wav");
        let args = SayArgs {
            text: "x".to_string(),
            output: Some(out.to_string_lossy().into_owned()),
            sound_dir: Some(tmp.path().to_string_lossy().into_owned()),
            ..SayArgs::default()
        };

        assert_eq!(run(&args, true).unwrap(), ExitCode::from(1));
        assert!(run(&args, false).is_err());
        assert!(!out.exists());
    }
}
