//! Filename command implementation
//!
//! Lists the clip files a text needs, in the order they are first used.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use spellwav_backend_audio::assemble::is_capital;
use spellwav_backend_audio::cache::{ClipId, CLIP_EXTENSION};

use super::json_output::{ClipFileEntry, FilenameOutput};

/// Clip files needed to speak `text`, without duplicates.
pub fn clip_files(text: &str, fold_cases: bool) -> Vec<ClipFileEntry> {
    let mut files: Vec<ClipFileEntry> = Vec::new();
    let mut push = |id: ClipId| {
        let file_name = format!("{}.{}", id.name(fold_cases), CLIP_EXTENSION);
        if !files.iter().any(|entry| entry.file_name == file_name) {
            files.push(ClipFileEntry {
                clip: id.to_string(),
                file_name,
            });
        }
    };

    for c in text.chars() {
        if is_capital(c) {
            push(ClipId::Capital);
        }
        push(ClipId::Char(c));
    }
    files
}

/// Run the filename command
///
/// # Arguments
/// * `text` - Characters to look up
/// * `case_sensitive` - Disable case folding
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(text: &str, case_sensitive: bool, json_output: bool) -> Result<ExitCode> {
    let fold_cases = !case_sensitive;
    let files = clip_files(text, fold_cases);

    if json_output {
        let output = FilenameOutput { fold_cases, files };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for entry in &files {
            println!("{}  {}", format!("{:>8}", entry.clip).dimmed(), entry.file_name);
        }
    }

    Ok(ExitCode::SUCCESS)
}
