//! PCM data extraction and hashing utilities.

use super::reader::{find_chunk, has_riff_header};

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
///
/// # Returns
/// PCM data if found, or None if the container is invalid
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if !has_riff_header(wav_data) {
        return None;
    }
    find_chunk(wav_data, b"data").ok().flatten()
}

/// Computes the BLAKE3 hash of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if the container is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
