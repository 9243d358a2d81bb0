//! Core WAV writing and PCM packing functions.

use std::io::{self, Write};

use super::clip::Clip;
use super::error::WavError;
use super::format::{BitDepth, PcmFormat};
use super::reader::{FMT_CHUNK_SIZE, WAVE_FORMAT_PCM};

/// Size of the header written by [`write_wav`] (RIFF + fmt + data chunk headers).
pub const WAV_HEADER_SIZE: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - PCM format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &PcmFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&(FMT_CHUNK_SIZE as u32).to_le_bytes())?;
    writer.write_all(&WAVE_FORMAT_PCM.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample().to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Encodes a clip into a complete RIFF/WAVE container.
///
/// # Errors
/// - [`WavError::MalformedChunk`] if block align or byte rate overflow their fields
/// - [`WavError::TooLarge`] if the sample data does not fit the 32-bit size fields
pub fn encode(clip: &Clip) -> Result<Vec<u8>, WavError> {
    if clip.format.checked_byte_rate().is_none() {
        return Err(WavError::malformed(format!(
            "format {} does not fit the fmt chunk fields",
            clip.format
        )));
    }
    let data_size = clip.data_size();
    if data_size > (u32::MAX - 36) as usize {
        return Err(WavError::TooLarge { bytes: data_size });
    }

    let pcm = pack_samples(&clip.samples, clip.format.depth);
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());
    write_wav(&mut buffer, &clip.format, &pcm).expect("writing to Vec should not fail");
    Ok(buffer)
}

/// Packs samples as unsigned bytes (8-bit) or little-endian halfwords (16-bit).
///
/// 8-bit values outside 0..=255 saturate.
pub fn pack_samples(samples: &[i16], depth: BitDepth) -> Vec<u8> {
    match depth {
        BitDepth::U8 => samples.iter().map(|&s| s.clamp(0, 255) as u8).collect(),
        BitDepth::S16 => {
            let mut pcm = Vec::with_capacity(samples.len() * 2);
            for &sample in samples {
                pcm.extend_from_slice(&sample.to_le_bytes());
            }
            pcm
        }
    }
}
