//! RIFF/WAVE decoding.

use std::io::{self, Cursor};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use super::clip::Clip;
use super::error::WavError;
use super::format::{BitDepth, PcmFormat};

/// Size of the RIFF descriptor ("RIFF", size, "WAVE").
pub(crate) const RIFF_HEADER_SIZE: usize = 12;

/// Size of a chunk header (tag + size).
const CHUNK_HEADER_SIZE: usize = 8;

/// Minimum size of the fmt chunk for PCM data.
pub(crate) const FMT_CHUNK_SIZE: usize = 16;

/// Audio format code for PCM (uncompressed).
pub(crate) const WAVE_FORMAT_PCM: u16 = 1;

/// Fields of the fmt chunk, in file order.
#[derive(Debug, Clone, Copy)]
struct FmtChunk {
    compression: u16,
    channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
}

impl FmtChunk {
    fn read(data: &[u8]) -> io::Result<Self> {
        let mut cursor = Cursor::new(data);
        Ok(Self {
            compression: cursor.read_u16::<LittleEndian>()?,
            channels: cursor.read_u16::<LittleEndian>()?,
            sample_rate: cursor.read_u32::<LittleEndian>()?,
            byte_rate: cursor.read_u32::<LittleEndian>()?,
            block_align: cursor.read_u16::<LittleEndian>()?,
            bits_per_sample: cursor.read_u16::<LittleEndian>()?,
        })
    }
}

/// Decodes a RIFF/WAVE container holding 8-bit or 16-bit linear PCM.
///
/// Chunks other than `fmt ` and `data` are skipped, as are any fmt chunk
/// bytes past the first 16.
///
/// # Errors
/// - [`WavError::InvalidContainer`] if the RIFF/WAVE tags are missing
/// - [`WavError::MalformedChunk`] if the fmt or data chunk is missing or truncated,
///   or the fmt chunk's block alignment or byte rate is inconsistent
/// - [`WavError::UnsupportedCompression`] if the data is not linear PCM
/// - [`WavError::UnsupportedBitDepth`] for anything but 8 or 16 bits per sample
pub fn decode(bytes: &[u8]) -> Result<Clip, WavError> {
    if !has_riff_header(bytes) {
        return Err(WavError::InvalidContainer);
    }

    let fmt_data =
        find_chunk(bytes, b"fmt ")?.ok_or_else(|| WavError::malformed("missing fmt chunk"))?;
    if fmt_data.len() < FMT_CHUNK_SIZE {
        return Err(WavError::malformed(format!(
            "fmt chunk too short: {} bytes, expected at least {}",
            fmt_data.len(),
            FMT_CHUNK_SIZE
        )));
    }
    let fmt = FmtChunk::read(fmt_data).map_err(|e| WavError::malformed(e.to_string()))?;

    if fmt.compression != WAVE_FORMAT_PCM {
        return Err(WavError::UnsupportedCompression {
            code: fmt.compression,
        });
    }

    let depth = BitDepth::from_bits(fmt.bits_per_sample).ok_or(WavError::UnsupportedBitDepth {
        bits: fmt.bits_per_sample,
    })?;

    if fmt.channels == 0 {
        return Err(WavError::malformed("fmt chunk declares zero channels"));
    }
    if fmt.sample_rate == 0 {
        return Err(WavError::malformed("fmt chunk declares a zero sample rate"));
    }

    let format = PcmFormat::new(fmt.sample_rate, fmt.channels, depth);
    let block_align = format.checked_block_align().ok_or_else(|| {
        WavError::malformed(format!(
            "{} channels of {} do not fit the block alignment field",
            fmt.channels, depth
        ))
    })?;
    let byte_rate = format.checked_byte_rate().ok_or_else(|| {
        WavError::malformed(format!(
            "{} Hz with {}-byte frames does not fit the byte rate field",
            fmt.sample_rate, block_align
        ))
    })?;
    if fmt.block_align != block_align {
        return Err(WavError::malformed(format!(
            "fmt chunk declares block alignment {}, expected {}",
            fmt.block_align, block_align
        )));
    }
    if fmt.byte_rate != byte_rate {
        return Err(WavError::malformed(format!(
            "fmt chunk declares byte rate {}, expected {}",
            fmt.byte_rate, byte_rate
        )));
    }

    let data =
        find_chunk(bytes, b"data")?.ok_or_else(|| WavError::malformed("missing data chunk"))?;

    let samples = unpack_samples(data, depth)?;

    Ok(Clip::new(format, samples))
}

/// Checks the 12-byte RIFF descriptor.
pub(crate) fn has_riff_header(bytes: &[u8]) -> bool {
    bytes.len() >= RIFF_HEADER_SIZE && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WAVE"
}

/// Finds a chunk by tag and returns its payload.
///
/// Walks the chunk list after the RIFF descriptor, honouring the pad byte
/// that follows odd-sized chunks.
pub(crate) fn find_chunk<'a>(bytes: &'a [u8], tag: &[u8; 4]) -> Result<Option<&'a [u8]>, WavError> {
    let mut offset = RIFF_HEADER_SIZE;

    while offset + CHUNK_HEADER_SIZE <= bytes.len() {
        let id = &bytes[offset..offset + 4];
        let size = LittleEndian::read_u32(&bytes[offset + 4..offset + 8]) as usize;
        let start = offset + CHUNK_HEADER_SIZE;

        if id == tag {
            let available = bytes.len() - start;
            if size > available {
                return Err(WavError::malformed(format!(
                    "'{}' chunk declares {} bytes but only {} remain",
                    String::from_utf8_lossy(tag).trim_end(),
                    size,
                    available
                )));
            }
            return Ok(Some(&bytes[start..start + size]));
        }

        offset = start.saturating_add(size).saturating_add(size % 2);
    }

    Ok(None)
}

/// Reinterprets raw sample bytes according to the bit depth.
fn unpack_samples(data: &[u8], depth: BitDepth) -> Result<Vec<i16>, WavError> {
    match depth {
        BitDepth::U8 => Ok(data.iter().map(|&b| i16::from(b)).collect()),
        BitDepth::S16 => {
            if data.len() % 2 != 0 {
                return Err(WavError::malformed(format!(
                    "16-bit data chunk has odd length {}",
                    data.len()
                )));
            }
            let mut samples = vec![0i16; data.len() / 2];
            LittleEndian::read_i16_into(data, &mut samples);
            Ok(samples)
        }
    }
}
