//! PCM format parameters.

/// Sample encoding of a PCM stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 8-bit unsigned samples, silence at 128.
    U8,
    /// 16-bit signed little-endian samples, silence at 0.
    S16,
}

impl BitDepth {
    /// Maps a `bits_per_sample` header value to a depth.
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(BitDepth::U8),
            16 => Some(BitDepth::S16),
            _ => None,
        }
    }

    /// Bits per sample as written in the format chunk.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::U8 => 8,
            BitDepth::S16 => 16,
        }
    }

    /// Bytes occupied by one sample.
    pub fn bytes(&self) -> usize {
        match self {
            BitDepth::U8 => 1,
            BitDepth::S16 => 2,
        }
    }

    /// The value of a silent sample.
    pub fn silence(&self) -> i16 {
        match self {
            BitDepth::U8 => 128,
            BitDepth::S16 => 0,
        }
    }

    /// Smallest representable sample value.
    pub fn min_sample(&self) -> i16 {
        match self {
            BitDepth::U8 => 0,
            BitDepth::S16 => i16::MIN,
        }
    }

    /// Largest representable sample value.
    pub fn max_sample(&self) -> i16 {
        match self {
            BitDepth::U8 => 255,
            BitDepth::S16 => i16::MAX,
        }
    }

    /// Narrows a mixed sample to this depth.
    ///
    /// Fractions are truncated toward zero, then the value saturates at the
    /// bounds of the depth.
    pub fn narrow(&self, sample: f64) -> i16 {
        let min = f64::from(self.min_sample());
        let max = f64::from(self.max_sample());
        sample.trunc().clamp(min, max) as i16
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BitDepth::U8 => write!(f, "8-bit unsigned"),
            BitDepth::S16 => write!(f, "16-bit signed"),
        }
    }
}

/// PCM format parameters shared by every clip in one output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PcmFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample encoding.
    pub depth: BitDepth,
}

impl PcmFormat {
    /// Creates a format.
    pub fn new(sample_rate: u32, channels: u16, depth: BitDepth) -> Self {
        Self {
            sample_rate,
            channels,
            depth,
        }
    }

    /// Creates a mono format.
    pub fn mono(sample_rate: u32, depth: BitDepth) -> Self {
        Self::new(sample_rate, 1, depth)
    }

    /// Creates a stereo format.
    pub fn stereo(sample_rate: u32, depth: BitDepth) -> Self {
        Self::new(sample_rate, 2, depth)
    }

    /// Bits per sample as written in the format chunk.
    pub fn bits_per_sample(&self) -> u16 {
        self.depth.bits()
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Overflows for formats [`PcmFormat::checked_block_align`] rejects.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.depth.bits() / 8)
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Overflows for formats [`PcmFormat::checked_byte_rate`] rejects.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Block align, or `None` if it does not fit the 16-bit header field.
    pub fn checked_block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.depth.bits() / 8)
    }

    /// Byte rate, or `None` if it does not fit the 32-bit header field.
    pub fn checked_byte_rate(&self) -> Option<u32> {
        self.checked_block_align()
            .and_then(|align| self.sample_rate.checked_mul(u32::from(align)))
    }

    /// Number of interleaved samples in one second of audio.
    pub fn samples_per_second(&self) -> usize {
        self.sample_rate as usize * usize::from(self.channels)
    }
}

impl std::fmt::Display for PcmFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Hz, {} channel(s), {}",
            self.sample_rate, self.channels, self.depth
        )
    }
}
