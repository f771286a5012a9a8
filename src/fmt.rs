use super::common_format::CommonFormat;
use super::fourcc::FourCC;

/**
 * WAV file data format record.
 *
 * The `fmt ` record describes the binary structure of the `data` chunk:
 * sample rate, sample width, channel count, etc.
 *
 * Fields are reported as read. None of the "by rule" relations below are
 * checked when the chunk is parsed.
 */
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormatChunk {
    /// Chunk signature, always `fmt ` once parsed
    pub chunk_id: FourCC,

    /// Length field of the chunk
    pub chunk_size: u32,

    /// A tag identifying the codec in use.
    pub audio_format: u16,

    /// Count of audio channels in each frame
    pub channel_count: u16,

    /// Sample rate of the audio data
    pub sample_rate: u32,

    /// Count of bytes per second
    ///
    /// By rule, this is `block_align * sample_rate`
    pub byte_rate: u32,

    /// Count of bytes per audio frame
    ///
    /// By rule, this is `channel_count * bits_per_sample / 8`
    pub block_align: u16,

    /// Count of bits stored in the file per sample
    pub bits_per_sample: u16,
}

impl FormatChunk {
    /// Size of the chunk as read: tag, length and the 16 format bytes.
    pub const LENGTH: usize = 24;

    pub fn common_format(&self) -> CommonFormat {
        CommonFormat::make(self.audio_format)
    }

    /// Bytes occupied by one sample of one channel.
    pub fn sample_width_bytes(&self) -> u16 {
        self.bits_per_sample / 8
    }
}
