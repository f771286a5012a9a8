use std::io::Read;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::cursor::ByteCursor;
use super::errors::Error as ParserError;
use super::fmt::FormatChunk;
use super::fourcc::FourCC;
use super::fourcc::{DATA_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};

/// The 12-byte `RIFF` header at the start of a WAVE file.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerHeader {
    /// Always `RIFF` once parsed
    pub chunk_id: FourCC,

    /// Length of everything after this field.
    ///
    /// Reported as read, the parser does not bound itself by it.
    pub declared_size: u32,

    /// Always `WAVE` once parsed
    pub format_tag: FourCC,
}

impl ContainerHeader {
    pub const LENGTH: usize = 12;
}

/// The 8-byte header of the `data` chunk.
///
/// The payload itself is not read, `payload_start` marks where it begins
/// in the source so the decoder can continue from there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataChunkDescriptor {
    /// Always `data` once parsed
    pub chunk_id: FourCC,

    /// Length field of the chunk, in bytes
    pub declared_size: u32,

    /// Offset of the first payload byte from the start of the source
    pub payload_start: u64,
}

impl DataChunkDescriptor {
    pub const LENGTH: usize = 8;

    /// Count of whole frames the payload holds for `format`.
    ///
    /// Trailing bytes that do not make up a complete frame are not counted.
    pub fn frame_count(&self, format: &FormatChunk) -> u64 {
        let width = format.sample_width_bytes() as u64;
        let channels = format.channel_count as u64;
        if width == 0 || channels == 0 {
            0
        } else {
            self.declared_size as u64 / channels / width
        }
    }
}

/// Readers for the fixed-size blocks at the head of a WAVE file.
///
/// Each method reads its whole block before looking at it, so the source
/// is advanced by the block's length even when validation fails.
pub trait ReadWaveChunks: Read {
    fn read_container_header(&mut self) -> Result<ContainerHeader, ParserError>;
    fn read_format_chunk(&mut self) -> Result<FormatChunk, ParserError>;
}

fn read_tag(buf: &[u8]) -> FourCC {
    FourCC::from(BigEndian::read_u32(buf))
}

impl<T> ReadWaveChunks for T
where
    T: Read,
{
    fn read_container_header(&mut self) -> Result<ContainerHeader, ParserError> {
        let mut buf = [0u8; ContainerHeader::LENGTH];
        self.read_exact(&mut buf)?;

        let chunk_id = read_tag(&buf[0..4]);
        if chunk_id != RIFF_SIG {
            return Err(ParserError::InvalidContainerTag { found: chunk_id });
        }

        let declared_size = LittleEndian::read_u32(&buf[4..8]);

        let format_tag = read_tag(&buf[8..12]);
        if format_tag != WAVE_SIG {
            return Err(ParserError::InvalidFormatTag { found: format_tag });
        }

        Ok(ContainerHeader {
            chunk_id,
            declared_size,
            format_tag,
        })
    }

    fn read_format_chunk(&mut self) -> Result<FormatChunk, ParserError> {
        let mut buf = [0u8; FormatChunk::LENGTH];
        self.read_exact(&mut buf)?;

        let chunk_id = read_tag(&buf[0..4]);
        if chunk_id != FMT__SIG {
            return Err(ParserError::InvalidFmtTag { found: chunk_id });
        }

        Ok(FormatChunk {
            chunk_id,
            chunk_size: LittleEndian::read_u32(&buf[4..8]),
            audio_format: LittleEndian::read_u16(&buf[8..10]),
            channel_count: LittleEndian::read_u16(&buf[10..12]),
            sample_rate: LittleEndian::read_u32(&buf[12..16]),
            byte_rate: LittleEndian::read_u32(&buf[16..20]),
            block_align: LittleEndian::read_u16(&buf[20..22]),
            bits_per_sample: LittleEndian::read_u16(&buf[22..24]),
        })
    }
}

impl<R: Read> ByteCursor<R> {
    /// Read the `data` chunk header, leaving the cursor at the first
    /// payload byte.
    pub fn read_data_chunk(&mut self) -> Result<DataChunkDescriptor, ParserError> {
        let mut buf = [0u8; DataChunkDescriptor::LENGTH];
        self.read_exact(&mut buf)?;

        let chunk_id = read_tag(&buf[0..4]);
        if chunk_id != DATA_SIG {
            return Err(ParserError::InvalidDataTag { found: chunk_id });
        }

        Ok(DataChunkDescriptor {
            chunk_id,
            declared_size: LittleEndian::read_u32(&buf[4..8]),
            payload_start: self.position(),
        })
    }
}
