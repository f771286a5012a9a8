use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::chunks::{ContainerHeader, DataChunkDescriptor, ReadWaveChunks};
use super::cursor::ByteCursor;
use super::deinterleave::{decode_pcm, DecodedAudio};
use super::errors::Error;
use super::fmt::FormatChunk;

/// A parsed RIFF/WAVE stream.
///
/// Parsing reads the 12-byte header, the 24-byte `fmt ` chunk and the
/// 8-byte `data` chunk header, strictly in that order, and stops at the
/// first failure. The chunks must appear back to back with nothing in
/// between.
///
/// ```
/// use std::io::Cursor;
/// use riffwave::WaveContainer;
///
/// let mut bytes = b"RIFF\x28\x00\x00\x00WAVE".to_vec();
/// bytes.extend_from_slice(b"fmt \x10\x00\x00\x00\x01\x00\x01\x00\x40\x1f\x00\x00\x80\x3e\x00\x00\x02\x00\x10\x00");
/// bytes.extend_from_slice(b"data\x04\x00\x00\x00\x01\x00\xff\xff");
///
/// let mut source = Cursor::new(bytes);
/// let mut wave = WaveContainer::parse(&mut source).unwrap();
/// assert_eq!(wave.format().sample_rate, 8000);
///
/// let audio = wave.decode_samples(&mut source).unwrap();
/// assert_eq!(audio.channel(0).unwrap(), &[1, -1]);
/// ```
#[derive(Debug, Clone)]
pub struct WaveContainer {
    header: ContainerHeader,
    format: FormatChunk,
    data: DataChunkDescriptor,
    audio: Option<DecodedAudio>,
}

impl WaveContainer {
    /// Open a file, then parse and decode all of it.
    ///
    /// The file is closed before this returns, whether or not it
    /// succeeded.
    ///
    /// Sample storage is sized from the `data` chunk's length field, not
    /// from the file's real length; see `decode_pcm()`. Check
    /// `data_chunk().declared_size` after `parse()` if the source is not
    /// trusted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut inner = BufReader::new(File::open(path)?);
        let mut wave = Self::parse(&mut inner)?;
        wave.decode_samples(&mut inner)?;
        Ok(wave)
    }

    /// Parse the chunk headers from `source`.
    ///
    /// On success `source` is left at the first byte of audio data, ready
    /// for `decode_samples()`. Offsets are counted from wherever `source`
    /// was positioned when this was called.
    pub fn parse<R: Read>(source: &mut R) -> Result<Self, Error> {
        let mut cursor = ByteCursor::new(source);
        let header = cursor.read_container_header()?;
        let format = cursor.read_format_chunk()?;
        let data = cursor.read_data_chunk()?;

        Ok(WaveContainer {
            header,
            format,
            data,
            audio: None,
        })
    }

    /// Decode the audio data from `source`.
    ///
    /// `source` must be the same stream passed to `parse()`, not moved
    /// since. Audio is decoded once: later calls return the stored result
    /// without reading from `source`.
    pub fn decode_samples<R: Read>(&mut self, source: &mut R) -> Result<&DecodedAudio, Error> {
        let audio = match self.audio.take() {
            Some(audio) => audio,
            None => decode_pcm(
                source,
                self.format.channel_count,
                self.format.bits_per_sample,
                self.data.declared_size,
            )?,
        };

        Ok(self.audio.insert(audio))
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// Sample and frame format of this wave file.
    pub fn format(&self) -> &FormatChunk {
        &self.format
    }

    pub fn data_chunk(&self) -> &DataChunkDescriptor {
        &self.data
    }

    /// Decoded audio, if `decode_samples()` has succeeded.
    pub fn audio(&self) -> Option<&DecodedAudio> {
        self.audio.as_ref()
    }

    pub fn into_audio(self) -> Option<DecodedAudio> {
        self.audio
    }

    /// The count of audio frames in the file.
    pub fn frame_count(&self) -> u64 {
        self.data.frame_count(&self.format)
    }

    /// Length of the audio in seconds, 0.0 if the sample rate is zero.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            0.0
        } else {
            self.frame_count() as f64 / self.format.sample_rate as f64
        }
    }
}
