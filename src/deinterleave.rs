use std::io::{self, ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};

use dasp_sample::Sample as _; // Expose to_sample()

use super::errors::Error;
use super::Sample;

/// Audio samples split out by channel.
///
/// Samples are the raw signed integers found in the file, in the native
/// range of their bit depth: no scaling has been applied. Every channel
/// holds the same number of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    bits_per_sample: u16,
    sample_count_per_channel: usize,
    channels: Vec<Vec<i32>>,
}

impl DecodedAudio {
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Count of samples in each channel, which is also the frame count.
    pub fn sample_count_per_channel(&self) -> usize {
        self.sample_count_per_channel
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Samples for one channel, `None` if `index` is out of range.
    pub fn channel(&self, index: usize) -> Option<&[i32]> {
        self.channels.get(index).map(|c| c.as_slice())
    }

    /// All channels in file order, channel 0 first.
    pub fn channels(&self) -> &[Vec<i32>] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<Vec<i32>> {
        self.channels
    }

    /// Iterate over frames, re-interleaving one sample from each channel.
    pub fn frames(&self) -> impl Iterator<Item = Vec<i32>> + '_ {
        (0..self.sample_count_per_channel)
            .map(move |n| self.channels.iter().map(|c| c[n]).collect())
    }

    /// Convert one channel into another sample format.
    ///
    /// Conversion follows `dasp_sample`'s rules for the file's bit depth,
    /// e.g. a 16-bit `-32768` becomes `-1.0f32`.
    pub fn channel_as<S: Sample>(&self, index: usize) -> Option<Vec<S>> {
        let channel = self.channels.get(index)?;
        let converted = match self.bits_per_sample {
            8 => channel.iter().map(|s| (*s as i8).to_sample::<S>()).collect(),
            16 => channel.iter().map(|s| (*s as i16).to_sample::<S>()).collect(),
            _ => channel.iter().map(|s| (*s).to_sample::<S>()).collect(),
        };
        Some(converted)
    }

    /// Every channel as `f32` in the range -1.0 to 1.0.
    pub fn to_float_channels(&self) -> Vec<Vec<f32>> {
        (0..self.channel_count())
            .filter_map(|n| self.channel_as::<f32>(n))
            .collect()
    }
}

/// Decode interleaved integer PCM from `reader`.
///
/// Reads `declared_size / channel_count / (bits_per_sample / 8)` frames,
/// ignoring any trailing bytes that do not fill a frame. Within each frame
/// channel 0's sample comes first.
///
/// If the stream ends cleanly on a sample boundary before all frames are
/// read, decoding stops and the missing samples are left as zero. A stream
/// that ends partway into a sample is a `SampleReadFailure`.
///
/// ### Memory
///
/// Every channel is allocated at full length, from `declared_size`, before
/// any payload is read. A truncated or hostile file claiming a large `data`
/// chunk will cost that much memory even if it carries no samples: 8-bit
/// mono declaring `0xFFFF_FFFF` bytes asks for about 16 GiB.
pub fn decode_pcm<R: Read>(
    reader: &mut R,
    channel_count: u16,
    bits_per_sample: u16,
    declared_size: u32,
) -> Result<DecodedAudio, Error> {
    let sample_from_bytes: fn(&[u8]) -> i32 = match bits_per_sample {
        8 => |b: &[u8]| b[0] as i8 as i32,
        16 => |b: &[u8]| LittleEndian::read_i16(b) as i32,
        32 => |b: &[u8]| LittleEndian::read_i32(b),
        b => return Err(Error::UnsupportedBitDepth { bits_per_sample: b }),
    };

    if channel_count == 0 {
        return Err(Error::NoChannels);
    }

    let width = (bits_per_sample / 8) as usize;
    let channel_count = channel_count as usize;
    let sample_count_per_channel = declared_size as usize / channel_count / width;

    let mut channels = vec![vec![0i32; sample_count_per_channel]; channel_count];
    let mut buf = [0u8; 4];
    let buf = &mut buf[..width];

    'frames: for n in 0..sample_count_per_channel {
        for channel in channels.iter_mut() {
            if !read_sample_bytes(reader, buf)? {
                break 'frames;
            }
            channel[n] = sample_from_bytes(buf);
        }
    }

    Ok(DecodedAudio {
        bits_per_sample,
        sample_count_per_channel,
        channels,
    })
}

/// Fill `buf` from `reader`.
///
/// `Ok(false)` when the stream was already at its end, `Ok(true)` when the
/// buffer was filled.
fn read_sample_bytes<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool, Error> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(false),
            Ok(0) => {
                return Err(Error::SampleReadFailure(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "stream ended inside a sample",
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::SampleReadFailure(e)),
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out one byte per read, interrupting every other call.
    struct Trickle {
        bytes: Vec<u8>,
        at: usize,
        interrupt: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(ErrorKind::Interrupted, "again"));
            }
            if self.at >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.at];
            self.at += 1;
            Ok(1)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_stereo_16() {
        let mut c = Cursor::new(vec![0x01, 0x00, 0x02, 0x00, 0xFF, 0xFF, 0x04, 0x00]);
        let audio = decode_pcm(&mut c, 2, 16, 8).unwrap();
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.sample_count_per_channel(), 2);
        assert_eq!(audio.channels(), &[vec![1, -1], vec![2, 4]][..]);
        assert_eq!(audio.frames().collect::<Vec<_>>(), vec![vec![1, 2], vec![-1, 4]]);
        assert_eq!(audio.into_channels(), vec![vec![1, -1], vec![2, 4]]);
    }

    #[test]
    fn test_8_bit_is_signed() {
        let mut c = Cursor::new(vec![0x00, 0x7F, 0x80, 0xFF]);
        let audio = decode_pcm(&mut c, 1, 8, 4).unwrap();
        assert_eq!(audio.channel(0).unwrap(), &[0, 127, -128, -1]);
    }

    #[test]
    fn test_32_bit() {
        let mut c = Cursor::new(vec![
            0x00, 0x00, 0x00, 0x80, 0xFF, 0xFF, 0xFF, 0x7F, 0xFE, 0xFF, 0xFF, 0xFF,
        ]);
        let audio = decode_pcm(&mut c, 3, 32, 12).unwrap();
        assert_eq!(audio.channels(), &[vec![i32::MIN], vec![i32::MAX], vec![-2]][..]);
    }

    #[test]
    fn test_unsupported_depth_reads_nothing() {
        let mut c = Cursor::new(vec![0u8; 12]);
        match decode_pcm(&mut c, 2, 24, 12) {
            Err(Error::UnsupportedBitDepth { bits_per_sample }) => assert_eq!(bits_per_sample, 24),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(c.position(), 0);

        match decode_pcm(&mut c, 2, 0, 12) {
            Err(Error::UnsupportedBitDepth { bits_per_sample }) => assert_eq!(bits_per_sample, 0),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_no_channels() {
        let mut c = Cursor::new(vec![0u8; 4]);
        match decode_pcm(&mut c, 0, 16, 4) {
            Err(Error::NoChannels) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_partial_frame_truncated() {
        // 7 bytes: one whole stereo 16-bit frame plus three stray bytes
        let mut c = Cursor::new(vec![0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04]);
        let audio = decode_pcm(&mut c, 2, 16, 7).unwrap();
        assert_eq!(audio.sample_count_per_channel(), 1);
        assert_eq!(audio.channels(), &[vec![1], vec![2]][..]);
        assert_eq!(c.position(), 4);
    }

    #[test]
    fn test_clean_eof_zero_fills() {
        // declares three frames, carries one and a half
        let mut c = Cursor::new(vec![0x05, 0x00, 0x06, 0x00, 0x07, 0x00]);
        let audio = decode_pcm(&mut c, 2, 16, 12).unwrap();
        assert_eq!(audio.sample_count_per_channel(), 3);
        assert_eq!(audio.channels(), &[vec![5, 7, 0], vec![6, 0, 0]][..]);
    }

    #[test]
    fn test_eof_inside_sample_fails() {
        let mut c = Cursor::new(vec![0x05, 0x00, 0x06]);
        match decode_pcm(&mut c, 2, 16, 8) {
            Err(Error::SampleReadFailure(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_short_reads_are_completed() {
        let mut t = Trickle {
            bytes: vec![0x01, 0x00, 0x02, 0x00, 0xFF, 0xFF, 0x04, 0x00],
            at: 0,
            interrupt: false,
        };
        let audio = decode_pcm(&mut t, 2, 16, 8).unwrap();
        assert_eq!(audio.channels(), &[vec![1, -1], vec![2, 4]][..]);
    }

    #[test]
    fn test_io_error() {
        match decode_pcm(&mut Broken, 1, 8, 1) {
            Err(Error::SampleReadFailure(e)) => assert_eq!(e.kind(), ErrorKind::Other),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_float_conversion() {
        let mut c = Cursor::new(vec![0x00, 0x80, 0x00, 0x00, 0x00, 0x40]);
        let audio = decode_pcm(&mut c, 1, 16, 6).unwrap();
        assert_eq!(audio.channel(0).unwrap(), &[-32768, 0, 16384]);
        assert_eq!(audio.to_float_channels(), vec![vec![-1.0f32, 0.0, 0.5]]);
        assert_eq!(audio.channel_as::<i8>(0).unwrap(), vec![-128i8, 0, 64]);
        assert!(audio.channel_as::<f32>(1).is_none());
    }
}
