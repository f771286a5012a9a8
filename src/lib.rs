/*!
# riffwave

Decoder for RIFF/WAVE files carrying integer linear PCM.

A WAVE file is read as three fixed blocks followed by the audio payload:

| Offset | Block | Length |
|---|---|---|
| 0 | `RIFF` header: tag, length, `WAVE` form type | 12 |
| 12 | `fmt ` chunk: tag, length, 16 bytes of format | 24 |
| 36 | `data` chunk header: tag, length | 8 |
| 44 | interleaved samples | `data` length |

Integers are little-endian; the four-character tags are compared byte for
byte in file order. The chunks must appear in exactly this order, with no
other chunks before or between them.

Samples of 8, 16 or 32 bits are decoded into one `Vec<i32>` per channel,
holding the raw signed values. 8-bit samples are read as signed bytes.

```no_run
use riffwave::WaveContainer;

let wave = WaveContainer::open("speech.wav")?;
println!("{} channels at {} Hz", wave.format().channel_count, wave.format().sample_rate);

let audio = wave.audio().unwrap();
println!("{:?}", &audio.channel(0).unwrap()[..10]);
# Ok::<(), riffwave::Error>(())
```

Things that are _not_ in the scope of this package:

- Writing wave files.
- Floating-point PCM, `WAVE_FORMAT_EXTENSIBLE` and compressed formats.
- Chunks other than `fmt ` and `data`, chunks out of order and chunk padding.
- Streaming decode: the whole payload is decoded in one call.

## Resources

- [Peter Kabal, McGill University](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/WAVE.html)
- [Multimedia Programming Interface and Data Specifications 1.0](http://www-mmsp.ece.mcgill.ca/Documents/AudioFormats/WAVE/Docs/riffmci.pdf)
   (August 1991), IBM Corporation and Microsoft Corporation
- [MSDN WAVEFORMATEX](https://docs.microsoft.com/en-us/windows/win32/api/mmeapi/ns-mmeapi-waveformatex)
*/

extern crate byteorder;
extern crate dasp_sample;

mod common_format;
mod errors;
mod fourcc;
mod sample;

mod cursor;

mod chunks;
mod fmt;

mod container;
mod deinterleave;

pub use chunks::{ContainerHeader, DataChunkDescriptor, ReadWaveChunks};
pub use common_format::CommonFormat;
pub use container::WaveContainer;
pub use cursor::ByteCursor;
pub use deinterleave::{decode_pcm, DecodedAudio};
pub use errors::Error;
pub use fmt::FormatChunk;
pub use fourcc::{FourCC, DATA_SIG, FMT__SIG, RIFF_SIG, WAVE_SIG};
pub use sample::Sample;
