use super::fourcc::FourCC;
use std::error::Error as StdError;
use std::{
    fmt::{Debug, Display},
    io,
};

/// Errors returned by methods in this crate.
///
/// Every error is terminal: nothing is retried once one of these has
/// been returned.
#[derive(Debug)]
pub enum Error {
    /// The file does not begin with a `RIFF` tag
    InvalidContainerTag { found: FourCC },

    /// The RIFF form type is not `WAVE`
    InvalidFormatTag { found: FourCC },

    /// The first chunk after the header is not `fmt `
    InvalidFmtTag { found: FourCC },

    /// The chunk following `fmt ` is not `data`
    InvalidDataTag { found: FourCC },

    /// Samples are not 8, 16 or 32 bits wide
    UnsupportedBitDepth { bits_per_sample: u16 },

    /// Decoding was requested for a stream with zero channels
    NoChannels,

    /// An `io::Error` occurred, or the stream ended in the middle of a
    /// sample, while reading audio samples
    SampleReadFailure(io::Error),

    /// An `io::Error` occurred while reading a chunk header
    SourceReadFailure(io::Error),
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::SampleReadFailure(e) | Error::SourceReadFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::SourceReadFailure(error)
    }
}
