const BASIC_PCM: u16 = 0x0001;
const BASIC_FLOAT: u16 = 0x0003;
const BASIC_EXTENDED: u16 = 0xFFFE;

/// Sample format named by the `fmt ` chunk's format tag.
///
/// Only `IntegerPCM` streams are meaningful to the decoder, but the tag is
/// never checked before decoding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CommonFormat {
    /// Integer linear PCM
    IntegerPCM,

    /// IEEE Floating-point Linear PCM
    IeeeFloatPCM,

    /// `WAVE_FORMAT_EXTENSIBLE`, the real codec is named by a GUID this
    /// crate does not read.
    Extensible,

    /// An unknown format identified by a basic format tag.
    UnknownBasic(u16),
}

impl CommonFormat {
    /// Resolve a format tag to a `CommonFormat`.
    pub fn make(basic: u16) -> Self {
        match basic {
            BASIC_PCM => Self::IntegerPCM,
            BASIC_FLOAT => Self::IeeeFloatPCM,
            BASIC_EXTENDED => Self::Extensible,
            x => Self::UnknownBasic(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(CommonFormat::make(1), CommonFormat::IntegerPCM);
        assert_eq!(CommonFormat::make(3), CommonFormat::IeeeFloatPCM);
        assert_eq!(CommonFormat::make(0xFFFE), CommonFormat::Extensible);
        assert_eq!(CommonFormat::make(0x50), CommonFormat::UnknownBasic(0x50));
    }
}
