use std::fmt::Debug;

/// A Four-character Code
///
/// For identifying chunks within a RIFF file. The four bytes are kept in
/// file order, so comparing two `FourCC`s is the same as comparing their
/// big-endian `u32` readings.
#[derive(Eq, PartialEq, Hash, Copy, Clone)]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub const fn make(s: &[u8; 4]) -> Self {
        Self(*s)
    }

    /// The code read as a big-endian integer, e.g. `0x52494646` for `RIFF`.
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl From<u32> for FourCC {
    fn from(value: u32) -> Self {
        FourCC(value.to_be_bytes())
    }
}

impl From<&FourCC> for String {
    fn from(f: &FourCC) -> Self {
        f.0.iter().map(|b| *b as char).collect()
    }
}

impl From<FourCC> for String {
    fn from(f: FourCC) -> Self {
        (&f).into()
    }
}

impl Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let s: String = self.into();
        write!(f, "FourCC({})", s)
    }
}

pub const RIFF_SIG: FourCC = FourCC::make(b"RIFF");
pub const WAVE_SIG: FourCC = FourCC::make(b"WAVE");

pub const FMT__SIG: FourCC = FourCC::make(b"fmt ");
pub const DATA_SIG: FourCC = FourCC::make(b"data");
