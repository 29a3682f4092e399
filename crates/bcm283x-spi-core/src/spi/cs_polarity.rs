//! SPI chip select polarity

use super::regs::CsFlags;
use crate::error::{Error, Result};

/// Chip select polarity
///
/// Selects whether the chip select line is asserted low or high.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum ChipSelectPolarity {
    /// Chip select asserted when low
    #[default]
    ActiveLow = 0,
    /// Chip select asserted when high
    ActiveHigh = 1,
}

impl ChipSelectPolarity {
    /// Canonical encoding used at the control boundary
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// CS register bits this polarity sets
    ///
    /// Sets both the global CSPOL bit and the per-line polarity bits, so the
    /// polarity holds whichever chip select line is in use.
    pub fn cs_bits(self) -> CsFlags {
        match self {
            Self::ActiveLow => CsFlags::empty(),
            Self::ActiveHigh => CsFlags::CSPOL | CsFlags::CSPOL_ALL,
        }
    }
}

impl TryFrom<u32> for ChipSelectPolarity {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::ActiveLow),
            1 => Ok(Self::ActiveHigh),
            _ => Err(Error::InvalidCsPolarity(value)),
        }
    }
}

impl From<ChipSelectPolarity> for u32 {
    fn from(polarity: ChipSelectPolarity) -> u32 {
        polarity.as_raw()
    }
}
