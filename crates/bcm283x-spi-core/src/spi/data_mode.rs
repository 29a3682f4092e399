//! SPI data mode

use super::regs::CsFlags;
use crate::error::{Error, Result};

/// SPI data mode
///
/// Each mode is a (CPOL, CPHA) pair encoded as `2 * CPOL + CPHA`, which is
/// also the layout of the 2-bit mode field in the CS register.
///
/// - Mode 0 : CPOL = 0, CPHA = 0
/// - Mode 1 : CPOL = 0, CPHA = 1
/// - Mode 2 : CPOL = 1, CPHA = 0
/// - Mode 3 : CPOL = 1, CPHA = 1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum DataMode {
    /// CPOL = 0, CPHA = 0
    #[default]
    Mode0 = 0,
    /// CPOL = 0, CPHA = 1
    Mode1 = 1,
    /// CPOL = 1, CPHA = 0
    Mode2 = 2,
    /// CPOL = 1, CPHA = 1
    Mode3 = 3,
}

impl DataMode {
    /// Build a mode from its clock polarity and clock phase
    pub const fn from_cpol_cpha(cpol: bool, cpha: bool) -> Self {
        match (cpol, cpha) {
            (false, false) => Self::Mode0,
            (false, true) => Self::Mode1,
            (true, false) => Self::Mode2,
            (true, true) => Self::Mode3,
        }
    }

    /// Clock polarity: idle level of the clock line
    pub const fn cpol(self) -> bool {
        (self as u32) & 0b10 != 0
    }

    /// Clock phase: data sampled on the second clock edge when set
    pub const fn cpha(self) -> bool {
        (self as u32) & 0b01 != 0
    }

    /// Canonical encoding used at the control boundary
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// CS register bits this mode sets
    pub fn cs_bits(self) -> CsFlags {
        let mut bits = CsFlags::empty();
        bits.set(CsFlags::CPOL, self.cpol());
        bits.set(CsFlags::CPHA, self.cpha());
        bits
    }
}

impl TryFrom<u32> for DataMode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Mode0),
            1 => Ok(Self::Mode1),
            2 => Ok(Self::Mode2),
            3 => Ok(Self::Mode3),
            _ => Err(Error::InvalidDataMode(value)),
        }
    }
}

impl From<DataMode> for u32 {
    fn from(mode: DataMode) -> u32 {
        mode.as_raw()
    }
}
