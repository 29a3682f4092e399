//! SPI bit order

use crate::error::{Error, Result};

/// Bit order
///
/// Determines whether each byte is shifted out (and in) starting from its
/// most or least significant bit.
///
/// The SPI0 block only shifts MSB first. `LsbFirst` is realised by the
/// transfer path reversing every byte with [`reverse_bits`] before sending
/// and after receiving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum BitOrder {
    /// Least significant bit first
    LsbFirst = 0,
    /// Most significant bit first
    #[default]
    MsbFirst = 1,
}

impl BitOrder {
    /// Canonical encoding used at the control boundary
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Returns true if bytes need reversing in software
    pub const fn needs_reversal(self) -> bool {
        matches!(self, Self::LsbFirst)
    }
}

impl TryFrom<u32> for BitOrder {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::LsbFirst),
            1 => Ok(Self::MsbFirst),
            _ => Err(Error::InvalidBitOrder(value)),
        }
    }
}

impl From<BitOrder> for u32 {
    fn from(order: BitOrder) -> u32 {
        order.as_raw()
    }
}

/// Reverse the bits of each byte in `buffer`
///
/// Converts a buffer between MSB-first and LSB-first bit order.
#[inline]
pub fn reverse_bits(buffer: &mut [u8]) {
    for byte in buffer {
        *byte = byte.reverse_bits();
    }
}
