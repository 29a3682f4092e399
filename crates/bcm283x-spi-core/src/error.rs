//! Error types for bcm283x-spi-core
//!
//! This module provides a no_std compatible error type shared by the
//! clock divider calculator and the control request layer.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Calculator errors
    /// Requested bus speed is outside the range the divider can produce
    SpeedOutOfRange,

    // Control boundary errors
    /// Control request code is not one of the known operations
    UnknownRequest(u32),
    /// Request argument has the wrong kind for the request code
    InvalidArgument(u32),
    /// Bit order argument is not a known encoding
    InvalidBitOrder(u32),
    /// Data mode argument is not in 0..=3
    InvalidDataMode(u32),
    /// Chip select polarity argument is not a known encoding
    InvalidCsPolarity(u32),

    // Transfer errors
    /// Transfer length exceeds the transfer buffer size limit
    TransferTooLarge(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpeedOutOfRange => write!(f, "SPI speed out of range"),
            Self::UnknownRequest(code) => write!(f, "unknown SPI control request {}", code),
            Self::InvalidArgument(code) => {
                write!(f, "invalid argument for SPI control request {}", code)
            }
            Self::InvalidBitOrder(v) => write!(f, "invalid SPI bit order {}", v),
            Self::InvalidDataMode(v) => write!(f, "invalid SPI data mode {} (must be 0-3)", v),
            Self::InvalidCsPolarity(v) => write!(f, "invalid SPI chip select polarity {}", v),
            Self::TransferTooLarge(len) => {
                write!(f, "transfer of {} bytes exceeds buffer size limit", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
