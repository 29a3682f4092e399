//! SPI bus parameters and their BCM283x encodings
//!
//! This module provides the configuration model for the SPI0 block (bit
//! order, data mode, chip select polarity), the clock divider calculator,
//! and the register layout those values are written to.

mod bit_order;
mod clock;
pub mod consts;
mod cs_polarity;
mod data_mode;
pub mod regs;

pub use bit_order::{reverse_bits, BitOrder};
pub use clock::{clock_divider, ClockDivider};
pub use consts::*;
pub use cs_polarity::ChipSelectPolarity;
pub use data_mode::DataMode;

use crate::error::{Error, Result};

/// Check a transfer length against [`BUFFER_SIZE_MAX`]
///
/// The configuration surface never calls this; it is provided for the
/// transfer path, which owns the buffers.
pub fn check_transfer_len(len: usize) -> Result<()> {
    if len > BUFFER_SIZE_MAX {
        Err(Error::TransferTooLarge(len))
    } else {
        Ok(())
    }
}
