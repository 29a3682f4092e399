//! Control request codec

use core::fmt;

use super::{SET_BIT_ORDER, SET_CS_POLARITY, SET_DATA_MODE, SET_SPEED};
use crate::error::{Error, Result};
use crate::spi::{BitOrder, ChipSelectPolarity, DataMode};

/// Raw argument of a control request as it crosses the driver boundary
///
/// Enum-valued requests carry an integer, speed requests a frequency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RequestArg {
    /// Integer argument (bit order, data mode, chip select polarity)
    Int(u32),
    /// Frequency argument in Hz
    Hz(f64),
}

/// A single configuration request
///
/// Exactly one aspect of the bus is changed per request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlRequest {
    /// Change the bit order
    SetBitOrder(BitOrder),
    /// Change the data mode
    SetDataMode(DataMode),
    /// Change the bus speed (Hz)
    SetSpeed(f64),
    /// Change the chip select polarity
    SetCsPolarity(ChipSelectPolarity),
}

impl ControlRequest {
    /// Stable operation code of this request
    pub const fn code(&self) -> u32 {
        match self {
            Self::SetBitOrder(_) => SET_BIT_ORDER,
            Self::SetDataMode(_) => SET_DATA_MODE,
            Self::SetSpeed(_) => SET_SPEED,
            Self::SetCsPolarity(_) => SET_CS_POLARITY,
        }
    }

    /// Argument of this request in its boundary encoding
    pub fn arg(&self) -> RequestArg {
        match *self {
            Self::SetBitOrder(order) => RequestArg::Int(order.as_raw()),
            Self::SetDataMode(mode) => RequestArg::Int(mode.as_raw()),
            Self::SetSpeed(hz) => RequestArg::Hz(hz),
            Self::SetCsPolarity(polarity) => RequestArg::Int(polarity.as_raw()),
        }
    }

    /// Decode a raw request code and argument
    ///
    /// Integer arguments are accepted for speed requests and widened to Hz.
    /// A frequency given to an enum-valued request is rejected with
    /// [`Error::InvalidArgument`] unless it is a whole number. Speeds are not
    /// range checked here; that happens when the divider is computed.
    pub fn decode(code: u32, arg: RequestArg) -> Result<Self> {
        match code {
            SET_BIT_ORDER => Ok(Self::SetBitOrder(BitOrder::try_from(
                int_arg(arg).ok_or(Error::InvalidArgument(code))?,
            )?)),
            SET_DATA_MODE => Ok(Self::SetDataMode(DataMode::try_from(
                int_arg(arg).ok_or(Error::InvalidArgument(code))?,
            )?)),
            SET_SPEED => Ok(Self::SetSpeed(match arg {
                RequestArg::Int(hz) => hz as f64,
                RequestArg::Hz(hz) => hz,
            })),
            SET_CS_POLARITY => Ok(Self::SetCsPolarity(ChipSelectPolarity::try_from(
                int_arg(arg).ok_or(Error::InvalidArgument(code))?,
            )?)),
            _ => Err(Error::UnknownRequest(code)),
        }
    }
}

/// Integer view of an argument, if it has one
fn int_arg(arg: RequestArg) -> Option<u32> {
    match arg {
        RequestArg::Int(v) => Some(v),
        RequestArg::Hz(hz) if hz >= 0.0 && hz <= u32::MAX as f64 && hz == (hz as u32) as f64 => {
            Some(hz as u32)
        }
        RequestArg::Hz(_) => None,
    }
}

impl fmt::Display for ControlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetBitOrder(BitOrder::LsbFirst) => write!(f, "set bit order: LSB first"),
            Self::SetBitOrder(BitOrder::MsbFirst) => write!(f, "set bit order: MSB first"),
            Self::SetDataMode(mode) => write!(
                f,
                "set data mode: {} (CPOL={}, CPHA={})",
                mode.as_raw(),
                mode.cpol() as u8,
                mode.cpha() as u8
            ),
            Self::SetSpeed(hz) => write!(f, "set speed: {} Hz", hz),
            Self::SetCsPolarity(ChipSelectPolarity::ActiveLow) => {
                write!(f, "set chip select polarity: active low")
            }
            Self::SetCsPolarity(ChipSelectPolarity::ActiveHigh) => {
                write!(f, "set chip select polarity: active high")
            }
        }
    }
}
