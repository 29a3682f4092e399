//! Control surface of the SPI driver
//!
//! The driver receives configuration requests as a numeric operation code
//! plus an argument. This module decodes them into typed
//! [`ControlRequest`]s and applies them to anything implementing
//! [`SpiControl`].

mod request;
mod traits;

pub use request::{ControlRequest, RequestArg};
pub use traits::{dispatch, SpiControl};

/// Request code for changing the bit order
pub const SET_BIT_ORDER: u32 = 0;
/// Request code for changing the data mode
pub const SET_DATA_MODE: u32 = 1;
/// Request code for changing the bus speed
pub const SET_SPEED: u32 = 2;
/// Request code for changing the chip select polarity
pub const SET_CS_POLARITY: u32 = 3;
