//! SPI speed and buffer constants
//!
//! The SPI0 block runs from the 250 MHz core clock, which can be divided by
//! any even number from 2 to 65536. Odd values round down and 0 (or 1) acts
//! as 65536, giving a bus speed range of about 3.814 kHz to 125 MHz.

/// Maximum size for transmit and receive buffers
pub const BUFFER_SIZE_MAX: usize = 1024;

/// Hz per kHz
pub const KHZ: f64 = 1_000.0;

/// Hz per MHz
pub const MHZ: f64 = 1_000_000.0;

/// Slowest supported bus speed in Hz
pub const MIN_SPEED: f64 = 3814.69;

/// Fastest supported bus speed in Hz
pub const MAX_SPEED: f64 = 125.0 * MHZ;

/// Reference clock feeding the divider in Hz
pub const REFERENCE_CLOCK: f64 = 2.0 * MAX_SPEED;

/// Convert kHz to Hz
#[inline]
pub fn khz(speed: f64) -> f64 {
    speed * KHZ
}

/// Convert MHz to Hz
#[inline]
pub fn mhz(speed: f64) -> f64 {
    speed * MHZ
}
