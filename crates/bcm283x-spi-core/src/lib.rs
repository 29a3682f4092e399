//! bcm283x-spi-core - Control surface for the BCM283x SPI controller
//!
//! This crate maps SPI bus parameters (bit order, data mode, chip select
//! polarity and bus speed) onto the encodings the BCM283x SPI0 block
//! understands. It is `no_std` compatible so the same code can run inside
//! a real-time driver and in host-side tooling.
//!
//! # Features
//!
//! - `std` - Enable standard library support and TOML bus configuration files
//!
//! # Example
//!
//! ```
//! use bcm283x_spi_core::spi::{clock_divider, mhz};
//!
//! let divider = clock_divider(mhz(1.0)).unwrap();
//! assert_eq!(divider.raw(), 500);
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod config;
pub mod control;
pub mod error;
pub mod spi;

pub use error::{Error, Result};
