//! CLI command implementations
//!
//! Commands that only compute (`divider`, `table`, `decode`) use the core
//! crate directly. `apply` drives the emulated controller from
//! `bcm283x-spi-dummy`, so the register values a configuration produces
//! can be inspected without hardware.

mod apply;
mod divider;
mod list;
mod request;

pub use apply::run_apply;
pub use divider::{run_divider, run_table};
pub use list::list_requests;
pub use request::run_decode;
