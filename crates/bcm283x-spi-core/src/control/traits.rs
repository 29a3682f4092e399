//! Control trait definitions

use super::ControlRequest;
use crate::error::Result;
use crate::spi::{clock_divider, BitOrder, ChipSelectPolarity, ClockDivider, DataMode};

/// SPI controller configuration trait
///
/// Implemented by whatever programs the hardware: a memory-mapped SPI0
/// block, an emulation, or a driver proxy. Each setter changes exactly one
/// aspect of the bus. Values arrive already validated, so implementations
/// only fail for their own reasons (e.g. the device went away).
///
/// Callers are expected to serialize access; every setter takes
/// `&mut self`.
pub trait SpiControl {
    /// Program the bit order
    fn set_bit_order(&mut self, order: BitOrder) -> Result<()>;

    /// Program the CPOL/CPHA field
    fn set_data_mode(&mut self, mode: DataMode) -> Result<()>;

    /// Program the CLK register
    fn set_clock_divider(&mut self, divider: ClockDivider) -> Result<()>;

    /// Program the chip select polarity
    fn set_cs_polarity(&mut self, polarity: ChipSelectPolarity) -> Result<()>;
}

impl<T: SpiControl + ?Sized> SpiControl for &mut T {
    fn set_bit_order(&mut self, order: BitOrder) -> Result<()> {
        (**self).set_bit_order(order)
    }

    fn set_data_mode(&mut self, mode: DataMode) -> Result<()> {
        (**self).set_data_mode(mode)
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) -> Result<()> {
        (**self).set_clock_divider(divider)
    }

    fn set_cs_polarity(&mut self, polarity: ChipSelectPolarity) -> Result<()> {
        (**self).set_cs_polarity(polarity)
    }
}

/// Apply one control request to a controller
///
/// Speed requests are converted with [`clock_divider`] first. If the speed
/// is out of range the error is returned and the controller is not touched.
pub fn dispatch<C: SpiControl + ?Sized>(ctrl: &mut C, request: ControlRequest) -> Result<()> {
    match request {
        ControlRequest::SetBitOrder(order) => ctrl.set_bit_order(order)?,
        ControlRequest::SetDataMode(mode) => ctrl.set_data_mode(mode)?,
        ControlRequest::SetSpeed(hz) => {
            let divider = clock_divider(hz).map_err(|e| {
                log::warn!("dispatch: Rejected speed {} Hz: {}", hz, e);
                e
            })?;
            log::trace!(
                "dispatch: {} Hz -> divider {} ({} Hz on the bus)",
                hz,
                divider.raw(),
                divider.bus_speed_hz()
            );
            ctrl.set_clock_divider(divider)?
        }
        ControlRequest::SetCsPolarity(polarity) => ctrl.set_cs_polarity(polarity)?,
    }
    log::debug!("dispatch: Applied request {} ({})", request.code(), request);
    Ok(())
}
