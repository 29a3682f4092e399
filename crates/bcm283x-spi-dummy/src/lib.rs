//! bcm283x-spi-dummy - In-memory SPI0 register emulation
//!
//! This crate provides a controller that keeps the SPI0 CS and CLK
//! registers in memory. It implements [`SpiControl`], so the control
//! surface can be exercised and inspected without real hardware.

#![cfg_attr(not(feature = "std"), no_std)]

use bcm283x_spi_core::control::SpiControl;
use bcm283x_spi_core::error::Result;
use bcm283x_spi_core::spi::regs::{self, CsFlags, CLK_CDIV_MASK};
use bcm283x_spi_core::spi::{
    check_transfer_len, reverse_bits, BitOrder, ChipSelectPolarity, ClockDivider, DataMode,
};

/// Emulated SPI0 register file
///
/// Only the registers the configuration surface touches are modeled. The
/// bit order has no register bit on this block and is kept alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummySpi {
    cs: CsFlags,
    clk: u32,
    bit_order: BitOrder,
    writes: usize,
}

impl Default for DummySpi {
    fn default() -> Self {
        Self::new()
    }
}

impl DummySpi {
    /// Create a controller in its reset state
    ///
    /// CS reads zero and CLK reads zero (divide by 65536), MSB first.
    pub const fn new() -> Self {
        Self {
            cs: CsFlags::empty(),
            clk: 0,
            bit_order: BitOrder::MsbFirst,
            writes: 0,
        }
    }

    /// Read a register by offset
    ///
    /// Unmodeled registers read as zero.
    pub fn read_reg(&self, offset: usize) -> u32 {
        match offset {
            regs::CS => self.cs.bits(),
            regs::CLK => self.clk,
            _ => 0,
        }
    }

    /// Current CS register value
    pub fn cs_register(&self) -> u32 {
        self.read_reg(regs::CS)
    }

    /// Current CLK register value
    pub fn clk_register(&self) -> u32 {
        self.read_reg(regs::CLK)
    }

    /// Number of register writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Bit order in effect
    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Data mode decoded from the CS register
    pub fn data_mode(&self) -> DataMode {
        DataMode::from_cpol_cpha(self.cs.contains(CsFlags::CPOL), self.cs.contains(CsFlags::CPHA))
    }

    /// Chip select polarity decoded from the CS register
    pub fn cs_polarity(&self) -> ChipSelectPolarity {
        if self.cs.contains(CsFlags::CSPOL) {
            ChipSelectPolarity::ActiveHigh
        } else {
            ChipSelectPolarity::ActiveLow
        }
    }

    /// Divider decoded from the CLK register
    pub fn clock_divider(&self) -> ClockDivider {
        ClockDivider::from_register(self.clk)
    }

    /// Emulate a loopback transfer (MOSI wired to MISO)
    ///
    /// `rx` receives the bytes as the hardware shifts them onto the wire,
    /// which is MSB first. With LSB-first bit order each byte is reversed
    /// first. Both buffers must fit the transfer buffer limit; the shorter
    /// one bounds the transfer.
    pub fn loopback(&mut self, tx: &[u8], rx: &mut [u8]) -> Result<usize> {
        check_transfer_len(tx.len())?;
        check_transfer_len(rx.len())?;
        let len = tx.len().min(rx.len());
        rx[..len].copy_from_slice(&tx[..len]);
        if self.bit_order.needs_reversal() {
            reverse_bits(&mut rx[..len]);
        }
        log::trace!("dummy_spi: Looped back {} bytes", len);
        Ok(len)
    }

    fn write_cs(&mut self, value: CsFlags) {
        log::trace!("dummy_spi: CS <- 0x{:08X}", value.bits());
        self.cs = value;
        self.writes += 1;
    }

    fn write_clk(&mut self, value: u32) {
        log::trace!("dummy_spi: CLK <- 0x{:08X}", value);
        self.clk = value & CLK_CDIV_MASK;
        self.writes += 1;
    }
}

impl SpiControl for DummySpi {
    fn set_bit_order(&mut self, order: BitOrder) -> Result<()> {
        log::debug!("dummy_spi: Bit order {:?}", order);
        self.bit_order = order;
        Ok(())
    }

    fn set_data_mode(&mut self, mode: DataMode) -> Result<()> {
        log::debug!("dummy_spi: Data mode {}", mode.as_raw());
        let cs = (self.cs - CsFlags::MODE) | mode.cs_bits();
        self.write_cs(cs);
        Ok(())
    }

    fn set_clock_divider(&mut self, divider: ClockDivider) -> Result<()> {
        log::debug!("dummy_spi: Clock divider {}", divider.raw());
        self.write_clk(u32::from(divider));
        Ok(())
    }

    fn set_cs_polarity(&mut self, polarity: ChipSelectPolarity) -> Result<()> {
        log::debug!("dummy_spi: CS polarity {:?}", polarity);
        let cs = (self.cs - (CsFlags::CSPOL | CsFlags::CSPOL_ALL)) | polarity.cs_bits();
        self.write_cs(cs);
        Ok(())
    }
}
