//! SPI0 register layout
//!
//! Offsets and CS register bits of the BCM283x SPI0 block, as far as the
//! configuration surface touches them.

use bitflags::bitflags;

/// SPI0 base address on BCM2835 (ARM physical address)
pub const SPI0_BASE_BCM2835: usize = 0x2020_4000;
/// SPI0 base address on BCM2836 and BCM2837
pub const SPI0_BASE_BCM2836: usize = 0x3F20_4000;
/// SPI0 base address on BCM2711
pub const SPI0_BASE_BCM2711: usize = 0xFE20_4000;

/// Control and Status
pub const CS: usize = 0x00;
/// TX and RX FIFOs
pub const FIFO: usize = 0x04;
/// Clock divider
pub const CLK: usize = 0x08;
/// Data length
pub const DLEN: usize = 0x0C;
/// LoSSI mode TOH
pub const LTOH: usize = 0x10;
/// DMA DREQ controls
pub const DC: usize = 0x14;

/// Mask of the divider field in the CLK register
pub const CLK_CDIV_MASK: u32 = 0xFFFF;

bitflags! {
    /// CS register bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CsFlags: u32 {
        /// Chip select line (2-bit field)
        const CS_MASK  = 0b11;
        /// Clock phase
        const CPHA     = 1 << 2;
        /// Clock polarity
        const CPOL     = 1 << 3;
        /// Clear TX FIFO
        const CLEAR_TX = 1 << 4;
        /// Clear RX FIFO
        const CLEAR_RX = 1 << 5;
        /// Chip select polarity
        const CSPOL    = 1 << 6;
        /// Transfer active
        const TA       = 1 << 7;
        /// Transfer done
        const DONE     = 1 << 16;
        /// CS0 polarity
        const CSPOL0   = 1 << 21;
        /// CS1 polarity
        const CSPOL1   = 1 << 22;
        /// CS2 polarity
        const CSPOL2   = 1 << 23;

        /// Data mode field
        const MODE = Self::CPOL.bits() | Self::CPHA.bits();
        /// Every chip select polarity bit
        const CSPOL_ALL = Self::CSPOL0.bits() | Self::CSPOL1.bits() | Self::CSPOL2.bits();
        /// Both FIFO clear bits
        const CLEAR = Self::CLEAR_TX.bits() | Self::CLEAR_RX.bits();
    }
}

impl Default for CsFlags {
    fn default() -> Self {
        CsFlags::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_offsets() {
        // BCM2835 ARM Peripherals, section 10.5: one 32-bit word per register
        assert_eq!([CS, FIFO, CLK, DLEN, LTOH, DC], [0x00, 0x04, 0x08, 0x0C, 0x10, 0x14]);
        assert_eq!(SPI0_BASE_BCM2835 - 0x2000_0000, 0x20_4000);
        assert_eq!(SPI0_BASE_BCM2836 - 0x3F00_0000, 0x20_4000);
        assert_eq!(SPI0_BASE_BCM2711 - 0xFE00_0000, 0x20_4000);
    }

    #[test]
    fn test_cs_bit_positions() {
        assert_eq!(CsFlags::CS_MASK.bits(), 0b11);
        assert_eq!(CsFlags::CPHA.bits(), 1 << 2);
        assert_eq!(CsFlags::CPOL.bits(), 1 << 3);
        assert_eq!(CsFlags::CLEAR.bits(), 0b11 << 4);
        assert_eq!(CsFlags::CSPOL.bits(), 1 << 6);
        assert_eq!(CsFlags::TA.bits(), 1 << 7);
        assert_eq!(CsFlags::DONE.bits(), 1 << 16);
        assert_eq!(CsFlags::CSPOL_ALL.bits(), 0b111 << 21);
        assert_eq!(CsFlags::MODE.bits(), 0b11 << 2);
    }

    #[test]
    fn test_fields_do_not_overlap() {
        let fields = [
            CsFlags::CS_MASK,
            CsFlags::MODE,
            CsFlags::CLEAR,
            CsFlags::CSPOL,
            CsFlags::TA,
            CsFlags::DONE,
            CsFlags::CSPOL_ALL,
        ];
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
        assert_eq!(CLK_CDIV_MASK, 0xFFFF);
    }
}
