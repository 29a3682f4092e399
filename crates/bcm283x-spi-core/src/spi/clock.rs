//! Clock divider calculation
//!
//! The CLK register holds a 16-bit divider applied to the reference clock.
//! Only even values are meaningful: the hardware rounds odd values down,
//! and treats 0 as 65536.

use super::consts::{MAX_SPEED, MIN_SPEED, REFERENCE_CLOCK};
use super::regs::CLK_CDIV_MASK;
use crate::error::{Error, Result};

/// Value programmed into the CLK register
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockDivider(u16);

impl ClockDivider {
    /// Compute the divider for a bus speed in Hz
    ///
    /// Same as [`clock_divider`].
    pub fn for_speed(speed: f64) -> Result<Self> {
        clock_divider(speed)
    }

    /// Decode a divider read back from the CLK register
    ///
    /// Bits above the divider field are ignored and an odd value is rounded
    /// down, as the hardware does.
    pub const fn from_register(value: u32) -> Self {
        Self((value & CLK_CDIV_MASK) as u16 & !1)
    }

    /// Raw register value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Divisor the hardware actually applies (0 reads as 65536)
    pub const fn effective(self) -> u32 {
        match self.0 & !1 {
            0 => 65536,
            d => d as u32,
        }
    }

    /// Bus speed in Hz produced by this divider
    pub fn bus_speed_hz(self) -> f64 {
        REFERENCE_CLOCK / self.effective() as f64
    }
}

impl From<ClockDivider> for u32 {
    fn from(divider: ClockDivider) -> u32 {
        divider.0 as u32
    }
}

/// Convert a bus speed in Hz to a clock divider
///
/// Speeds outside `[MIN_SPEED, MAX_SPEED]` (bounds included) are rejected,
/// as are NaN and negative values. Otherwise the ratio between the reference
/// clock and the requested speed is rounded to the nearest integer with
/// halves rounding up, then doubled and truncated to the 16-bit register
/// width. The result may wrap to 0, which the hardware reads as 65536.
pub fn clock_divider(speed: f64) -> Result<ClockDivider> {
    // Written so that NaN fails the check
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(Error::SpeedOutOfRange);
    }

    let ideal = REFERENCE_CLOCK / speed;
    let whole = ideal as u32;
    let rounded = whole + u32::from(ideal - whole as f64 >= 0.5);
    let divider = (rounded << 1) & CLK_CDIV_MASK;

    Ok(ClockDivider(divider as u16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spi::consts::{khz, mhz};

    fn expected(speed: f64) -> u16 {
        let ideal = REFERENCE_CLOCK / speed;
        let mut rounded = ideal as u32;
        if ideal - rounded as f64 >= 0.5 {
            rounded += 1;
        }
        ((rounded << 1) & 0xFFFF) as u16
    }

    #[test]
    fn test_known_speeds() {
        assert_eq!(clock_divider(MAX_SPEED).unwrap().raw(), 4);
        assert_eq!(clock_divider(mhz(1.0)).unwrap().raw(), 500);
        assert_eq!(clock_divider(mhz(2.0)).unwrap().raw(), 250);
        assert_eq!(clock_divider(mhz(10.0)).unwrap().raw(), 50);
        assert_eq!(clock_divider(khz(500.0)).unwrap().raw(), 1000);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(clock_divider(MIN_SPEED).is_ok());
        assert!(clock_divider(MAX_SPEED).is_ok());
        assert!(clock_divider(125_000_000.0).is_ok());
        assert!(clock_divider(3814.69).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(clock_divider(1.0), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(3814.68), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(125_000_000.5), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(mhz(250.0)), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(0.0), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(-mhz(1.0)), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(f64::NAN), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(f64::INFINITY), Err(Error::SpeedOutOfRange));
        assert_eq!(clock_divider(f64::NEG_INFINITY), Err(Error::SpeedOutOfRange));
    }

    #[test]
    fn test_half_rounds_up() {
        // 250 MHz / 100 MHz = 2.5
        assert_eq!(clock_divider(mhz(100.0)).unwrap().raw(), 3 << 1);
        // 250 MHz / 20 MHz = 12.5
        assert_eq!(clock_divider(mhz(20.0)).unwrap().raw(), 13 << 1);
        // 250 MHz / 4 MHz = 62.5
        assert_eq!(clock_divider(mhz(4.0)).unwrap().raw(), 63 << 1);
    }

    #[test]
    fn test_below_half_rounds_down() {
        // 250 MHz / 32 MHz = 7.8125 -> 8, 250 MHz / 30 MHz = 8.33 -> 8
        assert_eq!(clock_divider(mhz(32.0)).unwrap().raw(), 16);
        assert_eq!(clock_divider(mhz(30.0)).unwrap().raw(), 16);
    }

    #[test]
    fn test_mask_can_wrap_to_zero() {
        // Ratio of exactly 32768 doubles to 65536, which wraps
        let divider = clock_divider(REFERENCE_CLOCK / 32768.0).unwrap();
        assert_eq!(divider.raw(), 0);
        assert_eq!(divider.effective(), 65536);

        // The slowest speed rounds to 65536 and wraps as well
        assert_eq!(clock_divider(MIN_SPEED).unwrap().raw(), 0);
    }

    #[test]
    fn test_matches_formula_across_range() {
        let mut speed = MIN_SPEED;
        while speed <= MAX_SPEED {
            let divider = clock_divider(speed).unwrap();
            assert_eq!(divider.raw(), expected(speed), "speed {}", speed);
            assert_eq!(divider.raw() & 1, 0, "speed {}", speed);
            speed *= 1.07;
        }
    }

    #[test]
    fn test_idempotent() {
        for speed in [MIN_SPEED, khz(100.0), mhz(3.3), MAX_SPEED] {
            assert_eq!(clock_divider(speed), clock_divider(speed));
        }
    }

    #[test]
    fn test_for_speed_matches_function() {
        assert_eq!(ClockDivider::for_speed(mhz(8.0)), clock_divider(mhz(8.0)));
    }

    #[test]
    fn test_from_register() {
        assert_eq!(ClockDivider::from_register(500).raw(), 500);
        assert_eq!(ClockDivider::from_register(501).raw(), 500);
        assert_eq!(ClockDivider::from_register(0xABCD_0064).raw(), 0x64);
        assert_eq!(ClockDivider::from_register(1).effective(), 65536);
    }

    #[test]
    fn test_bus_speed() {
        let divider = ClockDivider::from_register(250);
        assert_eq!(divider.bus_speed_hz(), mhz(1.0));
        assert_eq!(ClockDivider::from_register(0).bus_speed_hz(), REFERENCE_CLOCK / 65536.0);
    }
}
