//! Divider and speed table commands

use crate::error::CommandError;
use bcm283x_spi_core::config::format_speed;
use bcm283x_spi_core::spi::clock_divider;

/// Print the clock divider for a single speed
pub fn run_divider(speed: f64) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", divider_report(speed)?);
    Ok(())
}

/// Describe the divider for `speed`, or report why it cannot be programmed
fn divider_report(speed: f64) -> Result<String, CommandError> {
    let divider = clock_divider(speed).map_err(|e| {
        log::error!("Cannot program {}: {}", format_speed(speed), e);
        CommandError::from(e)
    })?;

    Ok(format!(
        "Requested speed: {}\nClock divider:   {} (0x{:04X})\nBus speed:       {}\n",
        format_speed(speed),
        divider.raw(),
        divider.raw(),
        format_speed(divider.bus_speed_hz())
    ))
}

/// Print dividers for `steps` speeds spaced geometrically from `min` to `max`
pub fn run_table(min: f64, max: f64, steps: u32) -> Result<(), Box<dyn std::error::Error>> {
    let speeds = table_speeds(min, max, steps)?;

    println!("{:>16} {:>8} {:>16}", "Requested", "Divider", "Bus speed");
    println!("{}", "-".repeat(42));

    for speed in speeds {
        match clock_divider(speed) {
            Ok(divider) => println!(
                "{:>16} {:>8} {:>16}",
                format_speed(speed),
                divider.raw(),
                format_speed(divider.bus_speed_hz())
            ),
            Err(e) => println!("{:>16} {:>8} {:>16}", format_speed(speed), "-", e),
        }
    }
    Ok(())
}

/// Speeds for the table rows
///
/// The last row is pinned to `max` so rounding in the ratio cannot push it
/// out of range.
fn table_speeds(min: f64, max: f64, steps: u32) -> Result<Vec<f64>, CommandError> {
    // Negated so NaN bounds are rejected
    if steps == 0 || !(min > 0.0) || !(max >= min) {
        return Err(CommandError::InvalidRange { min, max, steps });
    }
    if steps == 1 {
        return Ok(vec![min]);
    }

    let ratio = (max / min).powf(1.0 / (steps - 1) as f64);
    let mut speeds: Vec<f64> = (0..steps - 1).map(|i| min * ratio.powi(i as i32)).collect();
    speeds.push(max);
    Ok(speeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm283x_spi_core::Error;

    #[test]
    fn test_divider_report() {
        let report = divider_report(1_000_000.0).unwrap();
        assert!(report.contains("Clock divider:   500 (0x01F4)"));
        assert!(report.contains("Bus speed:       500 kHz"));
    }

    #[test]
    fn test_divider_report_out_of_range() {
        for speed in [1.0, 3_814.0, 200_000_000.0, f64::NAN] {
            match divider_report(speed) {
                Err(CommandError::Spi(Error::SpeedOutOfRange)) => {}
                other => panic!("speed {}: unexpected {:?}", speed, other),
            }
        }
        assert!(run_divider(1.0).is_err());
    }

    #[test]
    fn test_table_speeds_endpoints() {
        let speeds = table_speeds(1_000.0, 1_000_000.0, 4).unwrap();
        assert_eq!(speeds.len(), 4);
        assert_eq!(speeds[0], 1_000.0);
        assert!((speeds[1] - 10_000.0).abs() < 1e-6);
        assert!((speeds[2] - 100_000.0).abs() < 1e-3);
        assert_eq!(speeds[3], 1_000_000.0);
    }

    #[test]
    fn test_table_speeds_single_row() {
        assert_eq!(table_speeds(5_000.0, 9_000.0, 1).unwrap(), vec![5_000.0]);
    }

    #[test]
    fn test_table_speeds_rejects_bad_range() {
        assert!(table_speeds(10.0, 1.0, 4).is_err());
        assert!(table_speeds(0.0, 1.0, 4).is_err());
        assert!(table_speeds(1.0, 10.0, 0).is_err());
        assert!(table_speeds(f64::NAN, 10.0, 2).is_err());
    }
}
