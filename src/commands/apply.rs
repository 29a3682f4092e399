//! Apply a bus configuration to the emulated controller

use std::path::Path;

use crate::error::CommandError;
use bcm283x_spi_core::config::{format_speed, BusConfig};
use bcm283x_spi_core::control::{dispatch, SpiControl};
use bcm283x_spi_dummy::DummySpi;

/// Load `file`, apply every request in it and print the register state
pub fn run_apply(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = BusConfig::from_toml_file(file).map_err(|source| CommandError::Config {
        path: file.display().to_string(),
        source,
    })?;

    let mut spi = DummySpi::new();
    apply_config(&mut spi, &config)?;

    println!("Applied {}", file.display());
    println!("  CS  = 0x{:08X}", spi.cs_register());
    println!(
        "  CLK = 0x{:08X} ({} on the bus)",
        spi.clk_register(),
        format_speed(spi.clock_divider().bus_speed_hz())
    );
    println!(
        "  bit order {:?}, mode {}, CS {:?}",
        spi.bit_order(),
        spi.data_mode().as_raw(),
        spi.cs_polarity()
    );
    Ok(())
}

/// Send each request of `config` to `ctrl` in code order
fn apply_config<C: SpiControl + ?Sized>(
    ctrl: &mut C,
    config: &BusConfig,
) -> Result<(), CommandError> {
    for request in config.requests() {
        dispatch(ctrl, request)?;
    }
    log::info!("Applied bus configuration ({})", format_speed(config.speed));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcm283x_spi_core::spi::{BitOrder, ChipSelectPolarity, DataMode};

    #[test]
    fn test_apply_config() {
        let toml = r#"
[bus]
bit_order = "lsb-first"
mode = 2
speed = "2 MHz"
cs_polarity = "active-high"
"#;
        let config = BusConfig::from_toml_str(toml).unwrap();

        let mut spi = DummySpi::new();
        apply_config(&mut spi, &config).unwrap();

        assert_eq!(spi.bit_order(), BitOrder::LsbFirst);
        assert_eq!(spi.data_mode(), DataMode::Mode2);
        assert_eq!(spi.cs_polarity(), ChipSelectPolarity::ActiveHigh);
        assert_eq!(spi.clk_register(), 250);
    }

    #[test]
    fn test_apply_rejects_out_of_range_speed() {
        let config = BusConfig {
            speed: 1.0,
            ..BusConfig::default()
        };
        let mut spi = DummySpi::new();
        assert!(apply_config(&mut spi, &config).is_err());
        assert_eq!(spi.clk_register(), 0);
    }
}
