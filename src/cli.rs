//! CLI argument parsing

use bcm283x_spi_core::config::parse_speed;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a speed argument such as "1MHz", "400 kHz" or "250000"
fn parse_speed_arg(s: &str) -> Result<f64, String> {
    parse_speed(s)
}

#[derive(Parser)]
#[command(name = "bcm283x-spi")]
#[command(author, version, about = "BCM283x SPI control surface tool", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the clock divider for a bus speed
    Divider {
        /// Bus speed (Hz, or with a kHz/MHz suffix)
        #[arg(value_parser = parse_speed_arg)]
        speed: f64,
    },

    /// Print clock dividers for a range of bus speeds
    Table {
        /// Lowest speed in the table
        #[arg(long, default_value = "3814.69", value_parser = parse_speed_arg)]
        min: f64,

        /// Highest speed in the table
        #[arg(long, default_value = "125MHz", value_parser = parse_speed_arg)]
        max: f64,

        /// Number of rows (speeds are spaced geometrically)
        #[arg(long, default_value_t = 16)]
        steps: u32,
    },

    /// Decode a raw control request code and argument
    Decode {
        /// Request code (0-3)
        code: u32,

        /// Request argument (integer, or speed for request 2)
        arg: String,
    },

    /// Apply a bus configuration file to the emulated controller
    Apply {
        /// Bus configuration file (TOML format)
        file: PathBuf,
    },

    /// List the supported control requests
    ListRequests,
}
