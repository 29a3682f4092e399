//! bcm283x-spi - BCM283x SPI control surface tool
//!
//! Computes clock dividers, decodes raw control requests and applies bus
//! configurations to an emulated SPI0 block.
//!
//! # Architecture
//!
//! - `bcm283x-spi-core` holds the configuration model, the clock divider
//!   calculator and the `SpiControl` trait
//! - `bcm283x-spi-dummy` emulates the SPI0 CS and CLK registers
//! - this binary wires both to the command line

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logger at the level chosen on the command line
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(cli.verbose)),
    )
    .init();

    match cli.command {
        Commands::Divider { speed } => commands::run_divider(speed),
        Commands::Table { min, max, steps } => commands::run_table(min, max, steps),
        Commands::Decode { code, arg } => commands::run_decode(code, &arg),
        Commands::Apply { file } => commands::run_apply(&file),
        Commands::ListRequests => {
            commands::list_requests();
            Ok(())
        }
    }
}

/// Default log filter for a `-v` count; `RUST_LOG` still takes precedence
fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
