//! List commands implementation

use bcm283x_spi_core::config::format_speed;
use bcm283x_spi_core::control::{SET_BIT_ORDER, SET_CS_POLARITY, SET_DATA_MODE, SET_SPEED};
use bcm283x_spi_core::spi::{BUFFER_SIZE_MAX, MAX_SPEED, MIN_SPEED, REFERENCE_CLOCK};

/// List the control requests and their argument domains
pub fn list_requests() {
    println!("Supported control requests:");
    println!();
    println!("{:<6} {:<16} {}", "Code", "Request", "Argument");
    println!("{}", "-".repeat(60));
    println!(
        "{:<6} {:<16} {}",
        SET_BIT_ORDER, "set-bit-order", "0 = LSB first, 1 = MSB first"
    );
    println!("{:<6} {:<16} {}", SET_DATA_MODE, "set-data-mode", "0-3 (2 * CPOL + CPHA)");
    println!(
        "{:<6} {:<16} {} to {}",
        SET_SPEED,
        "set-speed",
        format_speed(MIN_SPEED),
        format_speed(MAX_SPEED)
    );
    println!(
        "{:<6} {:<16} {}",
        SET_CS_POLARITY, "set-cs-polarity", "0 = active low, 1 = active high"
    );
    println!();
    println!("Reference clock:   {}", format_speed(REFERENCE_CLOCK));
    println!("Max transfer size: {} bytes", BUFFER_SIZE_MAX);
}
