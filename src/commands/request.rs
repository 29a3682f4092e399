//! Control request decoding command

use crate::error::CommandError;
use bcm283x_spi_core::config::{format_speed, parse_speed};
use bcm283x_spi_core::control::{ControlRequest, RequestArg};
use bcm283x_spi_core::spi::clock_divider;

/// Decode a raw request and print what it would do
pub fn run_decode(code: u32, arg: &str) -> Result<(), Box<dyn std::error::Error>> {
    let request =
        ControlRequest::decode(code, parse_request_arg(arg)?).map_err(CommandError::from)?;

    println!("Request {}: {}", request.code(), request);
    if let ControlRequest::SetSpeed(hz) = request {
        match clock_divider(hz) {
            Ok(divider) => println!(
                "  Clock divider {} -> {} on the bus",
                divider.raw(),
                format_speed(divider.bus_speed_hz())
            ),
            Err(e) => {
                println!("  {}", e);
                return Err(CommandError::from(e).into());
            }
        }
    }
    Ok(())
}

/// Parse a request argument: a plain integer, or a (possibly suffixed) speed
fn parse_request_arg(arg: &str) -> Result<RequestArg, CommandError> {
    if let Ok(value) = arg.trim().parse::<u32>() {
        return Ok(RequestArg::Int(value));
    }
    parse_speed(arg)
        .map(RequestArg::Hz)
        .map_err(|reason| CommandError::InvalidArgument {
            arg: arg.to_string(),
            reason,
        })
}
