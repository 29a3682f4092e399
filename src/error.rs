//! Error types for the command-line front end

use bcm283x_spi_core::config::ConfigError;
use thiserror::Error;

/// Errors raised by command implementations
#[derive(Debug, Error)]
pub enum CommandError {
    /// Control surface rejected a value
    #[error("{0}")]
    Spi(#[from] bcm283x_spi_core::Error),

    /// Bus configuration could not be loaded
    #[error("Failed to load {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: ConfigError,
    },

    /// Speed table bounds are unusable
    #[error("Invalid speed range: {min} Hz to {max} Hz in {steps} steps")]
    InvalidRange { min: f64, max: f64, steps: u32 },

    /// Command argument could not be parsed
    #[error("Invalid argument {arg:?}: {reason}")]
    InvalidArgument { arg: String, reason: String },
}
