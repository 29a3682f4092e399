//! Bus configuration files
//!
//! A bus configuration describes the four configurable aspects of the SPI
//! bus in TOML:
//!
//! ```toml
//! [bus]
//! bit_order = "msb-first"
//! mode = 0
//! speed = "1 MHz"
//! cs_polarity = "active-low"
//! ```
//!
//! Every field is optional. `speed` takes a number of Hz or a string with an
//! `Hz`, `kHz` or `MHz` suffix.

use std::format;
use std::fs;
use std::path::Path;
use std::string::{String, ToString};

use crate::control::ControlRequest;
use crate::error::Error;
use crate::spi::{clock_divider, BitOrder, ChipSelectPolarity, DataMode, KHZ, MHZ};

/// Speed used when a configuration does not name one
pub const DEFAULT_SPEED: f64 = MHZ;

/// Errors that can occur when loading a bus configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse the configuration file
    ParseError(String),
    /// A value parsed but is not usable on the bus
    Invalid(Error),
    /// I/O error
    IoError,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "failed to parse bus configuration: {}", msg),
            Self::Invalid(e) => write!(f, "invalid bus configuration: {}", e),
            Self::IoError => write!(f, "I/O error reading bus configuration"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<Error> for ConfigError {
    fn from(e: Error) -> Self {
        Self::Invalid(e)
    }
}

/// Settings for one SPI bus
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    /// Bit order
    pub bit_order: BitOrder,
    /// Data mode
    pub mode: DataMode,
    /// Bus speed in Hz
    #[serde(deserialize_with = "deserialize_speed")]
    pub speed: f64,
    /// Chip select polarity
    pub cs_polarity: ChipSelectPolarity,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            bit_order: BitOrder::default(),
            mode: DataMode::default(),
            speed: DEFAULT_SPEED,
            cs_polarity: ChipSelectPolarity::default(),
        }
    }
}

/// TOML file structure
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct BusConfigFile {
    #[serde(default)]
    bus: BusConfig,
}

/// Deserialize a speed given either as a number or as a suffixed string
fn deserialize_speed<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Int(u64),
        Float(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Int(n) => Ok(n as f64),
        NumOrStr::Float(n) => Ok(n),
        NumOrStr::Str(s) => parse_speed(&s).map_err(serde::de::Error::custom),
    }
}

/// Parse a speed string like "4 MHz", "400kHz" or "3814.69"
///
/// Suffixes are case-insensitive. A bare number is taken as Hz.
pub fn parse_speed(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let lower = s.to_lowercase();

    let (num_str, multiplier) = if let Some(n) = lower.strip_suffix("mhz") {
        (n.trim(), MHZ)
    } else if let Some(n) = lower.strip_suffix("khz") {
        (n.trim(), KHZ)
    } else if let Some(n) = lower.strip_suffix("hz") {
        (n.trim(), 1.0)
    } else {
        (lower.as_str(), 1.0)
    };

    let num: f64 = num_str.parse().map_err(|_| format!("invalid speed: {}", s))?;
    Ok(num * multiplier)
}

/// Format a speed in the largest unit that keeps it readable
pub fn format_speed(hz: f64) -> String {
    if hz >= MHZ {
        format!("{} MHz", hz / MHZ)
    } else if hz >= KHZ {
        format!("{} kHz", hz / KHZ)
    } else {
        format!("{} Hz", hz)
    }
}

impl BusConfig {
    /// Load a bus configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("config: Loading {}", path.display());
        let content = fs::read_to_string(path).map_err(|_| ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a bus configuration from a TOML string
    ///
    /// The speed is checked against the divider range so a bad file is
    /// reported before anything is programmed.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: BusConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(e.message().to_string()))?;
        file.bus.validate()?;
        Ok(file.bus)
    }

    /// Check that the configured speed can be programmed
    pub fn validate(&self) -> Result<(), Error> {
        clock_divider(self.speed).map(|_| ())
    }

    /// The control requests that apply this configuration, in code order
    pub fn requests(&self) -> [ControlRequest; 4] {
        [
            ControlRequest::SetBitOrder(self.bit_order),
            ControlRequest::SetDataMode(self.mode),
            ControlRequest::SetSpeed(self.speed),
            ControlRequest::SetCsPolarity(self.cs_polarity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed("1000").unwrap(), 1000.0);
        assert_eq!(parse_speed("3814.69").unwrap(), 3814.69);
        assert_eq!(parse_speed("1 MHz").unwrap(), 1_000_000.0);
        assert_eq!(parse_speed("1MHz").unwrap(), 1_000_000.0);
        assert_eq!(parse_speed("400 kHz").unwrap(), 400_000.0);
        assert_eq!(parse_speed("125mhz").unwrap(), 125_000_000.0);
        assert_eq!(parse_speed("50 Hz").unwrap(), 50.0);
        assert!(parse_speed("fast").is_err());
        assert!(parse_speed("MHz").is_err());
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(125_000_000.0), "125 MHz");
        assert_eq!(format_speed(400_000.0), "400 kHz");
        assert_eq!(format_speed(500.0), "500 Hz");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[bus]
bit_order = "lsb-first"
mode = 3
speed = "4 MHz"
cs_polarity = "active-high"
"#;
        let config = BusConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.bit_order, BitOrder::LsbFirst);
        assert_eq!(config.mode, DataMode::Mode3);
        assert_eq!(config.speed, 4_000_000.0);
        assert_eq!(config.cs_polarity, ChipSelectPolarity::ActiveHigh);
    }

    #[test]
    fn test_parse_toml_defaults() {
        assert_eq!(BusConfig::from_toml_str("").unwrap(), BusConfig::default());

        let config = BusConfig::from_toml_str("[bus]\nspeed = 250000\n").unwrap();
        assert_eq!(config.speed, 250_000.0);
        assert_eq!(config.mode, DataMode::Mode0);
        assert_eq!(config.bit_order, BitOrder::MsbFirst);
    }

    #[test]
    fn test_parse_toml_rejects_bad_values() {
        assert!(matches!(
            BusConfig::from_toml_str("[bus]\nmode = 4\n"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            BusConfig::from_toml_str("[bus]\nbit_order = \"sideways\"\n"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            BusConfig::from_toml_str("[bus]\nclock = 1\n"),
            Err(ConfigError::ParseError(_))
        ));
        assert_eq!(
            BusConfig::from_toml_str("[bus]\nspeed = \"1 kHz\"\n"),
            Err(ConfigError::Invalid(Error::SpeedOutOfRange))
        );
    }

    #[test]
    fn test_requests_in_code_order() {
        let requests = BusConfig::default().requests();
        for (i, request) in requests.iter().enumerate() {
            assert_eq!(request.code(), i as u32);
        }
        assert_eq!(requests[2], ControlRequest::SetSpeed(DEFAULT_SPEED));
    }
}
