//! # Configuration Management
//!
//! Configuration for programs built on the address core: logging setup and the
//! address inputs the demonstration harness walks through.
//!
//! The address core itself is configuration-free; parsing and formatting
//! never depend on these settings.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()`

use crate::core::v4::AddressV4;
use crate::core::v6::AddressV6;
use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, Level};

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "NET_IP_LOG_LEVEL";

/// Environment variable switching JSON log output on or off
pub const ENV_LOG_JSON: &str = "NET_IP_LOG_JSON";

/// Environment variable overriding the application name
pub const ENV_APP_NAME: &str = "NET_IP_APP_NAME";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AddressConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Demonstration inputs
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AddressConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");

        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| AddressError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Defaults with environment variable overrides applied
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            self.logging.log_level = level.parse::<Level>().map_err(|_| {
                AddressError::ConfigError(format!("Invalid {ENV_LOG_LEVEL} value: {level}"))
            })?;
        }

        if let Ok(json) = std::env::var(ENV_LOG_JSON) {
            self.logging.json_format = match json.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(AddressError::ConfigError(format!(
                        "Invalid {ENV_LOG_JSON} value: {other}"
                    )))
                }
            };
            // The JSON formatter writes no colour codes
            if self.logging.json_format {
                self.logging.ansi = false;
            }
        }

        if let Ok(name) = std::env::var(ENV_APP_NAME) {
            self.logging.app_name = name;
        }

        Ok(())
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AddressError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.logging.validate());
        errors.extend(self.demo.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AddressError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,

    /// Whether to colour console output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("net-ip"),
            log_level: Level::INFO,
            json_format: false,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        if self.json_format && self.ansi {
            errors.push("ANSI colours cannot be combined with JSON log output".to_string());
        }

        errors
    }
}

/// Inputs for the demonstration walkthrough
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// IPv4 address widened and then narrowed back
    pub v4_address: String,

    /// IPv6 address with no IPv4 form, used to show a rejected narrowing
    pub native_v6_address: String,

    /// IPv6 address carrying an IPv4 address, used to show a successful narrowing
    pub embedded_v6_address: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            v4_address: String::from("192.168.0.1"),
            native_v6_address: String::from("2001:db8:85a3::8a2e:370:7334"),
            embedded_v6_address: String::from("::192.168.0.1"),
        }
    }
}

impl DemoConfig {
    /// Validate demo inputs against the address grammars
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Err(e) = self.v4_address.parse::<AddressV4>() {
            errors.push(format!("Invalid v4_address '{}': {e}", self.v4_address));
        }

        match self.native_v6_address.parse::<AddressV6>() {
            Ok(addr) if addr.is_v4_representable() => errors.push(format!(
                "native_v6_address '{}' embeds an IPv4 address",
                self.native_v6_address
            )),
            Ok(_) => {}
            Err(e) => errors.push(format!(
                "Invalid native_v6_address '{}': {e}",
                self.native_v6_address
            )),
        }

        match self.embedded_v6_address.parse::<AddressV6>() {
            Ok(addr) if !addr.is_v4_representable() => errors.push(format!(
                "embedded_v6_address '{}' does not embed an IPv4 address",
                self.embedded_v6_address
            )),
            Ok(_) => {}
            Err(e) => errors.push(format!(
                "Invalid embedded_v6_address '{}': {e}",
                self.embedded_v6_address
            )),
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
