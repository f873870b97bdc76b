//! Logger configuration
//!
//! The environment is only read here, at the program boundary. The Logger
//! itself takes explicit [`LoggerOptions`].

use crate::destination::Destination;
use crate::errors::{LogError, Result};
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable whose presence turns on debug lines
pub const DEBUG_ENV: &str = "WG_DEBUG";

/// Construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Lower the threshold from Info to Debug
    #[serde(default)]
    pub debug: bool,
}

impl LoggerOptions {
    /// Options from the process environment
    ///
    /// Only the presence of `WG_DEBUG` matters, not its value.
    pub fn from_env() -> Self {
        Self {
            debug: std::env::var_os(DEBUG_ENV).is_some(),
        }
    }
}

/// File-based logger configuration
///
/// ```toml
/// destination = "/var/log/wg.log"
/// debug = false
/// ```
///
/// Only Info or Debug can be selected here; there is no key for any other
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// `stdout`, `stderr`, `-` or a file path
    #[serde(default = "default_destination")]
    pub destination: String,
    #[serde(default)]
    pub debug: bool,
}

fn default_destination() -> String {
    "stderr".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            debug: false,
        }
    }
}

impl LoggerConfig {
    /// Parse TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LogError::InvalidConfig {
            reason: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Merge the environment into this config
    ///
    /// `WG_DEBUG` can only switch debug on.
    pub fn with_env(mut self) -> Self {
        self.debug |= LoggerOptions::from_env().debug;
        self
    }

    pub fn options(&self) -> LoggerOptions {
        LoggerOptions { debug: self.debug }
    }

    /// Construct the configured Logger
    ///
    /// # Errors
    ///
    /// As [`Destination::with_stream_aliases`] and [`Logger::create`].
    pub fn build(&self) -> Result<Logger> {
        let destination = Destination::with_stream_aliases(&self.destination)?;
        Logger::create(destination, self.options())
    }
}
