//! Severity levels
//!
//! A subset of the Syslog levels. Lower numbers are more severe; the slots
//! 1, 2 and 5 have no level in this subset.

use crate::errors::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Panic,
    Error,
    Warn,
    Info,
    Debug,
}

impl Severity {
    /// Every level, most severe first
    pub const ALL: [Severity; 5] = [
        Severity::Panic,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    /// Syslog numeric value
    pub fn number(self) -> u8 {
        match self {
            Severity::Panic => 0,
            Severity::Error => 3,
            Severity::Warn => 4,
            Severity::Info => 6,
            Severity::Debug => 7,
        }
    }

    /// Single-character tag written in front of the message
    pub fn tag(self) -> char {
        match self {
            Severity::Panic => 'p',
            Severity::Error => 'e',
            Severity::Warn => 'w',
            Severity::Info => 'i',
            Severity::Debug => 'd',
        }
    }

    /// Lowercase level name
    pub fn name(self) -> &'static str {
        match self {
            Severity::Panic => "panic",
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    pub fn from_number(number: u8) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.number() == number)
    }

    /// Whether a line at `level` passes when `self` is the threshold
    ///
    /// Passes iff `level` is at least as severe as the threshold.
    pub fn allows(self, level: Severity) -> bool {
        level.number() <= self.number()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Severity::ALL
            .into_iter()
            .find(|level| level.name() == wanted)
            .ok_or_else(|| LogError::invalid_argument(format!("unknown severity '{}'", s)))
    }
}
