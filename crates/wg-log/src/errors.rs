use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Stable classification of logger errors
///
/// Each kind maps to a stable code usable by callers and tests without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogErrorKind {
    InvalidArgument,
    OpenFailed,
    CloseFailed,
    InvalidConfig,
}

impl LogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LogErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            LogErrorKind::OpenFailed => "ERR_OPEN_FAILED",
            LogErrorKind::CloseFailed => "ERR_CLOSE_FAILED",
            LogErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Errors surfaced by logger construction, teardown and configuration
///
/// Emission never produces one of these.
#[derive(Error, Debug)]
pub enum LogError {
    /// Destination (or other input) has an unsupported shape or value
    #[error("Invalid argument: {value}")]
    InvalidArgument { value: String },

    /// Log file could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flushing or closing the owned log file failed
    #[error("Failed to close log file: {source}")]
    CloseFailed {
        #[source]
        source: io::Error,
    },

    /// Configuration text could not be read or parsed
    #[error("Invalid logger configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl LogError {
    pub(crate) fn invalid_argument(value: impl std::fmt::Display) -> Self {
        LogError::InvalidArgument {
            value: value.to_string(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> LogErrorKind {
        match self {
            LogError::InvalidArgument { .. } => LogErrorKind::InvalidArgument,
            LogError::OpenFailed { .. } => LogErrorKind::OpenFailed,
            LogError::CloseFailed { .. } => LogErrorKind::CloseFailed,
            LogError::InvalidConfig { .. } => LogErrorKind::InvalidConfig,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::InvalidConfig {
            reason: err.message().to_string(),
        }
    }
}
