//! wg-log - Leveled logging to a file or stream
//!
//! This crate provides a small leveled logger:
//! - Five Syslog-subset severities (panic, error, warn, info, debug)
//! - One line per call: UTC date, UTC time, `file:line` of the call site,
//!   a one-character level tag and the formatted message
//! - Destinations: a file opened (and owned) by the logger, or a stream the
//!   caller keeps owning
//! - Threshold Info by default, Debug when asked for (`WG_DEBUG` at the
//!   program boundary)
//! - Lines from concurrent callers never interleave
//! - A `tracing` bridge and an in-memory capture sink for tests

pub mod bridge;
pub mod capture;
pub mod config;
pub mod destination;
pub mod errors;
pub mod line;
pub mod logger;
pub mod macros;
pub mod severity;

// Re-export commonly used types
pub use capture::CaptureBuffer;
pub use config::{LoggerConfig, LoggerOptions, DEBUG_ENV};
pub use destination::{Destination, SharedStream};
pub use errors::{LogError, LogErrorKind, Result};
pub use line::{format_line, CallSite, LineFlags};
pub use logger::{Logger, FORMAT_ERROR_MARKER};
pub use severity::Severity;
