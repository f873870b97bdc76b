//! The Logger
//!
//! A Logger owns one destination and a threshold. The five level methods
//! drop a call that is less severe than the threshold before any formatting
//! happens; otherwise they render the message and hand one complete line to
//! the line writer.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use wg_log::{wg_info, Destination, Logger, LoggerOptions};
//!
//! let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
//! let logger = Logger::create(Destination::stream(buf.clone()), LoggerOptions::default())?;
//! wg_info!(logger, "listening on {}", 8080);
//! logger.destroy()?;
//!
//! let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
//! assert!(out.ends_with(" i listening on 8080\n"));
//! # Ok::<(), wg_log::LogError>(())
//! ```

use crate::config::LoggerOptions;
use crate::destination::{open_log_file, Destination, Sink};
use crate::errors::{LogError, Result};
use crate::line::{CallSite, LineFlags, LineWriter};
use crate::severity::Severity;
use std::fmt;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Appended to a message whose arguments failed to format
pub const FORMAT_ERROR_MARKER: &str = "%!(FORMAT ERROR)";

/// Leveled logger writing to a file or stream
///
/// `Send + Sync`; share across threads with `Arc<Logger>`.
#[derive(Debug)]
pub struct Logger {
    writer: Option<LineWriter>,
    threshold: AtomicU8,
}

impl Logger {
    /// Create a Logger for `destination`
    ///
    /// A path is opened read-write in append mode, created with mode 0644 if
    /// absent. The threshold is Info, or Debug when `options.debug` is set.
    ///
    /// # Errors
    ///
    /// `OpenFailed` if the file cannot be opened. Nothing stays open on
    /// failure.
    pub fn create(destination: Destination, options: LoggerOptions) -> Result<Logger> {
        let sink = match destination {
            Destination::Path(path) => open_sink(path)?,
            Destination::Stream(stream) => Sink::Stream(stream),
            Destination::Stdout => Sink::Stdout,
            Destination::Stderr => Sink::Stderr,
        };

        let threshold = if options.debug {
            Severity::Debug
        } else {
            Severity::Info
        };

        Ok(Logger {
            writer: Some(LineWriter::new(sink, LineFlags::STANDARD)),
            threshold: AtomicU8::new(threshold.number()),
        })
    }

    /// Create a Logger that appends to the file at `path`
    ///
    /// # Errors
    ///
    /// See [`Logger::create`].
    pub fn from_path(path: impl Into<PathBuf>, options: LoggerOptions) -> Result<Logger> {
        Logger::create(Destination::Path(path.into()), options)
    }

    /// Create a Logger over a caller-owned stream
    ///
    /// # Errors
    ///
    /// See [`Logger::create`].
    pub fn from_stream<W>(stream: Arc<std::sync::Mutex<W>>, options: LoggerOptions) -> Result<Logger>
    where
        W: std::io::Write + Send + 'static,
    {
        Logger::create(Destination::stream(stream), options)
    }

    /// A Logger with no line writer; every call is a silent no-op
    pub fn noop() -> Logger {
        Logger {
            writer: None,
            threshold: AtomicU8::new(Severity::Info.number()),
        }
    }

    /// Tear down the Logger
    ///
    /// Closes the file if the Logger opened it. Caller streams, stdout and
    /// stderr are left untouched.
    ///
    /// # Errors
    ///
    /// `CloseFailed` if flushing or syncing the owned file fails. The file
    /// is closed either way.
    pub fn destroy(self) -> Result<()> {
        match self.writer {
            Some(writer) => writer
                .into_sink()
                .close()
                .map_err(|source| LogError::CloseFailed { source }),
            None => Ok(()),
        }
    }

    /// Tear down a shared Logger once no other handle remains
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if other handles still exist; the Logger keeps
    /// running. Otherwise as [`Logger::destroy`].
    pub fn destroy_shared(logger: Arc<Logger>) -> Result<()> {
        match Arc::try_unwrap(logger) {
            Ok(logger) => logger.destroy(),
            Err(shared) => Err(LogError::invalid_argument(format!(
                "logger still shared by {} handles",
                Arc::strong_count(&shared) - 1
            ))),
        }
    }

    pub fn threshold(&self) -> Severity {
        Severity::from_number(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::Info)
    }

    /// Replace the threshold
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.number(), Ordering::Relaxed);
    }

    /// Whether the Logger opened its file itself
    pub fn owns_file(&self) -> bool {
        self.writer
            .as_ref()
            .is_some_and(|writer| writer.sink().owns_file())
    }

    /// Whether a call at `level` would write anything
    pub fn enabled(&self, level: Severity) -> bool {
        self.writer.is_some() && self.threshold().allows(level)
    }

    /// Write `args` at `level`, attributed to the caller
    #[track_caller]
    pub fn log(&self, level: Severity, args: fmt::Arguments<'_>) {
        self.log_at(level, CallSite::from(Location::caller()), args);
    }

    /// Write `args` at `level`, attributed to an explicit call site
    pub fn log_at(&self, level: Severity, site: CallSite<'_>, args: fmt::Arguments<'_>) {
        let Some(writer) = &self.writer else {
            return;
        };
        if !self.threshold().allows(level) {
            return;
        }
        // Write errors are not surfaced to callers.
        let _ = writer.output(site, &render(level, args));
    }

    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Panic, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::noop()
    }
}

fn open_sink(path: PathBuf) -> Result<Sink> {
    if path.as_os_str().is_empty() {
        return Err(LogError::invalid_argument("empty path"));
    }
    match open_log_file(&path) {
        Ok(file) => Ok(Sink::File(std::sync::Mutex::new(file))),
        Err(source) => Err(LogError::OpenFailed { path, source }),
    }
}

/// Tag, space, then the formatted message
fn render(level: Severity, args: fmt::Arguments<'_>) -> String {
    let mut body = String::with_capacity(64);
    body.push(level.tag());
    body.push(' ');
    if fmt::write(&mut body, args).is_err() {
        body.push_str(FORMAT_ERROR_MARKER);
    }
    body
}
