//! Where log lines go
//!
//! A [`Destination`] is chosen explicitly by the caller. Dynamic input goes
//! through [`Destination::parse`] or `Destination::try_from(serde_json::Value)`:
//! a string is always a file path, anything else is rejected. Command lines
//! and config files use [`Destination::with_stream_aliases`] to reach stdout
//! and stderr.

use crate::errors::{LogError, Result};
use serde_json::Value;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Caller-owned stream shared with a Logger
///
/// The caller keeps its own clone; the Logger never closes it.
pub type SharedStream = Arc<Mutex<dyn Write + Send>>;

/// Permission bits for log files created by a Logger
pub const FILE_MODE: u32 = 0o644;

/// Log destination
pub enum Destination {
    /// File opened (and owned) by the Logger
    Path(PathBuf),
    /// Already-open stream owned by the caller
    Stream(SharedStream),
    Stdout,
    Stderr,
}

impl Destination {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Destination::Path(path.into())
    }

    /// Wrap a caller-owned stream
    pub fn stream<W: Write + Send + 'static>(stream: Arc<Mutex<W>>) -> Self {
        Destination::Stream(stream)
    }

    /// Interpret a destination string as a file path
    ///
    /// Every non-empty string is a path, used exactly as given.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for the empty string.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(LogError::invalid_argument("empty destination"));
        }
        Ok(Destination::Path(PathBuf::from(s)))
    }

    /// Like [`Destination::parse`], but `stdout`, `stderr` and `-` (stderr)
    /// name the process streams
    ///
    /// For command lines and config files, where a stream has no other
    /// spelling. Only exact matches are aliases.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for the empty string.
    pub fn with_stream_aliases(s: &str) -> Result<Self> {
        match s {
            "stdout" => Ok(Destination::Stdout),
            "stderr" | "-" => Ok(Destination::Stderr),
            _ => Destination::parse(s),
        }
    }
}

impl TryFrom<Value> for Destination {
    type Error = LogError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Destination::parse(&s),
            other => Err(LogError::invalid_argument(format!(
                "unsupported destination: {}",
                other
            ))),
        }
    }
}

impl TryFrom<&str> for Destination {
    type Error = LogError;

    fn try_from(s: &str) -> Result<Self> {
        Destination::parse(s)
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Destination::Stream(_) => f.write_str("Stream(..)"),
            Destination::Stdout => f.write_str("Stdout"),
            Destination::Stderr => f.write_str("Stderr"),
        }
    }
}

/// Open `path` read-write, append, create-if-absent, mode 0644
pub(crate) fn open_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}

/// Resolved byte sink behind a line writer
pub(crate) enum Sink {
    File(Mutex<File>),
    Stream(SharedStream),
    Stdout,
    Stderr,
}

impl Sink {
    /// Write one whole line while holding the sink's lock
    pub(crate) fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Sink::File(file) => {
                let mut file = file.lock().unwrap_or_else(PoisonError::into_inner);
                file.write_all(line)
            }
            Sink::Stream(stream) => {
                let mut stream = stream.lock().unwrap_or_else(PoisonError::into_inner);
                stream.write_all(line)?;
                stream.flush()
            }
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Sink::Stderr => io::stderr().lock().write_all(line),
        }
    }

    pub(crate) fn owns_file(&self) -> bool {
        matches!(self, Sink::File(_))
    }

    /// Release the sink
    ///
    /// Only an owned file is synced and closed; streams are left alone.
    pub(crate) fn close(self) -> io::Result<()> {
        match self {
            Sink::File(file) => {
                close_owned(file.into_inner().unwrap_or_else(PoisonError::into_inner))
            }
            Sink::Stream(_) | Sink::Stdout | Sink::Stderr => Ok(()),
        }
    }
}

/// An owned sink that can be forced to stable storage
pub(crate) trait Durable: Write {
    fn sync(&self) -> io::Result<()>;
}

impl Durable for File {
    fn sync(&self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Flush, sync, then drop `file`
///
/// The file is closed even when flushing or syncing fails.
pub(crate) fn close_owned<F: Durable>(mut file: F) -> io::Result<()> {
    file.flush()?;
    file.sync()
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::File(_) => f.write_str("File"),
            Sink::Stream(_) => f.write_str("Stream"),
            Sink::Stdout => f.write_str("Stdout"),
            Sink::Stderr => f.write_str("Stderr"),
        }
    }
}
