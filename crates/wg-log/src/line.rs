//! Line writer
//!
//! Prepends the date, time and call-site prefix to a message body and hands
//! the finished line to the sink in a single write.

use crate::destination::Sink;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use std::io;
use std::panic::Location;

/// Source location attached to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Final path component of `file`
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Which prefix fields a line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFlags {
    pub date: bool,
    pub time: bool,
    pub utc: bool,
    pub short_file: bool,
}

impl LineFlags {
    /// UTC date, UTC time and `file:line`; what every Logger uses
    pub const STANDARD: LineFlags = LineFlags {
        date: true,
        time: true,
        utc: true,
        short_file: true,
    };
}

impl Default for LineFlags {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Render one complete line, newline included
///
/// Layout: `YYYY/MM/DD HH:MM:SS file.ext:NN <body>\n`.
pub fn format_line(now: DateTime<Utc>, site: CallSite<'_>, body: &str, flags: LineFlags) -> String {
    let mut line = String::with_capacity(body.len() + 48);

    if flags.date || flags.time {
        let stamp = if flags.utc {
            now.naive_utc()
        } else {
            now.with_timezone(&Local).naive_local()
        };
        if flags.date {
            let _ = write!(line, "{} ", stamp.format("%Y/%m/%d"));
        }
        if flags.time {
            let _ = write!(line, "{} ", stamp.format("%H:%M:%S"));
        }
    }

    let file = if flags.short_file {
        site.short_file()
    } else {
        site.file
    };
    let _ = write!(line, "{}:{} ", file, site.line);

    line.push_str(body);
    if !body.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// Formats lines and writes them to a sink
#[derive(Debug)]
pub struct LineWriter {
    sink: Sink,
    flags: LineFlags,
}

impl LineWriter {
    pub(crate) fn new(sink: Sink, flags: LineFlags) -> Self {
        Self { sink, flags }
    }

    /// Write `body` as one line attributed to `site`
    ///
    /// The line is fully rendered before the sink lock is taken.
    pub fn output(&self, site: CallSite<'_>, body: &str) -> io::Result<()> {
        let line = format_line(Utc::now(), site, body, self.flags);
        self.sink.write_line(line.as_bytes())
    }

    pub(crate) fn sink(&self) -> &Sink {
        &self.sink
    }

    pub(crate) fn into_sink(self) -> Sink {
        self.sink
    }
}
