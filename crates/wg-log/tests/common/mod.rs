use chrono::NaiveDateTime;
use wg_log::{CaptureBuffer, Logger, LoggerOptions};

/// Logger writing into a fresh capture buffer
#[allow(dead_code)]
pub fn capture_logger(debug: bool) -> (Logger, CaptureBuffer) {
    let capture = CaptureBuffer::new();
    let logger = Logger::create(capture.destination(), LoggerOptions { debug }).unwrap();
    (logger, capture)
}

/// Fields of one emitted line
#[allow(dead_code)]
#[derive(Debug)]
pub struct ParsedLine {
    pub stamp: NaiveDateTime,
    pub file: String,
    pub line: u32,
    pub tag: char,
    pub message: String,
}

/// Split `YYYY/MM/DD HH:MM:SS file:line X message`
///
/// Returns `None` if the line does not have that shape.
#[allow(dead_code)]
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut parts = line.splitn(5, ' ');
    let date = parts.next()?;
    let time = parts.next()?;
    let location = parts.next()?;
    let tag = parts.next()?;
    let message = parts.next().unwrap_or("").to_string();

    let stamp =
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y/%m/%d %H:%M:%S").ok()?;
    let (file, line_no) = location.rsplit_once(':')?;
    let mut tag_chars = tag.chars();
    let tag = tag_chars.next()?;
    if tag_chars.next().is_some() {
        return None;
    }

    Some(ParsedLine {
        stamp,
        file: file.to_string(),
        line: line_no.parse().ok()?,
        tag,
        message,
    })
}
