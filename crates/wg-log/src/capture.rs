//! In-memory capture sink for deterministic assertions
//!
//! `CaptureBuffer` records every byte a Logger writes so tests can inspect
//! the exact lines.

use crate::destination::{Destination, SharedStream};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared byte buffer usable as a Logger stream
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream handle for `Destination::Stream`
    pub fn stream(&self) -> SharedStream {
        Arc::new(Mutex::new(self.clone()))
    }

    pub fn destination(&self) -> Destination {
        Destination::Stream(self.stream())
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Complete lines written so far, without their newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Count lines matching a predicate
    pub fn count_lines<F>(&self, predicate: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        self.lines().iter().filter(|line| predicate(line)).count()
    }

    /// Assert that some line contains `needle`
    ///
    /// # Panics
    ///
    /// Panics if no captured line contains `needle`
    #[track_caller]
    pub fn assert_line_contains(&self, needle: &str) {
        let lines = self.lines();
        assert!(
            lines.iter().any(|line| line.contains(needle)),
            "Expected a line containing '{}' in {} captured lines",
            needle,
            lines.len()
        );
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("len", &self.bytes.lock().map(|b| b.len()).unwrap_or(0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_bytes() {
        let capture = CaptureBuffer::new();
        let mut writer = capture.clone();
        writer.write_all(b"a\nb\n").unwrap();
        assert_eq!(capture.lines(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(capture.count_lines(|l| l == "b"), 1);
        capture.assert_line_contains("a");
    }

    #[test]
    fn test_clear() {
        let capture = CaptureBuffer::new();
        capture.clone().write_all(b"x\n").unwrap();
        capture.clear();
        assert!(capture.contents().is_empty());
    }
}
