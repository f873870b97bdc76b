#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::capture_logger;
use proptest::prelude::*;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use wg_log::{
    wg_debug, wg_error, wg_info, wg_panic, wg_warn, Destination, LogErrorKind, Logger,
    LoggerOptions, Severity, FORMAT_ERROR_MARKER,
};
use wg_test::ok;

#[test]
fn test_create_rejects_unsupported_values() {
    for value in [json!(1), json!(false), json!(2.5), json!(null), json!({})] {
        let result = Destination::try_from(value.clone())
            .and_then(|d| Logger::create(d, LoggerOptions::default()));
        let err = result.expect_err("create must fail");
        ok!(
            err.kind() == LogErrorKind::InvalidArgument,
            "{} must be InvalidArgument, got {:?}",
            value,
            err
        );
    }
}

#[test]
fn test_create_from_string_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wg.log");
    let value = json!(path.to_str().unwrap());
    let logger = Logger::create(Destination::try_from(value).unwrap(), LoggerOptions::default())
        .unwrap();
    ok!(logger.owns_file(), "logger built from a path must own its file");
    logger.destroy().unwrap();
}

#[test]
fn test_info_emitted_debug_dropped() {
    let (logger, capture) = capture_logger(false);

    logger.info(format_args!("info"));
    ok!(
        capture.contents().contains("info"),
        "'{}' must contain 'info'",
        capture.contents()
    );

    let before = capture.contents();
    logger.debug(format_args!("debug"));
    ok!(
        !capture.contents().contains("debug"),
        "'{}' must not contain 'debug'",
        capture.contents()
    );
    assert_eq!(before, capture.contents());
}

#[test]
fn test_debug_emitted_with_debug_option() {
    let (logger, capture) = capture_logger(true);
    wg_debug!(logger, "x");
    capture.assert_line_contains(" d x");
}

#[test]
fn test_every_level_uses_its_tag() {
    let (logger, capture) = capture_logger(true);
    wg_panic!(logger, "p-msg");
    wg_error!(logger, "e-msg");
    wg_warn!(logger, "w-msg");
    wg_info!(logger, "i-msg");
    wg_debug!(logger, "d-msg");

    let lines = capture.lines();
    assert_eq!(lines.len(), 5);
    for (line, level) in lines.iter().zip(Severity::ALL) {
        let expected = format!(" {} {}-msg", level.tag(), level.tag());
        ok!(line.ends_with(&expected), "'{}' must end with '{}'", line, expected);
    }
}

#[test]
fn test_format_arguments_rendered() {
    let (logger, capture) = capture_logger(false);
    wg_warn!(logger, "peer {} handshake took {:.1}s", "alpha", 2.5);
    capture.assert_line_contains("w peer alpha handshake took 2.5s");
}

#[test]
fn test_format_error_degrades_to_marker() {
    struct Broken;
    impl std::fmt::Display for Broken {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    let (logger, capture) = capture_logger(false);
    wg_error!(logger, "bad {}", Broken);
    capture.assert_line_contains(&format!("e bad {}", FORMAT_ERROR_MARKER));
}

#[test]
fn test_noop_logger_never_writes() {
    let logger = Logger::default();
    wg_panic!(logger, "nowhere");
    wg_info!(logger, "nowhere");
    assert!(logger.destroy().is_ok());
}

#[test]
fn test_destroy_leaves_caller_stream_writable() {
    let stream = Arc::new(Mutex::new(Vec::<u8>::new()));
    let logger = Logger::from_stream(stream.clone(), LoggerOptions::default()).unwrap();
    ok!(!logger.owns_file(), "stream logger must not own a file");
    wg_info!(logger, "before");

    let result = logger.destroy();
    ok!(result.is_ok(), "destroy failed for: {:?}", result);

    stream.lock().unwrap().write_all(b"after\n").unwrap();
    let text = String::from_utf8(stream.lock().unwrap().clone()).unwrap();
    assert!(text.contains("i before"));
    assert!(text.ends_with("after\n"));
}

#[test]
fn test_path_logger_appends_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wg.log");
    std::fs::write(&path, "existing\n").unwrap();

    let logger = Logger::from_path(&path, LoggerOptions::default()).unwrap();
    wg_info!(logger, "first");
    wg_error!(logger, "second");
    logger.destroy().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "existing");
    assert!(lines[1].ends_with(" i first"));
    assert!(lines[2].ends_with(" e second"));
}

#[test]
fn test_path_logger_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.log");
    let logger = Logger::from_path(&path, LoggerOptions::default()).unwrap();
    ok!(path.exists(), "{} must be created", path.display());
    logger.destroy().unwrap();
}

#[test]
fn test_open_failure_is_open_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("wg.log");
    let err = Logger::from_path(&path, LoggerOptions::default()).unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::OpenFailed);
    assert!(err.to_string().contains("missing-dir"));
    ok!(!path.exists(), "nothing may be created on failure");
}

#[test]
fn test_empty_path_is_invalid_argument() {
    let err = Logger::from_path("", LoggerOptions::default()).unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::InvalidArgument);
}

#[cfg(target_os = "linux")]
#[test]
fn test_destroy_releases_file_descriptor() {
    fn fd_open_for(path: &std::path::Path) -> bool {
        std::fs::read_dir("/proc/self/fd")
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| std::fs::read_link(entry.path()).ok())
            .any(|target| target == path)
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().canonicalize().unwrap().join("fd-check.log");

    let logger = Logger::from_path(&path, LoggerOptions::default()).unwrap();
    ok!(fd_open_for(&path), "{} must be open", path.display());

    let result = logger.destroy();
    ok!(result.is_ok(), "destroy failed for: {:?}", result);
    ok!(!fd_open_for(&path), "{} must be closed", path.display());
}

#[cfg(target_os = "linux")]
#[test]
fn test_destroy_reports_sync_failure_as_close_failed() {
    // Character devices without fsync support refuse sync_all with EINVAL.
    let logger = Logger::from_path("/dev/null", LoggerOptions::default()).unwrap();
    assert!(logger.owns_file());
    wg_info!(logger, "discarded");

    let err = logger.destroy().unwrap_err();
    assert_eq!(err.kind(), LogErrorKind::CloseFailed);
    assert_eq!(err.code(), "ERR_CLOSE_FAILED");
}

proptest! {
    #[test]
    fn prop_emits_iff_at_least_as_severe(threshold_idx in 0usize..5, level_idx in 0usize..5) {
        let threshold = Severity::ALL[threshold_idx];
        let level = Severity::ALL[level_idx];
        let (logger, capture) = capture_logger(false);
        logger.set_threshold(threshold);

        logger.log(level, format_args!("sample"));

        let emitted = !capture.contents().is_empty();
        prop_assert_eq!(emitted, level.number() <= threshold.number());
    }
}
