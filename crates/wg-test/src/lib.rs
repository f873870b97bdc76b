//! wg-test - Assertion helper for unit tests
//!
//! One primitive: [`assert_true`] reports a formatted failure, tagged with
//! the caller's `file:line`, when a condition is false.
//!
//! ```
//! use wg_test::ok;
//!
//! let v = vec![1, 2, 3];
//! ok!(v.len() == 3, "len must be 3, got {}", v.len());
//! ```

use std::fmt;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// One reported failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{line}: {message}")]
pub struct Failure {
    pub file: &'static str,
    pub line: u32,
    pub message: String,
}

/// Where failures are reported
pub trait TestContext {
    fn fail(&self, failure: Failure);
}

/// Fails the test immediately by panicking
#[derive(Debug, Clone, Copy, Default)]
pub struct Fatal;

impl TestContext for Fatal {
    #[track_caller]
    fn fail(&self, failure: Failure) {
        panic!("{}", failure);
    }
}

/// Records failures and lets the test keep going
///
/// Call [`Collect::finish`] at the end of the test. Dropping a context that
/// still holds failures panics as well, unless the thread is already
/// panicking.
#[derive(Debug, Default)]
pub struct Collect {
    failures: Mutex<Vec<Failure>>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<Failure> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_ok(&self) -> bool {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Panic with every recorded failure, if any
    #[track_caller]
    pub fn finish(self) {
        let failures = std::mem::take(
            &mut *self
                .failures
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        if !failures.is_empty() {
            panic!("{}", summarize(&failures));
        }
    }
}

impl TestContext for Collect {
    fn fail(&self, failure: Failure) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }
}

impl Drop for Collect {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        let failures = self
            .failures
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if !failures.is_empty() {
            panic!("{}", summarize(failures));
        }
    }
}

fn summarize(failures: &[Failure]) -> String {
    let mut out = format!("{} check(s) failed", failures.len());
    for failure in failures {
        out.push_str("\n  ");
        out.push_str(&failure.to_string());
    }
    out
}

/// Report `args` against `ctx` if `condition` is false
///
/// The failure carries the caller's file and line.
#[track_caller]
pub fn assert_true<C>(ctx: &C, condition: bool, args: fmt::Arguments<'_>)
where
    C: TestContext + ?Sized,
{
    if condition {
        return;
    }
    let location = Location::caller();
    ctx.fail(Failure {
        file: location.file(),
        line: location.line(),
        message: args.to_string(),
    });
}

/// Fail the test with a formatted message unless the condition holds
#[macro_export]
macro_rules! ok {
    ($cond:expr, $($arg:tt)+) => {
        $crate::assert_true(&$crate::Fatal, $cond, ::std::format_args!($($arg)+))
    };
}

/// Like [`ok!`] but reports against an explicit context
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        $crate::assert_true(&$ctx, $cond, ::std::format_args!($($arg)+))
    };
}
