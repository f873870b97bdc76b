//! Level macros
//!
//! Each macro formats its arguments and calls the matching Logger method, so
//! the line is attributed to the macro call site.

/// Log at Panic level
///
/// Writes the line only; it does not panic.
///
/// ```
/// # use wg_log::{wg_panic, Logger};
/// let logger = Logger::noop();
/// wg_panic!(logger, "invariant broken: {}", 7);
/// ```
#[macro_export]
macro_rules! wg_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(::std::format_args!($($arg)+))
    };
}

/// Log at Error level
#[macro_export]
macro_rules! wg_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log at Warn level
#[macro_export]
macro_rules! wg_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

/// Log at Info level
///
/// ```
/// # use wg_log::{wg_info, Logger};
/// let logger = Logger::noop();
/// wg_info!(logger, "peer {} connected", "10.0.0.2");
/// ```
#[macro_export]
macro_rules! wg_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log at Debug level
#[macro_export]
macro_rules! wg_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}
