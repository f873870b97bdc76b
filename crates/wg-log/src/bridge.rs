//! Bridge from `tracing` to a Logger
//!
//! Code instrumented with `tracing` macros can write through a Logger:
//! - `WgLayer` turns each event into one plain-text line
//! - `install(logger)` sets the global subscriber once
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use wg_log::bridge::install;
//! use wg_log::Logger;
//!
//! // Once at startup
//! install(Arc::new(Logger::noop()));
//! ```

pub mod init;
pub mod layer;

pub use init::install;
pub use layer::{severity_for, WgLayer};
