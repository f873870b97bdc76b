//! Global installation of the tracing bridge

use super::layer::WgLayer;
use crate::logger::Logger;
use std::sync::{Arc, Once};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static INSTALL_ONCE: Once = Once::new();

/// Route all `tracing` events in the process to `logger`
///
/// Only the first call has any effect. Returns `true` if this call
/// installed the subscriber; `false` if the bridge was installed before or
/// another global subscriber was already set.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use wg_log::bridge::install;
/// use wg_log::Logger;
///
/// let logger = Arc::new(Logger::noop());
/// install(logger.clone());
/// assert!(!install(logger));
/// ```
pub fn install(logger: Arc<Logger>) -> bool {
    let mut installed = false;
    INSTALL_ONCE.call_once(|| {
        installed = tracing_subscriber::registry()
            .with(WgLayer::new(logger))
            .try_init()
            .is_ok();
    });
    installed
}
