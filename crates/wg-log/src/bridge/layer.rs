//! Layer forwarding `tracing` events to a Logger

use crate::line::CallSite;
use crate::logger::Logger;
use crate::severity::Severity;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Map a `tracing` level onto a Severity
///
/// TRACE has no Syslog counterpart in this subset and folds into Debug.
pub fn severity_for(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warn,
        Level::INFO => Severity::Info,
        // DEBUG and TRACE
        _ => Severity::Debug,
    }
}

/// Collects the `message` field; other fields are not written
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }
}

/// `tracing_subscriber` layer writing each event through a Logger
pub struct WgLayer {
    logger: Arc<Logger>,
}

impl WgLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for WgLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = severity_for(metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let site = CallSite::new(
            metadata.file().unwrap_or_else(|| metadata.target()),
            metadata.line().unwrap_or(0),
        );
        self.logger
            .log_at(level, site, format_args!("{}", visitor.message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_level_mapping() {
        assert_eq!(severity_for(&Level::ERROR), Severity::Error);
        assert_eq!(severity_for(&Level::WARN), Severity::Warn);
        assert_eq!(severity_for(&Level::INFO), Severity::Info);
        assert_eq!(severity_for(&Level::DEBUG), Severity::Debug);
        assert_eq!(severity_for(&Level::TRACE), Severity::Debug);
    }

    #[test]
    fn test_visitor_keeps_message_only() {
        let capture = crate::CaptureBuffer::new();
        let logger = Logger::create(capture.destination(), Default::default()).unwrap();
        let subscriber = tracing_subscriber::registry().with(WgLayer::new(Arc::new(logger)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(peer = "10.0.0.2", port = 51820, "peer up");
            tracing::info!(n = 1);
        });

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" i peer up"), "{}", lines[0]);
        assert!(!lines[0].contains("10.0.0.2"));
        assert!(lines[1].ends_with(" i "), "{:?}", lines[1]);
    }
}
