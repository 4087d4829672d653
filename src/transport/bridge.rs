//! Bridge sink forwarding to an external structured logger.

use std::sync::Arc;

use crate::event::{Level, LogEvent};
use crate::transport::Transport;

/// An external structured-logging backend.
///
/// All four methods are required, so a backend missing one is rejected by
/// the compiler rather than at the first call.
pub trait ExternalLogger: Send + Sync {
    fn debug(&self, event: &LogEvent, message: &str);
    fn info(&self, event: &LogEvent, message: &str);
    fn warn(&self, event: &LogEvent, message: &str);
    fn error(&self, event: &LogEvent, message: &str);
}

/// Transport adapting an [`ExternalLogger`].
#[derive(Clone)]
pub struct BridgeSink {
    backend: Arc<dyn ExternalLogger>,
    threshold: Option<Level>,
}

impl BridgeSink {
    pub fn new(backend: Arc<dyn ExternalLogger>, threshold: impl Into<Option<Level>>) -> Self {
        Self {
            backend,
            threshold: threshold.into(),
        }
    }
}

impl Transport for BridgeSink {
    fn threshold(&self) -> Option<Level> {
        self.threshold
    }

    fn write(&self, level: Level, event: &LogEvent) {
        let message = event.message.as_str();
        match level {
            Level::Debug => self.backend.debug(event, message),
            Level::Info => self.backend.info(event, message),
            Level::Warn => self.backend.warn(event, message),
            Level::Error => self.backend.error(event, message),
        }
    }
}

/// [`ExternalLogger`] emitting through the `tracing` macros.
///
/// Requires a tracing subscriber to be installed to produce output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalLogger for TracingBackend {
    fn debug(&self, event: &LogEvent, message: &str) {
        tracing::debug!(target: "fanlog::bridge", data = %serde_json::Value::Object(event.data.clone()), "{}", message);
    }

    fn info(&self, event: &LogEvent, message: &str) {
        tracing::info!(target: "fanlog::bridge", data = %serde_json::Value::Object(event.data.clone()), "{}", message);
    }

    fn warn(&self, event: &LogEvent, message: &str) {
        tracing::warn!(target: "fanlog::bridge", data = %serde_json::Value::Object(event.data.clone()), "{}", message);
    }

    fn error(&self, event: &LogEvent, message: &str) {
        tracing::error!(target: "fanlog::bridge", data = %serde_json::Value::Object(event.data.clone()), "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Backend {
        calls: Mutex<Vec<(&'static str, String, LogEvent)>>,
    }

    impl Backend {
        fn record(&self, method: &'static str, event: &LogEvent, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((method, message.to_string(), event.clone()));
        }
    }

    impl ExternalLogger for Backend {
        fn debug(&self, event: &LogEvent, message: &str) {
            self.record("debug", event, message);
        }
        fn info(&self, event: &LogEvent, message: &str) {
            self.record("info", event, message);
        }
        fn warn(&self, event: &LogEvent, message: &str) {
            self.record("warn", event, message);
        }
        fn error(&self, event: &LogEvent, message: &str) {
            self.record("error", event, message);
        }
    }

    #[test]
    fn test_forwards_event_then_message_to_same_named_method() {
        let backend = Arc::new(Backend::default());
        let sink = BridgeSink::new(backend.clone(), Level::Debug);
        let event = LogEvent::new("disk full").with_field("pct", 99);

        sink.warn(&event);
        sink.debug(&event);

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "warn");
        assert_eq!(calls[0].1, "disk full");
        assert_eq!(calls[0].2, event);
        assert_eq!(calls[1].0, "debug");
    }

    #[test]
    fn test_threshold_applies() {
        let backend = Arc::new(Backend::default());
        let sink = BridgeSink::new(backend.clone(), Level::Error);
        sink.warn(&LogEvent::new("skip"));
        sink.error(&LogEvent::new("keep"));
        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "error");
    }

    #[test]
    fn test_tracing_backend_without_subscriber() {
        let sink = BridgeSink::new(Arc::new(TracingBackend::new()), Level::Debug);
        sink.info(&LogEvent::new("into tracing").with_field("k", "v"));
    }
}
