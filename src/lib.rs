//! fanlog: a structured-logging facade.
//!
//! Leveled events flow through scoped logger handles, pick up their bound
//! metadata, and fan out to pluggable transports (console, remote HTTP,
//! bridge to another logger), each filtering by its own threshold.
//!
//! ```
//! use fanlog::{get_or_create_scope, LogEvent};
//! use serde_json::json;
//!
//! let root = get_or_create_scope(None);
//! assert_eq!(root, get_or_create_scope(None));
//!
//! let request = root.derive(json!({"requestId": "123"}).as_object().cloned().unwrap());
//! request.debug(LogEvent::new("below the default threshold"));
//! ```

// Event model
pub mod event;

// Sinks
pub mod transport;

// Dispatcher and scoping
pub mod dispatch;

// Cross-cutting concerns
pub mod config;
pub mod observability;

use std::sync::Arc;

pub use dispatch::{global, Configuration, Dispatcher, LogContext, Logger};
pub use event::{passes, validate, Level, LogEvent, Metadata, ValidationError};
pub use transport::{
    BridgeSink, Console, ConsoleSink, ExternalLogger, RemoteSink, TracingBackend, Transport,
    TransportError,
};

/// Root logger of the process-wide context, or a child bound to `metadata`.
pub fn get_or_create_scope(metadata: impl Into<Option<Metadata>>) -> Logger {
    global().get_or_create_scope(metadata)
}

/// Replace the process-wide transport set.
pub fn configure(configuration: Configuration) {
    global().configure(configuration);
}

/// Append a transport to the process-wide set.
pub fn add_transport(transport: Arc<dyn Transport>) {
    global().add_transport(transport);
}
