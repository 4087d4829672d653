//! Logging context: one dispatcher plus its cached root handle.
//!
//! # Responsibilities
//! - Hand out the root handle or metadata-bound child handles
//! - Expose the configuration operations (replace-all, append)
//! - Provide the lazily-created process-wide instance
//!
//! # Design Decisions
//! - Nothing is built at load time; the global context is created on first access
//! - Zero-metadata requests always return the cached root, so identity holds
//! - Contexts can also be created explicitly and passed to call sites

use std::sync::{Arc, OnceLock};

use crate::dispatch::dispatcher::{default_transports, Dispatcher, TransportList};
use crate::dispatch::scope::Logger;
use crate::event::Metadata;
use crate::transport::Transport;

/// Options accepted by [`LogContext::configure`].
#[derive(Default, Clone)]
pub struct Configuration {
    /// Replacement transport list. `None` restores the default console sink.
    pub transports: Option<TransportList>,
}

impl Configuration {
    pub fn with_transports(transports: TransportList) -> Self {
        Self {
            transports: Some(transports),
        }
    }
}

/// A dispatcher together with the root logger that addresses it.
#[derive(Debug)]
pub struct LogContext {
    dispatcher: Arc<Dispatcher>,
    root: Logger,
}

impl LogContext {
    /// A fresh, unconfigured context.
    pub fn new() -> Self {
        Self::from_dispatcher(Arc::new(Dispatcher::new()))
    }

    pub fn from_dispatcher(dispatcher: Arc<Dispatcher>) -> Self {
        let root = Logger::new(Arc::clone(&dispatcher), Metadata::new());
        Self { dispatcher, root }
    }

    /// The root handle, or a new handle bound to non-empty `metadata`.
    pub fn get_or_create_scope(&self, metadata: impl Into<Option<Metadata>>) -> Logger {
        match metadata.into() {
            Some(meta) if !meta.is_empty() => Logger::new(Arc::clone(&self.dispatcher), meta),
            _ => self.root.clone(),
        }
    }

    /// The root handle.
    pub fn root(&self) -> &Logger {
        &self.root
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Replace the whole transport set.
    pub fn configure(&self, configuration: Configuration) {
        let transports = configuration.transports.unwrap_or_else(default_transports);
        self.dispatcher.replace_all(transports);
    }

    /// Append one transport to the active set.
    pub fn add_transport(&self, transport: Arc<dyn Transport>) {
        self.dispatcher.add_one(transport);
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<LogContext> = OnceLock::new();

/// The process-wide context, created on first call.
pub fn global() -> &'static LogContext {
    GLOBAL.get_or_init(LogContext::new)
}
