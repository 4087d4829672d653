//! Scoped logger handles.

use serde_json::Value;
use std::sync::Arc;

use crate::dispatch::dispatcher::Dispatcher;
use crate::event::{merge_metadata, validate, Level, LogEvent, Metadata, ValidationError};

#[derive(Debug)]
struct ScopeInner {
    dispatcher: Arc<Dispatcher>,
    metadata: Metadata,
}

/// A logger handle bound to fixed metadata.
///
/// Cloning is cheap and preserves identity: clones compare equal and
/// [`Logger::ptr_eq`] holds between them. Handles built separately are
/// distinct even when their metadata matches.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<ScopeInner>,
}

impl Logger {
    /// Handle on `dispatcher` bound to `metadata`.
    ///
    /// The metadata is owned by the handle from here on.
    pub fn new(dispatcher: Arc<Dispatcher>, metadata: Metadata) -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                dispatcher,
                metadata,
            }),
        }
    }

    /// Child handle: parent metadata shallow-merged with `metadata`, new keys winning.
    ///
    /// Always returns a fresh handle, even for empty `metadata`.
    pub fn derive(&self, metadata: Metadata) -> Logger {
        Logger::new(
            Arc::clone(&self.inner.dispatcher),
            merge_metadata(&self.inner.metadata, &metadata),
        )
    }

    /// Metadata bound to this handle.
    pub fn metadata(&self) -> &Metadata {
        &self.inner.metadata
    }

    /// Dispatcher this handle sends to.
    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.inner.dispatcher
    }

    /// Whether `a` and `b` are the same handle.
    pub fn ptr_eq(a: &Logger, b: &Logger) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn log(&self, level: Level, event: impl Into<LogEvent>) {
        let event = event.into();
        self.inner
            .dispatcher
            .dispatch(level, &event, Some(&self.inner.metadata));
    }

    /// Validate an untyped event, then log it.
    pub fn log_value(&self, level: Level, candidate: &Value) -> Result<(), ValidationError> {
        let event = validate(candidate)?;
        self.log(level, event);
        Ok(())
    }

    pub fn debug(&self, event: impl Into<LogEvent>) {
        self.log(Level::Debug, event);
    }

    pub fn info(&self, event: impl Into<LogEvent>) {
        self.log(Level::Info, event);
    }

    pub fn warn(&self, event: impl Into<LogEvent>) {
        self.log(Level::Warn, event);
    }

    pub fn error(&self, event: impl Into<LogEvent>) {
        self.log(Level::Error, event);
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        Logger::ptr_eq(self, other)
    }
}

impl Eq for Logger {}
