//! The dispatcher: active transport list, metadata merge, fan-out.
//!
//! # Responsibilities
//! - Hold the ordered list of active transports
//! - Replace or extend that list
//! - Merge bound metadata into events and deliver to every transport
//!
//! # Design Decisions
//! - The list lives in an `ArcSwapOption`; each dispatch iterates the
//!   snapshot it loaded, so reconfiguration never races with delivery
//! - `None` means "never configured" and behaves as the default set
//! - Each transport call is isolated: a panicking sink is counted and skipped

use arc_swap::ArcSwapOption;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::event::{Level, LogEvent, Metadata};
use crate::observability::metrics;
use crate::transport::{ConsoleSink, Transport};

/// Shared, ordered list of transports.
pub type TransportList = Vec<Arc<dyn Transport>>;

/// Transport set used until the dispatcher is configured.
pub fn default_transports() -> TransportList {
    vec![Arc::new(ConsoleSink::new(Level::Info))]
}

/// Fans log events out to the active transports.
pub struct Dispatcher {
    transports: ArcSwapOption<TransportList>,
}

impl Dispatcher {
    /// Create an unconfigured dispatcher. No transport is built until first use.
    pub fn new() -> Self {
        Self {
            transports: ArcSwapOption::const_empty(),
        }
    }

    /// Create a dispatcher that starts with `transports`.
    pub fn with_transports(transports: TransportList) -> Self {
        Self {
            transports: ArcSwapOption::from_pointee(transports),
        }
    }

    /// Discard the current transports and install `transports`, even if empty.
    pub fn replace_all(&self, transports: TransportList) {
        let count = transports.len();
        self.transports.store(Some(Arc::new(transports)));
        tracing::debug!(transports = count, "Transport set replaced");
    }

    /// Append `transport`, materializing the default set first if unconfigured.
    pub fn add_one(&self, transport: Arc<dyn Transport>) {
        self.transports.rcu(|current| {
            let mut next = match current {
                Some(list) => TransportList::clone(list),
                None => default_transports(),
            };
            next.push(transport.clone());
            Some(Arc::new(next))
        });
        tracing::debug!(transports = self.transport_count(), "Transport added");
    }

    /// Current transport snapshot, initializing the default set on first use.
    pub fn snapshot(&self) -> Arc<TransportList> {
        if let Some(list) = self.transports.load_full() {
            return list;
        }
        self.transports.rcu(|current| match current {
            Some(list) => Some(Arc::clone(list)),
            None => Some(Arc::new(default_transports())),
        });
        self.transports.load_full().unwrap_or_default()
    }

    /// Number of active transports.
    pub fn transport_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Deliver `event` at `level` to every active transport.
    ///
    /// Non-empty `bound` metadata is shallow-merged into `data.metadata`
    /// first, bound keys winning.
    pub fn dispatch(&self, level: Level, event: &LogEvent, bound: Option<&Metadata>) {
        metrics::record_dispatch(level);

        let merged;
        let event = match bound {
            Some(meta) if !meta.is_empty() => {
                merged = event.merged_with(meta);
                &merged
            }
            _ => event,
        };

        let transports = self.snapshot();
        for (index, transport) in transports.iter().enumerate() {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| match level {
                Level::Debug => transport.debug(event),
                Level::Info => transport.info(event),
                Level::Warn => transport.warn(event),
                Level::Error => transport.error(event),
            }));
            if delivered.is_err() {
                metrics::record_transport_panic();
                tracing::warn!(transport = index, level = %level, "Transport panicked; continuing delivery");
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let configured = self.transports.load().is_some();
        f.debug_struct("Dispatcher")
            .field("configured", &configured)
            .finish_non_exhaustive()
    }
}
