//! Observability of fanlog itself.
//!
//! # Data Flow
//! ```text
//! dispatcher / transports / config watcher produce:
//!     → logging.rs (tracing subscriber for the binary's own diagnostics)
//!     → metrics.rs (delivery counters, optional Prometheus listener)
//! ```
//!
//! # Design Decisions
//! - Library code only emits `tracing` events; installing a subscriber is
//!   the binary's job
//! - Remote delivery failures are counted, never logged
//! - Metrics are cheap (atomic increments, no-op without a recorder)

pub mod logging;
pub mod metrics;
