//! Event dispatch and scoping.
//!
//! # Data Flow
//! ```text
//! get_or_create_scope(metadata?)     (context.rs)
//!     → root Logger (cached) or child Logger (scope.rs)
//!     → Logger::info/debug/warn/error
//!     → Dispatcher::dispatch(level, event, bound metadata)   (dispatcher.rs)
//!         merge metadata (shallow, bound keys win)
//!         load transport snapshot
//!         → every Transport, each isolated
//! ```
//!
//! # Design Decisions
//! - Handles share the dispatcher through `Arc`; they never copy it
//! - The root handle is cached per context so zero-metadata calls return it
//! - Configuration swaps the transport list atomically (arc-swap)

pub mod context;
pub mod dispatcher;
pub mod scope;

pub use context::{global, Configuration, LogContext};
pub use dispatcher::{default_transports, Dispatcher, TransportList};
pub use scope::Logger;
