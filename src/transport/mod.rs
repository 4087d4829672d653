//! Output sinks ("transports").
//!
//! # Data Flow
//! ```text
//! Dispatcher snapshot
//!     → Transport::{debug,info,warn,error}
//!     → passes(threshold, level)        (shared gate, level.rs)
//!     → Transport::write
//!         console.rs  render to stdout/stderr
//!         remote.rs   spawn fire-and-forget POST
//!         bridge.rs   forward to an external logger
//! ```
//!
//! # Design Decisions
//! - Filtering lives in the trait's provided methods; sinks only implement `write`
//! - Sinks never report delivery failures; missing host capabilities mean no-op
//! - Construction is the only fallible step (bad URL, bad header)

pub mod bridge;
pub mod console;
pub mod remote;

use thiserror::Error;

use crate::event::{passes, Level, LogEvent};

pub use bridge::{BridgeSink, ExternalLogger, TracingBackend};
pub use console::{Console, ConsoleSink, StdConsole};
pub use remote::RemoteSink;

/// A pluggable sink receiving filtered log events.
pub trait Transport: Send + Sync {
    /// Minimum level this transport accepts. `None` means info.
    fn threshold(&self) -> Option<Level>;

    /// Perform the side effect for an event that already passed the threshold.
    fn write(&self, level: Level, event: &LogEvent);

    /// Deliver `event` at `level` if it clears this transport's threshold.
    fn log(&self, level: Level, event: &LogEvent) {
        if passes(self.threshold(), level) {
            self.write(level, event);
        }
    }

    fn debug(&self, event: &LogEvent) {
        self.log(Level::Debug, event);
    }

    fn info(&self, event: &LogEvent) {
        self.log(Level::Info, event);
    }

    fn warn(&self, event: &LogEvent) {
        self.log(Level::Warn, event);
    }

    fn error(&self, event: &LogEvent) {
        self.log(Level::Error, event);
    }
}

/// Errors raised while constructing a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid remote URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}
