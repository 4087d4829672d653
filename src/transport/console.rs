//! Console sink.
//!
//! # Responsibilities
//! - Render `message` followed by the full event object
//! - Route debug/info to stdout and warn/error to stderr
//! - Stay silent when the host has no usable console
//!
//! # Design Decisions
//! - The message appears twice (argument and inside the object) for log viewers
//! - Availability is probed once and cached; write errors are dropped

use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

use crate::event::{Level, LogEvent};
use crate::transport::Transport;

/// Host console capability.
pub trait Console: Send + Sync {
    /// Whether the console exists at all. Probed once per sink.
    fn is_available(&self) -> bool {
        true
    }

    /// Whether the console has a method for `level`.
    fn supports(&self, _level: Level) -> bool {
        true
    }

    /// Render one event as `(message, event)`.
    fn emit(&self, level: Level, message: &str, event: &Value) -> io::Result<()>;
}

/// Process stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl StdConsole {
    fn probe() -> bool {
        static PROBE: OnceLock<bool> = OnceLock::new();
        *PROBE.get_or_init(|| {
            if cfg!(all(target_family = "wasm", not(target_os = "wasi"))) {
                return false;
            }
            io::stdout().flush().is_ok() && io::stderr().flush().is_ok()
        })
    }
}

impl Console for StdConsole {
    fn is_available(&self) -> bool {
        Self::probe()
    }

    fn emit(&self, level: Level, message: &str, event: &Value) -> io::Result<()> {
        match level {
            Level::Debug | Level::Info => {
                let mut out = io::stdout().lock();
                writeln!(out, "{} {}", message, event)
            }
            Level::Warn | Level::Error => {
                let mut err = io::stderr().lock();
                writeln!(err, "{} {}", message, event)
            }
        }
    }
}

/// Transport rendering events to a [`Console`].
pub struct ConsoleSink {
    threshold: Option<Level>,
    console: Arc<dyn Console>,
    available: OnceLock<bool>,
}

impl ConsoleSink {
    /// Console sink on stdout/stderr.
    pub fn new(threshold: impl Into<Option<Level>>) -> Self {
        Self::with_console(threshold, Arc::new(StdConsole))
    }

    /// Console sink writing to a caller-supplied console.
    pub fn with_console(threshold: impl Into<Option<Level>>, console: Arc<dyn Console>) -> Self {
        Self {
            threshold: threshold.into(),
            console,
            available: OnceLock::new(),
        }
    }

    fn console_available(&self) -> bool {
        *self.available.get_or_init(|| self.console.is_available())
    }
}

impl Transport for ConsoleSink {
    fn threshold(&self) -> Option<Level> {
        self.threshold
    }

    fn write(&self, level: Level, event: &LogEvent) {
        if !self.console_available() || !self.console.supports(level) {
            return;
        }
        let _ = self.console.emit(level, &event.message, &event.to_value());
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
