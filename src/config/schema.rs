//! Configuration schema definitions.
//!
//! This module defines the configuration file structure for fanlog.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::dispatch::TransportList;
use crate::event::Level;
use crate::transport::{ConsoleSink, RemoteSink, Transport};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FanlogConfig {
    /// Console sink settings.
    pub console: ConsoleConfig,

    /// Remote HTTP sinks, in delivery order.
    pub remote: Vec<RemoteConfig>,

    /// fanlog's own diagnostics.
    pub observability: ObservabilityConfig,
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Install a console sink.
    pub enabled: bool,

    /// Minimum level; absent means info.
    pub level: Option<Level>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Some(Level::Info),
        }
    }
}

/// Remote HTTP sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RemoteConfig {
    /// Collector URL receiving POSTed events.
    pub url: String,

    /// Minimum level; absent means info.
    #[serde(default)]
    pub level: Option<Level>,

    /// Extra request headers, applied after `Content-Type`.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directives for fanlog's own log output (overridden by `RUST_LOG`).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9464".to_string(),
        }
    }
}

impl FanlogConfig {
    /// Build the transport list this config describes: console first, then remotes.
    pub fn build_transports(&self) -> Result<TransportList, ConfigError> {
        let mut transports: TransportList = Vec::with_capacity(1 + self.remote.len());

        if self.console.enabled {
            transports.push(Arc::new(ConsoleSink::new(self.console.level)));
        }

        for remote in &self.remote {
            let sink = RemoteSink::new(&remote.url, remote.level, &remote.headers)
                .map_err(ConfigError::Transport)?;
            transports.push(Arc::new(sink) as Arc<dyn Transport>);
        }

        Ok(transports)
    }
}
