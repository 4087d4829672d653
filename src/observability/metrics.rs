//! Delivery metrics.
//!
//! # Metrics
//! - `fanlog_events_dispatched_total` (counter): events handed to the dispatcher, by level
//! - `fanlog_remote_send_failures_total` (counter): remote POSTs that errored or got non-2xx
//! - `fanlog_transport_panics_total` (counter): transport invocations that panicked
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::event::Level;

pub fn record_dispatch(level: Level) {
    ::metrics::counter!("fanlog_events_dispatched_total", "level" => level.as_str()).increment(1);
}

pub fn record_remote_send_failure() {
    ::metrics::counter!("fanlog_remote_send_failures_total").increment(1);
}

pub fn record_transport_panic() {
    ::metrics::counter!("fanlog_transport_panics_total").increment(1);
}

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}
