//! Remote HTTP sink.
//!
//! # Responsibilities
//! - POST `{ level, message, data, timestamp }` as JSON to a collector
//! - Merge caller headers over `Content-Type: application/json`
//!
//! # Design Decisions
//! - Fire-and-forget: the POST runs on a spawned task nobody awaits
//! - No retry, no timeout beyond reqwest defaults, no backpressure
//! - Failures (network errors, non-2xx) are counted, never logged or raised
//! - The runtime current at construction is kept, so events logged from plain
//!   threads are still sent; with no runtime at all the sink is a no-op

use chrono::{SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::runtime::Handle;
use url::Url;

use crate::event::{Level, LogEvent};
use crate::observability::metrics;
use crate::transport::{Transport, TransportError};

/// Wire body of a remote log POST.
#[derive(Debug, Serialize)]
struct RemotePayload<'a> {
    level: Level,
    message: &'a str,
    data: &'a Map<String, Value>,
    timestamp: String,
}

/// Transport shipping events to an HTTP collector.
#[derive(Debug, Clone)]
pub struct RemoteSink {
    url: Url,
    threshold: Option<Level>,
    headers: HeaderMap,
    client: Client,
    runtime: Option<Handle>,
}

impl RemoteSink {
    /// Create a sink posting to `url`.
    ///
    /// Caller `headers` are applied after `Content-Type`, so they may override it.
    pub fn new<I, K, V>(
        url: &str,
        threshold: impl Into<Option<Level>>,
        headers: I,
    ) -> Result<Self, TransportError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = parse_url(url)?;
        let headers = build_headers(headers)?;
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            url,
            threshold: threshold.into(),
            headers,
            client,
            runtime: Handle::try_current().ok(),
        })
    }

    /// Destination URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Headers sent with every request, `Content-Type` included.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, TransportError> {
    let url = Url::parse(raw).map_err(|e| TransportError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TransportError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

pub(crate) fn build_headers<I, K, V>(extra: I) -> Result<HeaderMap, TransportError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = name.as_ref();
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value.as_ref()).map_err(|e| TransportError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

fn payload(level: Level, event: &LogEvent) -> RemotePayload<'_> {
    RemotePayload {
        level,
        message: &event.message,
        data: &event.data,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

impl Transport for RemoteSink {
    fn threshold(&self) -> Option<Level> {
        self.threshold
    }

    fn write(&self, level: Level, event: &LogEvent) {
        let Some(runtime) = Handle::try_current().ok().or_else(|| self.runtime.clone()) else {
            return;
        };

        // Content-Type is already in `headers`, so `json` leaves it alone.
        let request = self
            .client
            .post(self.url.clone())
            .headers(self.headers.clone())
            .json(&payload(level, event));

        runtime.spawn(async move {
            match request.send().await {
                Ok(response) if response.status().is_success() => {}
                _ => metrics::record_remote_send_failure(),
            }
        });
    }
}
