//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check remote URLs parse and use http(s)
//! - Check header names and values are legal HTTP
//! - Check the metrics address parses when metrics are enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: FanlogConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted, so building transports cannot fail afterwards

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::FanlogConfig;
use crate::transport::remote::{build_headers, parse_url};
use crate::transport::TransportError;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("remote[{index}]: {reason}")]
    Remote { index: usize, reason: String },

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed config, collecting every problem found.
pub fn validate_config(config: &FanlogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, remote) in config.remote.iter().enumerate() {
        let checks: [Result<(), TransportError>; 2] = [
            parse_url(&remote.url).map(|_| ()),
            build_headers(&remote.headers).map(|_| ()),
        ];
        for check in checks {
            if let Err(e) = check {
                errors.push(ValidationError::Remote {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RemoteConfig;
    use std::collections::BTreeMap;

    fn remote(url: &str, headers: &[(&str, &str)]) -> RemoteConfig {
        RemoteConfig {
            url: url.to_string(),
            level: None,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FanlogConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = FanlogConfig::default();
        config.remote.push(remote("http://ok.example/logs", &[]));
        config.remote.push(remote("not a url", &[("bad name", "v")]));
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "localhost".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::Remote { index: 1, .. }));
        assert!(matches!(errors[1], ValidationError::Remote { index: 1, .. }));
        assert_eq!(
            errors[2],
            ValidationError::MetricsAddress("localhost".into())
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = FanlogConfig::default();
        config.observability.metrics_address = "garbage".into();
        assert!(validate_config(&config).is_ok());
    }
}
