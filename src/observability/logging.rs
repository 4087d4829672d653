//! Subscriber setup for fanlog's own diagnostics.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives used when neither `RUST_LOG` nor config give one.
pub const DEFAULT_FILTER: &str = "fanlog=warn";

/// Build the filter: `RUST_LOG` wins, then `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber, writing to stderr.
///
/// Returns false if a subscriber was already installed.
pub fn init_logging(fallback: &str) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fallback_uses_default() {
        // Only meaningful when RUST_LOG is unset, but must never panic.
        let filter = env_filter("this is [not a filter");
        let _ = filter.to_string();
    }

    #[test]
    fn test_second_init_reports_false() {
        let _ = init_logging("fanlog=debug");
        assert!(!init_logging("fanlog=debug"));
    }
}
