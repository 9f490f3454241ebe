//! Tracing setup shared by the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "unicode_finder=info";

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init() {
    init_with_default(DEFAULT_FILTER);
}

pub fn init_with_default(default_filter: &str) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(directives.as_deref(), default_filter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Parse `directives`, falling back to `default_filter` when unset or invalid.
pub fn build_filter(directives: Option<&str>, default_filter: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_when_unset() {
        let filter = build_filter(None, DEFAULT_FILTER);
        assert_eq!(filter.to_string(), DEFAULT_FILTER);

        let blank = build_filter(Some("  "), DEFAULT_FILTER);
        assert_eq!(blank.to_string(), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_directives_win() {
        let filter = build_filter(Some("unicode_finder=debug"), DEFAULT_FILTER);
        assert_eq!(filter.to_string(), "unicode_finder=debug");
    }

    #[test]
    fn test_invalid_directives_fall_back() {
        let filter = build_filter(Some("unicode_finder=loud"), DEFAULT_FILTER);
        assert_eq!(filter.to_string(), DEFAULT_FILTER);
    }
}
