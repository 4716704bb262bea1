//! Tracing initialization.

use recruit_core::Config;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the default filter;
/// `LOG_JSON=true` switches to JSON lines for log collectors.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recruit_api=debug"));

    if config.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
