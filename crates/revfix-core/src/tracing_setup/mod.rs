//! Structured tracing: subscriber installation and per-operation spans.

pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` when a
/// global subscriber was already installed, which is not an error: hosts and
/// test harnesses often install their own first.
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
