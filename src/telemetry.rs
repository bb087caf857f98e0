//! Tracing setup for applications embedding the library.

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Install a JSON tracing subscriber filtered by `RUST_LOG`, falling back to
/// `config.log_level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(config));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .is_ok()
}

/// Filter built from `config.log_level`; an unparseable level means `info`.
fn level_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        warn!(log_level = %config.log_level, error = %e, "Invalid log level, using info");
        EnvFilter::new("info")
    })
}
