//! Configuration for remote fetchers.
//!
//! The core operations take explicit values; `Config::from_env` is a
//! convenience for applications that configure the HTTP transport and
//! source credentials through environment variables.

use std::env;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Total timeout for one GET request (connect + body)
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// API key for the Springer Nature metadata API
    pub springer_api_key: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            springer_api_key: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `BIBSEARCH_TIMEOUT_SECS` - Request timeout (default: 30)
    /// - `BIBSEARCH_USER_AGENT` - User-Agent header (default: bibsearch/<version>)
    /// - `SPRINGER_API_KEY` - Springer Nature API key (default: unset)
    /// - `RUST_LOG` - Log level (default: info)
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match env::var("BIBSEARCH_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("BIBSEARCH_TIMEOUT_SECS", raw.clone()))?;
                if secs == 0 {
                    return Err(ConfigError::Invalid("BIBSEARCH_TIMEOUT_SECS", raw));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let user_agent = env::var("BIBSEARCH_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_user_agent);

        let springer_api_key = env::var("SPRINGER_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            timeout,
            user_agent,
            springer_api_key,
            log_level,
        })
    }
}

fn default_user_agent() -> String {
    format!("bibsearch/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
