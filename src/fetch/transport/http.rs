//! Real HTTP transport using a blocking reqwest client.

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, error};

use super::{HttpResponse, Transport, TransportError};
use crate::config::Config;
use crate::error::SearchError;

/// Blocking HTTP transport. One client is shared; every `get` uses its own
/// connection from the client's pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with the configured timeout and user agent.
    ///
    /// Must not be called from inside an async context; use
    /// `tokio::task::spawn_blocking` there.
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client");
                SearchError::configuration("Failed to build HTTP client").with_source(e)
            })?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();

        // Query strings may carry API keys; log host and path only
        debug!(
            host = url.host_str().unwrap_or_default(),
            path = url.path(),
            status,
            "Received HTTP response"
        );

        Ok(HttpResponse::new(status, response))
    }
}
