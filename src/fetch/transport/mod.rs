//! Transport boundary for remote fetches.
//!
//! This module provides a `Transport` trait and implementations:
//! - `HttpTransport` - Real HTTP via a blocking reqwest client
//! - `MockTransport` - Canned responses for tests and offline use

mod http;
mod mock;

use reqwest::Url;
use std::io::Read;

pub use http::HttpTransport;
pub use mock::{MockFailure, MockTransport};

/// Status and body of a completed GET. The body is closed when dropped.
pub struct HttpResponse {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Transport-level failures. All of them surface as network errors.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Client(err.to_string())
        }
    }
}

/// Issues a single GET request.
///
/// Implementations must be safe to share between concurrent fetches; each
/// call owns its own connection and response body.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}
