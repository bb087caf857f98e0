//! Mock transport returning canned responses, for tests and offline use.

use reqwest::Url;
use std::collections::HashMap;
use std::io::{self, Read};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use super::{HttpResponse, Transport, TransportError};

/// A transport-level failure to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Connect,
    Timeout,
    /// Headers arrive with the given status; reading the body then fails.
    BrokenBody(u16),
}

#[derive(Debug, Clone)]
enum Reply {
    Body { status: u16, body: Vec<u8> },
    Fail(MockFailure),
}

/// Transport that never touches the network.
///
/// Every request is logged. Replies are looked up by exact URL first and
/// fall back to the default reply (404 with an empty body unless set).
#[derive(Debug)]
pub struct MockTransport {
    default_reply: Reply,
    routes: HashMap<String, Reply>,
    requests: Mutex<Vec<Url>>,
}

impl MockTransport {
    /// Mock answering every request with 404.
    pub fn new() -> Self {
        info!("Initializing MockTransport");
        Self {
            default_reply: Reply::Body {
                status: 404,
                body: Vec::new(),
            },
            routes: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Mock answering every request with `status` and `body`.
    pub fn with_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let mut mock = Self::new();
        mock.default_reply = Reply::Body {
            status,
            body: body.into(),
        };
        mock
    }

    /// Mock failing every request.
    pub fn failing(failure: MockFailure) -> Self {
        let mut mock = Self::new();
        mock.default_reply = Reply::Fail(failure);
        mock
    }

    /// Answer requests for exactly `url` with `status` and `body`.
    pub fn route(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.to_string(),
            Reply::Body {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.log().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log().len()
    }

    fn log(&self) -> MutexGuard<'_, Vec<Url>> {
        self.requests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.log().push(url.clone());

        let reply = self.routes.get(url.as_str()).unwrap_or(&self.default_reply);
        match reply {
            Reply::Body { status, body } => Ok(HttpResponse::new(*status, io::Cursor::new(body.clone()))),
            Reply::Fail(MockFailure::Connect) => {
                Err(TransportError::Connect("mock connection refused".into()))
            }
            Reply::Fail(MockFailure::Timeout) => {
                Err(TransportError::Timeout("mock request timed out".into()))
            }
            Reply::Fail(MockFailure::BrokenBody(status)) => Ok(HttpResponse::new(*status, BrokenReader)),
        }
    }
}

/// Reader that fails on first use, like a connection reset mid-body.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "mock connection reset"))
    }
}
