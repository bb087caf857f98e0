//! Error types for search and retrieval.
//!
//! Every failure of a remote fetch (and the one failure of local search, an
//! invalid regular expression) is surfaced as a single [`SearchError`] carrying
//! an [`ErrorKind`] and, where available, the underlying cause.

use std::fmt;

/// Boxed underlying cause of a [`SearchError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The class of failure a [`SearchError`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The query could not be turned into a request, or a regex query is invalid.
    Configuration,
    /// The remote source answered 401 or 403.
    Authorization,
    /// Connection, timeout, I/O or unexpected HTTP status.
    Network,
    /// The response body could not be parsed into records.
    Parse,
}

impl ErrorKind {
    /// Stable lowercase label, used for metrics and structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Network => "network",
            ErrorKind::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search-level error returned by fetchers and query compilation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SearchError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl SearchError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure reported by a [`Parser`](crate::fetch::Parser).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the body failed; this is a transport problem, not a format one.
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ParseError> for SearchError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Io(_) => SearchError::network("A network error occurred").with_source(err),
            other => SearchError::parse("Fetched data could not be parsed to entries").with_source(other),
        }
    }
}
