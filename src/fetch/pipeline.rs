//! The generic search-based fetch pipeline and its per-source strategies.
//!
//! A remote source is one `SearchFetcher` configured with:
//! - a `UrlBuilder` turning the query into a request URL,
//! - a `Parser` turning the response body into records,
//! - a `PostCleanup` correcting systematic source errors (default `NoCleanup`),
//! - a shared `Transport` issuing the GET.

use reqwest::Url;
use std::io::Read;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::transport::Transport;
use super::Fetcher;
use crate::error::{ParseError, SearchError};
use crate::metrics;
use crate::model::Record;

/// Builds the request URL for a query.
pub trait UrlBuilder: Send + Sync {
    fn url_for_query(&self, query: &str) -> Result<Url, SearchError>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&str) -> Result<Url, SearchError> + Send + Sync,
{
    fn url_for_query(&self, query: &str) -> Result<Url, SearchError> {
        self(query)
    }
}

/// Converts a response body into records. All-or-nothing.
pub trait Parser: Send + Sync {
    fn parse_entries(&self, input: &mut dyn Read) -> Result<Vec<Record>, ParseError>;
}

impl<F> Parser for F
where
    F: Fn(&mut dyn Read) -> Result<Vec<Record>, ParseError> + Send + Sync,
{
    fn parse_entries(&self, input: &mut dyn Read) -> Result<Vec<Record>, ParseError> {
        self(input)
    }
}

/// Post-processing of a freshly parsed record.
///
/// Only systematic errors of a source belong here, such as information the
/// source always puts in the wrong field or format. Cosmetic normalization
/// does not. Cleanups cannot fail.
pub trait PostCleanup: Send + Sync {
    fn cleanup(&self, record: &mut Record);
}

impl<F> PostCleanup for F
where
    F: Fn(&mut Record) + Send + Sync,
{
    fn cleanup(&self, record: &mut Record) {
        self(record)
    }
}

/// Leaves records untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCleanup;

impl PostCleanup for NoCleanup {
    fn cleanup(&self, _record: &mut Record) {}
}

/// Moves a value a source consistently puts in the wrong field.
///
/// Overwrites `to` when `from` is present; does nothing otherwise.
#[derive(Debug, Clone)]
pub struct MoveField {
    from: String,
    to: String,
}

impl MoveField {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl PostCleanup for MoveField {
    fn cleanup(&self, record: &mut Record) {
        if let Some(value) = record.clear_field(&self.from) {
            record.set_field(&self.to, value);
        }
    }
}

/// Build `base?<param>=<query>&<extra...>` with proper encoding.
pub fn query_url(
    base: &str,
    param: &str,
    query: &str,
    extra: &[(&str, &str)],
) -> Result<Url, SearchError> {
    let mut url = Url::parse(base)
        .map_err(|e| SearchError::configuration("Search URI is malformed").with_source(e))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair(param, query);
        for (key, value) in extra {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// One remote source: query -> URL -> GET -> parse -> cleanup -> records.
pub struct SearchFetcher {
    name: String,
    url_builder: Box<dyn UrlBuilder>,
    parser: Box<dyn Parser>,
    cleanup: Box<dyn PostCleanup>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for SearchFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchFetcher")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl SearchFetcher {
    /// Create a fetcher with the `NoCleanup` strategy.
    pub fn new(
        name: impl Into<String>,
        url_builder: impl UrlBuilder + 'static,
        parser: impl Parser + 'static,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            name: name.into(),
            url_builder: Box::new(url_builder),
            parser: Box::new(parser),
            cleanup: Box::new(NoCleanup),
            transport,
        }
    }

    /// Replace the cleanup strategy.
    pub fn with_cleanup(mut self, cleanup: impl PostCleanup + 'static) -> Self {
        self.cleanup = Box::new(cleanup);
        self
    }

    /// Run the pipeline once.
    ///
    /// A blank query returns no records without issuing a request. There is
    /// no retry; the first failure ends the call.
    pub fn perform_search(&self, query: &str) -> Result<Vec<Record>, SearchError> {
        if query.trim().is_empty() {
            debug!(source = %self.name, "Blank query, skipping request");
            return Ok(Vec::new());
        }

        let start = Instant::now();
        metrics::increment_fetch_count(&self.name);

        let result = self.run(query);
        let took_ms = start.elapsed().as_millis() as u64;
        metrics::record_fetch_latency(&self.name, took_ms as f64);

        match &result {
            Ok(records) => info!(
                source = %self.name,
                query = %query,
                hits = records.len(),
                took_ms,
                "Fetch completed"
            ),
            Err(e) => {
                metrics::increment_fetch_errors(&self.name, e.kind());
                warn!(
                    source = %self.name,
                    query = %query,
                    kind = %e.kind(),
                    error = %e,
                    took_ms,
                    "Fetch failed"
                );
            }
        }

        result
    }

    fn run(&self, query: &str) -> Result<Vec<Record>, SearchError> {
        let url = self.url_builder.url_for_query(query)?;

        let mut response = self.transport.get(&url).map_err(|e| {
            SearchError::network("A network error occurred").with_source(e)
        })?;

        if response.is_unauthorized() {
            return Err(SearchError::authorization(format!(
                "You are not authorized to access this resource (HTTP {})",
                response.status
            )));
        }
        if !response.is_success() {
            return Err(SearchError::network(format!(
                "Unexpected HTTP status {}",
                response.status
            )));
        }

        let mut records = self.parser.parse_entries(&mut response.body)?;
        for record in &mut records {
            self.cleanup.cleanup(record);
        }

        Ok(records)
    }
}

impl Fetcher for SearchFetcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn perform_search(&self, query: &str) -> Result<Vec<Record>, SearchError> {
        SearchFetcher::perform_search(self, query)
    }
}
