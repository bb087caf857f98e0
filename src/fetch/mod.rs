//! Remote fetch module: query -> URL -> GET -> parse -> cleanup -> records.
//!
//! This module provides a `Fetcher` trait and implementations:
//! - `SearchFetcher` - The generic pipeline, configured per source
//! - `springer` - The Springer Nature metadata API configuration
//!
//! `fetch_all` runs several fetchers concurrently.

mod concurrent;
mod pipeline;
pub mod springer;
pub mod transport;

use crate::error::SearchError;
use crate::model::Record;

pub use concurrent::{fetch_all, SourceResult};
pub use pipeline::{
    query_url, MoveField, NoCleanup, Parser, PostCleanup, SearchFetcher, UrlBuilder,
};
pub use transport::{HttpResponse, HttpTransport, MockTransport, Transport, TransportError};

/// A remote source that turns a free-text query into records.
pub trait Fetcher: Send + Sync {
    /// Display name of the source.
    fn name(&self) -> &str;

    /// Search the source.
    ///
    /// # Returns
    /// Records in the order the source produced them; empty for a blank
    /// query, in which case no request is made.
    fn perform_search(&self, query: &str) -> Result<Vec<Record>, SearchError>;
}
