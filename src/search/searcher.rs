//! Local search over an in-memory collection.

use tracing::debug;

use super::query::{Matcher, Query};
use crate::error::SearchError;
use crate::metrics;
use crate::model::{Collection, Record};

/// Filters a collection against a compiled query.
///
/// A record matches when any one of its fields satisfies the query on its
/// own; query tokens are not distributed across fields.
#[derive(Debug, Clone)]
pub struct DatabaseSearcher {
    matcher: Matcher,
}

impl DatabaseSearcher {
    pub fn new(query: &Query) -> Result<Self, SearchError> {
        Ok(Self {
            matcher: query.compile()?,
        })
    }

    pub fn is_match(&self, record: &Record) -> bool {
        record.fields().any(|(_, value)| self.matcher.matches(value))
    }

    /// Matching records, in collection order.
    pub fn matches<'a>(&self, collection: &'a Collection) -> Vec<&'a Record> {
        metrics::increment_local_search_count();

        if self.matcher.is_never() {
            return Vec::new();
        }

        let hits: Vec<&Record> = collection.iter().filter(|r| self.is_match(r)).collect();
        debug!(
            searched = collection.len(),
            hits = hits.len(),
            "Local search completed"
        );
        hits
    }
}

/// Compile `query` and search `collection` with it.
pub fn search<'a>(collection: &'a Collection, query: &Query) -> Result<Vec<&'a Record>, SearchError> {
    Ok(DatabaseSearcher::new(query)?.matches(collection))
}
