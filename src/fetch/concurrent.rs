//! Concurrent fetching from several sources, one blocking worker per source.

use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use super::Fetcher;
use crate::error::SearchError;
use crate::model::Record;

/// Outcome of one source in a multi-source fetch.
#[derive(Debug)]
pub struct SourceResult {
    pub source: String,
    pub result: Result<Vec<Record>, SearchError>,
}

/// Run `query` against every fetcher concurrently.
///
/// Each fetch runs on tokio's blocking pool. Results come back in the order
/// the fetchers were given; one source failing does not affect the others.
pub async fn fetch_all(fetchers: &[Arc<dyn Fetcher>], query: &str) -> Vec<SourceResult> {
    let start = Instant::now();

    let handles: Vec<_> = fetchers
        .iter()
        .map(|fetcher| {
            let fetcher = Arc::clone(fetcher);
            let query = query.to_string();
            let source = fetcher.name().to_string();
            let handle = tokio::task::spawn_blocking(move || fetcher.perform_search(&query));
            (source, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (source, handle) in handles {
        let result = handle.await.unwrap_or_else(|e| {
            error!(source = %source, error = %e, "Fetch task failed");
            Err(SearchError::network(format!("Fetch task failed: {}", e)))
        });
        results.push(SourceResult { source, result });
    }

    info!(
        sources = results.len(),
        failed = results.iter().filter(|r| r.result.is_err()).count(),
        took_ms = start.elapsed().as_millis() as u64,
        "Multi-source fetch completed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fetch::transport::{MockFailure, MockTransport};
    use crate::fetch::SearchFetcher;
    use crate::model::{field, EntryType};
    use std::io::Read;

    fn title_parser(input: &mut dyn Read) -> Result<Vec<Record>, crate::error::ParseError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        Ok(text
            .lines()
            .map(|t| Record::new(EntryType::Misc).with_field(field::TITLE, t))
            .collect())
    }

    fn source(name: &str, transport: MockTransport) -> Arc<dyn Fetcher> {
        let base = format!("https://{}.example.org/search", name.to_lowercase());
        Arc::new(SearchFetcher::new(
            name,
            move |query: &str| crate::fetch::query_url(&base, "q", query, &[]),
            title_parser,
            Arc::new(transport),
        ))
    }

    #[tokio::test]
    async fn test_results_keep_source_order() {
        let fetchers = vec![
            source("Alpha", MockTransport::with_body(200, "a1\na2")),
            source("Beta", MockTransport::failing(MockFailure::Connect)),
            source("Gamma", MockTransport::with_body(403, "")),
            source("Delta", MockTransport::with_body(200, "d1")),
        ];

        let results = fetch_all(&fetchers, "anything").await;
        let names: Vec<_> = results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma", "Delta"]);

        assert_eq!(results[0].result.as_ref().unwrap().len(), 2);
        assert_eq!(
            results[1].result.as_ref().unwrap_err().kind(),
            ErrorKind::Network
        );
        assert_eq!(
            results[2].result.as_ref().unwrap_err().kind(),
            ErrorKind::Authorization
        );
        assert_eq!(results[3].result.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_no_fetchers() {
        assert!(fetch_all(&[], "anything").await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_across_sources() {
        let fetchers = vec![source("Alpha", MockTransport::with_body(200, "a1"))];
        let results = fetch_all(&fetchers, " ").await;
        assert!(results[0].result.as_ref().unwrap().is_empty());
    }
}
