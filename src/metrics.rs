//! Metrics for fetch and local search operations.
//!
//! Uses the `metrics` facade only; installing a recorder/exporter is left
//! to the embedding application. Without one, every call is a no-op.

use metrics::{counter, describe_counter, describe_histogram, histogram};

use crate::error::ErrorKind;

pub const FETCH_LATENCY_MS: &str = "bibsearch_fetch_latency_ms";
pub const FETCH_TOTAL: &str = "bibsearch_fetch_total";
pub const FETCH_ERRORS_TOTAL: &str = "bibsearch_fetch_errors_total";
pub const LOCAL_SEARCH_TOTAL: &str = "bibsearch_local_search_total";

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_histogram!(
        FETCH_LATENCY_MS,
        "Time taken for remote fetch operations in milliseconds"
    );
    describe_counter!(FETCH_TOTAL, "Total number of remote fetches issued");
    describe_counter!(
        FETCH_ERRORS_TOTAL,
        "Total number of failed remote fetches, by error kind"
    );
    describe_counter!(
        LOCAL_SEARCH_TOTAL,
        "Total number of local collection searches"
    );
}

/// Record a fetch latency measurement.
pub fn record_fetch_latency(source: &str, latency_ms: f64) {
    histogram!(FETCH_LATENCY_MS, "source" => source.to_string()).record(latency_ms);
}

/// Increment the fetch count.
pub fn increment_fetch_count(source: &str) {
    counter!(FETCH_TOTAL, "source" => source.to_string()).increment(1);
}

/// Increment the fetch error count for the given kind.
pub fn increment_fetch_errors(source: &str, kind: ErrorKind) {
    counter!(
        FETCH_ERRORS_TOTAL,
        "source" => source.to_string(),
        "kind" => kind.as_str()
    )
    .increment(1);
}

/// Increment the local search count.
pub fn increment_local_search_count() {
    counter!(LOCAL_SEARCH_TOTAL).increment(1);
}
