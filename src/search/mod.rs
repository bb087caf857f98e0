//! Local search module.
//!
//! - `query` - `Query` compilation into a per-field `Matcher`, and the tokenizer
//! - `searcher` - `DatabaseSearcher`, applying a matcher across a `Collection`

mod query;
mod searcher;

pub use query::{tokenize, Matcher, Query};
pub use searcher::{search, DatabaseSearcher};
