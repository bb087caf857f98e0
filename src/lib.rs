//! Search and retrieval core for bibliographic records.
//!
//! - `fetch` - Remote fetch pipeline: query -> URL -> GET -> parse -> cleanup
//! - `search` - Local multi-field search over an in-memory collection
//! - `groups` - Named membership groups over records
//! - `model` - Records and collections

pub mod config;
pub mod error;
pub mod fetch;
pub mod groups;
pub mod metrics;
pub mod model;
pub mod search;
pub mod telemetry;

pub use error::{ErrorKind, ParseError, SearchError};
pub use model::{Collection, EntryType, Record};
