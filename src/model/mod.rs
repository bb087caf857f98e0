//! Bibliographic data model: records and the collections holding them.
//!
//! - `Record` - A type tag plus a case-insensitive field map
//! - `Collection` - An ordered, insertion-preserving sequence of records
//! - `field` - Well-known field names

mod collection;
pub mod field;
mod record;

pub use collection::Collection;
pub use record::{EntryType, Record};
