//! Well-known field names. Field names are case-insensitive; these are the
//! normalized (lower-case) forms.

pub const ABSTRACT: &str = "abstract";
pub const AUTHOR: &str = "author";
pub const BOOKTITLE: &str = "booktitle";
pub const DATE: &str = "date";
pub const DOI: &str = "doi";
pub const ISBN: &str = "isbn";
pub const ISSN: &str = "issn";
pub const JOURNAL: &str = "journal";
pub const KEYWORDS: &str = "keywords";
pub const MONTH: &str = "month";
pub const NUMBER: &str = "number";
pub const PAGES: &str = "pages";
pub const PUBLISHER: &str = "publisher";
pub const TITLE: &str = "title";
pub const URL: &str = "url";
pub const VOLUME: &str = "volume";
pub const YEAR: &str = "year";
