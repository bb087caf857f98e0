//! Springer Nature metadata API source.
//!
//! Queries the JSON metadata endpoint and maps each returned record to a
//! bibliographic record: book chapters (records with an ISBN) become
//! `incollection` entries, everything else becomes an `article`.

use chrono::{Datelike, NaiveDate};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::sync::Arc;

use super::pipeline::{query_url, Parser, SearchFetcher, UrlBuilder};
use super::transport::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{ParseError, SearchError};
use crate::model::{field, EntryType, Record};

pub const NAME: &str = "Springer";
pub const API_URL: &str = "https://api.springernature.com/meta/v2/json";
/// Number of results requested per query.
pub const PAGE_SIZE: u32 = 20;

/// Springer fetcher over the given transport.
///
/// A missing API key is reported as a configuration error on the first
/// non-blank search, before any request is issued.
pub fn fetcher(api_key: Option<String>, transport: Arc<dyn Transport>) -> SearchFetcher {
    SearchFetcher::new(
        NAME,
        SpringerUrl { api_key },
        SpringerParser,
        transport,
    )
}

/// Springer fetcher over a real HTTP transport built from `config`.
pub fn from_config(config: &Config) -> Result<SearchFetcher, SearchError> {
    let transport = HttpTransport::new(config)?;
    Ok(fetcher(config.springer_api_key.clone(), Arc::new(transport)))
}

/// Builds `API_URL?q=<query>&api_key=<key>&p=20`.
#[derive(Debug, Clone)]
pub struct SpringerUrl {
    api_key: Option<String>,
}

impl UrlBuilder for SpringerUrl {
    fn url_for_query(&self, query: &str) -> Result<Url, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::configuration("Springer API key is not configured"))?;
        let page_size = PAGE_SIZE.to_string();
        query_url(API_URL, "q", query, &[("api_key", api_key), ("p", page_size.as_str())])
    }
}

/// Parses the Springer JSON response.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpringerParser;

impl Parser for SpringerParser {
    fn parse_entries(&self, input: &mut dyn Read) -> Result<Vec<Record>, ParseError> {
        let mut raw = Vec::new();
        input.read_to_end(&mut raw)?;

        let value: Value = serde_json::from_slice(&raw)?;
        if !value.is_object() {
            return Err(ParseError::Malformed(
                "expected a JSON object at the top level".into(),
            ));
        }

        let response: SpringerResponse = serde_json::from_value(value)?;
        Ok(response.records.into_iter().map(SpringerRecord::into_record).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SpringerResponse {
    #[serde(default)]
    records: Vec<SpringerRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SpringerRecord {
    title: Option<String>,
    creators: Vec<Creator>,
    publication_name: Option<String>,
    isbn: Option<String>,
    issn: Option<String>,
    doi: Option<String>,
    volume: Option<String>,
    number: Option<String>,
    publisher: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    starting_page: Option<String>,
    ending_page: Option<String>,
    publication_date: Option<String>,
    url: Vec<UrlEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Creator {
    creator: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UrlEntry {
    value: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SpringerRecord {
    fn into_record(self) -> Record {
        let mut record = match non_empty(self.isbn) {
            Some(isbn) => {
                let mut record = Record::new(EntryType::InCollection).with_field(field::ISBN, isbn);
                if let Some(name) = non_empty(self.publication_name) {
                    record.set_field(field::BOOKTITLE, name);
                }
                record
            }
            None => {
                let mut record = Record::new(EntryType::Article);
                if let Some(issn) = non_empty(self.issn) {
                    record.set_field(field::ISSN, issn);
                }
                if let Some(name) = non_empty(self.publication_name) {
                    record.set_field(field::JOURNAL, name);
                }
                record
            }
        };

        let authors: Vec<String> = self
            .creators
            .into_iter()
            .filter_map(|c| non_empty(c.creator))
            .collect();
        if !authors.is_empty() {
            record.set_field(field::AUTHOR, authors.join(" and "));
        }

        for (name, value) in [
            (field::TITLE, self.title),
            (field::DOI, self.doi),
            (field::VOLUME, self.volume),
            (field::NUMBER, self.number),
            (field::PUBLISHER, self.publisher),
            (field::ABSTRACT, self.abstract_text),
        ] {
            if let Some(value) = non_empty(value) {
                record.set_field(name, value);
            }
        }

        match (non_empty(self.starting_page), non_empty(self.ending_page)) {
            (Some(start), Some(end)) if start != end => {
                record.set_field(field::PAGES, format!("{}--{}", start, end));
            }
            (Some(start), _) => {
                record.set_field(field::PAGES, start);
            }
            _ => {}
        }

        if let Some(date) = non_empty(self.publication_date) {
            set_date_fields(&mut record, &date);
        }

        if let Some(url) = self.url.into_iter().find_map(|u| non_empty(u.value)) {
            record.set_field(field::URL, url);
        }

        record
    }
}

fn set_date_fields(record: &mut Record, date: &str) {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => {
            record.set_field(field::DATE, date);
            record.set_field(field::YEAR, parsed.year().to_string());
            record.set_field(field::MONTH, parsed.month().to_string());
        }
        Err(_) => {
            let year: String = date.chars().take(4).collect();
            if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
                record.set_field(field::YEAR, year);
            }
        }
    }
}
