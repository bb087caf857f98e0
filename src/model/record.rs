//! A single bibliographic record.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Entry type tag. Open-ended: unknown names are kept as `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryType {
    Article,
    Book,
    InBook,
    InCollection,
    InProceedings,
    #[default]
    Misc,
    PhdThesis,
    TechReport,
    Unpublished,
    Other(String),
}

impl EntryType {
    /// Lower-case type name.
    pub fn as_str(&self) -> &str {
        match self {
            EntryType::Article => "article",
            EntryType::Book => "book",
            EntryType::InBook => "inbook",
            EntryType::InCollection => "incollection",
            EntryType::InProceedings => "inproceedings",
            EntryType::Misc => "misc",
            EntryType::PhdThesis => "phdthesis",
            EntryType::TechReport => "techreport",
            EntryType::Unpublished => "unpublished",
            EntryType::Other(name) => name,
        }
    }

    /// Resolve a type name, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        match lower.as_str() {
            "article" => EntryType::Article,
            "book" => EntryType::Book,
            "inbook" => EntryType::InBook,
            "incollection" => EntryType::InCollection,
            "inproceedings" => EntryType::InProceedings,
            "misc" => EntryType::Misc,
            "phdthesis" => EntryType::PhdThesis,
            "techreport" => EntryType::TechReport,
            "unpublished" => EntryType::Unpublished,
            _ => EntryType::Other(lower),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EntryType {
    fn from(name: String) -> Self {
        EntryType::from_name(&name)
    }
}

impl From<EntryType> for String {
    fn from(entry_type: EntryType) -> Self {
        entry_type.as_str().to_string()
    }
}

/// A bibliographic record: a type tag plus a field map.
///
/// Field names are case-insensitive and stored lower-cased. Two records are
/// equal when their type and field content are equal; there is no generated
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type", default)]
    entry_type: EntryType,
    #[serde(default, deserialize_with = "deserialize_fields")]
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            entry_type,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style `set_field`.
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn entry_type(&self) -> &EntryType {
        &self.entry_type
    }

    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.entry_type = entry_type;
    }

    /// Set a field, returning the previous value.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.fields.insert(normalize_name(name), value.into())
    }

    /// Remove a field, returning its value.
    pub fn clear_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(&normalize_name(name))
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&normalize_name(name)).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(&normalize_name(name))
    }

    /// Iterate `(name, value)` pairs in field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn deserialize_fields<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, value)| (normalize_name(&name), value))
        .collect())
}
