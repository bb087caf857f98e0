//! Named membership groups.

use std::collections::HashSet;
use tracing::debug;

use super::hierarchy::GroupHierarchyType;
use crate::model::{Collection, Record};

/// How a group decides membership.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Membership {
    /// Records registered by hand, compared by content.
    Explicit(HashSet<Record>),
    /// Derived from a field: the value, split on `separator`, holds `keyword`.
    AutomaticKeyword {
        field: String,
        separator: char,
        keyword: String,
        case_sensitive: bool,
    },
    /// Every record.
    AllEntries,
}

/// A named predicate over records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    hierarchy: GroupHierarchyType,
    membership: Membership,
}

impl Group {
    pub fn explicit(name: impl Into<String>, hierarchy: GroupHierarchyType) -> Self {
        Self {
            name: name.into(),
            hierarchy,
            membership: Membership::Explicit(HashSet::new()),
        }
    }

    pub fn automatic_keyword(
        name: impl Into<String>,
        hierarchy: GroupHierarchyType,
        field: &str,
        separator: char,
        keyword: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            hierarchy,
            membership: Membership::AutomaticKeyword {
                field: field.to_lowercase(),
                separator,
                keyword: keyword.into().trim().to_string(),
                case_sensitive,
            },
        }
    }

    pub fn all_entries() -> Self {
        Self {
            name: "All entries".to_string(),
            hierarchy: GroupHierarchyType::Independent,
            membership: Membership::AllEntries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hierarchy(&self) -> GroupHierarchyType {
        self.hierarchy
    }

    /// Register a record with an explicit group.
    ///
    /// Returns true if the record was newly added. Registering twice, or
    /// registering with a non-explicit group, has no effect.
    pub fn register(&mut self, record: &Record) -> bool {
        match &mut self.membership {
            Membership::Explicit(members) => {
                let added = members.insert(record.clone());
                debug!(group = %self.name, added, "Registered record");
                added
            }
            _ => false,
        }
    }

    /// Remove a record from an explicit group. Returns true if it was present.
    pub fn unregister(&mut self, record: &Record) -> bool {
        match &mut self.membership {
            Membership::Explicit(members) => members.remove(record),
            _ => false,
        }
    }

    /// Own membership, ignoring any parent.
    pub fn contains(&self, record: &Record) -> bool {
        match &self.membership {
            Membership::Explicit(members) => members.contains(record),
            Membership::AutomaticKeyword {
                field,
                separator,
                keyword,
                case_sensitive,
            } => record.field(field).is_some_and(|value| {
                value.split(*separator).map(str::trim).any(|candidate| {
                    if *case_sensitive {
                        candidate == keyword
                    } else {
                        candidate.to_lowercase() == keyword.to_lowercase()
                    }
                })
            }),
            Membership::AllEntries => true,
        }
    }

    /// Membership once combined with the parent's result for the same record.
    pub fn contains_within(&self, record: &Record, parent_contains: bool) -> bool {
        self.hierarchy.combine(self.contains(record), parent_contains)
    }

    /// Members of `collection`, in collection order.
    pub fn members<'a>(&self, collection: &'a Collection) -> Vec<&'a Record> {
        collection.iter().filter(|r| self.contains(r)).collect()
    }
}
