//! An ordered collection of records (an in-memory library).

use super::record::Record;

/// Ordered, mutable sequence of records.
///
/// Iteration follows insertion order. Nothing is deduplicated. Mutation is not
/// synchronized: callers sharing a collection across threads must guard
/// inserts themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning its position.
    pub fn insert(&mut self, record: Record) -> usize {
        self.entries.push(record);
        self.entries.len() - 1
    }

    pub fn insert_all(&mut self, records: impl IntoIterator<Item = Record>) {
        self.entries.extend(records);
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.entries.get(index)
    }

    /// Mutable access for field edits; the record keeps its position.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.entries.iter_mut()
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{field, EntryType};

    fn titled(title: &str) -> Record {
        Record::new(EntryType::Article).with_field(field::TITLE, title)
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut collection = Collection::new();
        assert_eq!(collection.insert(titled("first")), 0);
        assert_eq!(collection.insert(titled("second")), 1);
        collection.insert_all(vec![titled("third")]);

        let titles: Vec<_> = collection.iter().filter_map(|r| r.field(field::TITLE)).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let collection: Collection = vec![titled("same"), titled("same")].into_iter().collect();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(0), collection.get(1));
    }

    #[test]
    fn test_edit_in_place_keeps_order() {
        let mut collection: Collection = vec![titled("first"), titled("second")].into_iter().collect();

        if let Some(record) = collection.get_mut(0) {
            record.set_field(field::TITLE, "renamed");
            record.set_field(field::YEAR, "2018");
        }
        for record in collection.iter_mut() {
            record.clear_field(field::YEAR);
        }

        let titles: Vec<_> = collection.iter().filter_map(|r| r.field(field::TITLE)).collect();
        assert_eq!(titles, vec!["renamed", "second"]);
        assert!(collection.iter().all(|r| !r.has_field(field::YEAR)));
        assert!(collection.get_mut(2).is_none());
    }

    #[test]
    fn test_empty_collection() {
        let collection = Collection::new();
        assert!(collection.is_empty());
        assert!(collection.get(0).is_none());
        assert_eq!((&collection).into_iter().count(), 0);
    }
}
