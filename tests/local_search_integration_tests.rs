//! Integration tests for local search and entry groups.
//!
//! These tests build a small in-memory library of articles and verify:
//! - Multi-field, punctuation-insensitive token matching
//! - Result order following insertion order
//! - Explicit and automatic group membership

use bibsearch::groups::{compose, Group, GroupHierarchyType};
use bibsearch::model::field;
use bibsearch::search::{search, DatabaseSearcher, Query};
use bibsearch::{Collection, EntryType, Record};

fn article(title: &str, author: &str, journal: &str) -> Record {
    Record::new(EntryType::Article)
        .with_field(field::TITLE, title)
        .with_field(field::AUTHOR, author)
        .with_field(field::JOURNAL, journal)
}

/// Five articles with distinct title/author/journal fields.
fn library() -> (Collection, Vec<Record>) {
    let entries = vec![
        article(
            "An Incredibly Interesting Article",
            "Mr. Know It All",
            "International Journal of Interesting Stuff",
        ),
        article("An Article About Software", "John Doe", "The Software Journal"),
        article("An Article About Cooking", "Jane Doe", "Cooking International"),
        article(
            "Global Warming Explained",
            "Donald J. Trump",
            "International Journal for Environmental Research",
        ),
        article(
            "CCMV-Based Enzymatic Nanoreactors",
            "Ruiter, Mark V. and Putri, Rindia M. and Cornelissen, Jeroen J. L. M.",
            "Virus-Derived Nanoparticles for Advanced Technologies",
        ),
    ];

    let mut collection = Collection::new();
    collection.insert_all(entries.clone());
    (collection, entries)
}

#[test]
fn test_search_by_title_word() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::new("software", false, false)).unwrap();
    assert_eq!(results, vec![&entries[1]]);
}

#[test]
fn test_search_by_author_ignores_punctuation() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::new("Ruiter Mark V.", false, false)).unwrap();
    assert_eq!(results, vec![&entries[4]]);
}

#[test]
fn test_search_by_journal() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::new("Environmental", false, false)).unwrap();
    assert_eq!(results, vec![&entries[3]]);
}

#[test]
fn test_search_results_are_insertion_ordered_subsequence() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::plain("international")).unwrap();
    assert_eq!(results, vec![&entries[0], &entries[2], &entries[3]]);
}

#[test]
fn test_case_sensitive_search() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::new("Doe", true, false)).unwrap();
    assert_eq!(results, vec![&entries[1], &entries[2]]);
    assert!(search(&collection, &Query::new("doe", true, false))
        .unwrap()
        .is_empty());
}

#[test]
fn test_regex_search() {
    let (collection, entries) = library();

    let results = search(&collection, &Query::new(r"^An Article About (Software|Cooking)$", false, true))
        .unwrap();
    assert_eq!(results, vec![&entries[1], &entries[2]]);
}

#[test]
fn test_every_result_has_a_field_with_all_tokens() {
    let (collection, _) = library();
    let query = Query::plain("journal interesting");
    let searcher = DatabaseSearcher::new(&query).unwrap();

    for record in &collection {
        let expected = record.fields().any(|(_, value)| {
            let value_tokens = bibsearch::search::tokenize(value, false);
            bibsearch::search::tokenize(query.text(), false)
                .iter()
                .all(|q| value_tokens.iter().any(|v| v.contains(q.as_str())))
        });
        assert_eq!(searcher.is_match(record), expected);
    }
}

#[test]
fn test_explicit_group_contains_registered_entry() {
    let (_, entries) = library();

    let mut group = Group::explicit("My group", GroupHierarchyType::Independent);
    group.register(&entries[0]);

    assert!(group.contains(&entries[0]));
    assert!(!group.contains(&entries[1]));

    // Registering again changes nothing
    group.register(&entries[0]);
    assert!(group.contains(&entries[0]));
    assert!(!group.contains(&entries[1]));
}

#[test]
fn test_group_members_and_hierarchy() {
    let (collection, entries) = library();

    let mut parent = Group::explicit("Reading list", GroupHierarchyType::Independent);
    parent.register(&entries[1]);
    parent.register(&entries[2]);

    let doe = Group::automatic_keyword(
        "Doe",
        GroupHierarchyType::Refining,
        field::AUTHOR,
        ' ',
        "doe",
        false,
    );

    let refined = compose(doe.hierarchy(), |r| doe.contains(r), |r| parent.contains(r));
    let members: Vec<&Record> = collection.iter().filter(|r| refined(*r)).collect();
    assert_eq!(members, vec![&entries[1], &entries[2]]);

    assert_eq!(parent.members(&collection), vec![&entries[1], &entries[2]]);
    assert!(doe.contains_within(&entries[1], parent.contains(&entries[1])));
    assert!(!doe.contains_within(&entries[0], parent.contains(&entries[0])));
}

#[test]
fn test_edited_record_is_seen_by_search_and_groups() {
    let (mut collection, entries) = library();
    let cooking = Group::automatic_keyword(
        "Cooking",
        GroupHierarchyType::Independent,
        field::KEYWORDS,
        ',',
        "cooking",
        false,
    );
    assert!(search(&collection, &Query::plain("nanoreactors catalysis")).unwrap().is_empty());
    assert!(cooking.members(&collection).is_empty());

    if let Some(record) = collection.get_mut(4) {
        record.set_field(field::TITLE, "CCMV-Based Enzymatic Nanoreactors for Catalysis");
    }
    if let Some(record) = collection.get_mut(2) {
        record.set_field(field::KEYWORDS, "food, cooking");
    }

    let hits = search(&collection, &Query::plain("nanoreactors catalysis")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].field(field::TITLE),
        Some("CCMV-Based Enzymatic Nanoreactors for Catalysis")
    );

    let edited = collection.get(2).unwrap();
    assert!(cooking.contains(edited));
    assert_eq!(cooking.members(&collection), vec![edited]);

    // Positions are untouched: authors still line up with the originals
    assert_eq!(collection.len(), entries.len());
    for (record, original) in collection.iter().zip(&entries) {
        assert_eq!(record.field(field::AUTHOR), original.field(field::AUTHOR));
    }
}
