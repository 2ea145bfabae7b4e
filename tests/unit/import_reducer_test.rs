//! Unit tests for the import reducer: URL dedup, defaulting, and the
//! documented prepend order.

use pouch::services::import_reducer::merge;
use pouch::types::import::ImportRecord;
use pouch::types::link::Link;
use time::macros::datetime;
use time::OffsetDateTime;

const NOW: OffsetDateTime = datetime!(2024-06-01 12:00:00 UTC);

fn existing(id: &str, url: &str) -> Link {
    Link {
        id: id.to_string(),
        url: url.to_string(),
        title: id.to_string(),
        tags: vec![],
        saved_at: "2024-01-15T10:00:00Z".to_string(),
    }
}

fn record(url: &str) -> ImportRecord {
    ImportRecord {
        url: url.to_string(),
        title: format!("Title for {}", url),
        ..ImportRecord::default()
    }
}

/// New records are added and counted.
#[test]
fn test_adds_new_records() {
    let mut links = vec![existing("a", "https://a.com/")];
    let added = merge(&mut links, &[record("https://b.com/")], NOW);
    assert_eq!(added, 1);
    assert_eq!(links.len(), 2);
}

/// Records are prepended one at a time in input order, so the last accepted
/// incoming record ends up frontmost and the pre-existing links keep their
/// relative order behind the batch.
#[test]
fn test_prepend_per_item_order() {
    let mut links = vec![existing("old", "https://old.com/")];
    let incoming = [
        record("https://first.com/"),
        record("https://second.com/"),
        record("https://third.com/"),
    ];
    let added = merge(&mut links, &incoming, NOW);
    assert_eq!(added, 3);
    let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        [
            "https://third.com/",
            "https://second.com/",
            "https://first.com/",
            "https://old.com/"
        ]
    );
}

/// A URL already in the collection is skipped silently and the existing link
/// is left unmodified.
#[test]
fn test_existing_url_is_skipped() {
    let mut links = vec![existing("a", "https://a.com/")];
    let before = links.clone();
    let added = merge(&mut links, &[record("https://a.com/")], NOW);
    assert_eq!(added, 0);
    assert_eq!(links, before);
}

/// A URL occurring twice within one batch is only added once.
#[test]
fn test_duplicate_within_batch_added_once() {
    let mut links = Vec::new();
    let incoming = [record("https://a.com/"), record("https://a.com/")];
    let added = merge(&mut links, &incoming, NOW);
    assert_eq!(added, 1);
    assert_eq!(links.len(), 1);
}

/// Records without a URL are skipped.
#[test]
fn test_empty_url_is_skipped() {
    let mut links = Vec::new();
    let added = merge(&mut links, &[record("")], NOW);
    assert_eq!(added, 0);
    assert!(links.is_empty());
}

/// Missing fields get their documented defaults: generated id, title = url,
/// savedAt = the injected current time.
#[test]
fn test_defaults_are_applied() {
    let mut links = Vec::new();
    let incoming = [ImportRecord {
        url: "https://a.com/".to_string(),
        ..ImportRecord::default()
    }];
    merge(&mut links, &incoming, NOW);

    let link = &links[0];
    assert!(!link.id.is_empty());
    assert_eq!(link.title, "https://a.com/");
    assert!(link.tags.is_empty());
    assert_eq!(link.saved_at, "2024-06-01T12:00:00Z");
}

/// Supplied id and savedAt are carried over; an empty id string counts as
/// absent and is replaced by a generated one.
#[test]
fn test_supplied_fields_are_kept() {
    let mut links = Vec::new();
    let incoming = [
        ImportRecord {
            id: Some("keep-me".to_string()),
            url: "https://a.com/".to_string(),
            title: "A".to_string(),
            tags: vec!["x".to_string()],
            saved_at: Some("2020-02-21T19:21:40Z".to_string()),
        },
        ImportRecord {
            id: Some(String::new()),
            url: "https://b.com/".to_string(),
            ..ImportRecord::default()
        },
    ];
    merge(&mut links, &incoming, NOW);

    let a = links.iter().find(|l| l.url == "https://a.com/").unwrap();
    assert_eq!(a.id, "keep-me");
    assert_eq!(a.saved_at, "2020-02-21T19:21:40Z");
    assert_eq!(a.tags, ["x"]);

    let b = links.iter().find(|l| l.url == "https://b.com/").unwrap();
    assert!(!b.id.is_empty());
}

/// The added count reflects only records actually merged.
#[test]
fn test_added_count_after_dedup() {
    let mut links = vec![existing("a", "https://a.com/")];
    let incoming = [
        record("https://a.com/"), // pre-existing
        record("https://b.com/"), // new
        record(""),               // missing url
        record("https://b.com/"), // dup within batch
    ];
    assert_eq!(merge(&mut links, &incoming, NOW), 1);
}
