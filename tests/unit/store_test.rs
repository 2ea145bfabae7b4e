//! Unit tests for the SQLite link store: snapshot round-trips, stored order,
//! delete semantics, and on-disk persistence across reopens.

use pouch::store::{LinkStore, SqliteStore};
use pouch::types::link::Link;
use tempfile::TempDir;

fn link(id: &str, url: &str, tags: &[&str]) -> Link {
    Link {
        id: id.to_string(),
        url: url.to_string(),
        title: format!("Title {}", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        saved_at: "2024-01-15T10:00:00Z".to_string(),
    }
}

/// A fresh store is empty.
#[test]
fn test_fresh_store_is_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert!(store.get_all().unwrap().is_empty());
}

/// replace_all followed by get_all returns the same snapshot in the same
/// order, including tags.
#[test]
fn test_snapshot_round_trip_preserves_order_and_tags() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let links = vec![
        link("newest", "https://n.com/", &["rust", "news"]),
        link("middle", "https://m.com/", &[]),
        link("oldest", "https://o.com/", &["archive"]),
    ];
    store.replace_all(&links).unwrap();
    assert_eq!(store.get_all().unwrap(), links);
}

/// replace_all replaces the whole collection, not a partial update.
#[test]
fn test_replace_all_is_whole_collection() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .replace_all(&[link("a", "https://a.com/", &[]), link("b", "https://b.com/", &[])])
        .unwrap();
    store.replace_all(&[link("c", "https://c.com/", &[])]).unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "c");
}

/// delete_by_id removes the row; deleting an absent id succeeds.
#[test]
fn test_delete_by_id() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .replace_all(&[link("a", "https://a.com/", &[]), link("b", "https://b.com/", &[])])
        .unwrap();

    store.delete_by_id("a").unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "b");

    // Absent id: still Ok, collection unchanged.
    store.delete_by_id("a").unwrap();
    assert_eq!(store.get_all().unwrap().len(), 1);
}

/// Order survives a delete in the middle of the collection.
#[test]
fn test_order_survives_delete() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .replace_all(&[
            link("a", "https://a.com/", &[]),
            link("b", "https://b.com/", &[]),
            link("c", "https://c.com/", &[]),
        ])
        .unwrap();

    store.delete_by_id("b").unwrap();
    let ids: Vec<String> = store.get_all().unwrap().into_iter().map(|l| l.id).collect();
    assert_eq!(ids, ["a", "c"]);
}

/// The collection persists across close and reopen of the same file, and
/// migrations are idempotent on the second open.
#[test]
fn test_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pouch.db");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store
            .replace_all(&[link("a", "https://a.com/", &["rust"])])
            .unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].tags, ["rust"]);
}

/// Duplicate URLs are the insert path's concern, not the store's: the store
/// accepts whatever snapshot it is given.
#[test]
fn test_store_does_not_enforce_url_uniqueness() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store
        .replace_all(&[
            link("a", "https://same.com/", &[]),
            link("b", "https://same.com/", &[]),
        ])
        .unwrap();
    assert_eq!(store.get_all().unwrap().len(), 2);
}
