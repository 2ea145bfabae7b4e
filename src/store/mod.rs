//! Pouch persistence layer.
//!
//! The store owns the authoritative, ordered link collection; UI components
//! hold a working copy synchronized on load and on change notifications.
//! All operations reason in whole-collection snapshots — the store never
//! exposes partial updates.
//!
//! # Usage
//!
//! ```no_run
//! use pouch::store::{LinkStore, SqliteStore};
//!
//! // Open a persistent store
//! let store = SqliteStore::open("pouch.db").expect("failed to open store");
//!
//! // Or use an in-memory store for testing
//! let store = SqliteStore::open_in_memory().expect("failed to open store");
//!
//! let links = store.get_all().expect("failed to load links");
//! ```

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::types::errors::StoreError;
use crate::types::link::Link;

/// Trait defining the persistence collaborator for the link collection.
pub trait LinkStore {
    /// Returns the full collection in stored order (newest first).
    fn get_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Removes the link with the given ID.
    ///
    /// Deleting an ID that is not present succeeds: the only guarantee is
    /// that the ID is absent afterwards, which keeps concurrent views on
    /// last-writer-wins semantics instead of spurious errors.
    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError>;

    /// Replaces the entire collection with the given snapshot.
    fn replace_all(&mut self, links: &[Link]) -> Result<(), StoreError>;
}
