//! In-memory link store, used by the demo binary and as a lightweight test
//! double.

use super::LinkStore;
use crate::types::errors::StoreError;
use crate::types::link::Link;

/// Link store holding the collection in a `Vec`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    links: Vec<Link>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given collection.
    pub fn with_links(links: Vec<Link>) -> Self {
        Self { links }
    }
}

impl LinkStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Link>, StoreError> {
        Ok(self.links.clone())
    }

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError> {
        self.links.retain(|l| l.id != id);
        Ok(())
    }

    fn replace_all(&mut self, links: &[Link]) -> Result<(), StoreError> {
        self.links = links.to_vec();
        Ok(())
    }
}
