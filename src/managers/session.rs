//! Link session for the links view.
//!
//! The single session-state struct: owns the working copy of the collection,
//! the filter state, the tag sort mode, and the pending-deletion state, with
//! defined mutation entry points. The working copy mirrors the store and is
//! authoritative for nothing; it is synchronized on load and on change
//! notifications, and every mutation is pushed back through the store.

use crate::clock::Clock;
use crate::managers::undo_delete::{DeleteTicket, PendingDeletion, UndoDeleteController};
use crate::services::{csv_import, import_reducer, query_engine, tag_aggregator};
use crate::services::tag_aggregator::TagCount;
use crate::store::LinkStore;
use crate::types::errors::{DeleteError, ImportError, StoreError};
use crate::types::filter::{FilterState, TagSortMode};
use crate::types::import::{ImportRecord, ImportReport, ImportSource};
use crate::types::link::Link;

/// Session state for one links view.
pub struct LinkSession<S: LinkStore, C: Clock> {
    store: S,
    clock: C,
    links: Vec<Link>,
    filter: FilterState,
    tag_sort: TagSortMode,
    deleter: UndoDeleteController,
}

impl<S: LinkStore, C: Clock> LinkSession<S, C> {
    /// Creates a session, loading the working copy from the store.
    pub fn new(store: S, clock: C) -> Result<Self, StoreError> {
        let links = store.get_all()?;
        Ok(Self {
            store,
            clock,
            links,
            filter: FilterState::new(),
            tag_sort: TagSortMode::default(),
            deleter: UndoDeleteController::new(),
        })
    }

    /// The full working copy, unfiltered.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn tag_sort(&self) -> TagSortMode {
        self.tag_sort
    }

    // === Rendering inputs ===

    /// Links passing the current query and tag filters, in working-copy
    /// order. A link with a pending deletion is already absent.
    pub fn visible_links(&self) -> Vec<&Link> {
        query_engine::filter_links(&self.links, &self.filter.query, self.filter.active_tags())
    }

    /// Tag counts over the whole working copy (filter-agnostic), sorted by
    /// the current sort mode.
    pub fn tag_counts(&self) -> Vec<TagCount> {
        let mut counts = tag_aggregator::aggregate(&self.links);
        tag_aggregator::sort_tags(&mut counts, self.tag_sort);
        counts
    }

    // === Filter state ===

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn add_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.add_tag(tag)
    }

    pub fn remove_tag_filter(&mut self, tag: &str) -> bool {
        self.filter.remove_tag(tag)
    }

    pub fn toggle_tag_filter(&mut self, tag: &str) {
        self.filter.toggle_tag(tag)
    }

    /// Clears the query and all active tag filters.
    pub fn clear_filters(&mut self) {
        self.filter.clear()
    }

    /// Changing the sort mode only re-sorts; counts are re-aggregated lazily
    /// on the next `tag_counts` call, never eagerly here.
    pub fn set_tag_sort(&mut self, mode: TagSortMode) {
        self.tag_sort = mode;
    }

    // === Undo-delete ===

    /// Optimistically removes the link and arms the undo window. The
    /// returned ticket is what the host's timer callback must pass to
    /// [`Self::handle_timer`].
    pub fn request_delete(&mut self, id: &str) -> Result<DeleteTicket, DeleteError> {
        let now = self.clock.now();
        self.deleter
            .request_delete(&mut self.links, &mut self.store, id, now)
    }

    /// Restores the pending deletion, if any.
    pub fn undo_delete(&mut self) -> bool {
        self.deleter.undo(&mut self.links)
    }

    /// Explicit dismissal of the undo notification; commits the deletion.
    pub fn close_notification(&mut self) -> Result<bool, StoreError> {
        self.deleter.expire_or_close(&mut self.links, &mut self.store)
    }

    /// Timer expiry callback; commits only if `ticket` is still current.
    pub fn handle_timer(&mut self, ticket: DeleteTicket) -> Result<bool, StoreError> {
        self.deleter
            .handle_timer(&mut self.links, &mut self.store, ticket)
    }

    pub fn pending_deletion(&self) -> Option<&PendingDeletion> {
        self.deleter.pending()
    }

    // === Import / export ===

    /// Imports a JSON export file: a top-level array of objects each
    /// carrying at least `url`.
    ///
    /// Malformed input aborts before the working copy or store is touched.
    /// Items are converted leniently: missing or wrongly-typed `title`,
    /// `tags`, `savedAt`, and `id` are treated as absent, never as errors.
    pub fn import_json(&mut self, text: &str) -> Result<ImportReport, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|_| ImportError::InvalidJson)?;
        let items = match value {
            serde_json::Value::Array(items) => items,
            _ => return Err(ImportError::NotAnArray),
        };
        let records: Vec<ImportRecord> = items.iter().map(record_from_json).collect();
        self.apply_import(&records, ImportSource::Json)
    }

    /// Imports a Pocket CSV export file.
    ///
    /// A CSV with no data rows is the distinct "nothing to import"
    /// condition, reported as [`ImportError::NoRecords`].
    pub fn import_pocket_csv(&mut self, text: &str) -> Result<ImportReport, ImportError> {
        let records = csv_import::parse_pocket_csv(text)
            .map_err(|e| ImportError::CsvParse(e.to_string()))?;
        if records.is_empty() {
            return Err(ImportError::NoRecords);
        }
        self.apply_import(&records, ImportSource::Pocket)
    }

    /// Merges records into a copy of the working collection, persists it,
    /// and only then adopts it, so an import either fully applies or leaves
    /// both the working copy and the store unchanged.
    fn apply_import(
        &mut self,
        records: &[ImportRecord],
        source: ImportSource,
    ) -> Result<ImportReport, ImportError> {
        let mut updated = self.links.clone();
        let added = import_reducer::merge(&mut updated, records, self.clock.now());
        self.store
            .replace_all(&updated)
            .map_err(ImportError::Store)?;
        self.links = updated;
        log::info!("imported {} new link(s) from {:?}", added, source);
        Ok(ImportReport { added, source })
    }

    /// Serializes the authoritative collection, pretty-printed.
    ///
    /// Always re-fetches from the store rather than the possibly-stale
    /// working copy.
    pub fn export_json(&self) -> Result<String, StoreError> {
        let fresh = self.store.get_all()?;
        serde_json::to_string_pretty(&fresh)
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Suggested download name for an export: `pouch-export-<ISO date>.json`.
    pub fn export_file_name(&self) -> String {
        format!("pouch-export-{}.json", self.clock.now().date())
    }

    // === Change notifications ===

    /// Handles a change notification from the store: another view replaced
    /// the collection underneath this one.
    ///
    /// The new snapshot fully replaces the working copy (last-writer-wins),
    /// no merging of local edits. A pending deletion is disarmed without
    /// persisting, since its undo state refers to the superseded copy.
    pub fn on_store_changed(&mut self, links: Vec<Link>) {
        if self.deleter.disarm() {
            log::warn!("external change disarmed a pending deletion");
        }
        self.links = links;
    }
}

/// Lenient conversion of one JSON array item into an import record,
/// mirroring the export format's optionality: only `url` matters downstream;
/// `title`, `tags`, `savedAt`, and `id` get documented defaults from the
/// reducer. Wrongly-typed values read as absent.
fn record_from_json(item: &serde_json::Value) -> ImportRecord {
    let required = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    };
    let optional = |key: &str| {
        item.get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let tags = item
        .get("tags")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|t| t.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ImportRecord {
        id: optional("id"),
        url: required("url"),
        title: required("title"),
        tags,
        saved_at: optional("savedAt"),
    }
}
