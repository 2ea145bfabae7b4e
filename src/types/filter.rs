/// Sort mode for the tag sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSortMode {
    /// Descending by count, ties broken by ascending tag name.
    #[default]
    Count,
    /// Ascending by tag name.
    Alpha,
}

/// Transient, session-scoped filter state: a free-text query plus the set of
/// active tag filters.
///
/// Active tags keep insertion order for display but behave as a set — no
/// duplicates, exact membership. Not persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub query: String,
    active_tags: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tag filters in the order they were added.
    pub fn active_tags(&self) -> &[String] {
        &self.active_tags
    }

    /// Whether the given tag is currently an active filter.
    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.iter().any(|t| t == tag)
    }

    /// Adds a tag filter. Returns false if it was already active.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        if self.is_active(tag) {
            return false;
        }
        self.active_tags.push(tag.to_string());
        true
    }

    /// Removes a tag filter. Returns false if it was not active.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.active_tags.len();
        self.active_tags.retain(|t| t != tag);
        self.active_tags.len() != before
    }

    /// Adds the tag filter if inactive, removes it if active.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.remove_tag(tag) {
            self.active_tags.push(tag.to_string());
        }
    }

    /// Clears the query and all active tag filters.
    pub fn clear(&mut self) {
        self.query.clear();
        self.active_tags.clear();
    }
}
