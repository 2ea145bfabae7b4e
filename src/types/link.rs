use serde::{Deserialize, Serialize};

/// Represents a saved link.
///
/// `url` is the dedup key: uniqueness is enforced at the point of insertion
/// or import, not as a standing store constraint. The collection is a single
/// ordered sequence with newest-first semantics — new and imported links are
/// prepended.
///
/// Serializes with camelCase field names (`savedAt`) to match the JSON
/// export/import file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub url: String,
    /// Display name; producers fall back to `url` when absent or empty.
    pub title: String,
    /// Ordered sequence of lowercase tags; may be empty.
    pub tags: Vec<String>,
    /// ISO-8601 timestamp, set at creation or carried over from an import.
    pub saved_at: String,
}
