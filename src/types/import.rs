/// A normalized record produced by the Pocket CSV parser or the lenient
/// JSON-import conversion.
///
/// `url` and `title` use the empty string for "absent" (mirroring the export
/// formats, where a missing column and an empty one are indistinguishable);
/// the import reducer skips empty-URL records and applies the documented
/// defaults for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRecord {
    /// Carried over when the source supplies one, otherwise generated.
    pub id: Option<String>,
    pub url: String,
    pub title: String,
    /// Lowercase tags; already trimmed and deduplicated by the producer.
    pub tags: Vec<String>,
    /// ISO-8601 timestamp; `None` defaults to the import time.
    pub saved_at: Option<String>,
}

/// Which import path produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    Json,
    Pocket,
}

/// Outcome of a completed import, used for the user-facing summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of links actually added after deduplication.
    pub added: usize,
    pub source: ImportSource,
}

impl ImportReport {
    /// The literal summary text shown to the user, with correct
    /// pluralization.
    pub fn message(&self) -> String {
        let noun = if self.added == 1 { "link" } else { "links" };
        match self.source {
            ImportSource::Json => format!("Imported {} new {}.", self.added, noun),
            ImportSource::Pocket => {
                format!("Imported {} new {} from Pocket.", self.added, noun)
            }
        }
    }
}
