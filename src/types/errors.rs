use std::fmt;

// === StoreError ===

/// Errors from the link persistence layer.
#[derive(Debug)]
pub enum StoreError {
    /// Database operation failed.
    DatabaseError(String),
    /// Encoding or decoding stored data failed.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DatabaseError(msg) => write!(f, "Link store database error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Link store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === CsvParseError ===

/// Errors from the Pocket CSV parser.
///
/// The parser degrades gracefully on ragged rows and quoting oddities, so in
/// practice it does not fail; callers still guard the boundary with error
/// handling so a stricter implementation stays a drop-in replacement.
#[derive(Debug)]
pub enum CsvParseError {
    /// Input was malformed beyond recovery.
    Malformed(String),
}

impl fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvParseError::Malformed(msg) => write!(f, "Malformed CSV: {}", msg),
        }
    }
}

impl std::error::Error for CsvParseError {}

// === ImportError ===

/// Errors surfaced to the user by the import handlers.
///
/// The `Display` output of the first four variants is the literal text shown
/// to the user.
#[derive(Debug)]
pub enum ImportError {
    /// The file is not syntactically valid JSON.
    InvalidJson,
    /// The JSON top level is not an array.
    NotAnArray,
    /// The Pocket CSV parser failed.
    CsvParse(String),
    /// The CSV contained no data rows beyond the header.
    NoRecords,
    /// Persisting the merged collection failed; the working copy was not
    /// modified.
    Store(StoreError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::InvalidJson => write!(f, "Invalid JSON file."),
            ImportError::NotAnArray => {
                write!(f, "Invalid format. Expected an array of links.")
            }
            ImportError::CsvParse(_) => write!(f, "Failed to parse Pocket CSV file."),
            ImportError::NoRecords => write!(f, "No links found in the CSV file."),
            ImportError::Store(e) => write!(f, "Failed to save imported links: {}", e),
        }
    }
}

impl std::error::Error for ImportError {}

// === DeleteError ===

/// Errors from the undo-delete workflow.
#[derive(Debug)]
pub enum DeleteError {
    /// No link with the given ID is in the working copy.
    NotFound(String),
    /// Committing a prior pending deletion failed; its link was restored.
    Store(StoreError),
}

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteError::NotFound(id) => write!(f, "Link not found: {}", id),
            DeleteError::Store(e) => write!(f, "Failed to commit deletion: {}", e),
        }
    }
}

impl std::error::Error for DeleteError {}
