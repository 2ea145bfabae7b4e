use crate::types::link::Link;

/// A request to the background link service.
///
/// A closed set of request kinds, matched exhaustively by the handler, so a
/// new kind is a compile-time-checked addition rather than a stringly-typed
/// action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Save the current page or a linked URL.
    SaveLink {
        url: String,
        title: String,
        tags: Vec<String>,
    },
    /// Fetch the full collection.
    GetLinks,
    /// Remove a link by ID.
    DeleteLink { id: String },
    /// Apply a partial update to an existing link.
    UpdateLink { id: String, patch: LinkPatch },
}

/// Partial update applied by [`Request::UpdateLink`]. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Reply to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The link was saved; carries the stored entity.
    Saved(Link),
    /// A link with the same URL already exists; nothing was saved.
    Duplicate,
    Links(Vec<Link>),
    Deleted,
    Updated,
    /// No link with the requested ID exists.
    NotFound,
}
