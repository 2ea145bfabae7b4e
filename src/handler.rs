//! Background request dispatch for Pouch.
//!
//! The save/get/delete/update surface used by the popup and context-menu
//! flows. Requests form a closed enum matched exhaustively, so adding a
//! request kind is a compile-time-checked change. Every operation works on
//! whole-collection snapshots fetched from the store.

use uuid::Uuid;

use crate::clock::{iso_timestamp, Clock};
use crate::store::LinkStore;
use crate::types::errors::StoreError;
use crate::types::link::Link;
use crate::types::request::{LinkPatch, Request, Response};

/// Dispatches one request against the store's authoritative collection.
pub fn handle_request<S: LinkStore, C: Clock>(
    store: &mut S,
    clock: &C,
    request: Request,
) -> Result<Response, StoreError> {
    match request {
        Request::SaveLink { url, title, tags } => save_link(store, clock, &url, &title, tags),
        Request::GetLinks => Ok(Response::Links(store.get_all()?)),
        Request::DeleteLink { id } => delete_link(store, &id),
        Request::UpdateLink { id, patch } => update_link(store, &id, patch),
    }
}

/// Saves a new link at the front of the collection unless one with the same
/// URL (exact, case-sensitive) already exists.
fn save_link<S: LinkStore, C: Clock>(
    store: &mut S,
    clock: &C,
    url: &str,
    title: &str,
    tags: Vec<String>,
) -> Result<Response, StoreError> {
    let mut links = store.get_all()?;
    if links.iter().any(|l| l.url == url) {
        return Ok(Response::Duplicate);
    }

    let link = Link {
        id: Uuid::new_v4().to_string(),
        url: url.to_string(),
        title: if title.is_empty() { url } else { title }.to_string(),
        tags,
        saved_at: iso_timestamp(clock.now()),
    };
    links.insert(0, link.clone());
    store.replace_all(&links)?;
    log::debug!("saved link {}", link.id);
    Ok(Response::Saved(link))
}

/// Removes the link with the given ID. A missing ID is not an error — the
/// collection simply no longer contains it afterwards.
fn delete_link<S: LinkStore>(store: &mut S, id: &str) -> Result<Response, StoreError> {
    let links: Vec<Link> = store
        .get_all()?
        .into_iter()
        .filter(|l| l.id != id)
        .collect();
    store.replace_all(&links)?;
    Ok(Response::Deleted)
}

/// Applies a partial update to the matching link, leaving `None` fields
/// unchanged.
fn update_link<S: LinkStore>(
    store: &mut S,
    id: &str,
    patch: LinkPatch,
) -> Result<Response, StoreError> {
    let mut links = store.get_all()?;
    let link = match links.iter_mut().find(|l| l.id == id) {
        Some(link) => link,
        None => return Ok(Response::NotFound),
    };

    if let Some(url) = patch.url {
        link.url = url;
    }
    if let Some(title) = patch.title {
        link.title = title;
    }
    if let Some(tags) = patch.tags {
        link.tags = tags;
    }

    store.replace_all(&links)?;
    Ok(Response::Updated)
}
