//! Optimistic delete with a timed undo window.
//!
//! A delete request removes the link from the working copy immediately and
//! arms a deadline; until the deletion resolves, the link is absent from
//! every rendered view while the store remains untouched. Undo reinserts the
//! link at its original index with no persistence call. Timer expiry and
//! explicit dismissal both commit the removal with exactly one
//! `delete_by_id` call. At most one deletion is pending at a time; a new
//! request first commits the previous one.
//!
//! The host owns the actual timer (single-threaded cooperative model); the
//! controller hands out a [`DeleteTicket`] and makes stale timer callbacks
//! inert, so cancellation is race-free.

use std::time::Duration;

use time::OffsetDateTime;

use crate::store::LinkStore;
use crate::types::errors::{DeleteError, StoreError};
use crate::types::link::Link;

/// How long a pending deletion stays undoable.
pub const UNDO_WINDOW: Duration = Duration::from_millis(5000);

/// Identifies one pending deletion across the host's timer round trip.
///
/// The host passes the ticket back from its timer callback; if the deletion
/// was undone, committed, or superseded in the meantime the ticket no longer
/// matches and the callback does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTicket(u64);

/// A deletion applied to the working copy but not yet persisted.
#[derive(Debug, Clone)]
pub struct PendingDeletion {
    link: Link,
    index: usize,
    deadline: OffsetDateTime,
    ticket: DeleteTicket,
}

impl PendingDeletion {
    /// The removed link, held for a possible undo.
    pub fn link(&self) -> &Link {
        &self.link
    }

    /// When the undo window closes; the host schedules its timer for this.
    pub fn deadline(&self) -> OffsetDateTime {
        self.deadline
    }

    pub fn ticket(&self) -> DeleteTicket {
        self.ticket
    }
}

/// Owner of the optimistic-delete workflow: idle, pending, then either
/// restored (undo) or committed.
#[derive(Debug, Default)]
pub struct UndoDeleteController {
    pending: Option<PendingDeletion>,
    next_ticket: u64,
}

impl UndoDeleteController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The in-flight deletion, if any.
    pub fn pending(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref()
    }

    /// Removes the link with `id` from `links` and arms the undo window.
    ///
    /// If a different link's deletion is already pending it is committed
    /// first; there is no stacking of undos. A repeat request for the link
    /// that is already pending is a no-op returning the existing ticket.
    /// Returns `DeleteError::NotFound` when `id` is not in the working copy.
    pub fn request_delete<S: LinkStore>(
        &mut self,
        links: &mut Vec<Link>,
        store: &mut S,
        id: &str,
        now: OffsetDateTime,
    ) -> Result<DeleteTicket, DeleteError> {
        if let Some(pending) = &self.pending {
            if pending.link.id == id {
                return Ok(pending.ticket);
            }
            self.commit(links, store).map_err(DeleteError::Store)?;
        }

        let index = links
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DeleteError::NotFound(id.to_string()))?;
        let link = links.remove(index);

        self.next_ticket += 1;
        let ticket = DeleteTicket(self.next_ticket);
        self.pending = Some(PendingDeletion {
            link,
            index,
            deadline: now + UNDO_WINDOW,
            ticket,
        });
        Ok(ticket)
    }

    /// Cancels the pending deletion and reinserts the link at its original
    /// index, preserving the relative order of surrounding links. No
    /// persistence call is made, since the store was never touched. Returns false
    /// when nothing was pending.
    pub fn undo(&mut self, links: &mut Vec<Link>) -> bool {
        match self.pending.take() {
            Some(pending) => {
                let index = pending.index.min(links.len());
                links.insert(index, pending.link);
                true
            }
            None => false,
        }
    }

    /// Commits the pending deletion. Timer expiry and explicit dismissal of
    /// the notification both land here with identical effect. Returns
    /// `Ok(false)` when nothing was pending.
    pub fn expire_or_close<S: LinkStore>(
        &mut self,
        links: &mut Vec<Link>,
        store: &mut S,
    ) -> Result<bool, StoreError> {
        if self.pending.is_none() {
            return Ok(false);
        }
        self.commit(links, store)?;
        Ok(true)
    }

    /// Timer callback entry point. Commits only while `ticket` still matches
    /// the pending deletion; a stale ticket is inert.
    pub fn handle_timer<S: LinkStore>(
        &mut self,
        links: &mut Vec<Link>,
        store: &mut S,
        ticket: DeleteTicket,
    ) -> Result<bool, StoreError> {
        let armed = self
            .pending
            .as_ref()
            .map_or(false, |pending| pending.ticket == ticket);
        if !armed {
            return Ok(false);
        }
        self.commit(links, store)?;
        Ok(true)
    }

    /// Drops the pending deletion without persisting or reinserting. Used
    /// when an external change notification replaces the working copy the
    /// undo state refers to. Returns true if a deletion was pending.
    pub fn disarm(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Persists the pending removal. On store failure the link goes back to
    /// its original index and the error is surfaced, so the optimistic state
    /// rolls back rather than silently diverging from storage.
    fn commit<S: LinkStore>(
        &mut self,
        links: &mut Vec<Link>,
        store: &mut S,
    ) -> Result<(), StoreError> {
        let pending = match self.pending.take() {
            Some(pending) => pending,
            None => return Ok(()),
        };

        if let Err(e) = store.delete_by_id(&pending.link.id) {
            log::warn!("delete commit failed for {}: {}", pending.link.id, e);
            let index = pending.index.min(links.len());
            links.insert(index, pending.link);
            return Err(e);
        }

        log::debug!("committed deletion of {}", pending.link.id);
        Ok(())
    }
}
