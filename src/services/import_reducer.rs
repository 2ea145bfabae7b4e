//! Dedup-and-merge of imported records into the link collection, shared by
//! the JSON and Pocket CSV import paths.

use std::collections::HashSet;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::clock::iso_timestamp;
use crate::types::import::ImportRecord;
use crate::types::link::Link;

/// Merges `incoming` into `links`, returning the number of links added.
///
/// The existing-URL membership set is built once up front, not re-scanned per
/// item. Records with an empty URL, or a URL already present (either
/// pre-existing or added earlier in this same batch) are skipped silently.
/// Accepted records are synthesized into links and prepended one at a time in
/// input order, so the *last* accepted incoming record ends up frontmost
/// (newest). `now` supplies the `savedAt` default for records without a
/// timestamp.
pub fn merge(links: &mut Vec<Link>, incoming: &[ImportRecord], now: OffsetDateTime) -> usize {
    let mut seen: HashSet<&str> = links.iter().map(|l| l.url.as_str()).collect();
    let mut accepted: Vec<Link> = Vec::new();

    for record in incoming {
        if record.url.is_empty() || seen.contains(record.url.as_str()) {
            continue;
        }
        seen.insert(record.url.as_str());
        accepted.push(synthesize(record, now));
    }

    // Prepend-per-item in forward order == reversed batch at the front.
    let added = accepted.len();
    for link in accepted {
        links.insert(0, link);
    }
    added
}

/// Builds a link from an import record, applying the documented defaults:
/// generated id, title falling back to url, savedAt falling back to `now`.
fn synthesize(record: &ImportRecord, now: OffsetDateTime) -> Link {
    let id = record
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Link {
        id,
        url: record.url.clone(),
        title: if record.title.is_empty() {
            record.url.clone()
        } else {
            record.title.clone()
        },
        tags: record.tags.clone(),
        saved_at: record
            .saved_at
            .clone()
            .unwrap_or_else(|| iso_timestamp(now)),
    }
}
