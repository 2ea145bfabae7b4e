//! Free-text and tag filtering over a link collection.

use crate::types::link::Link;

/// Applies the free-text query and the active tag filters to `links`,
/// returning the matching subset in the original order.
///
/// The query is trimmed and lowercased; when empty, the text filter passes
/// everything. A link matches the text filter when its lowercased title or
/// URL contains the query, or any of its tags contains the query as a
/// substring (tags are stored lowercase). The tag filter requires every
/// active tag to be present in the link's tag list — AND semantics, exact
/// (non-substring) membership. An empty active set passes everything.
///
/// Pure and order-preserving; distinguishing "no links at all" from "no
/// matches" is the caller's concern.
pub fn filter_links<'a>(
    links: &'a [Link],
    query: &str,
    active_tags: &[String],
) -> Vec<&'a Link> {
    let query = query.trim().to_lowercase();
    links
        .iter()
        .filter(|link| matches_text(link, &query) && matches_tags(link, active_tags))
        .collect()
}

fn matches_text(link: &Link, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    link.title.to_lowercase().contains(query)
        || link.url.to_lowercase().contains(query)
        || link.tags.iter().any(|tag| tag.contains(query))
}

fn matches_tags(link: &Link, active_tags: &[String]) -> bool {
    active_tags.iter().all(|tag| link.tags.contains(tag))
}
