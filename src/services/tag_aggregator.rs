//! Tag frequency aggregation for the sidebar.

use std::collections::HashMap;

use crate::types::filter::TagSortMode;
use crate::types::link::Link;

/// A tag and the number of times it occurs across the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Counts every tag occurrence across all links.
///
/// Iterates each link's own tag sequence without deduping, so a tag listed
/// twice on one link counts twice. Aggregation is filter-agnostic —
/// highlighting of active filters is a presentation join on tag name done by
/// the caller. The result is unsorted; apply [`sort_tags`].
pub fn aggregate(links: &[Link]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for link in links {
        for tag in &link.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect()
}

/// Re-sorts aggregated counts in place without re-counting, so a sort-mode
/// change never requires re-aggregation.
///
/// `Count` sorts by descending count with ties broken by ascending tag name;
/// `Alpha` sorts ascending by tag name. Both use byte-wise `str` ordering,
/// which is a deterministic total order (tags are lowercased on entry).
pub fn sort_tags(counts: &mut [TagCount], mode: TagSortMode) {
    match mode {
        TagSortMode::Alpha => counts.sort_by(|a, b| a.tag.cmp(&b.tag)),
        TagSortMode::Count => counts.sort_by(|a, b| {
            b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag))
        }),
    }
}
