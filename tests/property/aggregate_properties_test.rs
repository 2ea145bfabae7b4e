//! Property-based tests for the tag aggregator.
//!
//! Verifies the count-conservation law (counts sum to the number of
//! (link, tag) pairs) and that both sort modes produce the documented total
//! orders.

use pouch::services::tag_aggregator::{aggregate, sort_tags};
use pouch::types::filter::TagSortMode;
use pouch::types::link::Link;
use proptest::prelude::*;

const TAG_POOL: &[&str] = &["rust", "news", "work", "docs", "ref", "until"];

fn arb_links() -> impl Strategy<Value = Vec<Link>> {
    proptest::collection::vec(
        proptest::collection::vec(
            proptest::sample::select(TAG_POOL).prop_map(str::to_string),
            0..5,
        ),
        0..10,
    )
    .prop_map(|tag_lists| {
        tag_lists
            .into_iter()
            .enumerate()
            .map(|(i, tags)| Link {
                id: format!("link-{}", i),
                url: format!("https://example.com/{}", i),
                title: format!("Link {}", i),
                tags,
                saved_at: "2024-01-15T10:00:00Z".to_string(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Counts sum to the total number of (link, tag) pairs — every
    // occurrence is counted exactly once, duplicates within a link included.
    #[test]
    fn counts_sum_to_pair_total(links in arb_links()) {
        let counts = aggregate(&links);
        let sum: usize = counts.iter().map(|tc| tc.count).sum();
        let pairs: usize = links.iter().map(|l| l.tags.len()).sum();
        prop_assert_eq!(sum, pairs);
    }

    // Every counted tag occurs in the collection and vice versa.
    #[test]
    fn counted_tags_match_collection(links in arb_links()) {
        let counts = aggregate(&links);
        for tc in &counts {
            prop_assert!(links.iter().any(|l| l.tags.contains(&tc.tag)));
        }
        for link in &links {
            for tag in &link.tags {
                prop_assert!(counts.iter().any(|tc| &tc.tag == tag));
            }
        }
    }

    // Alpha mode is a strict total order by tag name (no duplicates).
    #[test]
    fn alpha_mode_is_total_order(links in arb_links()) {
        let mut counts = aggregate(&links);
        sort_tags(&mut counts, TagSortMode::Alpha);
        for pair in counts.windows(2) {
            prop_assert!(pair[0].tag < pair[1].tag);
        }
    }

    // Count mode descends by count; equal counts ascend alphabetically.
    #[test]
    fn count_mode_breaks_ties_alphabetically(links in arb_links()) {
        let mut counts = aggregate(&links);
        sort_tags(&mut counts, TagSortMode::Count);
        for pair in counts.windows(2) {
            prop_assert!(
                pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].tag < pair[1].tag),
                "bad order: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    // Sorting is a permutation: both modes keep the same set of entries.
    #[test]
    fn sorting_is_a_permutation(links in arb_links()) {
        let unsorted = aggregate(&links);
        let mut by_count = unsorted.clone();
        sort_tags(&mut by_count, TagSortMode::Count);
        let mut by_alpha = by_count.clone();
        sort_tags(&mut by_alpha, TagSortMode::Alpha);

        prop_assert_eq!(by_count.len(), unsorted.len());
        for tc in &unsorted {
            prop_assert!(by_count.contains(tc));
            prop_assert!(by_alpha.contains(tc));
        }
    }
}
