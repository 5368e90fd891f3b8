//! Pure derivations computed from `AppState`.
//!
//! Nothing here mutates state or fails. Out-of-range pages and empty search
//! results produce empty output, never an error.

use crate::domain::Item;

/// Returns the items whose name contains `term`, ignoring case.
///
/// Order is preserved and an empty term keeps every item.
///
/// # Example
///
/// ```
/// use item_pager::app::derive::filtered_items;
/// use item_pager::Item;
///
/// let items = vec![Item::new(1, "Bus"), Item::new(2, "Car")];
/// let hits = filtered_items(&items, "cA");
/// assert_eq!(hits, vec![Item::new(2, "Car")]);
/// ```
#[must_use]
pub fn filtered_items(items: &[Item], term: &str) -> Vec<Item> {
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Returns the slice of `filtered` shown on the 1-based `page`.
///
/// The slice is `[(page - 1) * per_page, (page - 1) * per_page + per_page)`,
/// clipped to the list. A start past the end yields an empty slice.
///
/// # Example
///
/// ```
/// use item_pager::app::derive::paginated_items;
///
/// let letters = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(paginated_items(&letters, 2, 3), &['d', 'e']);
/// assert!(paginated_items(&letters, 3, 3).is_empty());
/// ```
#[must_use]
pub fn paginated_items<T>(filtered: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(filtered.len());
    &filtered[start..end]
}

/// Number of pages needed for `item_count` items, rounding up.
///
/// Callers pass the unfiltered item count; the page controls reflect the
/// whole list, not the current search hits.
#[must_use]
pub const fn total_pages(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count / per_page + (item_count % per_page != 0) as usize
}

/// Character ranges of every case-insensitive occurrence of `term` in `name`.
///
/// Ranges are `(start, end)` character indices into `name` with an exclusive
/// end and do not overlap. Both sides are lowercased with `str::to_lowercase`,
/// as in [`filtered_items`], so every filtered name gets a highlight.
#[must_use]
pub fn match_ranges(name: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return vec![];
    }

    let lowered = name.to_lowercase();
    let needle = term.to_lowercase();

    // Byte offset in `lowered` where each char of `name` starts, plus the end.
    // Context-sensitive mappings (final sigma) keep the per-char byte length.
    let mut bounds = Vec::with_capacity(name.len() + 1);
    let mut offset = 0;
    for c in name.chars() {
        bounds.push(offset);
        offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
    }
    bounds.push(offset);

    lowered
        .match_indices(needle.as_str())
        .map(|(at, matched)| {
            let start = bounds.partition_point(|&b| b <= at).saturating_sub(1);
            let end = bounds.partition_point(|&b| b < at + matched.len());
            (start, end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Item> {
        ["Bus", "Car", "Bike", "Scooty", "Cycle"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Item::new(id, *name))
            .collect()
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        assert_eq!(filtered_items(&fleet(), ""), fleet());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let hits = filtered_items(&fleet(), "C");
        assert_eq!(names(&hits), ["Car", "Scooty", "Cycle"]);

        let hits = filtered_items(&fleet(), "bI");
        assert_eq!(names(&hits), ["Bike"]);
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        assert!(filtered_items(&fleet(), "train").is_empty());
    }

    #[test]
    fn filter_matches_exactly_the_names_containing_the_term() {
        let items = fleet();
        for term in ["", "b", "y", "oo", "cycle", "x", "E"] {
            let hits = filtered_items(&items, term);
            let expected: Vec<Item> = items
                .iter()
                .filter(|i| i.name.to_lowercase().contains(&term.to_lowercase()))
                .cloned()
                .collect();
            assert_eq!(hits, expected, "term {term:?}");
        }
    }

    #[test]
    fn pages_slice_the_filtered_list() {
        let items = fleet();
        assert_eq!(names(paginated_items(&items, 1, 3)), ["Bus", "Car", "Bike"]);
        assert_eq!(names(paginated_items(&items, 2, 3)), ["Scooty", "Cycle"]);
        assert!(paginated_items(&items, 3, 3).is_empty());
        assert!(paginated_items(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let items = fleet();
        assert_eq!(paginated_items(&items, 0, 2), paginated_items(&items, 1, 2));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(5, 3), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn match_ranges_finds_every_occurrence() {
        assert_eq!(match_ranges("Scooty", "o"), vec![(2, 3), (3, 4)]);
        assert_eq!(match_ranges("Cycle", "CY"), vec![(0, 2)]);
        assert!(match_ranges("Bus", "car").is_empty());
        assert!(match_ranges("Bus", "").is_empty());
    }

    #[test]
    fn match_ranges_agree_with_filter_on_final_sigma() {
        let items = vec![Item::new(1, "ΟΔΟΣ"), Item::new(2, "ΟΔΟΣ ΣΤΑΣΗ")];

        for term in ["ΟΔΟΣ", "οδος", "ΟΣ"] {
            for item in filtered_items(&items, term) {
                assert!(!match_ranges(&item.name, term).is_empty(), "{term} in {}", item.name);
            }
        }
        assert_eq!(match_ranges("ΟΔΟΣ", "ΟΔΟΣ"), vec![(0, 4)]);
    }

    #[test]
    fn match_ranges_use_char_indices() {
        assert_eq!(match_ranges("Éclair éclair", "écl"), vec![(0, 3), (7, 10)]);
    }
}
