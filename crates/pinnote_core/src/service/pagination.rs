//! Page arithmetic for the note grid.
//!
//! # Invariants
//! - Pages are 1-based.
//! - Page `n` covers indices `[(n - 1) * per_page, n * per_page)`, clipped to
//!   the list length.

use std::ops::Range;

/// Notes shown on one page of the grid.
pub const NOTES_PER_PAGE: usize = 6;

/// Number of pages needed for `len` items. Zero items need zero pages.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Index range covered by `page` in a list of `len` items.
///
/// Page `0` and pages past the end yield an empty range.
pub fn page_range(page: usize, per_page: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let end = page.saturating_mul(per_page).min(len);
    let start = (page - 1).saturating_mul(per_page).min(end);
    start..end
}

/// Highest page a caller may select. An empty list still has page 1.
pub fn last_page(len: usize, per_page: usize) -> usize {
    page_count(len, per_page).max(1)
}

#[cfg(test)]
mod tests {
    use super::{last_page, page_count, page_range, NOTES_PER_PAGE};

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, NOTES_PER_PAGE), 0);
        assert_eq!(page_count(1, NOTES_PER_PAGE), 1);
        assert_eq!(page_count(6, NOTES_PER_PAGE), 1);
        assert_eq!(page_count(7, NOTES_PER_PAGE), 2);
        assert_eq!(page_count(13, NOTES_PER_PAGE), 3);
    }

    #[test]
    fn page_range_clips_last_page() {
        assert_eq!(page_range(1, 6, 8), 0..6);
        assert_eq!(page_range(2, 6, 8), 6..8);
    }

    #[test]
    fn out_of_bounds_pages_are_empty() {
        assert!(page_range(0, 6, 8).is_empty());
        assert!(page_range(3, 6, 8).is_empty());
        assert!(page_range(usize::MAX, 6, 8).is_empty());
    }

    #[test]
    fn empty_list_still_has_first_page() {
        assert_eq!(last_page(0, NOTES_PER_PAGE), 1);
        assert_eq!(last_page(12, NOTES_PER_PAGE), 2);
    }
}
