//! Client-side pagination arithmetic for the table screens.

/// Bounds of the visible slice `[page*size, page*size+size)` clamped to the
/// row count.
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

/// Number of filler rows needed to keep the visible block a constant height
/// when the last page is only partially filled.
pub fn filler_rows(total: usize, page: usize, page_size: usize) -> usize {
    let start = page * page_size;
    page_size.saturating_sub(total.saturating_sub(start))
}

/// Total page count; an empty list still has one (empty) page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        1
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Clamp a page index into the valid range for the given page count.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        // total=12, pageSize=5, page=2 -> rows [10, 12), 3 filler rows
        assert_eq!(page_bounds(12, 2, 5), (10, 12));
        assert_eq!(filler_rows(12, 2, 5), 3);
    }

    #[test]
    fn test_full_page_has_no_filler() {
        assert_eq!(page_bounds(12, 0, 5), (0, 5));
        assert_eq!(filler_rows(12, 0, 5), 0);
        assert_eq!(filler_rows(12, 1, 5), 0);
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        assert_eq!(page_bounds(12, 9, 5), (12, 12));
        assert_eq!(filler_rows(12, 9, 5), 5);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(page_bounds(0, 0, 5), (0, 0));
        assert_eq!(filler_rows(0, 0, 5), 5);
        assert_eq!(total_pages(0, 5), 1);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(1, 5), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(0, 0), 0);
    }
}
