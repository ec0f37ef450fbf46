//! Pagination over sorted topic collections.

use std::ops::Range;

use crate::model::Topic;

/// Allowed page sizes, mirroring the page-size selector options.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Total number of pages for a collection of `len` records.
///
/// Always at least 1, even for an empty collection: an empty result is
/// a valid single page, not a zero-page state.
///
/// `page_size` must be nonzero; the engine only passes values from
/// [`PAGE_SIZE_OPTIONS`].
pub fn total_pages(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be nonzero");
    len.div_ceil(page_size).max(1)
}

/// Clamps a 1-based page index into `[1, total_pages]`.
pub fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages)
}

/// The index range of the page window within a collection of `len`
/// records. `page_index` is 1-based; indices outside the collection
/// yield an empty range at the end rather than panicking.
pub fn page_window(len: usize, page_index: usize, page_size: usize) -> Range<usize> {
    let start = (page_index.saturating_sub(1) * page_size).min(len);
    let end = (start + page_size).min(len);
    start..end
}

/// Returns the slice of records visible on the given page.
pub fn paginate(topics: &[Topic], page_index: usize, page_size: usize) -> &[Topic] {
    &topics[page_window(topics.len(), page_index, page_size)]
}
