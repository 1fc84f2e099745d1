//! Page arithmetic shared by the reader routes.

/// 1-based page that holds the item at `item_index` (0-based).
pub fn page_of(item_index: usize, items_per_page: usize) -> usize {
    item_index / items_per_page.max(1) + 1
}

/// Number of pages needed for `total_items`. Zero items is zero pages.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    let per = items_per_page.max(1);
    (total_items + per - 1) / per
}
