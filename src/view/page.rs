//! Page arithmetic.

/// Number of pages for `count` items. Always at least 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total]`; out-of-range requests go to page 1.
pub fn clamp_page(page: usize, total: usize) -> usize {
    if page == 0 || page > total { 1 } else { page }
}

/// Items of the 1-based `page`. Empty when the page is past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
