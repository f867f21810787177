//! Paginator math: visible page-link window and the summary line.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Page links shown at once by the paginator.
pub const PAGE_LINK_COUNT: u32 = 5;

/// One-based page numbers to render as links, centered on `current`.
#[must_use]
pub fn page_links(current: u32, total_pages: u32, link_count: u32) -> Vec<u32> {
    let total_pages = total_pages.max(1);
    let visible = link_count.clamp(1, total_pages);
    let current0 = current.clamp(1, total_pages) - 1;

    let mut start = current0.saturating_sub(visible / 2);
    let end = (start + visible - 1).min(total_pages - 1);
    let shortfall = visible - (end - start + 1);
    start = start.saturating_sub(shortfall);

    (start..=end).map(|p| p + 1).collect()
}

#[must_use]
pub fn can_go_prev(current: u32) -> bool {
    current > 1
}

#[must_use]
pub fn can_go_next(current: u32, total_pages: u32) -> bool {
    current < total_pages
}

/// Summary shown under the table, e.g. `Showing 13 to 24 of 1000`.
#[must_use]
pub fn report(first: u64, shown: usize, total: u64) -> String {
    if shown == 0 {
        return format!("Showing 0 of {total}");
    }
    let last = first + shown as u64;
    format!("Showing {} to {last} of {total}", first + 1)
}
