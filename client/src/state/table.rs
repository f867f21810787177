//! Artworks table state: current page, rows, selection, overlay input.
//!
//! DESIGN
//! ======
//! The page component owns a single `RwSignal<TableState>`; everything here is
//! plain data plus pure helpers so pagination and selection rules are testable
//! without a browser. Network access is injected into `select_rows` as a
//! page-fetching closure.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use crate::net::types::Artwork;

/// Rows per table page.
pub const PAGE_SIZE: u32 = 12;

/// Alert text for a rejected row-count submission.
pub const INVALID_ROW_COUNT_MESSAGE: &str = "Please enter a valid positive number!";

/// Shared table state provided via context.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    /// Rows of the page currently displayed.
    pub rows: Vec<Artwork>,
    /// Selected records, possibly spanning several pages.
    pub selected: Vec<Artwork>,
    /// One-based page number.
    pub current_page: u32,
    pub loading: bool,
    pub total_records: u64,
    /// Raw text of the row-count input.
    pub row_count_input: String,
    pub overlay_open: bool,
    /// A row-count submission is still pulling pages.
    pub selecting: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            selected: Vec::new(),
            current_page: 1,
            loading: false,
            total_records: 0,
            row_count_input: String::new(),
            overlay_open: false,
            selecting: false,
        }
    }
}

impl TableState {
    #[must_use]
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.iter().any(|a| a.id == id)
    }

    /// Add the row to the selection, or remove it if already selected.
    pub fn toggle_row(&mut self, artwork: &Artwork) {
        if self.is_selected(artwork.id) {
            self.selected.retain(|a| a.id != artwork.id);
        } else {
            self.selected.push(artwork.clone());
        }
    }

    /// True when the page has rows and every one of them is selected.
    #[must_use]
    pub fn all_page_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| self.is_selected(r.id))
    }

    /// Header checkbox: select the whole page, or clear it if fully selected.
    pub fn toggle_page(&mut self) {
        if self.all_page_selected() {
            let page_ids: HashSet<u64> = self.rows.iter().map(|r| r.id).collect();
            self.selected.retain(|a| !page_ids.contains(&a.id));
        } else {
            let missing: Vec<Artwork> = self
                .rows
                .iter()
                .filter(|r| !self.is_selected(r.id))
                .cloned()
                .collect();
            self.selected.extend(missing);
        }
    }

    /// Claim the selection loop. Returns `false` if one is already running.
    pub fn begin_selection(&mut self) -> bool {
        if self.selecting {
            return false;
        }
        self.selecting = true;
        true
    }

    /// Offset of the first displayed row.
    #[must_use]
    pub fn first_row_index(&self) -> u64 {
        first_row_index(self.current_page, PAGE_SIZE)
    }
}

/// Zero-based offset of the first row on a one-based `page`.
#[must_use]
pub fn first_row_index(page: u32, rows: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(rows)
}

/// Convert a zero-based paginator index to a one-based page number.
#[must_use]
pub fn page_from_event(page_index: u32) -> u32 {
    page_index.saturating_add(1)
}

/// Number of pages needed for `total` rows, never less than one.
#[must_use]
pub fn page_count(total: u64, rows: u32) -> u32 {
    let rows = u64::from(rows.max(1));
    let pages = total.div_ceil(rows).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RowCountError {
    #[error("Please enter a valid positive number!")]
    NotANumber,
    #[error("Please enter a valid positive number!")]
    NotPositive,
}

/// Parse the row-count input.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"12abc"` reads as 12.
///
/// # Errors
///
/// `NotANumber` when no leading digits are present, `NotPositive` for zero or
/// negative values. Oversized counts saturate at `usize::MAX`.
pub fn parse_row_count(input: &str) -> Result<usize, RowCountError> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(RowCountError::NotANumber);
    }
    let digits = &rest[..digits_len];
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(RowCountError::NotPositive);
    }
    // Counts beyond usize saturate; selection stops at the end of the data anyway.
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Accumulate `count` selected rows, pulling further pages as needed.
///
/// Starts from `selected`, then takes rows of `current_rows`, then of pages
/// `current_page + 1`, `+ 2`, ... fetched one at a time. Stops once `count`
/// rows are selected or a fetched page comes back empty. Rows whose id is
/// already selected are skipped. The result holds at most `count` rows.
pub async fn select_rows<F, Fut>(
    mut selected: Vec<Artwork>,
    current_rows: Vec<Artwork>,
    current_page: u32,
    count: usize,
    mut fetch_page: F,
) -> Vec<Artwork>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Vec<Artwork>>,
{
    let mut seen: HashSet<u64> = selected.iter().map(|a| a.id).collect();
    let mut available = current_rows;
    let mut page = current_page;

    // A fetched page either adds a new row or repeats already-selected ones,
    // which bounds the number of extra fetches.
    let max_extra_pages = count.saturating_add(selected.len());
    let mut extra_pages = 0usize;

    while selected.len() < count {
        for row in available {
            if selected.len() >= count {
                break;
            }
            if seen.insert(row.id) {
                selected.push(row);
            }
        }
        if selected.len() >= count || extra_pages >= max_extra_pages {
            break;
        }

        page = page.saturating_add(1);
        extra_pages += 1;
        let next = fetch_page(page).await;
        if next.is_empty() {
            break;
        }
        available = next;
    }

    selected.truncate(count);
    selected
}
