use std::ops::RangeInclusive;

use serde::Serialize;

use crate::domain::options::PaginationConfig;

/// Page links shown at once in the navigation bar.
pub const PAGE_WINDOW: usize = 5;

/// `LIMIT` used when a caller passes a zero page size.
pub const DEFAULT_LIMIT: usize = 10;

/// How the rows handed to the renderer relate to the full result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationMode {
    /// Every row is supplied; the renderer slices out the current page.
    InMemory,
    /// Only the current page is supplied, alongside an authoritative total.
    Database,
}

/// Pagination numbers derived for one render. Row bounds are 1-indexed and
/// inclusive; `end_row < start_row` means the page is empty.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub page_size: usize,
    pub start_row: usize,
    pub end_row: usize,
}

impl PaginationState {
    /// A single page that holds every row.
    pub fn single_page(row_count: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_rows: row_count,
            page_size: row_count,
            start_row: 1,
            end_row: row_count,
        }
    }

    /// Computes the state for `row_count` rows.
    ///
    /// In [`PaginationMode::InMemory`] `row_count` is the full row count. In
    /// [`PaginationMode::Database`] it is the size of the supplied page and
    /// only used when `config.total_count` is zero.
    pub fn compute(
        row_count: usize,
        config: Option<&PaginationConfig>,
        mode: PaginationMode,
    ) -> Self {
        let config = match config {
            Some(config) if config.is_active() => config,
            Some(config) if config.enabled => {
                log::debug!("Pagination enabled with a zero page size, rendering a single page");
                return Self::single_page(row_count);
            }
            _ => return Self::single_page(row_count),
        };

        let total_rows = match mode {
            PaginationMode::InMemory => row_count,
            PaginationMode::Database if config.total_count > 0 => config.total_count,
            PaginationMode::Database => row_count,
        };

        let page_size = config.page_size;
        let total_pages = total_rows.div_ceil(page_size).max(1);

        let requested = config.current_page;
        let current_page = requested.clamp(1, total_pages);
        if current_page != requested {
            log::debug!("Requested page {requested} clamped to {current_page} of {total_pages}");
        }

        let start_row = (current_page - 1) * page_size + 1;
        let end_row = (current_page * page_size).min(total_rows);

        Self {
            current_page,
            total_pages,
            total_rows,
            page_size,
            start_row,
            end_row,
        }
    }

    /// Every row is supplied; the caller slices with [`Self::slice`].
    pub fn in_memory(total_rows: usize, config: Option<&PaginationConfig>) -> Self {
        Self::compute(total_rows, config, PaginationMode::InMemory)
    }

    /// Only the current page is supplied.
    pub fn database(page_rows: usize, config: Option<&PaginationConfig>) -> Self {
        Self::compute(page_rows, config, PaginationMode::Database)
    }

    pub fn is_empty(&self) -> bool {
        self.total_rows == 0 || self.end_row < self.start_row
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// The rows of the current page out of the full row set.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        if self.is_empty() {
            return &rows[..0];
        }
        let start = (self.start_row - 1).min(rows.len());
        let end = self.end_row.min(rows.len());
        &rows[start..end]
    }

    /// Page numbers to link in the navigation bar.
    pub fn window(&self) -> RangeInclusive<usize> {
        page_window(self.current_page, self.total_pages)
    }
}

/// Up to [`PAGE_WINDOW`] pages centred on `current_page`.
///
/// Near either edge the window shifts instead of shrinking, so it always spans
/// `min(total_pages, PAGE_WINDOW)` pages.
pub fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    if total_pages <= PAGE_WINDOW {
        return 1..=total_pages;
    }

    let half = PAGE_WINDOW / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let mut end = start + PAGE_WINDOW - 1;
    if end > total_pages {
        end = total_pages;
        start = end + 1 - PAGE_WINDOW;
    }
    start..=end
}

/// `OFFSET` for a database query; pages below 1 count as the first page.
pub fn offset(page: usize, page_size: usize) -> usize {
    (page.max(1) - 1) * page_size
}

/// `LIMIT` for a database query.
pub fn limit(page_size: usize) -> usize {
    if page_size > 0 {
        page_size
    } else {
        DEFAULT_LIMIT
    }
}
