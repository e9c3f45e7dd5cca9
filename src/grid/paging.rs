//! Page index and page size handling.

use std::ops::Range;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page sizes offered by the page size control.
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 25, 50, 100];

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// Starts on the first page; a zero size falls back to the default.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        let size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self {
            page: 0,
            page_size: size,
        }
    }

    /// Zero-based current page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; never less than one.
    #[must_use]
    pub const fn page_count(&self, total: usize) -> usize {
        let pages = total.div_ceil(self.page_size);
        if pages == 0 { 1 } else { pages }
    }

    /// Range of row positions shown on the current page.
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Moves to the next page if there is one.
    pub const fn next(&mut self, total: usize) {
        if self.page.saturating_add(1) < self.page_count(total) {
            self.page = self.page.saturating_add(1);
        }
    }

    /// Moves to the previous page if there is one.
    pub const fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Moves to the first page.
    pub const fn first(&mut self) {
        self.page = 0;
    }

    /// Moves to the last page.
    pub const fn last(&mut self, total: usize) {
        self.page = self.page_count(total).saturating_sub(1);
    }

    /// Switches to the next larger page size option.
    pub fn grow(&mut self) {
        if let Some(&size) = PAGE_SIZE_OPTIONS
            .iter()
            .find(|&&option| option > self.page_size)
        {
            self.resize(size);
        }
    }

    /// Switches to the next smaller page size option.
    pub fn shrink(&mut self) {
        if let Some(&size) = PAGE_SIZE_OPTIONS
            .iter()
            .rev()
            .find(|&&option| option < self.page_size)
        {
            self.resize(size);
        }
    }

    /// Changes the page size, keeping the first row of the current page in
    /// view.
    fn resize(&mut self, page_size: usize) {
        let first_row = self.page.saturating_mul(self.page_size);
        self.page_size = page_size;
        self.page = first_row.checked_div(page_size).unwrap_or(0);
    }
}
