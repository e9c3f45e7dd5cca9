//! Generic sortable, filterable, paginated data grid.
//!
//! [`DataGrid`] holds view state only: sort keys, column filters, the
//! current page and the selected cell. Rows are supplied on every query, so
//! the owner stays the single source of truth for the data and may replace
//! it wholesale at any time.
//!
//! The grid is configured through [`GridConfig`]: a shared
//! [`ColumnSchema`], the [`FilterMethod`] applied to every column filter,
//! and the default page size. [`review`] configures it for product
//! reviews.

use std::sync::Arc;

mod filter;
mod paging;
pub mod review;
mod schema;
mod sort;
mod value;

pub use filter::{ColumnFilter, FilterMethod, FilterSet};
pub use paging::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pagination};
pub use review::{ClickOutcome, GridState, RatingBar, ReviewGrid, review_schema};
pub use schema::{Accessor, CellRenderer, ColumnDef, ColumnGroup, ColumnSchema, GroupSpan, SchemaError};
pub use sort::{SortDirection, SortKey, SortState};
pub use value::CellValue;

/// Identifies a cell by row index (into the owner's rows) and column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Index into the full row collection.
    pub row: usize,
    /// Column index in the schema.
    pub column: usize,
}

/// Configuration supplied when a grid is created.
#[derive(Debug)]
pub struct GridConfig<R> {
    /// Column layout, shared between grids.
    pub schema: Arc<ColumnSchema<R>>,
    /// Predicate applied to each active column filter.
    pub filter_method: FilterMethod,
    /// Rows per page until the user changes it.
    pub default_page_size: usize,
}

/// View state of a data grid over rows of type `R`.
#[derive(Debug)]
pub struct DataGrid<R> {
    schema: Arc<ColumnSchema<R>>,
    filter_method: FilterMethod,
    sort: SortState,
    filters: FilterSet,
    pagination: Pagination,
    selected: Option<CellPosition>,
}

impl<R> Clone for DataGrid<R> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            filter_method: self.filter_method,
            sort: self.sort.clone(),
            filters: self.filters.clone(),
            pagination: self.pagination,
            selected: self.selected,
        }
    }
}

impl<R> DataGrid<R> {
    /// Creates a grid with no sorting, no filters and the first page shown.
    #[must_use]
    pub fn new(config: GridConfig<R>) -> Self {
        Self {
            schema: config.schema,
            filter_method: config.filter_method,
            sort: SortState::default(),
            filters: FilterSet::default(),
            pagination: Pagination::new(config.default_page_size),
            selected: None,
        }
    }

    /// Column layout.
    #[must_use]
    pub fn schema(&self) -> &ColumnSchema<R> {
        &self.schema
    }

    /// Active sort keys.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Active column filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Current page and page size.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The cell selected by the last click, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<CellPosition> {
        self.selected
    }

    /// Indices of rows passing the filters, in sorted order.
    ///
    /// Sorting is stable: rows that compare equal on every key keep their
    /// source order.
    #[must_use]
    pub fn visible_rows(&self, rows: &[R]) -> Vec<usize> {
        let mut indices: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.filters.matches(&self.schema, row, self.filter_method))
            .map(|(index, _)| index)
            .collect();

        if !self.sort.is_empty() {
            indices.sort_by(|&left, &right| match (rows.get(left), rows.get(right)) {
                (Some(left_row), Some(right_row)) => {
                    self.sort.compare(&self.schema, left_row, right_row)
                }
                _ => left.cmp(&right),
            });
        }

        indices
    }

    /// Indices of the rows on the current page.
    #[must_use]
    pub fn page_rows(&self, rows: &[R]) -> Vec<usize> {
        let visible = self.visible_rows(rows);
        let range = self.pagination.range(visible.len());
        visible.get(range).map(<[usize]>::to_vec).unwrap_or_default()
    }

    /// Number of pages needed for the visible rows.
    #[must_use]
    pub fn page_count(&self, rows: &[R]) -> usize {
        self.pagination.page_count(self.visible_rows(rows).len())
    }

    /// Moves to the next page.
    pub fn next_page(&mut self, rows: &[R]) {
        let total = self.visible_rows(rows).len();
        self.pagination.next(total);
    }

    /// Moves to the previous page.
    pub const fn previous_page(&mut self) {
        self.pagination.previous();
    }

    /// Moves to the first page.
    pub const fn first_page(&mut self) {
        self.pagination.first();
    }

    /// Moves to the last page.
    pub fn last_page(&mut self, rows: &[R]) {
        let total = self.visible_rows(rows).len();
        self.pagination.last(total);
    }

    /// Switches to the next larger page size option.
    pub fn grow_page_size(&mut self) {
        self.pagination.grow();
    }

    /// Switches to the next smaller page size option.
    pub fn shrink_page_size(&mut self) {
        self.pagination.shrink();
    }

    /// Rotates the sort on a column; `append` keeps the existing keys.
    pub fn toggle_sort(&mut self, column: usize, append: bool) {
        if column < self.schema.column_count() {
            self.sort.toggle(column, append);
        }
    }

    /// Sets a column's filter text and returns to the first page.
    pub fn set_filter(&mut self, column: usize, value: &str) {
        if column < self.schema.column_count() {
            self.filters.set(column, value);
            self.pagination.first();
        }
    }

    /// Removes a column's filter.
    pub fn clear_filter(&mut self, column: usize) {
        self.filters.clear(column);
        self.pagination.first();
    }

    /// Removes every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.pagination.first();
    }

    /// Returns to the first page and forgets the selection, keeping sort
    /// keys and filters. Used when the rows are replaced.
    pub const fn reset_position(&mut self) {
        self.pagination.first();
        self.selected = None;
    }

    /// Runs a click on a cell.
    ///
    /// `on_click` receives the cell value and its column first; the grid's
    /// own behaviour (selecting the cell) runs afterwards whatever the hook
    /// did. Returns `None` without calling the hook when the position does
    /// not name a cell.
    pub fn click_cell<T, F>(&mut self, rows: &[R], position: CellPosition, on_click: F) -> Option<T>
    where
        F: FnOnce(&CellValue, &ColumnDef<R>) -> T,
    {
        let row = rows.get(position.row)?;
        let column = self.schema.column(position.column)?;
        let outcome = on_click(&column.value(row), column);
        self.selected = Some(position);
        Some(outcome)
    }
}
