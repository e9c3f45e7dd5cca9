//! The review grid: a [`DataGrid`] configured for product reviews.
//!
//! [`ReviewGrid`] owns the loaded review collection and moves between two
//! states. It starts [`GridState::Empty`]; every completed file load moves
//! it to [`GridState::Loaded`] with the new collection, replacing whatever
//! was there. There is no way back to `Empty`.

use std::sync::{Arc, LazyLock};

use crate::navigation::Navigator;
use crate::records::{Coerced, Review};

use super::{
    CellPosition, CellValue, ColumnDef, ColumnFilter, ColumnGroup, ColumnSchema, DEFAULT_PAGE_SIZE,
    DataGrid, GridConfig,
};

mod click;
mod rating_bar;

pub use click::{ClickOutcome, LINK_SCHEME_PREFIX, dispatch_cell_click};
pub use rating_bar::{BarTone, RatingBar};

impl From<Coerced> for CellValue {
    fn from(value: Coerced) -> Self {
        value.value().map_or(Self::NotANumber, Self::Integer)
    }
}

static REVIEW_SCHEMA: LazyLock<Arc<ColumnSchema<Review>>> =
    LazyLock::new(|| Arc::new(build_review_schema()));

/// The fixed review column layout, built on first use and shared after.
#[must_use]
pub fn review_schema() -> Arc<ColumnSchema<Review>> {
    Arc::clone(&REVIEW_SCHEMA)
}

fn build_review_schema() -> ColumnSchema<Review> {
    ColumnSchema::new(vec![
        ColumnGroup::new(
            "Info",
            vec![
                ColumnDef::new("review_id", "Review ID", 16, |r: &Review| {
                    CellValue::text(r.review_id())
                }),
                ColumnDef::new("product_id", "Product ID", 12, |r: &Review| {
                    CellValue::text(r.product_id())
                }),
                ColumnDef::new("review_date", "Review Date", 16, |r: &Review| {
                    CellValue::text(r.review_date())
                }),
                ColumnDef::new("author", "Author", 16, |r: &Review| {
                    CellValue::text(r.author())
                }),
            ],
        ),
        ColumnGroup::new(
            "Stats",
            vec![
                ColumnDef::new("rating", "Rating", 10, |r: &Review| CellValue::from(r.rating()))
                    .with_renderer(rating_bar::render_rating),
                ColumnDef::new("helpful", "Helpful", 7, |r: &Review| CellValue::from(r.helpful())),
                ColumnDef::new("image_available", "Image Available", 9, |r: &Review| {
                    CellValue::from(r.image_available())
                }),
            ],
        ),
        ColumnGroup::new(
            "Review",
            vec![
                ColumnDef::new("title", "Title", 28, |r: &Review| CellValue::text(r.title())),
                ColumnDef::new("review", "Review", 40, |r: &Review| {
                    CellValue::text(r.review())
                }),
            ],
        ),
        ColumnGroup::new(
            "Links",
            vec![
                ColumnDef::new("link", "Review Link", 36, |r: &Review| {
                    CellValue::text(r.link())
                }),
                ColumnDef::new("author_profile", "Author Profile", 36, |r: &Review| {
                    CellValue::text(r.author_profile())
                }),
            ],
        ),
    ])
}

/// Keeps rows whose stringified cell equals the filter text exactly.
///
/// This is not a substring match: `"4"` matches a rating of 4, `"4.0"`
/// matches nothing.
#[must_use]
pub fn exact_match_filter(filter: &ColumnFilter, value: &CellValue) -> bool {
    value.to_string() == filter.value
}

/// Lifecycle of the review collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GridState {
    /// No file has been loaded yet.
    #[default]
    Empty,
    /// The reviews from the most recent load.
    Loaded {
        /// Reviews in source order.
        records: Vec<Review>,
    },
}

/// Stateful review table.
#[derive(Debug, Clone)]
pub struct ReviewGrid {
    state: GridState,
    table: DataGrid<Review>,
}

impl Default for ReviewGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewGrid {
    /// Creates an empty grid with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty grid with a custom initial page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            state: GridState::Empty,
            table: DataGrid::new(GridConfig {
                schema: review_schema(),
                filter_method: exact_match_filter,
                default_page_size: page_size,
            }),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> &GridState {
        &self.state
    }

    /// Returns true once a file has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.state, GridState::Loaded { .. })
    }

    /// The loaded reviews; empty before the first load.
    #[must_use]
    pub fn records(&self) -> &[Review] {
        match &self.state {
            GridState::Empty => &[],
            GridState::Loaded { records } => records,
        }
    }

    /// Replaces the collection with a freshly loaded one.
    ///
    /// Sort keys and filters survive the load; the page and selection go
    /// back to the start.
    pub fn load(&mut self, records: Vec<Review>) {
        self.state = GridState::Loaded { records };
        self.table.reset_position();
    }

    /// Grid view state.
    #[must_use]
    pub const fn table(&self) -> &DataGrid<Review> {
        &self.table
    }

    /// Mutable grid view state for sort, filter and paging changes.
    pub const fn table_mut(&mut self) -> &mut DataGrid<Review> {
        &mut self.table
    }

    /// Reviews passing the filters, in sorted order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Review> {
        let records = self.records();
        self.table
            .visible_rows(records)
            .into_iter()
            .filter_map(|index| records.get(index))
            .collect()
    }

    /// Indices (into [`ReviewGrid::records`]) of the rows on the current page.
    #[must_use]
    pub fn page_rows(&self) -> Vec<usize> {
        self.table.page_rows(self.records())
    }

    /// Number of pages for the visible reviews.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.table.page_count(self.records())
    }

    /// Moves to the next page.
    pub fn next_page(&mut self) {
        let (records, table) = self.split_mut();
        table.next_page(records);
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) {
        let (records, table) = self.split_mut();
        table.last_page(records);
    }

    fn split_mut(&mut self) -> (&[Review], &mut DataGrid<Review>) {
        let records = match &self.state {
            GridState::Empty => &[][..],
            GridState::Loaded { records } => records.as_slice(),
        };
        (records, &mut self.table)
    }

    /// Activates a cell: links open in a new browser tab, anything else is
    /// a no-op. The grid then selects the cell.
    ///
    /// Returns `None` when the position is outside the loaded reviews.
    pub fn click_cell(
        &mut self,
        position: CellPosition,
        navigator: &dyn Navigator,
    ) -> Option<ClickOutcome> {
        let (records, table) = self.split_mut();
        table.click_cell(records, position, |value, _column| {
            dispatch_cell_click(value, navigator)
        })
    }
}
