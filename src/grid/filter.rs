//! Per-column text filters.

use super::{CellValue, ColumnSchema};

/// The filter text entered for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    /// Column index in the schema.
    pub column: usize,
    /// Text typed into the column's filter input.
    pub value: String,
}

/// Decides whether a cell satisfies a column filter.
pub type FilterMethod = fn(&ColumnFilter, &CellValue) -> bool;

/// Active filters, at most one per column. All must match for a row to be
/// shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<ColumnFilter>,
}

impl FilterSet {
    /// Sets the filter text for a column; empty text removes the filter.
    pub fn set(&mut self, column: usize, value: &str) {
        if value.is_empty() {
            self.clear(column);
            return;
        }

        match self.filters.iter_mut().find(|filter| filter.column == column) {
            Some(filter) => value.clone_into(&mut filter.value),
            None => self.filters.push(ColumnFilter {
                column,
                value: value.to_owned(),
            }),
        }
    }

    /// Removes the filter on a column.
    pub fn clear(&mut self, column: usize) {
        self.filters.retain(|filter| filter.column != column);
    }

    /// Removes every filter.
    pub fn clear_all(&mut self) {
        self.filters.clear();
    }

    /// Filter text for a column, if one is set.
    #[must_use]
    pub fn value_of(&self, column: usize) -> Option<&str> {
        self.filters
            .iter()
            .find(|filter| filter.column == column)
            .map(|filter| filter.value.as_str())
    }

    /// Active filters in the order they were first set.
    #[must_use]
    pub fn filters(&self) -> &[ColumnFilter] {
        &self.filters
    }

    /// Returns true when no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns true when `row` passes every active filter.
    #[must_use]
    pub fn matches<R>(&self, schema: &ColumnSchema<R>, row: &R, method: FilterMethod) -> bool {
        self.filters.iter().all(|filter| {
            schema
                .column(filter.column)
                .is_some_and(|column| method(filter, &column.value(row)))
        })
    }
}
