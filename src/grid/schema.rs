//! Declarative column schema for the data grid.
//!
//! A schema is a list of column groups, each holding column definitions.
//! It is built once, validated once, and shared by reference afterwards.

use std::collections::HashSet;
use std::ops::Range;

use thiserror::Error;

use super::CellValue;

/// Reads a cell value from a row.
pub type Accessor<R> = fn(&R) -> CellValue;

/// Renders a cell value into exactly `width` terminal columns.
pub type CellRenderer = fn(&CellValue, usize) -> String;

/// Problems found while validating a column schema.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema defines no columns at all.
    #[error("column schema has no columns")]
    NoColumns,

    /// A group has no child columns.
    #[error("column group '{group}' has no columns")]
    EmptyGroup {
        /// Header of the offending group.
        group: String,
    },

    /// Two columns share an identifier.
    #[error("column id '{id}' is defined more than once")]
    DuplicateColumn {
        /// The repeated identifier.
        id: String,
    },

    /// A column or group has a blank header.
    #[error("column '{id}' has an empty header")]
    EmptyHeader {
        /// Identifier of the column (or group header position).
        id: String,
    },

    /// A column is too narrow to draw.
    #[error("column '{id}' has zero width")]
    ZeroWidth {
        /// Identifier of the column.
        id: String,
    },
}

/// One column of the grid.
#[derive(Debug)]
pub struct ColumnDef<R> {
    id: &'static str,
    header: &'static str,
    width: usize,
    accessor: Accessor<R>,
    renderer: Option<CellRenderer>,
}

impl<R> ColumnDef<R> {
    /// Creates a column rendered as plain text.
    #[must_use]
    pub const fn new(
        id: &'static str,
        header: &'static str,
        width: usize,
        accessor: Accessor<R>,
    ) -> Self {
        Self {
            id,
            header,
            width,
            accessor,
            renderer: None,
        }
    }

    /// Replaces the plain-text rendering with a custom renderer.
    #[must_use]
    pub const fn with_renderer(mut self, renderer: CellRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Stable column identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Header label.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        self.header
    }

    /// Display width in terminal columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Custom renderer, if any.
    #[must_use]
    pub const fn renderer(&self) -> Option<CellRenderer> {
        self.renderer
    }

    /// Reads this column's value from a row.
    #[must_use]
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }
}

/// A labelled group of columns.
#[derive(Debug)]
pub struct ColumnGroup<R> {
    header: &'static str,
    columns: Vec<ColumnDef<R>>,
}

impl<R> ColumnGroup<R> {
    /// Creates a group from its header and child columns.
    #[must_use]
    pub const fn new(header: &'static str, columns: Vec<ColumnDef<R>>) -> Self {
        Self { header, columns }
    }
}

/// Position of a group within the flattened column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpan {
    /// Group header label.
    pub header: &'static str,
    /// Indices of the columns belonging to the group.
    pub columns: Range<usize>,
}

/// The full column layout of a grid.
#[derive(Debug)]
pub struct ColumnSchema<R> {
    columns: Vec<ColumnDef<R>>,
    groups: Vec<GroupSpan>,
}

impl<R> ColumnSchema<R> {
    /// Flattens groups into a schema; call [`ColumnSchema::validate`] once
    /// before use.
    #[must_use]
    pub fn new(groups: Vec<ColumnGroup<R>>) -> Self {
        let mut columns = Vec::new();
        let mut spans = Vec::with_capacity(groups.len());

        for group in groups {
            let start = columns.len();
            columns.extend(group.columns);
            spans.push(GroupSpan {
                header: group.header,
                columns: start..columns.len(),
            });
        }

        Self {
            columns,
            groups: spans,
        }
    }

    /// Checks the schema for empty groups, blank headers, zero widths and
    /// duplicate column identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::NoColumns);
        }

        for group in &self.groups {
            if group.header.trim().is_empty() {
                return Err(SchemaError::EmptyHeader {
                    id: format!("group at column {}", group.columns.start),
                });
            }
            if group.columns.is_empty() {
                return Err(SchemaError::EmptyGroup {
                    group: group.header.to_owned(),
                });
            }
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id) {
                return Err(SchemaError::DuplicateColumn {
                    id: column.id.to_owned(),
                });
            }
            if column.header.trim().is_empty() {
                return Err(SchemaError::EmptyHeader {
                    id: column.id.to_owned(),
                });
            }
            if column.width == 0 {
                return Err(SchemaError::ZeroWidth {
                    id: column.id.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// All columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    /// The column at `index`, if any.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&ColumnDef<R>> {
        self.columns.get(index)
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Index of the column with the given identifier.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    /// Group spans in display order.
    #[must_use]
    pub fn groups(&self) -> &[GroupSpan] {
        &self.groups
    }
}
