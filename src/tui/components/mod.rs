//! UI components for the review grid TUI.
//!
//! Components are stateless renderers fed through a view context each frame.

mod grid_table;
pub(crate) mod text_truncate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use grid_table::{GridTableComponent, GridTableViewContext, TABLE_HEADER_LINES};
