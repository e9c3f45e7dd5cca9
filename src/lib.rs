//! Review grid library crate.
//!
//! Loads product reviews from delimited text files and presents them in an
//! interactive terminal grid with exact-match column filters, multi-column
//! sorting, pagination, per-rating bars and click-through links.
//!
//! The pieces, from the file inwards:
//!
//! - [`source`] parses a file into raw rows
//! - [`records`] maps raw rows to typed [`Review`]s
//! - [`grid`] holds the generic [`grid::DataGrid`] and the configured
//!   [`ReviewGrid`]
//! - [`navigation`] hands links to the browser
//! - [`tui`] draws the grid and maps keys to grid operations

pub mod config;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod records;
pub mod source;
pub mod telemetry;
pub mod tui;

pub use config::ReviewGridConfig;
pub use error::LoadError;
pub use grid::{CellPosition, ClickOutcome, GridState, ReviewGrid, review_schema};
pub use navigation::{NavigationError, Navigator, SystemBrowser};
pub use records::{Coerced, Review, map_records};
pub use source::{parse_rows, read_rows, read_rows_async};
