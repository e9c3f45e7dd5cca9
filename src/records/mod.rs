//! Typed review records and the raw-row mapper that produces them.
//!
//! A review file arrives as a table of strings. [`map_records`] turns that
//! table into [`Review`] values by positional field access, coercing the
//! numeric columns and expanding the two link columns into absolute URLs.

mod coerced;
mod mapper;
mod review;

pub use coerced::Coerced;
pub use mapper::{map_records, select_data_rows};
pub use review::{REVIEW_ORIGIN, Review};
