//! Raw table to review mapping.

use super::Review;

/// Selects the rows that carry review data.
///
/// The first row is the header and the last row is the trailing artifact
/// the row parser leaves behind, so both are dropped whatever they contain.
/// Tables with fewer than three rows therefore yield no data rows.
#[must_use]
pub fn select_data_rows<T>(rows: &[T]) -> &[T] {
    let end = rows.len().saturating_sub(1);
    rows.get(1..end).unwrap_or_default()
}

/// Maps a raw parsed table to reviews, in source order.
///
/// Never fails: short rows become partially-populated reviews.
#[must_use]
pub fn map_records<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<Review> {
    select_data_rows(rows)
        .iter()
        .map(|row| Review::from_row(row.as_slice()))
        .collect()
}
