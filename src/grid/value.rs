//! Cell values exposed by column accessors.

use std::cmp::Ordering;
use std::fmt;

/// The value a column accessor reads from a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Free text, including URLs.
    Text(String),
    /// A successfully coerced integer.
    Integer(i64),
    /// An integer column whose source text held no number.
    NotANumber,
    /// The source row had no such column.
    Absent,
}

impl CellValue {
    /// Builds a text value, mapping a missing field to [`CellValue::Absent`].
    #[must_use]
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |text| Self::Text(text.to_owned()))
    }

    /// Returns the text when this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Orders values for sorting.
    ///
    /// Integers compare numerically and text compares case-insensitively.
    /// Integers sort before text, and both sort before `NaN` and absent
    /// values, so incomplete rows collect at the end of an ascending sort.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Text(left), Self::Text(right)) => {
                left.to_lowercase().cmp(&right.to_lowercase())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Text(_) => 1,
            Self::NotANumber => 2,
            Self::Absent => 3,
        }
    }
}

/// Formats the value the way filters compare it: integers in decimal, the
/// sentinel as `NaN`, text verbatim and absent values as nothing.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::NotANumber => f.write_str("NaN"),
            Self::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rstest::rstest;

    use super::CellValue;

    #[rstest]
    #[case::integers(CellValue::Integer(2), CellValue::Integer(10), Ordering::Less)]
    #[case::text_ignores_case(
        CellValue::Text("apple".to_owned()),
        CellValue::Text("Banana".to_owned()),
        Ordering::Less
    )]
    #[case::equal_text(
        CellValue::Text("Same".to_owned()),
        CellValue::Text("same".to_owned()),
        Ordering::Equal
    )]
    #[case::nan_after_numbers(CellValue::NotANumber, CellValue::Integer(-5), Ordering::Greater)]
    #[case::absent_last(CellValue::Absent, CellValue::NotANumber, Ordering::Greater)]
    fn sort_cmp_orders_values(
        #[case] left: CellValue,
        #[case] right: CellValue,
        #[case] expected: Ordering,
    ) {
        assert_eq!(left.sort_cmp(&right), expected);
    }

    #[rstest]
    #[case::text(CellValue::Text("abc".to_owned()), "abc")]
    #[case::integer(CellValue::Integer(4), "4")]
    #[case::nan(CellValue::NotANumber, "NaN")]
    #[case::absent(CellValue::Absent, "")]
    fn display_stringifies_values(#[case] value: CellValue, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn as_text_only_returns_text() {
        assert_eq!(CellValue::text(Some("x")).as_text(), Some("x"));
        assert_eq!(CellValue::Integer(4).as_text(), None);
        assert_eq!(CellValue::text(None), CellValue::Absent);
    }
}
