//! Integer fields coerced from free text.

use std::fmt;

/// An integer parsed from a text column, or the not-a-number sentinel.
///
/// Parsing is lenient in the way review exports expect: leading whitespace
/// and a sign are accepted, then the longest run of decimal digits is read
/// and anything after it is ignored. Input without leading digits becomes
/// [`Coerced::NOT_A_NUMBER`].
///
/// The sentinel is not equal to anything, itself included, so `Coerced`
/// implements [`PartialEq`] but deliberately not [`Eq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Coerced(Option<i64>);

impl Coerced {
    /// The sentinel produced when a column holds no leading integer.
    pub const NOT_A_NUMBER: Self = Self(None);

    /// Wraps a known integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// Parses a column value using base-10 prefix semantics.
    ///
    /// ```
    /// use reviewgrid::records::Coerced;
    ///
    /// assert_eq!(Coerced::parse(" 4 stars").value(), Some(4));
    /// assert_eq!(Coerced::parse("4.7").value(), Some(4));
    /// assert!(Coerced::parse("abc").is_not_a_number());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = trimmed.strip_prefix('-').map_or_else(
            || (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
            |rest| (true, rest),
        );

        let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        let Some(digits) = unsigned.get(..digit_count).filter(|d| !d.is_empty()) else {
            return Self::NOT_A_NUMBER;
        };

        let magnitude = digits.parse::<i64>().ok();
        let value = if negative {
            magnitude.and_then(i64::checked_neg)
        } else {
            magnitude
        };
        Self(value)
    }

    /// Parses an optional column; a missing column is the sentinel.
    #[must_use]
    pub fn parse_optional(raw: Option<&str>) -> Self {
        raw.map_or(Self::NOT_A_NUMBER, Self::parse)
    }

    /// Returns the integer, or `None` for the sentinel.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        self.0
    }

    /// Returns true for the not-a-number sentinel.
    #[must_use]
    pub const fn is_not_a_number(self) -> bool {
        self.0.is_none()
    }
}

impl PartialEq for Coerced {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.0, other.0), (Some(left), Some(right)) if left == right)
    }
}

impl fmt::Display for Coerced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Coerced;

    #[rstest]
    #[case::plain("5", Some(5))]
    #[case::zero("0", Some(0))]
    #[case::negative("-3", Some(-3))]
    #[case::explicit_plus("+7", Some(7))]
    #[case::leading_whitespace("  12", Some(12))]
    #[case::trailing_text("42 people found this helpful", Some(42))]
    #[case::decimal_truncates("4.0", Some(4))]
    #[case::letters("abc", None)]
    #[case::empty("", None)]
    #[case::sign_only("-", None)]
    #[case::inner_whitespace("- 3", None)]
    #[case::overflow("99999999999999999999", None)]
    fn parse_follows_prefix_semantics(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(Coerced::parse(raw).value(), expected);
    }

    #[test]
    fn missing_column_is_not_a_number() {
        assert!(Coerced::parse_optional(None).is_not_a_number());
        assert_eq!(Coerced::parse_optional(Some("1")).value(), Some(1));
    }

    #[test]
    #[expect(
        clippy::eq_op,
        reason = "the sentinel must be unequal to itself"
    )]
    fn sentinel_never_equals_itself() {
        let nan = Coerced::NOT_A_NUMBER;
        assert!(nan != nan);
        assert!(Coerced::new(1) != nan);
        assert_eq!(Coerced::new(4), Coerced::parse("4"));
    }

    #[test]
    fn display_matches_filter_text() {
        assert_eq!(Coerced::new(4).to_string(), "4");
        assert_eq!(Coerced::new(-2).to_string(), "-2");
        assert_eq!(Coerced::NOT_A_NUMBER.to_string(), "NaN");
    }
}
