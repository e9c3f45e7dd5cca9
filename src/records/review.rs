//! The review record built from one data row.

use super::Coerced;

/// Origin prefixed to the relative link and profile columns.
pub const REVIEW_ORIGIN: &str = "https://www.amazon.com";

/// One product review.
///
/// Fields are read through accessors only; a review never changes after it
/// has been built. Text fields are `None` when the source row was too short
/// to contain the column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Review {
    review_id: Option<String>,
    product_id: Option<String>,
    review_date: Option<String>,
    author: Option<String>,
    rating: Coerced,
    helpful: Coerced,
    image_available: Coerced,
    title: Option<String>,
    review: Option<String>,
    link: Option<String>,
    author_profile: Option<String>,
}

impl Review {
    /// Builds a review by positional access into a raw row.
    ///
    /// Columns 9 and 10 are appended verbatim to [`REVIEW_ORIGIN`]; nothing
    /// is escaped or validated. Missing columns leave the field absent and
    /// extra columns are ignored.
    #[must_use]
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let text = |index: usize| row.get(index).map(|value| value.as_ref().to_owned());
        let number = |index: usize| Coerced::parse_optional(row.get(index).map(AsRef::as_ref));
        let url = |index: usize| {
            row.get(index)
                .map(|fragment| format!("{REVIEW_ORIGIN}{}", fragment.as_ref()))
        };

        Self {
            review_id: text(0),
            product_id: text(1),
            review_date: text(2),
            author: text(3),
            rating: number(4),
            helpful: number(5),
            image_available: number(6),
            title: text(7),
            review: text(8),
            link: url(9),
            author_profile: url(10),
        }
    }

    /// Opaque review identifier.
    #[must_use]
    pub fn review_id(&self) -> Option<&str> {
        self.review_id.as_deref()
    }

    /// Opaque product identifier.
    #[must_use]
    pub fn product_id(&self) -> Option<&str> {
        self.product_id.as_deref()
    }

    /// Review date as written in the source file.
    #[must_use]
    pub fn review_date(&self) -> Option<&str> {
        self.review_date.as_deref()
    }

    /// Review author display name.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Star rating, usually 1 to 5.
    #[must_use]
    pub const fn rating(&self) -> Coerced {
        self.rating
    }

    /// Number of readers who marked the review helpful.
    #[must_use]
    pub const fn helpful(&self) -> Coerced {
        self.helpful
    }

    /// `1` when the review carries images, `0` otherwise.
    #[must_use]
    pub const fn image_available(&self) -> Coerced {
        self.image_available
    }

    /// Review headline.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Review body.
    #[must_use]
    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    /// Absolute URL of the review.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Absolute URL of the author's profile.
    #[must_use]
    pub fn author_profile(&self) -> Option<&str> {
        self.author_profile.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn full_row() -> Vec<&'static str> {
        vec![
            "R1",
            "B01MAW2294",
            "April 8, 2018",
            "Anton",
            "5",
            "12",
            "1",
            "Great router",
            "Covers the whole house.",
            "/gp/customer-reviews/R1",
            "/gp/profile/amzn1.account.A1",
        ]
    }

    #[rstest]
    fn from_row_maps_every_column(full_row: Vec<&'static str>) {
        let review = Review::from_row(&full_row);

        assert_eq!(review.review_id(), Some("R1"));
        assert_eq!(review.product_id(), Some("B01MAW2294"));
        assert_eq!(review.review_date(), Some("April 8, 2018"));
        assert_eq!(review.author(), Some("Anton"));
        assert_eq!(review.rating().value(), Some(5));
        assert_eq!(review.helpful().value(), Some(12));
        assert_eq!(review.image_available().value(), Some(1));
        assert_eq!(review.title(), Some("Great router"));
        assert_eq!(review.review(), Some("Covers the whole house."));
        assert_eq!(
            review.link(),
            Some("https://www.amazon.com/gp/customer-reviews/R1")
        );
        assert_eq!(
            review.author_profile(),
            Some("https://www.amazon.com/gp/profile/amzn1.account.A1")
        );
    }

    #[rstest]
    #[case::relative("/product/123", "https://www.amazon.com/product/123")]
    #[case::no_leading_slash("product/123", "https://www.amazon.comproduct/123")]
    #[case::empty("", "https://www.amazon.com")]
    #[case::unescaped("/a b?c=d", "https://www.amazon.com/a b?c=d")]
    fn link_is_plain_concatenation(
        full_row: Vec<&'static str>,
        #[case] fragment: &'static str,
        #[case] expected: &str,
    ) {
        let mut row = full_row;
        if let Some(cell) = row.get_mut(9) {
            *cell = fragment;
        }
        let review = Review::from_row(&row);
        assert_eq!(review.link(), Some(expected));
    }

    #[test]
    fn short_row_degrades_to_partial_record() {
        let review = Review::from_row(&["R9", "P9", "today"]);

        assert_eq!(review.review_id(), Some("R9"));
        assert_eq!(review.author(), None);
        assert!(review.rating().is_not_a_number());
        assert!(review.helpful().is_not_a_number());
        assert_eq!(review.link(), None);
        assert_eq!(review.author_profile(), None);
    }

    #[test]
    fn non_numeric_rating_becomes_sentinel() {
        let review = Review::from_row(&["R1", "P1", "d", "a", "abc"]);
        assert!(review.rating().is_not_a_number());
    }
}
