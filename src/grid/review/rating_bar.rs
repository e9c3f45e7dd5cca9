//! Proportional bar drawn in the rating column.

use crate::grid::CellValue;

/// Bar fill percentage contributed by each rating point.
const PERCENT_PER_POINT: i64 = 20;

/// Percentages above this draw in the success colour.
const SUCCESS_ABOVE: i64 = 66;

/// Percentages above this (and not above [`SUCCESS_ABOVE`]) draw in the
/// warning colour.
const WARNING_ABOVE: i64 = 33;

const FILLED: char = '█';
const EMPTY: char = '░';
const TRACK_RGB: (u8, u8, u8) = (0xda, 0xda, 0xda);
const RESET: &str = "\x1b[0m";

/// Fill colour of a rating bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    /// High ratings.
    Success,
    /// Middling ratings.
    Warning,
    /// Low, zero or unreadable ratings.
    Danger,
}

impl BarTone {
    /// Picks the tone for a fill percentage; no percentage is danger.
    #[must_use]
    pub const fn for_percent(percent: Option<i64>) -> Self {
        match percent {
            Some(value) if value > SUCCESS_ABOVE => Self::Success,
            Some(value) if value > WARNING_ABOVE => Self::Warning,
            _ => Self::Danger,
        }
    }

    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Success => (0x85, 0xcc, 0x00),
            Self::Warning => (0xff, 0xbf, 0x00),
            Self::Danger => (0xff, 0x2e, 0x00),
        }
    }
}

/// A rating rendered as a horizontal bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBar {
    percent: Option<i64>,
    tone: BarTone,
}

impl RatingBar {
    /// Computes the bar for a rating cell.
    ///
    /// Integers fill `rating * 20` percent. Anything else (the `NaN`
    /// sentinel, a missing column, stray text) has no percentage and draws
    /// an empty danger bar.
    #[must_use]
    pub const fn for_value(value: &CellValue) -> Self {
        let percent = match value {
            CellValue::Integer(rating) => Some(rating.saturating_mul(PERCENT_PER_POINT)),
            _ => None,
        };
        Self {
            percent,
            tone: BarTone::for_percent(percent),
        }
    }

    /// Fill percentage, unclamped; `None` for unreadable ratings.
    #[must_use]
    pub const fn percent(&self) -> Option<i64> {
        self.percent
    }

    /// Fill colour.
    #[must_use]
    pub const fn tone(&self) -> BarTone {
        self.tone
    }

    /// Number of filled cells in a bar `width` cells wide.
    ///
    /// Percentages outside `0..=100` are clamped so the fill never spills
    /// past the track.
    #[must_use]
    pub fn filled_cells(&self, width: usize) -> usize {
        let clamped = self.percent.unwrap_or(0).clamp(0, 100);
        usize::try_from(clamped)
            .unwrap_or(0)
            .saturating_mul(width)
            .checked_div(100)
            .unwrap_or(0)
    }

    /// Draws the bar with 24-bit colour escapes.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let filled = self.filled_cells(width);
        let (red, green, blue) = self.tone.rgb();
        let (track_red, track_green, track_blue) = TRACK_RGB;

        let mut output = format!("\x1b[38;2;{red};{green};{blue}m");
        output.extend(std::iter::repeat_n(FILLED, filled));
        output.push_str(&format!("\x1b[38;2;{track_red};{track_green};{track_blue}m"));
        output.extend(std::iter::repeat_n(EMPTY, width.saturating_sub(filled)));
        output.push_str(RESET);
        output
    }
}

/// Cell renderer for the rating column.
pub(crate) fn render_rating(value: &CellValue, width: usize) -> String {
    RatingBar::for_value(value).render(width)
}
