//! Cell activation for the review grid.
//!
//! Any cell may hold a link, so every activation goes through
//! [`dispatch_cell_click`] regardless of column.

use crate::grid::CellValue;
use crate::navigation::Navigator;

/// Scheme prefix that marks a cell value as a link.
pub const LINK_SCHEME_PREFIX: &str = "https";

/// What happened when a cell was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The value was a link and was handed to the browser.
    Opened {
        /// The URL that was opened.
        url: String,
    },
    /// The value was text but not a link.
    NotALink,
    /// The value was not text (a number, `NaN` or a missing field).
    NotText,
    /// The value was a link but the browser could not be launched.
    NavigationFailed {
        /// The URL that could not be opened.
        url: String,
        /// Why the launch failed.
        message: String,
    },
}

impl ClickOutcome {
    /// Short description for the status bar.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Opened { url } => format!("Opened {url}"),
            Self::NotALink => "Cell is not a link".to_owned(),
            Self::NotText => "Cell has no text to open".to_owned(),
            Self::NavigationFailed { message, .. } => message.clone(),
        }
    }
}

/// Opens the cell value in a new browser tab when it is a link.
///
/// Non-text values are logged and ignored; they never abort the click.
pub fn dispatch_cell_click(value: &CellValue, navigator: &dyn Navigator) -> ClickOutcome {
    let CellValue::Text(text) = value else {
        tracing::info!(value = %value, "ignoring activation of a non-text cell");
        return ClickOutcome::NotText;
    };

    if !text.starts_with(LINK_SCHEME_PREFIX) {
        return ClickOutcome::NotALink;
    }

    match navigator.open_in_new_tab(text) {
        Ok(()) => ClickOutcome::Opened { url: text.clone() },
        Err(error) => {
            tracing::warn!("failed to open '{text}': {error}");
            ClickOutcome::NavigationFailed {
                url: text.clone(),
                message: error.to_string(),
            }
        }
    }
}
