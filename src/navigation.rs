//! Browser hand-off for activated links.

use std::fmt;

use thiserror::Error;

/// Failure to hand a URL to the browser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// The system launcher could not open the URL.
    #[error("could not open {url} in a browser: {message}")]
    Launch {
        /// URL that was being opened.
        url: String,
        /// Launcher error detail.
        message: String,
    },
}

/// Opens URLs outside the terminal.
pub trait Navigator: fmt::Debug + Send + Sync {
    /// Opens `url` in a new browser tab and brings it to the front.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::Launch`] when no browser could be started.
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError>;
}

/// Navigator backed by the desktop's default browser.
///
/// The browser decides tab placement; desktop browsers open external URLs
/// in a new tab of the focused window and raise it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        open::that_detached(url).map_err(|error| NavigationError::Launch {
            url: url.to_owned(),
            message: error.to_string(),
        })
    }
}
