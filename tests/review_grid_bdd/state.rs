//! Scenario state for review grid BDD tests.

use std::sync::Mutex;

use reviewgrid::navigation::{NavigationError, Navigator};
use reviewgrid::ReviewGrid;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Navigator that records every URL it is asked to open.
#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// URLs opened so far, in order.
    pub(crate) fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_owned());
        }
        Ok(())
    }
}

/// State shared across steps in a review grid scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewGridState {
    /// The grid under test.
    pub(crate) grid: Slot<ReviewGrid>,
    /// Browser stand-in used for clicks.
    pub(crate) navigator: Slot<RecordingNavigator>,
}

/// Builds the raw rows of a review file: header, one row per rating and
/// the trailing blank row a final newline produces.
pub(crate) fn review_file_rows(ratings: &[&str]) -> Vec<Vec<String>> {
    let mut rows = vec![review_row("review_id", "rating")];
    rows.extend(
        ratings
            .iter()
            .enumerate()
            .map(|(index, rating)| review_row(&format!("R{}", index.saturating_add(1)), rating)),
    );
    rows.push(vec![String::new()]);
    rows
}

fn review_row(id: &str, rating: &str) -> Vec<String> {
    [
        id,
        "B01MAW2294",
        "April 8, 2018",
        "Anton",
        rating,
        "3",
        "0",
        "Title",
        "Body",
        &format!("/review/{id}"),
        "/gp/profile/A1",
    ]
    .iter()
    .map(|field| (*field).to_owned())
    .collect()
}
