//! Column filter editing.
//!
//! The filter prompt applies the draft on every keystroke so the grid
//! narrows while typing. Cancelling restores the value the column had when
//! editing started.

use bubbletea_rs::Cmd;

use super::ReviewGridApp;
use crate::tui::input::InputMode;
use crate::tui::messages::AppMsg;

impl ReviewGridApp {
    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartFilterEdit => self.handle_start_filter_edit(),
            AppMsg::FilterInput(character) => {
                self.filter_draft.push(*character);
                self.apply_filter_draft()
            }
            AppMsg::FilterBackspace => {
                self.filter_draft.pop();
                self.apply_filter_draft()
            }
            AppMsg::CommitFilter => {
                self.input_mode = InputMode::Normal;
                self.filter_before_edit = None;
                None
            }
            AppMsg::CancelFilterEdit => self.handle_cancel_filter_edit(),
            AppMsg::ClearColumnFilter => {
                self.grid.table_mut().clear_filter(self.cursor.column);
                self.clamp_cursor();
                None
            }
            AppMsg::ClearAllFilters => {
                self.grid.table_mut().clear_filters();
                self.clamp_cursor();
                None
            }
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    /// Header of the column whose filter is being edited.
    pub(super) fn filter_column_header(&self) -> &'static str {
        self.grid
            .table()
            .schema()
            .column(self.filter_column)
            .map_or("", |column| column.header())
    }

    /// Text typed into the filter prompt so far.
    pub(super) fn filter_draft(&self) -> &str {
        &self.filter_draft
    }

    /// Text typed into the path prompt so far.
    pub(super) fn path_draft(&self) -> &str {
        &self.path_draft
    }

    fn handle_start_filter_edit(&mut self) -> Option<Cmd> {
        self.filter_column = self.cursor.column;
        let current = self
            .grid
            .table()
            .filters()
            .value_of(self.filter_column)
            .map(ToOwned::to_owned);
        self.filter_draft = current.clone().unwrap_or_default();
        self.filter_before_edit = current;
        self.input_mode = InputMode::EditingFilter;
        None
    }

    fn apply_filter_draft(&mut self) -> Option<Cmd> {
        self.grid
            .table_mut()
            .set_filter(self.filter_column, &self.filter_draft);
        self.clamp_cursor();
        None
    }

    fn handle_cancel_filter_edit(&mut self) -> Option<Cmd> {
        let previous = self.filter_before_edit.take().unwrap_or_default();
        self.grid
            .table_mut()
            .set_filter(self.filter_column, &previous);
        self.input_mode = InputMode::Normal;
        self.clamp_cursor();
        None
    }
}
