//! Focus and paging handlers.
//!
//! The focus row is relative to the current page and is clamped whenever
//! the page contents change. Scrolling then keeps the focused row and
//! column inside the terminal.

use bubbletea_rs::Cmd;

use super::ReviewGridApp;
use crate::tui::components::{GridTableComponent, TABLE_HEADER_LINES};
use crate::tui::messages::AppMsg;

/// Lines drawn around the table: title, prompt and status bar.
const CHROME_LINES: usize = 3;

impl ReviewGridApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.move_row(|row, _| row.saturating_sub(1)),
            AppMsg::CursorDown => self.move_row(|row, last| row.saturating_add(1).min(last)),
            AppMsg::CursorLeft => self.move_column(|column, _| column.saturating_sub(1)),
            AppMsg::CursorRight => {
                self.move_column(|column, last| column.saturating_add(1).min(last))
            }
            AppMsg::NextPage => self.change_page(|app| app.grid.next_page()),
            AppMsg::PreviousPage => self.change_page(|app| app.grid.table_mut().previous_page()),
            AppMsg::FirstPage => self.change_page(|app| app.grid.table_mut().first_page()),
            AppMsg::LastPage => self.change_page(|app| app.grid.last_page()),
            AppMsg::GrowPageSize => self.change_page(|app| app.grid.table_mut().grow_page_size()),
            AppMsg::ShrinkPageSize => {
                self.change_page(|app| app.grid.table_mut().shrink_page_size())
            }
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Number of page rows that fit in the terminal.
    pub(super) fn visible_height(&self) -> usize {
        usize::from(self.height)
            .saturating_sub(CHROME_LINES)
            .saturating_sub(TABLE_HEADER_LINES)
            .max(1)
    }

    fn move_row(&mut self, step: impl FnOnce(usize, usize) -> usize) -> Option<Cmd> {
        let last = self.grid.page_rows().len().saturating_sub(1);
        self.cursor.row = step(self.cursor.row, last);
        self.ensure_cursor_visible();
        None
    }

    fn move_column(&mut self, step: impl FnOnce(usize, usize) -> usize) -> Option<Cmd> {
        let last = self.grid.table().schema().column_count().saturating_sub(1);
        self.cursor.column = step(self.cursor.column, last);
        self.ensure_cursor_visible();
        None
    }

    fn change_page(&mut self, change: impl FnOnce(&mut Self)) -> Option<Cmd> {
        let page_before = self.grid.table().pagination().page();
        change(self);
        if self.grid.table().pagination().page() != page_before {
            self.cursor.row = 0;
        }
        self.clamp_cursor();
        None
    }

    /// Keeps the focus on an existing cell after the page contents change.
    pub(super) fn clamp_cursor(&mut self) {
        let rows = self.grid.page_rows().len();
        self.cursor.row = self.cursor.row.min(rows.saturating_sub(1));
        self.ensure_cursor_visible();
    }

    /// Adjusts both scroll offsets so the focused cell is drawn.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let visible_height = self.visible_height();
        if self.cursor.row < self.scroll_offset {
            self.scroll_offset = self.cursor.row;
        } else if self.cursor.row >= self.scroll_offset.saturating_add(visible_height) {
            self.scroll_offset = self
                .cursor
                .row
                .saturating_sub(visible_height.saturating_sub(1));
        }

        if self.cursor.column < self.column_offset {
            self.column_offset = self.cursor.column;
            return;
        }
        let max_width = usize::from(self.width);
        while self.column_offset < self.cursor.column
            && !GridTableComponent::visible_columns(
                self.grid.table(),
                self.column_offset,
                max_width,
            )
            .contains(&self.cursor.column)
        {
            self.column_offset = self.column_offset.saturating_add(1);
        }
    }
}
