//! Main TUI application model implementing the MVU pattern.
//!
//! The model owns a [`ReviewGrid`] and a keyboard focus on one cell of the
//! current page. Messages move the focus, change paging, sorting and
//! filters, activate cells and load files.
//!
//! # Module Structure
//!
//! - `navigation`: focus and paging handlers
//! - `editing`: filter and path prompts
//! - `loading`: file loading and load results
//! - `rendering`: view rendering methods for terminal output

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};

use crate::grid::{CellPosition, ReviewGrid};
use crate::navigation::Navigator;
use crate::source::DEFAULT_DELIMITER;

use super::input::{InputMode, map_key_to_message};
use super::messages::AppMsg;

mod editing;
mod loading;
mod navigation;
mod rendering;

/// Focused cell, relative to the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    /// Row within the current page.
    pub row: usize,
    /// Column index in the schema.
    pub column: usize,
}

/// Main application model for the review grid TUI.
#[derive(Debug)]
pub struct ReviewGridApp {
    pub(crate) grid: ReviewGrid,
    navigator: Arc<dyn Navigator>,
    pub(crate) cursor: GridCursor,
    /// First column drawn when the table is wider than the terminal.
    column_offset: usize,
    /// First page row drawn when the page is taller than the terminal.
    scroll_offset: usize,
    pub(crate) input_mode: InputMode,
    /// Column whose filter is being edited.
    filter_column: usize,
    filter_draft: String,
    /// Filter value before editing started, restored on cancel.
    filter_before_edit: Option<String>,
    path_draft: String,
    delimiter: u8,
    pub(crate) loading: bool,
    source_path: Option<String>,
    /// Outcome of the last action, shown in the status bar.
    status: Option<String>,
    pub(crate) error: Option<String>,
    width: u16,
    height: u16,
    pub(crate) show_help: bool,
}

impl ReviewGridApp {
    /// Creates an application around a grid.
    #[must_use]
    pub fn new(grid: ReviewGrid, navigator: Arc<dyn Navigator>) -> Self {
        let (width, height) = super::get_initial_terminal_size();
        Self {
            grid,
            navigator,
            cursor: GridCursor::default(),
            column_offset: 0,
            scroll_offset: 0,
            input_mode: InputMode::Normal,
            filter_column: 0,
            filter_draft: String::new(),
            filter_before_edit: None,
            path_draft: String::new(),
            delimiter: DEFAULT_DELIMITER,
            loading: false,
            source_path: None,
            status: None,
            error: None,
            width,
            height,
            show_help: false,
        }
    }

    /// Creates an application with an empty grid and the configured
    /// navigator.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ReviewGrid::new(), super::get_navigator())
    }

    /// Sets the delimiter used for files opened from the path prompt.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The review grid.
    #[must_use]
    pub const fn grid(&self) -> &ReviewGrid {
        &self.grid
    }

    /// Focused cell, relative to the current page.
    #[must_use]
    pub const fn cursor(&self) -> GridCursor {
        self.cursor
    }

    /// What the keyboard is currently driving.
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Outcome of the last action, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Current error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Path of the file currently shown.
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Returns true while a file is being read.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The focused cell as a grid position, or `None` when the page is
    /// empty.
    #[must_use]
    pub fn focused_position(&self) -> Option<CellPosition> {
        self.grid
            .page_rows()
            .get(self.cursor.row)
            .map(|&row| CellPosition {
                row,
                column: self.cursor.column,
            })
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category to keep
    /// cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_grid_action() {
            return self.handle_grid_action(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        if msg.is_loading() {
            return self.handle_loading_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches sort and activation messages.
    fn handle_grid_action(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleSort => self.handle_sort(false),
            AppMsg::AppendSort => self.handle_sort(true),
            AppMsg::ActivateCell => self.handle_activate_cell(),
            _ => {
                debug_assert!(false, "non-grid message routed to handle_grid_action");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_sort(&mut self, append: bool) -> Option<Cmd> {
        self.grid.table_mut().toggle_sort(self.cursor.column, append);
        self.clamp_cursor();
        None
    }

    /// Clicks the focused cell.
    ///
    /// Every activation goes through the grid's click dispatch; link cells
    /// open in the browser and anything else only moves the selection.
    fn handle_activate_cell(&mut self) -> Option<Cmd> {
        let position = self.focused_position()?;
        let outcome = self.grid.click_cell(position, self.navigator.as_ref())?;

        if matches!(outcome, crate::grid::ClickOutcome::Opened { .. })
            && let Some(column) = self.grid.table().schema().column(position.column)
        {
            super::record_link_telemetry(column.id());
        }
        self.status = Some(outcome.describe());
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.ensure_cursor_visible();
        None
    }

    /// Routes a key press, honouring the help overlay and open prompts.
    fn handle_key(&mut self, key: &bubbletea_rs::event::KeyMsg) -> Option<Cmd> {
        // Any key closes the help overlay without acting.
        if self.show_help {
            self.show_help = false;
            return None;
        }

        let mapped = map_key_to_message(key, self.input_mode)?;
        self.handle_message(&mapped)
    }
}

impl Model for ReviewGridApp {
    fn init() -> (Self, Option<Cmd>) {
        let options = super::get_grid_options();
        let mut model = Self::new(
            ReviewGrid::with_page_size(options.page_size),
            super::get_navigator(),
        )
        .with_delimiter(options.delimiter);

        if let Some(initial) = super::get_initial_load() {
            model.apply_rows(initial.path.as_str(), &initial.rows);
        }

        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_table());
        output.push_str(&self.render_prompt());
        output.push_str(&self.render_status_bar());
        output
    }
}
