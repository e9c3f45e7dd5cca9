//! Rendering logic for the review grid TUI application.
//!
//! These are pure query methods that read state without modification.

use super::ReviewGridApp;
use crate::tui::components::text_truncate::truncate_to_height;
use crate::tui::components::{GridTableComponent, GridTableViewContext};
use crate::tui::input::InputMode;

impl ReviewGridApp {
    /// Renders the title line.
    pub(super) fn render_header(&self) -> String {
        let source = self.source_path.as_deref().unwrap_or("no file loaded");
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        format!("Review Grid - {source}{loading_indicator}\n")
    }

    /// Renders the visible part of the current page.
    pub(super) fn render_table(&self) -> String {
        let page_rows = self.grid.page_rows();
        let empty_message = if self.grid.is_loaded() {
            "No reviews match the current filters."
        } else {
            "No reviews loaded. Press o to open a file."
        };
        let ctx = GridTableViewContext {
            table: self.grid.table(),
            rows: self.grid.records(),
            page_rows: &page_rows,
            focus: self.focused_position(),
            scroll_offset: self.scroll_offset,
            visible_height: self.visible_height(),
            column_offset: self.column_offset,
            max_width: usize::from(self.width),
            empty_message,
        };
        GridTableComponent::view(&ctx)
    }

    /// Renders the open prompt, or an empty line when none is open.
    pub(super) fn render_prompt(&self) -> String {
        match self.input_mode {
            InputMode::Normal => "\n".to_owned(),
            InputMode::EditingFilter => format!(
                "Filter {}: {}_\n",
                self.filter_column_header(),
                self.filter_draft()
            ),
            InputMode::EnteringPath => format!("Open file: {}_\n", self.path_draft()),
        }
    }

    /// Renders the status bar with paging details and the last outcome.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        let pagination = self.grid.table().pagination();
        let visible = self.grid.visible_records().len();
        let total = self.grid.records().len();
        let mut line = format!(
            "Page {}/{}  {visible}/{total} reviews  {} per page",
            pagination.page().saturating_add(1),
            self.grid.page_count(),
            pagination.page_size(),
        );
        match &self.status {
            Some(status) => {
                line.push_str("  ");
                line.push_str(status);
            }
            None => line.push_str("  ?:help  q:quit"),
        }
        line.push('\n');
        line
    }

    /// Renders the help overlay, cut to the terminal height.
    pub(super) fn render_help_overlay(&self) -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j/k, Down/Up       Move between rows
  h/l, Left/Right    Move between columns
  n, PgDn            Next page
  p, PgUp            Previous page
  g, Home            First page
  G, End             Last page
  +/-                Larger/smaller page size

Grid:
  s                  Sort by column (asc, desc, off)
  S                  Add column to the sort
  Enter              Open the focused cell if it is a link

Filtering:
  /                  Filter the focused column (exact match)
  x                  Clear the focused column's filter
  Esc                Clear all filters

Other:
  o                  Open a review file
  ?                  Toggle this help
  q                  Quit

Press any key to close this help.
";
        let mut output = help_text.to_owned();
        truncate_to_height(&mut output, usize::from(self.height));
        output
    }
}
