//! File loading for the review grid TUI.
//!
//! Files opened from the path prompt are read on the runtime; the result
//! comes back as [`AppMsg::FileLoaded`] or [`AppMsg::LoadFailed`]. Only one
//! load runs at a time: the path prompt stays closed until it finishes.

use std::any::Any;

use bubbletea_rs::Cmd;
use camino::Utf8Path;

use super::ReviewGridApp;
use crate::records::map_records;
use crate::source::read_rows_async;
use crate::tui::input::InputMode;
use crate::tui::messages::AppMsg;

impl ReviewGridApp {
    /// Dispatches path prompt and file loading messages to their handlers.
    pub(super) fn handle_loading_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartPathEntry => self.handle_start_path_entry(),
            AppMsg::PathInput(character) => {
                self.path_draft.push(*character);
                None
            }
            AppMsg::PathBackspace => {
                self.path_draft.pop();
                None
            }
            AppMsg::SubmitPath => self.handle_submit_path(),
            AppMsg::CancelPathEntry => {
                self.input_mode = InputMode::Normal;
                None
            }
            AppMsg::FileLoaded { path, rows } => {
                self.apply_rows(path, rows);
                None
            }
            AppMsg::LoadFailed(message) => self.handle_load_failed(message),
            _ => {
                debug_assert!(false, "non-loading message routed to handle_loading_msg");
                None
            }
        }
    }

    fn handle_start_path_entry(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        self.path_draft = self.source_path.clone().unwrap_or_default();
        self.input_mode = InputMode::EnteringPath;
        None
    }

    fn handle_submit_path(&mut self) -> Option<Cmd> {
        self.input_mode = InputMode::Normal;
        let path = self.path_draft.trim().to_owned();
        if path.is_empty() || self.loading {
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(Self::load_file_cmd(path, self.delimiter))
    }

    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_load_failed(&mut self, message: &str) -> Option<Cmd> {
        tracing::warn!("review file failed to load: {message}");
        self.loading = false;
        self.error = Some(message.to_owned());
        None
    }

    /// Maps raw rows and replaces the grid contents with them.
    ///
    /// Sort keys and filters carry over; the page, selection and focus go
    /// back to the start.
    pub(crate) fn apply_rows(&mut self, path: &str, rows: &[Vec<String>]) {
        let records = map_records(rows);
        tracing::debug!(
            path,
            source_rows = rows.len(),
            record_count = records.len(),
            "loaded review file"
        );
        crate::tui::record_load_telemetry(rows.len(), records.len());

        let count = records.len();
        self.grid.load(records);
        self.cursor.row = 0;
        self.scroll_offset = 0;
        self.loading = false;
        self.error = None;
        self.source_path = Some(path.to_owned());
        self.status = Some(format!("Loaded {count} reviews"));
    }

    /// Creates a command that reads `path` and reports the result.
    fn load_file_cmd(path: String, delimiter: u8) -> Cmd {
        Box::pin(async move {
            let result = read_rows_async(Utf8Path::new(&path), delimiter).await;
            let msg = match result {
                Ok(rows) => AppMsg::FileLoaded { path, rows },
                Err(error) => AppMsg::LoadFailed(error.to_string()),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}
