//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

/// Messages for the review grid TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move the focus up one row.
    CursorUp,
    /// Move the focus down one row.
    CursorDown,
    /// Move the focus one column left.
    CursorLeft,
    /// Move the focus one column right.
    CursorRight,
    /// Show the next page.
    NextPage,
    /// Show the previous page.
    PreviousPage,
    /// Show the first page.
    FirstPage,
    /// Show the last page.
    LastPage,
    /// Switch to the next larger page size.
    GrowPageSize,
    /// Switch to the next smaller page size.
    ShrinkPageSize,

    // Grid actions
    /// Rotate the sort of the focused column, replacing other sort keys.
    ToggleSort,
    /// Rotate the sort of the focused column, keeping other sort keys.
    AppendSort,
    /// Activate (click) the focused cell.
    ActivateCell,

    // Filter editing
    /// Start editing the focused column's filter.
    StartFilterEdit,
    /// Append a character to the filter being edited.
    FilterInput(char),
    /// Delete the last character of the filter being edited.
    FilterBackspace,
    /// Keep the edited filter.
    CommitFilter,
    /// Restore the filter as it was before editing.
    CancelFilterEdit,
    /// Remove the focused column's filter.
    ClearColumnFilter,
    /// Remove every filter.
    ClearAllFilters,

    // File loading
    /// Start typing a path to open.
    StartPathEntry,
    /// Append a character to the path being typed.
    PathInput(char),
    /// Delete the last character of the path being typed.
    PathBackspace,
    /// Load the typed path.
    SubmitPath,
    /// Abandon the path prompt.
    CancelPathEntry,
    /// A file finished reading.
    FileLoaded {
        /// Path the rows were read from.
        path: String,
        /// Raw parsed rows.
        rows: Vec<Vec<String>>,
    },
    /// Reading or parsing a file failed.
    LoadFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for focus and paging messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::CursorLeft
                | Self::CursorRight
                | Self::NextPage
                | Self::PreviousPage
                | Self::FirstPage
                | Self::LastPage
                | Self::GrowPageSize
                | Self::ShrinkPageSize
        )
    }

    /// Returns true for sort and activation messages.
    #[must_use]
    pub const fn is_grid_action(&self) -> bool {
        matches!(self, Self::ToggleSort | Self::AppendSort | Self::ActivateCell)
    }

    /// Returns true for filter editing messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::StartFilterEdit
                | Self::FilterInput(_)
                | Self::FilterBackspace
                | Self::CommitFilter
                | Self::CancelFilterEdit
                | Self::ClearColumnFilter
                | Self::ClearAllFilters
        )
    }

    /// Returns true for path prompt and file loading messages.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::StartPathEntry
                | Self::PathInput(_)
                | Self::PathBackspace
                | Self::SubmitPath
                | Self::CancelPathEntry
                | Self::FileLoaded { .. }
                | Self::LoadFailed(_)
        )
    }
}
