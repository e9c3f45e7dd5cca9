//! Startup context storage for the review grid TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and app
//! handlers.

use std::sync::{Arc, OnceLock};

use camino::Utf8PathBuf;
use crossterm::terminal;

use crate::grid::DEFAULT_PAGE_SIZE;
use crate::navigation::{Navigator, SystemBrowser};
use crate::source::DEFAULT_DELIMITER;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Rows read before the TUI starts.
static INITIAL_LOAD: OnceLock<InitialLoad> = OnceLock::new();

/// Grid options resolved from configuration.
static GRID_OPTIONS: OnceLock<GridOptions> = OnceLock::new();

/// Browser hand-off used for link cells.
static NAVIGATOR: OnceLock<Arc<dyn Navigator>> = OnceLock::new();

/// Fallback navigator when none has been configured.
static DEFAULT_NAVIGATOR: OnceLock<Arc<dyn Navigator>> = OnceLock::new();

/// Telemetry sink for load and link events.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// A file read before the program started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialLoad {
    /// Path the rows were read from.
    pub path: Utf8PathBuf,
    /// Raw parsed rows, header and trailing artifact included.
    pub rows: Vec<Vec<String>>,
}

/// Options shaping the grid at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Rows per page.
    pub page_size: usize,
    /// Delimiter used for files opened from inside the TUI.
    pub delimiter: u8,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Sets the rows to show when the TUI starts.
///
/// # Returns
///
/// `true` if the load was set, `false` if it was already set.
pub fn set_initial_load(load: InitialLoad) -> bool {
    INITIAL_LOAD.set(load).is_ok()
}

/// Sets the grid options.
///
/// # Returns
///
/// `true` if the options were set, `false` if they were already set.
pub fn set_grid_options(options: GridOptions) -> bool {
    GRID_OPTIONS.set(options).is_ok()
}

/// Sets the navigator used when a link cell is activated.
///
/// Without this, the system browser is used.
///
/// # Returns
///
/// `true` if the navigator was set, `false` if it was already set.
pub fn set_navigator(navigator: Arc<dyn Navigator>) -> bool {
    NAVIGATOR.set(navigator).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial load from storage.
///
/// `OnceLock` cannot hand out its value, so the rows are cloned.
pub(crate) fn get_initial_load() -> Option<InitialLoad> {
    INITIAL_LOAD.get().cloned()
}

/// Gets the grid options, or the defaults when none were set.
pub(crate) fn get_grid_options() -> GridOptions {
    GRID_OPTIONS.get().copied().unwrap_or_default()
}

/// Gets the configured navigator, falling back to the system browser.
pub(crate) fn get_navigator() -> Arc<dyn Navigator> {
    NAVIGATOR.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_NAVIGATOR.get_or_init(|| Arc::new(SystemBrowser)))
    })
}

/// Queries the terminal for the dimensions of the first frame.
///
/// Falls back to 80x24 when the size is unknown or zero.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    terminal::size()
        .ok()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Records that a file was loaded into the grid.
pub(crate) fn record_load_telemetry(source_rows: usize, record_count: usize) {
    get_telemetry_sink().record(TelemetryEvent::ReviewsLoaded {
        source_rows,
        record_count,
    });
}

/// Records that a link cell was handed to the browser.
pub(crate) fn record_link_telemetry(column: &str) {
    get_telemetry_sink().record(TelemetryEvent::LinkOpened {
        column: column.to_owned(),
    });
}
