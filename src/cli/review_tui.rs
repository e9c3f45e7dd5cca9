//! TUI mode for browsing a review file.
//!
//! Resolves configuration into startup context, reads the startup file if
//! one is configured, then hands over to the bubbletea-rs program.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use reviewgrid::telemetry::StderrJsonlTelemetrySink;
use reviewgrid::tui::{
    GridOptions, InitialLoad, ReviewGridApp, set_grid_options, set_initial_load, set_navigator,
    set_telemetry_sink,
};
use reviewgrid::{LoadError, ReviewGridConfig, SystemBrowser, read_rows_async, review_schema};

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The column schema is invalid
/// - The delimiter or page size is invalid
/// - The startup file cannot be read or parsed
/// - The TUI fails to initialise
pub async fn run(config: &ReviewGridConfig) -> Result<(), LoadError> {
    review_schema().validate()?;
    let delimiter = config.delimiter_byte()?;
    let page_size = config.resolved_page_size()?;

    if let Some(path) = config.file_path() {
        let rows = read_rows_async(path, delimiter).await?;
        // If already set (e.g. re-running the TUI in the same process), the
        // existing data remains.
        let _ = set_initial_load(InitialLoad {
            path: path.to_owned(),
            rows,
        });
    }

    let _ = set_grid_options(GridOptions {
        page_size,
        delimiter,
    });
    let _ = set_navigator(Arc::new(SystemBrowser));
    if config.telemetry {
        let _ = set_telemetry_sink(Arc::new(StderrJsonlTelemetrySink));
    }

    run_tui().await.map_err(|error| LoadError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `ReviewGridApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewGridApp::init() reads the startup context from module storage.
    let program = Program::<ReviewGridApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
