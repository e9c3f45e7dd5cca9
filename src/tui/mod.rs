//! Terminal user interface for browsing product reviews.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: Application state in [`app::ReviewGridApp`]
//! - **View**: The grid table component plus header, prompt and status bar
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, startup data lives in module-level storage. Call
//! [`set_initial_load`], [`set_grid_options`] and friends before starting the
//! program, and `ReviewGridApp::init()` picks them up.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
mod storage;

pub use app::ReviewGridApp;
pub use storage::{
    GridOptions, InitialLoad, set_grid_options, set_initial_load, set_navigator,
    set_telemetry_sink,
};
pub(crate) use storage::{
    get_grid_options, get_initial_load, get_initial_terminal_size, get_navigator,
    record_link_telemetry, record_load_telemetry,
};
