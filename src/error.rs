//! Error types surfaced while configuring the grid and loading review files.

use thiserror::Error;

use crate::grid::SchemaError;

/// Errors raised outside the grid's own graceful-degradation paths.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// Reading the review file failed.
    #[error("could not read {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The file is not valid delimited text.
    #[error("could not parse review file: {message}")]
    Parse {
        /// Parser error detail, including the position when known.
        message: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The column schema failed validation.
    #[error("invalid column schema: {0}")]
    Schema(#[from] SchemaError),

    /// The terminal UI could not start or crashed.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },
}
