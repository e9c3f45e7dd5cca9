//! Application configuration loaded from CLI, environment, and files.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewgrid.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWGRID_FILE`, `REVIEWGRID_DELIMITER`,
//!    `REVIEWGRID_PAGE_SIZE`, `REVIEWGRID_TELEMETRY`
//! 4. **Command-line arguments** – `--file`/`-f`, `--delimiter`/`-d`,
//!    `--page-size`/`-p`, `--telemetry`
//!
//! # Configuration File
//!
//! ```toml
//! file = "reviews.csv"
//! delimiter = ";"
//! page_size = 25
//! telemetry = true
//! ```

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::grid::DEFAULT_PAGE_SIZE;
use crate::source::DEFAULT_DELIMITER;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewgrid::ReviewGridConfig;
///
/// let config = ReviewGridConfig::load().expect("failed to load configuration");
/// let page_size = config.resolved_page_size().expect("page size must be positive");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWGRID",
    discovery(
        dotfile_name = ".reviewgrid.toml",
        config_file_name = "reviewgrid.toml",
        app_name = "reviewgrid"
    )
)]
pub struct ReviewGridConfig {
    /// Review file to load at startup.
    ///
    /// Can be provided via:
    /// - CLI: `--file <PATH>` or `-f <PATH>`
    /// - Environment: `REVIEWGRID_FILE`
    /// - Config file: `file = "..."`
    #[ortho_config(cli_short = 'f')]
    pub file: Option<String>,

    /// Field delimiter; a single ASCII character, `\t` meaning tab.
    #[ortho_config(cli_short = 'd')]
    pub delimiter: Option<String>,

    /// Rows shown per page when the grid opens.
    #[ortho_config(cli_short = 'p')]
    pub page_size: Option<usize>,

    /// Writes telemetry events to stderr as JSON lines.
    pub telemetry: bool,
}

impl ReviewGridConfig {
    /// Returns the startup file, if one is configured.
    #[must_use]
    pub fn file_path(&self) -> Option<&Utf8Path> {
        self.file.as_deref().map(Utf8Path::new)
    }

    /// Returns the delimiter as a byte, defaulting to a comma.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Configuration`] unless the delimiter is exactly
    /// one ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8, LoadError> {
        let Some(raw) = self.delimiter.as_deref() else {
            return Ok(DEFAULT_DELIMITER);
        };
        if raw == "\\t" {
            return Ok(b'\t');
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(delimiter), None) if delimiter.is_ascii() => u8::try_from(delimiter)
                .map_err(|error| LoadError::Configuration {
                    message: error.to_string(),
                }),
            _ => Err(LoadError::Configuration {
                message: format!(
                    "delimiter must be a single ASCII character (use --delimiter or -d), got {raw:?}"
                ),
            }),
        }
    }

    /// Returns the configured page size or the default.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Configuration`] when the page size is zero.
    pub fn resolved_page_size(&self) -> Result<usize, LoadError> {
        match self.page_size {
            None => Ok(DEFAULT_PAGE_SIZE),
            Some(0) => Err(LoadError::Configuration {
                message: "page size must be at least 1 (use --page-size or -p)".to_owned(),
            }),
            Some(size) => Ok(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use ortho_config::MergeComposer;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::ReviewGridConfig;
    use crate::error::LoadError;

    /// Applies a configuration layer to the composer based on the layer type.
    fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
        match layer_type {
            "defaults" => composer.push_defaults(value),
            "file" => composer.push_file(value, None),
            "environment" => composer.push_environment(value),
            "cli" => composer.push_cli(value),
            _ => panic!("unknown layer type: {layer_type}"),
        }
    }

    #[rstest]
    #[case::file_overrides_defaults(
        vec![("defaults", json!({"file": "default.csv"})), ("file", json!({"file": "file.csv"}))],
        "file.csv",
        "file should override default"
    )]
    #[case::environment_overrides_file(
        vec![("file", json!({"file": "file.csv"})), ("environment", json!({"file": "env.csv"}))],
        "env.csv",
        "environment should override file"
    )]
    #[case::cli_overrides_environment(
        vec![("environment", json!({"file": "env.csv"})), ("cli", json!({"file": "cli.csv"}))],
        "cli.csv",
        "CLI should override environment"
    )]
    fn test_layer_precedence(
        #[case] layers: Vec<(&str, Value)>,
        #[case] expected: &str,
        #[case] message: &str,
    ) {
        let mut composer = MergeComposer::new();

        for (layer_type, value) in layers {
            apply_layer(&mut composer, layer_type, value);
        }

        let config =
            ReviewGridConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.file.as_deref(), Some(expected), "{message}");
    }

    #[rstest]
    fn partial_overrides_preserve_lower_values() {
        let mut composer = MergeComposer::new();
        composer.push_defaults(json!({"file": "reviews.csv", "page_size": 10}));
        composer.push_file(json!({"delimiter": ";"}), None);
        composer.push_cli(json!({"page_size": 50}));

        let config =
            ReviewGridConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

        assert_eq!(config.file.as_deref(), Some("reviews.csv"));
        assert_eq!(config.delimiter.as_deref(), Some(";"));
        assert_eq!(config.page_size, Some(50), "CLI should override page_size");
        assert!(!config.telemetry, "telemetry stays off unless enabled");
    }

    #[rstest]
    fn defaults_resolve_to_comma_and_twenty_rows() {
        let config = ReviewGridConfig::default();

        assert_eq!(config.file_path(), None);
        assert_eq!(config.delimiter_byte(), Ok(b','));
        assert_eq!(config.resolved_page_size(), Ok(20));
    }

    #[rstest]
    #[case::semicolon(";", b';')]
    #[case::pipe("|", b'|')]
    #[case::tab_escape("\\t", b'\t')]
    #[case::tab_literal("\t", b'\t')]
    fn accepts_single_ascii_delimiters(#[case] raw: &str, #[case] expected: u8) {
        let config = ReviewGridConfig {
            delimiter: Some(raw.to_owned()),
            ..Default::default()
        };

        assert_eq!(config.delimiter_byte(), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::two_chars(",;")]
    #[case::non_ascii("§")]
    fn rejects_invalid_delimiters(#[case] raw: &str) {
        let config = ReviewGridConfig {
            delimiter: Some(raw.to_owned()),
            ..Default::default()
        };

        assert!(matches!(
            config.delimiter_byte(),
            Err(LoadError::Configuration { .. })
        ));
    }

    #[rstest]
    fn zero_page_size_is_rejected() {
        let config = ReviewGridConfig {
            page_size: Some(0),
            ..Default::default()
        };

        assert!(config.resolved_page_size().is_err());
    }

    #[rstest]
    fn file_path_wraps_configured_file() {
        let config = ReviewGridConfig {
            file: Some("data/reviews.csv".to_owned()),
            ..Default::default()
        };

        assert_eq!(
            config.file_path().map(camino::Utf8Path::as_str),
            Some("data/reviews.csv")
        );
    }
}
