//! Delimited review files to raw rows.
//!
//! Rows come back exactly as the file holds them: the header stays in
//! place, fields are not trimmed and short rows are not padded. When the
//! text ends with a line terminator an extra row holding one empty field is
//! appended, the trailing artifact that [`crate::records::map_records`]
//! expects to drop. Blank lines produce no rows and do not add further
//! artifacts.

use camino::Utf8Path;

use crate::error::LoadError;

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Parses delimited text into rows of fields.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] when the text is not valid UTF-8 or the
/// quoting is malformed.
pub fn parse_rows(input: &[u8], delimiter: u8) -> Result<Vec<Vec<String>>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|error| LoadError::Parse {
            message: error.to_string(),
        })?;
        rows.push(record.iter().map(ToOwned::to_owned).collect());
    }

    if ends_with_line_terminator(input) {
        rows.push(vec![String::new()]);
    }

    Ok(rows)
}

/// Reads and parses a review file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Parse`] when its contents cannot be parsed.
pub fn read_rows(path: &Utf8Path, delimiter: u8) -> Result<Vec<Vec<String>>, LoadError> {
    let bytes = std::fs::read(path).map_err(|error| io_error(path, &error))?;
    parse_rows(&bytes, delimiter)
}

/// Reads and parses a review file without blocking the runtime.
///
/// # Errors
///
/// Same as [`read_rows`].
pub async fn read_rows_async(
    path: &Utf8Path,
    delimiter: u8,
) -> Result<Vec<Vec<String>>, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|error| io_error(path, &error))?;
    parse_rows(&bytes, delimiter)
}

fn io_error(path: &Utf8Path, error: &std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.to_string(),
        message: error.to_string(),
    }
}

fn ends_with_line_terminator(input: &[u8]) -> bool {
    matches!(input.last(), Some(b'\n' | b'\r'))
}
