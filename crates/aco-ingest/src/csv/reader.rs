//! Delimited file reading into a string-typed Polars DataFrame.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

/// Fails with [`IngestError::FileNotFound`] when the path does not exist.
pub fn check_file_exists(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

/// Reads the case file with every column kept as a string.
///
/// Schema inference is disabled so identifiers and dates are never coerced
/// by Polars; typing happens in [`crate::parse_case_frame`]. Header names are
/// trimmed and stripped of a UTF-8 BOM.
pub fn read_case_frame(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    check_file_exists(path)?;

    let separator = options.separator;
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|parse| parse.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let cleaned: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_header(name.as_str()))
        .collect();
    if cleaned.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    df.set_column_names(cleaned)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "case file read"
    );
    Ok(df)
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}
