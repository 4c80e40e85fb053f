//! Error types for case file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading the case file.
///
/// Every variant is fatal: the loader never skips rows or returns a partial
/// table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Case file not found.
    #[error("case file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Failed to parse the delimited file with Polars.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Header contains a blank column name.
    #[error("empty column name in header of {path}")]
    EmptyColumnName { path: PathBuf },

    /// A required column is absent, usually because the delimiter is wrong.
    #[error("required column '{column}' not found in {path} (found: {found})")]
    MissingColumn {
        column: String,
        path: PathBuf,
        found: String,
    },

    /// Judgment date does not match the configured format.
    #[error("invalid judgment date '{value}' on line {line} of {path} (expected format {format})")]
    InvalidDate {
        value: String,
        line: usize,
        format: String,
        path: PathBuf,
    },

    /// Outcome label outside the known pair while strict outcomes are enabled.
    #[error("unknown outcome '{value}' on line {line} of {path}")]
    UnknownOutcome {
        value: String,
        line: usize,
        path: PathBuf,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/acos.csv"),
        };
        assert_eq!(err.to_string(), "case file not found: /data/acos.csv");

        let err = IngestError::InvalidDate {
            value: "31/02/2020".to_string(),
            line: 4,
            format: "%Y-%m-%d".to_string(),
            path: PathBuf::from("acos.csv"),
        };
        assert_eq!(
            err.to_string(),
            "invalid judgment date '31/02/2020' on line 4 of acos.csv (expected format %Y-%m-%d)"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Relator".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
