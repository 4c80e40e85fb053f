//! ACO case file ingestion.
//!
//! Reads the pipe-delimited extract of original civil actions into an
//! immutable [`CaseTable`]. Loading is all-or-nothing: a missing file, a
//! header that does not match the configured [`ColumnSchema`], or a single
//! unparseable judgment date fails the whole load.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use aco_ingest::{LoadOptions, read_case_table};
//!
//! let table = read_case_table(Path::new("ACOs_selecionadas.csv"), &LoadOptions::default())?;
//! println!("{} cases", table.len());
//! ```

mod csv;
mod error;
mod options;
mod records;

use std::path::Path;
use std::time::Instant;

use aco_model::CaseTable;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use csv::{check_file_exists, read_case_frame};
pub use records::{parse_case_frame, parse_judgment_date};

// === Configuration ===
pub use options::{ColumnSchema, DEFAULT_DATE_FORMAT, DEFAULT_SEPARATOR, LoadOptions};

/// Reads and parses the case file in one step.
pub fn read_case_table(path: &Path, options: &LoadOptions) -> Result<CaseTable> {
    let start = Instant::now();
    let df = read_case_frame(path, options)?;
    let table = parse_case_frame(&df, options, path)?;
    if table.is_empty() {
        tracing::warn!(path = %path.display(), "case file has a header but no rows");
    }
    tracing::info!(
        path = %path.display(),
        record_count = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "case file loaded"
    );
    Ok(table)
}
