//! CSV export of the filtered view.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use aco_model::CaseDetail;

use crate::error::{ExportError, Result};

/// File name offered for the export download.
pub const EXPORT_FILE_NAME: &str = "dados_filtrados.csv";

/// Format of the judgment date column in the export.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Header labels of the exported columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportHeader {
    pub id: String,
    pub judgment_date: String,
    pub url: String,
    pub summary: String,
}

impl Default for ExportHeader {
    fn default() -> Self {
        Self {
            id: "Numero_ACO".to_string(),
            judgment_date: "Data de julgamento".to_string(),
            url: "URL".to_string(),
            summary: "Resumo".to_string(),
        }
    }
}

impl ExportHeader {
    fn labels(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.judgment_date.as_str(),
            self.url.as_str(),
            self.summary.as_str(),
        ]
    }
}

/// Encoded export, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub bytes: Arc<[u8]>,
    /// Hex SHA-256 of the projected rows the bytes were encoded from.
    pub digest: String,
    /// Data rows, header excluded.
    pub rows: usize,
}

/// Encodes detail rows as UTF-8 CSV with a header row and no index column.
pub fn encode_export(header: &ExportHeader, rows: &[CaseDetail]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(header.labels())?;
    for row in rows {
        let date = row.judgment_date.format(EXPORT_DATE_FORMAT).to_string();
        writer.write_record([
            row.id.as_str(),
            date.as_str(),
            row.url.as_str(),
            row.summary.as_str(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

/// Hex SHA-256 of the projected export content: header labels and every row.
///
/// Fields are length-prefixed so different splits of the same text never
/// collide.
pub fn export_digest(header: &ExportHeader, rows: &[CaseDetail]) -> String {
    let mut hasher = Sha256::new();
    let mut feed = |field: &str| {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    };
    for label in header.labels() {
        feed(label);
    }
    for row in rows {
        let date = row.judgment_date.format(EXPORT_DATE_FORMAT).to_string();
        feed(&row.id);
        feed(&date);
        feed(&row.url);
        feed(&row.summary);
    }
    hex::encode(hasher.finalize())
}

/// Writes the artifact under `dir` with its fixed file name.
pub fn write_export(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(artifact.file_name);
    fs::write(&path, &artifact.bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = artifact.bytes.len(), "export written");
    Ok(path)
}
