//! Memoized export encoding keyed by content digest.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use aco_model::CaseDetail;

use crate::error::Result;
use crate::export::{EXPORT_FILE_NAME, ExportArtifact, ExportHeader, encode_export, export_digest};

/// Caches encoded exports so an unchanged filtered view is never re-encoded.
///
/// Entries are keyed by the SHA-256 of the projected rows, so two
/// selections that yield the same rows share one entry.
#[derive(Debug, Clone, Default)]
pub struct ExportCache {
    header: ExportHeader,
    entries: HashMap<String, Arc<[u8]>>,
    hits: usize,
    misses: usize,
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, header: ExportHeader) -> Self {
        self.header = header;
        self.entries.clear();
        self
    }

    pub fn header(&self) -> &ExportHeader {
        &self.header
    }

    /// Returns the artifact for `rows`, encoding only on a cache miss.
    pub fn artifact(&mut self, rows: &[CaseDetail]) -> Result<ExportArtifact> {
        let digest = export_digest(&self.header, rows);
        if let Some(bytes) = self.entries.get(&digest) {
            self.hits += 1;
            debug!(digest = %digest, "export cache hit");
            return Ok(ExportArtifact {
                file_name: EXPORT_FILE_NAME,
                bytes: Arc::clone(bytes),
                digest,
                rows: rows.len(),
            });
        }

        self.misses += 1;
        let bytes: Arc<[u8]> = encode_export(&self.header, rows)?.into();
        debug!(digest = %digest, rows = rows.len(), bytes = bytes.len(), "export encoded");
        self.entries.insert(digest.clone(), Arc::clone(&bytes));
        Ok(ExportArtifact {
            file_name: EXPORT_FILE_NAME,
            bytes,
            digest,
            rows: rows.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
