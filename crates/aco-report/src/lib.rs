//! CSV export of the filtered case view.
//!
//! The export carries the detail columns (id, judgment date, URL, summary)
//! of every record in the view, in view order. [`ExportCache`] memoizes the
//! encoded bytes per distinct row set.

pub mod cache;
pub mod error;
pub mod export;

pub use cache::ExportCache;
pub use error::{ExportError, Result};
pub use export::{
    EXPORT_DATE_FORMAT, EXPORT_FILE_NAME, ExportArtifact, ExportHeader, encode_export,
    export_digest, write_export,
};
