//! Data model for the ACO dashboard.
//!
//! The types here describe the loaded dataset ([`CaseTable`]), the
//! session-scoped [`FilterSelection`], and the plain tabular structures
//! produced by the aggregation pipeline. Everything is serializable so a
//! presentation layer can consume it without business logic.

pub mod aggregate;
pub mod error;
pub mod insight;
pub mod record;
pub mod selection;
pub mod winner;

pub use aggregate::{
    CrossTab, CrossTabRow, OutcomeCount, PartyCount, PartyOutcomeShare, RapporteurCount,
    TimeSeries, YearOutcomeCount,
};
pub use error::{ModelError, Result};
pub use insight::{Insight, NO_DATA_MESSAGE};
pub use record::{CaseDetail, CaseRecord, CaseTable, Domains};
pub use selection::{Dimension, FilterSelection};
pub use winner::Winner;
