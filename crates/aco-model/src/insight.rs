//! Short textual highlights derived from the aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown in place of an insight when the current selection has no rows.
pub const NO_DATA_MESSAGE: &str = "There is no data for the selected context.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Party with the most filed cases.
    TopLitigant { party: String, cases: usize },
    /// Year with the most decisions across outcomes.
    PeakYear { year: i32, decisions: usize },
    NoData,
}

impl Insight {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Insight::NoData)
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::TopLitigant { party, cases } => write!(
                f,
                "{party} leads with {cases} cases against the Union in the selected context."
            ),
            Insight::PeakYear { year, decisions } => write!(
                f,
                "{year} had the highest number of decisions, totalling {decisions} in the selected context."
            ),
            Insight::NoData => f.write_str(NO_DATA_MESSAGE),
        }
    }
}
