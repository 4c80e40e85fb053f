//! Case outcome categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prevailing party of a decided case.
///
/// The dataset only ever records two outcomes, but labels outside that pair
/// are carried as [`Winner::Other`] so they show up as their own category in
/// groupings instead of disappearing.
///
/// Ordering is `State < Union < Other(..)`, with other labels ordered
/// alphabetically. Grouped outputs rely on this order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Winner {
    /// The regional entity (state) prevailed.
    State,
    /// The federal entity (union) prevailed.
    Union,
    /// Any other label found in the source, kept verbatim (trimmed).
    Other(String),
}

impl Winner {
    /// The two outcomes offered by the filter control.
    pub const KNOWN: [Winner; 2] = [Winner::State, Winner::Union];

    /// Parse a source label.
    ///
    /// Accepts the English labels and the Portuguese ones used by the court
    /// dataset, case-insensitively. Anything else becomes [`Winner::Other`].
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_uppercase().as_str() {
            "STATE" | "ESTADO" => Winner::State,
            "UNION" | "UNIÃO" | "UNIAO" => Winner::Union,
            _ => Winner::Other(trimmed.to_string()),
        }
    }

    /// Canonical label.
    pub fn as_str(&self) -> &str {
        match self {
            Winner::State => "STATE",
            Winner::Union => "UNION",
            Winner::Other(label) => label,
        }
    }

    /// Returns true for the two recognised outcomes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Winner::Other(_))
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Winner {
    fn from(value: String) -> Self {
        Winner::from_label(&value)
    }
}

impl From<&str> for Winner {
    fn from(value: &str) -> Self {
        Winner::from_label(value)
    }
}

impl From<Winner> for String {
    fn from(value: Winner) -> Self {
        match value {
            Winner::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}
