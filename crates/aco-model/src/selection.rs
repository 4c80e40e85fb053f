//! Session-scoped filter selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::record::{CaseRecord, Domains};
use crate::winner::Winner;

/// The four filterable dimensions of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Party,
    Rapporteur,
    Year,
    Winner,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Party,
        Dimension::Rapporteur,
        Dimension::Year,
        Dimension::Winner,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Dimension::Party => "party",
            Dimension::Rapporteur => "rapporteur",
            Dimension::Year => "year",
            Dimension::Winner => "winner",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "party" | "parties" | "filing_party" => Ok(Dimension::Party),
            "rapporteur" | "rapporteurs" => Ok(Dimension::Rapporteur),
            "year" | "years" => Ok(Dimension::Year),
            "winner" | "winners" | "outcome" => Ok(Dimension::Winner),
            _ => Err(ModelError::UnknownDimension(s.to_string())),
        }
    }
}

/// Chosen subset of every filter dimension.
///
/// Membership is OR within a dimension and AND across dimensions. An empty
/// subset matches nothing; it is not treated as "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub parties: BTreeSet<String>,
    pub rapporteurs: BTreeSet<String>,
    pub years: BTreeSet<i32>,
    pub winners: BTreeSet<Winner>,
}

impl FilterSelection {
    /// Selection with every value of every dimension chosen.
    pub fn full(domains: &Domains) -> Self {
        Self {
            parties: domains.parties.iter().cloned().collect(),
            rapporteurs: domains.rapporteurs.iter().cloned().collect(),
            years: domains.years.iter().copied().collect(),
            winners: domains.winners.iter().cloned().collect(),
        }
    }

    /// Selection with nothing chosen on any dimension.
    pub fn empty() -> Self {
        Self {
            parties: BTreeSet::new(),
            rapporteurs: BTreeSet::new(),
            years: BTreeSet::new(),
            winners: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_parties<I, S>(mut self, parties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parties = parties.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rapporteurs<I, S>(mut self, rapporteurs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rapporteurs = rapporteurs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_years<I>(mut self, years: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        self.years = years.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_winners<I>(mut self, winners: I) -> Self
    where
        I: IntoIterator<Item = Winner>,
    {
        self.winners = winners.into_iter().collect();
        self
    }

    /// Returns true when the record's value on every dimension is selected.
    pub fn matches(&self, record: &CaseRecord) -> bool {
        self.parties.contains(&record.filing_party)
            && self.rapporteurs.contains(&record.rapporteur)
            && self.years.contains(&record.year())
            && self.winners.contains(&record.winner)
    }

    /// Number of selected values on a dimension.
    pub fn selected_count(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Party => self.parties.len(),
            Dimension::Rapporteur => self.rapporteurs.len(),
            Dimension::Year => self.years.len(),
            Dimension::Winner => self.winners.len(),
        }
    }

    /// Dimensions whose subset is empty. Any entry here forces an empty view.
    pub fn empty_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| self.selected_count(*dimension) == 0)
            .collect()
    }
}
