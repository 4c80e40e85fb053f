//! Case records and the immutable loaded dataset.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::selection::Dimension;
use crate::winner::Winner;

/// One decided case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Case identifier (opaque).
    pub id: String,
    /// Party that filed the case.
    pub filing_party: String,
    /// Judge assigned to report the case.
    pub rapporteur: String,
    /// Date of judgment.
    pub judgment_date: NaiveDate,
    /// Prevailing party.
    pub winner: Winner,
    /// Free-text summary, display only.
    pub summary: String,
    /// Link to the decision, display only.
    pub url: String,
}

impl CaseRecord {
    /// Calendar year of the judgment.
    ///
    /// Always derived from `judgment_date`, so the two can never disagree.
    pub fn year(&self) -> i32 {
        self.judgment_date.year()
    }
}

/// Row of the detail table and of the export: the display columns of a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetail {
    pub id: String,
    pub judgment_date: NaiveDate,
    pub url: String,
    pub summary: String,
}

impl From<&CaseRecord> for CaseDetail {
    fn from(record: &CaseRecord) -> Self {
        Self {
            id: record.id.clone(),
            judgment_date: record.judgment_date,
            url: record.url.clone(),
            summary: record.summary.clone(),
        }
    }
}

/// The full, read-only record set loaded at startup.
///
/// Records keep their original file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseTable {
    records: Vec<CaseRecord>,
}

impl CaseTable {
    pub fn new(records: Vec<CaseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collects the distinct values of every filter dimension.
    ///
    /// Parties and rapporteurs keep first-appearance order, years are sorted.
    /// Winners always start with the two known outcomes, followed by any other
    /// label observed in the data in first-appearance order.
    pub fn domains(&self) -> Domains {
        let mut domains = Domains {
            parties: Vec::new(),
            rapporteurs: Vec::new(),
            years: Vec::new(),
            winners: Winner::KNOWN.to_vec(),
        };
        let mut seen_parties = BTreeSet::new();
        let mut seen_rapporteurs = BTreeSet::new();
        let mut years = BTreeSet::new();
        for record in &self.records {
            if seen_parties.insert(record.filing_party.as_str()) {
                domains.parties.push(record.filing_party.clone());
            }
            if seen_rapporteurs.insert(record.rapporteur.as_str()) {
                domains.rapporteurs.push(record.rapporteur.clone());
            }
            years.insert(record.year());
            if !domains.winners.contains(&record.winner) {
                domains.winners.push(record.winner.clone());
            }
        }
        domains.years = years.into_iter().collect();
        domains
    }
}

impl<'a> IntoIterator for &'a CaseTable {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CaseRecord> for CaseTable {
    fn from_iter<I: IntoIterator<Item = CaseRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Distinct values available to each filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domains {
    pub parties: Vec<String>,
    pub rapporteurs: Vec<String>,
    pub years: Vec<i32>,
    pub winners: Vec<Winner>,
}

impl Domains {
    /// Values of one dimension as display labels, in domain order.
    pub fn labels(&self, dimension: Dimension) -> Vec<String> {
        match dimension {
            Dimension::Party => self.parties.clone(),
            Dimension::Rapporteur => self.rapporteurs.clone(),
            Dimension::Year => self.years.iter().map(ToString::to_string).collect(),
            Dimension::Winner => self.winners.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(party: &str, rapporteur: &str, year: i32, winner: Winner) -> CaseRecord {
        CaseRecord {
            id: format!("{party}-{year}"),
            filing_party: party.to_string(),
            rapporteur: rapporteur.to_string(),
            judgment_date: NaiveDate::from_ymd_opt(year, 3, 15).unwrap(),
            winner,
            summary: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn year_is_derived_from_judgment_date() {
        let case = record("SP", "Min. A", 2019, Winner::State);
        assert_eq!(case.year(), 2019);
    }

    #[test]
    fn domains_keep_first_appearance_order() {
        let table = CaseTable::new(vec![
            record("RJ", "Min. B", 2021, Winner::Union),
            record("SP", "Min. A", 2019, Winner::State),
            record("RJ", "Min. A", 2020, Winner::Other("PARCIAL".to_string())),
        ]);
        let domains = table.domains();
        assert_eq!(domains.parties, vec!["RJ", "SP"]);
        assert_eq!(domains.rapporteurs, vec!["Min. B", "Min. A"]);
        assert_eq!(domains.years, vec![2019, 2020, 2021]);
        assert_eq!(
            domains.winners,
            vec![
                Winner::State,
                Winner::Union,
                Winner::Other("PARCIAL".to_string())
            ]
        );
    }

    #[test]
    fn empty_table_still_offers_known_outcomes() {
        let domains = CaseTable::default().domains();
        assert!(domains.parties.is_empty());
        assert!(domains.years.is_empty());
        assert_eq!(domains.winners, Winner::KNOWN.to_vec());
    }

    #[test]
    fn labels_follow_named_dimension() {
        let table = CaseTable::new(vec![
            record("SP", "Min. A", 2021, Winner::Union),
            record("RJ", "Min. B", 2019, Winner::State),
        ]);
        let domains = table.domains();
        let dimension: Dimension = "years".parse().unwrap();
        assert_eq!(domains.labels(dimension), vec!["2019", "2021"]);
        assert_eq!(domains.labels(Dimension::Winner), vec!["STATE", "UNION"]);
        assert_eq!(domains.labels(Dimension::Party), vec!["SP", "RJ"]);
        assert!("judge".parse::<Dimension>().is_err());
    }
}
