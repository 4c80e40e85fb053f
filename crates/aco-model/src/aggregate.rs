//! Tabular outputs of the aggregation pipeline.
//!
//! Each table is a plain, serializable projection of the filtered view. Which
//! aggregates zero-fill absent combinations and which omit them differs per
//! table and is documented on each type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::winner::Winner;

/// Number of cases filed by one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCount {
    pub party: String,
    pub count: usize,
}

/// Number of decisions reported by one rapporteur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RapporteurCount {
    pub rapporteur: String,
    pub count: usize,
}

/// Number of decisions won by one side, with its share of the view in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeCount {
    pub winner: Winner,
    pub count: usize,
    pub share: f64,
}

/// Percentage of a party's cases that ended with a given winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyOutcomeShare {
    pub party: String,
    pub winner: Winner,
    pub share: f64,
}

/// Count of decisions for one observed (year, winner) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOutcomeCount {
    pub year: i32,
    pub winner: Winner,
    pub count: usize,
}

/// Decisions over time, split by outcome.
///
/// Only observed (year, winner) pairs are present; absent pairs are omitted
/// rather than zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    pub rows: Vec<YearOutcomeCount>,
}

impl TimeSeries {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total decisions per year across outcomes, ordered by year.
    pub fn year_totals(&self) -> BTreeMap<i32, usize> {
        let mut totals = BTreeMap::new();
        for row in &self.rows {
            *totals.entry(row.year).or_insert(0) += row.count;
        }
        totals
    }

    /// Every integer year between the first and last observed year.
    ///
    /// Axis ticks are one year apart even where the data has gaps.
    pub fn axis_years(&self) -> Vec<i32> {
        let first = self.rows.iter().map(|row| row.year).min();
        let last = self.rows.iter().map(|row| row.year).max();
        match (first, last) {
            (Some(first), Some(last)) => (first..=last).collect(),
            _ => Vec::new(),
        }
    }
}

/// One rapporteur's row of the rapporteur × year grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTabRow {
    pub rapporteur: String,
    /// Counts aligned with [`CrossTab::years`].
    pub counts: Vec<usize>,
}

/// Dense rapporteur × year matrix of decision counts.
///
/// Rows and columns cover the rapporteurs and years present in the view.
/// Combinations that never occur are filled with 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTab {
    pub years: Vec<i32>,
    pub rows: Vec<CrossTabRow>,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value, or `None` when the rapporteur or year is not part of the grid.
    pub fn get(&self, rapporteur: &str, year: i32) -> Option<usize> {
        let column = self.years.iter().position(|y| *y == year)?;
        self.rows
            .iter()
            .find(|row| row.rapporteur == rapporteur)
            .and_then(|row| row.counts.get(column).copied())
    }

    /// Sum over all cells.
    pub fn total(&self) -> usize {
        self.rows.iter().flat_map(|row| row.counts.iter()).sum()
    }

    /// Largest cell value, used to scale heat-map shading.
    pub fn max_cell(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> TimeSeries {
        TimeSeries {
            rows: vec![
                YearOutcomeCount {
                    year: 2018,
                    winner: Winner::State,
                    count: 2,
                },
                YearOutcomeCount {
                    year: 2021,
                    winner: Winner::State,
                    count: 1,
                },
                YearOutcomeCount {
                    year: 2021,
                    winner: Winner::Union,
                    count: 3,
                },
            ],
        }
    }

    #[test]
    fn axis_covers_gaps_between_years() {
        assert_eq!(series().axis_years(), vec![2018, 2019, 2020, 2021]);
        assert!(TimeSeries::default().axis_years().is_empty());
    }

    #[test]
    fn year_totals_sum_outcomes() {
        let totals = series().year_totals();
        assert_eq!(totals.get(&2018), Some(&2));
        assert_eq!(totals.get(&2021), Some(&4));
        assert_eq!(totals.get(&2019), None);
    }

    #[test]
    fn cross_tab_lookup() {
        let grid = CrossTab {
            years: vec![2020, 2021],
            rows: vec![
                CrossTabRow {
                    rapporteur: "Min. A".to_string(),
                    counts: vec![2, 0],
                },
                CrossTabRow {
                    rapporteur: "Min. B".to_string(),
                    counts: vec![0, 5],
                },
            ],
        };
        assert_eq!(grid.get("Min. A", 2020), Some(2));
        assert_eq!(grid.get("Min. A", 2021), Some(0));
        assert_eq!(grid.get("Min. C", 2021), None);
        assert_eq!(grid.get("Min. B", 1999), None);
        assert_eq!(grid.total(), 7);
        assert_eq!(grid.max_cell(), 5);
    }
}
