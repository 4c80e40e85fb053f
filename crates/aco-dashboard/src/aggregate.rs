//! Aggregations over the filtered view.
//!
//! Every function here is a pure projection of a [`FilteredView`]. Groupings
//! use explicit keys (`&str`, `&Winner`, `(i32, &Winner)`, `(&str, i32)`) in
//! ordered maps, so group order is deterministic before any sort is applied.
//! Sorts are stable: rows with equal values keep key order.
//!
//! Zero-fill policy differs per table. Only [`rapporteur_year_matrix`]
//! zero-fills absent combinations; every other aggregate omits them.

use std::collections::{BTreeMap, BTreeSet};

use aco_model::{
    CaseRecord, CrossTab, CrossTabRow, OutcomeCount, PartyCount, PartyOutcomeShare,
    RapporteurCount, TimeSeries, Winner, YearOutcomeCount,
};

use crate::filter::FilteredView;

fn count_by<'a, K, F>(view: &FilteredView<'a>, key: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&'a CaseRecord) -> K,
{
    let mut counts = BTreeMap::new();
    for record in view.iter() {
        *counts.entry(key(record)).or_insert(0) += 1;
    }
    counts
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Cases per filing party, ascending by count so the largest group is last.
///
/// Ties are ordered by party name.
pub fn count_by_party(view: &FilteredView<'_>) -> Vec<PartyCount> {
    let mut rows: Vec<PartyCount> = count_by(view, |r| r.filing_party.as_str())
        .into_iter()
        .map(|(party, count)| PartyCount {
            party: party.to_string(),
            count,
        })
        .collect();
    rows.sort_by_key(|row| row.count);
    rows
}

/// Decisions per outcome with their share of the view.
///
/// Ordered by count descending, ties in outcome order.
pub fn outcome_share(view: &FilteredView<'_>) -> Vec<OutcomeCount> {
    let total = view.len();
    let mut rows: Vec<OutcomeCount> = count_by(view, |r| &r.winner)
        .into_iter()
        .map(|(winner, count)| OutcomeCount {
            winner: winner.clone(),
            count,
            share: percentage(count, total),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Share of each outcome within each party's cases, ordered by party then
/// outcome. Percentages of one party sum to 100.
///
/// Only observed (party, outcome) pairs appear.
pub fn party_outcome_shares(view: &FilteredView<'_>) -> Vec<PartyOutcomeShare> {
    let totals = count_by(view, |r| r.filing_party.as_str());
    count_by(view, |r| (r.filing_party.as_str(), &r.winner))
        .into_iter()
        .map(|((party, winner), count)| PartyOutcomeShare {
            party: party.to_string(),
            winner: winner.clone(),
            share: percentage(count, totals.get(party).copied().unwrap_or(0)),
        })
        .collect()
}

/// Percentage of each party's cases won by the state, ascending.
///
/// Parties with no state win in the view are absent rather than listed at 0%.
/// Ties are ordered by party name.
pub fn win_rate_by_party(view: &FilteredView<'_>) -> Vec<PartyOutcomeShare> {
    let mut rows: Vec<PartyOutcomeShare> = party_outcome_shares(view)
        .into_iter()
        .filter(|row| row.winner == Winner::State)
        .collect();
    rows.sort_by(|a, b| a.share.total_cmp(&b.share));
    rows
}

/// Decisions per (year, outcome) pair, ordered by year then outcome.
pub fn time_series_by_outcome(view: &FilteredView<'_>) -> TimeSeries {
    let rows = count_by(view, |r| (r.year(), &r.winner))
        .into_iter()
        .map(|((year, winner), count)| YearOutcomeCount {
            year,
            winner: winner.clone(),
            count,
        })
        .collect();
    TimeSeries { rows }
}

/// Decisions per rapporteur, ascending by count, ties by name.
pub fn count_by_rapporteur(view: &FilteredView<'_>) -> Vec<RapporteurCount> {
    let mut rows: Vec<RapporteurCount> = count_by(view, |r| r.rapporteur.as_str())
        .into_iter()
        .map(|(rapporteur, count)| RapporteurCount {
            rapporteur: rapporteur.to_string(),
            count,
        })
        .collect();
    rows.sort_by_key(|row| row.count);
    rows
}

/// Rapporteur × year grid of decision counts.
///
/// Rows are rapporteurs by name, columns are years ascending. Pairs absent
/// from the view are 0.
pub fn rapporteur_year_matrix(view: &FilteredView<'_>) -> CrossTab {
    let counts = count_by(view, |r| (r.rapporteur.as_str(), r.year()));
    let years: Vec<i32> = counts
        .keys()
        .map(|(_, year)| *year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let rapporteurs: BTreeSet<&str> = counts.keys().map(|(rapporteur, _)| *rapporteur).collect();
    let rows = rapporteurs
        .into_iter()
        .map(|rapporteur| CrossTabRow {
            rapporteur: rapporteur.to_string(),
            counts: years
                .iter()
                .map(|year| counts.get(&(rapporteur, *year)).copied().unwrap_or(0))
                .collect(),
        })
        .collect();
    CrossTab { years, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aco_model::CaseTable;
    use chrono::NaiveDate;

    use crate::filter::apply_filter;

    fn case(party: &str, rapporteur: &str, year: i32, winner: Winner) -> CaseRecord {
        CaseRecord {
            id: format!("{party}-{year}"),
            filing_party: party.to_string(),
            rapporteur: rapporteur.to_string(),
            judgment_date: NaiveDate::from_ymd_opt(year, 6, 30).unwrap(),
            winner,
            summary: String::new(),
            url: String::new(),
        }
    }

    fn table() -> CaseTable {
        CaseTable::new(vec![
            case("SP", "Min. B", 2019, Winner::State),
            case("RJ", "Min. A", 2019, Winner::Union),
            case("SP", "Min. A", 2021, Winner::Union),
            case("MG", "Min. B", 2021, Winner::State),
            case("SP", "Min. B", 2021, Winner::State),
            case("RJ", "Min. A", 2021, Winner::Union),
        ])
    }

    #[test]
    fn party_counts_break_ties_by_name() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let rows = count_by_party(&view);
        let flat: Vec<(&str, usize)> = rows.iter().map(|r| (r.party.as_str(), r.count)).collect();
        assert_eq!(flat, vec![("MG", 1), ("RJ", 2), ("SP", 3)]);
    }

    #[test]
    fn outcome_share_sorted_by_count() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let rows = outcome_share(&view);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[0].winner, Winner::State);
        assert!((rows[0].share - 50.0).abs() < 1e-9);
    }

    #[test]
    fn win_rate_drops_parties_without_state_wins() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let rows = win_rate_by_party(&view);
        let parties: Vec<&str> = rows.iter().map(|r| r.party.as_str()).collect();
        assert_eq!(parties, vec!["SP", "MG"]);
        assert!((rows[0].share - 200.0 / 3.0).abs() < 1e-9);
        assert!((rows[1].share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn shares_sum_to_one_hundred_per_party() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let mut sums: BTreeMap<String, f64> = BTreeMap::new();
        for row in party_outcome_shares(&view) {
            *sums.entry(row.party).or_insert(0.0) += row.share;
        }
        for sum in sums.values() {
            assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn matrix_is_zero_filled() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let grid = rapporteur_year_matrix(&view);
        assert_eq!(grid.years, vec![2019, 2021]);
        assert_eq!(grid.rows[0].rapporteur, "Min. A");
        assert_eq!(grid.rows[0].counts, vec![1, 2]);
        assert_eq!(grid.rows[1].counts, vec![1, 2]);
        assert_eq!(grid.total(), view.len());
    }

    #[test]
    fn time_series_omits_absent_pairs() {
        let table = table();
        let view = apply_filter(&table, &aco_model::FilterSelection::full(&table.domains()));
        let series = time_series_by_outcome(&view);
        let flat: Vec<(i32, Winner, usize)> = series
            .rows
            .iter()
            .map(|r| (r.year, r.winner.clone(), r.count))
            .collect();
        assert_eq!(
            flat,
            vec![
                (2019, Winner::State, 1),
                (2019, Winner::Union, 1),
                (2021, Winner::State, 2),
                (2021, Winner::Union, 2),
            ]
        );
    }

    #[test]
    fn empty_view_gives_empty_tables() {
        let view = FilteredView::default();
        assert!(count_by_party(&view).is_empty());
        assert!(outcome_share(&view).is_empty());
        assert!(win_rate_by_party(&view).is_empty());
        assert!(time_series_by_outcome(&view).is_empty());
        assert!(count_by_rapporteur(&view).is_empty());
        assert!(rapporteur_year_matrix(&view).is_empty());
    }
}
