//! Property tests for the filter engine and aggregate invariants.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use proptest::prelude::*;

use aco_dashboard::{
    apply_filter, count_by_party, count_by_rapporteur, outcome_share, party_outcome_shares,
    rapporteur_year_matrix, time_series_by_outcome,
};
use aco_model::{CaseRecord, CaseTable, FilterSelection, Winner};

const PARTIES: [&str; 3] = ["SP", "RJ", "MG"];
const RAPPORTEURS: [&str; 3] = ["Min. A", "Min. B", "Min. C"];
const YEARS: [i32; 5] = [2015, 2016, 2017, 2018, 2019];

fn winner(index: usize) -> Winner {
    match index {
        0 => Winner::State,
        1 => Winner::Union,
        _ => Winner::Other("EMPATE".to_string()),
    }
}

fn arb_table() -> impl Strategy<Value = CaseTable> {
    prop::collection::vec((0..3usize, 0..3usize, 0..5usize, 0..3usize, 1..28u32), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (party, rapporteur, year, outcome, day))| CaseRecord {
                    id: format!("ACO {i}"),
                    filing_party: PARTIES[party].to_string(),
                    rapporteur: RAPPORTEURS[rapporteur].to_string(),
                    judgment_date: NaiveDate::from_ymd_opt(YEARS[year], 5, day).unwrap(),
                    winner: winner(outcome),
                    summary: String::new(),
                    url: String::new(),
                })
                .collect()
        },
    )
}

fn arb_selection() -> impl Strategy<Value = FilterSelection> {
    (
        prop::collection::vec(any::<bool>(), 3),
        prop::collection::vec(any::<bool>(), 3),
        prop::collection::vec(any::<bool>(), 5),
        prop::collection::vec(any::<bool>(), 3),
    )
        .prop_map(|(parties, rapporteurs, years, winners)| {
            FilterSelection::empty()
                .with_parties(pick(&PARTIES, &parties).into_iter().copied())
                .with_rapporteurs(pick(&RAPPORTEURS, &rapporteurs).into_iter().copied())
                .with_years(pick(&YEARS, &years).into_iter().copied())
                .with_winners(
                    winners
                        .iter()
                        .enumerate()
                        .filter(|(_, keep)| **keep)
                        .map(|(i, _)| winner(i)),
                )
        })
}

fn pick<'a, T>(values: &'a [T], mask: &[bool]) -> Vec<&'a T> {
    values
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(value, _)| value)
        .collect()
}

proptest! {
    #[test]
    fn filter_output_is_a_matching_subsequence(table in arb_table(), selection in arb_selection()) {
        let view = apply_filter(&table, &selection);
        prop_assert!(view.len() <= table.len());
        for record in view.iter() {
            prop_assert!(selection.parties.contains(&record.filing_party));
            prop_assert!(selection.rapporteurs.contains(&record.rapporteur));
            prop_assert!(selection.years.contains(&record.year()));
            prop_assert!(selection.winners.contains(&record.winner));
        }
        let expected: Vec<&CaseRecord> = table.iter().filter(|r| selection.matches(r)).collect();
        prop_assert_eq!(view.records(), expected.as_slice());
    }

    #[test]
    fn full_domain_is_identity(table in arb_table()) {
        let view = apply_filter(&table, &FilterSelection::full(&table.domains()));
        let all: Vec<&CaseRecord> = table.iter().collect();
        prop_assert_eq!(view.records(), all.as_slice());
    }

    #[test]
    fn empty_subset_on_any_dimension_empties_view(table in arb_table(), dimension in 0..4usize) {
        let full = FilterSelection::full(&table.domains());
        let selection = match dimension {
            0 => full.with_parties(Vec::<String>::new()),
            1 => full.with_rapporteurs(Vec::<String>::new()),
            2 => full.with_years(Vec::<i32>::new()),
            _ => full.with_winners(Vec::<Winner>::new()),
        };
        prop_assert!(apply_filter(&table, &selection).is_empty());
    }

    #[test]
    fn counts_sum_to_view_size(table in arb_table(), selection in arb_selection()) {
        let view = apply_filter(&table, &selection);
        let party_total: usize = count_by_party(&view).iter().map(|r| r.count).sum();
        let outcome_total: usize = outcome_share(&view).iter().map(|r| r.count).sum();
        let rapporteur_total: usize = count_by_rapporteur(&view).iter().map(|r| r.count).sum();
        let series_total: usize = time_series_by_outcome(&view).rows.iter().map(|r| r.count).sum();
        prop_assert_eq!(party_total, view.len());
        prop_assert_eq!(outcome_total, view.len());
        prop_assert_eq!(rapporteur_total, view.len());
        prop_assert_eq!(series_total, view.len());

        let counts: Vec<usize> = count_by_party(&view).iter().map(|r| r.count).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn party_shares_sum_to_one_hundred(table in arb_table(), selection in arb_selection()) {
        let view = apply_filter(&table, &selection);
        let mut sums: BTreeMap<String, f64> = BTreeMap::new();
        for row in party_outcome_shares(&view) {
            *sums.entry(row.party).or_insert(0.0) += row.share;
        }
        for sum in sums.values() {
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cross_tab_zero_cells_are_absent_pairs(table in arb_table(), selection in arb_selection()) {
        let view = apply_filter(&table, &selection);
        let grid = rapporteur_year_matrix(&view);
        prop_assert_eq!(grid.total(), view.len());

        let observed: BTreeSet<(String, i32)> = view
            .iter()
            .map(|r| (r.rapporteur.clone(), r.year()))
            .collect();
        for row in &grid.rows {
            for (year, count) in grid.years.iter().zip(&row.counts) {
                let present = observed.contains(&(row.rapporteur.clone(), *year));
                prop_assert_eq!(*count == 0, !present);
            }
        }
    }
}
