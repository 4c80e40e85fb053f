//! One full pass of the pipeline for a given selection.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use aco_model::{
    CaseDetail, CaseTable, CrossTab, Dimension, FilterSelection, Insight, OutcomeCount, PartyCount,
    PartyOutcomeShare, RapporteurCount, TimeSeries,
};

use crate::aggregate::{
    count_by_party, count_by_rapporteur, outcome_share, rapporteur_year_matrix,
    time_series_by_outcome, win_rate_by_party,
};
use crate::filter::apply_filter;
use crate::insight::{peak_year, top_litigant};

/// Everything the presentation layer displays for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub total_records: usize,
    pub filtered_records: usize,
    pub cases_by_party: Vec<PartyCount>,
    pub outcome_share: Vec<OutcomeCount>,
    pub state_win_rate: Vec<PartyOutcomeShare>,
    pub decisions_over_time: TimeSeries,
    pub decisions_by_rapporteur: Vec<RapporteurCount>,
    pub rapporteur_year: CrossTab,
    pub top_litigant: Insight,
    pub peak_year: Insight,
    /// Detail rows of the filtered view, in file order.
    pub details: Vec<CaseDetail>,
}

/// Filters the table and derives every aggregate and insight.
///
/// Pure function of its inputs: the same table and selection always give the
/// same view.
pub fn render(table: &CaseTable, selection: &FilterSelection) -> DashboardView {
    let start = Instant::now();
    let view = apply_filter(table, selection);
    if view.is_empty() {
        let empty_dimensions: Vec<&str> = selection
            .empty_dimensions()
            .iter()
            .map(Dimension::as_str)
            .collect();
        warn!(
            empty_dimensions = ?empty_dimensions,
            "no records match the current selection"
        );
    }

    let cases_by_party = count_by_party(&view);
    let outcome_share = outcome_share(&view);
    let state_win_rate = win_rate_by_party(&view);
    let decisions_over_time = time_series_by_outcome(&view);
    let decisions_by_rapporteur = count_by_rapporteur(&view);
    let rapporteur_year = rapporteur_year_matrix(&view);
    debug!(
        parties = cases_by_party.len(),
        outcomes = outcome_share.len(),
        win_rate_rows = state_win_rate.len(),
        series_rows = decisions_over_time.rows.len(),
        rapporteurs = decisions_by_rapporteur.len(),
        grid_years = rapporteur_year.years.len(),
        "aggregates computed"
    );

    let top_litigant = top_litigant(&cases_by_party);
    let peak_year = peak_year(&decisions_over_time);
    let details = view.iter().map(CaseDetail::from).collect();

    info!(
        record_count = table.len(),
        filtered_count = view.len(),
        duration_ms = start.elapsed().as_millis(),
        "dashboard rendered"
    );

    DashboardView {
        selection: selection.clone(),
        total_records: table.len(),
        filtered_records: view.len(),
        cases_by_party,
        outcome_share,
        state_win_rate,
        decisions_over_time,
        decisions_by_rapporteur,
        rapporteur_year,
        top_litigant,
        peak_year,
        details,
    }
}
