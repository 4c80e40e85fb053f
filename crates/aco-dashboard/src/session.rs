//! Per-user dashboard session over a shared, immutable case table.

use std::sync::Arc;

use tracing::debug;

use aco_model::{CaseDetail, CaseTable, Domains, FilterSelection};
use aco_report::{ExportArtifact, ExportCache, ExportHeader};

use crate::filter::apply_filter;
use crate::render::{DashboardView, render};

/// Holds one user's filter selection.
///
/// The table is shared read-only between sessions; selections and rendered
/// views are never shared. The export cache lives as long as the session and
/// is keyed on the exported rows, so selections that narrow to the same rows
/// reuse one encoding.
#[derive(Debug, Clone)]
pub struct Session {
    table: Arc<CaseTable>,
    domains: Domains,
    selection: FilterSelection,
    exports: ExportCache,
}

impl Session {
    /// Starts a session with every value of every dimension selected.
    pub fn new(table: Arc<CaseTable>) -> Self {
        let domains = table.domains();
        let selection = FilterSelection::full(&domains);
        Self {
            table,
            domains,
            selection,
            exports: ExportCache::new(),
        }
    }

    /// Uses `header` for the export columns. Clears cached exports.
    #[must_use]
    pub fn with_export_header(mut self, header: ExportHeader) -> Self {
        self.exports = ExportCache::new().with_header(header);
        self
    }

    pub fn table(&self) -> &CaseTable {
        &self.table
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Replaces the selection and renders the new view.
    pub fn select(&mut self, selection: FilterSelection) -> DashboardView {
        self.selection = selection;
        self.render()
    }

    /// Edits the current selection in place and renders the new view.
    pub fn update<F>(&mut self, edit: F) -> DashboardView
    where
        F: FnOnce(&mut FilterSelection),
    {
        edit(&mut self.selection);
        self.render()
    }

    /// Returns to the full-domain selection.
    pub fn reset(&mut self) -> DashboardView {
        self.selection = FilterSelection::full(&self.domains);
        self.render()
    }

    pub fn render(&self) -> DashboardView {
        render(&self.table, &self.selection)
    }

    /// Export of the current filtered view, encoded at most once per
    /// distinct row set.
    pub fn export(&mut self) -> aco_report::Result<ExportArtifact> {
        let rows: Vec<CaseDetail> = apply_filter(&self.table, &self.selection)
            .iter()
            .map(CaseDetail::from)
            .collect();
        let artifact = self.exports.artifact(&rows)?;
        debug!(
            rows = artifact.rows,
            hits = self.exports.hits(),
            misses = self.exports.misses(),
            "session export"
        );
        Ok(artifact)
    }

    pub fn export_cache(&self) -> &ExportCache {
        &self.exports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aco_model::{CaseRecord, Winner};
    use chrono::NaiveDate;

    fn table() -> Arc<CaseTable> {
        let case = |party: &str, year: i32, winner: Winner| CaseRecord {
            id: format!("{party}{year}"),
            filing_party: party.to_string(),
            rapporteur: "Min. A".to_string(),
            judgment_date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            winner,
            summary: String::new(),
            url: String::new(),
        };
        Arc::new(CaseTable::new(vec![
            case("SP", 2020, Winner::State),
            case("RJ", 2021, Winner::Union),
        ]))
    }

    #[test]
    fn sessions_share_table_but_not_selection() {
        let shared = table();
        let mut first = Session::new(Arc::clone(&shared));
        let second = Session::new(Arc::clone(&shared));

        let narrowed = first.update(|selection| {
            selection.winners.remove(&Winner::State);
        });
        assert_eq!(narrowed.filtered_records, 1);
        assert_eq!(second.render().filtered_records, 2);
        assert_eq!(Arc::strong_count(&shared), 3);

        let reset = first.reset();
        assert_eq!(reset.filtered_records, 2);
    }

    #[test]
    fn select_replaces_selection() {
        let mut session = Session::new(table());
        let view = session.select(FilterSelection::empty());
        assert_eq!(view.filtered_records, 0);
        assert_eq!(session.selection(), &FilterSelection::empty());
    }

    #[test]
    fn same_rows_from_different_selections_reuse_export() {
        let mut session = Session::new(table());
        let domains = session.domains().clone();

        session.select(FilterSelection::full(&domains).with_parties(["SP"]));
        let first = session.export().unwrap();

        session.select(FilterSelection::full(&domains).with_years([2020]));
        let second = session.export().unwrap();

        assert_eq!(first.digest, second.digest);
        assert!(Arc::ptr_eq(&first.bytes, &second.bytes));
        assert_eq!(session.export_cache().misses(), 1);
        assert_eq!(session.export_cache().hits(), 1);
        assert_eq!(second.rows, 1);
    }

    #[test]
    fn export_follows_selection_changes() {
        let mut session = Session::new(table());
        let all = session.export().unwrap();
        session.update(|selection| {
            selection.parties.remove("SP");
        });
        let narrowed = session.export().unwrap();

        assert_eq!(all.rows, 2);
        assert_eq!(narrowed.rows, 1);
        assert_ne!(all.digest, narrowed.digest);
        assert_eq!(session.export_cache().misses(), 2);
    }

    #[test]
    fn export_header_is_configurable() {
        let header = ExportHeader {
            id: "Case".to_string(),
            ..ExportHeader::default()
        };
        let mut session = Session::new(table()).with_export_header(header);
        session.select(FilterSelection::empty());
        let artifact = session.export().unwrap();
        assert_eq!(&*artifact.bytes, b"Case,Data de julgamento,URL,Resumo\n");
    }
}
