//! Filter engine: conjunctive set-membership filtering of the case table.

use aco_model::{CaseRecord, CaseTable, FilterSelection};

/// Records of the table that match the current selection, in file order.
///
/// Borrows from the [`CaseTable`]; it lives for a single render pass.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a CaseRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a CaseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CaseRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a CaseRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a CaseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Keeps the records whose party, rapporteur, year and winner are all
/// selected. Order-preserving and side-effect free.
pub fn apply_filter<'a>(table: &'a CaseTable, selection: &FilterSelection) -> FilteredView<'a> {
    table
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}
