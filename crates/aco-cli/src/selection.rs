//! Filter selection assembled from a JSON file and command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use aco_model::{Domains, FilterSelection, Winner};

/// Selection file contents. Every key is optional.
///
/// A missing key selects the whole domain of that dimension; a present but
/// empty list selects nothing.
///
/// ```json
/// { "parties": ["SP", "RJ"], "years": [2019, 2020], "winners": ["STATE"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionFile {
    pub parties: Option<Vec<String>>,
    pub rapporteurs: Option<Vec<String>>,
    pub years: Option<Vec<i32>>,
    pub winners: Option<Vec<String>>,
}

impl SelectionFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read selection file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parse selection file {}", path.display()))
    }
}

/// Values given through repeatable flags. An empty list means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    pub parties: Vec<String>,
    pub rapporteurs: Vec<String>,
    pub years: Vec<i32>,
    pub winners: Vec<String>,
}

/// Builds the selection for one run.
///
/// Per dimension, flags win over the file and the file wins over the full
/// domain. Values outside the domain are kept and simply match nothing.
pub fn resolve_selection(
    domains: &Domains,
    file: Option<&SelectionFile>,
    flags: &SelectionFlags,
) -> FilterSelection {
    let file = file.cloned().unwrap_or_default();
    let parties = pick(&flags.parties, file.parties);
    let rapporteurs = pick(&flags.rapporteurs, file.rapporteurs);
    let years = pick(&flags.years, file.years);
    let winners = pick(&flags.winners, file.winners);

    let mut selection = FilterSelection::full(domains);
    if let Some(parties) = parties {
        selection = selection.with_parties(parties);
    }
    if let Some(rapporteurs) = rapporteurs {
        selection = selection.with_rapporteurs(rapporteurs);
    }
    if let Some(years) = years {
        selection = selection.with_years(years);
    }
    if let Some(winners) = winners {
        selection = selection.with_winners(winners.into_iter().map(Winner::from));
    }
    selection
}

fn pick<T: Clone>(flags: &[T], file: Option<Vec<T>>) -> Option<Vec<T>> {
    if flags.is_empty() {
        file
    } else {
        Some(flags.to_vec())
    }
}
