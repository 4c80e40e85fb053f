//! Loader configuration.

use serde::{Deserialize, Serialize};

/// Default date format of the judgment date column.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default column delimiter.
pub const DEFAULT_SEPARATOR: u8 = b'|';

/// Header names of the columns the loader reads.
///
/// Defaults match the headers of the court's published ACO extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub id: String,
    pub filing_party: String,
    pub rapporteur: String,
    pub judgment_date: String,
    pub winner: String,
    pub url: String,
    pub summary: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            id: "Numero_ACO".to_string(),
            filing_party: "Parte Ativa".to_string(),
            rapporteur: "Relator".to_string(),
            judgment_date: "Data de julgamento".to_string(),
            winner: "Vencedor".to_string(),
            url: "URL".to_string(),
            summary: "Resumo".to_string(),
        }
    }
}

impl ColumnSchema {
    /// All column names, in the order they are validated.
    pub fn required_columns(&self) -> [&str; 7] {
        [
            self.id.as_str(),
            self.filing_party.as_str(),
            self.rapporteur.as_str(),
            self.judgment_date.as_str(),
            self.winner.as_str(),
            self.url.as_str(),
            self.summary.as_str(),
        ]
    }
}

/// Options controlling how the case file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub schema: ColumnSchema,
    /// `chrono` format string for the judgment date column.
    pub date_format: String,
    pub separator: u8,
    /// Reject outcome labels other than state/union instead of keeping them
    /// as their own category.
    pub strict_outcomes: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            schema: ColumnSchema::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            separator: DEFAULT_SEPARATOR,
            strict_outcomes: false,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_strict_outcomes(mut self, enable: bool) -> Self {
        self.strict_outcomes = enable;
        self
    }
}
