//! Conversion of the raw string frame into typed case records.

use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::{DataFrame, DataType};
use tracing::warn;

use aco_model::{CaseRecord, CaseTable, Winner};

use crate::error::{IngestError, Result};
use crate::options::LoadOptions;

/// Data rows start on line 2; line 1 is the header.
const FIRST_DATA_LINE: usize = 2;

/// Builds the case table from a frame produced by [`crate::read_case_frame`].
///
/// Validates that every configured column is present, parses the judgment
/// date of every row and classifies outcomes. The first invalid row fails
/// the whole load. `path` is only used for error messages.
pub fn parse_case_frame(df: &DataFrame, options: &LoadOptions, path: &Path) -> Result<CaseTable> {
    let schema = &options.schema;
    for column in schema.required_columns() {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
                found: found_columns(df),
            });
        }
    }

    let ids = column_values(df, &schema.id)?;
    let parties = column_values(df, &schema.filing_party)?;
    let rapporteurs = column_values(df, &schema.rapporteur)?;
    let dates = column_values(df, &schema.judgment_date)?;
    let winners = column_values(df, &schema.winner)?;
    let urls = column_values(df, &schema.url)?;
    let summaries = column_values(df, &schema.summary)?;

    let mut records = Vec::with_capacity(df.height());
    let mut unknown_outcomes = 0usize;
    let rows = ids
        .into_iter()
        .zip(parties)
        .zip(rapporteurs)
        .zip(dates)
        .zip(winners)
        .zip(urls)
        .zip(summaries)
        .enumerate();
    for (index, ((((((id, party), rapporteur), date), winner), url), summary)) in rows {
        let line = index + FIRST_DATA_LINE;
        let judgment_date = parse_judgment_date(&date, &options.date_format).ok_or_else(|| {
            IngestError::InvalidDate {
                value: date.clone(),
                line,
                format: options.date_format.clone(),
                path: path.to_path_buf(),
            }
        })?;
        let winner = Winner::from_label(&winner);
        if !winner.is_known() {
            if options.strict_outcomes {
                return Err(IngestError::UnknownOutcome {
                    value: winner.to_string(),
                    line,
                    path: path.to_path_buf(),
                });
            }
            unknown_outcomes += 1;
        }
        records.push(CaseRecord {
            id,
            filing_party: party,
            rapporteur,
            judgment_date,
            winner,
            summary,
            url,
        });
    }

    if unknown_outcomes > 0 {
        warn!(
            path = %path.display(),
            unknown_outcomes,
            "outcome labels outside STATE/UNION kept as separate categories"
        );
    }
    Ok(CaseTable::new(records))
}

/// Parses a judgment date with the configured format.
///
/// A trailing midnight time component (`00:00:00`) is tolerated since some
/// exports write dates as timestamps.
pub fn parse_judgment_date(value: &str, format: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, format).ok().or_else(|| {
        trimmed
            .strip_suffix("00:00:00")
            .and_then(|head| NaiveDate::parse_from_str(head.trim_end(), format).ok())
    })
}

/// Column values as trimmed strings, nulls as empty strings.
fn column_values(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .iter()
        .map(|value| value.map(str::trim).unwrap_or("").to_string())
        .collect();
    Ok(values)
}

fn found_columns(df: &DataFrame) -> String {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
