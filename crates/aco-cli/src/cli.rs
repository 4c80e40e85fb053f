//! CLI argument definitions for the ACO dashboard.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use aco_cli::selection::SelectionFlags;

#[derive(Parser)]
#[command(
    name = "aco",
    version,
    about = "ACO Dashboard - Explore original civil actions decided by the Supreme Court",
    long_about = "Explore a pipe-delimited dataset of original civil actions (ACO).\n\n\
                  Filters by filing party, rapporteur, judgment year and winner, then\n\
                  prints case counts, outcome shares, win rates, time series and a\n\
                  rapporteur-by-year grid. The filtered cases can be exported as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// chrono format of the judgment date column.
    #[arg(long = "date-format", value_name = "FMT", global = true)]
    pub date_format: Option<String>,

    /// Reject the file when a winner label is neither STATE nor UNION.
    #[arg(long = "strict-outcomes", global = true)]
    pub strict_outcomes: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every chart and insight for a selection.
    Dashboard(DashboardArgs),

    /// List the values available to each filter.
    Values(ValuesArgs),

    /// Write the filtered cases to dados_filtrados.csv.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Path to the pipe-delimited case file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ViewFormatArg,

    /// Also write the export into this directory.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Print the detail table of the filtered cases.
    #[arg(long = "details")]
    pub details: bool,
}

#[derive(Parser)]
pub struct ValuesArgs {
    /// Path to the pipe-delimited case file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Only list this filter (party, rapporteur, year or winner).
    #[arg(long = "dimension", value_name = "NAME")]
    pub dimension: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ViewFormatArg,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the pipe-delimited case file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory that receives dados_filtrados.csv (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Filter flags shared by the dashboard and export commands.
///
/// A dimension without flags keeps every value unless the selection file
/// narrows it.
#[derive(Args)]
pub struct FilterArgs {
    /// Filing party to include (repeatable).
    #[arg(long = "party", value_name = "PARTY")]
    pub parties: Vec<String>,

    /// Rapporteur to include (repeatable).
    #[arg(long = "rapporteur", value_name = "NAME")]
    pub rapporteurs: Vec<String>,

    /// Judgment year to include (repeatable).
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<i32>,

    /// Winner to include, STATE or UNION (repeatable).
    #[arg(long = "winner", value_name = "WINNER")]
    pub winners: Vec<String>,

    /// JSON file with the selection; flags override its entries.
    #[arg(long = "selection", value_name = "FILE")]
    pub selection: Option<PathBuf>,
}

impl FilterArgs {
    pub fn flags(&self) -> SelectionFlags {
        SelectionFlags {
            parties: self.parties.clone(),
            rapporteurs: self.rapporteurs.clone(),
            years: self.years.clone(),
            winners: self.winners.clone(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_filters() {
        let cli = Cli::try_parse_from([
            "aco",
            "dashboard",
            "cases.csv",
            "--party",
            "SP",
            "--party",
            "RJ",
            "--year",
            "2020",
            "--winner",
            "STATE",
            "--format",
            "json",
            "--strict-outcomes",
        ])
        .unwrap();
        assert!(cli.strict_outcomes);
        let Command::Dashboard(args) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.filters.parties, vec!["SP", "RJ"]);
        assert_eq!(args.filters.years, vec![2020]);
        assert!(args.format == ViewFormatArg::Json);
        assert!(!args.details);
    }

    #[test]
    fn global_date_format_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from([
            "aco",
            "values",
            "cases.csv",
            "--date-format",
            "%d/%m/%Y",
            "--dimension",
            "rapporteur",
        ])
        .unwrap();
        assert_eq!(cli.date_format.as_deref(), Some("%d/%m/%Y"));
        let Command::Values(args) = cli.command else {
            panic!("expected values command");
        };
        assert_eq!(args.dimension.as_deref(), Some("rapporteur"));
    }

    #[test]
    fn export_requires_a_file() {
        assert!(Cli::try_parse_from(["aco", "export"]).is_err());
    }
}
