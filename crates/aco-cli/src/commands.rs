use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aco_cli::selection::{SelectionFile, resolve_selection};
use aco_dashboard::{DashboardView, Session};
use aco_ingest::{ColumnSchema, LoadOptions, read_case_table};
use aco_model::{CaseTable, Dimension};
use aco_report::{ExportHeader, write_export};

use crate::cli::{DashboardArgs, ExportArgs, FilterArgs, ValuesArgs, ViewFormatArg};
use crate::summary::{print_dashboard, print_values};

pub fn run_dashboard(args: &DashboardArgs, options: &LoadOptions) -> Result<()> {
    let table = load_table(&args.file, options)?;
    let (mut session, view) = open_session(table, &args.filters, &options.schema)?;

    match args.format {
        ViewFormatArg::Table => print_dashboard(&view, args.details),
        ViewFormatArg::Json => {
            let json = serde_json::to_string_pretty(&view).context("serialize dashboard")?;
            println!("{json}");
        }
    }

    if let Some(dir) = &args.export_dir {
        let path = export_view(&mut session, dir)?;
        info!(path = %path.display(), "export written");
    }
    Ok(())
}

pub fn run_values(args: &ValuesArgs, options: &LoadOptions) -> Result<()> {
    let dimensions = match &args.dimension {
        Some(name) => vec![name.parse::<Dimension>()?],
        None => Dimension::ALL.to_vec(),
    };
    let table = load_table(&args.file, options)?;
    let domains = table.domains();
    match args.format {
        ViewFormatArg::Table => print_values(&domains, &dimensions),
        ViewFormatArg::Json => {
            let values: BTreeMap<&str, Vec<String>> = dimensions
                .iter()
                .map(|dimension| (dimension.as_str(), domains.labels(*dimension)))
                .collect();
            let json = serde_json::to_string_pretty(&values).context("serialize filter values")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs, options: &LoadOptions) -> Result<()> {
    let table = load_table(&args.file, options)?;
    let (mut session, view) = open_session(table, &args.filters, &options.schema)?;
    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let path = export_view(&mut session, &dir)?;
    println!("Exported {} cases to {}", view.filtered_records, path.display());
    Ok(())
}

fn load_table(path: &Path, options: &LoadOptions) -> Result<Arc<CaseTable>> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_case_table(path, options)
        .with_context(|| format!("load case file {}", path.display()))?;
    info!(
        record_count = table.len(),
        duration_ms = start.elapsed().as_millis(),
        "case file loaded"
    );
    Ok(Arc::new(table))
}

fn open_session(
    table: Arc<CaseTable>,
    filters: &FilterArgs,
    schema: &ColumnSchema,
) -> Result<(Session, DashboardView)> {
    let span = info_span!("render");
    let _guard = span.enter();
    let file = filters
        .selection
        .as_deref()
        .map(SelectionFile::load)
        .transpose()?;
    let mut session = Session::new(table).with_export_header(export_header(schema));
    let selection = resolve_selection(session.domains(), file.as_ref(), &filters.flags());
    let view = session.select(selection);
    Ok((session, view))
}

fn export_view(session: &mut Session, dir: &Path) -> Result<PathBuf> {
    let span = info_span!("export", dir = %dir.display());
    let _guard = span.enter();
    let start = Instant::now();
    let artifact = session.export().context("encode export")?;
    let path = write_export(dir, &artifact)
        .with_context(|| format!("write export to {}", dir.display()))?;
    info!(
        rows = artifact.rows,
        digest = %artifact.digest,
        duration_ms = start.elapsed().as_millis(),
        "export ready"
    );
    Ok(path)
}

/// Export columns carry the same header names as the loaded file.
fn export_header(schema: &ColumnSchema) -> ExportHeader {
    ExportHeader {
        id: schema.id.clone(),
        judgment_date: schema.judgment_date.clone(),
        url: schema.url.clone(),
        summary: schema.summary.clone(),
    }
}
