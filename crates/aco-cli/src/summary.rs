use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use aco_dashboard::DashboardView;
use aco_model::{
    CaseDetail, CrossTab, Dimension, Domains, NO_DATA_MESSAGE, TimeSeries, Winner, YearOutcomeCount,
};

/// Width of the proportional bar column, in characters.
const BAR_WIDTH: usize = 30;

pub fn print_dashboard(view: &DashboardView, show_details: bool) {
    println!(
        "Cases: {} of {} match the selection",
        view.filtered_records, view.total_records
    );
    println!();
    print_insights(view);
    print_party_table(view);
    print_outcome_table(view);
    print_win_rate_table(view);
    print_time_series_table(view);
    print_rapporteur_table(view);
    print_cross_tab(&view.rapporteur_year);
    if show_details {
        print_details(&view.details);
    }
}

pub fn print_values(domains: &Domains, dimensions: &[Dimension]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for dimension in dimensions {
        let labels = domains.labels(*dimension);
        table.add_row(vec![
            Cell::new(dimension.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(labels.len()),
            Cell::new(labels.join(", ")),
        ]);
    }
    println!("{table}");
}

fn print_insights(view: &DashboardView) {
    if view.top_litigant.is_no_data() && view.peak_year.is_no_data() {
        println!("{NO_DATA_MESSAGE}");
        return;
    }
    println!("Top litigant: {}", view.top_litigant);
    println!("Peak year:    {}", view.peak_year);
}

fn print_party_table(view: &DashboardView) {
    let max = view
        .cases_by_party
        .iter()
        .map(|row| row.count)
        .max()
        .unwrap_or(0);
    let mut table = chart_table(&["Party", "Cases", ""]);
    for row in &view.cases_by_party {
        table.add_row(vec![
            Cell::new(&row.party),
            Cell::new(row.count),
            bar_cell(row.count as f64, max as f64, Color::Blue),
        ]);
    }
    print_section("Cases by filing party", &table, view.cases_by_party.is_empty());
}

fn print_outcome_table(view: &DashboardView) {
    let mut table = chart_table(&["Winner", "Decisions", "Share %", ""]);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in &view.outcome_share {
        table.add_row(vec![
            winner_cell(&row.winner),
            Cell::new(row.count),
            Cell::new(format!("{:.1}", row.share)),
            bar_cell(row.share, 100.0, winner_color(&row.winner)),
        ]);
    }
    print_section("Outcome share", &table, view.outcome_share.is_empty());
}

fn print_win_rate_table(view: &DashboardView) {
    let mut table = chart_table(&["Party", "State wins %", ""]);
    for row in &view.state_win_rate {
        table.add_row(vec![
            Cell::new(&row.party),
            Cell::new(format!("{:.1}", row.share)),
            bar_cell(row.share, 100.0, Color::Green),
        ]);
    }
    print_section(
        "State win rate by party",
        &table,
        view.state_win_rate.is_empty(),
    );
}

fn print_time_series_table(view: &DashboardView) {
    let series = &view.decisions_over_time;
    let max = series.rows.iter().map(|row| row.count).max().unwrap_or(0);
    let mut table = chart_table(&["Year", "Winner", "Decisions", ""]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Left);
    align_column(&mut table, 2, CellAlignment::Right);
    for (year, row) in time_series_lines(series) {
        match row {
            Some(row) => table.add_row(vec![
                Cell::new(year),
                winner_cell(&row.winner),
                Cell::new(row.count),
                bar_cell(row.count as f64, max as f64, winner_color(&row.winner)),
            ]),
            None => table.add_row(vec![
                dim_cell(year),
                dim_cell("-"),
                dim_cell(0),
                Cell::new(""),
            ]),
        };
    }
    print_section("Decisions over time", &table, series.is_empty());
}

/// Rows of the time-series table: every year of the axis, with `None` for
/// years that had no decision.
fn time_series_lines(series: &TimeSeries) -> Vec<(i32, Option<&YearOutcomeCount>)> {
    let mut lines = Vec::new();
    for year in series.axis_years() {
        let before = lines.len();
        lines.extend(
            series
                .rows
                .iter()
                .filter(|row| row.year == year)
                .map(|row| (year, Some(row))),
        );
        if lines.len() == before {
            lines.push((year, None));
        }
    }
    lines
}

fn print_rapporteur_table(view: &DashboardView) {
    let max = view
        .decisions_by_rapporteur
        .iter()
        .map(|row| row.count)
        .max()
        .unwrap_or(0);
    let mut table = chart_table(&["Rapporteur", "Decisions", ""]);
    for row in &view.decisions_by_rapporteur {
        table.add_row(vec![
            Cell::new(&row.rapporteur),
            Cell::new(row.count),
            bar_cell(row.count as f64, max as f64, Color::Magenta),
        ]);
    }
    print_section(
        "Decisions by rapporteur",
        &table,
        view.decisions_by_rapporteur.is_empty(),
    );
}

fn print_cross_tab(grid: &CrossTab) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Rapporteur")];
    header.extend(grid.years.iter().map(|year| header_cell(&year.to_string())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=grid.years.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let max = grid.max_cell();
    for row in &grid.rows {
        let mut cells = vec![Cell::new(&row.rapporteur)];
        cells.extend(
            grid.years
                .iter()
                .map(|year| heat_cell(grid.get(&row.rapporteur, *year).unwrap_or(0), max)),
        );
        table.add_row(cells);
    }
    print_section("Decisions by rapporteur and year", &table, grid.is_empty());
}

fn print_details(details: &[CaseDetail]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Case"),
        header_cell("Judgment date"),
        header_cell("URL"),
        header_cell("Summary"),
    ]);
    apply_details_table_style(&mut table);
    for detail in details {
        table.add_row(vec![
            Cell::new(&detail.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(detail.judgment_date.format("%Y-%m-%d")),
            url_cell(&detail.url),
            Cell::new(&detail.summary),
        ]);
    }
    print_section("Case details", &table, details.is_empty());
}

fn print_section(title: &str, table: &Table, empty: bool) {
    println!();
    println!("{title}:");
    if empty {
        println!("  (no data)");
    } else {
        println!("{table}");
    }
}

fn chart_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

/// Renders `value / max` as a run of block characters.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).max(1);
    "█".repeat(filled)
}

fn bar_cell(value: f64, max: f64, color: Color) -> Cell {
    Cell::new(bar(value, max, BAR_WIDTH)).fg(color)
}

fn heat_cell(count: usize, max: usize) -> Cell {
    if count == 0 {
        return dim_cell(0);
    }
    let ratio = if max == 0 {
        0.0
    } else {
        count as f64 / max as f64
    };
    let cell = Cell::new(count);
    if ratio >= 0.66 {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else if ratio >= 0.33 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Green)
    }
}

fn winner_color(winner: &Winner) -> Color {
    match winner {
        Winner::State => Color::Green,
        Winner::Union => Color::Blue,
        Winner::Other(_) => Color::DarkGrey,
    }
}

fn winner_cell(winner: &Winner) -> Cell {
    Cell::new(winner.as_str()).fg(winner_color(winner))
}

fn url_cell(url: &str) -> Cell {
    if url.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(url).fg(Color::Cyan)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_details_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::LowerBoundary(Width::Fixed(13)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(10.0, 10.0, 8).chars().count(), 8);
        assert_eq!(bar(5.0, 10.0, 8).chars().count(), 4);
    }

    #[test]
    fn bar_keeps_small_values_visible() {
        assert_eq!(bar(1.0, 1000.0, 10).chars().count(), 1);
    }

    #[test]
    fn bar_is_empty_for_zero() {
        assert!(bar(0.0, 10.0, 10).is_empty());
        assert!(bar(3.0, 0.0, 10).is_empty());
    }

    #[test]
    fn time_series_lines_fill_year_gaps() {
        let row = |year: i32, winner: Winner, count: usize| YearOutcomeCount {
            year,
            winner,
            count,
        };
        let series = TimeSeries {
            rows: vec![
                row(2018, Winner::State, 2),
                row(2018, Winner::Union, 1),
                row(2021, Winner::Union, 1),
            ],
        };

        let lines: Vec<(i32, Option<usize>)> = time_series_lines(&series)
            .into_iter()
            .map(|(year, row)| (year, row.map(|r| r.count)))
            .collect();
        assert_eq!(
            lines,
            vec![
                (2018, Some(2)),
                (2018, Some(1)),
                (2019, None),
                (2020, None),
                (2021, Some(1)),
            ]
        );
    }

    #[test]
    fn time_series_lines_empty_for_empty_series() {
        assert!(time_series_lines(&TimeSeries::default()).is_empty());
    }
}
