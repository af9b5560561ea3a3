use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use contact_model::{MatchStatus, SourceOutcome, SourceSummary};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let report = &result.report;
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: (dry run, nothing written)"),
        None => {}
    }

    let mut sources = Table::new();
    sources.set_header(vec![
        header_cell("Source"),
        header_cell("Outcome"),
        header_cell("Records"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut sources);
    align_column(&mut sources, 2, CellAlignment::Right);
    for source in &report.sources {
        sources.add_row(source_row(source));
    }
    println!("{sources}");

    let matches = &report.matches;
    let mut statuses = Table::new();
    statuses.set_header(vec![
        header_cell("Match status"),
        header_cell("Groups"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut statuses);
    align_column(&mut statuses, 1, CellAlignment::Right);
    align_column(&mut statuses, 2, CellAlignment::Right);
    for status in MatchStatus::ALL {
        statuses.add_row(vec![
            status_cell(status),
            count_cell(matches.groups_with(status)),
            count_cell(matches.records_with(status)),
        ]);
    }
    statuses.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(matches.total_groups).add_attribute(Attribute::Bold),
        Cell::new(matches.total_records).add_attribute(Attribute::Bold),
    ]);
    println!("{statuses}");
    println!(
        "{} records merged into {} contacts ({} duplicates removed)",
        matches.total_records,
        matches.total_groups,
        matches.duplicates_removed()
    );

    let excluded: Vec<&SourceSummary> = report
        .sources
        .iter()
        .filter(|source| !source.outcome.is_included())
        .collect();
    if !excluded.is_empty() {
        eprintln!("Excluded sources:");
        for source in excluded {
            eprintln!("- {}: {}", source.source_id, outcome_details(&source.outcome));
        }
    }
}

fn source_row(source: &SourceSummary) -> Vec<Cell> {
    let outcome = Cell::new(source.outcome.label());
    let outcome = match source.outcome {
        SourceOutcome::Included => outcome.fg(Color::Green),
        SourceOutcome::Skipped { .. } => outcome.fg(Color::Yellow),
        SourceOutcome::Failed { .. } => outcome.fg(Color::Red).add_attribute(Attribute::Bold),
    };
    vec![
        Cell::new(&source.source_id),
        outcome,
        Cell::new(source.records),
        Cell::new(outcome_details(&source.outcome)),
    ]
}

fn outcome_details(outcome: &SourceOutcome) -> &str {
    match outcome {
        SourceOutcome::Included => "-",
        SourceOutcome::Skipped { reason } => reason,
        SourceOutcome::Failed { error } => error,
    }
}

fn status_cell(status: MatchStatus) -> Cell {
    let cell = Cell::new(status.as_str());
    match status {
        MatchStatus::Email => cell.fg(Color::Green),
        MatchStatus::Linkedin => cell.fg(Color::Blue),
        MatchStatus::FirstNameLastName => cell.fg(Color::Yellow),
        MatchStatus::Unmatched => cell.add_attribute(Attribute::Dim),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
