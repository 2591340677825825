//! Human-readable output: one table per file with findings, then totals.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use opl_model::{Diagnostic, FileReport, Severity};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult, errors_only: bool) {
    for report in &result.reports {
        if let Some(table) = report_table(report, errors_only) {
            println!("{}", report.path.display());
            println!("{table}");
            println!();
        }
    }
    println!("{}", totals_line(result));
}

/// Findings of one file as a table, or `None` when nothing is left to show.
pub fn report_table(report: &FileReport, errors_only: bool) -> Option<Table> {
    let shown: Vec<&Diagnostic> = report
        .diagnostics
        .iter()
        .filter(|d| !errors_only || d.is_error())
        .collect();
    if shown.is_empty() {
        return None;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Line"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 1, CellAlignment::Right);
    for diagnostic in shown {
        table.add_row(vec![
            severity_cell(diagnostic.severity),
            diagnostic.line.map_or_else(|| dim_cell("-"), Cell::new),
            diagnostic
                .column
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&diagnostic.message),
        ]);
    }
    Some(table)
}

pub fn totals_line(result: &RunResult) -> String {
    format!(
        "Checked {} {}: {} {}, {} {}",
        result.files_checked,
        plural(result.files_checked, "file", "files"),
        result.error_count,
        plural(result.error_count, "error", "errors"),
        result.warning_count,
        plural(result.warning_count, "warning", "warnings"),
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(75)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
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
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_totals_line() {
        let result = RunResult {
            files_checked: 1,
            reports: Vec::new(),
            error_count: 2,
            warning_count: 1,
        };
        assert_eq!(totals_line(&result), "Checked 1 file: 2 errors, 1 warning");
    }

    #[test]
    fn test_errors_only_hides_warning_only_files() {
        let mut report = FileReport::new(PathBuf::from("entries.csv"));
        report.diagnostics.push(Diagnostic::warning("Age unexpectedly high: 150"));
        assert!(report_table(&report, true).is_none());
        let table = report_table(&report, false).expect("table");
        assert_eq!(table.row_iter().count(), 1);
    }
}
