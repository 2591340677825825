//! Tests for opl-model types.

use opl_model::{Diagnostic, FileReport, Severity, Table};

#[test]
fn file_report_counts() {
    let report = FileReport {
        path: "meet-data/test/entries.csv".into(),
        diagnostics: vec![
            Diagnostic::error("Name 'JOHN SMITH' must be in proper case").with_line(2),
            Diagnostic::warning("Age unexpectedly high: 150").with_line(3),
            Diagnostic::warning("Age unexpectedly high: 130").with_line(4),
        ],
    };
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 2);
    assert!(report.has_errors());
}

#[test]
fn diagnostic_builder_keeps_context() {
    let row = vec!["John Smith".to_string(), "M".to_string()];
    let diagnostic = Diagnostic::error("bad")
        .with_line(7)
        .with_column("Sex")
        .with_row(&row);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.line, Some(7));
    assert_eq!(diagnostic.column.as_deref(), Some("Sex"));
    assert_eq!(diagnostic.row.as_deref(), Some("John Smith,M"));
}

#[test]
fn report_serializes() {
    let report = FileReport {
        path: "entries.csv".into(),
        diagnostics: vec![Diagnostic::warning("odd")],
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    assert!(json.contains("\"severity\":\"warning\""));
    let round: FileReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round.warning_count(), 1);
}

#[test]
fn table_lookup() {
    let table = Table::from_rows(["Name", "Sex"], [["A B", "M"]]);
    assert_eq!(table.column_index("Sex"), Some(1));
    assert!(!table.has_column("Age"));
    assert_eq!(table.row_count(), 1);
}
