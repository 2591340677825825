//! Integration tests for the check and classes commands.

use std::fs;
use std::path::{Path, PathBuf};

use insta::assert_snapshot;
use opl_cli::cli::CheckArgs;
use opl_cli::commands::{classes_table, run_check};
use opl_cli::summary::{report_table, totals_line};
use opl_model::FileReport;
use opl_validate::WeightClassCatalog;
use tempfile::TempDir;

const HEADER: &str = "Name,Sex,Equipment,BodyweightKg,WeightClassKg,TotalKg,Place\n";

fn write_meet(dir: &Path, rows: &str, with_meet: bool) -> PathBuf {
    fs::create_dir_all(dir).expect("create meet dir");
    let entries = dir.join("entries.csv");
    fs::write(&entries, format!("{HEADER}{rows}")).expect("write entries");
    if with_meet {
        fs::write(dir.join("meet.csv"), "Federation,Date\nUSPA,2023-01-01\n").expect("write meet");
    }
    entries
}

fn args(paths: Vec<PathBuf>) -> CheckArgs {
    CheckArgs {
        paths,
        config: None,
        weight_classes: None,
        report: None,
        errors_only: false,
    }
}

#[test]
fn clean_tree_has_no_findings() {
    let root = TempDir::new().expect("temp dir");
    write_meet(
        &root.path().join("uspa").join("0001"),
        "John Smith,M,Raw,80.5,83,300,1\n",
        true,
    );
    let result = run_check(&args(vec![root.path().to_path_buf()])).expect("run check");
    assert_eq!(result.files_checked, 1);
    assert!(!result.has_errors());
    assert_eq!(result.warning_count, 0);
    assert!(result.reports.is_empty());
    assert_snapshot!(totals_line(&result), @"Checked 1 file: 0 errors, 0 warnings");
}

#[test]
fn findings_are_grouped_per_file() {
    let root = TempDir::new().expect("temp dir");
    write_meet(
        &root.path().join("a"),
        "JOHN SMITH,M,Raw,80.5,83,300,1\n",
        true,
    );
    write_meet(&root.path().join("b"), "John Smith,M,Raw,80.5,83,300,1\n", false);
    write_meet(&root.path().join("c"), "Jane Doe,F,Raw,60,63,250,1\n", true);

    let result = run_check(&args(vec![root.path().to_path_buf()])).expect("run check");
    assert_eq!(result.files_checked, 3);
    assert_eq!(result.error_count, 2);
    assert_eq!(result.reports.len(), 2);
    assert!(result.reports[0].path.ends_with("a/entries.csv"));
    assert!(result.reports[1].path.ends_with("b/entries.csv"));
    assert_eq!(
        result.reports[1].diagnostics[0].message,
        "Missing companion meet.csv"
    );
}

#[test]
fn unreadable_file_is_reported_and_run_continues() {
    let root = TempDir::new().expect("temp dir");
    let broken = root.path().join("a");
    fs::create_dir_all(&broken).expect("create dir");
    fs::write(broken.join("entries.csv"), b"Name,Sex\n\xff\xfe,M\n").expect("write");
    fs::write(broken.join("meet.csv"), "Federation\nUSPA\n").expect("write meet");
    write_meet(&root.path().join("b"), "john smith,M,Raw,80.5,83,300,1\n", true);

    let result = run_check(&args(vec![root.path().to_path_buf()])).expect("run check");
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.reports.len(), 2);
    assert_eq!(result.reports[0].diagnostics.len(), 1);
    assert!(
        result.reports[0].diagnostics[0]
            .message
            .starts_with("Could not read table")
    );
}

#[test]
fn writes_json_report() {
    let root = TempDir::new().expect("temp dir");
    write_meet(
        &root.path().join("meet"),
        "John Smith,M,Raw,80.5,83,300,1,\n",
        true,
    );
    let report_path = root.path().join("report.json");
    let mut check_args = args(vec![root.path().join("meet")]);
    check_args.report = Some(report_path.clone());

    let result = run_check(&check_args).expect("run check");
    assert_eq!(result.error_count, 1);

    let json = fs::read_to_string(&report_path).expect("read report");
    let reports: Vec<FileReport> = serde_json::from_str(&json).expect("parse report");
    assert_eq!(reports, result.reports);
    let diagnostic = &reports[0].diagnostics[0];
    assert_eq!(diagnostic.line, Some(2));
    assert_eq!(diagnostic.message, "Row has 8 fields but the header has 7");
}

#[test]
fn errors_only_table_skips_warnings() {
    let root = TempDir::new().expect("temp dir");
    fs::create_dir_all(root.path().join("m")).expect("create dir");
    fs::write(
        root.path().join("m").join("entries.csv"),
        "Name,Sex,Equipment,BodyweightKg,WeightClassKg,TotalKg,Place,Age\n\
         John Smith,M,Raw,80.5,83,300,1,150\n",
    )
    .expect("write entries");
    fs::write(root.path().join("m").join("meet.csv"), "Federation\nUSPA\n").expect("write meet");

    let result = run_check(&args(vec![root.path().to_path_buf()])).expect("run check");
    assert_eq!(result.error_count, 0);
    assert_eq!(result.warning_count, 1);
    assert!(report_table(&result.reports[0], true).is_none());
    assert!(report_table(&result.reports[0], false).is_some());
}

#[test]
fn bad_config_is_an_error() {
    let root = TempDir::new().expect("temp dir");
    let config = root.path().join("options.toml");
    fs::write(&config, "max_age = \"old\"\n").expect("write config");
    let mut check_args = args(vec![root.path().to_path_buf()]);
    check_args.config = Some(config);
    assert!(run_check(&check_args).is_err());
}

#[test]
fn missing_path_is_an_error() {
    let root = TempDir::new().expect("temp dir");
    assert!(run_check(&args(vec![root.path().join("absent")])).is_err());
}

#[test]
fn classes_table_lists_every_scheme() {
    let catalog = WeightClassCatalog::default();
    let table = classes_table(&catalog);
    assert_eq!(table.row_iter().count(), catalog.schemes().len() * 2);
    let rendered = table.to_string();
    assert!(rendered.contains("ipf-2020"));
    assert!(rendered.contains("120+"));
}
