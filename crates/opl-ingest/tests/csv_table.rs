//! Tests for CSV table reading.

use std::fs;
use std::path::Path;

use opl_ingest::{IngestError, read_table, read_table_from_reader};
use tempfile::TempDir;

#[test]
fn reads_header_and_rows_untrimmed() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("entries.csv");
    fs::write(
        &path,
        "Name,Sex,TotalKg\nJohn Smith ,M,300\n\"Doe, Jane\",F,\n",
    )
    .expect("write csv");

    let table = read_table(&path).expect("read table");
    assert_eq!(table.columns, ["Name", "Sex", "TotalKg"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0][0], "John Smith ");
    assert_eq!(table.rows[1], ["Doe, Jane", "F", ""]);
}

#[test]
fn keeps_ragged_rows() {
    let data = "Name,Sex,TotalKg\nJohn Smith,M\nJane Doe,F,250,extra\n";
    let table = read_table_from_reader(data.as_bytes(), Path::new("inline")).expect("read");
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.rows[1].len(), 4);
}

#[test]
fn strips_byte_order_mark() {
    let data = "\u{feff}Name,Sex\nJohn Smith,M\n";
    let table = read_table_from_reader(data.as_bytes(), Path::new("inline")).expect("read");
    assert_eq!(table.columns[0], "Name");
}

#[test]
fn empty_file_is_an_error() {
    let err = read_table_from_reader("".as_bytes(), Path::new("inline")).expect_err("empty");
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_table(&dir.path().join("entries.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::CsvParse { .. }));
}

#[test]
fn invalid_utf8_is_an_error() {
    let data: &[u8] = b"Name,Sex\n\xff\xfe,M\n";
    let err = read_table_from_reader(data, Path::new("inline")).expect_err("bad utf-8");
    assert!(matches!(err, IngestError::CsvParse { .. }));
}
