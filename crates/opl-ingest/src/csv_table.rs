//! Reading a CSV file into a [`Table`].
//!
//! Cells are kept byte-for-byte apart from the UTF-8 decoding: stray
//! whitespace is something the checker reports, so it is never trimmed here.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use opl_model::Table;
use tracing::debug;

use crate::error::{IngestError, Result};

const BOM: char = '\u{feff}';

/// Read a table from a CSV file. The first record is the header.
pub fn read_table(path: &Path) -> Result<Table> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let table = collect(reader, path)?;
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "read table"
    );
    Ok(table)
}

/// Read a table from any reader; `origin` names it in errors.
pub fn read_table_from_reader<R: Read>(reader: R, origin: &Path) -> Result<Table> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    collect(reader, origin)
}

fn collect<R: Read>(mut reader: csv::Reader<R>, origin: &Path) -> Result<Table> {
    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record.map_err(|source| csv_error(origin, source))?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: origin.to_path_buf(),
            });
        }
    };

    let mut columns: Vec<String> = header.iter().map(str::to_string).collect();
    if let Some(first) = columns.first_mut()
        && let Some(stripped) = first.strip_prefix(BOM)
    {
        *first = stripped.to_string();
    }

    let mut table = Table::new(columns);
    for record in records {
        let record = record.map_err(|source| csv_error(origin, source))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

fn csv_error(origin: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: origin.to_path_buf(),
        source,
    }
}
