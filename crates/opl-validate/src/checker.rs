//! Top-level orchestration for one table.

use std::path::Path;

use opl_model::Table;
use tracing::{debug, info_span};

use crate::checks;
use crate::context::{RowView, Schema};
use crate::header;
use crate::options::CheckSettings;
use crate::sink::DiagnosticSink;

/// Line number of the header row; data rows start on the next line.
const HEADER_LINE: usize = 1;

/// Runs the header checks once and the row checks for every row.
#[derive(Debug, Clone, Default)]
pub struct TableChecker {
    settings: CheckSettings,
}

impl TableChecker {
    pub fn new(settings: CheckSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    /// Check one table, reporting into `sink` under `source`.
    ///
    /// `source` is only used for reporting and for path-based federation
    /// rules; nothing is read from it.
    pub fn check(&self, source: &Path, table: &Table, sink: &mut DiagnosticSink) {
        let span = info_span!(
            "check_table",
            file = %source.display(),
            rows = table.row_count()
        );
        let _guard = span.enter();

        sink.reset(source);
        for finding in header::check(&table.columns) {
            sink.record(finding, Some(HEADER_LINE), None);
        }

        let schema = Schema::new(&table.columns);
        let errors_before = sink.error_count();
        let warnings_before = sink.warning_count();
        for (idx, fields) in table.rows.iter().enumerate() {
            let line = HEADER_LINE + 1 + idx;
            if fields.len() != schema.len() {
                sink.error_in_row(
                    format!(
                        "Row has {} fields but the header has {}",
                        fields.len(),
                        schema.len()
                    ),
                    line,
                    fields,
                );
                continue;
            }
            let row = RowView::new(&schema, fields, &self.settings, source);
            for finding in checks::run_all(&row) {
                sink.record(finding, Some(line), Some(fields));
            }
        }
        debug!(
            errors = sink.error_count() - errors_before,
            warnings = sink.warning_count() - warnings_before,
            "rows checked"
        );
    }

    /// Check several tables in sequence into one sink.
    pub fn check_tables<'a, I>(&self, tables: I, sink: &mut DiagnosticSink)
    where
        I: IntoIterator<Item = (&'a Path, &'a Table)>,
    {
        for (source, table) in tables {
            self.check(source, table, sink);
        }
    }
}
