//! Append-only collector for diagnostics across a whole run.

use std::path::{Path, PathBuf};

use opl_model::{Diagnostic, FileReport, Severity};
use tracing::{debug, info};

use crate::context::Finding;

/// Collects diagnostics file by file and keeps run-wide counters.
///
/// Call [`reset`](Self::reset) before checking each file. A file only gets a
/// [`FileReport`] once its first diagnostic arrives, so clean files leave no
/// trace and the file name is announced at most once.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    current: Option<PathBuf>,
    announced: bool,
    reports: Vec<FileReport>,
    errors: usize,
    warnings: usize,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new file context.
    pub fn reset(&mut self, path: impl Into<PathBuf>) {
        self.current = Some(path.into());
        self.announced = false;
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::warning(message));
    }

    pub fn error_in_row(&mut self, message: impl Into<String>, line: usize, row: &[String]) {
        self.push(Diagnostic::error(message).with_line(line).with_row(row));
    }

    /// Record a check finding with its row context.
    pub fn record(&mut self, finding: Finding, line: Option<usize>, row: Option<&[String]>) {
        let mut diagnostic = Diagnostic::new(finding.severity, finding.message);
        diagnostic.line = line;
        diagnostic.column = finding.column.map(|kind| kind.as_str().to_string());
        diagnostic.row = row.map(|fields| fields.join(","));
        self.push(diagnostic);
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
        if !self.announced {
            let path = self.current.clone().unwrap_or_default();
            info!(file = %path.display(), "issues found");
            self.reports.push(FileReport::new(path));
            self.announced = true;
        }
        debug!(
            severity = diagnostic.severity.label(),
            line = diagnostic.line,
            message = %diagnostic.message,
            "diagnostic"
        );
        if let Some(report) = self.reports.last_mut() {
            report.diagnostics.push(diagnostic);
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<FileReport> {
        self.reports
    }
}
