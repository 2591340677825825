use opl_model::FileReport;

/// Outcome of one `check` run across all discovered files.
#[derive(Debug, Default)]
pub struct RunResult {
    pub files_checked: usize,
    /// Reports for files with at least one finding, in check order.
    pub reports: Vec<FileReport>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}
