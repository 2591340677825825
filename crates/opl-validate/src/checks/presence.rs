//! Columns that may not be left empty.

use opl_model::ColumnKind;

use crate::context::{Finding, RowView};

pub fn check_name(row: &RowView<'_>) -> Option<Finding> {
    empty(row, ColumnKind::Name)
}

pub fn check_required(row: &RowView<'_>) -> Vec<Finding> {
    [ColumnKind::Sex, ColumnKind::Equipment]
        .into_iter()
        .filter_map(|kind| empty(row, kind))
        .collect()
}

/// Missing columns are a header problem, so only present-but-empty cells count.
fn empty(row: &RowView<'_>, kind: ColumnKind) -> Option<Finding> {
    (row.has(kind) && row.is_blank(kind))
        .then(|| Finding::error(format!("{kind} must not be empty")).on(kind))
}
