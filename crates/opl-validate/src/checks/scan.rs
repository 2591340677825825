//! Whitespace check on every field, then the per-cell validators.

use crate::cells::check_cell;
use crate::context::{Finding, RowView};

pub fn check(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for ((header, kind), field) in row.schema().columns().zip(row.fields()) {
        if field.trim() != field.as_str() {
            let finding = Finding::error(format!(
                "{header} '{field}' has leading or trailing whitespace"
            ));
            findings.push(match kind {
                Some(kind) => finding.on(kind),
                None => finding,
            });
        }
        if let Some(kind) = kind
            && !field.is_empty()
        {
            findings.extend(check_cell(kind, field, row));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use opl_model::ColumnKind;

    use super::*;
    use crate::checks::test_support::run_row;

    #[test]
    fn test_whitespace_is_an_error() {
        let findings = run_row(&[("Team", " Barbell Club")], check);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, Some(ColumnKind::Team));
    }

    #[test]
    fn test_unknown_columns_only_get_whitespace_check() {
        assert!(run_row(&[("Wilks", "anything")], check).is_empty());
        assert_eq!(run_row(&[("Wilks", "x ")], check).len(), 1);
    }

    #[test]
    fn test_dispatches_non_empty_cells() {
        let findings = run_row(&[("Sex", "X"), ("Age", ""), ("Name#2", "JOHN SMITH")], check);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].column, Some(ColumnKind::Sex));
        assert_eq!(findings[1].column, Some(ColumnKind::Name));
    }
}
