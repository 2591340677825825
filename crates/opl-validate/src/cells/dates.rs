//! Birth year and birth date.

use chrono::{Datelike, NaiveDate};
use opl_model::ColumnKind;

use crate::context::{Finding, RowView};

pub fn check_birth_year(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    if text.len() != 4 || !text.chars().all(|ch| ch.is_ascii_digit()) {
        return vec![Finding::error(format!(
            "BirthYear '{text}' must be exactly four digits"
        ))];
    }
    if !text.starts_with(['1', '2']) {
        return vec![Finding::error(format!(
            "BirthYear '{text}' must start with 1 or 2"
        ))];
    }
    match text.parse::<i32>() {
        Ok(year) => plausible_year(year, row).into_iter().collect(),
        Err(_) => Vec::new(),
    }
}

pub fn check_birth_date(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let parsed = (text.len() == 10)
        .then(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
        .flatten();
    match parsed {
        Some(date) => plausible_year(date.year(), row).into_iter().collect(),
        None => vec![Finding::error(format!(
            "BirthDate '{text}' must be a valid YYYY-MM-DD date"
        ))],
    }
}

fn plausible_year(year: i32, row: &RowView<'_>) -> Option<Finding> {
    let options = row.options();
    (!options.birth_year_plausible(year)).then(|| {
        Finding::warning(format!(
            "Birth year {year} is outside the plausible range ({}, {})",
            options.birth_year_floor, options.birth_year_ceiling
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use opl_model::Severity;

    use super::*;
    use crate::context::Schema;
    use crate::options::CheckSettings;

    fn with_row(check: impl Fn(&RowView<'_>)) {
        let schema = Schema::new(&[]);
        let settings = CheckSettings::default();
        let row = RowView::new(&schema, &[], &settings, Path::new("entries.csv"));
        check(&row);
    }

    #[test]
    fn test_birth_year() {
        with_row(|row| {
            let severity =
                |text: &str| check_birth_year(ColumnKind::BirthYear, text, row)[0].severity;
            assert!(check_birth_year(ColumnKind::BirthYear, "1985", row).is_empty());
            assert_eq!(severity("85"), Severity::Error);
            assert_eq!(severity("3010"), Severity::Error);
            assert_eq!(severity("１９８５"), Severity::Error);
            assert_eq!(severity("1900"), Severity::Warning);
            assert_eq!(severity("2014"), Severity::Warning);
        });
    }

    #[test]
    fn test_birth_date() {
        with_row(|row| {
            assert!(check_birth_date(ColumnKind::BirthDate, "1985-02-28", row).is_empty());
            assert_eq!(check_birth_date(ColumnKind::BirthDate, "1985-02-30", row).len(), 1);
            assert_eq!(check_birth_date(ColumnKind::BirthDate, "1985-2-3", row).len(), 1);
            assert_eq!(check_birth_date(ColumnKind::BirthDate, "02/03/1985", row).len(), 1);
            assert_eq!(
                check_birth_date(ColumnKind::BirthDate, "1899-01-01", row)[0].severity,
                Severity::Warning
            );
        });
    }
}
