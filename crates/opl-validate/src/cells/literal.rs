//! Columns restricted to a closed set of literals.

use opl_model::{ColumnKind, Equipment, Event, Lift, ModelError, Place, Sex, Tested};

use crate::context::{Finding, RowView};

pub fn check_sex(_kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    match text.parse::<Sex>() {
        Ok(_) => Vec::new(),
        Err(_) => vec![Finding::error(format!("Sex '{text}' must be 'M' or 'F'"))],
    }
}

pub fn check_place(_kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    match text.parse::<Place>() {
        Ok(_) => Vec::new(),
        Err(_) => vec![Finding::error(format!(
            "Place '{text}' must be a number or one of DQ, NS, G, DD"
        ))],
    }
}

pub fn check_equipment(_kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    match text.parse::<Equipment>() {
        Ok(_) => Vec::new(),
        Err(_) => {
            let allowed: Vec<&str> = Equipment::all().iter().map(Equipment::as_str).collect();
            vec![Finding::error(format!(
                "Equipment '{text}' must be one of {}",
                allowed.join(", ")
            ))]
        }
    }
}

pub fn check_tested(_kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    match text.parse::<Tested>() {
        Ok(_) => Vec::new(),
        Err(_) => vec![Finding::error(format!(
            "Tested '{text}' must be empty, 'Yes', or 'No'"
        ))],
    }
}

pub fn check_event(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    match text.parse::<Event>() {
        Ok(_) => {}
        Err(ModelError::RepeatedEventLetter { letter, .. }) => findings.push(Finding::error(
            format!("Event '{text}' repeats the letter '{letter}'"),
        )),
        Err(_) => findings.push(Finding::error(format!(
            "Event '{text}' may only contain the letters S, B, D"
        ))),
    }
    for lift in Lift::all() {
        let best = lift.best_column();
        if text.contains(lift.letter()) && !row.has(best) {
            findings.push(Finding::error(format!(
                "Event '{text}' includes {lift} but there is no '{best}' column"
            )));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::context::Schema;
    use crate::options::CheckSettings;

    fn with_columns(columns: &[&str], check: impl Fn(&RowView<'_>)) {
        let headers: Vec<String> = columns.iter().map(|s| s.to_string()).collect();
        let schema = Schema::new(&headers);
        let fields = vec![String::new(); headers.len()];
        let settings = CheckSettings::default();
        let row = RowView::new(&schema, &fields, &settings, Path::new("entries.csv"));
        check(&row);
    }

    #[test]
    fn test_literals() {
        with_columns(&["Sex"], |row| {
            assert!(check_sex(ColumnKind::Sex, "F", row).is_empty());
            assert_eq!(check_sex(ColumnKind::Sex, "Mx", row).len(), 1);
            assert!(check_place(ColumnKind::Place, "G", row).is_empty());
            assert_eq!(check_place(ColumnKind::Place, "1st", row).len(), 1);
            assert!(check_equipment(ColumnKind::Equipment, "Multi-ply", row).is_empty());
            assert_eq!(check_equipment(ColumnKind::Equipment, "Equipped", row).len(), 1);
            assert!(check_tested(ColumnKind::Tested, "Yes", row).is_empty());
            assert_eq!(check_tested(ColumnKind::Tested, "yes", row).len(), 1);
        });
    }

    #[test]
    fn test_event_requires_best_columns() {
        with_columns(&["Event", "BestBenchKg"], |row| {
            assert!(check_event(ColumnKind::Event, "B", row).is_empty());
            let findings = check_event(ColumnKind::Event, "SBD", row);
            assert_eq!(findings.len(), 2);
            assert!(findings[0].message.contains("'BestSquatKg'"));
            assert!(findings[1].message.contains("'BestDeadliftKg'"));
        });
    }

    #[test]
    fn test_event_letters() {
        with_columns(&["Event", "BestBenchKg"], |row| {
            let findings = check_event(ColumnKind::Event, "BB", row);
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].message, "Event 'BB' repeats the letter 'B'");
            assert_eq!(check_event(ColumnKind::Event, "BX", row).len(), 1);
        });
    }
}
