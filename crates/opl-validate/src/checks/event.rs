//! Agreement between Event, lift columns, equipment and Place.

use opl_model::{ColumnKind, Equipment, Lift};

use crate::context::{Finding, RowView};

pub fn check(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    if let Some(event) = row.event() {
        for lift in Lift::all() {
            if event.contains(*lift) {
                continue;
            }
            if let Some(column) = lift.columns().into_iter().find(|kind| !row.is_blank(*kind)) {
                findings.push(
                    Finding::error(format!(
                        "Event '{event}' excludes {lift}, but '{column}' has a value"
                    ))
                    .on(column),
                );
            }
        }

        if row.equipment() == Some(Equipment::Wraps) && !event.contains(Lift::Squat) {
            findings.push(
                Finding::error(format!(
                    "Equipment 'Wraps' only applies to the squat, but Event is '{event}'"
                ))
                .on(ColumnKind::Equipment),
            );
        }
    }

    if let Some(place) = row.place()
        && place.is_disqualification()
        && !row.is_blank(ColumnKind::TotalKg)
    {
        findings.push(
            Finding::error(format!("{place}'d lifter must not have a TotalKg"))
                .on(ColumnKind::TotalKg),
        );
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::run_row;

    #[test]
    fn test_lift_outside_event() {
        let findings = run_row(
            &[("Event", "B"), ("BestBenchKg", "100"), ("Squat1Kg", "150"), ("BestSquatKg", "")],
            check,
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, Some(ColumnKind::Squat1Kg));

        let findings = run_row(&[("Event", "SBD"), ("Squat1Kg", "150")], check);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_one_finding_per_lift() {
        let findings = run_row(
            &[("Event", "S"), ("Bench1Kg", "90"), ("BestBenchKg", "90"), ("Deadlift1Kg", "200")],
            check,
        );
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_wraps_requires_squat() {
        assert_eq!(run_row(&[("Event", "BD"), ("Equipment", "Wraps")], check).len(), 1);
        assert!(run_row(&[("Event", "SBD"), ("Equipment", "Wraps")], check).is_empty());
    }

    #[test]
    fn test_disqualified_lifter_has_no_total() {
        let findings = run_row(&[("Place", "DQ"), ("TotalKg", "250")], check);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "DQ'd lifter must not have a TotalKg");
        assert_eq!(run_row(&[("Place", "NS"), ("TotalKg", "1")], check).len(), 1);
        assert!(run_row(&[("Place", "DQ"), ("TotalKg", "")], check).is_empty());
        assert!(run_row(&[("Place", "1"), ("TotalKg", "250")], check).is_empty());
    }
}
