//! TotalKg against Place and the best lifts.

use opl_model::{ColumnKind, Lift};

use crate::context::{Finding, RowView};

pub fn check(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    if !row.has(ColumnKind::TotalKg) {
        return findings;
    }
    let Some(total) = row.number_or_zero(ColumnKind::TotalKg) else {
        return findings;
    };

    if total <= 0.0 {
        if !row.place().is_some_and(|place| place.is_disqualification()) {
            findings.push(
                Finding::warning(format!(
                    "Lifter without a TotalKg has Place '{}'; expected DQ, DD or NS",
                    row.text(ColumnKind::Place)
                ))
                .on(ColumnKind::Place),
            );
        }
        return findings;
    }

    let bests: Option<Vec<f64>> = Lift::all()
        .iter()
        .map(|lift| row.number_or_zero(lift.best_column()))
        .collect();
    let Some(bests) = bests else {
        return findings;
    };

    // Partial-event meets: a lift in the Event with no best means the total
    // was recorded some other way.
    if let Some(event) = row.event()
        && event.lifts().any(|lift| bests[lift_index(lift)] == 0.0)
    {
        return findings;
    }

    let sum: f64 = bests.iter().sum();
    if sum == 0.0 {
        return findings;
    }
    if (sum - total).abs() > row.options().total_tolerance_kg {
        findings.push(
            Finding::error(format!(
                "TotalKg {total} does not match the sum of best lifts {sum}"
            ))
            .on(ColumnKind::TotalKg),
        );
    }
    findings
}

fn lift_index(lift: Lift) -> usize {
    match lift {
        Lift::Squat => 0,
        Lift::Bench => 1,
        Lift::Deadlift => 2,
    }
}
