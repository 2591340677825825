//! Attempt sequences and best-lift reconciliation.
//!
//! Attempt values are signed: a negative number is a failed attempt at that
//! weight. Empty cells mean the attempt was not taken.

use opl_model::{Lift, Place};

use crate::context::{Finding, RowView};

/// Non-empty, numeric, non-zero attempts of one lift in order.
fn attempts(row: &RowView<'_>, lift: Lift) -> Vec<f64> {
    lift.attempt_columns()
        .into_iter()
        .filter_map(|kind| row.number(kind))
        .filter(|value| *value != 0.0)
        .collect()
}

/// Attempt weights never go down, whether or not the attempt succeeded.
pub fn check_order(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for lift in Lift::all() {
        let values = attempts(row, *lift);
        if let Some(pair) = values.windows(2).find(|pair| pair[1].abs() < pair[0].abs()) {
            findings.push(Finding::warning(format!(
                "{lift} attempts go down: {} follows {}",
                pair[1], pair[0]
            )));
        }
    }
    findings
}

/// A weight that was already made should not be attempted again.
pub fn check_retakes(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for lift in Lift::all() {
        let values = attempts(row, *lift);
        let retaken = values.iter().enumerate().find_map(|(idx, made)| {
            (*made > 0.0 && values[idx + 1..].iter().any(|later| later.abs() == *made))
                .then_some(*made)
        });
        if let Some(weight) = retaken {
            findings.push(Finding::warning(format!(
                "{lift} attempt at {weight} was made and then attempted again"
            )));
        }
    }
    findings
}

/// Best columns must equal the highest of the first three attempts.
///
/// The fourth attempt is a record attempt and never counts toward the best.
pub fn check_best(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    // Doping disqualifications void every lift.
    if row.place() == Some(Place::DD) {
        return findings;
    }

    for lift in Lift::all() {
        let best_column = lift.best_column();
        if !row.has(best_column) {
            continue;
        }
        let [first, second, third, _] = lift.attempt_columns();
        let values: Option<Vec<f64>> = [first, second, third]
            .into_iter()
            .map(|kind| row.number_or_zero(kind))
            .collect();
        // Malformed attempts are reported by the cell validators.
        let Some(values) = values else {
            continue;
        };
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best_text = row.text(best_column);

        if max < 0.0 {
            if !best_text.is_empty() {
                findings.push(
                    Finding::error(format!(
                        "{best_column} is '{best_text}' but every {lift} attempt failed; it must be empty"
                    ))
                    .on(best_column),
                );
            }
        } else if max > 0.0 {
            if best_text.is_empty() {
                findings.push(
                    Finding::error(format!(
                        "{best_column} is empty but the best {lift} attempt was {max}"
                    ))
                    .on(best_column),
                );
            } else if let Some(best) = row.number(best_column)
                && best != max
            {
                findings.push(
                    Finding::error(format!(
                        "{best_column} is {best} but the best {lift} attempt was {max}"
                    ))
                    .on(best_column),
                );
            }
        }
    }
    findings
}
