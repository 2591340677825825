//! Numeric columns: lifts, totals, age, bodyweight and weight class.

use opl_model::{ColumnKind, WeightClass};

use crate::context::{Finding, RowView, parse_number};

/// Best and attempt columns. Negative values are failed attempts.
pub fn check_lift(kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    match parse_number(text) {
        None => vec![not_a_number(kind, text)],
        Some(value) if value == 0.0 => vec![Finding::error(format!(
            "{kind} is zero; leave the cell empty for a lift that was not attempted"
        ))],
        Some(_) => Vec::new(),
    }
}

/// Columns that must hold a number greater than zero, such as `TotalKg`.
pub fn check_positive(kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    positive(kind, text).err().into_iter().collect()
}

pub fn check_age(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let Ok(age) = text.parse::<i64>() else {
        return vec![Finding::error(format!("Age '{text}' is not an integer"))];
    };
    let options = row.options();
    if age < options.min_age {
        vec![Finding::warning(format!("Age unexpectedly low: {age}"))]
    } else if age > options.max_age {
        vec![Finding::warning(format!("Age unexpectedly high: {age}"))]
    } else {
        Vec::new()
    }
}

pub fn check_bodyweight(kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let bodyweight = match positive(kind, text) {
        Ok(value) => value,
        Err(finding) => return vec![finding],
    };
    let options = row.options();
    // Youth divisions legitimately have very light lifters.
    let youth = row.text(ColumnKind::Division).to_lowercase().contains('y');
    if bodyweight < options.min_bodyweight_kg && !youth {
        vec![Finding::warning(format!(
            "Bodyweight {text} is unexpectedly low"
        ))]
    } else if bodyweight > options.max_bodyweight_kg {
        vec![Finding::warning(format!(
            "Bodyweight {text} is unexpectedly high"
        ))]
    } else {
        Vec::new()
    }
}

pub fn check_weight_class(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let Ok(class) = text.parse::<WeightClass>() else {
        return vec![Finding::error(format!(
            "WeightClassKg '{text}' must be a number with an optional trailing '+'"
        ))];
    };
    let mut findings = Vec::new();
    if class.kg < row.options().min_weight_class_kg {
        findings.push(Finding::warning(format!(
            "Weight class {text} is unexpectedly low"
        )));
    }
    if !row.catalog().is_known(&class) {
        findings.push(Finding::warning(format!(
            "Weight class '{text}' is not in any known federation scheme"
        )));
    }
    findings
}

fn positive(kind: ColumnKind, text: &str) -> Result<f64, Finding> {
    match parse_number(text) {
        None => Err(not_a_number(kind, text)),
        Some(value) if value <= 0.0 => Err(Finding::error(format!(
            "{kind} '{text}' must be greater than zero"
        ))),
        Some(value) => Ok(value),
    }
}

fn not_a_number(kind: ColumnKind, text: &str) -> Finding {
    Finding::error(format!("{kind} '{text}' is not a number"))
}
