//! Structural checks on the column-name set of a table.
//!
//! Every check runs; none stops the others.

use std::collections::BTreeMap;

use opl_model::{ColumnKind, Lift};

use crate::context::{Finding, HeaderMatch};

/// Columns every table must have.
const REQUIRED_COLUMNS: &[ColumnKind] = &[
    ColumnKind::Name,
    ColumnKind::Sex,
    ColumnKind::Equipment,
    ColumnKind::TotalKg,
    ColumnKind::Place,
];

/// Check the header row.
pub fn check(columns: &[String]) -> Vec<Finding> {
    let mut findings = Vec::new();
    required(columns, &mut findings);
    recognized(columns, &mut findings);
    duplicates(columns, &mut findings);
    best_columns(columns, &mut findings);
    findings
}

fn has(columns: &[String], kind: ColumnKind) -> bool {
    columns.iter().any(|column| column == kind.as_str())
}

fn required(columns: &[String], findings: &mut Vec<Finding>) {
    for kind in REQUIRED_COLUMNS {
        if !has(columns, *kind) {
            findings.push(Finding::error(format!("Missing required column '{kind}'")));
        }
    }
    if !has(columns, ColumnKind::BodyweightKg) && !has(columns, ColumnKind::WeightClassKg) {
        findings.push(Finding::error(
            "Missing both 'BodyweightKg' and 'WeightClassKg' columns; at least one is required",
        ));
    }
}

fn recognized(columns: &[String], findings: &mut Vec<Finding>) {
    for column in columns {
        match HeaderMatch::resolve(column) {
            HeaderMatch::Known(_) | HeaderMatch::Disambiguated(_) => {}
            HeaderMatch::MalformedSuffix(kind) => findings.push(Finding::error(format!(
                "Column '{column}' has a malformed disambiguation suffix; expected '{kind}#N' with N a positive integer"
            ))),
            HeaderMatch::Unknown => {
                findings.push(Finding::error(format!("Unknown column '{column}'")));
            }
        }
    }
}

fn duplicates(columns: &[String], findings: &mut Vec<Finding>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for column in columns {
        *counts.entry(column.as_str()).or_default() += 1;
    }
    for column in columns {
        if let Some(count) = counts.remove(column.as_str())
            && count > 1
        {
            findings.push(Finding::error(format!(
                "Column '{column}' appears {count} times"
            )));
        }
    }
}

fn best_columns(columns: &[String], findings: &mut Vec<Finding>) {
    for lift in Lift::all() {
        let best = lift.best_column();
        let mentions_lift = columns.iter().any(|column| column.contains(lift.as_str()));
        if mentions_lift && !has(columns, best) {
            findings.push(Finding::warning(format!(
                "{lift} columns are present without a '{best}' column"
            )));
        }
    }
}
