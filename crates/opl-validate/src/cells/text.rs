//! Free-text columns with format heuristics.

use std::sync::LazyLock;

use opl_model::ColumnKind;
use regex::Regex;

use crate::context::{Finding, RowView};

/// Words in a division name that describe equipment.
const EQUIPMENT_WORDS: &[&str] = &[
    "raw",
    "wraps",
    "single",
    "multi",
    "singleply",
    "multiply",
    "equipped",
];

/// `83kg`, `198 lbs` and similar anywhere in the text.
static UNIT_CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d\s?(kg|kgs|lb|lbs)\b").expect("Invalid weight unit regex")
});

/// A standalone word like `-83` or `-52.5`.
static MINUS_CLASS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\s)-\d+(\.\d+)?(\s|$)").expect("Invalid minus class regex")
});

pub fn check_division(_kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();

    if text.contains('"') {
        findings.push(Finding::error(format!(
            "Division '{text}' contains a double quote"
        )));
    }
    if text.contains("  ") {
        findings.push(Finding::warning(format!(
            "Division '{text}' has irregular spacing"
        )));
    }
    if text.ends_with('-') {
        findings.push(Finding::warning(format!(
            "Division '{text}' ends in a hyphen"
        )));
    }

    let lower = text.to_lowercase();
    if lower
        .split(|ch: char| !ch.is_alphanumeric())
        .any(|word| EQUIPMENT_WORDS.contains(&word))
    {
        findings.push(Finding::warning(format!(
            "Division '{text}' appears to encode equipment; use the Equipment column"
        )));
    }
    if UNIT_CLASS_REGEX.is_match(text) || MINUS_CLASS_REGEX.is_match(text) {
        findings.push(Finding::warning(format!(
            "Division '{text}' appears to encode a weight class; use the WeightClassKg column"
        )));
    }

    if lower.contains("guest") && row.has(ColumnKind::Place) {
        let place = row.text(ColumnKind::Place);
        if place != "G" && place != "DQ" {
            findings.push(Finding::warning(format!(
                "Guest division '{text}' should have Place G or DQ, not '{place}'"
            )));
        }
    }

    findings
}

pub fn check_state(_kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    if text.contains("  ") {
        findings.push(Finding::warning(format!(
            "State '{text}' contains consecutive spaces"
        )));
    }
    if !text.chars().all(|ch| ch.is_alphabetic() || ch.is_whitespace()) {
        findings.push(Finding::error(format!(
            "State '{text}' may only contain letters and spaces"
        )));
    }
    findings
}

/// Informational columns.
pub fn ignore(_kind: ColumnKind, _text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    Vec::new()
}
