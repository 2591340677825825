//! Lifter name format.

use opl_model::{ColumnKind, is_valid_disambiguation, split_disambiguation};

use crate::context::{Finding, RowView};

/// Characters allowed in a Latin-script `Name` besides letters.
const NAME_PUNCTUATION: &[char] = &[' ', '\'', '-', '.'];

/// Punctuated generational suffixes; names must use the bare form.
const PUNCTUATED_SUFFIXES: &[(&str, &str)] =
    &[("Jr.", "Jr"), ("JR.", "Jr"), ("Sr.", "Sr"), ("SR.", "Sr")];

pub fn check_name(kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let Some(name) = strip_disambiguation(kind, text, &mut findings) else {
        return findings;
    };
    if name.is_empty() {
        return findings;
    }

    if let Some(ch) = name
        .chars()
        .find(|ch| !ch.is_alphabetic() && !NAME_PUNCTUATION.contains(ch))
    {
        findings.push(Finding::error(format!(
            "Name '{name}' contains disallowed character '{ch}'"
        )));
    }

    for (punctuated, bare) in PUNCTUATED_SUFFIXES {
        if name.contains(punctuated) {
            findings.push(Finding::error(format!(
                "Name '{name}' should use '{bare}' instead of '{punctuated}'"
            )));
        }
    }
    if name.contains("Esq.") {
        findings.push(Finding::error(format!(
            "Name '{name}' must not include 'Esq.'"
        )));
    }

    if name.contains("  ") {
        findings.push(Finding::warning(format!(
            "Name '{name}' contains consecutive spaces"
        )));
    }

    if is_single_case(name) {
        findings.push(Finding::error(format!(
            "Name '{name}' must be in proper case"
        )));
    }

    check_parts(name, &mut findings);

    if name.ends_with(" DT") {
        findings.push(Finding::error(format!(
            "Name '{name}' ends in 'DT'; drug-test status belongs in the Tested column"
        )));
    }
    if name.ends_with(" Iii") || name.ends_with(" Ii") {
        findings.push(Finding::warning(format!(
            "Name '{name}' should end in uppercase 'II' or 'III'"
        )));
    }

    findings
}

/// Non-Latin name columns only get the suffix and spacing checks.
pub fn check_alternate_name(kind: ColumnKind, text: &str, _row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    if let Some(name) = strip_disambiguation(kind, text, &mut findings)
        && name.contains("  ")
    {
        findings.push(Finding::warning(format!(
            "{kind} '{name}' contains consecutive spaces"
        )));
    }
    findings
}

/// Remove a `#N` suffix, reporting malformed ones. `None` means the text is
/// too broken for further checks.
fn strip_disambiguation<'t>(
    kind: ColumnKind,
    text: &'t str,
    findings: &mut Vec<Finding>,
) -> Option<&'t str> {
    match text.matches('#').count() {
        0 => Some(text),
        1 => {
            let (base, suffix) = split_disambiguation(text);
            let suffix = suffix.unwrap_or("");
            if !is_valid_disambiguation(suffix) {
                findings.push(Finding::error(format!(
                    "{kind} '{text}' has a malformed disambiguation suffix '#{suffix}'"
                )));
            }
            Some(base.trim_end())
        }
        _ => {
            findings.push(Finding::error(format!(
                "{kind} '{text}' contains '#' more than once"
            )));
            None
        }
    }
}

/// All cased letters are uppercase, or all are lowercase.
fn is_single_case(name: &str) -> bool {
    let letters = || name.chars().filter(|ch| ch.is_alphabetic());
    let any_upper = letters().any(char::is_uppercase);
    let any_lower = letters().any(char::is_lowercase);
    any_upper != any_lower
}

fn check_parts(name: &str, findings: &mut Vec<Finding>) {
    let parts: Vec<&str> = name.split(' ').filter(|part| !part.is_empty()).collect();
    let (Some(first), Some(last)) = (parts.first(), parts.last()) else {
        return;
    };

    if *first == "Jr" || *first == "Sr" {
        findings.push(Finding::error(format!(
            "Name '{name}' starts with '{first}'; it belongs at the end"
        )));
    } else if starts_lowercase(first) {
        findings.push(Finding::error(format!(
            "Name '{name}' must start with an uppercase letter"
        )));
    }

    if parts.len() > 1 {
        if last.eq_ignore_ascii_case("jr") || last.eq_ignore_ascii_case("sr") {
            let expected = if last.eq_ignore_ascii_case("jr") { "Jr" } else { "Sr" };
            if *last != expected {
                findings.push(Finding::error(format!(
                    "Name '{name}' should end in '{expected}', not '{last}'"
                )));
            }
        } else if starts_lowercase(last) && !last.starts_with("d'") && !last.starts_with("de") {
            findings.push(Finding::error(format!(
                "Last name in '{name}' must start with an uppercase letter"
            )));
        }
    }

    if parts
        .iter()
        .any(|part| part.chars().count() >= 2 && part.starts_with('\'') && part.ends_with('\''))
    {
        findings.push(Finding::error(format!(
            "Name '{name}' contains a quoted nickname"
        )));
    }
}

fn starts_lowercase(part: &str) -> bool {
    part.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use opl_model::Severity;

    use super::*;
    use crate::context::Schema;
    use crate::options::CheckSettings;

    fn run(text: &str) -> Vec<Finding> {
        run_as(ColumnKind::Name, text)
    }

    fn run_as(kind: ColumnKind, text: &str) -> Vec<Finding> {
        let schema = Schema::new(&[kind.as_str().to_string()]);
        let fields = vec![text.to_string()];
        let settings = CheckSettings::default();
        let row = RowView::new(&schema, &fields, &settings, Path::new("entries.csv"));
        match kind {
            ColumnKind::Name => check_name(kind, text, &row),
            _ => check_alternate_name(kind, text, &row),
        }
    }

    fn errors(text: &str) -> usize {
        run(text)
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count()
    }

    fn warnings(text: &str) -> usize {
        run(text)
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .count()
    }

    #[test]
    fn test_good_names() {
        for name in [
            "John Smith",
            "Mary-Jane O'Neil",
            "John Smith Jr",
            "Anne de Vries",
            "Jean d'Arc",
            "Zoë Müller",
            "John Smith #2",
            "J. R. Smith",
            "Madonna",
        ] {
            assert!(run(name).is_empty(), "{name}: {:?}", run(name));
        }
    }

    #[test]
    fn test_proper_case() {
        let findings = run("JOHN SMITH");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Name 'JOHN SMITH' must be in proper case");
        assert!(errors("john smith") >= 1);
    }

    #[test]
    fn test_disambiguation_suffix() {
        assert_eq!(errors("John Smith #0"), 1);
        assert_eq!(errors("John Smith #a"), 1);
        assert_eq!(errors("John #1 Smith #2"), 1);
        assert!(run("John Smith #12").is_empty());
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(errors("John Smith3"), 1);
        assert_eq!(errors("John, Smith"), 1);
    }

    #[test]
    fn test_generational_suffixes() {
        assert_eq!(errors("John Smith Jr."), 1);
        assert_eq!(errors("John Smith SR."), 1);
        assert_eq!(errors("John Smith Esq."), 1);
        assert_eq!(errors("John Smith JR"), 1);
        assert_eq!(errors("Jr John Smith"), 1);
        assert_eq!(warnings("John Smith Iii"), 1);
        assert_eq!(warnings("John Smith Ii"), 1);
        assert!(run("John Smith III").is_empty());
    }

    #[test]
    fn test_capitalization_of_parts() {
        assert_eq!(errors("John smith"), 1);
        assert_eq!(errors("john Smith"), 1);
    }

    #[test]
    fn test_markers_and_nicknames() {
        assert_eq!(errors("John Smith DT"), 1);
        assert_eq!(errors("John 'Big' Smith"), 1);
    }

    #[test]
    fn test_consecutive_spaces_warn() {
        let findings = run("John  Smith");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_alternate_script_skips_casing_rules() {
        assert!(run_as(ColumnKind::CyrillicName, "ИВАН ИВАНОВ").is_empty());
        assert!(run_as(ColumnKind::CyrillicName, "Иван Иванов #3").is_empty());

        let findings = run_as(ColumnKind::CyrillicName, "Иван  Иванов");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_alternate_script_suffix() {
        let findings = run_as(ColumnKind::CyrillicName, "Иван Иванов #0");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(
            findings[0].message,
            "CyrillicName 'Иван Иванов #0' has a malformed disambiguation suffix '#0'"
        );

        let findings = run_as(ColumnKind::CyrillicName, "Иван #1 #2");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(
            findings[0].message,
            "CyrillicName 'Иван #1 #2' contains '#' more than once"
        );
    }
}
