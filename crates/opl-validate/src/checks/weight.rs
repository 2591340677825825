//! Weight class against sex and bodyweight.

use opl_model::{ColumnKind, Sex};

use crate::context::{Finding, RowView};

/// Classes that only exist for one sex hint at a swapped Sex cell.
pub fn check_sex(row: &RowView<'_>) -> Option<Finding> {
    let sex = row.sex()?;
    let class = row.weight_class()?;
    let implied = row.catalog().implied_sex(&class)?;
    (implied != sex).then(|| {
        let group = match implied {
            Sex::M => "men",
            Sex::F => "women",
        };
        Finding::warning(format!(
            "Weight class {class} is only used for {group}, but Sex is '{sex}'"
        ))
        .on(ColumnKind::Sex)
    })
}

pub fn check_bodyweight(row: &RowView<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let Some(class) = row.weight_class() else {
        return findings;
    };
    let options = row.options();

    if row.sex() == Some(Sex::F) && class.kg > options.max_female_weight_class_kg {
        findings.push(
            Finding::error(format!(
                "Female lifter in weight class {class} is implausible"
            ))
            .on(ColumnKind::WeightClassKg),
        );
    }

    if row.is_blank(ColumnKind::BodyweightKg) {
        if options.is_blank_bodyweight_source(row.source()) {
            findings.push(
                Finding::error(format!(
                    "{} has WeightClassKg {class} but no BodyweightKg; this federation's results default a missing bodyweight to the lowest class",
                    row.lifter()
                ))
                .on(ColumnKind::BodyweightKg),
            );
        }
        return findings;
    }

    if let Some(bodyweight) = row.number(ColumnKind::BodyweightKg)
        && !class.admits(bodyweight)
    {
        let message = if class.super_heavy {
            format!(
                "{} weighs {bodyweight} but is in the {class} class; super-heavyweights must weigh more than {}",
                row.lifter(),
                class.kg
            )
        } else {
            format!(
                "{} weighs {bodyweight} but is in the {class} class",
                row.lifter()
            )
        };
        findings.push(Finding::error(message).on(ColumnKind::WeightClassKg));
    }

    findings
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use opl_model::Severity;

    use super::*;
    use crate::checks::test_support::{run_row, run_row_from};
    use crate::options::CheckSettings;

    fn sex(cells: &[(&str, &str)]) -> Vec<Finding> {
        run_row(cells, |row| check_sex(row).into_iter().collect())
    }

    #[test]
    fn test_sex_implied_by_class() {
        assert!(sex(&[("Sex", "M"), ("WeightClassKg", "83")]).is_empty());
        assert_eq!(sex(&[("Sex", "F"), ("WeightClassKg", "83")]).len(), 1);
        assert_eq!(sex(&[("Sex", "M"), ("WeightClassKg", "84+")]).len(), 1);
        // Shared by both sexes in some scheme.
        assert!(sex(&[("Sex", "F"), ("WeightClassKg", "52")]).is_empty());
        assert!(sex(&[("Sex", "F"), ("WeightClassKg", "81")]).is_empty());
    }

    #[test]
    fn test_heavy_female_class() {
        let findings = run_row(&[("Sex", "F"), ("WeightClassKg", "125")], check_bodyweight);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert!(run_row(&[("Sex", "M"), ("WeightClassKg", "125")], check_bodyweight).is_empty());
    }

    #[test]
    fn test_class_admits_bodyweight() {
        let check = |bw: &str, class: &str| {
            run_row(
                &[("Name", "Jane Doe"), ("BodyweightKg", bw), ("WeightClassKg", class)],
                check_bodyweight,
            )
        };
        assert!(check("83", "83").is_empty());
        assert!(check("120.1", "120+").is_empty());
        assert_eq!(check("83.1", "83").len(), 1);
        assert_eq!(check("120", "120+").len(), 1);
        assert_snapshot!(
            check("110", "120+")[0].message,
            @"Jane Doe weighs 110 but is in the 120+ class; super-heavyweights must weigh more than 120"
        );
    }

    #[test]
    fn test_blank_bodyweight_source() {
        let cells = [("Name", "Jane Doe"), ("BodyweightKg", ""), ("WeightClassKg", "63")];
        let settings = CheckSettings::default();
        let flagged = run_row_from(
            &cells,
            "meet-data/usapl/1901/entries.csv",
            &settings,
            check_bodyweight,
        );
        assert_eq!(flagged.len(), 1);
        let other = run_row_from(
            &cells,
            "meet-data/uspa/1901/entries.csv",
            &settings,
            check_bodyweight,
        );
        assert!(other.is_empty());
    }
}
