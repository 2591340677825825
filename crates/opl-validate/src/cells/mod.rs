//! Per-cell validators and the registry that maps column kinds to them.
//!
//! Every validator sees one non-empty cell, the column kind it was dispatched
//! for, and a read-only view of the whole row.

mod dates;
mod literal;
mod name;
mod numeric;
mod text;

use opl_model::ColumnKind;

use crate::context::{Finding, RowView};

pub use dates::{check_birth_date, check_birth_year};
pub use literal::{check_equipment, check_event, check_place, check_sex, check_tested};
pub use name::{check_alternate_name, check_name};
pub use numeric::{check_age, check_bodyweight, check_lift, check_positive, check_weight_class};
pub use text::{check_division, check_state, ignore};

/// Shared signature of every cell validator.
pub type CellValidator = fn(ColumnKind, &str, &RowView<'_>) -> Vec<Finding>;

/// Validator for cells under a column of this kind.
pub fn validator_for(kind: ColumnKind) -> CellValidator {
    match kind {
        ColumnKind::Name => check_name,
        ColumnKind::CyrillicName
        | ColumnKind::GreekName
        | ColumnKind::JapaneseName
        | ColumnKind::KoreanName
        | ColumnKind::ChineseName => check_alternate_name,

        ColumnKind::Sex => check_sex,
        ColumnKind::Age => check_age,
        ColumnKind::BirthYear => check_birth_year,
        ColumnKind::BirthDate => check_birth_date,
        ColumnKind::State => check_state,
        ColumnKind::Tested => check_tested,

        ColumnKind::Place => check_place,
        ColumnKind::Event => check_event,
        ColumnKind::Division => check_division,
        ColumnKind::Equipment => check_equipment,
        ColumnKind::BodyweightKg => check_bodyweight,
        ColumnKind::WeightClassKg => check_weight_class,
        ColumnKind::TotalKg => check_positive,

        ColumnKind::BestSquatKg
        | ColumnKind::Squat1Kg
        | ColumnKind::Squat2Kg
        | ColumnKind::Squat3Kg
        | ColumnKind::Squat4Kg
        | ColumnKind::BestBenchKg
        | ColumnKind::Bench1Kg
        | ColumnKind::Bench2Kg
        | ColumnKind::Bench3Kg
        | ColumnKind::Bench4Kg
        | ColumnKind::BestDeadliftKg
        | ColumnKind::Deadlift1Kg
        | ColumnKind::Deadlift2Kg
        | ColumnKind::Deadlift3Kg
        | ColumnKind::Deadlift4Kg => check_lift,

        ColumnKind::InternationalName
        | ColumnKind::Team
        | ColumnKind::Country
        | ColumnKind::AgeClass
        | ColumnKind::Category
        | ColumnKind::School
        | ColumnKind::University
        | ColumnKind::CollegeUniversity
        | ColumnKind::Instagram
        | ColumnKind::Hometown => ignore,
    }
}

/// Run the registered validator and tag its findings with the column.
pub fn check_cell(kind: ColumnKind, text: &str, row: &RowView<'_>) -> Vec<Finding> {
    validator_for(kind)(kind, text, row)
        .into_iter()
        .map(|finding| finding.on(kind))
        .collect()
}
