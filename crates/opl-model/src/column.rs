//! Known column names of an `entries.csv` table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Lift;

/// Every column the checker recognises.
///
/// Headers outside this set are reported as unknown rather than skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnKind {
    // Lifter names
    Name,
    CyrillicName,
    GreekName,
    JapaneseName,
    KoreanName,
    ChineseName,

    // Lifter attributes
    Sex,
    Age,
    BirthYear,
    BirthDate,
    State,
    Tested,

    // Competition entry
    Place,
    Event,
    Division,
    Equipment,
    BodyweightKg,
    WeightClassKg,
    TotalKg,

    // Lifts
    BestSquatKg,
    Squat1Kg,
    Squat2Kg,
    Squat3Kg,
    Squat4Kg,
    BestBenchKg,
    Bench1Kg,
    Bench2Kg,
    Bench3Kg,
    Bench4Kg,
    BestDeadliftKg,
    Deadlift1Kg,
    Deadlift2Kg,
    Deadlift3Kg,
    Deadlift4Kg,

    // Informational, never checked
    InternationalName,
    Team,
    Country,
    AgeClass,
    Category,
    School,
    University,
    CollegeUniversity,
    Instagram,
    Hometown,
}

impl ColumnKind {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::CyrillicName,
            Self::GreekName,
            Self::JapaneseName,
            Self::KoreanName,
            Self::ChineseName,
            Self::Sex,
            Self::Age,
            Self::BirthYear,
            Self::BirthDate,
            Self::State,
            Self::Tested,
            Self::Place,
            Self::Event,
            Self::Division,
            Self::Equipment,
            Self::BodyweightKg,
            Self::WeightClassKg,
            Self::TotalKg,
            Self::BestSquatKg,
            Self::Squat1Kg,
            Self::Squat2Kg,
            Self::Squat3Kg,
            Self::Squat4Kg,
            Self::BestBenchKg,
            Self::Bench1Kg,
            Self::Bench2Kg,
            Self::Bench3Kg,
            Self::Bench4Kg,
            Self::BestDeadliftKg,
            Self::Deadlift1Kg,
            Self::Deadlift2Kg,
            Self::Deadlift3Kg,
            Self::Deadlift4Kg,
            Self::InternationalName,
            Self::Team,
            Self::Country,
            Self::AgeClass,
            Self::Category,
            Self::School,
            Self::University,
            Self::CollegeUniversity,
            Self::Instagram,
            Self::Hometown,
        ]
    }

    /// Header text exactly as it appears in a table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CyrillicName => "CyrillicName",
            Self::GreekName => "GreekName",
            Self::JapaneseName => "JapaneseName",
            Self::KoreanName => "KoreanName",
            Self::ChineseName => "ChineseName",
            Self::Sex => "Sex",
            Self::Age => "Age",
            Self::BirthYear => "BirthYear",
            Self::BirthDate => "BirthDate",
            Self::State => "State",
            Self::Tested => "Tested",
            Self::Place => "Place",
            Self::Event => "Event",
            Self::Division => "Division",
            Self::Equipment => "Equipment",
            Self::BodyweightKg => "BodyweightKg",
            Self::WeightClassKg => "WeightClassKg",
            Self::TotalKg => "TotalKg",
            Self::BestSquatKg => "BestSquatKg",
            Self::Squat1Kg => "Squat1Kg",
            Self::Squat2Kg => "Squat2Kg",
            Self::Squat3Kg => "Squat3Kg",
            Self::Squat4Kg => "Squat4Kg",
            Self::BestBenchKg => "BestBenchKg",
            Self::Bench1Kg => "Bench1Kg",
            Self::Bench2Kg => "Bench2Kg",
            Self::Bench3Kg => "Bench3Kg",
            Self::Bench4Kg => "Bench4Kg",
            Self::BestDeadliftKg => "BestDeadliftKg",
            Self::Deadlift1Kg => "Deadlift1Kg",
            Self::Deadlift2Kg => "Deadlift2Kg",
            Self::Deadlift3Kg => "Deadlift3Kg",
            Self::Deadlift4Kg => "Deadlift4Kg",
            Self::InternationalName => "InternationalName",
            Self::Team => "Team",
            Self::Country => "Country",
            Self::AgeClass => "AgeClass",
            Self::Category => "Category",
            Self::School => "School",
            Self::University => "University",
            Self::CollegeUniversity => "CollegeUniversity",
            Self::Instagram => "Instagram",
            Self::Hometown => "Hometown",
        }
    }

    /// Exact, case-sensitive header lookup.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == header)
    }

    /// Columns holding a lifter name, which may carry a `#N` disambiguation suffix.
    pub fn is_name(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::CyrillicName
                | Self::GreekName
                | Self::JapaneseName
                | Self::KoreanName
                | Self::ChineseName
        )
    }

    /// Informational columns whose contents always pass.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            Self::InternationalName
                | Self::Team
                | Self::Country
                | Self::AgeClass
                | Self::Category
                | Self::School
                | Self::University
                | Self::CollegeUniversity
                | Self::Instagram
                | Self::Hometown
        )
    }

    /// The lift family a best or attempt column belongs to.
    pub fn lift(&self) -> Option<Lift> {
        Lift::all()
            .iter()
            .copied()
            .find(|lift| lift.columns().contains(self))
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split `text` at a single `#` into the base and the raw disambiguation suffix.
///
/// Returns `None` for the suffix when there is no `#`. Callers decide what to do
/// with text containing more than one `#`; here everything after the first `#`
/// is the suffix.
pub fn split_disambiguation(text: &str) -> (&str, Option<&str>) {
    match text.split_once('#') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (text, None),
    }
}

/// A disambiguation suffix must be a positive integer.
pub fn is_valid_disambiguation(suffix: &str) -> bool {
    !suffix.is_empty()
        && suffix.chars().all(|ch| ch.is_ascii_digit())
        && suffix.parse::<u32>().is_ok_and(|id| id > 0)
}
