//! Closed enumerations for the literal values allowed in result tables.
//!
//! Each type parses from the exact text used in `entries.csv` files and
//! displays back to that same text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::column::ColumnKind;
use crate::error::{LiteralKind, ModelError};

/// Lifter sex as recorded in the `Sex` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::M),
            "F" => Ok(Sex::F),
            _ => Err(ModelError::unrecognized(LiteralKind::Sex, s)),
        }
    }
}

/// Equipment category a result was achieved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    Raw,
    Wraps,
    SinglePly,
    MultiPly,
    Straps,
}

impl Equipment {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Raw,
            Self::Wraps,
            Self::SinglePly,
            Self::MultiPly,
            Self::Straps,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Raw => "Raw",
            Equipment::Wraps => "Wraps",
            Equipment::SinglePly => "Single-ply",
            Equipment::MultiPly => "Multi-ply",
            Equipment::Straps => "Straps",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|equipment| equipment.as_str() == s)
            .ok_or_else(|| ModelError::unrecognized(LiteralKind::Equipment, s))
    }
}

/// Placing of a lifter within their division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
    /// Numeric placing.
    Rank(u32),
    /// Disqualified.
    DQ,
    /// No-show.
    NS,
    /// Guest lifter, not placed.
    G,
    /// Disqualified for a doping violation.
    DD,
}

impl Place {
    /// True for placings that mean the lifter has no valid total.
    pub fn is_disqualification(&self) -> bool {
        matches!(self, Place::DQ | Place::NS | Place::DD)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Rank(rank) => write!(f, "{rank}"),
            Place::DQ => f.write_str("DQ"),
            Place::NS => f.write_str("NS"),
            Place::G => f.write_str("G"),
            Place::DD => f.write_str("DD"),
        }
    }
}

impl FromStr for Place {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DQ" => Ok(Place::DQ),
            "NS" => Ok(Place::NS),
            "G" => Ok(Place::G),
            "DD" => Ok(Place::DD),
            _ => s
                .parse::<u32>()
                .map(Place::Rank)
                .map_err(|_| ModelError::unrecognized(LiteralKind::Place, s)),
        }
    }
}

/// One of the three competition lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    pub const fn all() -> &'static [Self] {
        &[Self::Squat, Self::Bench, Self::Deadlift]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Bench",
            Lift::Deadlift => "Deadlift",
        }
    }

    /// Letter used for this lift in the `Event` column.
    pub fn letter(&self) -> char {
        match self {
            Lift::Squat => 'S',
            Lift::Bench => 'B',
            Lift::Deadlift => 'D',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Lift::Squat),
            'B' => Some(Lift::Bench),
            'D' => Some(Lift::Deadlift),
            _ => None,
        }
    }

    pub fn best_column(&self) -> ColumnKind {
        match self {
            Lift::Squat => ColumnKind::BestSquatKg,
            Lift::Bench => ColumnKind::BestBenchKg,
            Lift::Deadlift => ColumnKind::BestDeadliftKg,
        }
    }

    /// Attempt columns in order; the fourth is a record attempt that does not count
    /// towards the best lift.
    pub fn attempt_columns(&self) -> [ColumnKind; 4] {
        match self {
            Lift::Squat => [
                ColumnKind::Squat1Kg,
                ColumnKind::Squat2Kg,
                ColumnKind::Squat3Kg,
                ColumnKind::Squat4Kg,
            ],
            Lift::Bench => [
                ColumnKind::Bench1Kg,
                ColumnKind::Bench2Kg,
                ColumnKind::Bench3Kg,
                ColumnKind::Bench4Kg,
            ],
            Lift::Deadlift => [
                ColumnKind::Deadlift1Kg,
                ColumnKind::Deadlift2Kg,
                ColumnKind::Deadlift3Kg,
                ColumnKind::Deadlift4Kg,
            ],
        }
    }

    /// Best column followed by every attempt column.
    pub fn columns(&self) -> [ColumnKind; 5] {
        let [a1, a2, a3, a4] = self.attempt_columns();
        [self.best_column(), a1, a2, a3, a4]
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of lifts a lifter competed in, e.g. `SBD` or `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Event {
    squat: bool,
    bench: bool,
    deadlift: bool,
}

impl Event {
    pub const FULL_POWER: Event = Event {
        squat: true,
        bench: true,
        deadlift: true,
    };

    pub fn contains(&self, lift: Lift) -> bool {
        match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
        }
    }

    pub fn lifts(&self) -> impl Iterator<Item = Lift> + '_ {
        Lift::all()
            .iter()
            .copied()
            .filter(|lift| self.contains(*lift))
    }

    fn insert(&mut self, lift: Lift) -> bool {
        let slot = match lift {
            Lift::Squat => &mut self.squat,
            Lift::Bench => &mut self.bench,
            Lift::Deadlift => &mut self.deadlift,
        };
        let fresh = !*slot;
        *slot = true;
        fresh
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lift in self.lifts() {
            write!(f, "{}", lift.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Event {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ModelError::unrecognized(LiteralKind::Event, s));
        }
        let mut event = Event::default();
        for letter in s.chars() {
            let lift = Lift::from_letter(letter)
                .ok_or_else(|| ModelError::unrecognized(LiteralKind::Event, s))?;
            if !event.insert(lift) {
                return Err(ModelError::RepeatedEventLetter {
                    text: s.to_string(),
                    letter,
                });
            }
        }
        Ok(event)
    }
}

/// Drug-testing status from the `Tested` column. An empty cell means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tested {
    Unknown,
    Yes,
    No,
}

impl FromStr for Tested {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Tested::Unknown),
            "Yes" => Ok(Tested::Yes),
            "No" => Ok(Tested::No),
            _ => Err(ModelError::unrecognized(LiteralKind::Tested, s)),
        }
    }
}
