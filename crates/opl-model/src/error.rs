use thiserror::Error;

/// Which closed literal set a parse was attempted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Sex,
    Equipment,
    Place,
    Event,
    Tested,
    WeightClass,
}

impl LiteralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiteralKind::Sex => "Sex",
            LiteralKind::Equipment => "Equipment",
            LiteralKind::Place => "Place",
            LiteralKind::Event => "Event",
            LiteralKind::Tested => "Tested",
            LiteralKind::WeightClass => "WeightClassKg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unrecognized {} literal: '{text}'", kind.as_str())]
    UnrecognizedLiteral { kind: LiteralKind, text: String },
    #[error("Event '{text}' repeats the letter '{letter}'")]
    RepeatedEventLetter { text: String, letter: char },
}

impl ModelError {
    pub(crate) fn unrecognized(kind: LiteralKind, text: &str) -> Self {
        Self::UnrecognizedLiteral {
            kind,
            text: text.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
