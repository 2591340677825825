use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LiteralKind, ModelError};

/// A weight class such as `83` or `120+`.
///
/// A trailing `+` marks an open-ended super-heavyweight class whose `kg`
/// value is the floor rather than the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct WeightClass {
    pub kg: f64,
    pub super_heavy: bool,
}

impl WeightClass {
    pub fn new(kg: f64, super_heavy: bool) -> Self {
        Self { kg, super_heavy }
    }

    /// Shortest text form: `82.5`, `83`, `120+`. Used as a lookup key.
    pub fn canonical(&self) -> String {
        if self.super_heavy {
            format!("{}+", self.kg)
        } else {
            format!("{}", self.kg)
        }
    }

    /// Whether a lifter of this bodyweight may compete in the class.
    pub fn admits(&self, bodyweight_kg: f64) -> bool {
        if self.super_heavy {
            bodyweight_kg > self.kg
        } else {
            bodyweight_kg <= self.kg
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for WeightClass {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, super_heavy) = match s.strip_suffix('+') {
            Some(number) => (number, true),
            None => (s, false),
        };
        number
            .parse::<f64>()
            .ok()
            .filter(|kg| kg.is_finite())
            .map(|kg| WeightClass::new(kg, super_heavy))
            .ok_or_else(|| ModelError::unrecognized(LiteralKind::WeightClass, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_class() {
        let class: WeightClass = "120+".parse().unwrap();
        assert!(class.super_heavy);
        assert_eq!(class.kg, 120.0);
        assert_eq!(class.canonical(), "120+");

        let class: WeightClass = "82.50".parse().unwrap();
        assert_eq!(class.canonical(), "82.5");

        assert!("SHW".parse::<WeightClass>().is_err());
        assert!("+".parse::<WeightClass>().is_err());
    }

    #[test]
    fn test_admits() {
        let open: WeightClass = "120+".parse().unwrap();
        assert!(open.admits(120.1));
        assert!(!open.admits(120.0));

        let class: WeightClass = "83".parse().unwrap();
        assert!(class.admits(83.0));
        assert!(!class.admits(83.1));
    }
}
