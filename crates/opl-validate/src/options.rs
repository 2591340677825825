//! Tunable thresholds for the plausibility checks.
//!
//! The defaults are historical constants that need periodic updating, so they
//! live in data rather than in the checks themselves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::WeightClassCatalog;
use crate::error::ConfigError;

/// Thresholds used by cell and row checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckOptions {
    /// Ages below this are warned about.
    pub min_age: i64,
    /// Ages above this are warned about.
    pub max_age: i64,
    /// Birth years must be strictly after this year, or a warning is raised.
    pub birth_year_floor: i32,
    /// Birth years must be strictly before this year, or a warning is raised.
    pub birth_year_ceiling: i32,
    /// Bodyweights below this are implausible outside youth divisions.
    pub min_bodyweight_kg: f64,
    pub max_bodyweight_kg: f64,
    /// Weight classes below this are implausible.
    pub min_weight_class_kg: f64,
    /// Female lifters in a class above this are an error.
    pub max_female_weight_class_kg: f64,
    /// Allowed absolute difference between TotalKg and the sum of best lifts.
    pub total_tolerance_kg: f64,
    /// Path components naming federations whose results software fills in the
    /// lowest class when bodyweight is missing. For these, a weight class
    /// without a bodyweight is an error.
    pub blank_bodyweight_sources: Vec<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            min_age: 5,
            max_age: 100,
            birth_year_floor: 1900,
            birth_year_ceiling: 2014,
            min_bodyweight_kg: 19.0,
            max_bodyweight_kg: 300.0,
            min_weight_class_kg: 30.0,
            max_female_weight_class_kg: 120.0,
            total_tolerance_kg: 0.5,
            blank_bodyweight_sources: vec!["usapl".to_string()],
        }
    }
}

impl CheckOptions {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when the birth year lies strictly inside the plausibility window.
    pub fn birth_year_plausible(&self, year: i32) -> bool {
        year > self.birth_year_floor && year < self.birth_year_ceiling
    }

    /// True when any component of `source` names a federation with the
    /// blank-bodyweight quirk.
    pub fn is_blank_bodyweight_source(&self, source: &Path) -> bool {
        source.components().any(|component| {
            let component = component.as_os_str().to_string_lossy();
            self.blank_bodyweight_sources
                .iter()
                .any(|name| component.eq_ignore_ascii_case(name))
        })
    }
}

/// Everything a check needs besides the table itself.
#[derive(Debug, Clone, Default)]
pub struct CheckSettings {
    pub options: CheckOptions,
    pub catalog: WeightClassCatalog,
}

impl CheckSettings {
    pub fn new(options: CheckOptions, catalog: WeightClassCatalog) -> Self {
        Self { options, catalog }
    }

    /// Load settings, falling back to the built-in defaults for anything not given.
    pub fn load(options: Option<&Path>, classes: Option<&Path>) -> Result<Self, ConfigError> {
        let options = match options {
            Some(path) => CheckOptions::from_toml_path(path)?,
            None => CheckOptions::default(),
        };
        let catalog = match classes {
            Some(path) => WeightClassCatalog::from_path(path)?,
            None => WeightClassCatalog::default(),
        };
        Ok(Self { options, catalog })
    }
}
