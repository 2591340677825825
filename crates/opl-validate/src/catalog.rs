//! Weight-class catalog loaded from CSV.
//!
//! Each row names a federation scheme, a sex, and one class of that scheme.
//! The catalog is deliberately data: new schemes appear every few years and
//! the list will never be complete.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use opl_model::{Sex, WeightClass};

use crate::error::ConfigError;

/// Built-in catalog shipped with the crate.
const DEFAULT_CLASSES: &str = include_str!("../data/weight_classes.csv");

/// One `scheme,sex,class` row.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightClassEntry {
    pub scheme: String,
    pub sex: Sex,
    pub class: WeightClass,
}

#[derive(Debug, Clone, Copy, Default)]
struct Usage {
    men: bool,
    women: bool,
}

/// Lookup table over all known weight classes.
#[derive(Debug, Clone)]
pub struct WeightClassCatalog {
    entries: Vec<WeightClassEntry>,
    /// Canonical class text -> which sexes use it.
    usage: BTreeMap<String, Usage>,
}

impl Default for WeightClassCatalog {
    fn default() -> Self {
        Self::from_csv_str(DEFAULT_CLASSES, "built-in weight classes")
            .expect("built-in weight classes are valid")
    }
}

impl WeightClassCatalog {
    pub fn from_entries(entries: Vec<WeightClassEntry>) -> Self {
        let mut usage: BTreeMap<String, Usage> = BTreeMap::new();
        for entry in &entries {
            let slot = usage.entry(entry.class.canonical()).or_default();
            match entry.sex {
                Sex::M => slot.men = true,
                Sex::F => slot.women = true,
            }
        }
        Self { entries, usage }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_reader(file, &path.display().to_string())
    }

    pub fn from_csv_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        Self::from_reader(text.as_bytes(), origin)
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, ConfigError> {
        let csv_error = |source| ConfigError::Csv {
            origin: origin.to_string(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers().map_err(csv_error)?.clone();
        let scheme_idx = find_column(&headers, "scheme", origin)?;
        let sex_idx = find_column(&headers, "sex", origin)?;
        let class_idx = find_column(&headers, "class", origin)?;

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result.map_err(csv_error)?;
            let line = record.position().map_or(0, csv::Position::line);
            let invalid = |message: String| ConfigError::InvalidClass {
                origin: origin.to_string(),
                line,
                message,
            };
            let scheme = record.get(scheme_idx).unwrap_or("").to_string();
            let sex = record
                .get(sex_idx)
                .unwrap_or("")
                .parse::<Sex>()
                .map_err(|e| invalid(e.to_string()))?;
            let class = record
                .get(class_idx)
                .unwrap_or("")
                .parse::<WeightClass>()
                .map_err(|e| invalid(e.to_string()))?;
            entries.push(WeightClassEntry { scheme, sex, class });
        }
        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[WeightClassEntry] {
        &self.entries
    }

    pub fn schemes(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|entry| entry.scheme.as_str())
            .collect()
    }

    /// Whether any scheme uses this class.
    pub fn is_known(&self, class: &WeightClass) -> bool {
        self.usage.contains_key(&class.canonical())
    }

    /// The sex implied by a class that only one sex's schemes use.
    pub fn implied_sex(&self, class: &WeightClass) -> Option<Sex> {
        match self.usage.get(&class.canonical()) {
            Some(Usage {
                men: true,
                women: false,
            }) => Some(Sex::M),
            Some(Usage {
                men: false,
                women: true,
            }) => Some(Sex::F),
            _ => None,
        }
    }

    /// Canonical texts of classes used only in men's schemes.
    pub fn men_only(&self) -> Vec<&str> {
        self.single_sex(Sex::M)
    }

    /// Canonical texts of classes used only in women's schemes.
    pub fn women_only(&self) -> Vec<&str> {
        self.single_sex(Sex::F)
    }

    fn single_sex(&self, sex: Sex) -> Vec<&str> {
        self.usage
            .iter()
            .filter(|(_, usage)| match sex {
                Sex::M => usage.men && !usage.women,
                Sex::F => usage.women && !usage.men,
            })
            .map(|(key, _)| key.as_str())
            .collect()
    }
}

fn find_column(
    headers: &csv::StringRecord,
    name: &str,
    origin: &str,
) -> Result<usize, ConfigError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ConfigError::InvalidClass {
            origin: origin.to_string(),
            line: 1,
            message: format!("missing column '{name}'"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(text: &str) -> WeightClass {
        text.parse().unwrap()
    }

    #[test]
    fn test_default_catalog_loads() {
        let catalog = WeightClassCatalog::default();
        assert!(!catalog.entries().is_empty());
        assert!(catalog.schemes().contains("ipf-2020"));
        assert!(catalog.is_known(&class("83")));
        assert!(catalog.is_known(&class("82.5")));
        assert!(catalog.is_known(&class("120+")));
        assert!(!catalog.is_known(&class("81")));
    }

    #[test]
    fn test_implied_sex() {
        let catalog = WeightClassCatalog::default();
        assert_eq!(catalog.implied_sex(&class("83")), Some(Sex::M));
        assert_eq!(catalog.implied_sex(&class("140+")), Some(Sex::M));
        assert_eq!(catalog.implied_sex(&class("63")), Some(Sex::F));
        assert_eq!(catalog.implied_sex(&class("84+")), Some(Sex::F));
        assert_eq!(catalog.implied_sex(&class("52")), None);
        assert_eq!(catalog.implied_sex(&class("82.5")), None);
        assert_eq!(catalog.implied_sex(&class("81")), None);
    }

    #[test]
    fn test_single_sex_lists_are_disjoint() {
        let catalog = WeightClassCatalog::default();
        let men = catalog.men_only();
        let women = catalog.women_only();
        assert!(men.contains(&"120+"));
        assert!(women.contains(&"57"));
        assert!(men.iter().all(|class| !women.contains(class)));
    }

    #[test]
    fn test_invalid_rows_are_reported_with_line() {
        let text = "scheme,sex,class\nx,M,83\nx,Q,90\n";
        let error = WeightClassCatalog::from_csv_str(text, "test").unwrap_err();
        assert!(matches!(error, ConfigError::InvalidClass { line: 3, .. }));

        let error = WeightClassCatalog::from_csv_str("scheme,class\nx,83\n", "test").unwrap_err();
        assert!(error.to_string().contains("missing column 'sex'"));
    }
}
