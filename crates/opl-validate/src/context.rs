//! Read-only views handed to every check.

use std::collections::HashMap;
use std::path::Path;

use opl_model::{
    ColumnKind, Equipment, Event, Place, Severity, Sex, WeightClass, is_valid_disambiguation,
    split_disambiguation,
};

use crate::catalog::WeightClassCatalog;
use crate::options::{CheckOptions, CheckSettings};

/// How a raw header resolved against the known columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch {
    /// Exact match.
    Known(ColumnKind),
    /// A name column carrying a well-formed `#N` suffix.
    Disambiguated(ColumnKind),
    /// A name column whose `#` suffix is not a positive integer.
    MalformedSuffix(ColumnKind),
    Unknown,
}

impl HeaderMatch {
    pub fn resolve(header: &str) -> Self {
        if let Some(kind) = ColumnKind::from_header(header) {
            return HeaderMatch::Known(kind);
        }
        let (base, suffix) = split_disambiguation(header);
        match (ColumnKind::from_header(base), suffix) {
            (Some(kind), Some(suffix)) if kind.is_name() => {
                if is_valid_disambiguation(suffix) {
                    HeaderMatch::Disambiguated(kind)
                } else {
                    HeaderMatch::MalformedSuffix(kind)
                }
            }
            _ => HeaderMatch::Unknown,
        }
    }

    /// The column kind whose validator applies to cells under this header.
    pub fn kind(&self) -> Option<ColumnKind> {
        match self {
            HeaderMatch::Known(kind)
            | HeaderMatch::Disambiguated(kind)
            | HeaderMatch::MalformedSuffix(kind) => Some(*kind),
            HeaderMatch::Unknown => None,
        }
    }
}

/// Column layout of one table, resolved once before rows are checked.
#[derive(Debug, Clone)]
pub struct Schema {
    headers: Vec<String>,
    kinds: Vec<Option<ColumnKind>>,
    index: HashMap<ColumnKind, usize>,
}

impl Schema {
    pub fn new(headers: &[String]) -> Self {
        let kinds: Vec<Option<ColumnKind>> = headers
            .iter()
            .map(|header| HeaderMatch::resolve(header).kind())
            .collect();
        let mut index = HashMap::new();
        for (idx, kind) in kinds.iter().enumerate() {
            // Lookups by kind only see exact headers; `Name#2` is checked as a
            // name but is not "the" Name column.
            if let Some(kind) = kind
                && ColumnKind::from_header(&headers[idx]).is_some()
            {
                index.entry(*kind).or_insert(idx);
            }
        }
        Self {
            headers: headers.to_vec(),
            kinds,
            index,
        }
    }

    pub fn has(&self, kind: ColumnKind) -> bool {
        self.index.contains_key(&kind)
    }

    pub fn index_of(&self, kind: ColumnKind) -> Option<usize> {
        self.index.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// `(header, resolved kind)` for every column in table order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, Option<ColumnKind>)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.kinds.iter().copied())
    }
}

/// A single row together with everything needed to interpret it.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a Schema,
    fields: &'a [String],
    settings: &'a CheckSettings,
    source: &'a Path,
}

impl<'a> RowView<'a> {
    pub fn new(
        schema: &'a Schema,
        fields: &'a [String],
        settings: &'a CheckSettings,
        source: &'a Path,
    ) -> Self {
        Self {
            schema,
            fields,
            settings,
            source,
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn fields(&self) -> &'a [String] {
        self.fields
    }

    pub fn options(&self) -> &'a CheckOptions {
        &self.settings.options
    }

    pub fn catalog(&self) -> &'a WeightClassCatalog {
        &self.settings.catalog
    }

    /// File the row came from.
    pub fn source(&self) -> &'a Path {
        self.source
    }

    pub fn has(&self, kind: ColumnKind) -> bool {
        self.schema.has(kind)
    }

    /// Cell text, or `None` when the table has no such column.
    pub fn get(&self, kind: ColumnKind) -> Option<&'a str> {
        self.schema
            .index_of(kind)
            .and_then(|idx| self.fields.get(idx))
            .map(String::as_str)
    }

    /// Cell text, empty when the column is absent.
    pub fn text(&self, kind: ColumnKind) -> &'a str {
        self.get(kind).unwrap_or("")
    }

    pub fn is_blank(&self, kind: ColumnKind) -> bool {
        self.text(kind).is_empty()
    }

    /// Parsed number; `None` for absent, empty, or malformed cells.
    pub fn number(&self, kind: ColumnKind) -> Option<f64> {
        parse_number(self.text(kind))
    }

    /// Like [`number`](Self::number) but an empty or absent cell reads as zero.
    /// Malformed text is still `None`.
    pub fn number_or_zero(&self, kind: ColumnKind) -> Option<f64> {
        let text = self.text(kind);
        if text.is_empty() {
            Some(0.0)
        } else {
            parse_number(text)
        }
    }

    pub fn sex(&self) -> Option<Sex> {
        self.text(ColumnKind::Sex).parse().ok()
    }

    pub fn place(&self) -> Option<Place> {
        self.text(ColumnKind::Place).parse().ok()
    }

    pub fn event(&self) -> Option<Event> {
        self.text(ColumnKind::Event).parse().ok()
    }

    pub fn equipment(&self) -> Option<Equipment> {
        self.text(ColumnKind::Equipment).parse().ok()
    }

    pub fn weight_class(&self) -> Option<WeightClass> {
        self.text(ColumnKind::WeightClassKg).parse().ok()
    }

    /// Name for use in messages.
    pub fn lifter(&self) -> &'a str {
        self.text(ColumnKind::Name)
    }
}

/// Parse a real number, rejecting non-finite values such as `inf` or `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Result of one check before row context is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    pub column: Option<ColumnKind>,
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            column: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            column: None,
        }
    }

    #[must_use]
    pub fn on(mut self, column: ColumnKind) -> Self {
        self.column = Some(column);
        self
    }
}
