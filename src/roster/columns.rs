//! Column discovery.
//!
//! Upstream tables name their columns inconsistently (`Miles`, `mileage`,
//! `MILES`, a BOM glued to the first header...). Column discovery runs once
//! per table schema, not per row: resolve a [`ColumnMap`] from one sample
//! record and reuse it for every row of the query.
//!
//! Resolution order for each logical [`Field`]:
//!
//! 1. the column named by an explicit [`SchemaMapping`], when one is supplied;
//! 2. the first sample column whose trimmed name matches the field's
//!    case-insensitive pattern;
//! 3. the field's canonical name.

use crate::SegmentRecord;
use crate::normalize_column;
use log::{trace, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema mapping version understood by this build.
pub const SCHEMA_VERSION: u32 = 1;

/// Logical attributes of a segment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Route,
    County,
    State,
    Order,
    Miles,
    Notes,
    LumpId,
    Parent,
    Vital,
    Pres,
    SliverId,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Route,
        Field::County,
        Field::State,
        Field::Order,
        Field::Miles,
        Field::Notes,
        Field::LumpId,
        Field::Parent,
        Field::Vital,
        Field::Pres,
        Field::SliverId,
    ];

    /// Column name used when nothing in the table matches.
    pub const fn canonical(self) -> &'static str {
        match self {
            Field::Route => "Route",
            Field::County => "County",
            Field::State => "State",
            Field::Order => "Order",
            Field::Miles => "Miles",
            Field::Notes => "Notes",
            Field::LumpId => "LumpID",
            Field::Parent => "Parent",
            Field::Vital => "Vital",
            Field::Pres => "Pres",
            Field::SliverId => "SliverID",
        }
    }

    /// Legacy discovery pattern for the field.
    pub fn pattern(self) -> &'static Regex {
        match self {
            Field::Route => regex!(r"(?i)^route$"),
            Field::County => regex!(r"(?i)^county$"),
            Field::State => regex!(r"(?i)^state$"),
            Field::Order => regex!(r"(?i)^order$"),
            Field::Miles => regex!(r"(?i)^mil(?:es?|e?age)$"),
            Field::Notes => regex!(r"(?i)^notes?$"),
            Field::LumpId => regex!(r"(?i)^lumpid$"),
            Field::Parent => regex!(r"(?i)^parent$"),
            Field::Vital => regex!(r"(?i)^vital$"),
            Field::Pres => regex!(r"(?i)^pres$"),
            Field::SliverId => regex!(r"(?i)^sliverid$"),
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Find the first column of `sample` whose trimmed name matches `pattern`,
/// or return `fallback`.
pub fn resolve_key(sample: &SegmentRecord, pattern: &Regex, fallback: &str) -> String {
    sample
        .columns()
        .map(normalize_column)
        .find(|column| pattern.is_match(column))
        .unwrap_or(fallback)
        .to_string()
}

/// Explicit, versioned column naming for one data source.
///
/// ```toml
/// version = 1
///
/// [columns]
/// miles = "Segment Miles"
/// sliver_id = "Sliver"
/// ```
///
/// Fields left out of `columns` are discovered from the table itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaMapping {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub columns: BTreeMap<Field, String>,
}

fn default_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for SchemaMapping {
    fn default() -> Self {
        SchemaMapping { version: SCHEMA_VERSION, columns: BTreeMap::new() }
    }
}

impl SchemaMapping {
    /// Builder-style helper for pinning one field to a column.
    pub fn with(mut self, field: Field, column: &str) -> Self {
        self.columns.insert(field, column.to_string());
        self
    }
}

/// Actual column names for every logical [`Field`] of one table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    names: [String; 11],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::canonical()
    }
}

impl ColumnMap {
    /// Map every field to its canonical column name.
    pub fn canonical() -> Self {
        ColumnMap { names: Field::ALL.map(|field| field.canonical().to_string()) }
    }

    /// Discover column names from a sample record.
    pub fn resolve(sample: &SegmentRecord) -> Self {
        Self::with_schema(sample, &SchemaMapping::default())
    }

    /// Discover column names, preferring the explicit `mapping`.
    pub fn with_schema(sample: &SegmentRecord, mapping: &SchemaMapping) -> Self {
        let names = Field::ALL.map(|field| {
            if let Some(explicit) = mapping.columns.get(&field) {
                let explicit = normalize_column(explicit);
                if !sample.is_empty() && sample.get(explicit).is_none() {
                    warn!("schema maps {:?} to column '{}' which the table does not have", field, explicit);
                }
                trace!("[columns] {:?} -> '{}' (schema)", field, explicit);
                return explicit.to_string();
            }

            let resolved = resolve_key(sample, field.pattern(), field.canonical());
            if !sample.is_empty() && sample.get(&resolved).is_none() {
                warn!("no column matches {:?}; falling back to '{}'", field, resolved);
            } else {
                trace!("[columns] {:?} -> '{}'", field, resolved);
            }
            resolved
        });

        ColumnMap { names }
    }

    /// Actual column name for `field`.
    pub fn get(&self, field: Field) -> &str {
        &self.names[field.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SegmentRecord {
        SegmentRecord::new()
            .with("\u{feff}Route", "I.40")
            .with("County", "Shelby")
            .with("State", "TN")
            .with(" ORDER ", 1_i64)
            .with("mileage", "12.5")
            .with("lumpid", 0_i64)
            .with("SliverID", "0000")
    }

    #[test]
    fn resolve_key_matches_case_insensitively() {
        let sample = sample();
        assert_eq!(resolve_key(&sample, Field::Order.pattern(), "Order"), "ORDER");
        assert_eq!(resolve_key(&sample, Field::Miles.pattern(), "Miles"), "mileage");
        assert_eq!(resolve_key(&sample, Field::LumpId.pattern(), "LumpID"), "lumpid");
    }

    #[test]
    fn resolve_key_falls_back_to_canonical_name() {
        let sample = sample();
        assert_eq!(resolve_key(&sample, Field::Vital.pattern(), "Vital"), "Vital");
        assert_eq!(resolve_key(&SegmentRecord::new(), Field::Miles.pattern(), "Miles"), "Miles");
    }

    #[test]
    fn bom_on_first_header_is_ignored() {
        let columns = ColumnMap::resolve(&sample());
        assert_eq!(columns.get(Field::Route), "Route");
    }

    #[test]
    fn miles_pattern_accepts_known_spellings() {
        for name in ["Miles", "miles", "MILES", "mile", "MILEAGE", "milage"] {
            assert!(Field::Miles.pattern().is_match(name), "{name}");
        }
        for name in ["kilometers", "mil", "milesage", "Segment Miles"] {
            assert!(!Field::Miles.pattern().is_match(name), "{name}");
        }
    }

    #[test]
    fn schema_mapping_wins_over_discovery() {
        let sample = sample().with("Segment Miles", "3");
        let mapping = SchemaMapping::default().with(Field::Miles, "Segment Miles");
        let columns = ColumnMap::with_schema(&sample, &mapping);

        assert_eq!(columns.get(Field::Miles), "Segment Miles");
        assert_eq!(columns.get(Field::Order), "ORDER");
        assert_eq!(columns.get(Field::Pres), "Pres");
    }

    #[test]
    fn schema_mapping_parses_from_toml() {
        let mapping: SchemaMapping = toml::from_str(
            r#"
            [columns]
            miles = "Len"
            sliver_id = "Sliver"
            "#,
        )
        .unwrap();

        assert_eq!(mapping.version, SCHEMA_VERSION);
        assert_eq!(mapping.columns.get(&Field::Miles).map(String::as_str), Some("Len"));
        assert_eq!(mapping.columns.get(&Field::SliverId).map(String::as_str), Some("Sliver"));
    }
}
