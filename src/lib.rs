extern crate self as county_roster;

use serde::Serialize;

#[macro_use]
mod macros;
mod api;
mod roster;
mod routes;
mod source;

pub use api::{
    Collapse, Direction, RosterOptions, build_roster, build_roster_verbose, build_roster_with, group_known_routes,
};
pub use roster::{
    ColumnMap, Field, LumpPhase, RosterFacts, RosterRun, SCHEMA_VERSION, SchemaMapping, Stage, StageMetrics, StateFacts,
    apply_lump, apply_touch, build_triplist, cumulative_miles, lump_by_id, merge_counties, removal_flag, resolve_key,
    routes_for_county, summarize, to_num,
};
pub use routes::{
    BUCKET_CATALOG, BucketGroup, ClassKey, RangeBucket, RouteGrouping, RouteId, classify, compare, group_routes,
};
pub use source::{Result, SourceError, load_schema, load_segments, read_segments};

// --- Input records ------------------------------------------------------------

/// A single cell of an upstream segment table.
///
/// Upstream tables are loosely typed: the same logical column may arrive as a
/// number in one source and as a string (possibly with thousands separators)
/// in another.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Tolerant numeric view of the cell; never `NaN`.
    pub fn as_num(&self) -> f64 {
        match self {
            FieldValue::Number(v) if v.is_finite() => *v,
            FieldValue::Number(_) => 0.0,
            FieldValue::Text(s) => to_num(s),
        }
    }

    /// String view of the cell. Whole numbers print without a trailing `.0`.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", *v as i64),
            FieldValue::Number(v) => format!("{}", v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

/// One raw row of the route/county table: "one route crossing one county
/// contiguously".
///
/// Columns keep their upstream order, which matters for column discovery
/// (the first matching column wins). Column names are stored trimmed of
/// surrounding whitespace and byte-order marks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentRecord {
    fields: Vec<(String, FieldValue)>,
}

impl SegmentRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        SegmentRecord { fields: Vec::new() }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, column: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    /// Set `column` to `value`, replacing an existing cell of the same name.
    pub fn insert(&mut self, column: &str, value: FieldValue) {
        let column = normalize_column(column);
        match self.fields.iter_mut().find(|(name, _)| name == column) {
            Some((_, cell)) => *cell = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        let column = normalize_column(column);
        self.fields.iter().find(|(name, _)| name == column).map(|(_, value)| value)
    }

    /// Column names in upstream order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text of `column`, or an empty string when the column is absent.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(FieldValue::as_text).unwrap_or_default()
    }

    /// Tolerant numeric value of `column`; `0.0` when absent or unparseable.
    pub fn num(&self, column: &str) -> f64 {
        self.get(column).map(FieldValue::as_num).unwrap_or(0.0)
    }
}

pub(crate) fn normalize_column(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// --- Roster rows ----------------------------------------------------------------

/// A route segment after filtering, ordering and numeric coercion.
///
/// `row` is positional: it is reassigned whenever the collection is rebuilt
/// and must not be used as an identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriplistRow {
    pub row: usize,
    pub county: String,
    pub state: String,
    pub miles: f64,
    pub notes: String,
    pub lump_id: f64,
    pub parent: f64,
    pub vital: f64,
    pub pres: f64,
    pub sliver_id: String,
    /// Removal flag derived from the sliver code. Carried, never acted on.
    pub remove: bool,
}

impl TriplistRow {
    pub fn is_vital(&self) -> bool {
        self.vital == 1.0
    }

    pub fn is_pres(&self) -> bool {
        self.pres == 1.0
    }
}
