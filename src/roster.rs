//! Roster construction pipeline.
//!
//! A roster is the ordered list of counties a route passes through. It is
//! derived from the raw route/county table in strictly forward stages:
//!
//! ```text
//! raw rows ── ColumnMap::resolve ──┐            (columns.rs)
//!                                  v
//!                     build_triplist            (triplist.rs)
//!                       - filter to one route
//!                       - stable sort by Order (direction-aware)
//!                       - Row = 1..n, removal flag from SliverID
//!                                  │
//!                                  v
//!                     apply_touch               (touch.rs)
//!                       - merge reentries of one county / sliver group
//!                                  │
//!                                  v
//!                     apply_lump                (lump.rs)
//!                       - phase 1: merge by LumpID
//!                       - phase 2: one row per county, only if any lump
//!                                  │
//!                                  v
//!                     roster ── summarize       (facts.rs)
//! ```
//!
//! Every stage borrows its input and returns a fresh `Vec`, so the same raw
//! table can be queried concurrently with different options.
//!
//! ## Responsibilities by module
//!
//! - `columns.rs`: tolerant column discovery and the explicit schema mapping.
//! - `numeric.rs`: `to_num`, the lenient number parser used for every
//!   numeric column.
//! - `group.rs`: composite grouping keys and the shared merge loop.
//! - `triplist.rs`, `touch.rs`, `lump.rs`: the three pipeline stages.
//! - `facts.rs`: summaries derived from a finished roster.
//! - `metrics.rs`: per-stage trace for the verbose pipeline entry point.

#[path = "roster/columns.rs"]
mod columns;
#[path = "roster/facts.rs"]
mod facts;
#[path = "roster/group.rs"]
mod group;
#[path = "roster/lump.rs"]
mod lump;
#[path = "roster/metrics.rs"]
mod metrics;
#[path = "roster/numeric.rs"]
mod numeric;
#[path = "roster/touch.rs"]
mod touch;
#[path = "roster/triplist.rs"]
mod triplist;

pub use columns::{ColumnMap, Field, SCHEMA_VERSION, SchemaMapping, resolve_key};
pub use facts::{RosterFacts, StateFacts, cumulative_miles, summarize};
pub use lump::{LumpPhase, apply_lump, lump_by_id, merge_counties};
pub use metrics::{RosterRun, Stage, StageMetrics};
pub use numeric::to_num;
pub use touch::apply_touch;
pub use triplist::{build_triplist, removal_flag, routes_for_county};
