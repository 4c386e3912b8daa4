//! Dependent-settlement ("lump") collapsing.
//!
//! Lumping runs in two phases with an explicit boundary:
//!
//! ```text
//! rows ── lump_by_id ──▶ LumpPhase { groups, any_lumped }
//!                              │
//!              any_lumped? ────┼── no ──▶ groups (one per input row)
//!                              └── yes ─▶ merge_counties(groups)
//! ```
//!
//! Once any row of a route carries a lump id, the whole roster is normalized
//! to one row per county.

use super::group::{CountyKey, LumpKey, merge_by_key};
use crate::TriplistRow;
use log::debug;

/// Result of the per-lump-id merge.
#[derive(Debug, Clone, PartialEq)]
pub struct LumpPhase {
    /// One row per distinct non-zero lump id, plus one per unlumped row.
    pub groups: Vec<TriplistRow>,
    /// Whether any input row had a non-zero lump id.
    pub any_lumped: bool,
}

/// Phase one: merge rows sharing a non-zero lump id.
///
/// Rows without a lump id never merge with anything at this stage.
pub fn lump_by_id(rows: &[TriplistRow]) -> LumpPhase {
    let any_lumped = rows.iter().any(|row| row.lump_id != 0.0);
    let groups = merge_by_key(rows, LumpKey::of);
    LumpPhase { groups, any_lumped }
}

/// Phase two: one row per `(county, state)`, first representative kept.
pub fn merge_counties(groups: &[TriplistRow]) -> Vec<TriplistRow> {
    merge_by_key(groups, |_, row| CountyKey::of(row))
}

/// Merge dependent settlements into their anchoring county.
///
/// Disabled, this returns the rows unchanged. Row numbers are not reassigned
/// here; display order is the position in the returned `Vec`.
pub fn apply_lump(rows: &[TriplistRow], enabled: bool) -> Vec<TriplistRow> {
    if !enabled {
        return rows.to_vec();
    }

    let phase = lump_by_id(rows);
    if !phase.any_lumped {
        debug!("[lump] no lump ids; {} rows unchanged", phase.groups.len());
        return phase.groups;
    }

    let merged = merge_counties(&phase.groups);
    debug!("[lump] {} rows -> {} lump groups -> {} counties", rows.len(), phase.groups.len(), merged.len());
    merged
}
