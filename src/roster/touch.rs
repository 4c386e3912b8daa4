//! Reentry ("touch") collapsing.

use super::group::{TouchKey, merge_by_key};
use crate::TriplistRow;
use log::debug;

/// Merge reentries of the same county (or sliver group) into one row.
///
/// Disabled, this returns the rows unchanged. Enabled, rows are grouped by
/// sliver group when the code carries one and by county otherwise; the first
/// row of each group is kept with the group's summed mileage. Output is in
/// first-seen group order, renumbered `1..=n`, with removal flags cleared.
pub fn apply_touch(rows: &[TriplistRow], enabled: bool) -> Vec<TriplistRow> {
    if !enabled {
        return rows.to_vec();
    }

    let mut merged = merge_by_key(rows, |_, row| TouchKey::of(row));
    for (idx, row) in merged.iter_mut().enumerate() {
        row.row = idx + 1;
        row.remove = false;
    }

    debug!("[touch] {} rows -> {} groups", rows.len(), merged.len());
    merged
}
