//! Grouping keys for the collapsing stages.
//!
//! Touch and lump both merge rows that share a key: the first row of a group
//! is kept verbatim and later members only contribute their mileage. Keys are
//! structured values rather than concatenated strings, so a county named
//! `"A|B"` can never collide with county `"A"` in state `"B"`.
//!
//! Floating-point lump ids are hashed by their bit pattern, as the values
//! come out of [`to_num`](super::to_num) and are never `NaN`.

use crate::TriplistRow;
use log::trace;
use std::collections::HashMap;
use std::hash::Hash;

/// `(county, state)` pair identifying one county.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CountyKey {
    pub(crate) county: String,
    pub(crate) state: String,
}

impl CountyKey {
    pub(crate) fn of(row: &TriplistRow) -> Self {
        CountyKey { county: row.county.clone(), state: row.state.clone() }
    }
}

/// Reentry group of a row: its sliver group when the sliver code carries
/// one, else its county.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum TouchKey {
    Sliver(i64),
    County(CountyKey),
}

impl TouchKey {
    pub(crate) fn of(row: &TriplistRow) -> Self {
        match sliver_group(&row.sliver_id) {
            Some(group) => TouchKey::Sliver(group),
            None => TouchKey::County(CountyKey::of(row)),
        }
    }
}

/// Phase-one lump group: rows sharing a non-zero lump id, or a singleton
/// keyed by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum LumpKey {
    Lump(u64),
    Row(usize),
}

impl LumpKey {
    pub(crate) fn of(position: usize, row: &TriplistRow) -> Self {
        if row.lump_id != 0.0 { LumpKey::Lump(row.lump_id.to_bits()) } else { LumpKey::Row(position) }
    }
}

/// Sliver group number from characters 2-4 of a sliver code.
///
/// Leading whitespace and a sign are accepted and trailing junk is ignored,
/// so `"1 7x"` reads as group 7; no leading digits means no group.
pub(crate) fn sliver_group(sliver_id: &str) -> Option<i64> {
    let digits: String = sliver_id.chars().skip(1).take(3).collect();
    let found = regex!(r"^\s*[+-]?\d+").find(&digits)?;
    found.as_str().trim_start().parse().ok()
}

/// Merge rows sharing a key, in first-seen key order.
///
/// The first row of each group is cloned as the representative; every later
/// member adds its `miles`. `key` receives the row's position in `rows`.
pub(crate) fn merge_by_key<'r, K, I, F>(rows: I, mut key: F) -> Vec<TriplistRow>
where
    K: Eq + Hash + std::fmt::Debug,
    I: IntoIterator<Item = &'r TriplistRow>,
    F: FnMut(usize, &TriplistRow) -> K,
{
    let mut merged: Vec<TriplistRow> = Vec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();

    for (position, row) in rows.into_iter().enumerate() {
        let k = key(position, row);
        match slots.get(&k) {
            Some(&slot) => {
                trace!("[merge] {:?}: +{} mi from {}, {}", k, row.miles, row.county, row.state);
                merged[slot].miles += row.miles;
            }
            None => {
                slots.insert(k, merged.len());
                merged.push(row.clone());
            }
        }
    }

    merged
}
