use crate::roster::{
    ColumnMap, RosterRun, Stage, StageMetrics, apply_lump, apply_touch, build_triplist,
};
use crate::routes::{BUCKET_CATALOG, RouteGrouping, group_routes};
use crate::{SegmentRecord, TriplistRow};
use log::debug;
use std::time::Instant;

/// Travel direction along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Ascending `Order`.
    #[default]
    Forward,
    /// Descending `Order`.
    Reverse,
}

impl Direction {
    /// `0` is forward; any other bit is reverse.
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 { Direction::Forward } else { Direction::Reverse }
    }
}

bitflags::bitflags! {
    /// Collapsing passes to run after the triplist is built.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Collapse: u8 {
        /// Merge reentries of the same county or sliver group.
        const TOUCH = 1 << 0;
        /// Merge dependent settlements into their anchoring county.
        const LUMP  = 1 << 1;
    }
}

/// Options for one roster query.
///
/// Callers own these flags (typically UI state) and pass them with every
/// call; the pipeline keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterOptions {
    pub direction: Direction,
    pub collapse: Collapse,
}

impl RosterOptions {
    pub fn new(direction: Direction, collapse: Collapse) -> Self {
        RosterOptions { direction, collapse }
    }
}

/// Build the roster for `route`, discovering column names from the first
/// row.
///
/// # Example
/// ```
/// use county_roster::{RosterOptions, SegmentRecord, build_roster};
///
/// let rows = vec![
///     SegmentRecord::new().with("Route", "I.40").with("County", "Shelby").with("State", "TN")
///         .with("Order", 1_i64).with("Miles", "12.5"),
/// ];
/// let roster = build_roster(&rows, "I.40", &RosterOptions::default());
/// assert_eq!(roster[0].county, "Shelby");
/// ```
pub fn build_roster(rows: &[SegmentRecord], route: &str, options: &RosterOptions) -> Vec<TriplistRow> {
    let columns = sample_columns(rows);
    build_roster_with(rows, &columns, route, options)
}

/// Build the roster for `route` with a previously resolved [`ColumnMap`].
///
/// Use this when running several queries against the same table.
pub fn build_roster_with(
    rows: &[SegmentRecord],
    columns: &ColumnMap,
    route: &str,
    options: &RosterOptions,
) -> Vec<TriplistRow> {
    let triplist = build_triplist(rows, columns, route, options.direction);
    let touched = apply_touch(&triplist, options.collapse.contains(Collapse::TOUCH));
    apply_lump(&touched, options.collapse.contains(Collapse::LUMP))
}

/// Build the roster and record a per-stage trace.
///
/// The default [`build_roster_with`] path does not allocate the trace.
pub fn build_roster_verbose(
    rows: &[SegmentRecord],
    columns: &ColumnMap,
    route: &str,
    options: &RosterOptions,
) -> RosterRun {
    let total_start = Instant::now();
    let mut stages = Vec::with_capacity(3);

    let start = Instant::now();
    let triplist = build_triplist(rows, columns, route, options.direction);
    stages.push(stage_metrics(Stage::Triplist, rows.len(), &triplist, true, start));

    let touch = options.collapse.contains(Collapse::TOUCH);
    let start = Instant::now();
    let touched = apply_touch(&triplist, touch);
    stages.push(stage_metrics(Stage::Touch, triplist.len(), &touched, touch, start));

    let lump = options.collapse.contains(Collapse::LUMP);
    let start = Instant::now();
    let roster = apply_lump(&touched, lump);
    stages.push(stage_metrics(Stage::Lump, touched.len(), &roster, lump, start));

    let total = total_start.elapsed();
    debug!("[roster] route={} rows={} elapsed={:?}", route, roster.len(), total);

    RosterRun { roster, stages, total }
}

/// Group route codes with the built-in [`BUCKET_CATALOG`].
pub fn group_known_routes<'a, I>(routes: I) -> RouteGrouping
where
    I: IntoIterator<Item = &'a str>,
{
    group_routes(routes, BUCKET_CATALOG)
}

fn sample_columns(rows: &[SegmentRecord]) -> ColumnMap {
    match rows.first() {
        Some(sample) => ColumnMap::resolve(sample),
        None => ColumnMap::canonical(),
    }
}

fn stage_metrics(stage: Stage, rows_in: usize, out: &[TriplistRow], enabled: bool, start: Instant) -> StageMetrics {
    StageMetrics {
        stage,
        rows_in,
        rows_out: out.len(),
        miles: out.iter().map(|row| row.miles).sum(),
        enabled,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<SegmentRecord> {
        [("A", 1, "10"), ("B", 2, "20"), ("A", 3, "5")]
            .into_iter()
            .map(|(county, order, miles)| {
                SegmentRecord::new()
                    .with("Route", "US.64")
                    .with("County", county)
                    .with("State", "NC")
                    .with("Order", order as i64)
                    .with("Miles", miles)
            })
            .collect()
    }

    #[test]
    fn direction_from_bit() {
        assert_eq!(Direction::from_bit(0), Direction::Forward);
        assert_eq!(Direction::from_bit(1), Direction::Reverse);
        assert_eq!(Direction::default(), Direction::Forward);
    }

    #[test]
    fn options_select_stages() {
        let rows = rows();

        let plain = build_roster(&rows, "US.64", &RosterOptions::default());
        assert_eq!(plain.len(), 3);

        let miles = |roster: &[TriplistRow]| -> Vec<f64> { roster.iter().map(|r| r.miles).collect() };

        let touched = build_roster(&rows, "US.64", &RosterOptions::new(Direction::Forward, Collapse::TOUCH));
        assert_eq!(touched.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(miles(&touched), [15.0, 20.0]);

        let reversed = build_roster(&rows, "US.64", &RosterOptions::new(Direction::Reverse, Collapse::TOUCH));
        assert_eq!(reversed.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(miles(&reversed), [15.0, 20.0]);
        assert_eq!(reversed[0].row, 1);
    }

    #[test]
    fn verbose_trace_matches_plain_result() {
        let rows = rows();
        let columns = ColumnMap::resolve(&rows[0]);
        let options = RosterOptions::new(Direction::Reverse, Collapse::TOUCH | Collapse::LUMP);

        let run = build_roster_verbose(&rows, &columns, "US.64", &options);
        assert_eq!(run.roster, build_roster_with(&rows, &columns, "US.64", &options));
        assert_eq!(run.stages.len(), 3);

        let touch = run.stage(Stage::Touch).unwrap();
        assert!(touch.enabled);
        assert_eq!((touch.rows_in, touch.rows_out), (3, 2));
        assert!(run.stages.iter().all(|m| m.miles == 35.0));
        assert!(run.total >= touch.duration);
    }

    #[test]
    fn empty_table_gives_empty_roster() {
        assert!(build_roster(&[], "I.40", &RosterOptions::default()).is_empty());
    }

    #[test]
    fn known_routes_use_builtin_catalog() {
        let grouping = group_known_routes(["I.40", "US.1"]);
        assert_eq!(grouping.bucket_of("US.1"), Some("US-main-1"));
    }
}
