//! Triplist building: one route's rows, in travel order.

use super::columns::{ColumnMap, Field};
use crate::api::Direction;
use crate::routes::compare;
use crate::{SegmentRecord, TriplistRow};
use log::debug;
use std::cmp::Ordering;

/// Whether a row's sliver code asks for removal when travelling `direction`.
///
/// The first character of the code is the flag: `1` removes in both
/// directions, `2` only in reverse, `3` only forward; `0`, anything else, and
/// an empty code never remove.
pub fn removal_flag(sliver_id: &str, direction: Direction) -> bool {
    matches!(
        (direction, sliver_id.chars().next()),
        (Direction::Reverse, Some('1' | '2')) | (Direction::Forward, Some('1' | '3'))
    )
}

/// Filter `rows` to `route` and order them for `direction`.
///
/// Rows are stably sorted by the order column (ascending forward, descending
/// in reverse), so rows with equal order values keep their table order.
/// Rows are numbered `1..=n` after sorting.
pub fn build_triplist(
    rows: &[SegmentRecord],
    columns: &ColumnMap,
    route: &str,
    direction: Direction,
) -> Vec<TriplistRow> {
    let route_col = columns.get(Field::Route);
    let order_col = columns.get(Field::Order);

    let mut selected: Vec<&SegmentRecord> = rows.iter().filter(|row| row.text(route_col) == route).collect();
    selected.sort_by(|a, b| {
        let (a, b) = (a.num(order_col), b.num(order_col));
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Forward => ord,
            Direction::Reverse => ord.reverse(),
        }
    });

    debug!("[triplist] route={} direction={:?} rows={}", route, direction, selected.len());

    selected
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            let sliver_id = record.text(columns.get(Field::SliverId));
            TriplistRow {
                row: idx + 1,
                county: record.text(columns.get(Field::County)),
                state: record.text(columns.get(Field::State)),
                miles: record.num(columns.get(Field::Miles)),
                notes: record.text(columns.get(Field::Notes)),
                lump_id: record.num(columns.get(Field::LumpId)),
                parent: record.num(columns.get(Field::Parent)),
                vital: record.num(columns.get(Field::Vital)),
                pres: record.num(columns.get(Field::Pres)),
                remove: removal_flag(&sliver_id, direction),
                sliver_id,
            }
        })
        .collect()
}

/// Distinct routes crossing `county`, `state`, in route order.
pub fn routes_for_county(rows: &[SegmentRecord], columns: &ColumnMap, county: &str, state: &str) -> Vec<String> {
    let county_col = columns.get(Field::County);
    let state_col = columns.get(Field::State);
    let route_col = columns.get(Field::Route);

    let mut routes: Vec<String> = rows
        .iter()
        .filter(|row| row.text(county_col) == county && row.text(state_col) == state)
        .map(|row| row.text(route_col))
        .collect();
    routes.sort_by(|a, b| compare(a, b).then_with(|| a.cmp(b)));
    routes.dedup();
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(route: &str, county: &str, order: i64, miles: &str, sliver: &str) -> SegmentRecord {
        SegmentRecord::new()
            .with("Route", route)
            .with("County", county)
            .with("State", "TN")
            .with("Order", order)
            .with("Miles", miles)
            .with("SliverID", sliver)
    }

    #[test]
    fn removal_flag_by_direction() {
        let cases = [
            ("0000", false, false),
            ("1000", true, true),
            ("2000", false, true),
            ("3000", true, false),
            ("", false, false),
            ("x", false, false),
        ];
        for (code, forward, reverse) in cases {
            assert_eq!(removal_flag(code, Direction::Forward), forward, "forward {code:?}");
            assert_eq!(removal_flag(code, Direction::Reverse), reverse, "reverse {code:?}");
        }
    }

    #[test]
    fn filters_sorts_and_renumbers() {
        let rows = vec![
            row("I.40", "B", 2, "20", ""),
            row("I.24", "X", 1, "5", ""),
            row("I.40", "A", 1, "1,010", "3001"),
        ];
        let columns = ColumnMap::resolve(&rows[0]);

        let fwd = build_triplist(&rows, &columns, "I.40", Direction::Forward);
        assert_eq!(fwd.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(fwd.iter().map(|r| r.row).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(fwd[0].miles, 1010.0);
        assert!(fwd[0].remove);

        let rev = build_triplist(&rows, &columns, "I.40", Direction::Reverse);
        assert_eq!(rev.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(), ["B", "A"]);
        assert!(!rev[1].remove);
    }

    #[test]
    fn ties_keep_table_order_in_both_directions() {
        let rows = vec![row("I.40", "A", 1, "1", ""), row("I.40", "B", 1, "1", ""), row("I.40", "C", 1, "1", "")];
        let columns = ColumnMap::resolve(&rows[0]);

        for direction in [Direction::Forward, Direction::Reverse] {
            let out = build_triplist(&rows, &columns, "I.40", direction);
            assert_eq!(out.iter().map(|r| r.county.as_str()).collect::<Vec<_>>(), ["A", "B", "C"]);
        }
    }

    #[test]
    fn missing_columns_coerce_to_defaults() {
        let rows = vec![SegmentRecord::new().with("Route", "US.1").with("County", "Kent").with("State", "DE")];
        let columns = ColumnMap::resolve(&rows[0]);
        let out = build_triplist(&rows, &columns, "US.1", Direction::Forward);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].miles, 0.0);
        assert_eq!(out[0].lump_id, 0.0);
        assert_eq!(out[0].notes, "");
        assert_eq!(out[0].sliver_id, "");
        assert!(!out[0].remove);
    }

    #[test]
    fn unknown_route_is_empty() {
        let rows = vec![row("I.40", "A", 1, "1", "")];
        let columns = ColumnMap::resolve(&rows[0]);
        assert!(build_triplist(&rows, &columns, "I.99", Direction::Forward).is_empty());
    }

    #[test]
    fn routes_for_county_are_distinct_and_ordered() {
        let rows = vec![
            row("US.70", "A", 1, "1", ""),
            row("I.40", "A", 1, "1", ""),
            row("I.240", "A", 1, "1", ""),
            row("I.40", "A", 2, "1", ""),
            row("I.24", "B", 1, "1", ""),
        ];
        let columns = ColumnMap::resolve(&rows[0]);
        assert_eq!(routes_for_county(&rows, &columns, "A", "TN"), ["I.40", "I.240", "US.70"]);
    }
}
