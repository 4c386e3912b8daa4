//! Range-bucket catalog and grouper.
//!
//! Route pickers select in two stages: first a labelled numeric range within
//! a class ("Interstates 2-40"), then the route itself. The catalog below is
//! hand-authored; buckets of one class never overlap, but assignment still
//! takes the first matching bucket in catalog order so edits stay
//! deterministic.

use super::classify::{ClassKey, classify, compare};
use super::identifier::RouteId;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// One labelled range of route numbers within a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBucket {
    pub id: &'static str,
    pub label: &'static str,
    pub class: ClassKey,
    /// Inclusive `(low, high)` intervals, possibly disjoint.
    pub ranges: &'static [(u32, u32)],
}

impl RangeBucket {
    pub fn contains(&self, num: u32) -> bool {
        self.ranges.iter().any(|&(low, high)| (low..=high).contains(&num))
    }

    /// Whether `id` belongs in this bucket.
    pub fn admits(&self, id: &RouteId) -> bool {
        match id.num {
            Some(num) => classify(id) == self.class && self.contains(num),
            None => false,
        }
    }
}

const fn bucket(id: &'static str, label: &'static str, class: ClassKey, ranges: &'static [(u32, u32)]) -> RangeBucket {
    RangeBucket { id, label, class, ranges }
}

/// The compiled-in bucket catalog.
pub const BUCKET_CATALOG: &[RangeBucket] = &[
    // Interstates
    bucket("I-main-1", "Interstates 2-40", ClassKey::InterstateMain, &[(2, 40)]),
    bucket("I-main-2", "Interstates 41-74", ClassKey::InterstateMain, &[(41, 74)]),
    bucket("I-main-3", "Interstates 75-99", ClassKey::InterstateMain, &[(75, 99)]),
    bucket("I-spur-1", "Interstates 1xx", ClassKey::InterstateSpur, &[(100, 199)]),
    bucket("I-spur-2", "Interstates 2xx-4xx", ClassKey::InterstateSpur, &[(200, 499)]),
    bucket("I-spur-3", "Interstates 5xx-9xx", ClassKey::InterstateSpur, &[(500, 999)]),
    // US routes
    bucket("US-main-1", "US 1-30", ClassKey::UsMain, &[(1, 30)]),
    bucket("US-main-2", "US 31-60", ClassKey::UsMain, &[(31, 60)]),
    bucket("US-main-3", "US 61-101", ClassKey::UsMain, &[(61, 101)]),
    bucket("US-spur-1", "US 1xx", ClassKey::UsSpur, &[(102, 199)]),
    bucket("US-spur-2", "US 2xx", ClassKey::UsSpur, &[(200, 299)]),
    bucket("US-spur-3", "US 3xx-7xx", ClassKey::UsSpur, &[(300, 499), (500, 799)]),
];

/// Routes assigned to one catalog bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub class: ClassKey,
    /// Sorted with [`compare`].
    pub routes: Vec<String>,
}

/// Every catalog bucket (in catalog order, empty ones included) plus the
/// routes no bucket admits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGrouping {
    pub buckets: Vec<BucketGroup>,
    pub unassigned: Vec<String>,
}

impl RouteGrouping {
    pub fn get(&self, id: &str) -> Option<&BucketGroup> {
        self.buckets.iter().find(|bucket| bucket.id == id)
    }

    /// Buckets worth offering in a picker (those with at least one route).
    pub fn selectable(&self) -> impl Iterator<Item = &BucketGroup> {
        self.buckets.iter().filter(|bucket| !bucket.routes.is_empty())
    }

    /// Id of the bucket holding `route`, if any.
    pub fn bucket_of(&self, route: &str) -> Option<&'static str> {
        self.buckets.iter().find(|bucket| bucket.routes.iter().any(|r| r == route)).map(|bucket| bucket.id)
    }
}

/// Assign each distinct route code to the first bucket of `catalog` that
/// admits it.
pub fn group_routes<'a, I>(routes: I, catalog: &[RangeBucket]) -> RouteGrouping
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets: Vec<BucketGroup> = catalog
        .iter()
        .map(|bucket| BucketGroup { id: bucket.id, label: bucket.label, class: bucket.class, routes: Vec::new() })
        .collect();
    let mut unassigned: Vec<String> = Vec::new();

    let mut seen: HashSet<&str> = HashSet::new();
    for route in routes {
        if !seen.insert(route) {
            continue;
        }
        let id = RouteId::parse(route);
        match catalog.iter().position(|bucket| bucket.admits(&id)) {
            Some(slot) => buckets[slot].routes.push(route.to_string()),
            None => {
                debug!("[buckets] '{}' ({}) matches no bucket", route, classify(&id));
                unassigned.push(route.to_string());
            }
        }
    }

    for bucket in &mut buckets {
        bucket.routes.sort_by(|a, b| compare(a, b).then_with(|| a.cmp(b)));
    }
    unassigned.sort_by(|a, b| compare(a, b).then_with(|| a.cmp(b)));

    RouteGrouping { buckets, unassigned }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_interstates_split_buckets() {
        let grouping = group_routes(["I.40", "I.41"], BUCKET_CATALOG);
        assert_eq!(classify(&RouteId::parse("I.40")), ClassKey::InterstateMain);
        assert_eq!(grouping.bucket_of("I.40"), Some("I-main-1"));
        assert_eq!(grouping.bucket_of("I.41"), Some("I-main-2"));
    }

    #[test]
    fn buckets_sorted_and_empty_ones_kept() {
        let grouping = group_routes(["I.40", "I.5", "I.20A", "I.20", "US.101", "US.441", "US.550"], BUCKET_CATALOG);

        assert_eq!(grouping.buckets.len(), BUCKET_CATALOG.len());
        assert_eq!(grouping.get("I-main-1").unwrap().routes, ["I.5", "I.20", "I.20A", "I.40"]);
        assert_eq!(grouping.get("US-main-3").unwrap().routes, ["US.101"]);
        assert_eq!(grouping.get("US-spur-3").unwrap().routes, ["US.441", "US.550"]);
        assert!(grouping.get("I-spur-2").unwrap().routes.is_empty());

        let selectable: Vec<&str> = grouping.selectable().map(|b| b.id).collect();
        assert_eq!(selectable, ["I-main-1", "US-main-3", "US-spur-3"]);
    }

    #[test]
    fn unmatched_and_malformed_go_unassigned() {
        let grouping = group_routes(["SR.9", "I.1", "US.800", "Loop", "I.X", "US.1"], BUCKET_CATALOG);
        assert_eq!(grouping.unassigned, ["I.X", "Loop", "I.1", "SR.9", "US.800"]);
        assert_eq!(grouping.bucket_of("US.1"), Some("US-main-1"));
    }

    #[test]
    fn duplicates_are_collapsed() {
        let grouping = group_routes(["I.40", "I.40", "I.24"], BUCKET_CATALOG);
        assert_eq!(grouping.get("I-main-1").unwrap().routes, ["I.24", "I.40"]);
    }

    #[test]
    fn first_matching_bucket_wins() {
        const OVERLAPPING: &[RangeBucket] = &[
            RangeBucket { id: "a", label: "A", class: ClassKey::InterstateMain, ranges: &[(1, 50)] },
            RangeBucket { id: "b", label: "B", class: ClassKey::InterstateMain, ranges: &[(40, 99)] },
        ];
        let grouping = group_routes(["I.45"], OVERLAPPING);
        assert_eq!(grouping.bucket_of("I.45"), Some("a"));
    }

    #[test]
    fn catalog_ranges_do_not_overlap_within_a_class() {
        for (i, a) in BUCKET_CATALOG.iter().enumerate() {
            for b in &BUCKET_CATALOG[i + 1..] {
                if a.class != b.class {
                    continue;
                }
                for &(low, high) in a.ranges {
                    assert!(!(low..=high).any(|n| b.contains(n)), "{} overlaps {}", a.id, b.id);
                }
            }
        }
    }
}
