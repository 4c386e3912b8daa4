//! Summaries of a finished roster.

use crate::TriplistRow;
use serde::Serialize;
use std::collections::HashSet;

/// Mileage and county count for one state along the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateFacts {
    pub state: String,
    pub miles: f64,
    /// Distinct county names in this state.
    pub county_count: usize,
}

/// Aggregate figures for a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterFacts {
    pub segments: usize,
    pub total_miles: f64,
    pub avg_miles_per_segment: f64,
    /// Per-state figures in order of first appearance along the route.
    pub states: Vec<StateFacts>,
    /// Distinct `(county, state)` pairs flagged vital.
    pub vital_counties: usize,
    /// Distinct `(county, state)` pairs flagged presidential.
    pub pres_counties: usize,
}

impl RosterFacts {
    pub fn state(&self, state: &str) -> Option<&StateFacts> {
        self.states.iter().find(|facts| facts.state == state)
    }
}

/// Summarize `roster`; `None` when it is empty.
pub fn summarize(roster: &[TriplistRow]) -> Option<RosterFacts> {
    if roster.is_empty() {
        return None;
    }

    let segments = roster.len();
    let total_miles: f64 = roster.iter().map(|row| row.miles).sum();

    let mut states: Vec<StateFacts> = Vec::new();
    let mut counties: Vec<HashSet<&str>> = Vec::new();
    for row in roster {
        let slot = match states.iter().position(|facts| facts.state == row.state) {
            Some(slot) => slot,
            None => {
                states.push(StateFacts { state: row.state.clone(), miles: 0.0, county_count: 0 });
                counties.push(HashSet::new());
                states.len() - 1
            }
        };
        states[slot].miles += row.miles;
        if counties[slot].insert(row.county.as_str()) {
            states[slot].county_count += 1;
        }
    }

    let distinct = |flagged: fn(&TriplistRow) -> bool| {
        let pairs: HashSet<(&str, &str)> =
            roster.iter().filter(|row| flagged(row)).map(|row| (row.county.as_str(), row.state.as_str())).collect();
        pairs.len()
    };

    Some(RosterFacts {
        segments,
        total_miles,
        avg_miles_per_segment: total_miles / segments as f64,
        states,
        vital_counties: distinct(TriplistRow::is_vital),
        pres_counties: distinct(TriplistRow::is_pres),
    })
}

/// Running mileage at the end of each roster row.
pub fn cumulative_miles(roster: &[TriplistRow]) -> Vec<f64> {
    roster
        .iter()
        .scan(0.0, |total, row| {
            *total += row.miles;
            Some(*total)
        })
        .collect()
}
