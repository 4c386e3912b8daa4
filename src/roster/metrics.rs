//! Pipeline run trace.
//!
//! [`build_roster_verbose`](crate::build_roster_verbose) records how many rows
//! each stage consumed and produced, the mileage it passed on, and how long it
//! took. The plain entry points skip this bookkeeping.
//!
//! Mileage per stage is useful as a sanity check: touch and lump only ever
//! regroup rows, so `miles` must be identical across all three stages.

use crate::TriplistRow;
use std::time::Duration;

/// Pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Triplist,
    Touch,
    Lump,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Triplist => "triplist",
            Stage::Touch => "touch",
            Stage::Lump => "lump",
        }
    }
}

/// Timing and row counts for a single stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageMetrics {
    pub stage: Stage,
    /// Rows handed to the stage (raw table size for the triplist stage).
    pub rows_in: usize,
    pub rows_out: usize,
    /// Total mileage of the rows the stage produced.
    pub miles: f64,
    /// Whether the stage was switched on by the options.
    pub enabled: bool,
    pub duration: Duration,
}

/// Roster bundled with its stage trace.
#[derive(Debug, Clone)]
pub struct RosterRun {
    pub roster: Vec<TriplistRow>,
    pub stages: Vec<StageMetrics>,
    /// Total elapsed time, column resolution included.
    pub total: Duration,
}

impl RosterRun {
    pub fn stage(&self, stage: Stage) -> Option<&StageMetrics> {
        self.stages.iter().find(|m| m.stage == stage)
    }
}
