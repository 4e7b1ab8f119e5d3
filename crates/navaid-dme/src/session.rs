//! Per-station interrogation schedule.

use serde::{Deserialize, Serialize};

/// Whether an interrogation is owed at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerState {
    Waiting,
    Due,
}

/// Mutable ranging state for one station.
///
/// Owned by the caller and mutated only through [`crate::RangingModel::tick`],
/// so independent stations never share a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangingSession {
    /// Latest time passed to `tick` (seconds).
    pub(crate) elapsed: f64,
    pub(crate) next_due: f64,
    pub(crate) last_measured_distance: f64,
    pub(crate) measurements: u64,
}

impl RangingSession {
    /// A session whose first interrogation fires at `first_due` seconds.
    pub fn new(first_due: f64) -> Self {
        Self {
            elapsed: 0.0,
            next_due: first_due,
            last_measured_distance: 0.0,
            measurements: 0,
        }
    }

    pub fn state(&self, now: f64) -> SchedulerState {
        if now >= self.next_due {
            SchedulerState::Due
        } else {
            SchedulerState::Waiting
        }
    }

    /// Countdown to the next interrogation, never negative.
    pub fn time_until_next(&self, now: f64) -> f64 {
        (self.next_due - now).max(0.0)
    }

    pub fn next_due(&self) -> f64 {
        self.next_due
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Distance from the last interrogation; 0 before the first one.
    pub fn last_measured_distance(&self) -> f64 {
        self.last_measured_distance
    }

    pub fn measurements(&self) -> u64 {
        self.measurements
    }
}
