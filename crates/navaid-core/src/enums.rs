//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What a ground station transmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationRole {
    /// Answers interrogations after a fixed reply delay (DME).
    Ranging,
    /// Broadcasts reference and variable tones (VOR).
    AzimuthReference,
    /// Radiates two overlapping lobes around a course (localizer, glideslope).
    CourseReference,
}

/// Axis along which a reference line is parameterized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Baseline {
    /// Line given as `y(x)`; angle measured from the x axis (vertical profile,
    /// y grows downward so steeper lines rise toward smaller y).
    #[default]
    X,
    /// Line given as `x(y)`; angle measured from the y axis (plan view).
    Y,
}

/// Which deviation instrument a course station drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentKind {
    /// Lateral guidance. Needle deflects toward the course.
    Localizer,
    /// Vertical guidance. Needle drops when the aircraft is high.
    Glideslope,
}

/// How the scheduler treats intervals missed during a time jump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulePolicy {
    /// `next_due += interval` per firing. Phase is preserved; owed
    /// intervals fire one per subsequent tick.
    #[default]
    FixedPhase,
    /// `next_due = now + interval` per firing. Missed intervals are dropped.
    Resync,
}

/// Predefined station layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    #[default]
    Dme,
    Vor,
    Localizer,
    Glideslope,
    /// Every station at once.
    All,
}
