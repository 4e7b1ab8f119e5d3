//! ECS components for hecs entities.
//!
//! Components are plain data structs.
//! Model logic lives in the model crates and the engine's systems.

use serde::{Deserialize, Serialize};

use crate::enums::StationRole;
use crate::types::Position;

/// A fixed ground station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    pub position: Position,
    pub role: StationRole,
}

impl Station {
    pub fn new(id: u32, position: Position, role: StationRole) -> Self {
        Self { id, position, role }
    }
}

/// Marks the receiving aircraft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft;

/// Aircraft drifts with a slowly changing heading driven by the engine's seeded RNG.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wander {
    /// Ground speed while wandering (units/s).
    pub speed: f64,
    /// Current heading (radians, 0 = North).
    pub heading: f64,
}

/// Latest azimuth decode for a VOR station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AzimuthReading {
    /// Degrees, 0 = North.
    pub true_bearing_deg: f64,
    /// Degrees in `[0, 360)`.
    pub decoded_bearing_deg: f64,
}

/// Latest lobe evaluation for a course station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviationReading {
    pub deviation: f64,
    pub deflection: f64,
    pub lobe_a: f64,
    pub lobe_b: f64,
    pub a_share: f64,
    pub b_share: f64,
}
