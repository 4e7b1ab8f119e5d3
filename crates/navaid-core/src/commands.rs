//! Harness commands sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ScenarioId;
use crate::types::{Position, Velocity};

/// All possible harness actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavCommand {
    /// Replace the world with a predefined station layout.
    LoadScenario { scenario: ScenarioId },
    /// Place the aircraft (drag-and-drop input).
    MoveAircraft { position: Position },
    /// Give the aircraft a constant velocity. Stops any wander.
    SetAircraftVelocity { velocity: Velocity },
    /// Let the aircraft drift on a seeded random heading.
    Wander { speed: f64 },
    /// Stop advancing time.
    Pause,
    /// Resume advancing time.
    Resume,
}
