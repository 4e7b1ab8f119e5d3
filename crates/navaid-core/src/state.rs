//! Instrument snapshot: everything a display needs after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, SimTime};

/// Complete instrument state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstrumentSnapshot {
    pub time: SimTime,
    pub running: bool,
    pub scenario: ScenarioId,
    pub aircraft: Position,
    pub dme: Vec<DmeView>,
    pub vor: Vec<VorView>,
    pub ils: Vec<IlsView>,
}

/// Ranging readout for one station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DmeView {
    pub station_id: u32,
    pub station: Position,
    /// Geometric distance right now.
    pub actual_distance: f64,
    /// Distance decoded at the last interrogation.
    pub measured_distance: f64,
    /// Seconds until the next interrogation (never negative).
    pub next_interrogation_in: f64,
    pub measurements: u64,
}

/// Azimuth readout for one station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VorView {
    pub station_id: u32,
    pub station: Position,
    /// Bearing from the station to the aircraft (degrees, 0 = North).
    pub true_bearing_deg: f64,
    /// Bearing recovered from the two tones (degrees, `[0, 360)`).
    pub decoded_bearing_deg: f64,
}

/// Deviation readout for one course station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IlsView {
    pub station_id: u32,
    pub kind: InstrumentKind,
    /// Raw lobe difference.
    pub deviation: f64,
    /// Clamped, sign-adjusted needle position in `[-1, 1]`.
    pub deflection: f64,
    pub lobe_a: f64,
    pub lobe_b: f64,
    /// Share of the blend owed to lobe A (guarded ratio).
    pub a_share: f64,
    pub b_share: f64,
}
