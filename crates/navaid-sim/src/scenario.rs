//! Scenario definitions: hardcoded station layouts and aircraft starts.
//!
//! Each scenario places one or more ground stations and the aircraft at
//! the positions the interactive demos open with.

use navaid_core::constants::*;
use navaid_core::enums::{InstrumentKind, ScenarioId};
use navaid_core::types::Position;
use navaid_ils::CourseFan;

/// One station to spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StationSpec {
    Ranging(Position),
    Azimuth(Position),
    /// Course station at its fan's threshold.
    Course(InstrumentKind),
}

/// Initial world contents for a scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioLayout {
    pub aircraft: Position,
    /// Spawned in order; station ids count up from 1.
    pub stations: Vec<StationSpec>,
}

/// Ranging ground station.
const DME_STATION: Position = Position { x: 600.0, y: 300.0 };
/// Aircraft start for the ranging demo.
const DME_AIRCRAFT: Position = Position { x: 210.0, y: 210.0 };
const VOR_STATION: Position = Position { x: 400.0, y: 300.0 };
/// Aircraft start due south of the VOR (bearing 180).
const VOR_AIRCRAFT: Position = Position { x: 400.0, y: 100.0 };
const LOCALIZER_AIRCRAFT: Position = Position { x: 400.0, y: 610.0 };
/// Baseline coordinate of the glideslope aircraft start.
const GLIDESLOPE_AIRCRAFT_X: f64 = 110.0;

/// Build the layout for a given scenario.
pub fn build_layout(scenario: ScenarioId) -> ScenarioLayout {
    match scenario {
        ScenarioId::Dme => ScenarioLayout {
            aircraft: DME_AIRCRAFT,
            stations: vec![StationSpec::Ranging(DME_STATION)],
        },
        ScenarioId::Vor => ScenarioLayout {
            aircraft: VOR_AIRCRAFT,
            stations: vec![StationSpec::Azimuth(VOR_STATION)],
        },
        ScenarioId::Localizer => ScenarioLayout {
            aircraft: LOCALIZER_AIRCRAFT,
            stations: vec![StationSpec::Course(InstrumentKind::Localizer)],
        },
        ScenarioId::Glideslope => ScenarioLayout {
            aircraft: glideslope_start(),
            stations: vec![StationSpec::Course(InstrumentKind::Glideslope)],
        },
        ScenarioId::All => ScenarioLayout {
            aircraft: DME_AIRCRAFT,
            stations: vec![
                StationSpec::Ranging(DME_STATION),
                StationSpec::Azimuth(VOR_STATION),
                StationSpec::Course(InstrumentKind::Localizer),
                StationSpec::Course(InstrumentKind::Glideslope),
            ],
        },
    }
}

/// On the glideslope centerline.
fn glideslope_start() -> Position {
    CourseFan::glideslope_default()
        .center
        .point_at(GLIDESLOPE_AIRCRAFT_X)
}

/// Where a course station sits.
pub fn course_threshold(kind: InstrumentKind) -> Position {
    let (x, y) = match kind {
        InstrumentKind::Localizer => LOCALIZER_THRESHOLD,
        InstrumentKind::Glideslope => GLIDESLOPE_THRESHOLD,
    };
    Position::new(x, y)
}
