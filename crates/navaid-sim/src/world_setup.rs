//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the aircraft and station entities with the component bundles
//! their systems query for.

use hecs::World;

use navaid_core::components::*;
use navaid_core::config::DeviationConfig;
use navaid_core::enums::{InstrumentKind, StationRole};
use navaid_core::error::NavResult;
use navaid_core::types::{Position, Velocity};
use navaid_dme::RangingModel;
use navaid_ils::Instrument;

use crate::scenario::{course_threshold, ScenarioLayout, StationSpec};

/// Replace the world contents with a scenario layout.
pub fn setup_scenario(
    world: &mut World,
    layout: &ScenarioLayout,
    ranging: &RangingModel,
    deviation: DeviationConfig,
) -> NavResult<()> {
    world.clear();
    spawn_aircraft(world, layout.aircraft);

    for (index, spec) in layout.stations.iter().enumerate() {
        let id = index as u32 + 1;
        match *spec {
            StationSpec::Ranging(position) => {
                spawn_ranging_station(world, id, position, ranging);
            }
            StationSpec::Azimuth(position) => {
                spawn_azimuth_station(world, id, position);
            }
            StationSpec::Course(kind) => {
                spawn_course_station(world, id, kind, deviation)?;
            }
        }
    }
    Ok(())
}

/// Spawn the aircraft at rest.
pub fn spawn_aircraft(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Aircraft, position, Velocity::default()))
}

/// Spawn a DME station with a fresh interrogation schedule.
pub fn spawn_ranging_station(
    world: &mut World,
    id: u32,
    position: Position,
    ranging: &RangingModel,
) -> hecs::Entity {
    world.spawn((
        Station::new(id, position, StationRole::Ranging),
        ranging.new_session(),
    ))
}

pub fn spawn_azimuth_station(world: &mut World, id: u32, position: Position) -> hecs::Entity {
    world.spawn((
        Station::new(id, position, StationRole::AzimuthReference),
        AzimuthReading::default(),
    ))
}

/// Spawn a localizer or glideslope at its default threshold.
pub fn spawn_course_station(
    world: &mut World,
    id: u32,
    kind: InstrumentKind,
    deviation: DeviationConfig,
) -> NavResult<hecs::Entity> {
    let instrument = match kind {
        InstrumentKind::Localizer => Instrument::localizer(deviation)?,
        InstrumentKind::Glideslope => Instrument::glideslope(deviation)?,
    };
    Ok(world.spawn((
        Station::new(id, course_threshold(kind), StationRole::CourseReference),
        instrument,
        DeviationReading::default(),
    )))
}
