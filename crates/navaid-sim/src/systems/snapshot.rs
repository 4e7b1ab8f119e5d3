//! Snapshot system: queries the ECS world and builds a complete InstrumentSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use navaid_core::components::*;
use navaid_core::enums::ScenarioId;
use navaid_core::state::*;
use navaid_core::types::{Position, SimTime};
use navaid_dme::RangingSession;
use navaid_ils::Instrument;

/// Build a complete InstrumentSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    running: bool,
    scenario: ScenarioId,
) -> InstrumentSnapshot {
    let aircraft = find_aircraft_position(world).unwrap_or_default();

    InstrumentSnapshot {
        time: *time,
        running,
        scenario,
        aircraft,
        dme: build_dme(world, &aircraft, time.elapsed_secs),
        vor: build_vor(world),
        ils: build_ils(world),
    }
}

/// Aircraft position, if one has been spawned.
pub fn find_aircraft_position(world: &World) -> Option<Position> {
    world
        .query::<(&Aircraft, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

fn build_dme(world: &World, aircraft: &Position, now: f64) -> Vec<DmeView> {
    let mut views: Vec<DmeView> = world
        .query::<(&Station, &RangingSession)>()
        .iter()
        .map(|(_, (station, session))| DmeView {
            station_id: station.id,
            station: station.position,
            actual_distance: aircraft.range_to(&station.position),
            measured_distance: session.last_measured_distance(),
            next_interrogation_in: session.time_until_next(now),
            measurements: session.measurements(),
        })
        .collect();
    views.sort_by_key(|v| v.station_id);
    views
}

fn build_vor(world: &World) -> Vec<VorView> {
    let mut views: Vec<VorView> = world
        .query::<(&Station, &AzimuthReading)>()
        .iter()
        .map(|(_, (station, reading))| VorView {
            station_id: station.id,
            station: station.position,
            true_bearing_deg: reading.true_bearing_deg,
            decoded_bearing_deg: reading.decoded_bearing_deg,
        })
        .collect();
    views.sort_by_key(|v| v.station_id);
    views
}

fn build_ils(world: &World) -> Vec<IlsView> {
    let mut views: Vec<IlsView> = world
        .query::<(&Station, &Instrument, &DeviationReading)>()
        .iter()
        .map(|(_, (station, instrument, reading))| IlsView {
            station_id: station.id,
            kind: instrument.kind,
            deviation: reading.deviation,
            deflection: reading.deflection,
            lobe_a: reading.lobe_a,
            lobe_b: reading.lobe_b,
            a_share: reading.a_share,
            b_share: reading.b_share,
        })
        .collect();
    views.sort_by_key(|v| v.station_id);
    views
}
