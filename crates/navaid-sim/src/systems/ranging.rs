//! DME interrogation system.
//!
//! Ticks every station's ranging session against the aircraft position.

use hecs::World;

use navaid_core::components::Station;
use navaid_core::types::Position;
use navaid_dme::{RangingModel, RangingSession};

/// Run one scheduler step for all `Station + RangingSession` entities.
pub fn run(world: &mut World, model: &RangingModel, aircraft: &Position, now: f64) {
    for (_entity, (station, session)) in world.query_mut::<(&Station, &mut RangingSession)>() {
        model.tick(session, now, aircraft, station);
    }
}
