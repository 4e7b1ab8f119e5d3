//! VOR decode system.
//!
//! For each azimuth station, synthesizes the two tones for the true
//! station-to-aircraft bearing and decodes them back.

use hecs::World;
use tracing::warn;

use navaid_core::components::{AzimuthReading, Station};
use navaid_core::types::Position;
use navaid_vor::PhaseAzimuthDecoder;

pub fn run(world: &mut World, decoder: &PhaseAzimuthDecoder, aircraft: &Position) {
    for (_entity, (station, reading)) in world.query_mut::<(&Station, &mut AzimuthReading)>() {
        let bearing = station.position.bearing_to(aircraft);
        match decoder.round_trip(bearing) {
            Ok(decoded) => {
                reading.true_bearing_deg = bearing.to_degrees();
                reading.decoded_bearing_deg = decoded;
            }
            // Keeps the previous reading.
            Err(err) => warn!(station = station.id, %err, "azimuth decode failed"),
        }
    }
}
