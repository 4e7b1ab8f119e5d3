//! ILS deviation system. Evaluates each course instrument at the aircraft.

use hecs::World;

use navaid_core::components::DeviationReading;
use navaid_core::types::Position;
use navaid_ils::Instrument;

pub fn run(world: &mut World, aircraft: &Position) {
    for (_entity, (instrument, reading)) in
        world.query_mut::<(&Instrument, &mut DeviationReading)>()
    {
        let model = &instrument.model;
        let dominance = model.dominance(aircraft);
        *reading = DeviationReading {
            deviation: model.deviation(aircraft),
            deflection: instrument.deflection(aircraft),
            lobe_a: model.lobe_strength_a(aircraft),
            lobe_b: model.lobe_strength_b(aircraft),
            a_share: dominance.a_share,
            b_share: dominance.b_share,
        };
    }
}
