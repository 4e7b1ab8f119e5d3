//! Kinematic integration system.
//!
//! Updates the aircraft Position from its Velocity each tick and keeps it
//! inside the world. Wandering aircraft get a small seeded heading change
//! first.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use navaid_core::components::{Aircraft, Wander};
use navaid_core::constants::{DT, WANDER_MAX_TURN_PER_TICK, WORLD_HEIGHT, WORLD_WIDTH};
use navaid_core::types::{Position, Velocity};

/// Jitter the heading of every wandering entity.
pub fn wander(world: &mut World, rng: &mut ChaCha8Rng) {
    for (_entity, (wander, vel)) in world.query_mut::<(&mut Wander, &mut Velocity)>() {
        let turn = rng.gen_range(-WANDER_MAX_TURN_PER_TICK..=WANDER_MAX_TURN_PER_TICK);
        wander.heading = (wander.heading + turn).rem_euclid(std::f64::consts::TAU);
        *vel = Velocity::from_heading(wander.speed, wander.heading);
    }
}

/// Integrate aircraft positions: position += velocity * dt, clamped to the world.
pub fn run(world: &mut World) {
    for (_entity, (_aircraft, pos, vel)) in
        world.query_mut::<(&Aircraft, &mut Position, &Velocity)>()
    {
        *pos = pos.advanced(vel, DT).clamped(WORLD_WIDTH, WORLD_HEIGHT);
    }
}
