//! Simulation harness for NAVAID.
//!
//! Owns the hecs ECS world, runs the navigation models at a fixed tick rate,
//! and produces InstrumentSnapshots for a display.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use navaid_core as core;
pub use engine::{SimConfig, SimulationEngine};
