//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They own no state; sessions and readings live in components.

pub mod azimuth;
pub mod deviation;
pub mod movement;
pub mod ranging;
pub mod snapshot;
