//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in the shared planar coordinate space (one unit = one distance unit).
///
/// In plan view x = East, y = North, and bearings are measured from +y.
/// The glideslope's vertical profile reuses the same type in screen
/// coordinates: x runs along the approach and y grows downward, so a
/// smaller y is higher above the runway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Range to another position (Euclidean distance).
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Bearing to another position in radians (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Move by `velocity * dt`.
    pub fn advanced(&self, velocity: &Velocity, dt: f64) -> Position {
        Position::from(self.as_vec() + velocity.as_vec() * dt)
    }

    /// Clamp into the rectangle `[0, width] x [0, height]`.
    pub fn clamped(&self, width: f64, height: f64) -> Position {
        Position::new(self.x.clamp(0.0, width), self.y.clamp(0.0, height))
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a velocity from a speed and a heading (radians, 0 = North, clockwise).
    pub fn from_heading(speed: f64, heading: f64) -> Self {
        Self {
            x: speed * heading.sin(),
            y: speed * heading.cos(),
        }
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.as_vec().length()
    }

    /// Heading in radians (0 = North, clockwise).
    pub fn heading(&self) -> f64 {
        self.x.atan2(self.y).rem_euclid(std::f64::consts::TAU)
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
