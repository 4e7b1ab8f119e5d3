//! Geometry utilities: distances and converging reference lines.
//!
//! A reference line passes through a convergence point (a runway threshold)
//! at a fixed angle. Several lines sharing the convergence point form the
//! fan drawn around a course: centerline plus boundaries.

use serde::{Deserialize, Serialize};

use crate::enums::Baseline;
use crate::error::{NavError, NavResult};
use crate::types::Position;

/// Euclidean distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    a.range_to(b)
}

/// A straight line through `convergence` at `angle` radians from its baseline axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub convergence: Position,
    pub angle: f64,
    pub baseline: Baseline,
}

impl ReferenceLine {
    pub fn new(convergence: Position, angle: f64, baseline: Baseline) -> Self {
        Self {
            convergence,
            angle,
            baseline,
        }
    }

    /// Same as [`ReferenceLine::new`] with the angle given in degrees.
    pub fn from_degrees(convergence: Position, angle_deg: f64, baseline: Baseline) -> Self {
        Self::new(convergence, angle_deg.to_radians(), baseline)
    }

    /// Fails if the angle is not finite or the line runs parallel to its baseline normal.
    pub fn validate(&self) -> NavResult<()> {
        if !self.angle.is_finite() || self.angle.cos().abs() < 1e-9 {
            return Err(NavError::invalid(
                "reference_angle",
                format!("line must cross its baseline axis, got {} rad", self.angle),
            ));
        }
        if !self.convergence.x.is_finite() || !self.convergence.y.is_finite() {
            return Err(NavError::invalid("convergence_point", "must be finite"));
        }
        Ok(())
    }

    /// The non-baseline coordinate of the line at baseline coordinate `t`.
    ///
    /// `Baseline::X`: `y = c.y - tan(angle) * (c.x - t)`.
    /// `Baseline::Y`: `x = c.x - tan(angle) * (c.y - t)`.
    pub fn coordinate_at(&self, t: f64) -> f64 {
        let c = self.convergence;
        match self.baseline {
            Baseline::X => c.y - self.angle.tan() * (c.x - t),
            Baseline::Y => c.x - self.angle.tan() * (c.y - t),
        }
    }

    /// Point on the line at baseline coordinate `t`.
    pub fn point_at(&self, t: f64) -> Position {
        let u = self.coordinate_at(t);
        match self.baseline {
            Baseline::X => Position::new(t, u),
            Baseline::Y => Position::new(u, t),
        }
    }

    /// Offset of `position` from the line along the non-baseline axis.
    pub fn axis_residual(&self, position: &Position) -> f64 {
        match self.baseline {
            Baseline::X => position.y - self.coordinate_at(position.x),
            Baseline::Y => position.x - self.coordinate_at(position.y),
        }
    }

    /// Signed perpendicular distance from the line.
    ///
    /// The axis residual scaled by `cos(angle)`; keeps the residual's sign and
    /// is exactly zero for any point produced by [`ReferenceLine::point_at`].
    pub fn signed_perpendicular_offset(&self, position: &Position) -> f64 {
        self.axis_residual(position) * self.angle.cos()
    }

    /// Sample the line from baseline coordinate `from` up to `to` every `step`.
    pub fn trace(&self, from: f64, to: f64, step: f64) -> Vec<Position> {
        if step <= 0.0 || to < from {
            return Vec::new();
        }
        let count = ((to - from) / step).floor() as usize + 1;
        (0..count)
            .map(|i| self.point_at(from + i as f64 * step))
            .collect()
    }
}
