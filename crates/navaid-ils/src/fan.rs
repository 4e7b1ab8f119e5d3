//! Course fans: a centerline and two boundary lines sharing a threshold.

use serde::{Deserialize, Serialize};

use navaid_core::constants::*;
use navaid_core::enums::Baseline;
use navaid_core::error::NavResult;
use navaid_core::geometry::ReferenceLine;
use navaid_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseFan {
    pub center: ReferenceLine,
    pub upper: ReferenceLine,
    pub lower: ReferenceLine,
}

impl CourseFan {
    /// Three lines through `threshold`, angles in degrees.
    pub fn new(
        threshold: Position,
        center_deg: f64,
        upper_deg: f64,
        lower_deg: f64,
        baseline: Baseline,
    ) -> NavResult<Self> {
        let fan = Self {
            center: ReferenceLine::from_degrees(threshold, center_deg, baseline),
            upper: ReferenceLine::from_degrees(threshold, upper_deg, baseline),
            lower: ReferenceLine::from_degrees(threshold, lower_deg, baseline),
        };
        for line in fan.lines() {
            line.validate()?;
        }
        Ok(fan)
    }

    /// Plan-view lateral course along the y axis.
    pub fn localizer_default() -> Self {
        let (x, y) = LOCALIZER_THRESHOLD;
        let threshold = Position::new(x, y);
        Self {
            center: ReferenceLine::from_degrees(threshold, LOCALIZER_CENTER_DEG, Baseline::Y),
            upper: ReferenceLine::from_degrees(threshold, LOCALIZER_BOUNDARY_DEG, Baseline::Y),
            lower: ReferenceLine::from_degrees(threshold, -LOCALIZER_BOUNDARY_DEG, Baseline::Y),
        }
    }

    /// Vertical-profile descent path along the x axis.
    pub fn glideslope_default() -> Self {
        let (x, y) = GLIDESLOPE_THRESHOLD;
        let threshold = Position::new(x, y);
        Self {
            center: ReferenceLine::from_degrees(threshold, GLIDESLOPE_CENTER_DEG, Baseline::X),
            upper: ReferenceLine::from_degrees(threshold, GLIDESLOPE_UPPER_DEG, Baseline::X),
            lower: ReferenceLine::from_degrees(threshold, GLIDESLOPE_LOWER_DEG, Baseline::X),
        }
    }

    pub fn threshold(&self) -> Position {
        self.center.convergence
    }

    /// `[center, upper, lower]`.
    pub fn lines(&self) -> [ReferenceLine; 3] {
        [self.center, self.upper, self.lower]
    }

    /// Polylines for drawing, sampled every [`FAN_TRACE_STEP`] from `from` to `to`.
    pub fn traces(&self, from: f64, to: f64) -> [Vec<Position>; 3] {
        self.lines().map(|line| line.trace(from, to, FAN_TRACE_STEP))
    }
}
