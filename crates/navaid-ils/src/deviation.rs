//! Dual-lobe deviation around a reference line.
//!
//! Two directional lobes overlap on the line. Lobe A dominates on the
//! negative side, lobe B on the positive side, and they balance exactly on
//! the line. Their difference is the deviation that drives a needle.

use serde::{Deserialize, Serialize};

use navaid_core::config::DeviationConfig;
use navaid_core::constants::LOBE_RATIO_EPSILON;
use navaid_core::error::{require_positive, NavResult};
use navaid_core::geometry::ReferenceLine;
use navaid_core::types::Position;

/// Normalized share of each lobe in the blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LobeDominance {
    pub a_share: f64,
    pub b_share: f64,
}

/// Deviation model for one reference line. Pure; holds only configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualLobeDeviationModel {
    line: ReferenceLine,
    transition_scale: f64,
}

impl DualLobeDeviationModel {
    pub fn new(line: ReferenceLine, config: DeviationConfig) -> NavResult<Self> {
        line.validate()?;
        require_positive("transition_scale", config.transition_scale)?;
        Ok(Self {
            line,
            transition_scale: config.transition_scale,
        })
    }

    pub fn line(&self) -> &ReferenceLine {
        &self.line
    }

    pub fn transition_scale(&self) -> f64 {
        self.transition_scale
    }

    pub fn signed_perpendicular_offset(&self, position: &Position) -> f64 {
        self.line.signed_perpendicular_offset(position)
    }

    /// Strength of lobe A in `[0, 1]`; 0.5 on the line.
    pub fn lobe_strength_a(&self, position: &Position) -> f64 {
        let offset = self.signed_perpendicular_offset(position);
        0.5 + 0.5 * (-offset / self.transition_scale).tanh()
    }

    /// Strength of lobe B in `[0, 1]`; complements lobe A.
    pub fn lobe_strength_b(&self, position: &Position) -> f64 {
        let offset = self.signed_perpendicular_offset(position);
        0.5 + 0.5 * (offset / self.transition_scale).tanh()
    }

    /// `a - b`. Zero on the line, negative on the positive side.
    pub fn deviation(&self, position: &Position) -> f64 {
        self.lobe_strength_a(position) - self.lobe_strength_b(position)
    }

    /// Deviation clamped to `[-1, 1]`.
    pub fn clamped_deviation(&self, position: &Position) -> f64 {
        self.deviation(position).clamp(-1.0, 1.0)
    }

    /// `b / (a + ε)`.
    pub fn lobe_ratio(&self, position: &Position) -> f64 {
        self.lobe_strength_b(position) / (self.lobe_strength_a(position) + LOBE_RATIO_EPSILON)
    }

    pub fn dominance(&self, position: &Position) -> LobeDominance {
        let ratio = self.lobe_ratio(position);
        LobeDominance {
            a_share: 1.0 / (1.0 + ratio),
            b_share: ratio / (1.0 + ratio),
        }
    }
}
