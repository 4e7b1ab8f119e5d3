//! Needle instruments driven by a deviation model.

use serde::{Deserialize, Serialize};

use navaid_core::config::DeviationConfig;
use navaid_core::enums::InstrumentKind;
use navaid_core::error::NavResult;
use navaid_core::types::Position;

use crate::deviation::DualLobeDeviationModel;
use crate::fan::CourseFan;

/// Sign applied to the clamped deviation before it reaches the needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeedleSense {
    Direct,
    Inverted,
}

impl NeedleSense {
    pub fn for_kind(kind: InstrumentKind) -> Self {
        match kind {
            InstrumentKind::Localizer => NeedleSense::Direct,
            // Above the path (smaller y) the deviation is positive and the
            // needle reads negative.
            InstrumentKind::Glideslope => NeedleSense::Inverted,
        }
    }

    pub fn apply(self, deviation: f64) -> f64 {
        match self {
            NeedleSense::Direct => deviation,
            NeedleSense::Inverted => -deviation,
        }
    }
}

/// One course instrument: a deviation model plus its needle sense.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub kind: InstrumentKind,
    pub sense: NeedleSense,
    pub model: DualLobeDeviationModel,
}

impl Instrument {
    pub fn new(kind: InstrumentKind, model: DualLobeDeviationModel) -> Self {
        Self {
            kind,
            sense: NeedleSense::for_kind(kind),
            model,
        }
    }

    /// Localizer on the default lateral course.
    pub fn localizer(config: DeviationConfig) -> NavResult<Self> {
        let model = DualLobeDeviationModel::new(CourseFan::localizer_default().center, config)?;
        Ok(Self::new(InstrumentKind::Localizer, model))
    }

    /// Glideslope on the default vertical path.
    pub fn glideslope(config: DeviationConfig) -> NavResult<Self> {
        let model = DualLobeDeviationModel::new(CourseFan::glideslope_default().center, config)?;
        Ok(Self::new(InstrumentKind::Glideslope, model))
    }

    /// Needle position in `[-1, 1]`.
    pub fn deflection(&self, position: &Position) -> f64 {
        self.sense.apply(self.model.clamped_deviation(position))
    }
}
