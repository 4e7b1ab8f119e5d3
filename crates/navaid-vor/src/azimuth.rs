//! Phase-difference azimuth encoding and decoding.
//!
//! The station radiates a reference tone and a variable tone at the same
//! modulation frequency. The variable tone lags or leads by exactly the
//! bearing from the station, so the receiver recovers the bearing as the
//! mean phase difference between the two.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::trace;

use navaid_core::config::AzimuthConfig;
use navaid_core::error::{NavError, NavResult};

use crate::analytic::unwrapped_phase;

/// Uniformly sampled `(time, amplitude)` trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTrace {
    pub sample_rate_hz: f64,
    pub amplitudes: Vec<f64>,
}

impl PhaseTrace {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Time of sample `i` (seconds).
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 / self.sample_rate_hz
    }

    /// `(time, amplitude)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(i, &a)| (self.time_at(i), a))
    }
}

/// The two tones radiated for one bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VorSignals {
    pub reference: PhaseTrace,
    pub variable: PhaseTrace,
}

/// Intermediate traces of one decode, for plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzimuthDetail {
    pub bearing_deg: f64,
    pub reference_phase: Vec<f64>,
    pub variable_phase: Vec<f64>,
    pub phase_difference: Vec<f64>,
}

/// Synthesize reference and variable tones for `true_bearing_rad`.
///
/// Both are `sin(2π f t)`, the variable one shifted by the bearing;
/// `round(sample_rate * duration)` samples at `t = i / sample_rate`.
pub fn encode(
    true_bearing_rad: f64,
    modulation_hz: f64,
    sample_rate_hz: f64,
    duration_secs: f64,
) -> VorSignals {
    let n = (sample_rate_hz * duration_secs).round() as usize;
    let omega = TAU * modulation_hz;
    let tone = |shift: f64| PhaseTrace {
        sample_rate_hz,
        amplitudes: (0..n)
            .map(|i| (omega * i as f64 / sample_rate_hz + shift).sin())
            .collect(),
    };
    VorSignals {
        reference: tone(0.0),
        variable: tone(true_bearing_rad),
    }
}

/// Wrap degrees into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Two-tone bearing decoder. Holds only immutable configuration.
#[derive(Debug, Clone)]
pub struct PhaseAzimuthDecoder {
    config: AzimuthConfig,
}

impl PhaseAzimuthDecoder {
    pub fn new(config: AzimuthConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AzimuthConfig {
        &self.config
    }

    /// Tones for `true_bearing_rad` using the configured frequency, rate and duration.
    pub fn encode(&self, true_bearing_rad: f64) -> VorSignals {
        encode(
            true_bearing_rad,
            self.config.modulation_hz,
            self.config.sample_rate_hz,
            self.config.duration_secs,
        )
    }

    /// Bearing in degrees, `[0, 360)`, from two equal-length traces.
    pub fn decode(&self, reference: &[f64], variable: &[f64]) -> NavResult<f64> {
        Ok(self.decode_with_detail(reference, variable)?.bearing_deg)
    }

    pub fn decode_traces(&self, signals: &VorSignals) -> NavResult<f64> {
        self.decode(&signals.reference.amplitudes, &signals.variable.amplitudes)
    }

    /// Decode and keep the unwrapped phases and their difference.
    pub fn decode_with_detail(
        &self,
        reference: &[f64],
        variable: &[f64],
    ) -> NavResult<AzimuthDetail> {
        if reference.is_empty() || variable.is_empty() {
            return Err(NavError::EmptyTrace);
        }
        if reference.len() != variable.len() {
            return Err(NavError::LengthMismatch {
                reference: reference.len(),
                variable: variable.len(),
            });
        }

        let reference_phase = unwrapped_phase(reference);
        let variable_phase = unwrapped_phase(variable);
        let phase_difference: Vec<f64> = variable_phase
            .iter()
            .zip(&reference_phase)
            .map(|(v, r)| v - r)
            .collect();

        // Averaging suppresses the transform's edge ripple.
        let mean = phase_difference.iter().sum::<f64>() / phase_difference.len() as f64;
        let bearing_deg = wrap_degrees(mean.to_degrees());
        trace!(mean_rad = mean, bearing_deg, samples = reference.len(), "azimuth decoded");

        Ok(AzimuthDetail {
            bearing_deg,
            reference_phase,
            variable_phase,
            phase_difference,
        })
    }

    /// Encode then decode; the receiver's reading for a true bearing.
    pub fn round_trip(&self, true_bearing_rad: f64) -> NavResult<f64> {
        self.decode_traces(&self.encode(true_bearing_rad))
    }
}
