//! Illustrative composite waveform: an AM envelope riding on an FM subcarrier.
//!
//! Not a carrier simulation; it only shows how a low-frequency tone and a
//! frequency-modulated subcarrier share one signal.

use std::f64::consts::TAU;

use rustfft::{num_complex::Complex64, FftPlanner};
use serde::{Deserialize, Serialize};

use navaid_core::config::CompositeConfig;
use navaid_core::error::NavResult;

/// Sampled composite signal and its parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeSignal {
    pub sample_rate_hz: f64,
    /// `1 + m·sin(2π f_am t)`
    pub envelope: Vec<f64>,
    /// `cos(2π f_c t + β·sin(2π f_fm t))`
    pub subcarrier: Vec<f64>,
    /// `envelope · subcarrier`
    pub composite: Vec<f64>,
}

impl CompositeSignal {
    pub fn generate(config: &CompositeConfig) -> NavResult<Self> {
        config.validate()?;

        let n = config.sample_count();
        let mut envelope = Vec::with_capacity(n);
        let mut subcarrier = Vec::with_capacity(n);
        let mut composite = Vec::with_capacity(n);

        for i in 0..n {
            let t = i as f64 / config.sample_rate_hz;
            let env = 1.0 + config.modulation_index * (TAU * config.am_hz * t).sin();
            let phase =
                TAU * config.subcarrier_hz * t + config.fm_beta * (TAU * config.fm_hz * t).sin();
            let sub = phase.cos();
            envelope.push(env);
            subcarrier.push(sub);
            composite.push(env * sub);
        }

        Ok(Self {
            sample_rate_hz: config.sample_rate_hz,
            envelope,
            subcarrier,
            composite,
        })
    }

    pub fn len(&self) -> usize {
        self.composite.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composite.is_empty()
    }

    /// Positive-frequency magnitude spectrum of the composite, `(frequency_hz, |X| / N)`.
    pub fn spectrum(&self) -> Vec<(f64, f64)> {
        let n = self.composite.len();
        if n == 0 {
            return Vec::new();
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(n);
        let mut buffer: Vec<Complex64> = self
            .composite
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        fft.process(&mut buffer);

        let bin_hz = self.sample_rate_hz / n as f64;
        buffer
            .iter()
            .enumerate()
            .take(n.div_ceil(2))
            .skip(1)
            .map(|(k, bin)| (k as f64 * bin_hz, bin.norm() / n as f64))
            .collect()
    }
}
