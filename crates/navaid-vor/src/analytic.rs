//! Analytic signal and phase helpers.
//!
//! The analytic signal is built in the frequency domain: negative
//! frequencies are zeroed, positive ones doubled, DC (and Nyquist for even
//! lengths) kept as-is. Its argument is the instantaneous phase.

use std::f64::consts::{PI, TAU};

use rustfft::{num_complex::Complex64, FftPlanner};

/// Analytic signal of a real sequence. Real part equals the input, imaginary
/// part is its Hilbert transform.
pub fn analytic_signal(signal: &[f64]) -> Vec<Complex64> {
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    forward.process(&mut buffer);

    let half = n / 2;
    for (k, bin) in buffer.iter_mut().enumerate() {
        let gain = if k == 0 || (n % 2 == 0 && k == half) {
            1.0
        } else if k <= half {
            2.0
        } else {
            0.0
        };
        *bin *= gain;
    }

    inverse.process(&mut buffer);
    let scale = 1.0 / n as f64;
    for sample in buffer.iter_mut() {
        *sample *= scale;
    }
    buffer
}

/// Wrapped instantaneous phase, `(-π, π]`.
pub fn instantaneous_phase(analytic: &[Complex64]) -> Vec<f64> {
    analytic.iter().map(|z| z.arg()).collect()
}

/// Remove 2π jumps so successive samples never differ by more than π.
///
/// A jump of exactly π keeps its sign when positive.
pub fn unwrap_phase(phases: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phases.len());
    let Some(&first) = phases.first() else {
        return out;
    };
    out.push(first);

    let mut correction = 0.0;
    for pair in phases.windows(2) {
        let delta = pair[1] - pair[0];
        if delta.abs() >= PI {
            let mut wrapped = (delta + PI).rem_euclid(TAU) - PI;
            if wrapped == -PI && delta > 0.0 {
                wrapped = PI;
            }
            correction += wrapped - delta;
        }
        out.push(pair[1] + correction);
    }
    out
}

/// Unwrapped instantaneous phase of a real sequence.
pub fn unwrapped_phase(signal: &[f64]) -> Vec<f64> {
    unwrap_phase(&instantaneous_phase(&analytic_signal(signal)))
}
