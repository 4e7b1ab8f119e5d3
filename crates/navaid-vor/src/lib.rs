//! VHF omnidirectional range for NAVAID.
//!
//! Encodes a bearing as the phase offset between two tones and recovers it
//! through analytic-signal phase extraction.

pub mod analytic;
pub mod azimuth;
pub mod composite;

pub use navaid_core as core;
pub use azimuth::{encode, AzimuthDetail, PhaseAzimuthDecoder, PhaseTrace, VorSignals};
pub use composite::CompositeSignal;
