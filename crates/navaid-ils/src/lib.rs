//! Instrument landing system deviation for NAVAID.
//!
//! A single dual-lobe model serves both the localizer (lateral) and the
//! glideslope (vertical); only the reference line and needle sense differ.

pub mod deviation;
pub mod fan;
pub mod instrument;

pub use navaid_core as core;
pub use deviation::{DualLobeDeviationModel, LobeDominance};
pub use fan::CourseFan;
pub use instrument::{Instrument, NeedleSense};

#[cfg(test)]
mod tests;
