//! Distance measuring equipment for NAVAID.
//!
//! Encodes geometric distance as a round-trip delay, decodes it back, and
//! schedules periodic interrogations per station.

pub mod ranging;
pub mod session;

pub use navaid_core as core;
pub use ranging::{RangingExchange, RangingModel};
pub use session::{RangingSession, SchedulerState};
