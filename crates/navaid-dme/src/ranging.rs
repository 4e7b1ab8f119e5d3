//! Time-of-flight ranging.
//!
//! The receiver's interrogation travels to the station, waits out the
//! station's fixed reply delay, and travels back. The receiver subtracts
//! the known delay from the measured round trip and converts the
//! remainder back to distance:
//!
//! ```text
//! T = 2·d·K           ideal round trip
//! T + P               station adds its reply delay
//! (T + P) − P         receiver removes it
//! d' = (T + P − P) / 2K
//! ```
//!
//! The add and subtract are separate steps: an asymmetric receiver
//! correction shows up as a range error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use navaid_core::components::Station;
use navaid_core::config::RangingConfig;
use navaid_core::enums::SchedulePolicy;
use navaid_core::error::NavResult;
use navaid_core::types::Position;

use crate::session::RangingSession;

/// Every intermediate value of one interrogation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangingExchange {
    pub true_distance: f64,
    /// `2·d·K` (microseconds).
    pub ideal_round_trip_us: f64,
    /// Round trip as seen at the receiver, including the station's reply delay.
    pub station_reply_us: f64,
    /// Round trip after the receiver's delay correction.
    pub receiver_corrected_us: f64,
    pub decoded_distance: f64,
}

/// Distance measuring model. Holds only immutable configuration.
#[derive(Debug, Clone)]
pub struct RangingModel {
    config: RangingConfig,
}

impl RangingModel {
    /// Build a model, rejecting configurations that would produce NaN or infinite ranges.
    pub fn new(config: RangingConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RangingConfig {
        &self.config
    }

    /// Start a session whose first interrogation is one interval from time zero.
    pub fn new_session(&self) -> RangingSession {
        RangingSession::new(self.config.interval_secs)
    }

    /// Simulate one interrogation/reply cycle between `position` and `station`.
    pub fn interrogate(&self, position: &Position, station: &Station) -> RangingExchange {
        let k = self.config.propagation_us_per_unit;
        let true_distance = position.range_to(&station.position);
        let ideal_round_trip_us = 2.0 * true_distance * k;
        let station_reply_us = ideal_round_trip_us + self.config.station_reply_delay_us;
        let receiver_corrected_us = station_reply_us - self.config.receiver_reply_correction_us;
        let decoded_distance = receiver_corrected_us / (2.0 * k);

        RangingExchange {
            true_distance,
            ideal_round_trip_us,
            station_reply_us,
            receiver_corrected_us,
            decoded_distance,
        }
    }

    /// Decoded distance from `position` to `station`, never negative.
    ///
    /// A receiver correction larger than the station delay can push the raw
    /// decode below zero near the station; [`RangingExchange::decoded_distance`]
    /// keeps that raw value.
    pub fn measure(&self, position: &Position, station: &Station) -> f64 {
        self.interrogate(position, station).decoded_distance.max(0.0)
    }

    /// Advance the session's scheduler to `now` (seconds).
    ///
    /// Fires at most one interrogation per call. Returns the new reading
    /// when one fires, `None` while waiting.
    pub fn tick(
        &self,
        session: &mut RangingSession,
        now: f64,
        position: &Position,
        station: &Station,
    ) -> Option<f64> {
        session.elapsed = now;
        if now < session.next_due {
            return None;
        }

        let distance = self.measure(position, station);
        session.last_measured_distance = distance;
        session.measurements += 1;
        session.next_due = match self.config.policy {
            SchedulePolicy::FixedPhase => session.next_due + self.config.interval_secs,
            SchedulePolicy::Resync => now + self.config.interval_secs,
        };

        debug!(
            station = station.id,
            distance,
            next_due = session.next_due,
            "ranging interrogation"
        );
        Some(distance)
    }
}
