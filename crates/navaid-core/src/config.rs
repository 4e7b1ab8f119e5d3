//! Model configuration.
//!
//! Every value is fixed at construction and never mutated while a
//! simulation runs. Defaults come from [`crate::constants`]; JSON files
//! may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SchedulePolicy;
use crate::error::{require_non_negative, require_positive, NavError, NavResult};

/// Time-of-flight ranging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangingConfig {
    /// Propagation time per distance unit per leg (microseconds).
    pub propagation_us_per_unit: f64,
    /// Reply delay added by the station (microseconds).
    pub station_reply_delay_us: f64,
    /// Reply delay the receiver subtracts (microseconds). Equal to the
    /// station delay unless modelling an asymmetric fault.
    pub receiver_reply_correction_us: f64,
    /// Seconds between interrogations.
    pub interval_secs: f64,
    pub policy: SchedulePolicy,
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            propagation_us_per_unit: RANGING_PROPAGATION_US_PER_UNIT,
            station_reply_delay_us: RANGING_REPLY_DELAY_US,
            receiver_reply_correction_us: RANGING_REPLY_DELAY_US,
            interval_secs: RANGING_INTERVAL_SECS,
            policy: SchedulePolicy::default(),
        }
    }
}

impl RangingConfig {
    pub fn validate(&self) -> NavResult<()> {
        require_positive("propagation_us_per_unit", self.propagation_us_per_unit)?;
        require_non_negative("station_reply_delay_us", self.station_reply_delay_us)?;
        require_non_negative(
            "receiver_reply_correction_us",
            self.receiver_reply_correction_us,
        )?;
        require_positive("interval_secs", self.interval_secs)
    }
}

/// Two-tone phase azimuth parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzimuthConfig {
    pub modulation_hz: f64,
    pub sample_rate_hz: f64,
    pub duration_secs: f64,
}

impl Default for AzimuthConfig {
    fn default() -> Self {
        Self {
            modulation_hz: AZIMUTH_MODULATION_HZ,
            sample_rate_hz: AZIMUTH_SAMPLE_RATE_HZ,
            duration_secs: AZIMUTH_DURATION_SECS,
        }
    }
}

impl AzimuthConfig {
    /// Number of samples per trace: `round(sample_rate * duration)`.
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz * self.duration_secs).round() as usize
    }

    pub fn validate(&self) -> NavResult<()> {
        require_positive("modulation_hz", self.modulation_hz)?;
        require_positive("sample_rate_hz", self.sample_rate_hz)?;
        require_positive("duration_secs", self.duration_secs)?;
        if self.modulation_hz >= self.sample_rate_hz / 2.0 {
            return Err(NavError::invalid(
                "modulation_hz",
                format!(
                    "{} Hz is at or above Nyquist for {} Hz sampling",
                    self.modulation_hz, self.sample_rate_hz
                ),
            ));
        }
        if self.sample_count() < 2 {
            return Err(NavError::invalid(
                "duration_secs",
                "sample_rate * duration must yield at least 2 samples",
            ));
        }
        Ok(())
    }
}

/// Illustrative AM envelope with an FM subcarrier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    pub sample_rate_hz: f64,
    pub duration_secs: f64,
    pub am_hz: f64,
    pub modulation_index: f64,
    pub subcarrier_hz: f64,
    pub fm_hz: f64,
    pub fm_beta: f64,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: COMPOSITE_SAMPLE_RATE_HZ,
            duration_secs: COMPOSITE_DURATION_SECS,
            am_hz: COMPOSITE_AM_HZ,
            modulation_index: COMPOSITE_MODULATION_INDEX,
            subcarrier_hz: COMPOSITE_SUBCARRIER_HZ,
            fm_hz: COMPOSITE_FM_HZ,
            fm_beta: COMPOSITE_FM_BETA,
        }
    }
}

impl CompositeConfig {
    pub fn sample_count(&self) -> usize {
        (self.sample_rate_hz * self.duration_secs).round() as usize
    }

    pub fn validate(&self) -> NavResult<()> {
        require_positive("sample_rate_hz", self.sample_rate_hz)?;
        require_positive("duration_secs", self.duration_secs)?;
        require_non_negative("am_hz", self.am_hz)?;
        require_non_negative("modulation_index", self.modulation_index)?;
        require_positive("subcarrier_hz", self.subcarrier_hz)?;
        require_non_negative("fm_hz", self.fm_hz)?;
        require_non_negative("fm_beta", self.fm_beta)?;
        if self.subcarrier_hz >= self.sample_rate_hz / 2.0 {
            return Err(NavError::invalid(
                "subcarrier_hz",
                "subcarrier must sit below Nyquist",
            ));
        }
        if self.sample_count() == 0 {
            return Err(NavError::invalid(
                "duration_secs",
                "sample_rate * duration must yield at least 1 sample",
            ));
        }
        Ok(())
    }
}

/// Dual-lobe deviation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviationConfig {
    pub transition_scale: f64,
}

impl Default for DeviationConfig {
    fn default() -> Self {
        Self {
            transition_scale: LOBE_TRANSITION_SCALE,
        }
    }
}

impl DeviationConfig {
    pub fn validate(&self) -> NavResult<()> {
        require_positive("transition_scale", self.transition_scale)
    }
}

/// All model configuration in one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub ranging: RangingConfig,
    pub azimuth: AzimuthConfig,
    pub deviation: DeviationConfig,
}

impl NavConfig {
    /// Parse from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let config: NavConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> NavResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> NavResult<()> {
        self.ranging.validate()?;
        self.azimuth.validate()?;
        self.deviation.validate()
    }
}
