//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Width of the planar world (distance units).
pub const WORLD_WIDTH: f64 = 800.0;

/// Height of the planar world (distance units).
pub const WORLD_HEIGHT: f64 = 800.0;

// --- Ranging (DME) ---

/// One-way propagation time per distance unit, per leg (microseconds).
/// A round trip over distance `d` takes `2 * d * K`.
pub const RANGING_PROPAGATION_US_PER_UNIT: f64 = 5.37;

/// Fixed reply delay the ranging station inserts before answering (microseconds).
pub const RANGING_REPLY_DELAY_US: f64 = 50.0;

/// Seconds between interrogations.
pub const RANGING_INTERVAL_SECS: f64 = 3.0;

// --- Azimuth (VOR) ---

/// Modulation frequency shared by the reference and variable tones (Hz).
pub const AZIMUTH_MODULATION_HZ: f64 = 30.0;

/// Sample rate used when synthesizing the two tones (Hz).
pub const AZIMUTH_SAMPLE_RATE_HZ: f64 = 1000.0;

/// Length of each synthesized trace (seconds). Must span several modulation periods.
pub const AZIMUTH_DURATION_SECS: f64 = 1.0;

// --- Composite waveform (illustrative) ---

pub const COMPOSITE_SAMPLE_RATE_HZ: f64 = 44_100.0;
pub const COMPOSITE_DURATION_SECS: f64 = 1.0;
pub const COMPOSITE_AM_HZ: f64 = 2.0;
pub const COMPOSITE_MODULATION_INDEX: f64 = 0.5;
pub const COMPOSITE_SUBCARRIER_HZ: f64 = 1000.0;
pub const COMPOSITE_FM_HZ: f64 = 5.0;
pub const COMPOSITE_FM_BETA: f64 = 5.0;

// --- Dual-lobe deviation (ILS) ---

/// tanh transition scale: smaller = sharper separation around the centerline.
pub const LOBE_TRANSITION_SCALE: f64 = 20.0;

/// Additive guard for lobe-ratio denominators.
pub const LOBE_RATIO_EPSILON: f64 = 1e-6;

/// Localizer threshold (convergence point of the lateral fan).
pub const LOCALIZER_THRESHOLD: (f64, f64) = (400.0, 100.0);

/// Localizer centerline and boundary angles (degrees, measured from the y axis).
pub const LOCALIZER_CENTER_DEG: f64 = 0.0;
pub const LOCALIZER_BOUNDARY_DEG: f64 = 10.0;

/// Glideslope threshold (convergence point of the vertical fan).
pub const GLIDESLOPE_THRESHOLD: (f64, f64) = (700.0, 500.0);

/// Glideslope centerline, upper and lower angles (degrees, measured from the x axis).
pub const GLIDESLOPE_CENTER_DEG: f64 = 9.0;
pub const GLIDESLOPE_UPPER_DEG: f64 = 15.0;
pub const GLIDESLOPE_LOWER_DEG: f64 = 3.0;

/// Spacing used when sampling fan lines for drawing.
pub const FAN_TRACE_STEP: f64 = 10.0;

// --- Aircraft ---

/// Heading jitter per tick when the aircraft wanders (radians).
pub const WANDER_MAX_TURN_PER_TICK: f64 = 0.05;

/// Default wander speed (units per second).
pub const WANDER_SPEED: f64 = 20.0;
