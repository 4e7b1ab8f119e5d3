//! Tests for geometry, configuration, and serde of shared types.

use approx::assert_abs_diff_eq;

use crate::commands::NavCommand;
use crate::config::{AzimuthConfig, DeviationConfig, NavConfig, RangingConfig};
use crate::enums::*;
use crate::error::NavError;
use crate::geometry::{distance, ReferenceLine};
use crate::state::InstrumentSnapshot;
use crate::types::{Position, SimTime, Velocity};

// ---- Position / Velocity ----

#[test]
fn test_position_range() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    assert_abs_diff_eq!(a.range_to(&b), 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(distance(&b, &a), 5.0, epsilon = 1e-12);
    assert_eq!(a.range_to(&a), 0.0);
}

#[test]
fn test_position_bearing() {
    let origin = Position::new(0.0, 0.0);
    assert_abs_diff_eq!(origin.bearing_to(&Position::new(0.0, 100.0)), 0.0);
    assert_abs_diff_eq!(
        origin.bearing_to(&Position::new(100.0, 0.0)),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
    // West wraps into [0, 2π)
    let west = origin.bearing_to(&Position::new(-100.0, 0.0));
    assert_abs_diff_eq!(west, 1.5 * std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn test_position_advance_and_clamp() {
    let p = Position::new(10.0, 10.0);
    let moved = p.advanced(&Velocity::new(30.0, -60.0), 0.5);
    assert_abs_diff_eq!(moved.x, 25.0);
    assert_abs_diff_eq!(moved.y, -20.0);

    let clamped = moved.clamped(20.0, 100.0);
    assert_eq!(clamped, Position::new(20.0, 0.0));
}

#[test]
fn test_velocity_heading_round_trip() {
    let v = Velocity::from_heading(10.0, std::f64::consts::FRAC_PI_2);
    assert_abs_diff_eq!(v.x, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.speed(), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v.heading(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..30 {
        time.advance();
    }
    assert_eq!(time.tick, 30);
    assert_abs_diff_eq!(time.elapsed_secs, 1.0, epsilon = 1e-12);
}

// ---- Reference lines ----

#[test]
fn test_lines_converge_at_threshold() {
    let threshold = Position::new(700.0, 500.0);
    let lines = [3.0, 9.0, 15.0]
        .map(|deg| ReferenceLine::from_degrees(threshold, deg, Baseline::X));
    for line in &lines {
        assert_abs_diff_eq!(line.coordinate_at(700.0), 500.0);
        assert_eq!(line.signed_perpendicular_offset(&threshold), 0.0);
    }
    // Steeper lines sit lower in y (higher above the runway in screen terms) away from it.
    assert!(lines[2].coordinate_at(100.0) < lines[1].coordinate_at(100.0));
    assert!(lines[1].coordinate_at(100.0) < lines[0].coordinate_at(100.0));
}

#[test]
fn test_baseline_y_projection() {
    let line = ReferenceLine::from_degrees(Position::new(400.0, 100.0), 10.0, Baseline::Y);
    let expected = 400.0 - 10f64.to_radians().tan() * (100.0 - 600.0);
    assert_abs_diff_eq!(line.coordinate_at(600.0), expected, epsilon = 1e-9);
    let p = line.point_at(600.0);
    assert_abs_diff_eq!(p.y, 600.0);
    assert_abs_diff_eq!(p.x, expected, epsilon = 1e-9);
}

#[test]
fn test_points_on_line_have_zero_offset() {
    for baseline in [Baseline::X, Baseline::Y] {
        let line = ReferenceLine::from_degrees(Position::new(123.0, 456.0), 7.3, baseline);
        for t in [-300.0, 0.0, 17.25, 123.0, 999.9] {
            assert_eq!(line.signed_perpendicular_offset(&line.point_at(t)), 0.0);
        }
    }
}

#[test]
fn test_perpendicular_offset_is_true_distance() {
    let angle = 30f64.to_radians();
    let line = ReferenceLine::new(Position::new(0.0, 0.0), angle, Baseline::X);
    // Step 10 units along the unit normal (-sin, cos) from a point on the line.
    let on_line = line.point_at(50.0);
    let off = Position::new(on_line.x - 10.0 * angle.sin(), on_line.y + 10.0 * angle.cos());
    assert_abs_diff_eq!(line.signed_perpendicular_offset(&off), 10.0, epsilon = 1e-9);
    let other = Position::new(on_line.x + 10.0 * angle.sin(), on_line.y - 10.0 * angle.cos());
    assert_abs_diff_eq!(line.signed_perpendicular_offset(&other), -10.0, epsilon = 1e-9);
}

#[test]
fn test_trace_sampling() {
    let line = ReferenceLine::from_degrees(Position::new(400.0, 100.0), 0.0, Baseline::Y);
    let points = line.trace(0.0, 100.0, 10.0);
    assert_eq!(points.len(), 11);
    assert!(points.iter().all(|p| p.x == 400.0));
    assert!(line.trace(0.0, 100.0, 0.0).is_empty());
    assert!(line.trace(100.0, 0.0, 10.0).is_empty());
}

#[test]
fn test_vertical_line_rejected() {
    let line = ReferenceLine::new(Position::default(), std::f64::consts::FRAC_PI_2, Baseline::X);
    assert!(matches!(line.validate(), Err(NavError::InvalidConfig { .. })));
    let ok = ReferenceLine::from_degrees(Position::default(), 9.0, Baseline::X);
    assert!(ok.validate().is_ok());
}

// ---- Configuration ----

#[test]
fn test_default_config_is_valid() {
    assert!(NavConfig::default().validate().is_ok());
    assert_eq!(AzimuthConfig::default().sample_count(), 1000);
}

#[test]
fn test_invalid_config_fails_fast() {
    let bad_scale = DeviationConfig {
        transition_scale: 0.0,
    };
    let err = bad_scale.validate().unwrap_err();
    assert!(err.to_string().contains("transition_scale"));

    let bad_interval = RangingConfig {
        interval_secs: -1.0,
        ..Default::default()
    };
    assert!(bad_interval.validate().is_err());

    let nan_k = RangingConfig {
        propagation_us_per_unit: f64::NAN,
        ..Default::default()
    };
    assert!(nan_k.validate().is_err());

    let zero_rate = AzimuthConfig {
        sample_rate_hz: 0.0,
        ..Default::default()
    };
    assert!(zero_rate.validate().is_err());

    let above_nyquist = AzimuthConfig {
        modulation_hz: 600.0,
        ..Default::default()
    };
    assert!(above_nyquist.validate().is_err());
}

#[test]
fn test_config_json_partial_override() {
    let json = r#"{ "ranging": { "interval_secs": 1.5, "policy": "Resync" } }"#;
    let config = NavConfig::from_json_str(json).unwrap();
    assert_eq!(config.ranging.interval_secs, 1.5);
    assert_eq!(config.ranging.policy, SchedulePolicy::Resync);
    assert_eq!(config.ranging.station_reply_delay_us, 50.0);
    assert_eq!(config.azimuth, AzimuthConfig::default());
}

#[test]
fn test_config_json_rejects_invalid_values() {
    let json = r#"{ "deviation": { "transition_scale": -4.0 } }"#;
    assert!(matches!(
        NavConfig::from_json_str(json),
        Err(NavError::InvalidConfig { .. })
    ));
    assert!(matches!(
        NavConfig::from_json_str("{ not json"),
        Err(NavError::Json(_))
    ));
}

#[test]
fn test_config_load_missing_file() {
    let result = NavConfig::load(std::path::Path::new("/nonexistent/navaid.json"));
    assert!(matches!(result, Err(NavError::Io(_))));
}

// ---- Serde ----

#[test]
fn test_command_serde() {
    let commands = vec![
        NavCommand::LoadScenario {
            scenario: ScenarioId::Localizer,
        },
        NavCommand::MoveAircraft {
            position: Position::new(1.0, 2.0),
        },
        NavCommand::SetAircraftVelocity {
            velocity: Velocity::new(3.0, 4.0),
        },
        NavCommand::Wander { speed: 5.0 },
        NavCommand::Pause,
        NavCommand::Resume,
    ];
    for command in &commands {
        let json = serde_json::to_string(command).unwrap();
        let _back: NavCommand = serde_json::from_str(&json).unwrap();
    }
    let json = serde_json::to_string(&NavCommand::Pause).unwrap();
    assert_eq!(json, r#"{"type":"Pause"}"#);
}

#[test]
fn test_snapshot_serde() {
    let snapshot = InstrumentSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: InstrumentSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.scenario, back.scenario);
    assert!(json.len() < 512, "Empty snapshot was {} bytes", json.len());
}
