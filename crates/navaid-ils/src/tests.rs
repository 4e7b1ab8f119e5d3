//! Tests for the dual-lobe deviation model and needle instruments.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use navaid_core::config::DeviationConfig;
use navaid_core::enums::{Baseline, InstrumentKind};
use navaid_core::error::NavError;
use navaid_core::geometry::ReferenceLine;
use navaid_core::types::Position;

use crate::{CourseFan, DualLobeDeviationModel, Instrument, NeedleSense};

fn glideslope_model() -> DualLobeDeviationModel {
    DualLobeDeviationModel::new(CourseFan::glideslope_default().center, DeviationConfig::default())
        .unwrap()
}

fn localizer_model() -> DualLobeDeviationModel {
    DualLobeDeviationModel::new(CourseFan::localizer_default().center, DeviationConfig::default())
        .unwrap()
}

// ---- Lobes ----

#[test]
fn test_centerline_is_exactly_zero() {
    for model in [glideslope_model(), localizer_model()] {
        for t in [0.0, 100.0, 250.5, 399.0, 650.0] {
            let on_line = model.line().point_at(t);
            assert_eq!(model.deviation(&on_line), 0.0, "t = {t}");
            assert_eq!(model.lobe_strength_a(&on_line), 0.5);
            assert_eq!(model.lobe_strength_b(&on_line), 0.5);
        }
    }
}

#[test]
fn test_lobes_are_complementary() {
    let model = glideslope_model();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Position::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..800.0));
        let a = model.lobe_strength_a(&p);
        let b = model.lobe_strength_b(&p);
        assert!((0.0..=1.0).contains(&a));
        assert!((0.0..=1.0).contains(&b));
        assert_abs_diff_eq!(a + b, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_localizer_sign_convention() {
    let model = localizer_model();
    // Right of course: lobe B dominates, deviation negative.
    let right = Position::new(420.0, 500.0);
    assert!(model.lobe_strength_b(&right) > model.lobe_strength_a(&right));
    assert!(model.deviation(&right) < 0.0);
    let left = Position::new(380.0, 500.0);
    assert!(model.deviation(&left) > 0.0);
    assert_abs_diff_eq!(model.deviation(&right), -model.deviation(&left), epsilon = 1e-12);
}

#[test]
fn test_deviation_matches_tanh_of_offset() {
    let model = localizer_model();
    // Vertical course: offset is just x - 400.
    let p = Position::new(410.0, 300.0);
    assert_abs_diff_eq!(model.signed_perpendicular_offset(&p), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(model.deviation(&p), -(0.5f64).tanh(), epsilon = 1e-12);
}

#[test]
fn test_deviation_monotone_and_saturating() {
    let model = glideslope_model();
    let x = 300.0;
    let base = model.line().coordinate_at(x);
    let mut previous = f64::INFINITY;
    for step in -40..=40 {
        let p = Position::new(x, base + step as f64 * 2.0);
        let d = model.deviation(&p);
        assert!(d < previous);
        assert!(d.abs() < 1.0);
        previous = d;
    }

    let far = Position::new(x, base + 10_000.0);
    assert_eq!(model.clamped_deviation(&far), -1.0);
    assert!(model.clamped_deviation(&far) >= -1.0);
}

#[test]
fn test_lobe_ratio_guarded_when_a_vanishes() {
    let model = localizer_model();
    let far_right = Position::new(5_000.0, 300.0);
    assert_eq!(model.lobe_strength_a(&far_right), 0.0);
    let ratio = model.lobe_ratio(&far_right);
    assert!(ratio.is_finite());
    assert_abs_diff_eq!(ratio, 1.0 / 1e-6, epsilon = 1e-3);

    let dominance = model.dominance(&far_right);
    assert!(dominance.b_share > 0.999);
    assert_abs_diff_eq!(dominance.a_share + dominance.b_share, 1.0, epsilon = 1e-12);
}

#[test]
fn test_dominance_balanced_on_line() {
    let model = glideslope_model();
    let on_line = model.line().point_at(200.0);
    let dominance = model.dominance(&on_line);
    assert_abs_diff_eq!(dominance.a_share, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(dominance.b_share, 0.5, epsilon = 1e-6);
}

#[test]
fn test_invalid_model_rejected() {
    let line = CourseFan::localizer_default().center;
    for scale in [0.0, -1.0, f64::NAN] {
        assert!(matches!(
            DualLobeDeviationModel::new(line, DeviationConfig { transition_scale: scale }),
            Err(NavError::InvalidConfig { .. })
        ));
    }
    let degenerate = ReferenceLine::from_degrees(Position::new(0.0, 0.0), 90.0, Baseline::X);
    assert!(DualLobeDeviationModel::new(degenerate, DeviationConfig::default()).is_err());
}

// ---- Instruments ----

#[test]
fn test_needle_sense() {
    assert_eq!(NeedleSense::for_kind(InstrumentKind::Localizer), NeedleSense::Direct);
    assert_eq!(NeedleSense::for_kind(InstrumentKind::Glideslope), NeedleSense::Inverted);
    assert_eq!(NeedleSense::Inverted.apply(0.25), -0.25);
}

#[test]
fn test_localizer_deflection_follows_deviation() {
    let localizer = Instrument::localizer(DeviationConfig::default()).unwrap();
    assert_eq!(localizer.kind, InstrumentKind::Localizer);
    let p = Position::new(430.0, 600.0);
    assert_eq!(localizer.deflection(&p), localizer.model.clamped_deviation(&p));
    assert!(localizer.deflection(&p) < 0.0);
}

#[test]
fn test_glideslope_deflection_inverted() {
    let glideslope = Instrument::glideslope(DeviationConfig::default()).unwrap();
    let path_y = glideslope.model.line().coordinate_at(300.0);
    let off_path = Position::new(300.0, path_y + 15.0);
    assert_eq!(glideslope.deflection(&off_path), -glideslope.model.clamped_deviation(&off_path));
    assert!(glideslope.deflection(&off_path) > 0.0);
    assert_eq!(glideslope.deflection(&Position::new(300.0, path_y)), 0.0);
}

#[test]
fn test_glideslope_profile_is_y_down() {
    // Smaller y is higher above the runway in the vertical profile.
    let glideslope = Instrument::glideslope(DeviationConfig::default()).unwrap();
    let path_y = glideslope.model.line().coordinate_at(300.0);
    let high = Position::new(300.0, path_y - 15.0);
    let low = Position::new(300.0, path_y + 15.0);

    assert!(glideslope.model.signed_perpendicular_offset(&high) < 0.0);
    assert!(glideslope.model.deviation(&high) > 0.0);
    assert!(glideslope.deflection(&high) < 0.0);
    assert!(glideslope.deflection(&low) > 0.0);

    // The steepest boundary of the fan sits highest, so its y is smallest.
    let fan = CourseFan::glideslope_default();
    assert!(fan.upper.coordinate_at(300.0) < path_y);
    assert!(fan.lower.coordinate_at(300.0) > path_y);
}

// ---- Fans ----

#[test]
fn test_default_fans_share_threshold() {
    let loc = CourseFan::localizer_default();
    assert_eq!(loc.threshold(), Position::new(400.0, 100.0));
    for line in loc.lines() {
        assert_eq!(line.convergence, loc.threshold());
        assert_eq!(line.baseline, Baseline::Y);
    }
    assert_abs_diff_eq!(loc.upper.angle, -loc.lower.angle);

    let gs = CourseFan::glideslope_default();
    assert_eq!(gs.threshold(), Position::new(700.0, 500.0));
    assert_abs_diff_eq!(gs.center.angle, 9f64.to_radians());
    assert_abs_diff_eq!(gs.upper.angle, 15f64.to_radians());
    assert_abs_diff_eq!(gs.lower.angle, 3f64.to_radians());
}

#[test]
fn test_fan_traces() {
    let gs = CourseFan::glideslope_default();
    let [center, upper, lower] = gs.traces(0.0, 700.0);
    assert_eq!(center.len(), 71);
    assert_eq!(upper.len(), 71);
    // All three meet at the threshold.
    for trace in [&center, &upper, &lower] {
        let last = trace[trace.len() - 1];
        assert_abs_diff_eq!(last.x, 700.0, epsilon = 1e-9);
        assert_abs_diff_eq!(last.y, 500.0, epsilon = 1e-9);
    }
}

#[test]
fn test_fan_rejects_vertical_line() {
    let result = CourseFan::new(Position::new(0.0, 0.0), 0.0, 90.0, -10.0, Baseline::Y);
    assert!(result.is_err());
}

// ---- Properties ----

proptest! {
    #[test]
    fn complementary_everywhere(x in -2_000.0f64..2_000.0, y in -2_000.0f64..2_000.0) {
        let model = localizer_model();
        let p = Position::new(x, y);
        let sum = model.lobe_strength_a(&p) + model.lobe_strength_b(&p);
        prop_assert!((sum - 1.0).abs() < 1e-12);
        let d = model.clamped_deviation(&p);
        prop_assert!((-1.0..=1.0).contains(&d));
    }

    #[test]
    fn monotone_in_offset(x in 0.0f64..700.0, o1 in -100.0f64..100.0, o2 in -100.0f64..100.0) {
        prop_assume!(o1 < o2);
        let model = glideslope_model();
        let y = model.line().coordinate_at(x);
        let d1 = model.deviation(&Position::new(x, y + o1));
        let d2 = model.deviation(&Position::new(x, y + o2));
        prop_assert!(d1 >= d2);
    }

    #[test]
    fn zero_on_any_line(
        t in -1_000.0f64..1_000.0,
        angle in -60.0f64..60.0,
        scale in 0.5f64..100.0,
    ) {
        let line = ReferenceLine::from_degrees(Position::new(123.0, 456.0), angle, Baseline::X);
        let config = DeviationConfig { transition_scale: scale };
        let model = DualLobeDeviationModel::new(line, config).unwrap();
        prop_assert_eq!(model.deviation(&line.point_at(t)), 0.0);
    }
}
