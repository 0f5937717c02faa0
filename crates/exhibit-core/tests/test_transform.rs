use approx::assert_relative_eq;

use exhibit_core::error::ExhibitError;
use exhibit_core::transform::{Transform, TransformDelta};

fn sample_transform() -> Transform {
    let mut t = Transform::identity();
    t.apply(&TransformDelta {
        offset_x: Some(12.5),
        offset_y: Some(-7.25),
        scale_percent: Some(140.0),
        rotation_degrees: Some(-12.0),
    });
    t
}

#[test]
fn test_identity_multiplier_when_widths_match() {
    let t = sample_transform();
    let projected = t.project_to(800.0, 800.0).unwrap();

    assert_eq!(projected.offset_x, t.offset_x);
    assert_eq!(projected.offset_y, t.offset_y);
}

#[test]
fn test_offsets_scale_by_width_ratio() {
    let t = sample_transform();
    let projected = t.project_to(1000.0, 500.0).unwrap();

    assert_eq!(projected.offset_x, t.offset_x * 2.0);
    assert_eq!(projected.offset_y, t.offset_y * 2.0);
}

#[test]
fn test_scale_and_rotation_never_rescaled() {
    let t = sample_transform();

    for viewport in [100.0, 375.0, 1000.0, 2560.0] {
        let projected = t.project_to(1000.0, viewport).unwrap();
        assert_eq!(projected.scale_percent, t.scale_percent);
        assert_eq!(projected.rotation_degrees, t.rotation_degrees);
    }
}

#[test]
fn test_unusable_viewport_is_an_error() {
    let t = sample_transform();

    for viewport in [0.0, -320.0, f64::NAN, f64::INFINITY] {
        let result = t.project_to(1000.0, viewport);
        assert!(matches!(result, Err(ExhibitError::ViewportUnavailable)));
    }
}

#[test]
fn test_project_or_identity_falls_back_to_unscaled_offsets() {
    let t = sample_transform();

    let missing = t.project_or_identity(1000.0, None);
    assert_eq!(missing.offset_x, t.offset_x);
    assert_eq!(missing.offset_y, t.offset_y);

    let degenerate = t.project_or_identity(1000.0, Some(0.0));
    assert_eq!(degenerate.offset_x, t.offset_x);
    assert_eq!(degenerate.offset_y, t.offset_y);
}

#[test]
fn test_apply_clamps_scale_and_rotation() {
    let mut t = Transform::identity();

    t.apply(&TransformDelta {
        scale_percent: Some(500.0),
        rotation_degrees: Some(90.0),
        ..Default::default()
    });
    assert_relative_eq!(t.scale_percent, 300.0);
    assert_relative_eq!(t.rotation_degrees, 45.0);

    t.apply(&TransformDelta {
        scale_percent: Some(1.0),
        rotation_degrees: Some(-90.0),
        ..Default::default()
    });
    assert_relative_eq!(t.scale_percent, 10.0);
    assert_relative_eq!(t.rotation_degrees, -45.0);
}

#[test]
fn test_apply_merges_partial_changes() {
    let mut t = sample_transform();
    let before = t;

    t.apply(&TransformDelta {
        offset_x: Some(99.0),
        ..Default::default()
    });

    assert_eq!(t.offset_x, 99.0);
    assert_eq!(t.offset_y, before.offset_y);
    assert_eq!(t.scale_percent, before.scale_percent);
    assert_eq!(t.rotation_degrees, before.rotation_degrees);
}

#[test]
fn test_nudge_accumulates_offsets() {
    let mut t = Transform::identity();
    t.nudge(2.0, 0.0);
    t.nudge(2.0, -3.0);

    assert_eq!(t.offset_x, 4.0);
    assert_eq!(t.offset_y, -3.0);
}

#[test]
fn test_reset_restores_identity() {
    let mut t = sample_transform();
    t.reset();

    assert_eq!(t, Transform::identity());
    assert_eq!(t.scale_percent, 100.0);
}
