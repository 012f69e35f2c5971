use super::*;

fn c(min: f64, max: f64, overflow: Overflow) -> PropertyConstraint {
    PropertyConstraint::new(min, max, overflow)
}

#[test]
fn wrap_reenters_from_the_opposite_side() {
    let wrap = c(-1.0, 1.0, Overflow::Wrap);
    assert!((constrain_value(1.5, &wrap) + 0.5).abs() < 1e-12);
    assert!((constrain_value(-1.25, &wrap) - 0.75).abs() < 1e-12);
    assert_eq!(constrain_value(1.0, &wrap), -1.0);
}

#[test]
fn wrap_always_lands_in_half_open_range() {
    let wrap = c(10.0, 110.0, Overflow::Wrap);
    for i in -500..500 {
        let v = i as f64 * 3.7;
        let out = constrain_value(v, &wrap);
        assert!((10.0..110.0).contains(&out), "{v} -> {out}");
        let shift = (out - v) / 100.0;
        assert!((shift - shift.round()).abs() < 1e-9, "{v} -> {out}");
    }
}

#[test]
fn clamp_is_idempotent_and_in_range() {
    let clamp = c(-1.0, 1.0, Overflow::Clamp);
    for v in [-10.0, -1.0, -0.3, 0.0, 0.99, 1.0, 7.5] {
        let once = constrain_value(v, &clamp);
        assert!((-1.0..=1.0).contains(&once));
        assert_eq!(constrain_value(once, &clamp), once);
    }
    assert_eq!(constrain_value(0.25, &clamp), 0.25);
}

#[test]
fn bounce_reflects_off_edges() {
    let bounce = c(0.0, 10.0, Overflow::Bounce);
    assert!((constrain_value(12.0, &bounce) - 8.0).abs() < 1e-12);
    assert!((constrain_value(-3.0, &bounce) - 3.0).abs() < 1e-12);
    assert!((constrain_value(25.0, &bounce) - 5.0).abs() < 1e-12);
    assert!((constrain_value(4.0, &bounce) - 4.0).abs() < 1e-12);
}

#[test]
fn fade_and_none_leave_value_untouched() {
    assert_eq!(constrain_value(42.0, &c(0.0, 10.0, Overflow::Fade)), 42.0);
    assert_eq!(constrain_value(42.0, &c(0.0, 10.0, Overflow::None)), 42.0);
}

#[test]
fn fade_factor_ramps_linearly_near_edges() {
    let fade = PropertyConstraint {
        fade_distance: 0.2,
        ..c(0.0, 100.0, Overflow::Fade)
    };
    assert_eq!(fade_factor(50.0, &fade), 1.0);
    assert!((fade_factor(10.0, &fade) - 0.5).abs() < 1e-12);
    assert!((fade_factor(95.0, &fade) - 0.25).abs() < 1e-12);
    assert_eq!(fade_factor(0.0, &fade), 0.0);
    assert_eq!(fade_factor(140.0, &fade), 0.0);
    assert_eq!(fade_factor(140.0, &c(0.0, 100.0, Overflow::Clamp)), 1.0);
}

#[test]
fn degenerate_range_collapses_to_min() {
    assert_eq!(constrain_value(5.0, &c(3.0, 3.0, Overflow::Wrap)), 3.0);
    assert_eq!(constrain_value(f64::NAN, &c(0.0, 1.0, Overflow::Clamp)), 0.0);
}

#[test]
fn hd_action_safe_bounds() {
    let b = compute_bounds(&BoundsConfig::default());
    assert_eq!((b.width, b.height), (1920.0, 1080.0));
    assert_eq!(b.safe_zone, Rect::new(96.0, 54.0, 1824.0, 1026.0));
    assert_eq!(b.center, Point::new(960.0, 540.0));
    assert_eq!(b.max_extent, Vec2::new(864.0, 486.0));
    assert!((b.aspect_ratio - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(b.scale_factor, 1.0);
    assert_eq!((b.x.min, b.x.max), (96.0, 1824.0));
}

#[test]
fn scale_factor_tracks_canvas_height() {
    let b = compute_bounds(&BoundsConfig {
        canvas: CanvasPreset::Uhd4k,
        ..BoundsConfig::default()
    });
    assert_eq!(b.scale_factor, 2.0);
    assert_eq!(b.scale_amplitude(0.05), 0.1);
}

#[test]
fn pixel_round_trip() {
    let b = compute_bounds(&BoundsConfig::default());
    let p = Vec2::new(0.25, -0.5);
    let px = b.to_pixels(p);
    assert_eq!(px, Point::new(1200.0, 810.0));
    let back = b.to_normalized(px);
    assert!((back - p).hypot() < 1e-12);
}

#[test]
fn constrain_transform_clamps_to_safe_zone() {
    let b = compute_bounds(&BoundsConfig::default());
    let t = Transform::IDENTITY.translated(1.5, 0.0);
    let out = constrain_transform(t, &b);
    assert!((out.position_x - 0.9).abs() < 1e-12);
    assert_eq!(out.position_y, 0.0);
    assert_eq!(out.opacity, 1.0);

    let inside = Transform::IDENTITY.translated(0.2, 0.1);
    assert_eq!(constrain_transform(inside, &b), inside);
}

#[test]
fn constrain_transform_fades_outside() {
    let b = compute_bounds(&BoundsConfig {
        overflow: Overflow::Fade,
        ..BoundsConfig::default()
    });
    let t = Transform::IDENTITY.translated(1.5, 0.0);
    let out = constrain_transform(t, &b);
    assert_eq!(out.position_x, 1.5);
    assert_eq!(out.opacity, 0.0);
    let centered = constrain_transform(Transform::IDENTITY, &b);
    assert_eq!(centered.opacity, 1.0);
}

#[test]
fn bounds_config_from_json() {
    let cfg: BoundsConfig = serde_json::from_str(
        r#"{"canvas":{"type":"custom","width":800,"height":600},"safe_zone":{"type":"title_safe"},"overflow":"wrap"}"#,
    )
    .unwrap();
    let b = compute_bounds(&cfg);
    assert_eq!(b.safe_zone, Rect::new(80.0, 60.0, 720.0, 540.0));
    assert_eq!(b.y.overflow, Overflow::Wrap);
}
