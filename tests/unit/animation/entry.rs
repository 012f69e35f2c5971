use super::*;

fn ctx(time_ms: f64) -> AnimationContext {
    AnimationContext::new(time_ms, 1000.0)
}

#[test]
fn pop_in_midpoint_matches_easing() {
    let cfg = PopInConfig {
        duration_ms: 500.0,
        scale_from: 0.0,
        ..PopInConfig::default()
    };
    let anim = EntryAnimation::PopIn(cfg.clone());
    let out = anim.evaluate(&ctx(250.0), Transform::IDENTITY);
    let expected = cfg.easing.apply(0.5);
    assert_eq!(out.transform.scale_x, expected);
    assert_eq!(out.transform.scale_y, expected);
    assert!(out.transform.scale_x > 0.0);
    // Fade-in completes after the first third.
    assert_eq!(out.transform.opacity, 1.0);
}

#[test]
fn pop_in_starts_invisible_and_ends_at_rest() {
    let anim = EntryAnimation::PopIn(PopInConfig::default());
    let start = anim.evaluate(&ctx(0.0), Transform::IDENTITY);
    assert_eq!(start.transform.scale_x, 0.0);
    assert_eq!(start.transform.opacity, 0.0);

    let end = anim.evaluate(&ctx(5000.0), Transform::IDENTITY);
    assert_eq!(end.transform, Transform::IDENTITY);
}

#[test]
fn entries_compose_multiplicatively_and_additively() {
    let base = Transform {
        scale_x: 2.0,
        scale_y: 2.0,
        position_x: 0.25,
        opacity: 0.5,
        ..Transform::IDENTITY
    };
    let slide = EntryAnimation::SlideIn(SlideInConfig::default());
    let out = slide.evaluate(&ctx(0.0), base).transform;
    assert_eq!(out.scale_x, 2.0);
    assert_eq!(out.position_x, 0.25 - 1.5);
    assert_eq!(out.opacity, 0.0);

    let mid = slide.evaluate(&ctx(350.0), base).transform;
    assert!(mid.position_x > 0.25 - 1.5 && mid.position_x < 0.25);
}

#[test]
fn slide_directions_offset_the_right_axis() {
    for (dir, sx, sy) in [
        (SlideDirection::Left, -1.0, 0.0),
        (SlideDirection::Right, 1.0, 0.0),
        (SlideDirection::Top, 0.0, 1.0),
        (SlideDirection::Bottom, 0.0, -1.0),
    ] {
        let cfg = SlideInConfig {
            direction: dir,
            distance: 1.0,
            ..SlideInConfig::default()
        };
        let out = slide_in(&cfg, 0.0, Transform::IDENTITY).transform;
        assert_eq!(out.position_x, sx);
        assert_eq!(out.position_y, sy);
    }
}

#[test]
fn burst_unwinds_rotation_and_shrinks_to_rest() {
    let cfg = BurstConfig::default();
    let start = burst(&cfg, 0.0, Transform::IDENTITY).transform;
    assert_eq!(start.scale_x, cfg.scale_from);
    assert_eq!(start.rotation_z, cfg.rotation_from);
    let end = burst(&cfg, 1.0, Transform::IDENTITY).transform;
    assert_eq!(end, Transform::IDENTITY);
}

#[test]
fn spin_and_flip_finish_at_rest() {
    let spin = spin_in(&SpinInConfig::default(), 1.0, Transform::IDENTITY).transform;
    assert_eq!(spin, Transform::IDENTITY);
    let flip = flip_in(&FlipInConfig::default(), 0.0, Transform::IDENTITY).transform;
    assert!((flip.rotation_y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    let flip_end = flip_in(&FlipInConfig::default(), 1.0, Transform::IDENTITY).transform;
    assert_eq!(flip_end, Transform::IDENTITY);
}

#[test]
fn bounce_in_drops_from_height() {
    let cfg = BounceInConfig::default();
    let start = bounce_in(&cfg, 0.0, Transform::IDENTITY).transform;
    assert_eq!(start.position_y, cfg.height);
    let end = bounce_in(&cfg, 1.0, Transform::IDENTITY).transform;
    assert_eq!(end.position_y, 0.0);
}

#[test]
fn glitch_clears_after_completion() {
    let anim = EntryAnimation::Glitch(GlitchInConfig::default());
    let done = anim.evaluate(&ctx(900.0), Transform::IDENTITY);
    assert_eq!(done.transform, Transform::IDENTITY);
    assert!(done.effects.is_empty());

    let early = anim.evaluate(&ctx(60.0), Transform::IDENTITY);
    assert!(early.effects.rgb_split > 0.0);
    assert_eq!(early, anim.evaluate(&ctx(60.0), Transform::IDENTITY));
}

#[test]
fn delay_holds_the_start_state() {
    let anim = EntryAnimation::FadeIn(FadeInConfig {
        delay_ms: 200.0,
        ..FadeInConfig::default()
    });
    assert_eq!(anim.evaluate(&ctx(150.0), Transform::IDENTITY).transform.opacity, 0.0);
    assert_eq!(anim.end_ms(), 700.0);
    assert_eq!(anim.progress(450.0), 0.5);
}

#[test]
fn zero_duration_is_already_complete() {
    let anim = EntryAnimation::PopIn(PopInConfig {
        duration_ms: 0.0,
        ..PopInConfig::default()
    });
    let out = anim.evaluate(&ctx(0.0), Transform::IDENTITY);
    assert_eq!(out.transform, Transform::IDENTITY);
    assert!(out.transform.is_finite());
}
