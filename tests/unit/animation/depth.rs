use super::*;

fn ctx() -> AnimationContext {
    AnimationContext::new(500.0, 5000.0)
}

fn state(pointer: Vec2, hovering: bool) -> DepthEffectState {
    DepthEffectState {
        pointer,
        trigger_progress: 0.0,
        elapsed_ms: 500.0,
        is_hovering: hovering,
    }
}

#[test]
fn trigger_gate_follows_mode() {
    let idle = state(Vec2::ZERO, false);
    let hover = state(Vec2::ZERO, true);
    let c = ctx();
    assert!(should_apply_depth_effect(DepthTrigger::Always, &idle, &c));
    assert!(!should_apply_depth_effect(DepthTrigger::Mouse, &idle, &c));
    assert!(should_apply_depth_effect(DepthTrigger::Mouse, &hover, &c));
    assert!(!should_apply_depth_effect(DepthTrigger::OnEnter, &idle, &c));

    let started = DepthEffectState {
        trigger_progress: 0.2,
        ..idle
    };
    assert!(should_apply_depth_effect(DepthTrigger::OnEnter, &started, &c));
    let done = DepthEffectState {
        trigger_progress: 1.0,
        ..idle
    };
    assert!(should_apply_depth_effect(DepthTrigger::OnEnter, &done, &c));

    assert!(should_apply_depth_effect(DepthTrigger::Auto, &idle, &c));
    assert!(!should_apply_depth_effect(
        DepthTrigger::Auto,
        &idle,
        &c.with_playing(false)
    ));
}

#[test]
fn gated_evaluation_passes_through_when_off() {
    let anim = DepthAnimation::Tilt3d(Tilt3dConfig::default());
    let base = Transform::IDENTITY.translated(0.2, 0.1);
    let out = anim.evaluate_gated(&ctx(), base, &state(Vec2::new(1.0, 1.0), false));
    assert_eq!(out, AnimOutput::passthrough(base));

    let on = anim.evaluate_gated(&ctx(), base, &state(Vec2::new(1.0, 1.0), true));
    assert_ne!(on.transform, base);
}

#[test]
fn parallax_moves_with_pointer_and_reports_offset() {
    let c = ParallaxConfig {
        intensity: 0.1,
        depth: 2.0,
        ..ParallaxConfig::default()
    };
    let out = parallax(&c, &state(Vec2::new(0.5, -1.0), true), Transform::IDENTITY);
    assert!((out.transform.position_x - 0.1).abs() < 1e-12);
    assert!((out.transform.position_y + 0.2).abs() < 1e-12);
    assert_eq!(out.effects.parallax, Vec2::new(0.1, -0.2));
}

#[test]
fn parallax_clamps_pointer() {
    let c = ParallaxConfig::default();
    let far = parallax(&c, &state(Vec2::new(40.0, 0.0), true), Transform::IDENTITY);
    let edge = parallax(&c, &state(Vec2::new(1.0, 0.0), true), Transform::IDENTITY);
    assert_eq!(far, edge);
}

#[test]
fn tilt_faces_the_pointer() {
    let c = Tilt3dConfig::default();
    let right = tilt3d(&c, &state(Vec2::new(1.0, 0.0), true), Transform::IDENTITY).transform;
    assert!((right.rotation_y - c.max_angle).abs() < 1e-12);
    assert_eq!(right.rotation_x, 0.0);

    let up = tilt3d(&c, &state(Vec2::new(0.0, 1.0), true), Transform::IDENTITY).transform;
    assert!((up.rotation_x + c.max_angle).abs() < 1e-12);
}

#[test]
fn float3d_and_rotate3d_follow_elapsed_time() {
    let f = Float3dConfig::default();
    let mut s = state(Vec2::ZERO, false);
    s.elapsed_ms = 0.0;
    let a = float3d(&f, &s, Transform::IDENTITY).transform;
    assert_eq!(a.position_z, 0.0);
    s.elapsed_ms = 625.0;
    let b = float3d(&f, &s, Transform::IDENTITY).transform;
    assert!((b.position_z - f.amplitude).abs() < 1e-9);

    let r = Rotate3dConfig {
        speed: 0.5,
        tilt: 0.0,
        ..Rotate3dConfig::default()
    };
    s.elapsed_ms = 1000.0;
    let out = rotate3d(&r, &s, Transform::IDENTITY).transform;
    assert!((out.rotation_y - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn pop_out_lifts_with_trigger() {
    let c = PopOutConfig::default();
    let mut s = state(Vec2::ZERO, false);
    let rest = pop_out(&c, &s, Transform::IDENTITY);
    assert_eq!(rest.transform.position_z, 0.0);
    assert_eq!(rest.transform.scale_x, 1.0);
    assert_eq!(rest.effects.depth_shadow, 0.0);

    s.trigger_progress = 1.0;
    let full = pop_out(&c, &s, Transform::IDENTITY);
    assert!((full.transform.position_z - c.depth).abs() < 1e-12);
    assert!((full.transform.scale_x - c.scale).abs() < 1e-12);
    assert_eq!(full.effects.depth_shadow, 1.0);
}

#[test]
fn sync_from_copies_pointer_and_keeps_progress() {
    let mut s = DepthEffectState {
        trigger_progress: 0.4,
        ..DepthEffectState::default()
    };
    let c = ctx().with_pointer(Vec2::new(0.3, -0.2), true);
    s.sync_from(&c);
    assert_eq!(s.pointer, Vec2::new(0.3, -0.2));
    assert!(s.is_hovering);
    assert_eq!(s.elapsed_ms, 500.0);
    assert_eq!(s.trigger_progress, 0.4);
}
