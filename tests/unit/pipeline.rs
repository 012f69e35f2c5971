use super::*;
use serde_json::json;

use crate::{
    bounds::constrain::Overflow,
    motion::tier::MotionTier,
    particles::config::ParticleKind,
};

fn frames(pipeline: &mut AlertPipeline, count: usize) -> Vec<AlertFrame> {
    (0..count)
        .map(|i| pipeline.frame_at(i as f64 * 1000.0 / 60.0, 1.0 / 60.0))
        .collect()
}

#[test]
fn empty_alert_is_identity() {
    let mut p = AlertPipeline::new(AlertConfig::default());
    let f = p.frame_at(500.0, 1.0 / 60.0);
    assert_eq!(f.transform, Transform::IDENTITY);
    assert!(f.effects.is_empty());
    assert!(f.particles.is_empty());
}

#[test]
fn entry_completes_to_rest_state() {
    let cfg = AlertConfig {
        entry: Some(json!({"type": "pop_in", "duration_ms": 400})),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    assert_eq!(p.entry_end_ms(), 400.0);
    let start = p.frame_at(0.0, 1.0 / 60.0);
    assert!(start.transform.scale_x < 1.0);
    let done = p.frame_at(1000.0, 1.0 / 60.0);
    assert!((done.transform.scale_x - 1.0).abs() < 1e-9);
    assert!((done.transform.opacity - 1.0).abs() < 1e-9);
}

#[test]
fn unknown_layer_passes_through_but_fails_validation() {
    let cfg = AlertConfig {
        entry: Some(json!({"type": "teleport_in"})),
        ..AlertConfig::default()
    };
    let report = cfg.validation();
    assert!(!report.valid);
    assert_eq!(report.errors[0].path, "entry");
    assert!(cfg.validate().is_err());

    let mut p = AlertPipeline::new(cfg);
    assert_eq!(p.frame_at(100.0, 1.0 / 60.0).transform, Transform::IDENTITY);
}

#[test]
fn invalid_enterprise_section_is_reported_with_prefix() {
    let mut enterprise = EnterpriseConfig::for_tier(MotionTier::Enterprise);
    enterprise.squash_stretch.squash_ratio = 5.0;
    let cfg = AlertConfig {
        enterprise: Some(enterprise),
        ..AlertConfig::default()
    };
    let report = cfg.validation();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "enterprise.squash_stretch.squash_ratio");
}

#[test]
fn bounds_keep_override_inside_safe_zone() {
    let cfg = AlertConfig {
        transform_override: Some(TransformOverride {
            position_x: Some(2.0),
            ..TransformOverride::default()
        }),
        bounds: Some(BoundsConfig::default()),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    let f = p.frame_at(0.0, 1.0 / 60.0);
    assert!((f.transform.position_x - 0.9).abs() < 1e-9);
}

#[test]
fn fade_overflow_hides_offscreen_element() {
    let cfg = AlertConfig {
        transform_override: Some(TransformOverride {
            position_y: Some(-3.0),
            ..TransformOverride::default()
        }),
        bounds: Some(BoundsConfig {
            overflow: Overflow::Fade,
            ..BoundsConfig::default()
        }),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    assert_eq!(p.frame_at(0.0, 1.0 / 60.0).transform.opacity, 0.0);
}

#[test]
fn burst_spawns_on_first_frame_only() {
    let cfg = AlertConfig {
        particles: Some(ParticleConfig::new(ParticleKind::Confetti)),
        particle_burst: 12,
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    let first = p.frame_at(0.0, 1.0 / 60.0);
    assert_eq!(first.particles.len(), 12);
    let ids: Vec<u64> = first.particles.iter().map(|p| p.id).collect();
    assert_eq!(ids, (0..12).collect::<Vec<_>>());
}

#[test]
fn paused_context_stops_spawning() {
    let cfg = AlertConfig {
        particles: Some(ParticleConfig::new(ParticleKind::Snow)),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    for i in 0..30 {
        let ctx = p.context(i as f64 * 100.0, 0.1).with_playing(false);
        assert!(p.frame(&ctx).particles.is_empty());
    }
}

#[test]
fn backwards_seek_replays_identically() {
    let cfg = AlertConfig {
        entry: Some(json!({"type": "bounce_in"})),
        loop_animation: Some(json!({"type": "float"})),
        enterprise: Some(EnterpriseConfig::for_tier(MotionTier::Enterprise)),
        particles: Some(ParticleConfig::new(ParticleKind::Sparkles)),
        particle_burst: 5,
        ..AlertConfig::default()
    };
    let mut a = AlertPipeline::new(cfg.clone());
    let first = frames(&mut a, 120);
    let replay = frames(&mut a, 120);
    assert_eq!(first, replay);

    let mut b = AlertPipeline::new(cfg);
    assert_eq!(frames(&mut b, 120), first);
}

#[test]
fn render_frames_counts_and_rejects_bad_rates() {
    let mut p = AlertPipeline::new(AlertConfig::default());
    let out = p.render_frames(30.0, 1.0).unwrap();
    assert_eq!(out.len(), 30);
    assert!((out[1].time_ms - 1000.0 / 30.0).abs() < 1e-9);
    assert!(p.render_frames(0.0, 1.0).is_err());
    assert!(p.render_frames(30.0, f64::NAN).is_err());
}

#[test]
fn hover_gates_mouse_depth() {
    let cfg = AlertConfig {
        depth: Some(json!({"type": "tilt3d", "trigger": "mouse"})),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    let idle = p.frame_with_pointer(0.0, 1.0 / 60.0, Vec2::new(0.8, 0.5), false);
    assert_eq!(idle.transform, Transform::IDENTITY);
    let hovered = p.frame_with_pointer(16.0, 1.0 / 60.0, Vec2::new(0.8, 0.5), true);
    assert_ne!(hovered.transform, Transform::IDENTITY);
}

#[test]
fn config_parses_from_json() {
    let cfg = AlertConfig::from_json(
        r#"{"entry":{"type":"fade_in"},"loop":{"type":"pulse"},"particles":{"type":"fire","count":10}}"#,
    )
    .unwrap();
    assert_eq!(cfg.element_id, "alert");
    assert_eq!(cfg.duration_ms, 5000.0);
    assert!(cfg.loop_animation.is_some());
    assert_eq!(cfg.particles.unwrap().count, Some(10));
    assert!(AlertConfig::from_json("{not json").is_err());
}

#[test]
fn pop_out_holds_after_entry_completes() {
    let cfg = AlertConfig {
        entry: Some(json!({"type": "pop_in", "duration_ms": 600})),
        depth: Some(json!({"type": "pop_out"})),
        ..AlertConfig::default()
    };
    let mut p = AlertPipeline::new(cfg);
    let before = p.frame_at(599.0, 1.0 / 60.0);
    let at_end = p.frame_at(600.0, 1.0 / 60.0);
    let later = p.frame_at(2000.0, 1.0 / 60.0);

    for f in [&at_end, &later] {
        assert!((f.transform.position_z - 0.3).abs() < 1e-9);
        assert!((f.transform.scale_x - 1.1).abs() < 1e-9);
        assert!((f.effects.depth_shadow - 1.0).abs() < 1e-9);
    }
    assert!((before.transform.position_z - at_end.transform.position_z).abs() < 0.01);
    assert!((before.effects.depth_shadow - at_end.effects.depth_shadow).abs() < 0.01);
}
