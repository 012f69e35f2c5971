use serde_json::json;

use super::*;

#[test]
fn tiers_are_ordered() {
    assert!(MotionTier::Standard < MotionTier::Professional);
    assert!(MotionTier::Professional < MotionTier::Enterprise);
}

#[test]
fn higher_tiers_enable_more_features() {
    let s = EnterpriseConfig::for_tier(MotionTier::Standard);
    let p = EnterpriseConfig::for_tier(MotionTier::Professional);
    let e = EnterpriseConfig::for_tier(MotionTier::Enterprise);
    assert!(!s.squash_stretch.enabled && !s.secondary_motion.enabled);
    assert!(p.squash_stretch.enabled && p.secondary_motion.enabled && p.noise.enabled);
    assert!(e.micro_jitter.enabled);
    assert!(s.organic.layers.len() < p.organic.layers.len());
    assert!(p.organic.layers.len() < e.organic.layers.len());
    assert_eq!(e.tier, MotionTier::Enterprise);
}

#[test]
fn omitted_sections_come_from_the_tier() {
    let cfg: EnterpriseConfig = serde_json::from_value(json!({
        "tier": "enterprise",
        "stagger": { "mode": "reverse" }
    }))
    .unwrap();
    let d = EnterpriseConfig::for_tier(MotionTier::Enterprise);
    assert_eq!(cfg.motion_curve, d.motion_curve);
    assert_eq!(cfg.micro_jitter, d.micro_jitter);
    assert_eq!(cfg.stagger.mode, StaggerMode::Reverse);
}

#[test]
fn empty_document_is_standard() {
    let cfg: EnterpriseConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(cfg, EnterpriseConfig::default());
    assert_eq!(cfg.tier, MotionTier::Standard);
}

#[test]
fn full_config_survives_json() {
    let cfg = EnterpriseConfig::for_tier(MotionTier::Professional);
    let back: EnterpriseConfig =
        serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(back, cfg);
}
