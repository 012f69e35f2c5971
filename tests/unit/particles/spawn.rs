use std::f64::consts::{FRAC_PI_2, PI};

use super::*;

const W: f64 = 1920.0;
const H: f64 = 1080.0;

#[test]
fn confetti_angle_stays_within_spread() {
    for seed in 0..500u32 {
        let mut rng = SeededRng::new(seed);
        let a = confetti_angle(&mut rng, 180.0);
        assert!(a >= -FRAC_PI_2 - PI && a <= -FRAC_PI_2 + PI, "{a}");

        let mut rng = SeededRng::new(seed);
        let narrow = confetti_angle(&mut rng, 10.0);
        assert!((narrow + FRAC_PI_2).abs() <= 10f64.to_radians() + 1e-12);
    }
}

#[test]
fn zero_spread_confetti_launches_straight_up() {
    let params = ParticleParams {
        spread: 0.0,
        ..ParticleParams::for_kind(ParticleKind::Confetti)
    };
    for id in 0..20 {
        let p = spawn_particle(&params, id, W, H);
        assert!(p.velocity.x.abs() < 1e-9);
        assert!(p.velocity.y < 0.0);
    }
}

#[test]
fn spawn_is_deterministic_per_seed_and_id() {
    for kind in ParticleKind::ALL {
        let params = ParticleParams::for_kind(kind);
        assert_eq!(
            spawn_particle(&params, 7, W, H),
            spawn_particle(&params, 7, W, H)
        );
        assert_ne!(
            spawn_particle(&params, 7, W, H).position,
            spawn_particle(&params, 8, W, H).position,
            "{kind:?}"
        );
    }
}

#[test]
fn spawn_policy_places_particles_by_kind() {
    let fire = spawn_particle(&ParticleParams::for_kind(ParticleKind::Fire), 1, W, H);
    assert!(fire.position.y > H);
    assert!(fire.velocity.y < 0.0);

    let snow = spawn_particle(&ParticleParams::for_kind(ParticleKind::Snow), 1, W, H);
    assert!(snow.position.y < 0.0);
    assert!(snow.velocity.y > 0.0);

    let bubble = spawn_particle(&ParticleParams::for_kind(ParticleKind::Bubbles), 1, W, H);
    assert!(bubble.velocity.y < 0.0);
}

#[test]
fn stars_spawn_dark_and_still() {
    let params = ParticleParams::for_kind(ParticleKind::Stars);
    for id in 0..10 {
        let p = spawn_particle(&params, id, W, H);
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(p.position.x >= 0.0 && p.position.x < W);
        assert!(p.position.y >= 0.0 && p.position.y < H);
    }
}

#[test]
fn spawned_particles_start_fresh() {
    for kind in ParticleKind::ALL {
        let params = ParticleParams::for_kind(kind);
        let p = spawn_particle(&params, 3, W, H);
        assert_eq!(p.lifetime, 0.0);
        assert!(p.max_lifetime > 0.0);
        assert!(p.size >= params.size_min && p.size <= params.size_max);
        assert_eq!(p.size, p.base_size);
        assert!(p.trail.is_empty());
        assert_eq!(p.kind, kind);
    }
}
