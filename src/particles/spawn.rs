use std::f64::consts::FRAC_PI_2;

use crate::{
    foundation::core::{Point, Rgb, Vec2},
    particles::config::{ParticleKind, ParticleParams},
    particles::system::Particle,
    primitives::random::{SeededRng, hash_combine},
};

/// Launch angle for confetti: straight up (`-PI/2` in screen space) plus up to
/// `spread` degrees either side.
pub fn confetti_angle(rng: &mut SeededRng, spread_deg: f64) -> f64 {
    -FRAC_PI_2 + rng.next_signed() * spread_deg.max(0.0).to_radians()
}

/// RNG for particle `id`; depends only on the configured seed and the id.
pub fn particle_rng(seed: u32, id: u64) -> SeededRng {
    SeededRng::new(hash_combine(&[f64::from(seed), id as f64]))
}

/// Build particle `id` according to the spawn policy of `params.kind`.
///
/// Positions are pixels on a `width` x `height` canvas, y down.
pub fn spawn_particle(params: &ParticleParams, id: u64, width: f64, height: f64) -> Particle {
    let mut rng = particle_rng(params.seed, id);
    let size = rng.range(params.size_min, params.size_max.max(params.size_min));
    let palette = params.palette();
    let color = rng.pick(&palette).copied().unwrap_or(Rgb::WHITE);
    let max_lifetime = params.lifetime_ms * rng.range(0.8, 1.2);
    let rotation = rng.next_f64() * std::f64::consts::TAU;
    let rotation_speed = rng.next_signed() * params.rotation_speed;
    let speed = params.speed;

    let (position, velocity, opacity) = match params.kind {
        ParticleKind::Confetti => {
            let angle = confetti_angle(&mut rng, params.spread);
            let v = speed * rng.range(0.6, 1.0);
            let jitter = Vec2::new(rng.next_signed() * 10.0, rng.next_signed() * 10.0);
            (
                Point::new(width / 2.0, height / 2.0) + jitter,
                Vec2::from_angle(angle) * v,
                1.0,
            )
        }
        ParticleKind::Sparkles => {
            let pos = Point::new(
                width / 2.0 + rng.next_signed() * width * 0.3,
                height / 2.0 + rng.next_signed() * height * 0.3,
            );
            let dir = Vec2::from_angle(rng.next_f64() * std::f64::consts::TAU);
            (pos, dir * speed * rng.range(0.2, 1.0), 1.0)
        }
        ParticleKind::Fire => {
            let spread_x = width * 0.05 * (1.0 + params.turbulence / 60.0);
            let pos = Point::new(width / 2.0 + rng.next_signed() * spread_x, height + size);
            let jitter = rng.next_signed() * speed * 0.2 * (params.turbulence / 60.0);
            (pos, Vec2::new(jitter, -speed * rng.range(0.7, 1.0)), 1.0)
        }
        ParticleKind::Snow => {
            let pos = Point::new(rng.range(0.0, width), -size);
            let vx = params.wind_x * 0.5 + rng.next_signed() * 10.0;
            (pos, Vec2::new(vx, speed * rng.range(0.5, 1.0)), 1.0)
        }
        // Stars start dark and twinkle in on their first update.
        ParticleKind::Stars => {
            let pos = Point::new(rng.range(0.0, width), rng.range(0.0, height));
            (pos, Vec2::ZERO, 0.0)
        }
        ParticleKind::Bubbles => {
            let pos = Point::new(rng.range(0.0, width), height + size);
            let v = Vec2::new(rng.next_signed() * speed * 0.1, -speed * rng.range(0.4, 1.0));
            (pos, v, 1.0)
        }
        ParticleKind::Smoke => {
            let pos = Point::new(width / 2.0 + rng.next_signed() * width * 0.05, height * 0.8);
            let v = Vec2::new(rng.next_signed() * speed * 0.2, -speed * rng.range(0.3, 0.6));
            (pos, v, 1.0)
        }
    };

    Particle {
        id,
        position,
        velocity,
        size,
        base_size: size,
        color,
        opacity,
        rotation,
        rotation_speed,
        lifetime: 0.0,
        max_lifetime,
        kind: params.kind,
        seed: rng.next_u32(),
        trail: Vec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/spawn.rs"]
mod tests;
