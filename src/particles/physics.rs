use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Vec2},
    foundation::math::clamp01,
    particles::config::{ParticleKind, ParticleParams},
    particles::system::Particle,
};

/// Opacity from lifetime `progress`: linear in over the first `fade_in` fraction,
/// linear out over the last `fade_out` fraction, `1` between.
pub fn calculate_lifetime_opacity(progress: f64, fade_in: f64, fade_out: f64) -> f64 {
    let p = clamp01(progress);
    let mut o: f64 = 1.0;
    if fade_in > 0.0 && p < fade_in {
        o = o.min(p / fade_in);
    }
    if fade_out > 0.0 && p > 1.0 - fade_out {
        o = o.min((1.0 - p) / fade_out);
    }
    clamp01(o)
}

/// Signed gravity; negative values make particles rise.
pub fn apply_gravity(p: &mut Particle, gravity: f64, dt: f64) {
    p.velocity.y += gravity * dt;
}

pub fn apply_wind(p: &mut Particle, wind: Vec2, dt: f64) {
    p.velocity += wind * dt;
}

/// Position/time-driven sinusoidal push, a cheap stand-in for curl noise.
pub fn apply_turbulence(p: &mut Particle, strength: f64, time_s: f64, dt: f64) {
    if strength == 0.0 {
        return;
    }
    let phase = f64::from(p.seed % 1024) / 1024.0 * TAU;
    let fx = (p.position.y * 0.01 + time_s * 2.0 + phase).sin();
    let fy = (p.position.x * 0.01 + time_s * 1.7 + phase * 0.5).cos();
    p.velocity += Vec2::new(fx, fy) * (strength * dt);
}

/// Exponential velocity decay, frame-rate independent via `dt * 60`.
pub fn apply_drag(p: &mut Particle, drag: f64, dt: f64) {
    if drag <= 0.0 {
        return;
    }
    let factor = (1.0 - drag).clamp(0.0, 1.0).powf(dt * 60.0);
    p.velocity *= factor;
}

/// Integrate position and rotation, then advance lifetime by `dt` seconds.
pub fn integrate(p: &mut Particle, dt: f64) {
    p.position += p.velocity * dt;
    p.rotation += p.rotation_speed * dt;
    p.lifetime += dt * 1000.0;
}

fn twinkle(p: &Particle, time_s: f64) -> f64 {
    let rate = 1.5 + f64::from(p.seed % 97) / 97.0 * 2.5;
    let phase = f64::from(p.seed % 1013) / 1013.0 * TAU;
    0.55 + 0.45 * (time_s * rate + phase).sin()
}

/// Advance one particle by `dt` seconds using the physics policy of its kind.
pub fn step_particle(p: &mut Particle, params: &ParticleParams, time_s: f64, dt: f64) {
    let wind = Vec2::new(params.wind_x, params.wind_y);
    match p.kind {
        ParticleKind::Confetti => {
            apply_gravity(p, params.gravity, dt);
            apply_wind(p, wind, dt);
            apply_turbulence(p, params.turbulence, time_s, dt);
            apply_drag(p, params.drag, dt);
            // Flutter: spin speed follows horizontal drift.
            p.rotation_speed += p.velocity.x * 0.002 * dt;
        }
        ParticleKind::Sparkles | ParticleKind::Fire | ParticleKind::Bubbles => {
            apply_gravity(p, params.gravity, dt);
            apply_turbulence(p, params.turbulence, time_s, dt);
            apply_drag(p, params.drag, dt);
        }
        ParticleKind::Snow | ParticleKind::Smoke => {
            apply_gravity(p, params.gravity, dt);
            apply_wind(p, wind, dt);
            apply_turbulence(p, params.turbulence, time_s, dt);
            apply_drag(p, params.drag, dt);
        }
        ParticleKind::Stars => {}
    }

    let previous = p.position;
    integrate(p, dt);

    let progress = if p.max_lifetime > 0.0 {
        p.lifetime / p.max_lifetime
    } else {
        1.0
    };
    let mut opacity = calculate_lifetime_opacity(progress, params.fade_in, params.fade_out);
    if p.kind == ParticleKind::Stars {
        opacity *= twinkle(p, time_s);
    }
    p.opacity = opacity;
    p.size = p.base_size * params.size_evolution.scale_at(progress);
    if let Some(c) = params.color_evolution.color_at(progress) {
        p.color = c;
    }
    if params.trail.enabled {
        record_trail(p, previous, params.trail.length, params.trail.min_distance);
    }
}

fn record_trail(p: &mut Particle, previous: Point, length: usize, min_distance: f64) {
    if length == 0 {
        p.trail.clear();
        return;
    }
    let far_enough = p
        .trail
        .last()
        .is_none_or(|last| last.distance(previous) >= min_distance);
    if far_enough {
        p.trail.push(previous);
    }
    if p.trail.len() > length {
        let excess = p.trail.len() - length;
        p.trail.drain(..excess);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/physics.rs"]
mod tests;
