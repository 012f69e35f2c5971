use crate::{
    foundation::core::{Point, Rect, Rgb, Vec2},
    particles::config::{ParticleKind, ParticleParams},
    particles::physics::step_particle,
    particles::spawn::spawn_particle,
};

/// One live particle. Positions are pixels (y down), velocities pixels/second,
/// lifetimes milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Particle {
    /// Unique within a system; never recycled.
    pub id: u64,
    pub position: Point,
    pub velocity: Vec2,
    pub size: f64,
    /// Size at spawn, before size evolution.
    pub base_size: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    /// Milliseconds alive so far.
    pub lifetime: f64,
    pub max_lifetime: f64,
    pub kind: ParticleKind,
    /// Per-particle seed for twinkle/turbulence phases.
    pub seed: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trail: Vec<Point>,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.lifetime < self.max_lifetime
    }

    /// Lifetime fraction, `0..1`.
    pub fn progress(&self) -> f64 {
        if self.max_lifetime > 0.0 {
            (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Particle collection plus spawn bookkeeping. Mutated only through the system
/// operations below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSystemState {
    particles: Vec<Particle>,
    last_spawn_ms: Option<f64>,
    started_ms: Option<f64>,
    next_id: u64,
    clock_ms: f64,
    paused: bool,
}

impl ParticleSystemState {
    /// Empty, active system.
    pub fn init() -> Self {
        Self::default()
    }

    /// Drop every particle and restart spawn timing. Ids keep increasing.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.last_spawn_ms = None;
        self.started_ms = None;
        self.clock_ms = 0.0;
    }

    /// Stop spawning; existing particles keep moving.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Allow spawning again. Time spent paused is not back-filled.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_spawn_ms = None;
        }
    }

    pub fn is_active(&self) -> bool {
        !self.paused
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Id the next spawned particle will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    fn push_new(&mut self, params: &ParticleParams, n: usize, width: f64, height: f64) -> usize {
        // A particle born dead would sit in the list until the next update.
        if !(params.lifetime_ms.is_finite() && params.lifetime_ms > 0.0) {
            return 0;
        }
        let room = params.max_particles.saturating_sub(self.particles.len());
        let n = n.min(room);
        for _ in 0..n {
            let p = spawn_particle(params, self.next_id, width, height);
            self.next_id += 1;
            self.particles.push(p);
        }
        n
    }
}

/// Spawn the particles due between the last spawn and `now_ms`.
///
/// The first call only sets the watermark. Later calls spawn
/// `floor(elapsed / interval)` particles and carry the remainder forward. The
/// interval is `lifetime_ms / count`, divided by the emission-curve multiplier.
/// Returns the number spawned.
pub fn spawn_particles(
    state: &mut ParticleSystemState,
    params: &ParticleParams,
    now_ms: f64,
    width: f64,
    height: f64,
) -> usize {
    if state.paused || !now_ms.is_finite() {
        return 0;
    }
    let Some(last) = state.last_spawn_ms else {
        state.last_spawn_ms = Some(now_ms);
        state.started_ms.get_or_insert(now_ms);
        return 0;
    };
    let Some(base_interval) = params.spawn_interval_ms() else {
        state.last_spawn_ms = Some(now_ms);
        return 0;
    };
    let elapsed = now_ms - last;
    if elapsed <= 0.0 {
        // Time went backwards (scrub); restart the watermark.
        state.last_spawn_ms = Some(now_ms);
        return 0;
    }
    let since_start = now_ms - state.started_ms.unwrap_or(now_ms);
    let rate = params.emission_curve.multiplier(since_start);
    if rate <= 0.0 {
        state.last_spawn_ms = Some(now_ms);
        return 0;
    }
    let interval = base_interval / rate;
    let due = (elapsed / interval).floor();
    if due < 1.0 {
        return 0;
    }
    state.last_spawn_ms = Some(last + due * interval);
    state.push_new(params, due as usize, width, height)
}

/// Spawn `count` particles immediately, ignoring the spawn timer. Honors pause and
/// `max_particles`. Returns the number spawned.
pub fn spawn_burst(
    state: &mut ParticleSystemState,
    params: &ParticleParams,
    count: usize,
    width: f64,
    height: f64,
) -> usize {
    if state.paused {
        return 0;
    }
    state.push_new(params, count, width, height)
}

/// Integrate every particle by `dt` seconds and drop the dead and the culled.
pub fn update_particles(
    state: &mut ParticleSystemState,
    params: &ParticleParams,
    dt: f64,
    width: f64,
    height: f64,
) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.clock_ms += dt * 1000.0;
    let time_s = state.clock_ms / 1000.0;
    for p in &mut state.particles {
        step_particle(p, params, time_s, dt);
    }
    let m = params.cull_margin.max(0.0);
    let keep = Rect::new(-m, -m, width + m, height + m);
    state
        .particles
        .retain(|p| p.is_alive() && keep.contains(p.position));
}

/// Spawn then update; the single entry point for a per-frame driver.
pub fn update_particle_system(
    state: &mut ParticleSystemState,
    params: &ParticleParams,
    now_ms: f64,
    dt: f64,
    width: f64,
    height: f64,
) {
    spawn_particles(state, params, now_ms, width, height);
    update_particles(state, params, dt, width, height);
}

#[cfg(test)]
#[path = "../../tests/unit/particles/system.rs"]
mod tests;
