use crate::foundation::core::Vec2;

/// Spring follow-through that makes an element lag behind its target and lean into
/// the motion.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SecondaryMotionConfig {
    pub enabled: bool,
    /// Follow delay, `0..1`; higher is a looser spring.
    pub delay: f64,
    /// Velocity damping, `>= 0`.
    pub damping: f64,
    /// Lean per unit of horizontal velocity.
    pub rotation_influence: f64,
    /// Lean clamp in radians.
    pub max_rotation: f64,
}

impl Default for SecondaryMotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: 0.3,
            damping: 0.6,
            rotation_influence: 0.1,
            max_rotation: 0.15,
        }
    }
}

impl SecondaryMotionConfig {
    pub fn spring_strength(&self) -> f64 {
        (1.0 - self.delay) * 20.0
    }
}

/// Per-element spring state. Starts unset and snaps to the first target it sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f64,
    pub initialized: bool,
}

/// Advance the spring one step of `dt` seconds toward `target`.
///
/// The lean is the in-plane angle `atan(vx)` of the velocity against the vertical,
/// so vertical travel alone never tilts the element.
pub fn step_secondary_motion(
    state: &mut SpringState,
    target: Vec2,
    cfg: &SecondaryMotionConfig,
    dt: f64,
) {
    if !state.initialized {
        *state = SpringState {
            position: target,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            initialized: true,
        };
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let force = (target - state.position) * cfg.spring_strength();
    let damping = state.velocity * (cfg.damping * 10.0);
    state.velocity += (force - damping) * dt;
    state.position += state.velocity * dt;
    let max = cfg.max_rotation.abs();
    state.rotation = (state.velocity.x.atan() * cfg.rotation_influence).clamp(-max, max);
}

#[cfg(test)]
#[path = "../../tests/unit/motion/secondary.rs"]
mod tests;
