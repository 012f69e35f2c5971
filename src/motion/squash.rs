use crate::foundation::core::{Transform, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquashAxis {
    X,
    #[default]
    Y,
    /// Stretch along whichever axis the element is moving fastest on.
    Velocity,
}

/// Volume-preserving squash and stretch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SquashStretchConfig {
    pub enabled: bool,
    /// Primary-axis scale at full negative velocity, `0.5..=1`.
    pub squash_ratio: f64,
    /// Primary-axis scale at full positive velocity, `1..=2`.
    pub stretch_ratio: f64,
    pub axis: SquashAxis,
    /// Multiplier mapping raw velocity into `-1..1` before clamping.
    pub velocity_scale: f64,
}

impl Default for SquashStretchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            squash_ratio: 0.85,
            stretch_ratio: 1.15,
            axis: SquashAxis::Y,
            velocity_scale: 0.5,
        }
    }
}

/// `(primary, secondary)` scale factors for a clamped velocity `v` in `-1..1`.
/// The secondary axis is the reciprocal so area is preserved.
pub fn squash_stretch_factors(v: f64, squash_ratio: f64, stretch_ratio: f64) -> (f64, f64) {
    let v = if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
    let primary = if v >= 0.0 {
        1.0 + (stretch_ratio - 1.0) * v
    } else {
        1.0 - (1.0 - squash_ratio) * v.abs()
    };
    if primary <= 0.0 {
        return (1.0, 1.0);
    }
    (primary, 1.0 / primary)
}

/// Scale `base` by squash/stretch for `velocity` (normalized units per second, or
/// curve units per unit progress for entries).
pub fn apply_squash_stretch(base: Transform, velocity: Vec2, cfg: &SquashStretchConfig) -> Transform {
    if !cfg.enabled {
        return base;
    }
    let (along_x, v) = match cfg.axis {
        SquashAxis::X => (true, velocity.x),
        SquashAxis::Y => (false, velocity.y),
        SquashAxis::Velocity => (velocity.x.abs() > velocity.y.abs(), velocity.hypot()),
    };
    let (primary, secondary) =
        squash_stretch_factors(v * cfg.velocity_scale, cfg.squash_ratio, cfg.stretch_ratio);
    let (sx, sy) = if along_x {
        (primary, secondary)
    } else {
        (secondary, primary)
    };
    Transform {
        scale_x: base.scale_x * sx,
        scale_y: base.scale_y * sy,
        ..base
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/squash.rs"]
mod tests;
