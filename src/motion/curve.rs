use std::f64::consts::TAU;

use crate::primitives::ease::arc;

/// Three-phase motion curve: anticipation, main move with overshoot, damped settle.
///
/// Time is normalized entry progress. Values past `1` drive the settle phase.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionCurveConfig {
    /// Fraction of the timeline spent pulling back before the move, `0..0.5`.
    pub anticipation: f64,
    /// Depth of the pull-back, in curve units.
    pub anticipation_distance: f64,
    /// Overshoot amount, `0..1`. `0.1` matches the classic back-out curve.
    pub overshoot: f64,
    /// Oscillations after reaching the target.
    pub settle_oscillations: f64,
    pub settle_damping: f64,
    /// Length of the settle phase in normalized time past `1`.
    pub settle_duration: f64,
}

impl Default for MotionCurveConfig {
    fn default() -> Self {
        Self {
            anticipation: 0.1,
            anticipation_distance: 0.05,
            overshoot: 0.1,
            settle_oscillations: 1.0,
            settle_damping: 0.5,
            settle_duration: 0.3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvePhase {
    Anticipation,
    Main,
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveSample {
    pub value: f64,
    /// Finite-difference derivative of `value` with respect to `t`.
    pub velocity: f64,
    pub phase: CurvePhase,
}

const VELOCITY_STEP: f64 = 0.001;

/// Sample the curve at `t` with a symmetric finite-difference velocity.
pub fn apply_motion_curve(t: f64, cfg: &MotionCurveConfig) -> CurveSample {
    let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
    let (value, phase) = curve_value(t, cfg);
    let h = VELOCITY_STEP;
    let ahead = curve_value(t + h, cfg).0;
    let behind = curve_value((t - h).max(0.0), cfg).0;
    let span = t + h - (t - h).max(0.0);
    CurveSample {
        value,
        velocity: (ahead - behind) / span,
        phase,
    }
}

fn curve_value(t: f64, cfg: &MotionCurveConfig) -> (f64, CurvePhase) {
    let a = cfg.anticipation.clamp(0.0, 0.99);
    if t < a {
        let local = t / a;
        return (-cfg.anticipation_distance * arc(local), CurvePhase::Anticipation);
    }
    if t < 1.0 {
        let u = (t - a) / (1.0 - a);
        return (main_phase(u, cfg.overshoot), CurvePhase::Main);
    }
    if cfg.settle_oscillations > 0.0 {
        let dt = t - 1.0;
        let wave = (TAU * cfg.settle_oscillations * dt).sin();
        let decay = (-10.0 * cfg.settle_damping * dt).exp();
        return (1.0 + wave * cfg.overshoot * decay * 0.3, CurvePhase::Settle);
    }
    (1.0, CurvePhase::Settle)
}

fn main_phase(u: f64, overshoot: f64) -> f64 {
    let x = u - 1.0;
    if overshoot > 0.0 {
        let c1 = overshoot * 17.0158;
        let c3 = c1 + 1.0;
        1.0 + c3 * x * x * x + c1 * x * x
    } else {
        1.0 + x * x * x
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/curve.rs"]
mod tests;
