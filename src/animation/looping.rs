use std::f64::consts::TAU;

use crate::{
    foundation::core::{AnimOutput, AnimationContext, EffectParams, Glow, Rgb, Transform},
    foundation::math::clamp01,
    primitives::ease::{Ease, EaseDir},
    primitives::noise::noise1d,
};

/// Seconds elapsed since the entry phase completed; `0` while the entry is running.
pub fn loop_time(time_ms: f64, entry_end_ms: f64) -> f64 {
    ((time_ms - entry_end_ms) / 1000.0).max(0.0)
}

/// Gentle vertical hover with a slow horizontal drift.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    /// Peak vertical offset, normalized units.
    pub amplitude: f64,
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Ramp from rest over this many ms after the entry completes.
    pub blend_in_ms: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.04,
            frequency: 0.5,
            blend_in_ms: 400.0,
        }
    }
}

/// Rhythmic scale pulse.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Peak relative scale change.
    pub amount: f64,
    pub frequency: f64,
    pub blend_in_ms: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            amount: 0.05,
            frequency: 1.0,
            blend_in_ms: 300.0,
        }
    }
}

/// Irregular rotational wiggle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WiggleConfig {
    /// Peak rotation in radians.
    pub angle: f64,
    pub frequency: f64,
    pub blend_in_ms: f64,
}

impl Default for WiggleConfig {
    fn default() -> Self {
        Self {
            angle: 0.06,
            frequency: 2.0,
            blend_in_ms: 200.0,
        }
    }
}

/// Slow inhale/exhale of scale and opacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BreatheConfig {
    pub amount: f64,
    pub frequency: f64,
    /// Opacity dip at full exhale.
    pub opacity_amount: f64,
    pub blend_in_ms: f64,
}

impl Default for BreatheConfig {
    fn default() -> Self {
        Self {
            amount: 0.03,
            frequency: 0.25,
            opacity_amount: 0.1,
            blend_in_ms: 0.0,
        }
    }
}

/// Noise-driven camera-style shake.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Peak positional offset, normalized units.
    pub intensity: f64,
    pub frequency: f64,
    /// Peak rotation in radians.
    pub rotation: f64,
    pub seed: u32,
    pub blend_in_ms: f64,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            intensity: 0.015,
            frequency: 8.0,
            rotation: 0.02,
            seed: 7,
            blend_in_ms: 100.0,
        }
    }
}

/// Pendulum swing around the top edge.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    pub angle: f64,
    pub frequency: f64,
    pub blend_in_ms: f64,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            angle: 0.15,
            frequency: 0.6,
            blend_in_ms: 300.0,
        }
    }
}

/// Continuous rotation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Turns per second; negative spins clockwise.
    pub speed: f64,
    /// `true` spins around Y (coin flip) instead of Z.
    pub vertical_axis: bool,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            speed: 0.25,
            vertical_axis: false,
        }
    }
}

/// Pulsing glow in a fixed color. Writes only the effect side channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub color: Rgb,
    pub intensity: f64,
    /// Pulses per second.
    pub pulse_speed: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(1.0, 0.8, 0.2),
            intensity: 1.0,
            pulse_speed: 1.0,
        }
    }
}

/// Glow cycling through the hue wheel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RgbGlowConfig {
    /// Hue turns per second.
    pub speed: f64,
    pub intensity: f64,
    pub saturation: f64,
}

impl Default for RgbGlowConfig {
    fn default() -> Self {
        Self {
            speed: 0.2,
            intensity: 1.0,
            saturation: 1.0,
        }
    }
}

/// Continuous post-intro effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoopAnimation {
    Float(FloatConfig),
    Pulse(PulseConfig),
    Wiggle(WiggleConfig),
    Breathe(BreatheConfig),
    Shake(ShakeConfig),
    Swing(SwingConfig),
    Spin(SpinConfig),
    Glow(GlowConfig),
    RgbGlow(RgbGlowConfig),
}

impl LoopAnimation {
    /// Type tags accepted in serialized configs.
    pub const TYPE_NAMES: [&'static str; 9] = [
        "float", "pulse", "wiggle", "breathe", "shake", "swing", "spin", "glow", "rgb_glow",
    ];

    /// Apply this loop to `current`; `loop_t` is seconds since the entry completed.
    pub fn evaluate(&self, _ctx: &AnimationContext, current: Transform, loop_t: f64) -> AnimOutput {
        let loop_t = loop_t.max(0.0);
        match self {
            Self::Float(c) => float(c, loop_t, current),
            Self::Pulse(c) => pulse(c, loop_t, current),
            Self::Wiggle(c) => wiggle(c, loop_t, current),
            Self::Breathe(c) => breathe(c, loop_t, current),
            Self::Shake(c) => shake(c, loop_t, current),
            Self::Swing(c) => swing(c, loop_t, current),
            Self::Spin(c) => spin(c, loop_t, current),
            Self::Glow(c) => glow(c, loop_t, current),
            Self::RgbGlow(c) => rgb_glow(c, loop_t, current),
        }
    }
}

/// Eased `0..1` ramp over the first `blend_in_ms` of the loop.
fn blend_in(loop_t: f64, blend_in_ms: f64) -> f64 {
    if blend_in_ms <= 0.0 {
        return 1.0;
    }
    Ease::Sine(EaseDir::Out).apply(loop_t * 1000.0 / blend_in_ms)
}

/// Weighted sum of `sin(TAU * f * ratio * t + phase)` components.
fn layered_sine(f: f64, t: f64, layers: &[(f64, f64, f64)]) -> f64 {
    layers
        .iter()
        .map(|&(ratio, phase, weight)| weight * (TAU * f * ratio * t + phase).sin())
        .sum()
}

pub fn float(c: &FloatConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    let dy = layered_sine(
        c.frequency,
        loop_t,
        &[(1.0, 0.0, 0.6), (1.37, 1.1, 0.25), (2.13, 2.7, 0.15)],
    );
    let dx = layered_sine(c.frequency, loop_t, &[(0.71, 0.5, 0.7), (1.93, 1.9, 0.3)]);
    let out = current
        .translated(dx * c.amplitude * 0.3 * ramp, dy * c.amplitude * ramp)
        .rotated(dx * c.amplitude * 0.5 * ramp);
    AnimOutput::passthrough(out)
}

pub fn pulse(c: &PulseConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    let wave = layered_sine(c.frequency, loop_t, &[(1.0, 0.0, 0.7), (1.5, 0.8, 0.3)]);
    AnimOutput::passthrough(current.scaled(1.0 + c.amount * wave * ramp))
}

pub fn wiggle(c: &WiggleConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    let wave = layered_sine(
        c.frequency,
        loop_t,
        &[(1.0, 0.0, 0.5), (2.3, 1.3, 0.3), (3.7, 0.4, 0.2)],
    );
    AnimOutput::passthrough(current.rotated(c.angle * wave * ramp))
}

pub fn breathe(c: &BreatheConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    // 0 at rest, 1 at full inhale.
    let inhale = 0.5 - 0.5 * (TAU * c.frequency * loop_t).cos();
    let out = current
        .scaled(1.0 + c.amount * inhale * ramp)
        .faded(1.0 - c.opacity_amount * (1.0 - inhale) * ramp);
    AnimOutput::passthrough(out)
}

pub fn shake(c: &ShakeConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    let x = loop_t * c.frequency;
    let out = current
        .translated(
            noise1d(x, c.seed) * c.intensity * ramp,
            noise1d(x, c.seed.wrapping_add(1)) * c.intensity * ramp,
        )
        .rotated(noise1d(x, c.seed.wrapping_add(2)) * c.rotation * ramp);
    AnimOutput::passthrough(out)
}

pub fn swing(c: &SwingConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let ramp = blend_in(loop_t, c.blend_in_ms);
    let main = (TAU * c.frequency * loop_t).sin();
    // Slow amplitude drift so consecutive swings differ slightly.
    let drift = 0.85 + 0.15 * (TAU * c.frequency * 0.37 * loop_t + 0.6).sin();
    let angle = c.angle * main * drift * ramp;
    // Pivot sits above the element: rotation pulls the body sideways.
    let out = current.rotated(angle).translated(-angle.sin() * 0.05, 0.0);
    AnimOutput::passthrough(out)
}

pub fn spin(c: &SpinConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let angle = TAU * c.speed * loop_t;
    let mut out = current;
    if c.vertical_axis {
        out.rotation_y += angle;
    } else {
        out.rotation_z += angle;
    }
    AnimOutput::passthrough(out)
}

pub fn glow(c: &GlowConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let pulse = 0.75 + 0.25 * (TAU * c.pulse_speed * loop_t).sin();
    let effects = EffectParams {
        glow: Some(Glow {
            color: c.color,
            intensity: c.intensity * pulse,
        }),
        ..EffectParams::default()
    };
    AnimOutput::with_effects(current, effects)
}

pub fn rgb_glow(c: &RgbGlowConfig, loop_t: f64, current: Transform) -> AnimOutput {
    let hue = (c.speed * loop_t).rem_euclid(1.0);
    let effects = EffectParams {
        glow: Some(Glow {
            color: Rgb::from_hsv(hue, clamp01(c.saturation), 1.0),
            intensity: c.intensity,
        }),
        ..EffectParams::default()
    };
    AnimOutput::with_effects(current, effects)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
