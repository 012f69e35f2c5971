use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    foundation::core::{AnimOutput, AnimationContext, EffectParams, Transform, normalized_progress},
    foundation::math::{clamp01, lerp},
    primitives::ease::{Ease, EaseDir},
    primitives::glitch::glitch_burst,
};

/// Direction an element slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis for 3D flips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipAxis {
    X,
    #[default]
    Y,
}

/// Scale up from `scale_from` to 1 with a quick fade-in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PopInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub scale_from: f64,
    pub easing: Ease,
}

impl Default for PopInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 600.0,
            delay_ms: 0.0,
            scale_from: 0.0,
            easing: Ease::back(EaseDir::Out),
        }
    }
}

/// Shrink from an oversized, rotated state down to rest.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Starting scale, expected above 1.
    pub scale_from: f64,
    /// Starting in-plane rotation in radians, unwound to 0.
    pub rotation_from: f64,
    pub easing: Ease,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700.0,
            delay_ms: 0.0,
            scale_from: 2.5,
            rotation_from: -0.35,
            easing: Ease::Expo(EaseDir::Out),
        }
    }
}

/// Slide in from outside along one axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub direction: SlideDirection,
    /// Travel distance in normalized units.
    pub distance: f64,
    pub easing: Ease,
}

impl Default for SlideInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700.0,
            delay_ms: 0.0,
            direction: SlideDirection::Left,
            distance: 1.5,
            easing: Ease::Power(3, EaseDir::Out),
        }
    }
}

/// Plain opacity fade.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Ease,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 500.0,
            delay_ms: 0.0,
            easing: Ease::Power(1, EaseDir::Out),
        }
    }
}

/// Drop in from above and bounce to rest.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BounceInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Drop height in normalized units.
    pub height: f64,
    pub easing: Ease,
}

impl Default for BounceInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 900.0,
            delay_ms: 0.0,
            height: 0.6,
            easing: Ease::Bounce(EaseDir::Out),
        }
    }
}

/// Spin while scaling up.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpinInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Full turns unwound during the entry.
    pub rotations: f64,
    pub scale_from: f64,
    pub easing: Ease,
}

impl Default for SpinInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            delay_ms: 0.0,
            rotations: 1.0,
            scale_from: 0.2,
            easing: Ease::Power(2, EaseDir::Out),
        }
    }
}

/// Card flip around the X or Y axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FlipInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub axis: FlipAxis,
    pub easing: Ease,
}

impl Default for FlipInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 700.0,
            delay_ms: 0.0,
            axis: FlipAxis::Y,
            easing: Ease::back(EaseDir::Out),
        }
    }
}

/// Digital glitch that decays into a clean frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GlitchInConfig {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub intensity: f64,
    pub seed: u32,
}

impl Default for GlitchInConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800.0,
            delay_ms: 0.0,
            intensity: 0.8,
            seed: 1,
        }
    }
}

/// One-shot intro effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryAnimation {
    PopIn(PopInConfig),
    Burst(BurstConfig),
    SlideIn(SlideInConfig),
    FadeIn(FadeInConfig),
    BounceIn(BounceInConfig),
    SpinIn(SpinInConfig),
    FlipIn(FlipInConfig),
    Glitch(GlitchInConfig),
}

impl EntryAnimation {
    /// Type tags accepted in serialized configs.
    pub const TYPE_NAMES: [&'static str; 8] = [
        "pop_in", "burst", "slide_in", "fade_in", "bounce_in", "spin_in", "flip_in", "glitch",
    ];

    /// `(delay_ms, duration_ms)` of the entry phase.
    pub fn timing(&self) -> (f64, f64) {
        match self {
            Self::PopIn(c) => (c.delay_ms, c.duration_ms),
            Self::Burst(c) => (c.delay_ms, c.duration_ms),
            Self::SlideIn(c) => (c.delay_ms, c.duration_ms),
            Self::FadeIn(c) => (c.delay_ms, c.duration_ms),
            Self::BounceIn(c) => (c.delay_ms, c.duration_ms),
            Self::SpinIn(c) => (c.delay_ms, c.duration_ms),
            Self::FlipIn(c) => (c.delay_ms, c.duration_ms),
            Self::Glitch(c) => (c.delay_ms, c.duration_ms),
        }
    }

    /// Time at which the entry phase completes.
    pub fn end_ms(&self) -> f64 {
        let (delay, duration) = self.timing();
        delay.max(0.0) + duration.max(0.0)
    }

    /// Entry progress `0..1` at `time_ms`.
    pub fn progress(&self, time_ms: f64) -> f64 {
        let (delay, duration) = self.timing();
        normalized_progress(time_ms - delay.max(0.0), duration)
    }

    /// Apply this entry to `current` for the frame described by `ctx`.
    pub fn evaluate(&self, ctx: &AnimationContext, current: Transform) -> AnimOutput {
        let entry_t = self.progress(ctx.time_ms);
        match self {
            Self::PopIn(c) => pop_in(c, entry_t, current),
            Self::Burst(c) => burst(c, entry_t, current),
            Self::SlideIn(c) => slide_in(c, entry_t, current),
            Self::FadeIn(c) => fade_in(c, entry_t, current),
            Self::BounceIn(c) => bounce_in(c, entry_t, current),
            Self::SpinIn(c) => spin_in(c, entry_t, current),
            Self::FlipIn(c) => flip_in(c, entry_t, current),
            Self::Glitch(c) => glitch_in(c, entry_t, ctx.time_ms, current),
        }
    }
}

/// Linear fade over the first `window` fraction of the entry.
fn early_fade(entry_t: f64, window: f64) -> f64 {
    if window <= 0.0 {
        return 1.0;
    }
    clamp01(entry_t / window)
}

pub fn pop_in(c: &PopInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let e = c.easing.apply(entry_t);
    let s = lerp(c.scale_from, 1.0, e);
    AnimOutput::passthrough(current.scaled(s).faded(early_fade(entry_t, 1.0 / 3.0)))
}

pub fn burst(c: &BurstConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let e = c.easing.apply(entry_t);
    let s = lerp(c.scale_from, 1.0, e);
    let out = current
        .scaled(s)
        .rotated(c.rotation_from * (1.0 - e))
        .faded(early_fade(entry_t, 1.0 / 3.0));
    AnimOutput::passthrough(out)
}

pub fn slide_in(c: &SlideInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let offset = (1.0 - c.easing.apply(entry_t)) * c.distance;
    // Normalized space is y-up.
    let (dx, dy) = match c.direction {
        SlideDirection::Left => (-offset, 0.0),
        SlideDirection::Right => (offset, 0.0),
        SlideDirection::Top => (0.0, offset),
        SlideDirection::Bottom => (0.0, -offset),
    };
    AnimOutput::passthrough(current.translated(dx, dy).faded(early_fade(entry_t, 0.3)))
}

pub fn fade_in(c: &FadeInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    AnimOutput::passthrough(current.faded(c.easing.apply(entry_t)))
}

pub fn bounce_in(c: &BounceInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let e = c.easing.apply(entry_t);
    let out = current
        .translated(0.0, c.height * (1.0 - e))
        .faded(early_fade(entry_t, 0.2));
    AnimOutput::passthrough(out)
}

pub fn spin_in(c: &SpinInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let e = c.easing.apply(entry_t);
    let out = current
        .scaled(lerp(c.scale_from, 1.0, e))
        .rotated(-c.rotations * TAU * (1.0 - e))
        .faded(early_fade(entry_t, 0.25));
    AnimOutput::passthrough(out)
}

pub fn flip_in(c: &FlipInConfig, entry_t: f64, current: Transform) -> AnimOutput {
    let remaining = (1.0 - c.easing.apply(entry_t)) * FRAC_PI_2;
    let mut out = current.faded(early_fade(entry_t, 0.3));
    match c.axis {
        FlipAxis::X => out.rotation_x += remaining,
        FlipAxis::Y => out.rotation_y += remaining,
    }
    AnimOutput::passthrough(out)
}

pub fn glitch_in(c: &GlitchInConfig, entry_t: f64, time_ms: f64, current: Transform) -> AnimOutput {
    if entry_t >= 1.0 {
        return AnimOutput::passthrough(current);
    }
    let g = glitch_burst(entry_t, time_ms, c.intensity, c.seed);
    let visibility = if g.visible { 1.0 } else { 0.15 };
    let out = current
        .translated(g.offset_x, g.offset_y)
        .scaled(g.scale)
        .faded(visibility * early_fade(entry_t, 0.15));
    let effects = EffectParams {
        rgb_split: g.rgb_split,
        scanlines: g.scanlines,
        ..EffectParams::default()
    };
    AnimOutput::with_effects(out, effects)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entry.rs"]
mod tests;
