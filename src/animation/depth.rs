use std::f64::consts::TAU;

use crate::{
    foundation::core::{AnimOutput, AnimationContext, EffectParams, Transform, Vec2},
    foundation::math::lerp,
    primitives::ease::{Ease, EaseDir},
};

/// When a depth effect is allowed to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTrigger {
    /// Every frame.
    Always,
    /// Only while the pointer hovers the element.
    Mouse,
    /// Once the trigger transition has started; holds its end state afterwards.
    OnEnter,
    /// Whenever the animation is playing.
    #[default]
    Auto,
}

/// Caller-owned inputs for depth effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DepthEffectState {
    /// Pointer position normalized to `-1..1`.
    pub pointer: Vec2,
    /// Progress of the trigger transition, `0..1`.
    pub trigger_progress: f64,
    pub elapsed_ms: f64,
    pub is_hovering: bool,
}

impl DepthEffectState {
    /// Snapshot pointer/hover from `ctx`, keeping the trigger progress.
    pub fn sync_from(&mut self, ctx: &AnimationContext) {
        self.pointer = ctx.pointer;
        self.is_hovering = ctx.is_hovering;
        self.elapsed_ms = ctx.time_ms;
    }
}

/// Gate callers must check before applying a depth effect.
pub fn should_apply_depth_effect(
    trigger: DepthTrigger,
    state: &DepthEffectState,
    ctx: &AnimationContext,
) -> bool {
    match trigger {
        DepthTrigger::Always => true,
        DepthTrigger::Mouse => state.is_hovering,
        DepthTrigger::OnEnter => state.trigger_progress > 0.0,
        DepthTrigger::Auto => ctx.is_playing,
    }
}

/// Pointer-driven layer offset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub trigger: DepthTrigger,
    /// Offset per unit of pointer travel.
    pub intensity: f64,
    /// Layer depth; deeper layers move further.
    pub depth: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            trigger: DepthTrigger::Mouse,
            intensity: 0.05,
            depth: 1.0,
        }
    }
}

/// Tilt toward the pointer like a card under a light.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tilt3dConfig {
    pub trigger: DepthTrigger,
    /// Maximum tilt in radians.
    pub max_angle: f64,
    /// Z lift while tilted.
    pub lift: f64,
}

impl Default for Tilt3dConfig {
    fn default() -> Self {
        Self {
            trigger: DepthTrigger::Mouse,
            max_angle: 0.3,
            lift: 0.05,
        }
    }
}

/// Idle bob in depth with a slight wobble.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Float3dConfig {
    pub trigger: DepthTrigger,
    pub amplitude: f64,
    pub frequency: f64,
    /// Wobble rotation in radians.
    pub wobble: f64,
}

impl Default for Float3dConfig {
    fn default() -> Self {
        Self {
            trigger: DepthTrigger::Auto,
            amplitude: 0.1,
            frequency: 0.4,
            wobble: 0.08,
        }
    }
}

/// Continuous rotation around the vertical axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rotate3dConfig {
    pub trigger: DepthTrigger,
    /// Turns per second.
    pub speed: f64,
    /// Fixed tilt of the rotation axis toward the viewer, radians.
    pub tilt: f64,
}

impl Default for Rotate3dConfig {
    fn default() -> Self {
        Self {
            trigger: DepthTrigger::Always,
            speed: 0.1,
            tilt: 0.2,
        }
    }
}

/// Lift out of the canvas as the trigger progresses.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PopOutConfig {
    pub trigger: DepthTrigger,
    /// Z travel at full trigger.
    pub depth: f64,
    /// Scale at full trigger.
    pub scale: f64,
    pub easing: Ease,
}

impl Default for PopOutConfig {
    fn default() -> Self {
        Self {
            trigger: DepthTrigger::OnEnter,
            depth: 0.3,
            scale: 1.1,
            easing: Ease::back(EaseDir::Out),
        }
    }
}

/// Pointer/trigger-driven 3D-feel effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DepthAnimation {
    Parallax(ParallaxConfig),
    Tilt3d(Tilt3dConfig),
    Float3d(Float3dConfig),
    Rotate3d(Rotate3dConfig),
    PopOut(PopOutConfig),
}

impl DepthAnimation {
    /// Type tags accepted in serialized configs.
    pub const TYPE_NAMES: [&'static str; 5] =
        ["parallax", "tilt3d", "float3d", "rotate3d", "pop_out"];

    pub fn trigger(&self) -> DepthTrigger {
        match self {
            Self::Parallax(c) => c.trigger,
            Self::Tilt3d(c) => c.trigger,
            Self::Float3d(c) => c.trigger,
            Self::Rotate3d(c) => c.trigger,
            Self::PopOut(c) => c.trigger,
        }
    }

    /// Apply this effect to `current`. Callers gate with [`should_apply_depth_effect`].
    pub fn evaluate(
        &self,
        _ctx: &AnimationContext,
        current: Transform,
        state: &DepthEffectState,
    ) -> AnimOutput {
        match self {
            Self::Parallax(c) => parallax(c, state, current),
            Self::Tilt3d(c) => tilt3d(c, state, current),
            Self::Float3d(c) => float3d(c, state, current),
            Self::Rotate3d(c) => rotate3d(c, state, current),
            Self::PopOut(c) => pop_out(c, state, current),
        }
    }

    /// [`Self::evaluate`] behind the trigger gate; passthrough when gated off.
    pub fn evaluate_gated(
        &self,
        ctx: &AnimationContext,
        current: Transform,
        state: &DepthEffectState,
    ) -> AnimOutput {
        if should_apply_depth_effect(self.trigger(), state, ctx) {
            self.evaluate(ctx, current, state)
        } else {
            AnimOutput::passthrough(current)
        }
    }
}

fn clamp_pointer(p: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(-1.0, 1.0), p.y.clamp(-1.0, 1.0))
}

pub fn parallax(c: &ParallaxConfig, state: &DepthEffectState, current: Transform) -> AnimOutput {
    let offset = clamp_pointer(state.pointer) * (c.intensity * c.depth);
    let effects = EffectParams {
        parallax: offset,
        ..EffectParams::default()
    };
    AnimOutput::with_effects(current.translated(offset.x, offset.y), effects)
}

pub fn tilt3d(c: &Tilt3dConfig, state: &DepthEffectState, current: Transform) -> AnimOutput {
    let p = clamp_pointer(state.pointer);
    let mut out = current;
    // Pointer right turns the face right (around Y); pointer up tips the top back.
    out.rotation_y += p.x * c.max_angle;
    out.rotation_x -= p.y * c.max_angle;
    out.position_z += c.lift * p.hypot().min(1.0);
    AnimOutput::passthrough(out)
}

pub fn float3d(c: &Float3dConfig, state: &DepthEffectState, current: Transform) -> AnimOutput {
    let secs = state.elapsed_ms / 1000.0;
    let phase = TAU * c.frequency * secs;
    let mut out = current;
    out.position_z += c.amplitude * phase.sin();
    out.rotation_x += c.wobble * (phase * 0.77 + 0.9).sin();
    out.rotation_y += c.wobble * (phase * 1.31 + 2.1).sin();
    AnimOutput::passthrough(out)
}

pub fn rotate3d(c: &Rotate3dConfig, state: &DepthEffectState, current: Transform) -> AnimOutput {
    let secs = state.elapsed_ms / 1000.0;
    let mut out = current;
    out.rotation_y += TAU * c.speed * secs;
    out.rotation_x += c.tilt;
    AnimOutput::passthrough(out)
}

pub fn pop_out(c: &PopOutConfig, state: &DepthEffectState, current: Transform) -> AnimOutput {
    let p = c.easing.apply(state.trigger_progress);
    let mut out = current.scaled(lerp(1.0, c.scale, p));
    out.position_z += c.depth * p;
    let effects = EffectParams {
        depth_shadow: p.clamp(0.0, 1.0),
        ..EffectParams::default()
    };
    AnimOutput::with_effects(out, effects)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/depth.rs"]
mod tests;
