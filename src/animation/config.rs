//! Boundary between untyped JSON configs and the typed dispatchers.
//!
//! Configs arriving from outside the type system may carry unknown `type` tags or
//! malformed fields. Those are logged and the transform passes through unchanged.

use serde::de::DeserializeOwned;

use crate::{
    animation::{
        depth::{DepthAnimation, DepthEffectState},
        entry::EntryAnimation,
        looping::LoopAnimation,
    },
    foundation::core::{AnimOutput, AnimationContext, Transform},
};

fn parse_tagged<T: DeserializeOwned>(category: &str, value: &serde_json::Value) -> Option<T> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(v) => Some(v),
        Err(err) => {
            let ty = value
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<missing>");
            tracing::warn!(category, r#type = ty, error = %err, "unusable animation config");
            None
        }
    }
}

/// Typed entry animation, or `None` (logged) for unknown or malformed configs.
pub fn parse_entry(value: &serde_json::Value) -> Option<EntryAnimation> {
    parse_tagged("entry", value)
}

pub fn parse_loop(value: &serde_json::Value) -> Option<LoopAnimation> {
    parse_tagged("loop", value)
}

pub fn parse_depth(value: &serde_json::Value) -> Option<DepthAnimation> {
    parse_tagged("depth", value)
}

/// Evaluate an untyped entry config; passthrough when unusable.
pub fn evaluate_entry_value(
    value: &serde_json::Value,
    ctx: &AnimationContext,
    current: Transform,
) -> AnimOutput {
    match parse_entry(value) {
        Some(anim) => anim.evaluate(ctx, current),
        None => AnimOutput::passthrough(current),
    }
}

pub fn evaluate_loop_value(
    value: &serde_json::Value,
    ctx: &AnimationContext,
    current: Transform,
    loop_t: f64,
) -> AnimOutput {
    match parse_loop(value) {
        Some(anim) => anim.evaluate(ctx, current, loop_t),
        None => AnimOutput::passthrough(current),
    }
}

/// Evaluate an untyped depth config behind its trigger gate; passthrough when unusable.
pub fn evaluate_depth_value(
    value: &serde_json::Value,
    ctx: &AnimationContext,
    current: Transform,
    state: &DepthEffectState,
) -> AnimOutput {
    match parse_depth(value) {
        Some(anim) => anim.evaluate_gated(ctx, current, state),
        None => AnimOutput::passthrough(current),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/config.rs"]
mod tests;
