//! Deterministic procedural motion for animated stream alerts.
//!
//! Every frame is a pure function of configuration, time and a small amount of
//! caller-owned state (spring state, particle systems). Randomness is always seeded,
//! so exports and scrubbing reproduce exactly.
//!
//! Layers, innermost first:
//! - [`animation`]: entry, loop and depth effects keyed by a `type` tag
//! - [`motion`]: tiered enhancement (motion curves, squash and stretch, springs, organic motion)
//! - [`bounds`]: safe-zone constraints in canvas pixels
//! - [`particles`]: seeded emitters with per-kind physics
//!
//! [`AlertPipeline`] composes them for one element.
#![forbid(unsafe_code)]

pub mod animation;
pub mod bounds;
pub mod foundation;
pub mod motion;
pub mod particles;
pub mod pipeline;
pub mod primitives;

pub use animation::{DepthAnimation, DepthEffectState, DepthTrigger, EntryAnimation, LoopAnimation};
pub use bounds::{BoundsConfig, CanvasPreset, ComputedBounds, Overflow, SafeZonePreset};
pub use foundation::core::{
    AnimOutput, AnimationContext, EffectParams, Glow, Point, Rect, Rgb, Size, Transform,
    TransformOverride, Vec2,
};
pub use foundation::error::{MotionError, MotionResult};
pub use motion::{EnterpriseConfig, MotionOrchestrator, MotionTier, ValidationIssue, ValidationResult};
pub use particles::{Particle, ParticleConfig, ParticleKind, ParticleParams, ParticleSystemState};
pub use pipeline::{AlertConfig, AlertFrame, AlertPipeline};
pub use primitives::ease::{Ease, EaseDir, get_easing};
pub use primitives::random::SeededRng;
