//! Motion-design enhancement layer: anticipation and overshoot, squash and
//! stretch, spring follow-through and organic idle motion, selected by tier.

/// Three-phase motion curve.
pub mod curve;
/// Layered oscillation, fBm drift and micro jitter.
pub mod organic;
/// Per-element state and the enhancement entry points.
pub mod orchestrator;
/// Spring follow-through.
pub mod secondary;
/// Volume-preserving squash and stretch.
pub mod squash;
/// Start-time offsets for element groups.
pub mod stagger;
/// Tiers and their default parameter sets.
pub mod tier;
/// Config validators.
pub mod validate;

pub use orchestrator::MotionOrchestrator;
pub use tier::{EnterpriseConfig, MotionTier};
pub use validate::{ValidationIssue, ValidationResult};
