//! Entry, loop and depth dispatchers.
//!
//! Every variant function returns a transform combined with its input: scale and
//! opacity multiply, position and rotation add. That is what lets the three layers stack.

/// JSON boundary with warn-and-passthrough for unusable configs.
pub mod config;
/// Pointer/trigger-driven 3D-feel effects.
pub mod depth;
/// One-shot intro effects.
pub mod entry;
/// Continuous post-intro effects.
pub mod looping;

pub use depth::{DepthAnimation, DepthEffectState, DepthTrigger, should_apply_depth_effect};
pub use entry::EntryAnimation;
pub use looping::{LoopAnimation, loop_time};
