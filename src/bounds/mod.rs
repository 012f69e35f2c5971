//! Canvas geometry, safe zones and overflow handling for element positions.

/// Overflow policies and the normalized-to-pixel round trip.
pub mod constrain;
/// Canvas and safe-zone presets.
pub mod presets;

pub use constrain::{
    BoundsConfig, ComputedBounds, Overflow, PropertyConstraint, compute_bounds, constrain_transform,
    constrain_value,
};
pub use presets::{CanvasPreset, Margins, SafeZonePreset};
