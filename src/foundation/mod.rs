//! Shared value types, errors and small numeric helpers.

/// Transform, context, color and effect side-channel types.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Hashing and interpolation helpers.
pub mod math;
