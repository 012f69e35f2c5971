//! Particle spawn policy, physics and lifecycle.
//!
//! Unlike the transform layers, particles live in canvas pixels with y pointing down.

/// Partial and resolved particle configs.
pub mod config;
/// Forces, per-kind physics policy and lifetime opacity.
pub mod physics;
/// Per-kind spawn policy.
pub mod spawn;
/// System state and driver operations.
pub mod system;

pub use config::{ParticleConfig, ParticleKind, ParticleParams};
pub use physics::calculate_lifetime_opacity;
pub use system::{
    Particle, ParticleSystemState, spawn_burst, spawn_particles, update_particle_system,
    update_particles,
};
