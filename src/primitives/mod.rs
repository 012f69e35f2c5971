//! Deterministic, stateless building blocks: PRNG, hashing, value noise, glitch noise
//! and easing curves.

/// Easing curve table.
pub mod ease;
/// Time-bucketed glitch noise.
pub mod glitch;
/// Value noise and fractal Brownian motion.
pub mod noise;
/// Seeded PRNG and hashing.
pub mod random;
