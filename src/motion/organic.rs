use std::f64::consts::TAU;

use smallvec::SmallVec;

use crate::primitives::{
    noise::{fbm, fbm2d, noise1d},
    random::hash,
};

/// Extra frequency layer on top of the base oscillation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OscillationLayer {
    pub frequency_mult: f64,
    pub amplitude_mult: f64,
    /// Phase offset in turns.
    pub phase_offset: f64,
}

/// Maximum number of extra oscillation layers.
pub const MAX_LAYERS: usize = 3;

/// Layered idle oscillation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OrganicMotionConfig {
    pub enabled: bool,
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Positional amplitude, normalized units.
    pub amplitude: f64,
    pub layers: SmallVec<[OscillationLayer; MAX_LAYERS]>,
    /// Rotation per unit of oscillation, radians.
    pub rotation_amount: f64,
    /// Relative scale breathing per unit of oscillation.
    pub scale_amount: f64,
}

impl Default for OrganicMotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.5,
            amplitude: 0.01,
            layers: SmallVec::new(),
            rotation_amount: 0.01,
            scale_amount: 0.005,
        }
    }
}

/// fBm drift keyed by element id and time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub enabled: bool,
    /// `1..=8`.
    pub octaves: u32,
    pub persistence: f64,
    /// Noise-space units per second.
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            octaves: 3,
            persistence: 0.5,
            frequency: 0.3,
            amplitude: 0.01,
        }
    }
}

/// High-frequency jitter on independent noise streams.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MicroJitterConfig {
    pub enabled: bool,
    /// Positional amplitude, normalized units.
    pub amplitude: f64,
    pub frequency: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for MicroJitterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            amplitude: 0.002,
            frequency: 12.0,
            rotation: 0.003,
            scale: 0.002,
        }
    }
}

/// Additive offsets produced by [`organic_motion`]. `scale` is a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrganicOffset {
    pub dx: f64,
    pub dy: f64,
    pub rotation: f64,
    pub scale: f64,
}

impl OrganicOffset {
    pub const ZERO: Self = Self {
        dx: 0.0,
        dy: 0.0,
        rotation: 0.0,
        scale: 1.0,
    };
}

/// Organic idle motion for the element whose id hashes to `id_hash`, `time_s`
/// seconds into the loop.
pub fn organic_motion(
    id_hash: u32,
    time_s: f64,
    organic: &OrganicMotionConfig,
    noise: &NoiseConfig,
    jitter: &MicroJitterConfig,
) -> OrganicOffset {
    let mut out = OrganicOffset::ZERO;
    let phase = f64::from(id_hash % 10_000) / 10_000.0;

    if organic.enabled {
        let wave = |f_mult: f64, a_mult: f64, turns: f64, axis_shift: f64| {
            a_mult * (TAU * (organic.frequency * f_mult * time_s + phase + turns) + axis_shift).sin()
        };
        let mut y = wave(1.0, 1.0, 0.0, 0.0);
        let mut x = wave(0.5, 0.6, 0.0, 1.3);
        for l in organic.layers.iter().take(MAX_LAYERS) {
            y += wave(l.frequency_mult, l.amplitude_mult, l.phase_offset, 0.0);
            x += wave(l.frequency_mult, l.amplitude_mult * 0.6, l.phase_offset, 1.3);
        }
        out.dx += x * organic.amplitude;
        out.dy += y * organic.amplitude;
        out.rotation += x * organic.rotation_amount;
        out.scale *= 1.0 + y * organic.scale_amount;
    }

    if noise.enabled {
        let t = time_s * noise.frequency;
        let seed = hash(id_hash);
        out.dx += fbm(t, seed, noise.octaves, noise.persistence) * noise.amplitude;
        // Second axis samples a 2D field so elements drift on distinct paths.
        out.dy += fbm2d(t, phase * 64.0, seed.wrapping_add(1), noise.octaves, noise.persistence)
            * noise.amplitude;
    }

    if jitter.enabled {
        let t = time_s * jitter.frequency;
        let seed = hash(id_hash ^ 0x9E37_79B9);
        out.dx += noise1d(t, seed) * jitter.amplitude;
        out.dy += noise1d(t, seed.wrapping_add(1)) * jitter.amplitude;
        out.rotation += noise1d(t, seed.wrapping_add(2)) * jitter.rotation;
        out.scale *= 1.0 + noise1d(t, seed.wrapping_add(3)) * jitter.scale;
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/motion/organic.rs"]
mod tests;
