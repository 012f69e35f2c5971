use crate::{
    foundation::math::{lerp, smoothstep},
    primitives::random::{hash, seeded_random},
};

/// Upper bound on fBm octaves; higher requests are clamped.
pub const MAX_OCTAVES: u32 = 8;

fn lattice1(i: i64, seed: u32) -> f64 {
    seeded_random(hash((i as u32) ^ hash(seed))) * 2.0 - 1.0
}

fn lattice2(ix: i64, iy: i64, seed: u32) -> f64 {
    let h = hash((ix as u32) ^ hash((iy as u32) ^ hash(seed.wrapping_add(0x9E37_79B9))));
    seeded_random(h) * 2.0 - 1.0
}

/// Smoothstep-interpolated value noise in `[-1, 1]`.
pub fn noise1d(x: f64, seed: u32) -> f64 {
    let x0 = x.floor();
    let f = x - x0;
    let i0 = x0 as i64;
    lerp(lattice1(i0, seed), lattice1(i0 + 1, seed), smoothstep(f))
}

/// Bilinear smoothstep value noise in `[-1, 1]`.
pub fn noise2d(x: f64, y: f64, seed: u32) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let (ix, iy) = (x0 as i64, y0 as i64);
    let sx = smoothstep(x - x0);
    let sy = smoothstep(y - y0);

    let top = lerp(lattice2(ix, iy, seed), lattice2(ix + 1, iy, seed), sx);
    let bottom = lerp(
        lattice2(ix, iy + 1, seed),
        lattice2(ix + 1, iy + 1, seed),
        sx,
    );
    lerp(top, bottom, sy)
}

/// Fractal Brownian motion over [`noise1d`], normalized to `[-1, 1]`.
///
/// Each octave doubles the frequency and scales the amplitude by `persistence`.
pub fn fbm(x: f64, seed: u32, octaves: u32, persistence: f64) -> f64 {
    let octaves = octaves.clamp(1, MAX_OCTAVES);
    let mut sum = 0.0;
    let mut total = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for o in 0..octaves {
        sum += noise1d(x * freq, seed.wrapping_add(o)) * amp;
        total += amp;
        amp *= persistence;
        freq *= 2.0;
    }
    if total > 0.0 { sum / total } else { 0.0 }
}

/// Two-dimensional fBm over [`noise2d`].
pub fn fbm2d(x: f64, y: f64, seed: u32, octaves: u32, persistence: f64) -> f64 {
    let octaves = octaves.clamp(1, MAX_OCTAVES);
    let mut sum = 0.0;
    let mut total = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for o in 0..octaves {
        sum += noise2d(x * freq, y * freq, seed.wrapping_add(o)) * amp;
        total += amp;
        amp *= persistence;
        freq *= 2.0;
    }
    if total > 0.0 { sum / total } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/noise.rs"]
mod tests;
