/// Seeded FNV-1a 64-bit hasher, used to turn element identifiers into stable seeds.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    /// Standard FNV-1a 64-bit offset basis.
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    /// Start from the standard offset basis.
    pub fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    /// Feed raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    /// Final 64-bit digest.
    pub fn finish(self) -> u64 {
        self.0
    }

    /// Digest folded to 32 bits (xor of the two halves).
    pub fn finish_u32(self) -> u32 {
        (self.0 ^ (self.0 >> 32)) as u32
    }
}

/// Linear interpolation from `a` to `b`, exact at both endpoints. `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp to `[0, 1]`, mapping NaN to `0`.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Hermite smoothstep on `[0, 1]`.
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
