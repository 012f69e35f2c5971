use crate::foundation::math::Fnv1a64;

/// Mulberry32 generator with a 32-bit state, output in `[0, 1)`.
///
/// The same seed always produces the same infinite sequence.
#[derive(Clone, Copy, Debug)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Next value in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Next value in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform pick; `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f64() * items.len() as f64) as usize;
        items.get(idx.min(items.len() - 1))
    }
}

/// First output of a generator seeded with `seed`.
pub fn seeded_random(seed: u32) -> f64 {
    SeededRng::new(seed).next_f64()
}

/// MurmurHash3 32-bit finalizer (full avalanche).
pub fn hash(x: u32) -> u32 {
    let mut h = x;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// Fold floats (truncated to milli-units) into one 32-bit hash.
pub fn hash_combine(values: &[f64]) -> u32 {
    values.iter().fold(0u32, |acc, &v| hash(acc ^ hash(milli_units(v))))
}

/// Stable 32-bit hash of a string identifier.
pub fn hash_str(s: &str) -> u32 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(s.as_bytes());
    hash(h.finish_u32())
}

fn milli_units(v: f64) -> u32 {
    // Saturating float->int cast, then wrap into u32 so negative inputs stay distinct.
    (v * 1000.0).trunc() as i64 as u32
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/random.rs"]
mod tests;
