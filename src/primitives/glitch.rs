use crate::primitives::random::{SeededRng, hash_combine};

/// One sample of digital-glitch distortion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GlitchSample {
    /// Normalized position offsets.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Scale multiplier (`1` = no glitch).
    pub scale: f64,
    /// `false` while a flicker frame hides the element.
    pub visible: bool,
    /// RGB split in pixels.
    pub rgb_split: f64,
    /// Scanline overlay intensity, `0..1`.
    pub scanlines: f64,
}

impl GlitchSample {
    pub const NONE: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        visible: true,
        rgb_split: 0.0,
        scanlines: 0.0,
    };
}

const FAST_BUCKET_MS: f64 = 50.0;
const MEDIUM_BUCKET_MS: f64 = 100.0;
const SLOW_BUCKET_MS: f64 = 200.0;

/// Glitch distortion at `time_ms`.
///
/// Three time buckets (50/100/200 ms) seed independent streams, so the glitch holds
/// steady inside a bucket and jumps between buckets. Zero intensity yields
/// [`GlitchSample::NONE`].
pub fn glitch_noise(time_ms: f64, intensity: f64, seed: u32) -> GlitchSample {
    let intensity = intensity.clamp(0.0, 1.0);
    if intensity <= 0.0 {
        return GlitchSample::NONE;
    }
    let s = f64::from(seed);
    let mut fast = SeededRng::new(hash_combine(&[(time_ms / FAST_BUCKET_MS).floor(), s]));
    let mut medium = SeededRng::new(hash_combine(&[
        (time_ms / MEDIUM_BUCKET_MS).floor(),
        s,
        1.0,
    ]));
    let mut slow = SeededRng::new(hash_combine(&[
        (time_ms / SLOW_BUCKET_MS).floor(),
        s,
        2.0,
    ]));

    // Offsets jump often but only on a fraction of buckets.
    let (offset_x, offset_y) = if fast.chance(0.3 + 0.5 * intensity) {
        (
            fast.next_signed() * 0.08 * intensity,
            fast.next_signed() * 0.03 * intensity,
        )
    } else {
        (0.0, 0.0)
    };

    let scale = if medium.chance(0.2 * intensity) {
        1.0 + medium.next_signed() * 0.15 * intensity
    } else {
        1.0
    };
    let visible = !medium.chance(0.1 * intensity);

    let rgb_split = intensity * (0.5 + 0.5 * slow.next_f64()) * 12.0;
    let scanlines = intensity * (0.3 + 0.7 * slow.next_f64());

    GlitchSample {
        offset_x,
        offset_y,
        scale,
        visible,
        rgb_split,
        scanlines,
    }
}

/// Glitch that decays with `progress` as `(1 - progress)^2` and vanishes at `1`.
pub fn glitch_burst(progress: f64, time_ms: f64, intensity: f64, seed: u32) -> GlitchSample {
    let p = progress.clamp(0.0, 1.0);
    let decay = (1.0 - p) * (1.0 - p);
    glitch_noise(time_ms, intensity * decay, seed)
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/glitch.rs"]
mod tests;
