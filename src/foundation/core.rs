use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Normalized progress of `elapsed_ms` through `duration_ms`, clamped to `[0, 1]`.
///
/// A zero, negative or non-finite duration counts as already complete and yields `1`.
pub fn normalized_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms.is_finite() && duration_ms > 0.0) {
        return 1.0;
    }
    if elapsed_ms.is_nan() {
        return 0.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Scale/rotation/position/opacity record applied to one rendered element.
///
/// Positions are normalized to `-1..1` per canvas half-extent (`z` is depth only),
/// rotations are radians, scale `1` is identity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub opacity: f64,
}

impl Transform {
    /// The canonical zero state.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        scale_z: 1.0,
        rotation_x: 0.0,
        rotation_y: 0.0,
        rotation_z: 0.0,
        position_x: 0.0,
        position_y: 0.0,
        position_z: 0.0,
        opacity: 1.0,
    };

    /// Copy with the planar scale multiplied by `s` (x and y).
    pub fn scaled(self, s: f64) -> Self {
        Self {
            scale_x: self.scale_x * s,
            scale_y: self.scale_y * s,
            ..self
        }
    }

    /// Copy with `(dx, dy)` added to the planar position.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            position_x: self.position_x + dx,
            position_y: self.position_y + dy,
            ..self
        }
    }

    /// Copy with `r` radians added to the in-plane rotation.
    pub fn rotated(self, r: f64) -> Self {
        Self {
            rotation_z: self.rotation_z + r,
            ..self
        }
    }

    /// Copy with opacity multiplied by `o`.
    pub fn faded(self, o: f64) -> Self {
        Self {
            opacity: self.opacity * o,
            ..self
        }
    }

    pub fn position(self) -> Vec2 {
        Vec2::new(self.position_x, self.position_y)
    }

    pub fn with_position(self, p: Vec2) -> Self {
        Self {
            position_x: p.x,
            position_y: p.y,
            ..self
        }
    }

    /// `true` when every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.scale_x,
            self.scale_y,
            self.scale_z,
            self.rotation_x,
            self.rotation_y,
            self.rotation_z,
            self.position_x,
            self.position_y,
            self.position_z,
            self.opacity,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Partial transform written by an external numeric feed (audio analysis, timeline
/// evaluator) before entry/loop composition. `None` fields leave the input untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl TransformOverride {
    /// Overwrite the set fields of `base`.
    pub fn apply(&self, base: Transform) -> Transform {
        Transform {
            scale_x: self.scale_x.unwrap_or(base.scale_x),
            scale_y: self.scale_y.unwrap_or(base.scale_y),
            scale_z: self.scale_z.unwrap_or(base.scale_z),
            rotation_x: self.rotation_x.unwrap_or(base.rotation_x),
            rotation_y: self.rotation_y.unwrap_or(base.rotation_y),
            rotation_z: self.rotation_z.unwrap_or(base.rotation_z),
            position_x: self.position_x.unwrap_or(base.position_x),
            position_y: self.position_y.unwrap_or(base.position_y),
            position_z: self.position_z.unwrap_or(base.position_z),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only per-frame snapshot produced by the caller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationContext {
    /// Normalized progress through the whole alert, `0..1`.
    pub t: f64,
    pub time_ms: f64,
    pub duration_ms: f64,
    /// Frame delta in seconds.
    pub delta_time: f64,
    pub is_playing: bool,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Pointer position normalized to `-1..1`.
    pub pointer: Vec2,
    pub is_hovering: bool,
}

impl AnimationContext {
    /// Context at `time_ms` of a `duration_ms` alert on a 1920x1080 canvas at 60 fps.
    pub fn new(time_ms: f64, duration_ms: f64) -> Self {
        Self {
            t: normalized_progress(time_ms, duration_ms),
            time_ms,
            duration_ms,
            delta_time: 1.0 / 60.0,
            is_playing: true,
            canvas_width: 1920.0,
            canvas_height: 1080.0,
            pointer: Vec2::ZERO,
            is_hovering: false,
        }
    }

    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_delta_time(mut self, delta_time: f64) -> Self {
        self.delta_time = delta_time;
        self
    }

    pub fn with_pointer(mut self, pointer: Vec2, is_hovering: bool) -> Self {
        self.pointer = pointer;
        self.is_hovering = is_hovering;
        self
    }

    pub fn with_playing(mut self, is_playing: bool) -> Self {
        self.is_playing = is_playing;
        self
    }

    pub fn time_secs(&self) -> f64 {
        self.time_ms / 1000.0
    }
}

/// Straight (non-premultiplied) RGB color with channels in `0..1`.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> MotionResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MotionError::config(format!("invalid hex color '{s}'")));
        }
        let channel = |digits: &str| -> MotionResult<f64> {
            u8::from_str_radix(digits, 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| MotionError::config(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            3 => {
                let expand = |i: usize| hex[i..i + 1].repeat(2);
                Ok(Self {
                    r: channel(&expand(0))?,
                    g: channel(&expand(1))?,
                    b: channel(&expand(2))?,
                })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(MotionError::config(format!(
                "hex color '{s}' must have 3 or 6 digits"
            ))),
        }
    }

    pub fn to_hex(self) -> String {
        fn byte(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// HSV to RGB with `h` in turns (`0..1`, wrapped).
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(r + m, g + m, b + m)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Glow uniforms for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    pub color: Rgb,
    pub intensity: f64,
}

/// Visual side-effect outputs that are not part of the transform (shader uniforms).
///
/// Returned next to the transform so the renderer can apply them however it likes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<Glow>,
    /// RGB channel split in pixels.
    pub rgb_split: f64,
    /// Scanline overlay intensity, `0..1`.
    pub scanlines: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Layer offset for parallax, normalized like transform positions.
    pub parallax: Vec2,
    /// Drop-shadow strength for depth pop-outs, `0..1`.
    pub depth_shadow: f64,
}

impl EffectParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Combine two layers: the later glow wins, magnitudes take the max, parallax adds.
    pub fn merge(self, later: Self) -> Self {
        Self {
            glow: later.glow.or(self.glow),
            rgb_split: self.rgb_split.max(later.rgb_split),
            scanlines: self.scanlines.max(later.scanlines),
            blur: self.blur.max(later.blur),
            parallax: self.parallax + later.parallax,
            depth_shadow: self.depth_shadow.max(later.depth_shadow),
        }
    }
}

/// Transform plus side-channel effects produced by one dispatcher layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimOutput {
    pub transform: Transform,
    pub effects: EffectParams,
}

impl AnimOutput {
    /// Output that carries `transform` and no effects.
    pub fn passthrough(transform: Transform) -> Self {
        Self {
            transform,
            effects: EffectParams::default(),
        }
    }

    pub fn with_effects(transform: Transform, effects: EffectParams) -> Self {
        Self { transform, effects }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
