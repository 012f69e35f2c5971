use crate::{
    bounds::presets::{CanvasPreset, SafeZonePreset},
    foundation::core::{Point, Rect, Transform, Vec2},
};

/// Reference height that `scale_factor` is measured against.
pub const REFERENCE_HEIGHT: f64 = 1080.0;

/// What happens when a value leaves `[min, max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Hard stop at the boundary.
    #[default]
    Clamp,
    /// Re-enter from the opposite side.
    Wrap,
    /// Reflect off the boundaries.
    Bounce,
    /// Leave the value alone and fade opacity near and past the edges.
    Fade,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PropertyConstraint {
    pub min: f64,
    pub max: f64,
    pub overflow: Overflow,
    /// Width of the fade band as a fraction of the range.
    pub fade_distance: f64,
}

impl Default for PropertyConstraint {
    fn default() -> Self {
        Self {
            min: -1.0,
            max: 1.0,
            overflow: Overflow::Clamp,
            fade_distance: 0.1,
        }
    }
}

impl PropertyConstraint {
    pub fn new(min: f64, max: f64, overflow: Overflow) -> Self {
        Self {
            min,
            max,
            overflow,
            ..Self::default()
        }
    }
}

/// Apply `c.overflow` to `v`. `Fade` and `None` leave the value unchanged.
pub fn constrain_value(v: f64, c: &PropertyConstraint) -> f64 {
    let (min, max) = (c.min, c.max);
    let range = max - min;
    match c.overflow {
        Overflow::Fade | Overflow::None => v,
        _ if !(range > 0.0) || !v.is_finite() => min,
        Overflow::Clamp => v.clamp(min, max),
        Overflow::Wrap => {
            let out = (v - min).rem_euclid(range) + min;
            if out >= max { min } else { out }
        }
        Overflow::Bounce => {
            let m = (v - min).rem_euclid(2.0 * range);
            let folded = if m > range { 2.0 * range - m } else { m };
            (folded + min).clamp(min, max)
        }
    }
}

/// Opacity factor for `Fade`: `1` deep inside, `0` at or past either edge, linear
/// across `fade_distance * range` from the edge. `1` for other overflow modes.
pub fn fade_factor(v: f64, c: &PropertyConstraint) -> f64 {
    if c.overflow != Overflow::Fade {
        return 1.0;
    }
    if !v.is_finite() || v <= c.min || v >= c.max {
        return 0.0;
    }
    let band = c.fade_distance * (c.max - c.min);
    if band <= 0.0 {
        return 1.0;
    }
    let inside = (v - c.min).min(c.max - v);
    (inside / band).min(1.0)
}

/// Canvas and safe-zone selection plus the overflow policy for positions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub canvas: CanvasPreset,
    pub safe_zone: SafeZonePreset,
    /// Overflow applied to both axes when no explicit constraint is given.
    pub overflow: Overflow,
    /// Explicit horizontal constraint in pixels; defaults to the safe-zone span.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<PropertyConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<PropertyConstraint>,
}

/// Pixel geometry resolved from a [`BoundsConfig`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputedBounds {
    pub width: f64,
    pub height: f64,
    pub safe_zone: Rect,
    /// Center of the safe zone.
    pub center: Point,
    /// Half-extents of the safe zone.
    pub max_extent: Vec2,
    pub aspect_ratio: f64,
    /// Canvas height relative to 1080p, for scaling effect amplitudes.
    pub scale_factor: f64,
    /// Horizontal pixel constraint.
    pub x: PropertyConstraint,
    /// Vertical pixel constraint.
    pub y: PropertyConstraint,
}

impl ComputedBounds {
    /// Normalized position (y up, `-1..1` per canvas half-extent) to canvas pixels (y down).
    pub fn to_pixels(&self, p: Vec2) -> Point {
        Point::new(
            self.width / 2.0 + p.x * self.width / 2.0,
            self.height / 2.0 - p.y * self.height / 2.0,
        )
    }

    pub fn to_normalized(&self, p: Point) -> Vec2 {
        Vec2::new(
            (p.x - self.width / 2.0) / (self.width / 2.0),
            (self.height / 2.0 - p.y) / (self.height / 2.0),
        )
    }

    /// Scale a 1080p-authored amplitude to this canvas.
    pub fn scale_amplitude(&self, v: f64) -> f64 {
        v * self.scale_factor
    }
}

#[tracing::instrument(skip(config), fields(canvas = ?config.canvas))]
pub fn compute_bounds(config: &BoundsConfig) -> ComputedBounds {
    let size = config.canvas.size();
    let m = config.safe_zone.margins();
    let safe_zone = Rect::new(
        size.width * m.left,
        size.height * m.top,
        size.width * (1.0 - m.right),
        size.height * (1.0 - m.bottom),
    );
    let axis = |min: f64, max: f64| PropertyConstraint::new(min, max, config.overflow);
    ComputedBounds {
        width: size.width,
        height: size.height,
        safe_zone,
        center: safe_zone.center(),
        max_extent: Vec2::new(safe_zone.width() / 2.0, safe_zone.height() / 2.0),
        aspect_ratio: size.width / size.height,
        scale_factor: size.height / REFERENCE_HEIGHT,
        x: config.x.unwrap_or_else(|| axis(safe_zone.x0, safe_zone.x1)),
        y: config.y.unwrap_or_else(|| axis(safe_zone.y0, safe_zone.y1)),
    }
}

/// Keep the transform's position inside the bounds. Positions round-trip through
/// pixels; `Fade` multiplies opacity instead of moving the element.
pub fn constrain_transform(t: Transform, bounds: &ComputedBounds) -> Transform {
    let px = bounds.to_pixels(t.position());
    let constrained = Point::new(constrain_value(px.x, &bounds.x), constrain_value(px.y, &bounds.y));
    let fade = fade_factor(px.x, &bounds.x) * fade_factor(px.y, &bounds.y);
    let position = if constrained == px {
        t.position()
    } else {
        bounds.to_normalized(constrained)
    };
    t.with_position(position).faded(fade)
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/constrain.rs"]
mod tests;
