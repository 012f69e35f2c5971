//! Structured validation for composite configs.
//!
//! Validators never fail: they collect errors and warnings into a
//! [`ValidationResult`]. Composite validators merge their children's results.

use crate::{
    foundation::core::Rgb,
    foundation::error::{MotionError, MotionResult},
    motion::{
        curve::MotionCurveConfig,
        organic::{MAX_LAYERS, MicroJitterConfig, NoiseConfig, OrganicMotionConfig},
        secondary::SecondaryMotionConfig,
        squash::SquashStretchConfig,
        stagger::StaggerConfig,
        tier::EnterpriseConfig,
    },
    particles::config::{ColorEvolution, EmissionCurve, ParticleParams, SizeEvolution, TrailConfig},
    primitives::noise::MAX_OCTAVES,
};

/// Longest particle trail accepted without a warning.
pub const TRAIL_WARN_LENGTH: usize = 32;
/// Hard cap on particle trail length.
pub const TRAIL_MAX_LENGTH: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `squash_stretch.squash_ratio`.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
        self.valid = false;
    }

    pub fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Fold `other` into `self`.
    pub fn merge(&mut self, other: ValidationResult) {
        self.valid &= other.valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Prefix every issue path with `prefix.`.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        for issue in self.errors.iter_mut().chain(self.warnings.iter_mut()) {
            issue.path = format!("{prefix}.{}", issue.path);
        }
        self
    }

    /// `Err` summarizing every error; warnings alone pass.
    pub fn into_result(self) -> MotionResult<Vec<ValidationIssue>> {
        if self.valid {
            return Ok(self.warnings);
        }
        let summary = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(MotionError::validation(summary))
    }

    fn range(&mut self, path: &str, value: f64, min: f64, max: f64) {
        if !value.is_finite() {
            self.error(path, "must be finite");
        } else if value < min || value > max {
            self.error(path, format!("{value} is outside [{min}, {max}]"));
        }
    }

    fn non_negative(&mut self, path: &str, value: f64) {
        if !value.is_finite() {
            self.error(path, "must be finite");
        } else if value < 0.0 {
            self.error(path, format!("{value} must be >= 0"));
        }
    }
}

pub fn validate_motion_curve(c: &MotionCurveConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.range("anticipation", c.anticipation, 0.0, 0.5);
    r.range("anticipation_distance", c.anticipation_distance, 0.0, 1.0);
    r.range("overshoot", c.overshoot, 0.0, 1.0);
    r.range("settle_oscillations", c.settle_oscillations, 0.0, 10.0);
    r.non_negative("settle_damping", c.settle_damping);
    r.non_negative("settle_duration", c.settle_duration);
    if c.settle_oscillations > 0.0 && c.settle_damping == 0.0 {
        r.warn("settle_damping", "0 never settles");
    }
    if c.settle_oscillations > 0.0 && c.settle_duration == 0.0 {
        r.warn("settle_duration", "settle oscillations are configured but never play");
    }
    r
}

pub fn validate_squash_stretch(c: &SquashStretchConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.range("squash_ratio", c.squash_ratio, 0.5, 1.0);
    r.range("stretch_ratio", c.stretch_ratio, 1.0, 2.0);
    r.non_negative("velocity_scale", c.velocity_scale);
    r
}

pub fn validate_secondary_motion(c: &SecondaryMotionConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    if !c.delay.is_finite() || !(0.0..1.0).contains(&c.delay) {
        r.error("delay", format!("{} is outside [0, 1)", c.delay));
    }
    r.non_negative("damping", c.damping);
    if c.damping == 0.0 {
        r.warn("damping", "0 oscillates forever");
    }
    if !c.rotation_influence.is_finite() {
        r.error("rotation_influence", "must be finite");
    }
    r.non_negative("max_rotation", c.max_rotation);
    r
}

pub fn validate_noise(c: &NoiseConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    if !(1..=MAX_OCTAVES).contains(&c.octaves) {
        r.error("octaves", format!("{} is outside [1, {MAX_OCTAVES}]", c.octaves));
    }
    if !c.persistence.is_finite() || c.persistence <= 0.0 || c.persistence > 1.0 {
        r.error("persistence", format!("{} is outside (0, 1]", c.persistence));
    }
    r.non_negative("frequency", c.frequency);
    r.non_negative("amplitude", c.amplitude);
    r
}

pub fn validate_micro_jitter(c: &MicroJitterConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.non_negative("amplitude", c.amplitude);
    r.non_negative("frequency", c.frequency);
    r.non_negative("rotation", c.rotation);
    r.range("scale", c.scale, 0.0, 0.5);
    if c.amplitude > 0.02 {
        r.warn("amplitude", "large jitter reads as shake, not life");
    }
    r
}

pub fn validate_organic_motion(c: &OrganicMotionConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.non_negative("frequency", c.frequency);
    r.non_negative("amplitude", c.amplitude);
    r.range("scale_amount", c.scale_amount, 0.0, 0.5);
    if c.layers.len() > MAX_LAYERS {
        r.error(
            "layers",
            format!("{} layers given, at most {MAX_LAYERS}", c.layers.len()),
        );
    }
    for (i, l) in c.layers.iter().enumerate() {
        r.non_negative(&format!("layers[{i}].frequency_mult"), l.frequency_mult);
        r.non_negative(&format!("layers[{i}].amplitude_mult"), l.amplitude_mult);
    }
    r
}

pub fn validate_stagger(c: &StaggerConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.non_negative("delay_ms", c.delay_ms);
    r
}

/// Composite validator for a whole enhancement config.
pub fn validate_enterprise_config(c: &EnterpriseConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.merge(validate_motion_curve(&c.motion_curve).prefixed("motion_curve"));
    r.merge(validate_squash_stretch(&c.squash_stretch).prefixed("squash_stretch"));
    r.merge(validate_secondary_motion(&c.secondary_motion).prefixed("secondary_motion"));
    r.merge(validate_organic_motion(&c.organic).prefixed("organic"));
    r.merge(validate_noise(&c.noise).prefixed("noise"));
    r.merge(validate_micro_jitter(&c.micro_jitter).prefixed("micro_jitter"));
    r.merge(validate_stagger(&c.stagger).prefixed("stagger"));
    r
}

pub fn validate_particle_trail(c: &TrailConfig) -> ValidationResult {
    let mut r = ValidationResult::new();
    if c.length > TRAIL_MAX_LENGTH {
        r.error("length", format!("{} exceeds {TRAIL_MAX_LENGTH}", c.length));
    } else if c.length > TRAIL_WARN_LENGTH {
        r.warn("length", "long trails are expensive to draw");
    }
    if c.enabled && c.length == 0 {
        r.warn("length", "enabled trail with length 0 draws nothing");
    }
    r.non_negative("min_distance", c.min_distance);
    r
}

pub fn validate_color_evolution(c: &ColorEvolution) -> ValidationResult {
    let mut r = ValidationResult::new();
    if c.enabled && c.stops.is_empty() {
        r.warn("stops", "enabled with no stops");
    }
    for (i, stop) in c.stops.iter().enumerate() {
        r.range(&format!("stops[{i}].at"), stop.at, 0.0, 1.0);
        if let Err(err) = Rgb::from_hex(&stop.color) {
            r.error(format!("stops[{i}].color"), err.to_string());
        }
    }
    if c.stops.windows(2).any(|w| w[1].at < w[0].at) {
        r.error("stops", "stops must be sorted by `at`");
    }
    r
}

pub fn validate_size_evolution(c: &SizeEvolution) -> ValidationResult {
    let mut r = ValidationResult::new();
    r.non_negative("start_scale", c.start_scale);
    r.non_negative("end_scale", c.end_scale);
    r
}

pub fn validate_emission_curve(c: &EmissionCurve) -> ValidationResult {
    let mut r = ValidationResult::new();
    if !c.duration_ms.is_finite() || c.duration_ms <= 0.0 {
        r.error("duration_ms", "must be > 0");
    }
    if c.enabled && c.points.is_empty() {
        r.warn("points", "enabled with no points");
    }
    for (i, p) in c.points.iter().enumerate() {
        r.range(&format!("points[{i}].at"), p.at, 0.0, 1.0);
        r.non_negative(&format!("points[{i}].rate"), p.rate);
    }
    if c.points.windows(2).any(|w| w[1].at < w[0].at) {
        r.error("points", "points must be sorted by `at`");
    }
    r
}

/// Composite validator for resolved particle parameters.
pub fn validate_particle_config(p: &ParticleParams) -> ValidationResult {
    let mut r = ValidationResult::new();
    if !p.lifetime_ms.is_finite() || p.lifetime_ms <= 0.0 {
        r.error("lifetime_ms", "must be > 0");
    }
    r.non_negative("size_min", p.size_min);
    r.non_negative("size_max", p.size_max);
    if p.size_min > p.size_max {
        r.error("size_min", "must not exceed size_max");
    }
    r.non_negative("speed", p.speed);
    r.range("spread", p.spread, 0.0, 180.0);
    r.non_negative("turbulence", p.turbulence);
    r.range("drag", p.drag, 0.0, 1.0);
    r.range("fade_in", p.fade_in, 0.0, 1.0);
    r.range("fade_out", p.fade_out, 0.0, 1.0);
    if p.fade_in + p.fade_out > 1.0 {
        r.warn("fade_in", "fade_in + fade_out exceeds 1; particles never reach full opacity");
    }
    r.non_negative("cull_margin", p.cull_margin);
    if p.count == 0 {
        r.warn("count", "0 spawns nothing");
    }
    if p.colors.is_empty() {
        r.warn("colors", "empty palette falls back to white");
    }
    for (i, c) in p.colors.iter().enumerate() {
        if let Err(err) = Rgb::from_hex(c) {
            r.error(format!("colors[{i}]"), err.to_string());
        }
    }
    r.merge(validate_particle_trail(&p.trail).prefixed("trail"));
    r.merge(validate_color_evolution(&p.color_evolution).prefixed("color_evolution"));
    r.merge(validate_size_evolution(&p.size_evolution).prefixed("size_evolution"));
    r.merge(validate_emission_curve(&p.emission_curve).prefixed("emission_curve"));
    r
}

#[cfg(test)]
#[path = "../../tests/unit/motion/validate.rs"]
mod tests;
