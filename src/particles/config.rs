use crate::{
    foundation::core::Rgb,
    foundation::math::{clamp01, lerp},
    primitives::ease::{Ease, EaseDir},
};

/// Particle family. Selects spawn policy, physics policy and defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    #[default]
    Confetti,
    Sparkles,
    Fire,
    Snow,
    Stars,
    Bubbles,
    Smoke,
}

impl ParticleKind {
    pub const ALL: [Self; 7] = [
        Self::Confetti,
        Self::Sparkles,
        Self::Fire,
        Self::Snow,
        Self::Stars,
        Self::Bubbles,
        Self::Smoke,
    ];
}

/// Bounded position history drawn behind each particle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub enabled: bool,
    /// Maximum stored positions per particle.
    pub length: usize,
    /// Minimum travel in pixels before a new point is recorded.
    pub min_distance: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            length: 8,
            min_distance: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    /// Lifetime fraction, `0..1`.
    pub at: f64,
    /// Hex color string.
    pub color: String,
}

/// Color gradient over a particle's lifetime.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorEvolution {
    pub enabled: bool,
    /// Stops sorted by `at`.
    pub stops: Vec<ColorStop>,
}

impl ColorEvolution {
    /// Interpolated color at lifetime `progress`; `None` when disabled or no stop parses.
    pub fn color_at(&self, progress: f64) -> Option<Rgb> {
        if !self.enabled {
            return None;
        }
        let stops: Vec<(f64, Rgb)> = self
            .stops
            .iter()
            .filter_map(|s| Rgb::from_hex(&s.color).ok().map(|c| (s.at, c)))
            .collect();
        let (first, last) = (stops.first()?, stops.last()?);
        let p = clamp01(progress);
        if p <= first.0 {
            return Some(first.1);
        }
        if p >= last.0 {
            return Some(last.1);
        }
        stops.windows(2).find_map(|w| {
            let ((a_at, a), (b_at, b)) = (w[0], w[1]);
            if p < a_at || p > b_at {
                return None;
            }
            let span = b_at - a_at;
            let t = if span > 0.0 { (p - a_at) / span } else { 1.0 };
            Some(a.lerp(b, t))
        })
    }
}

/// Size scale over a particle's lifetime.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SizeEvolution {
    pub enabled: bool,
    pub start_scale: f64,
    pub end_scale: f64,
    pub easing: Ease,
}

impl Default for SizeEvolution {
    fn default() -> Self {
        Self {
            enabled: false,
            start_scale: 1.0,
            end_scale: 1.0,
            easing: Ease::Linear,
        }
    }
}

impl SizeEvolution {
    pub fn scale_at(&self, progress: f64) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        lerp(self.start_scale, self.end_scale, self.easing.apply(progress))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmissionPoint {
    /// Fraction of the emission window, `0..1`.
    pub at: f64,
    /// Spawn-rate multiplier.
    pub rate: f64,
}

/// Spawn-rate multiplier over the first `duration_ms` of a system's life.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EmissionCurve {
    pub enabled: bool,
    pub duration_ms: f64,
    /// Points sorted by `at`; linearly interpolated, held flat past the ends.
    pub points: Vec<EmissionPoint>,
}

impl Default for EmissionCurve {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_ms: 3000.0,
            points: Vec::new(),
        }
    }
}

impl EmissionCurve {
    /// Rate multiplier `since_start_ms` after the system started. `1` when disabled.
    pub fn multiplier(&self, since_start_ms: f64) -> f64 {
        if !self.enabled || self.points.is_empty() {
            return 1.0;
        }
        let f = if self.duration_ms > 0.0 {
            clamp01(since_start_ms / self.duration_ms)
        } else {
            1.0
        };
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if f <= first.at {
            return first.rate.max(0.0);
        }
        if f >= last.at {
            return last.rate.max(0.0);
        }
        self.points
            .windows(2)
            .find(|w| f >= w[0].at && f <= w[1].at)
            .map(|w| {
                let span = w[1].at - w[0].at;
                let t = if span > 0.0 { (f - w[0].at) / span } else { 1.0 };
                lerp(w[0].rate, w[1].rate, t).max(0.0)
            })
            .unwrap_or(1.0)
    }
}

/// Partial particle config as authored. Missing fields resolve against the
/// defaults of `kind` via [`ParticleConfig::resolve`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    #[serde(rename = "type")]
    pub kind: ParticleKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_particles: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cull_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail: Option<TrailConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_evolution: Option<ColorEvolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_evolution: Option<SizeEvolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emission_curve: Option<EmissionCurve>,
}

impl ParticleConfig {
    pub fn new(kind: ParticleKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Shallow-merge the set fields over the defaults for `self.kind`.
    pub fn resolve(&self) -> ParticleParams {
        let d = ParticleParams::for_kind(self.kind);
        ParticleParams {
            kind: self.kind,
            count: self.count.unwrap_or(d.count),
            lifetime_ms: self.lifetime_ms.unwrap_or(d.lifetime_ms),
            size_min: self.size_min.unwrap_or(d.size_min),
            size_max: self.size_max.unwrap_or(d.size_max),
            speed: self.speed.unwrap_or(d.speed),
            spread: self.spread.unwrap_or(d.spread),
            gravity: self.gravity.unwrap_or(d.gravity),
            wind_x: self.wind_x.unwrap_or(d.wind_x),
            wind_y: self.wind_y.unwrap_or(d.wind_y),
            turbulence: self.turbulence.unwrap_or(d.turbulence),
            drag: self.drag.unwrap_or(d.drag),
            colors: self.colors.clone().unwrap_or(d.colors),
            fade_in: self.fade_in.unwrap_or(d.fade_in),
            fade_out: self.fade_out.unwrap_or(d.fade_out),
            rotation_speed: self.rotation_speed.unwrap_or(d.rotation_speed),
            seed: self.seed.unwrap_or(d.seed),
            max_particles: self.max_particles.unwrap_or(d.max_particles),
            cull_margin: self.cull_margin.unwrap_or(d.cull_margin),
            trail: self.trail.clone().unwrap_or(d.trail),
            color_evolution: self.color_evolution.clone().unwrap_or(d.color_evolution),
            size_evolution: self.size_evolution.clone().unwrap_or(d.size_evolution),
            emission_curve: self.emission_curve.clone().unwrap_or(d.emission_curve),
        }
    }
}

/// Fully specified particle parameters.
///
/// Units: pixels, pixels/second, pixels/second² for gravity and wind (positive
/// gravity pulls down the screen), milliseconds for lifetimes, degrees for `spread`,
/// radians/second for `rotation_speed`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParticleParams {
    #[serde(rename = "type")]
    pub kind: ParticleKind,
    /// Particles spawned per `lifetime_ms` in steady state.
    pub count: u32,
    pub lifetime_ms: f64,
    pub size_min: f64,
    pub size_max: f64,
    pub speed: f64,
    /// Half-angle of the launch cone, degrees.
    pub spread: f64,
    pub gravity: f64,
    pub wind_x: f64,
    pub wind_y: f64,
    pub turbulence: f64,
    /// Fraction of velocity lost per 60 Hz frame.
    pub drag: f64,
    pub colors: Vec<String>,
    /// Lifetime fraction spent fading in.
    pub fade_in: f64,
    /// Lifetime fraction spent fading out.
    pub fade_out: f64,
    pub rotation_speed: f64,
    pub seed: u32,
    pub max_particles: usize,
    /// Allowed overflow outside the canvas before a particle is culled, pixels.
    pub cull_margin: f64,
    pub trail: TrailConfig,
    pub color_evolution: ColorEvolution,
    pub size_evolution: SizeEvolution,
    pub emission_curve: EmissionCurve,
}

fn palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

impl ParticleParams {
    /// Default table for `kind`.
    pub fn for_kind(kind: ParticleKind) -> Self {
        let base = Self {
            kind,
            count: 40,
            lifetime_ms: 2000.0,
            size_min: 4.0,
            size_max: 8.0,
            speed: 100.0,
            spread: 45.0,
            gravity: 0.0,
            wind_x: 0.0,
            wind_y: 0.0,
            turbulence: 0.0,
            drag: 0.0,
            colors: palette(&["#ffffff"]),
            fade_in: 0.1,
            fade_out: 0.3,
            rotation_speed: 0.0,
            seed: 1,
            max_particles: 500,
            cull_margin: 100.0,
            trail: TrailConfig::default(),
            color_evolution: ColorEvolution::default(),
            size_evolution: SizeEvolution::default(),
            emission_curve: EmissionCurve::default(),
        };
        match kind {
            ParticleKind::Confetti => Self {
                count: 60,
                lifetime_ms: 3000.0,
                size_min: 6.0,
                size_max: 12.0,
                speed: 600.0,
                spread: 45.0,
                gravity: 800.0,
                turbulence: 20.0,
                drag: 0.02,
                colors: palette(&["#ff3b30", "#ffcc00", "#34c759", "#007aff", "#af52de"]),
                fade_in: 0.05,
                fade_out: 0.3,
                rotation_speed: 6.0,
                ..base
            },
            ParticleKind::Sparkles => Self {
                count: 40,
                lifetime_ms: 1200.0,
                size_min: 2.0,
                size_max: 5.0,
                speed: 80.0,
                spread: 180.0,
                turbulence: 30.0,
                drag: 0.05,
                colors: palette(&["#ffffff", "#fff4b0", "#ffd700"]),
                fade_in: 0.2,
                fade_out: 0.5,
                rotation_speed: 2.0,
                ..base
            },
            ParticleKind::Fire => Self {
                count: 80,
                lifetime_ms: 1000.0,
                size_min: 8.0,
                size_max: 18.0,
                speed: 220.0,
                spread: 20.0,
                gravity: -120.0,
                turbulence: 60.0,
                drag: 0.03,
                colors: palette(&["#ffdd55", "#ff8800", "#ff3300"]),
                fade_in: 0.1,
                fade_out: 0.6,
                size_evolution: SizeEvolution {
                    enabled: true,
                    start_scale: 1.0,
                    end_scale: 0.3,
                    easing: Ease::Power(1, EaseDir::In),
                },
                ..base
            },
            ParticleKind::Snow => Self {
                count: 50,
                lifetime_ms: 6000.0,
                size_min: 2.0,
                size_max: 6.0,
                speed: 60.0,
                gravity: 20.0,
                wind_x: 15.0,
                turbulence: 25.0,
                drag: 0.01,
                colors: palette(&["#ffffff", "#e8f4ff"]),
                fade_in: 0.1,
                fade_out: 0.2,
                rotation_speed: 1.0,
                ..base
            },
            ParticleKind::Stars => Self {
                count: 30,
                lifetime_ms: 4000.0,
                size_min: 1.0,
                size_max: 3.0,
                speed: 0.0,
                colors: palette(&["#ffffff", "#fffbe0", "#dde8ff"]),
                fade_in: 0.3,
                fade_out: 0.3,
                ..base
            },
            ParticleKind::Bubbles => Self {
                count: 25,
                lifetime_ms: 4000.0,
                size_min: 6.0,
                size_max: 16.0,
                speed: 90.0,
                gravity: -30.0,
                turbulence: 35.0,
                drag: 0.02,
                colors: palette(&["#aee7ff", "#d6f5ff"]),
                fade_in: 0.1,
                fade_out: 0.2,
                ..base
            },
            ParticleKind::Smoke => Self {
                count: 30,
                lifetime_ms: 3000.0,
                size_min: 20.0,
                size_max: 40.0,
                speed: 50.0,
                gravity: -40.0,
                wind_x: 10.0,
                turbulence: 20.0,
                drag: 0.02,
                colors: palette(&["#888888", "#aaaaaa"]),
                fade_in: 0.2,
                fade_out: 0.5,
                rotation_speed: 0.5,
                size_evolution: SizeEvolution {
                    enabled: true,
                    start_scale: 1.0,
                    end_scale: 2.5,
                    easing: Ease::Power(1, EaseDir::Out),
                },
                ..base
            },
        }
    }

    /// Parsed palette. Unparseable entries are skipped; an empty result yields white.
    pub fn palette(&self) -> Vec<Rgb> {
        let colors: Vec<Rgb> = self
            .colors
            .iter()
            .filter_map(|c| Rgb::from_hex(c).ok())
            .collect();
        if colors.is_empty() {
            vec![Rgb::WHITE]
        } else {
            colors
        }
    }

    /// Steady-state gap between spawns, ms. `None` when nothing should spawn.
    pub fn spawn_interval_ms(&self) -> Option<f64> {
        if self.count == 0 || !(self.lifetime_ms.is_finite() && self.lifetime_ms > 0.0) {
            return None;
        }
        Some(self.lifetime_ms / f64::from(self.count))
    }
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self::for_kind(ParticleKind::default())
    }
}

impl From<&ParticleConfig> for ParticleParams {
    fn from(value: &ParticleConfig) -> Self {
        value.resolve()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/config.rs"]
mod tests;
