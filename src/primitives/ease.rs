use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use crate::foundation::error::{MotionError, MotionResult};

/// Default overshoot of the `back` family.
pub const BACK_OVERSHOOT: f64 = 1.70158;
/// Default amplitude of the `elastic` family.
pub const ELASTIC_AMPLITUDE: f64 = 1.0;
/// Default period of the `elastic` family.
pub const ELASTIC_PERIOD: f64 = 0.3;

/// Direction of an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseDir {
    In,
    Out,
    InOut,
}

impl EaseDir {
    const ALL: [Self; 3] = [Self::In, Self::Out, Self::InOut];

    fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inout" | "in_out" => Some(Self::InOut),
            _ => None,
        }
    }
}

/// Named easing curve mapping progress `0..1` to eased progress.
///
/// Serialized by name, e.g. `"power2.out"`, `"back.out(2.5)"`, `"elastic.inOut(1, 0.4)"`.
/// Unknown names deserialize to [`Ease::FALLBACK`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ease {
    Linear,
    /// `power1` (quad) to `power4` (quint).
    Power(u8, EaseDir),
    Sine(EaseDir),
    Expo(EaseDir),
    Circ(EaseDir),
    Back {
        dir: EaseDir,
        overshoot: f64,
    },
    Elastic {
        dir: EaseDir,
        amplitude: f64,
        period: f64,
    },
    Bounce(EaseDir),
}

impl Default for Ease {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Ease {
    /// Curve used for unknown names.
    pub const FALLBACK: Self = Self::Power(2, EaseDir::Out);

    pub const fn back(dir: EaseDir) -> Self {
        Self::Back {
            dir,
            overshoot: BACK_OVERSHOOT,
        }
    }

    pub const fn elastic(dir: EaseDir) -> Self {
        Self::Elastic {
            dir,
            amplitude: ELASTIC_AMPLITUDE,
            period: ELASTIC_PERIOD,
        }
    }

    /// Every built-in curve with default parameters.
    pub fn all() -> Vec<Self> {
        let mut out = vec![Self::Linear];
        for dir in EaseDir::ALL {
            for degree in 1..=4 {
                out.push(Self::Power(degree, dir));
            }
            out.push(Self::Sine(dir));
            out.push(Self::Expo(dir));
            out.push(Self::Circ(dir));
            out.push(Self::back(dir));
            out.push(Self::elastic(dir));
            out.push(Self::Bounce(dir));
        }
        out
    }

    /// `true` for curves that leave `[0, 1]` between the endpoints.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::Back { .. } | Self::Elastic { .. })
    }

    /// Look up a curve by name. Accepts GSAP-style aliases (`quad`, `cubic`, `strong`),
    /// bare family names (direction `out`) and parameter lists for `back`/`elastic`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let (head, params) = match name.split_once('(') {
            Some((head, rest)) => {
                let inner = rest.strip_suffix(')')?;
                let params = inner
                    .split(',')
                    .map(|p| p.trim().parse::<f64>().ok())
                    .collect::<Option<Vec<_>>>()?;
                (head.trim(), params)
            }
            None => (name, Vec::new()),
        };

        let (family, dir) = match head.split_once('.') {
            Some((family, dir)) => (family, EaseDir::parse(dir)?),
            None => (head, EaseDir::Out),
        };

        let family = family.to_ascii_lowercase();
        let ease = match family.as_str() {
            "linear" | "none" | "power0" => Self::Linear,
            "power1" | "quad" => Self::Power(1, dir),
            "power2" | "cubic" => Self::Power(2, dir),
            "power3" | "quart" => Self::Power(3, dir),
            "power4" | "quint" | "strong" => Self::Power(4, dir),
            "sine" => Self::Sine(dir),
            "expo" => Self::Expo(dir),
            "circ" => Self::Circ(dir),
            "bounce" => Self::Bounce(dir),
            "back" => Self::Back {
                dir,
                overshoot: params.first().copied().unwrap_or(BACK_OVERSHOOT),
            },
            "elastic" => Self::Elastic {
                dir,
                amplitude: params.first().copied().unwrap_or(ELASTIC_AMPLITUDE),
                period: params.get(1).copied().unwrap_or(ELASTIC_PERIOD),
            },
            _ => return None,
        };
        if !params.is_empty() && !matches!(ease, Self::Back { .. } | Self::Elastic { .. }) {
            return None;
        }
        Some(ease)
    }

    /// Map normalized progress to eased progress. Input is clamped to `[0, 1]` and the
    /// endpoints are exact for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let dir = match self {
            Self::Linear => return t,
            Self::Power(_, dir)
            | Self::Sine(dir)
            | Self::Expo(dir)
            | Self::Circ(dir)
            | Self::Bounce(dir)
            | Self::Back { dir, .. }
            | Self::Elastic { dir, .. } => dir,
        };
        match dir {
            EaseDir::In => self.ease_in(t),
            EaseDir::Out => 1.0 - self.ease_in(1.0 - t),
            EaseDir::InOut => {
                if t < 0.5 {
                    self.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - self.ease_in(2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }

    fn ease_in(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Power(degree, _) => t.powi(i32::from(degree) + 1),
            Self::Sine(_) => 1.0 - (t * FRAC_PI_2).cos(),
            Self::Expo(_) => {
                if t <= 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::Circ(_) => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            Self::Back { overshoot, .. } => {
                let c1 = overshoot;
                let c3 = c1 + 1.0;
                c3 * t * t * t - c1 * t * t
            }
            Self::Elastic {
                amplitude, period, ..
            } => 1.0 - elastic_out(1.0 - t, amplitude, period),
            Self::Bounce(_) => 1.0 - bounce_out(1.0 - t),
        }
    }

    pub fn name(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Power(degree, dir) => format!("power{degree}.{}", dir.as_str()),
            Self::Sine(dir) => format!("sine.{}", dir.as_str()),
            Self::Expo(dir) => format!("expo.{}", dir.as_str()),
            Self::Circ(dir) => format!("circ.{}", dir.as_str()),
            Self::Bounce(dir) => format!("bounce.{}", dir.as_str()),
            Self::Back { dir, overshoot } => {
                if overshoot == BACK_OVERSHOOT {
                    format!("back.{}", dir.as_str())
                } else {
                    format!("back.{}({overshoot})", dir.as_str())
                }
            }
            Self::Elastic {
                dir,
                amplitude,
                period,
            } => {
                if amplitude == ELASTIC_AMPLITUDE && period == ELASTIC_PERIOD {
                    format!("elastic.{}", dir.as_str())
                } else {
                    format!("elastic.{}({amplitude}, {period})", dir.as_str())
                }
            }
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let p = if period > 0.0 { period } else { ELASTIC_PERIOD };
    let shift = p / TAU * (1.0 / a).asin();
    a * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / p).sin() + 1.0
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Resolve `name`, falling back to `power2.out` for unknown curves.
pub fn get_easing(name: &str) -> Ease {
    Ease::from_name(name).unwrap_or_else(|| {
        tracing::debug!(name, "unknown easing, falling back to power2.out");
        Ease::FALLBACK
    })
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<String> for Ease {
    fn from(value: String) -> Self {
        get_easing(&value)
    }
}

impl std::str::FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> MotionResult<Self> {
        Ease::from_name(s).ok_or_else(|| MotionError::config(format!("unknown easing '{s}'")))
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.name()
    }
}

/// Half-sine arc `sin(pi * t)`, handy for "out and back" envelopes.
pub fn arc(t: f64) -> f64 {
    (PI * t.clamp(0.0, 1.0)).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/ease.rs"]
mod tests;
