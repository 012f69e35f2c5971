use smallvec::smallvec;

use crate::motion::{
    curve::MotionCurveConfig,
    organic::{MicroJitterConfig, NoiseConfig, OrganicMotionConfig, OscillationLayer},
    secondary::SecondaryMotionConfig,
    squash::{SquashAxis, SquashStretchConfig},
    stagger::{StaggerConfig, StaggerMode},
};

/// Quality tier selecting how elaborate the enhancement defaults are.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionTier {
    #[default]
    Standard,
    Professional,
    Enterprise,
}

/// Complete enhancement configuration.
///
/// Deserializing reads `tier` first and fills every omitted section from
/// [`EnterpriseConfig::for_tier`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "EnterpriseConfigDoc")]
pub struct EnterpriseConfig {
    pub tier: MotionTier,
    pub motion_curve: MotionCurveConfig,
    pub squash_stretch: SquashStretchConfig,
    pub secondary_motion: SecondaryMotionConfig,
    pub organic: OrganicMotionConfig,
    pub noise: NoiseConfig,
    pub micro_jitter: MicroJitterConfig,
    pub stagger: StaggerConfig,
}

impl Default for EnterpriseConfig {
    fn default() -> Self {
        Self::for_tier(MotionTier::default())
    }
}

impl EnterpriseConfig {
    /// Default parameter set for `tier`.
    pub fn for_tier(tier: MotionTier) -> Self {
        match tier {
            MotionTier::Standard => Self {
                tier,
                motion_curve: MotionCurveConfig {
                    anticipation: 0.0,
                    anticipation_distance: 0.0,
                    overshoot: 0.05,
                    settle_oscillations: 0.0,
                    settle_damping: 0.5,
                    settle_duration: 0.0,
                },
                squash_stretch: SquashStretchConfig {
                    enabled: false,
                    ..SquashStretchConfig::default()
                },
                secondary_motion: SecondaryMotionConfig {
                    enabled: false,
                    ..SecondaryMotionConfig::default()
                },
                organic: OrganicMotionConfig::default(),
                noise: NoiseConfig::default(),
                micro_jitter: MicroJitterConfig::default(),
                stagger: StaggerConfig::default(),
            },
            MotionTier::Professional => Self {
                tier,
                motion_curve: MotionCurveConfig::default(),
                squash_stretch: SquashStretchConfig::default(),
                secondary_motion: SecondaryMotionConfig::default(),
                organic: OrganicMotionConfig {
                    amplitude: 0.012,
                    layers: smallvec![OscillationLayer {
                        frequency_mult: 2.37,
                        amplitude_mult: 0.35,
                        phase_offset: 0.21,
                    }],
                    ..OrganicMotionConfig::default()
                },
                noise: NoiseConfig {
                    enabled: true,
                    ..NoiseConfig::default()
                },
                micro_jitter: MicroJitterConfig::default(),
                stagger: StaggerConfig {
                    mode: StaggerMode::Forward,
                    delay_ms: 60.0,
                    seed: 0,
                },
            },
            MotionTier::Enterprise => Self {
                tier,
                motion_curve: MotionCurveConfig {
                    anticipation: 0.15,
                    anticipation_distance: 0.08,
                    overshoot: 0.15,
                    settle_oscillations: 2.0,
                    settle_damping: 0.4,
                    settle_duration: 0.5,
                },
                squash_stretch: SquashStretchConfig {
                    squash_ratio: 0.8,
                    stretch_ratio: 1.2,
                    axis: SquashAxis::Velocity,
                    ..SquashStretchConfig::default()
                },
                secondary_motion: SecondaryMotionConfig {
                    delay: 0.4,
                    damping: 0.5,
                    rotation_influence: 0.12,
                    max_rotation: 0.2,
                    ..SecondaryMotionConfig::default()
                },
                organic: OrganicMotionConfig {
                    amplitude: 0.015,
                    layers: smallvec![
                        OscillationLayer {
                            frequency_mult: 2.37,
                            amplitude_mult: 0.35,
                            phase_offset: 0.21,
                        },
                        OscillationLayer {
                            frequency_mult: 3.91,
                            amplitude_mult: 0.2,
                            phase_offset: 0.57,
                        },
                        OscillationLayer {
                            frequency_mult: 0.43,
                            amplitude_mult: 0.5,
                            phase_offset: 0.83,
                        },
                    ],
                    ..OrganicMotionConfig::default()
                },
                noise: NoiseConfig {
                    enabled: true,
                    octaves: 4,
                    amplitude: 0.015,
                    ..NoiseConfig::default()
                },
                micro_jitter: MicroJitterConfig {
                    enabled: true,
                    ..MicroJitterConfig::default()
                },
                stagger: StaggerConfig {
                    mode: StaggerMode::Center,
                    delay_ms: 70.0,
                    seed: 0,
                },
            },
        }
    }
}

/// Wire shape of [`EnterpriseConfig`]: every section optional.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
struct EnterpriseConfigDoc {
    tier: MotionTier,
    motion_curve: Option<MotionCurveConfig>,
    squash_stretch: Option<SquashStretchConfig>,
    secondary_motion: Option<SecondaryMotionConfig>,
    organic: Option<OrganicMotionConfig>,
    noise: Option<NoiseConfig>,
    micro_jitter: Option<MicroJitterConfig>,
    stagger: Option<StaggerConfig>,
}

impl From<EnterpriseConfigDoc> for EnterpriseConfig {
    fn from(doc: EnterpriseConfigDoc) -> Self {
        let d = Self::for_tier(doc.tier);
        Self {
            tier: doc.tier,
            motion_curve: doc.motion_curve.unwrap_or(d.motion_curve),
            squash_stretch: doc.squash_stretch.unwrap_or(d.squash_stretch),
            secondary_motion: doc.secondary_motion.unwrap_or(d.secondary_motion),
            organic: doc.organic.unwrap_or(d.organic),
            noise: doc.noise.unwrap_or(d.noise),
            micro_jitter: doc.micro_jitter.unwrap_or(d.micro_jitter),
            stagger: doc.stagger.unwrap_or(d.stagger),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/tier.rs"]
mod tests;
