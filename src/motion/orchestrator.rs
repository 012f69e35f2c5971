use std::collections::HashMap;

use crate::{
    foundation::core::{AnimationContext, Transform, Vec2},
    motion::{
        curve::{CurveSample, apply_motion_curve},
        organic::organic_motion,
        secondary::{SpringState, step_secondary_motion},
        squash::apply_squash_stretch,
        stagger::stagger_delays,
        tier::{EnterpriseConfig, MotionTier},
        validate::{ValidationIssue, ValidationResult, validate_enterprise_config},
    },
    primitives::{
        ease::{Ease, EaseDir},
        random::hash_str,
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
struct ElementState {
    spring: SpringState,
    /// Last pre-spring position and the `time_ms` it was seen at.
    last_target: Option<(Vec2, f64)>,
    /// Cached `hash_str` of the element id.
    id_hash: u32,
}

/// Enhancement pass layered over entry/loop output: motion curve, squash and
/// stretch, spring follow-through and organic idle motion.
///
/// Holds per-element spring state keyed by a caller-chosen element id. State is
/// created lazily on first use and lives until [`MotionOrchestrator::reset`] or a
/// tier change. An invalid config turns every enhancement call into a passthrough.
#[derive(Clone, Debug)]
pub struct MotionOrchestrator {
    config: EnterpriseConfig,
    validation: ValidationResult,
    elements: HashMap<String, ElementState>,
}

impl Default for MotionOrchestrator {
    fn default() -> Self {
        Self::new(EnterpriseConfig::default())
    }
}

impl MotionOrchestrator {
    #[tracing::instrument(skip(config), fields(tier = ?config.tier))]
    pub fn new(config: EnterpriseConfig) -> Self {
        let validation = validate_enterprise_config(&config);
        if !validation.valid {
            tracing::debug!(
                errors = validation.errors.len(),
                "enhancement config invalid; passing transforms through"
            );
        }
        Self {
            config,
            validation,
            elements: HashMap::new(),
        }
    }

    pub fn for_tier(tier: MotionTier) -> Self {
        Self::new(EnterpriseConfig::for_tier(tier))
    }

    pub fn config(&self) -> &EnterpriseConfig {
        &self.config
    }

    pub fn tier(&self) -> MotionTier {
        self.config.tier
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Validation errors, or `None` when the config is valid.
    pub fn validation_errors(&self) -> Option<&[ValidationIssue]> {
        if self.validation.valid {
            None
        } else {
            Some(&self.validation.errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.valid
    }

    /// Number of elements with live state.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Drop every element's spring and velocity state.
    pub fn reset(&mut self) {
        tracing::debug!(elements = self.elements.len(), "resetting motion state");
        self.elements.clear();
    }

    pub fn reset_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Rebuild from the defaults of `tier` if it differs from the current tier,
    /// discarding all element state. Returns whether anything changed.
    pub fn reset_on_tier_change(&mut self, tier: MotionTier) -> bool {
        if tier == self.config.tier {
            return false;
        }
        tracing::debug!(from = ?self.config.tier, to = ?tier, "motion tier changed");
        *self = Self::for_tier(tier);
        true
    }

    /// Start delays for `count` elements from the configured stagger.
    pub fn stagger_delays(&self, count: usize) -> Vec<f64> {
        stagger_delays(count, &self.config.stagger)
    }

    fn element<'a>(
        elements: &'a mut HashMap<String, ElementState>,
        id: &str,
    ) -> &'a mut ElementState {
        elements.entry(id.to_owned()).or_insert_with(|| ElementState {
            id_hash: hash_str(id),
            ..ElementState::default()
        })
    }

    /// Motion-curve sample for raw entry progress `entry_t` (values past `1` settle).
    pub fn entry_curve(&self, entry_t: f64) -> CurveSample {
        apply_motion_curve(entry_t, &self.config.motion_curve)
    }

    /// Enhance an entry-phase transform. `entry_t` is unclamped entry progress so
    /// the settle phase can run past `1`.
    pub fn apply_enterprise_entry(
        &mut self,
        id: &str,
        base: Transform,
        ctx: &AnimationContext,
        entry_t: f64,
    ) -> Transform {
        if !self.validation.valid {
            return base;
        }
        let sample = self.entry_curve(entry_t);
        let plain = Ease::Power(2, EaseDir::Out).apply(entry_t);
        let factor = (1.0 + sample.value - plain).max(0.0);
        let mut out = base.scaled(factor);

        let cfg = &self.config;
        out = apply_squash_stretch(
            out,
            Vec2::new(sample.velocity, sample.velocity),
            &cfg.squash_stretch,
        );
        let state = Self::element(&mut self.elements, id);
        state.last_target = Some((out.position(), ctx.time_ms));
        if cfg.secondary_motion.enabled {
            step_secondary_motion(
                &mut state.spring,
                out.position(),
                &cfg.secondary_motion,
                ctx.delta_time,
            );
            out = out
                .with_position(state.spring.position)
                .rotated(state.spring.rotation);
        }
        out
    }

    /// Enhance a loop-phase transform. `loop_t` is seconds since the entry completed.
    pub fn apply_enterprise_loop(
        &mut self,
        id: &str,
        base: Transform,
        ctx: &AnimationContext,
        loop_t: f64,
    ) -> Transform {
        if !self.validation.valid {
            return base;
        }
        let cfg = &self.config;
        let state = Self::element(&mut self.elements, id);

        let o = organic_motion(
            state.id_hash,
            loop_t.max(0.0),
            &cfg.organic,
            &cfg.noise,
            &cfg.micro_jitter,
        );
        let mut out = base.translated(o.dx, o.dy).rotated(o.rotation).scaled(o.scale);

        // Velocity of the pre-spring target, so spring lag does not read as motion.
        let target = out.position();
        let velocity = match state.last_target {
            Some((prev, t_ms)) if ctx.time_ms > t_ms => {
                (target - prev) / ((ctx.time_ms - t_ms) / 1000.0)
            }
            _ => Vec2::ZERO,
        };
        state.last_target = Some((target, ctx.time_ms));
        out = apply_squash_stretch(out, velocity, &cfg.squash_stretch);

        if cfg.secondary_motion.enabled {
            step_secondary_motion(
                &mut state.spring,
                target,
                &cfg.secondary_motion,
                ctx.delta_time,
            );
            out = out
                .with_position(state.spring.position)
                .rotated(state.spring.rotation);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/orchestrator.rs"]
mod tests;
