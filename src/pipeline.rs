use crate::{
    animation::{
        config::{parse_depth, parse_entry, parse_loop},
        depth::{DepthAnimation, DepthEffectState},
        entry::EntryAnimation,
        looping::{LoopAnimation, loop_time},
    },
    bounds::constrain::{BoundsConfig, ComputedBounds, compute_bounds, constrain_transform},
    foundation::{
        core::{AnimationContext, EffectParams, Transform, TransformOverride, Vec2},
        error::{MotionError, MotionResult},
    },
    motion::{
        orchestrator::MotionOrchestrator,
        tier::EnterpriseConfig,
        validate::{
            ValidationIssue, ValidationResult, validate_enterprise_config,
            validate_particle_config,
        },
    },
    particles::{
        config::{ParticleConfig, ParticleParams},
        system::{Particle, ParticleSystemState, spawn_burst, update_particle_system},
    },
};

fn default_element_id() -> String {
    "alert".to_owned()
}

fn default_duration_ms() -> f64 {
    5000.0
}

/// Top-level alert document: one element with its animation layers, enhancement
/// tier, particle emitter and bounds.
///
/// Animation layers stay untyped JSON so an unknown `type` degrades to a passthrough
/// at evaluation time. [`AlertConfig::validate`] reports them strictly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Key for per-element enhancement state.
    #[serde(default = "default_element_id")]
    pub element_id: String,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_override: Option<TransformOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<serde_json::Value>,
    #[serde(rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_animation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<EnterpriseConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<ParticleConfig>,
    /// Particles spawned at once on the first frame.
    pub particle_burst: usize,
    /// Canvas and safe zone. Positions are constrained only when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundsConfig>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
            duration_ms: default_duration_ms(),
            transform_override: None,
            entry: None,
            loop_animation: None,
            depth: None,
            enterprise: None,
            particles: None,
            particle_burst: 0,
            bounds: None,
        }
    }
}

fn check_tagged<T: serde::de::DeserializeOwned>(
    report: &mut ValidationResult,
    path: &str,
    value: Option<&serde_json::Value>,
) {
    if let Some(value) = value
        && let Err(err) = serde_json::from_value::<T>(value.clone())
    {
        report.error(path, err.to_string());
    }
}

impl AlertConfig {
    pub fn from_json(s: &str) -> MotionResult<Self> {
        serde_json::from_str(s).map_err(|e| MotionError::serde(format!("alert config: {e}")))
    }

    /// Every issue in the document, including layers that would pass through.
    pub fn validation(&self) -> ValidationResult {
        let mut report = ValidationResult::new();
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            report.warn("duration_ms", "non-positive duration renders as complete");
        }
        if self.element_id.is_empty() {
            report.error("element_id", "must not be empty");
        }
        check_tagged::<EntryAnimation>(&mut report, "entry", self.entry.as_ref());
        check_tagged::<LoopAnimation>(&mut report, "loop", self.loop_animation.as_ref());
        check_tagged::<DepthAnimation>(&mut report, "depth", self.depth.as_ref());
        if let Some(enterprise) = &self.enterprise {
            report.merge(validate_enterprise_config(enterprise).prefixed("enterprise"));
        }
        if let Some(particles) = &self.particles {
            report.merge(validate_particle_config(&particles.resolve()).prefixed("particles"));
        }
        report
    }

    /// `Err` summarizing every error; returns the warnings otherwise.
    pub fn validate(&self) -> MotionResult<Vec<ValidationIssue>> {
        self.validation().into_result()
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlertFrame {
    pub time_ms: f64,
    pub transform: Transform,
    pub effects: EffectParams,
    pub particles: Vec<Particle>,
}

struct Emitter {
    params: ParticleParams,
    state: ParticleSystemState,
}

/// Per-frame driver for an [`AlertConfig`].
///
/// Layers compose in a fixed order: override, entry, loop, depth, enhancement,
/// bounds. Frames are expected in increasing time; a backwards seek restarts all
/// stateful layers so scrubbing stays deterministic.
pub struct AlertPipeline {
    config: AlertConfig,
    entry: Option<EntryAnimation>,
    looping: Option<LoopAnimation>,
    depth: Option<DepthAnimation>,
    depth_state: DepthEffectState,
    orchestrator: Option<MotionOrchestrator>,
    bounds: ComputedBounds,
    emitter: Option<Emitter>,
    last_time_ms: Option<f64>,
}

impl AlertPipeline {
    pub fn new(config: AlertConfig) -> Self {
        let entry = config.entry.as_ref().and_then(parse_entry);
        let looping = config.loop_animation.as_ref().and_then(parse_loop);
        let depth = config.depth.as_ref().and_then(parse_depth);
        let orchestrator = config.enterprise.clone().map(MotionOrchestrator::new);
        let bounds = compute_bounds(&config.bounds.clone().unwrap_or_default());
        let emitter = config.particles.as_ref().map(|p| Emitter {
            params: p.resolve(),
            state: ParticleSystemState::init(),
        });
        Self {
            config,
            entry,
            looping,
            depth,
            depth_state: DepthEffectState::default(),
            orchestrator,
            bounds,
            emitter,
            last_time_ms: None,
        }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    pub fn bounds(&self) -> &ComputedBounds {
        &self.bounds
    }

    pub fn orchestrator(&self) -> Option<&MotionOrchestrator> {
        self.orchestrator.as_ref()
    }

    /// Time at which the entry completes; `0` without an entry.
    pub fn entry_end_ms(&self) -> f64 {
        self.entry.as_ref().map_or(0.0, EntryAnimation::end_ms)
    }

    /// Drop particles, springs and pointer state and start again from time zero.
    pub fn restart(&mut self) {
        tracing::debug!(element = %self.config.element_id, "restarting alert pipeline");
        if let Some(orch) = &mut self.orchestrator {
            orch.reset();
        }
        // Fresh state rather than `reset` so particle ids (and their seeds) replay.
        if let Some(emitter) = &mut self.emitter {
            emitter.state = ParticleSystemState::init();
        }
        self.depth_state = DepthEffectState::default();
        self.last_time_ms = None;
    }

    /// Context for `time_ms` on this alert's canvas.
    pub fn context(&self, time_ms: f64, delta_time: f64) -> AnimationContext {
        AnimationContext::new(time_ms, self.config.duration_ms)
            .with_canvas(self.bounds.width, self.bounds.height)
            .with_delta_time(delta_time)
    }

    /// Evaluate the frame at `time_ms` with no pointer input.
    pub fn frame_at(&mut self, time_ms: f64, delta_time: f64) -> AlertFrame {
        let ctx = self.context(time_ms, delta_time);
        self.frame(&ctx)
    }

    #[tracing::instrument(skip(self, ctx), fields(time_ms = ctx.time_ms))]
    pub fn frame(&mut self, ctx: &AnimationContext) -> AlertFrame {
        if self.last_time_ms.is_some_and(|last| ctx.time_ms < last) {
            self.restart();
        }
        let first_frame = self.last_time_ms.is_none();
        self.last_time_ms = Some(ctx.time_ms);

        let mut transform = self
            .config
            .transform_override
            .map_or(Transform::IDENTITY, |o| o.apply(Transform::IDENTITY));
        let mut effects = EffectParams::default();

        let entry_end = self.entry_end_ms();
        if let Some(entry) = &self.entry {
            let out = entry.evaluate(ctx, transform);
            transform = out.transform;
            effects = effects.merge(out.effects);
        }

        let loop_t = loop_time(ctx.time_ms, entry_end);
        if let Some(looping) = &self.looping
            && ctx.time_ms >= entry_end
        {
            let out = looping.evaluate(ctx, transform, loop_t);
            transform = out.transform;
            effects = effects.merge(out.effects);
        }

        if let Some(depth) = &self.depth {
            self.depth_state.sync_from(ctx);
            self.depth_state.trigger_progress = self
                .entry
                .as_ref()
                .map_or(1.0, |e| e.progress(ctx.time_ms));
            let out = depth.evaluate_gated(ctx, transform, &self.depth_state);
            transform = out.transform;
            effects = effects.merge(out.effects);
        }

        if let Some(orch) = &mut self.orchestrator {
            let id = self.config.element_id.as_str();
            let settle = orch.config().motion_curve.settle_duration.max(0.0);
            match &self.entry {
                Some(entry) => {
                    let (delay, duration) = entry.timing();
                    let raw_t = if duration > 0.0 {
                        ((ctx.time_ms - delay.max(0.0)) / duration).max(0.0)
                    } else {
                        1.0 + settle
                    };
                    transform = if raw_t < 1.0 + settle {
                        orch.apply_enterprise_entry(id, transform, ctx, raw_t)
                    } else {
                        orch.apply_enterprise_loop(id, transform, ctx, loop_t)
                    };
                }
                None => transform = orch.apply_enterprise_loop(id, transform, ctx, loop_t),
            }
        }

        if self.config.bounds.is_some() {
            transform = constrain_transform(transform, &self.bounds);
        }

        let particles = match &mut self.emitter {
            Some(emitter) => {
                if ctx.is_playing {
                    emitter.state.resume();
                } else {
                    emitter.state.pause();
                }
                let (w, h) = (self.bounds.width, self.bounds.height);
                if first_frame && self.config.particle_burst > 0 {
                    spawn_burst(
                        &mut emitter.state,
                        &emitter.params,
                        self.config.particle_burst,
                        w,
                        h,
                    );
                }
                update_particle_system(
                    &mut emitter.state,
                    &emitter.params,
                    ctx.time_ms,
                    ctx.delta_time,
                    w,
                    h,
                );
                emitter.state.particles().to_vec()
            }
            None => Vec::new(),
        };

        AlertFrame {
            time_ms: ctx.time_ms,
            transform,
            effects,
            particles,
        }
    }

    /// Frames for `seconds` of playback at `fps`, starting from a fresh state.
    pub fn render_frames(&mut self, fps: f64, seconds: f64) -> MotionResult<Vec<AlertFrame>> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(MotionError::config(format!("fps must be > 0, got {fps}")));
        }
        if !(seconds.is_finite() && seconds >= 0.0) {
            return Err(MotionError::config(format!(
                "seconds must be >= 0, got {seconds}"
            )));
        }
        self.restart();
        let dt = 1.0 / fps;
        let count = (seconds * fps).ceil() as usize;
        Ok((0..count)
            .map(|i| self.frame_at(i as f64 * 1000.0 * dt, dt))
            .collect())
    }

    /// Pointer-driven frame, for hover-triggered depth effects.
    pub fn frame_with_pointer(
        &mut self,
        time_ms: f64,
        delta_time: f64,
        pointer: Vec2,
        is_hovering: bool,
    ) -> AlertFrame {
        let ctx = self.context(time_ms, delta_time).with_pointer(pointer, is_hovering);
        self.frame(&ctx)
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
