use crate::primitives::random::hash;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerMode {
    #[default]
    Forward,
    Reverse,
    /// Middle elements first, spreading outward.
    Center,
    /// Hash-derived order, stable per seed.
    Random,
}

/// Start-time offsets for a group of elements.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    pub mode: StaggerMode,
    /// Delay per step, ms.
    pub delay_ms: f64,
    pub seed: u32,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            mode: StaggerMode::Forward,
            delay_ms: 50.0,
            seed: 0,
        }
    }
}

/// Delay in ms for element `index` of `count`.
pub fn stagger_delay(index: usize, count: usize, cfg: &StaggerConfig) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let d = cfg.delay_ms.max(0.0);
    let i = index.min(count - 1) as f64;
    let last = (count - 1) as f64;
    match cfg.mode {
        StaggerMode::Forward => i * d,
        StaggerMode::Reverse => (last - i) * d,
        StaggerMode::Center => (i - last / 2.0).abs() * d,
        StaggerMode::Random => {
            let h = hash(cfg.seed ^ hash(index as u32));
            f64::from(h) / f64::from(u32::MAX) * last * d
        }
    }
}

pub fn stagger_delays(count: usize, cfg: &StaggerConfig) -> Vec<f64> {
    (0..count).map(|i| stagger_delay(i, count, cfg)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/motion/stagger.rs"]
mod tests;
