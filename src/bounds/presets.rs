use crate::foundation::core::Size;

/// Output canvas dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasPreset {
    /// 1920x1080.
    #[default]
    Hd1080,
    /// 1280x720.
    Hd720,
    /// 3840x2160.
    Uhd4k,
    /// 1080x1080.
    Square1080,
    /// 1080x1920.
    Vertical1080,
    Custom {
        width: f64,
        height: f64,
    },
}

impl CanvasPreset {
    pub fn size(self) -> Size {
        match self {
            Self::Hd1080 => Size::new(1920.0, 1080.0),
            Self::Hd720 => Size::new(1280.0, 720.0),
            Self::Uhd4k => Size::new(3840.0, 2160.0),
            Self::Square1080 => Size::new(1080.0, 1080.0),
            Self::Vertical1080 => Size::new(1080.0, 1920.0),
            Self::Custom { width, height } => Size::new(width.max(1.0), height.max(1.0)),
        }
    }
}

/// Safe-zone margins as fractions of the canvas on each side.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn uniform(m: f64) -> Self {
        Self {
            top: m,
            right: m,
            bottom: m,
            left: m,
        }
    }

    /// Each side clamped to `[0, 0.45]` so the safe zone never collapses.
    pub fn clamped(self) -> Self {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 0.45) };
        Self {
            top: c(self.top),
            right: c(self.right),
            bottom: c(self.bottom),
            left: c(self.left),
        }
    }
}

/// Region guaranteed not to be cropped downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SafeZonePreset {
    /// Whole canvas.
    None,
    /// 5% on every side.
    #[default]
    ActionSafe,
    /// 10% on every side.
    TitleSafe,
    /// Clears typical social-app chrome at the top and bottom.
    Social,
    Custom(Margins),
}

impl SafeZonePreset {
    pub fn margins(self) -> Margins {
        match self {
            Self::None => Margins::uniform(0.0),
            Self::ActionSafe => Margins::uniform(0.05),
            Self::TitleSafe => Margins::uniform(0.1),
            Self::Social => Margins {
                top: 0.1,
                right: 0.05,
                bottom: 0.2,
                left: 0.05,
            },
            Self::Custom(m) => m.clamped(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bounds/presets.rs"]
mod tests;
