use serde::{Deserialize, Serialize};

use super::{
    Layer, PATTERN_SCALE_MAX, PATTERN_SCALE_MIN, clamp_image_scale, clamp_opacity,
    clamp_or, clamp_pan, wrap_rotation,
};
use crate::assets::AssetRecord;

/// What a fill paints with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Paint {
    /// A CSS color
    Solid(String),
    /// A CSS gradient expression
    Gradient(String),
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Solid("#ffffff".to_string())
    }
}

/// Absolute sizing for a background that spans several adjacent frames.
///
/// The painted area is `span` frames wide and this frame shows the slice
/// starting `offset` frame-widths from its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stretch {
    pub span: usize,
    pub offset: usize,
}

impl Stretch {
    /// Whether this stretch fits a frame at `index` in a list of `frame_count` frames
    pub fn fits(&self, index: usize, frame_count: usize) -> bool {
        if self.offset >= self.span {
            return false;
        }
        index
            .checked_sub(self.offset)
            .and_then(|start| start.checked_add(self.span))
            .is_some_and(|end| end <= frame_count)
    }
}

/// Solid or gradient background fill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FillLayer {
    pub paint: Paint,
    pub opacity: f32,
    /// Degrees in `[0, 360)`
    pub rotation: f32,
    pub stretch: Option<Stretch>,
}

impl Default for FillLayer {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            opacity: 1.0,
            rotation: 0.0,
            stretch: None,
        }
    }
}

impl FillLayer {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            paint: Paint::Solid(color.into()),
            ..Self::default()
        }
    }

    pub fn gradient(css: impl Into<String>) -> Self {
        Self {
            paint: Paint::Gradient(css.into()),
            ..Self::default()
        }
    }
}

impl Layer for FillLayer {
    fn clamped(mut self) -> Self {
        self.opacity = clamp_opacity(self.opacity);
        self.rotation = wrap_rotation(self.rotation);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    Darken,
    Lighten,
}

/// A tiled pattern referenced from the pattern catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternLayer {
    pub pattern_id: String,
    pub scale: f32,
    pub rotation: f32,
    pub opacity: f32,
    pub blend_mode: BlendMode,
    pub tint: Option<String>,
    pub stretch: Option<Stretch>,
}

impl Default for PatternLayer {
    fn default() -> Self {
        Self {
            pattern_id: String::new(),
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            tint: None,
            stretch: None,
        }
    }
}

impl PatternLayer {
    /// Builds a pattern layer from a catalog record, keeping only its id.
    pub fn from_asset(record: &AssetRecord) -> Self {
        Self {
            pattern_id: record.id.clone(),
            scale: record.default_scale,
            opacity: record.default_opacity,
            ..Self::default()
        }
        .clamped()
    }
}

impl Layer for PatternLayer {
    fn clamped(mut self) -> Self {
        self.scale = clamp_or(self.scale, PATTERN_SCALE_MIN, PATTERN_SCALE_MAX, 1.0);
        self.rotation = wrap_rotation(self.rotation);
        self.opacity = clamp_opacity(self.opacity);
        self
    }
}

/// How a photo is fitted into the frame before pan and zoom apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

/// Full-bleed photo behind the frame content.
///
/// `x` and `y` are the normalized pan in half-frame units: `x = 1` moves the
/// image right by half the frame width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageLayer {
    pub src: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub fit: FitMode,
}

impl Default for ImageLayer {
    fn default() -> Self {
        Self {
            src: String::new(),
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            rotation: 0.0,
            fit: FitMode::Cover,
        }
    }
}

impl ImageLayer {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }
}

impl Layer for ImageLayer {
    fn clamped(mut self) -> Self {
        self.x = clamp_pan(self.x);
        self.y = clamp_pan(self.y);
        self.scale = clamp_image_scale(self.scale);
        self.opacity = clamp_opacity(self.opacity);
        self.rotation = wrap_rotation(self.rotation);
        self
    }
}
