//! Partial updates for each layer kind.
//!
//! A patch only touches the fields it sets. Applying a patch to a slot that
//! is empty updates a default-valued layer, so an update never fails for a
//! missing layer. The result is always clamped.

use serde::{Deserialize, Serialize};

use super::{
    BlendMode, FillLayer, FitMode, IconLayer, ImageLayer, Layer, Paint, PatternLayer,
    ProductImageLayer, ProductPosition, ProgressIndicatorLayer, ProgressIndicatorType, Stretch,
};

/// Applies `patch` to the layer in `slot`, creating a default layer first
/// when the slot is empty.
pub(crate) fn apply_to_slot<L: Layer>(slot: &mut Option<L>, patch: impl FnOnce(L) -> L) {
    let current = slot.take().unwrap_or_default();
    *slot = Some(patch(current).clamped());
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FillPatch {
    pub paint: Option<Paint>,
    pub opacity: Option<f32>,
    pub rotation: Option<f32>,
    pub stretch: Option<Option<Stretch>>,
}

impl FillPatch {
    pub fn apply(&self, mut layer: FillLayer) -> FillLayer {
        if let Some(paint) = &self.paint {
            layer.paint = paint.clone();
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(stretch) = self.stretch {
            layer.stretch = stretch;
        }
        layer.clamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternPatch {
    pub pattern_id: Option<String>,
    pub scale: Option<f32>,
    pub rotation: Option<f32>,
    pub opacity: Option<f32>,
    pub blend_mode: Option<BlendMode>,
    pub tint: Option<Option<String>>,
    pub stretch: Option<Option<Stretch>>,
}

impl PatternPatch {
    pub fn apply(&self, mut layer: PatternLayer) -> PatternLayer {
        if let Some(id) = &self.pattern_id {
            layer.pattern_id = id.clone();
        }
        if let Some(scale) = self.scale {
            layer.scale = scale;
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(blend_mode) = self.blend_mode {
            layer.blend_mode = blend_mode;
        }
        if let Some(tint) = &self.tint {
            layer.tint = tint.clone();
        }
        if let Some(stretch) = self.stretch {
            layer.stretch = stretch;
        }
        layer.clamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImagePatch {
    pub src: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub rotation: Option<f32>,
    pub fit: Option<FitMode>,
}

impl ImagePatch {
    pub fn pan(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn scale(scale: f32) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn apply(&self, mut layer: ImageLayer) -> ImageLayer {
        if let Some(src) = &self.src {
            layer.src = src.clone();
        }
        if let Some(x) = self.x {
            layer.x = x;
        }
        if let Some(y) = self.y {
            layer.y = y;
        }
        if let Some(scale) = self.scale {
            layer.scale = scale;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(fit) = self.fit {
            layer.fit = fit;
        }
        layer.clamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductImagePatch {
    pub src: Option<String>,
    pub scale: Option<f32>,
    pub offset_x: Option<f32>,
    pub offset_y: Option<f32>,
    pub border_radius: Option<f32>,
    pub position: Option<ProductPosition>,
}

impl ProductImagePatch {
    pub fn offset(x: f32, y: f32) -> Self {
        Self {
            offset_x: Some(x),
            offset_y: Some(y),
            ..Self::default()
        }
    }

    pub fn apply(&self, mut layer: ProductImageLayer) -> ProductImageLayer {
        if let Some(src) = &self.src {
            layer.src = src.clone();
        }
        if let Some(scale) = self.scale {
            layer.scale = scale;
        }
        if let Some(x) = self.offset_x {
            layer.offset_x = x;
        }
        if let Some(y) = self.offset_y {
            layer.offset_y = y;
        }
        if let Some(radius) = self.border_radius {
            layer.border_radius = radius;
        }
        if let Some(position) = self.position {
            layer.position = position;
        }
        layer.clamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconPatch {
    pub path: Option<String>,
    pub scale: Option<f32>,
    pub color: Option<String>,
    pub border_color: Option<Option<String>>,
    pub background_color: Option<Option<String>>,
    pub visible: Option<bool>,
}

impl IconPatch {
    pub fn apply(&self, mut layer: IconLayer) -> IconLayer {
        if let Some(path) = &self.path {
            layer.path = path.clone();
        }
        if let Some(scale) = self.scale {
            layer.scale = scale;
        }
        if let Some(color) = &self.color {
            layer.color = color.clone();
        }
        if let Some(border) = &self.border_color {
            layer.border_color = border.clone();
        }
        if let Some(background) = &self.background_color {
            layer.background_color = background.clone();
        }
        if let Some(visible) = self.visible {
            layer.visible = visible;
        }
        layer.clamped()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressPatch {
    pub indicator: Option<ProgressIndicatorType>,
    pub color: Option<String>,
    pub visible: Option<bool>,
}

impl ProgressPatch {
    pub fn apply(&self, mut layer: ProgressIndicatorLayer) -> ProgressIndicatorLayer {
        if let Some(indicator) = self.indicator {
            layer.indicator = indicator;
        }
        if let Some(color) = &self.color {
            layer.color = color.clone();
        }
        if let Some(visible) = self.visible {
            layer.visible = visible;
        }
        layer
    }
}
