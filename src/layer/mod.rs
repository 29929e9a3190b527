//! The closed set of visual layers a frame can hold.
//!
//! A frame is a fixed-slot composition: it owns at most one layer of each
//! kind, so every layer variant here has a dedicated slot on
//! [`Frame`](crate::frame::Frame) instead of living in a dynamic stack.
//! Numeric properties are bounded; anything out of range is clamped at the
//! boundary, never rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

mod background;
mod foreground;
pub mod patch;

pub use background::{BlendMode, FillLayer, FitMode, ImageLayer, Paint, PatternLayer, Stretch};
pub use foreground::{
    IconLayer, ProductImageLayer, ProductPosition, ProgressIndicatorLayer, ProgressIndicatorType,
};

pub const OPACITY_MIN: f32 = 0.0;
pub const OPACITY_MAX: f32 = 1.0;

/// Normalized pan range of an image, in half-frame units
pub const PAN_MIN: f32 = -1.0;
pub const PAN_MAX: f32 = 1.0;

pub const IMAGE_SCALE_MIN: f32 = 0.5;
pub const IMAGE_SCALE_MAX: f32 = 5.0;

pub const PRODUCT_SCALE_MIN: f32 = 0.5;
pub const PRODUCT_SCALE_MAX: f32 = 2.0;

pub const BORDER_RADIUS_MIN: f32 = 0.0;
pub const BORDER_RADIUS_MAX: f32 = 48.0;

pub const PATTERN_SCALE_MIN: f32 = 0.1;
pub const PATTERN_SCALE_MAX: f32 = 5.0;

pub const ICON_SCALE_MIN: f32 = 0.5;
pub const ICON_SCALE_MAX: f32 = 2.0;

/// Every kind of layer a frame may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    Fill,
    Pattern,
    Image,
    ProductImage,
    Icon,
    Progress,
}

impl LayerKind {
    pub const ALL: [LayerKind; 6] = [
        LayerKind::Fill,
        LayerKind::Pattern,
        LayerKind::Image,
        LayerKind::ProductImage,
        LayerKind::Icon,
        LayerKind::Progress,
    ];

    /// The background kind this layer stacks as, if it is a background layer
    pub fn background(self) -> Option<BackgroundKind> {
        match self {
            LayerKind::Fill => Some(BackgroundKind::Fill),
            LayerKind::Pattern => Some(BackgroundKind::Pattern),
            LayerKind::Image => Some(BackgroundKind::Image),
            LayerKind::ProductImage | LayerKind::Icon | LayerKind::Progress => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Fill => "fill",
            LayerKind::Pattern => "pattern",
            LayerKind::Image => "image",
            LayerKind::ProductImage => "productImage",
            LayerKind::Icon => "icon",
            LayerKind::Progress => "progress",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three layers whose stacking is governed by a frame's background order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundKind {
    Fill,
    Pattern,
    Image,
}

impl BackgroundKind {
    pub const ALL: [BackgroundKind; 3] = [
        BackgroundKind::Fill,
        BackgroundKind::Pattern,
        BackgroundKind::Image,
    ];

    pub fn layer_kind(self) -> LayerKind {
        match self {
            BackgroundKind::Fill => LayerKind::Fill,
            BackgroundKind::Pattern => LayerKind::Pattern,
            BackgroundKind::Image => LayerKind::Image,
        }
    }
}

/// Behaviour shared by every layer variant
pub trait Layer: Clone + PartialEq + Default {
    /// Returns the layer with every bounded property pulled back into range.
    fn clamped(self) -> Self;
}

/// Clamps `value` to `[min, max]`, mapping NaN to `fallback`.
pub(crate) fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

pub fn clamp_opacity(value: f32) -> f32 {
    clamp_or(value, OPACITY_MIN, OPACITY_MAX, OPACITY_MAX)
}

pub fn clamp_pan(value: f32) -> f32 {
    clamp_or(value, PAN_MIN, PAN_MAX, 0.0)
}

pub fn clamp_image_scale(value: f32) -> f32 {
    clamp_or(value, IMAGE_SCALE_MIN, IMAGE_SCALE_MAX, 1.0)
}

pub fn clamp_product_scale(value: f32) -> f32 {
    clamp_or(value, PRODUCT_SCALE_MIN, PRODUCT_SCALE_MAX, 1.0)
}

pub fn clamp_border_radius(value: f32) -> f32 {
    clamp_or(value, BORDER_RADIUS_MIN, BORDER_RADIUS_MAX, 0.0)
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_rotation(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// The captured value of one layer slot, used to restore it later
/// (edit-mode cancel, aborted drags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerSnapshot {
    Fill(Option<FillLayer>),
    Pattern(Option<PatternLayer>),
    Image(Option<ImageLayer>),
    ProductImage(Option<ProductImageLayer>),
    Icon(Option<IconLayer>),
    Progress(Option<ProgressIndicatorLayer>),
}

impl LayerSnapshot {
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerSnapshot::Fill(_) => LayerKind::Fill,
            LayerSnapshot::Pattern(_) => LayerKind::Pattern,
            LayerSnapshot::Image(_) => LayerKind::Image,
            LayerSnapshot::ProductImage(_) => LayerKind::ProductImage,
            LayerSnapshot::Icon(_) => LayerKind::Icon,
            LayerSnapshot::Progress(_) => LayerKind::Progress,
        }
    }

}
