use egui::Vec2;

use crate::layer::patch::ImagePatch;
use crate::layer::{ImageLayer, ProductImageLayer, clamp_image_scale, clamp_pan, wrap_rotation};

/// Keyboard nudge of the image pan, in normalized units
pub const NUDGE_STEP: f32 = 0.02;
/// Keyboard nudge with shift held
pub const NUDGE_STEP_FAST: f32 = 0.1;
pub const ZOOM_STEP: f32 = 0.1;

/// Converts a pointer delta in pixels to a normalized pan delta.
///
/// One normalized unit is half the frame's size along that axis. A frame
/// with no area produces no movement.
pub fn pan_delta(delta_px: Vec2, frame_size: Vec2) -> Vec2 {
    let half = frame_size / 2.0;
    let axis = |d: f32, h: f32| if h > 0.0 { d / h } else { 0.0 };
    Vec2::new(axis(delta_px.x, half.x), axis(delta_px.y, half.y))
}

/// An image pan in progress.
///
/// The position is always recomputed from the pan at drag start plus the
/// total pointer travel, so rounding never accumulates across ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanDrag {
    origin: Vec2,
    frame_size: Vec2,
}

impl PanDrag {
    pub fn new(image: &ImageLayer, frame_size: Vec2) -> Self {
        Self {
            origin: Vec2::new(image.x, image.y),
            frame_size,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Pan after the pointer has travelled `total_delta_px` since drag start
    pub fn position(&self, total_delta_px: Vec2) -> Vec2 {
        let moved = self.origin + pan_delta(total_delta_px, self.frame_size);
        Vec2::new(clamp_pan(moved.x), clamp_pan(moved.y))
    }

    pub fn patch(&self, total_delta_px: Vec2) -> ImagePatch {
        let position = self.position(total_delta_px);
        ImagePatch::pan(position.x, position.y)
    }
}

/// A product-image drag in progress. The pixel offset is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetDrag {
    origin: Vec2,
}

impl OffsetDrag {
    pub fn new(product: &ProductImageLayer) -> Self {
        Self {
            origin: Vec2::new(product.offset_x, product.offset_y),
        }
    }

    pub fn position(&self, total_delta_px: Vec2) -> Vec2 {
        self.origin + total_delta_px
    }
}

/// Moves the pan by whole nudge steps along each axis.
pub fn nudge(image: &ImageLayer, steps: Vec2, fast: bool) -> Vec2 {
    let step = if fast { NUDGE_STEP_FAST } else { NUDGE_STEP };
    Vec2::new(
        clamp_pan(image.x + steps.x * step),
        clamp_pan(image.y + steps.y * step),
    )
}

pub fn zoom_in(scale: f32) -> f32 {
    clamp_image_scale(scale + ZOOM_STEP)
}

pub fn zoom_out(scale: f32) -> f32 {
    clamp_image_scale(scale - ZOOM_STEP)
}

/// Centered, unzoomed
pub fn reset_view() -> ImagePatch {
    ImagePatch {
        x: Some(0.0),
        y: Some(0.0),
        scale: Some(1.0),
        ..ImagePatch::default()
    }
}

/// Rotates by `delta` degrees, wrapping into `[0, 360)`.
pub fn rotate_by(rotation: f32, delta: f32) -> f32 {
    wrap_rotation(rotation + delta)
}
