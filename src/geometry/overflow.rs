use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::id::FrameId;
use crate::layer::ImageLayer;

/// Horizontal pan beyond which a zoomed image spills into the next frame
pub const OVERFLOW_PAN_THRESHOLD: f32 = 0.3;
/// One frame width in half-width pan units
pub const OVERFLOW_FRAME_SHIFT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The side an image extends past its frame toward, if any.
pub fn overflow_side(image: &ImageLayer) -> Option<Side> {
    if image.scale <= 1.0 {
        return None;
    }
    if image.x > OVERFLOW_PAN_THRESHOLD {
        Some(Side::Right)
    } else if image.x < -OVERFLOW_PAN_THRESHOLD {
        Some(Side::Left)
    } else {
        None
    }
}

/// A read-only copy of a neighbor's image, expressed in the receiving
/// frame's coordinates. Always derived, never stored on a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowProjection {
    /// The frame that owns the image
    pub source: FrameId,
    /// The receiving frame's edge the image enters through
    pub entering_from: Side,
    pub layer: ImageLayer,
}

/// Projects `owner`'s image into `receiver`, which lies on side `toward` of
/// the owner.
///
/// Returns `None` unless the image overflows toward the receiver and the
/// receiver has no image of its own. The projected `x` is shifted by one
/// frame width and is not clamped.
pub fn project_overflow(owner: &Frame, receiver: &Frame, toward: Side) -> Option<ImageLayer> {
    if receiver.image.is_some() {
        return None;
    }
    let image = owner.image.as_ref()?;
    if overflow_side(image)? != toward {
        return None;
    }
    let shift = match toward {
        Side::Right => -OVERFLOW_FRAME_SHIFT,
        Side::Left => OVERFLOW_FRAME_SHIFT,
    };
    Some(ImageLayer {
        x: image.x + shift,
        ..image.clone()
    })
}

/// The overflow projection shown in `frames[index]`, if any.
///
/// The left neighbor is consulted first when both neighbors spill into the
/// same frame.
pub fn project_overflow_into(frames: &[Frame], index: usize) -> Option<OverflowProjection> {
    let receiver = frames.get(index)?;
    let from_left = index.checked_sub(1).and_then(|left| {
        let owner = frames.get(left)?;
        let layer = project_overflow(owner, receiver, Side::Right)?;
        Some(OverflowProjection {
            source: owner.id,
            entering_from: Side::Left,
            layer,
        })
    });
    from_left.or_else(|| {
        let owner = frames.get(index + 1)?;
        let layer = project_overflow(owner, receiver, Side::Left)?;
        Some(OverflowProjection {
            source: owner.id,
            entering_from: Side::Right,
            layer,
        })
    })
}
