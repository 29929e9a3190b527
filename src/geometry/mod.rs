//! Frame-relative geometry: pan, zoom and rotation of layers, and the
//! image overflow that continues into neighboring frames.
//!
//! Everything here is a pure function of layer values and pointer or
//! keyboard input. Nothing reads the display surface.

mod overflow;
mod transform;

pub use overflow::{
    OVERFLOW_FRAME_SHIFT, OVERFLOW_PAN_THRESHOLD, OverflowProjection, Side, overflow_side,
    project_overflow, project_overflow_into,
};
pub use transform::{
    NUDGE_STEP, NUDGE_STEP_FAST, OffsetDrag, PanDrag, ZOOM_STEP, nudge, pan_delta, reset_view,
    rotate_by, zoom_in, zoom_out,
};
