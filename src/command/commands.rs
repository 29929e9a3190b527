use serde::{Deserialize, Serialize};

use crate::frame::{TextField, TextFormat};
use crate::id::FrameId;
use crate::layer::patch::{
    FillPatch, IconPatch, ImagePatch, PatternPatch, ProductImagePatch, ProgressPatch,
};
use crate::layer::{
    BackgroundKind, FillLayer, IconLayer, ImageLayer, LayerKind, LayerSnapshot, PatternLayer,
    ProductImageLayer, ProgressIndicatorLayer,
};

/// Every mutation the document store understands.
///
/// Commands addressing a frame that does not exist, or breaking a document
/// invariant, are silent no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Insert an empty frame at `index` (clamped to the end)
    AddFrame { index: usize },
    /// Remove a frame; rejected if it is the last one
    RemoveFrame { frame_id: FrameId },
    /// Insert a copy of a frame right after it
    DuplicateFrame { frame_id: FrameId },
    /// Move `active` to the position `over` held
    MoveFrame { active: FrameId, over: FrameId },

    AddVariant { frame_id: FrameId },
    SelectVariant { frame_id: FrameId, index: usize },
    /// Remove a variant; rejected if it is the frame's last one
    RemoveVariant { frame_id: FrameId, index: usize },
    UpdateText {
        frame_id: FrameId,
        field: TextField,
        text: String,
    },
    UpdateTextFormat {
        frame_id: FrameId,
        field: TextField,
        format: TextFormat,
    },
    SetLayout {
        frame_id: FrameId,
        layout: usize,
        variant: usize,
    },

    SetFill { frame_id: FrameId, layer: FillLayer },
    UpdateFill { frame_id: FrameId, patch: FillPatch },
    SetPattern { frame_id: FrameId, layer: PatternLayer },
    UpdatePattern { frame_id: FrameId, patch: PatternPatch },
    SetImage { frame_id: FrameId, layer: ImageLayer },
    UpdateImage { frame_id: FrameId, patch: ImagePatch },
    SetProductImage {
        frame_id: FrameId,
        layer: ProductImageLayer,
    },
    UpdateProductImage {
        frame_id: FrameId,
        patch: ProductImagePatch,
    },
    SetIcon { frame_id: FrameId, layer: IconLayer },
    UpdateIcon { frame_id: FrameId, patch: IconPatch },
    SetProgress {
        frame_id: FrameId,
        layer: ProgressIndicatorLayer,
    },
    UpdateProgress { frame_id: FrameId, patch: ProgressPatch },
    RemoveLayer { frame_id: FrameId, kind: LayerKind },
    /// Write a previously captured slot value back
    RestoreLayer {
        frame_id: FrameId,
        snapshot: LayerSnapshot,
    },

    ReorderBackground {
        frame_id: FrameId,
        active: BackgroundKind,
        over: BackgroundKind,
    },
    /// Spread the fill of `frame_id` across it and the next `span - 1` frames
    StretchBackground { frame_id: FrameId, span: usize },
    /// Stop the fill of `frame_id` spanning frames
    UnstretchBackground { frame_id: FrameId },
}

impl Command {
    /// The frame the command addresses, if any
    pub fn frame_id(&self) -> Option<FrameId> {
        match self {
            Command::AddFrame { .. } => None,
            Command::MoveFrame { active, .. } => Some(*active),
            Command::RemoveFrame { frame_id }
            | Command::DuplicateFrame { frame_id }
            | Command::AddVariant { frame_id }
            | Command::SelectVariant { frame_id, .. }
            | Command::RemoveVariant { frame_id, .. }
            | Command::UpdateText { frame_id, .. }
            | Command::UpdateTextFormat { frame_id, .. }
            | Command::SetLayout { frame_id, .. }
            | Command::SetFill { frame_id, .. }
            | Command::UpdateFill { frame_id, .. }
            | Command::SetPattern { frame_id, .. }
            | Command::UpdatePattern { frame_id, .. }
            | Command::SetImage { frame_id, .. }
            | Command::UpdateImage { frame_id, .. }
            | Command::SetProductImage { frame_id, .. }
            | Command::UpdateProductImage { frame_id, .. }
            | Command::SetIcon { frame_id, .. }
            | Command::UpdateIcon { frame_id, .. }
            | Command::SetProgress { frame_id, .. }
            | Command::UpdateProgress { frame_id, .. }
            | Command::RemoveLayer { frame_id, .. }
            | Command::RestoreLayer { frame_id, .. }
            | Command::ReorderBackground { frame_id, .. }
            | Command::StretchBackground { frame_id, .. }
            | Command::UnstretchBackground { frame_id } => Some(*frame_id),
        }
    }
}
