use log::debug;

use super::Command;
use crate::document::Document;
use crate::frame::{ContentVariant, Frame};
use crate::id::FrameId;
use crate::layer::patch::apply_to_slot;
use crate::layer::{FillLayer, Layer, Stretch};
use crate::zorder::move_element;

/// The document reducer wrapped by the undo history.
///
/// Returns `None` when the command leaves the document unchanged, either
/// because it was rejected or because it wrote the values already present.
pub fn reduce(document: &Document, command: &Command) -> Option<Document> {
    let mut next = document.clone();
    if !apply(&mut next, command) {
        debug!("Rejected {:?}", command);
        return None;
    }
    (next != *document).then_some(next)
}

/// Applies a command in place. Returns false if the command was rejected.
pub fn apply(document: &mut Document, command: &Command) -> bool {
    match command {
        Command::AddFrame { index } => add_frame(document, *index),
        Command::RemoveFrame { frame_id } => {
            if document.frames.len() <= 1 {
                return false;
            }
            let Some(index) = document.index_of(*frame_id) else {
                return false;
            };
            document.frames.remove(index);
            true
        }
        Command::DuplicateFrame { frame_id } => {
            if document.kind.is_single_frame() {
                return false;
            }
            let Some(index) = document.index_of(*frame_id) else {
                return false;
            };
            let copy = document.frames[index].duplicate();
            document.frames.insert(index + 1, copy);
            true
        }
        Command::MoveFrame { active, over } => {
            let ids = document.frame_ids();
            let Some(order) = move_element(&ids, active, over) else {
                return false;
            };
            let mut frames = std::mem::take(&mut document.frames);
            document.frames = order
                .iter()
                .filter_map(|id| {
                    let index = frames.iter().position(|frame| frame.id == *id)?;
                    Some(frames.swap_remove(index))
                })
                .collect();
            true
        }

        Command::AddVariant { frame_id } => with_frame(document, *frame_id, |frame| {
            frame.variants.push(ContentVariant::empty());
            frame.current_variant = frame.variants.len() - 1;
            true
        }),
        Command::SelectVariant { frame_id, index } => with_frame(document, *frame_id, |frame| {
            if *index >= frame.variants.len() {
                return false;
            }
            frame.current_variant = *index;
            true
        }),
        Command::RemoveVariant { frame_id, index } => with_frame(document, *frame_id, |frame| {
            if frame.variants.len() <= 1 || *index >= frame.variants.len() {
                return false;
            }
            frame.variants.remove(*index);
            if *index < frame.current_variant {
                frame.current_variant -= 1;
            }
            frame.current_variant = frame.current_variant.min(frame.variants.len() - 1);
            true
        }),
        Command::UpdateText {
            frame_id,
            field,
            text,
        } => with_frame(document, *frame_id, |frame| match frame.variant_mut() {
            Some(variant) => {
                *variant.text_mut(*field) = text.clone();
                true
            }
            None => false,
        }),
        Command::UpdateTextFormat {
            frame_id,
            field,
            format,
        } => with_frame(document, *frame_id, |frame| match frame.variant_mut() {
            Some(variant) => {
                *variant.format_mut(*field) = format.clone();
                true
            }
            None => false,
        }),
        Command::SetLayout {
            frame_id,
            layout,
            variant,
        } => with_frame(document, *frame_id, |frame| {
            frame.current_layout = *layout;
            frame.layout_variant = *variant;
            true
        }),

        Command::SetFill { frame_id, layer } => with_frame(document, *frame_id, |frame| {
            frame.background = Some(layer.clone().clamped());
            true
        }),
        Command::UpdateFill { frame_id, patch } => with_frame(document, *frame_id, |frame| {
            apply_to_slot(&mut frame.background, |layer| patch.apply(layer));
            true
        }),
        Command::SetPattern { frame_id, layer } => with_frame(document, *frame_id, |frame| {
            frame.pattern = Some(layer.clone().clamped());
            true
        }),
        Command::UpdatePattern { frame_id, patch } => with_frame(document, *frame_id, |frame| {
            apply_to_slot(&mut frame.pattern, |layer| patch.apply(layer));
            true
        }),
        Command::SetImage { frame_id, layer } => with_frame(document, *frame_id, |frame| {
            frame.image = Some(layer.clone().clamped());
            true
        }),
        Command::UpdateImage { frame_id, patch } => with_frame(document, *frame_id, |frame| {
            apply_to_slot(&mut frame.image, |layer| patch.apply(layer));
            true
        }),
        Command::SetProductImage { frame_id, layer } => {
            with_frame(document, *frame_id, |frame| {
                frame.product_image = Some(layer.clone().clamped());
                true
            })
        }
        Command::UpdateProductImage { frame_id, patch } => {
            with_frame(document, *frame_id, |frame| {
                apply_to_slot(&mut frame.product_image, |layer| patch.apply(layer));
                true
            })
        }
        Command::SetIcon { frame_id, layer } => with_frame(document, *frame_id, |frame| {
            frame.icon = Some(layer.clone().clamped());
            true
        }),
        Command::UpdateIcon { frame_id, patch } => with_frame(document, *frame_id, |frame| {
            apply_to_slot(&mut frame.icon, |layer| patch.apply(layer));
            true
        }),
        Command::SetProgress { frame_id, layer } => with_frame(document, *frame_id, |frame| {
            frame.progress = Some(layer.clone().clamped());
            true
        }),
        Command::UpdateProgress { frame_id, patch } => {
            with_frame(document, *frame_id, |frame| {
                apply_to_slot(&mut frame.progress, |layer| patch.apply(layer));
                true
            })
        }
        Command::RemoveLayer { frame_id, kind } => with_frame(document, *frame_id, |frame| {
            if !frame.has_layer(*kind) {
                return false;
            }
            frame.remove_layer(*kind);
            true
        }),
        Command::RestoreLayer { frame_id, snapshot } => {
            with_frame(document, *frame_id, |frame| {
                frame.restore(snapshot.clone());
                true
            })
        }

        Command::ReorderBackground {
            frame_id,
            active,
            over,
        } => with_frame(document, *frame_id, |frame| {
            match frame.background_order.reorder(*active, *over) {
                Some(order) => {
                    frame.background_order = order;
                    true
                }
                None => false,
            }
        }),
        Command::StretchBackground { frame_id, span } => {
            stretch_background(document, *frame_id, *span)
        }
        Command::UnstretchBackground { frame_id } => unstretch_background(document, *frame_id),
    }
}

fn with_frame(
    document: &mut Document,
    frame_id: FrameId,
    f: impl FnOnce(&mut Frame) -> bool,
) -> bool {
    match document.frame_mut(frame_id) {
        Some(frame) => f(frame),
        None => false,
    }
}

/// New frames inherit the variant count of their predecessor, all empty.
fn add_frame(document: &mut Document, index: usize) -> bool {
    if document.kind.is_single_frame() {
        return false;
    }
    let index = index.min(document.frames.len());
    let neighbor = index
        .checked_sub(1)
        .and_then(|previous| document.frames.get(previous))
        .or_else(|| document.frames.get(index));
    let variants = neighbor.map_or(1, |frame| frame.variants.len());
    document.frames.insert(index, Frame::with_variants(variants));
    true
}

fn stretch_background(document: &mut Document, frame_id: FrameId, span: usize) -> bool {
    let Some(start) = document.index_of(frame_id) else {
        return false;
    };
    let span = span.min(document.frames.len() - start);
    if span < 2 {
        return false;
    }
    let source = document.frames[start]
        .background
        .clone()
        .unwrap_or_default();
    for (offset, frame) in document.frames[start..start + span].iter_mut().enumerate() {
        frame.background = Some(FillLayer {
            stretch: Some(Stretch { span, offset }),
            ..source.clone()
        });
    }
    true
}

fn unstretch_background(document: &mut Document, frame_id: FrameId) -> bool {
    let Some(index) = document.index_of(frame_id) else {
        return false;
    };
    let Some(stretch) = document.frames[index]
        .background
        .as_ref()
        .and_then(|fill| fill.stretch)
    else {
        return false;
    };
    let Some(start) = index.checked_sub(stretch.offset) else {
        return false;
    };
    let end = start.saturating_add(stretch.span).min(document.frames.len());
    for (offset, frame) in document.frames[start..end].iter_mut().enumerate() {
        if let Some(fill) = frame.background.as_mut() {
            if fill.stretch == Some(Stretch { span: stretch.span, offset }) {
                fill.stretch = None;
            }
        }
    }
    true
}
