use crate::document::Document;
use crate::id::FrameId;
use crate::layer::LayerKind;

/// Domain events emitted by the store after each state transition.
///
/// Layer events are edge-triggered: `LayerAdded` fires exactly once when a
/// slot goes from empty to filled, whatever caused the transition (a new
/// layer, an update on an empty slot, undo or redo).
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LayerAdded { frame_id: FrameId, kind: LayerKind },
    LayerRemoved { frame_id: FrameId, kind: LayerKind },
    FrameAdded { frame_id: FrameId, index: usize },
    FrameRemoved { frame_id: FrameId },
    FramesReordered,
    /// The present document changed
    DocumentChanged,
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// The document was replaced from a snapshot
    Hydrated,
}

/// Events describing the transition from `before` to `after`.
///
/// Layer events only cover frames present on both sides; a frame that
/// appears with layers already in place reports `FrameAdded` alone.
pub fn diff(before: &Document, after: &Document) -> Vec<StoreEvent> {
    let mut events = Vec::new();

    for frame in &before.frames {
        if after.frame(frame.id).is_none() {
            events.push(StoreEvent::FrameRemoved { frame_id: frame.id });
        }
    }

    for (index, frame) in after.frames.iter().enumerate() {
        let Some(previous) = before.frame(frame.id) else {
            events.push(StoreEvent::FrameAdded {
                frame_id: frame.id,
                index,
            });
            continue;
        };
        for kind in LayerKind::ALL {
            match (previous.has_layer(kind), frame.has_layer(kind)) {
                (false, true) => events.push(StoreEvent::LayerAdded {
                    frame_id: frame.id,
                    kind,
                }),
                (true, false) => events.push(StoreEvent::LayerRemoved {
                    frame_id: frame.id,
                    kind,
                }),
                _ => {}
            }
        }
    }

    let kept_before: Vec<FrameId> = before
        .frames
        .iter()
        .map(|frame| frame.id)
        .filter(|id| after.frame(*id).is_some())
        .collect();
    let kept_after: Vec<FrameId> = after
        .frames
        .iter()
        .map(|frame| frame.id)
        .filter(|id| before.frame(*id).is_some())
        .collect();
    if kept_before != kept_after {
        events.push(StoreEvent::FramesReordered);
    }

    if before != after {
        events.push(StoreEvent::DocumentChanged);
    }
    events
}
