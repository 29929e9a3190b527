//! The per-project entity store.
//!
//! Every mutation goes through [`Store::dispatch`], which runs the document
//! reducer inside the undo history and reports what changed as
//! [`StoreEvent`]s. Continuous geometry updates are grouped by gesture so a
//! whole drag is a single undo step.

use egui::Vec2;
use log::debug;

use crate::command::{Command, History, HistoryAction, UndoableReducer, reduce};
use crate::config::StudioConfig;
use crate::document::Document;
use crate::event::{StoreEvent, diff};
use crate::geometry::{OffsetDrag, PanDrag};
use crate::id::{FrameId, GestureId};
use crate::layer::patch::ProductImagePatch;
use crate::layer::{LayerKind, LayerSnapshot};
use crate::state::ProjectSnapshot;

/// A command plus the gesture it belongs to, as seen by the history
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub command: Command,
    pub gesture: Option<GestureId>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragKind {
    ImagePan(PanDrag),
    ProductOffset(OffsetDrag),
}

/// A pointer drag on one layer, from pointer down to release
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub gesture: GestureId,
    pub frame_id: FrameId,
    kind: DragKind,
    /// The layer as it was when the drag began
    snapshot: LayerSnapshot,
}

impl DragSession {
    pub fn layer_kind(&self) -> LayerKind {
        match self.kind {
            DragKind::ImagePan(_) => LayerKind::Image,
            DragKind::ProductOffset(_) => LayerKind::ProductImage,
        }
    }

    pub fn snapshot(&self) -> &LayerSnapshot {
        &self.snapshot
    }

    fn command(&self, total_delta_px: Vec2) -> Command {
        match &self.kind {
            DragKind::ImagePan(pan) => Command::UpdateImage {
                frame_id: self.frame_id,
                patch: pan.patch(total_delta_px),
            },
            DragKind::ProductOffset(offset) => {
                let position = offset.position(total_delta_px);
                Command::UpdateProductImage {
                    frame_id: self.frame_id,
                    patch: ProductImagePatch::offset(position.x, position.y),
                }
            }
        }
    }
}

/// Document state of one project with its own undo history
pub struct Store {
    history: History<Document>,
    reducer: UndoableReducer<Document, Envelope>,
    drag: Option<DragSession>,
    next_gesture: u64,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("frames", &self.history.present().frames.len())
            .field("past", &self.history.past_len())
            .field("future", &self.history.future_len())
            .field("drag", &self.drag)
            .finish()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl Store {
    pub fn new(document: Document) -> Self {
        Self::from_config(document, &StudioConfig::default())
    }

    pub fn from_config(document: Document, config: &StudioConfig) -> Self {
        let reducer = UndoableReducer::new(|document: &Document, envelope: &Envelope| {
            reduce(document, &envelope.command)
        })
        .with_group_by(|envelope: &Envelope| envelope.gesture.map(|gesture| gesture.0))
        .with_limit(config.history_limit);

        Self {
            history: History::new(document),
            reducer,
            drag: None,
            next_gesture: 1,
        }
    }

    pub fn document(&self) -> &Document {
        self.history.present()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies a command as its own undo step
    pub fn dispatch(&mut self, command: Command) -> Vec<StoreEvent> {
        self.run(HistoryAction::Apply(Envelope {
            command,
            gesture: None,
        }))
    }

    /// Applies a command as part of `gesture`; consecutive commands of the
    /// same gesture share one undo step.
    pub fn dispatch_in(&mut self, gesture: GestureId, command: Command) -> Vec<StoreEvent> {
        self.run(HistoryAction::Apply(Envelope {
            command,
            gesture: Some(gesture),
        }))
    }

    /// Allocates a fresh gesture id
    pub fn begin_gesture(&mut self) -> GestureId {
        let gesture = GestureId(self.next_gesture);
        self.next_gesture += 1;
        gesture
    }

    pub fn undo(&mut self) -> Vec<StoreEvent> {
        self.end_drag();
        self.run(HistoryAction::Undo)
    }

    pub fn redo(&mut self) -> Vec<StoreEvent> {
        self.end_drag();
        self.run(HistoryAction::Redo)
    }

    pub fn clear_history(&mut self) -> Vec<StoreEvent> {
        self.run(HistoryAction::ClearHistory)
    }

    /// Starts panning the image of `frame_id`.
    ///
    /// Returns `None` if the frame has no image to pan. Any drag already in
    /// progress is committed first.
    pub fn begin_image_pan(&mut self, frame_id: FrameId, frame_size: Vec2) -> Option<GestureId> {
        self.end_drag();
        let frame = self.document().frame(frame_id)?;
        let Some(image) = frame.image.as_ref() else {
            debug!("No image to pan on frame {}", frame_id);
            return None;
        };
        let kind = DragKind::ImagePan(PanDrag::new(image, frame_size));
        let snapshot = frame.snapshot(LayerKind::Image);
        Some(self.start_drag(frame_id, kind, snapshot))
    }

    /// Starts dragging the product image of `frame_id`
    pub fn begin_product_drag(&mut self, frame_id: FrameId) -> Option<GestureId> {
        self.end_drag();
        let frame = self.document().frame(frame_id)?;
        let Some(product) = frame.product_image.as_ref() else {
            debug!("No product image to drag on frame {}", frame_id);
            return None;
        };
        let kind = DragKind::ProductOffset(OffsetDrag::new(product));
        let snapshot = frame.snapshot(LayerKind::ProductImage);
        Some(self.start_drag(frame_id, kind, snapshot))
    }

    fn start_drag(&mut self, frame_id: FrameId, kind: DragKind, snapshot: LayerSnapshot) -> GestureId {
        let gesture = self.begin_gesture();
        self.drag = Some(DragSession {
            gesture,
            frame_id,
            kind,
            snapshot,
        });
        gesture
    }

    /// Moves the dragged layer to its drag-start value plus `total_delta_px`
    pub fn drag_to(&mut self, total_delta_px: Vec2) -> Vec<StoreEvent> {
        let Some(session) = self.drag.as_ref() else {
            return Vec::new();
        };
        let gesture = session.gesture;
        let command = session.command(total_delta_px);
        self.dispatch_in(gesture, command)
    }

    /// Ends the drag keeping the current values
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Aborts the drag and restores the layer as it was at drag start.
    ///
    /// The restore joins the drag's gesture, so an aborted drag leaves no
    /// undo step behind.
    pub fn cancel_drag(&mut self) -> Vec<StoreEvent> {
        let Some(session) = self.drag.take() else {
            return Vec::new();
        };
        self.dispatch_in(
            session.gesture,
            Command::RestoreLayer {
                frame_id: session.frame_id,
                snapshot: session.snapshot,
            },
        )
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Captures the present document for the persistence collaborator
    pub fn serialize(&self) -> ProjectSnapshot {
        ProjectSnapshot::new(self.document().clone())
    }

    /// Replaces the document with a snapshot's. History starts over.
    pub fn hydrate(&mut self, snapshot: ProjectSnapshot) -> Vec<StoreEvent> {
        self.drag = None;
        let mut document = snapshot.into_document();
        document.normalize();
        self.history.reset(document);
        vec![
            StoreEvent::Hydrated,
            StoreEvent::DocumentChanged,
            StoreEvent::HistoryChanged {
                can_undo: false,
                can_redo: false,
            },
        ]
    }

    fn run(&mut self, action: HistoryAction<Envelope>) -> Vec<StoreEvent> {
        let before = self.history.present().clone();
        if !self.reducer.dispatch(&mut self.history, &action) {
            return Vec::new();
        }
        let mut events = diff(&before, self.history.present());
        events.push(StoreEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
        events
    }
}
