//! The editor context ties one project's store to its selection state.
//!
//! UI events enter here. Mutations are dispatched to the [`Store`]; the
//! events it reports are fed to the [`EditModeMachine`] (which may open an
//! editor in response) and then broadcast on the [`EventBus`]. Render-time
//! queries (z-order, overflow, product band) are answered from the present
//! document.
//!
//! # Example
//!
//! ```rust
//! use frame_studio::command::Command;
//! use frame_studio::document::{Document, ProjectKind};
//! use frame_studio::layer::{ImageLayer, LayerKind};
//! use frame_studio::state::{EditMode, EditorContext};
//!
//! let mut editor = EditorContext::new(Document::new(ProjectKind::Carousel));
//! let frame_id = editor.document().frames[0].id;
//!
//! editor.select_frame(frame_id);
//! editor.dispatch(Command::SetImage { frame_id, layer: ImageLayer::new("photo.jpg") });
//!
//! // Adding a layer to the selected frame opens its editor
//! assert_eq!(editor.edit_mode(), EditMode::LayerEditing(LayerKind::Image));
//! ```

use egui::{Key, Modifiers, Vec2};

use super::edit_mode::{EditMode, EditModeMachine};
use super::persistence::{PersistenceResult, ProjectSnapshot};
use crate::command::Command;
use crate::config::StudioConfig;
use crate::document::Document;
use crate::error::StudioResult;
use crate::event::{EventBus, StoreEvent};
use crate::export::{ExportOptions, ExportRequest};
use crate::frame::TextField;
use crate::geometry::{self, OverflowProjection};
use crate::id::{FrameId, GestureId};
use crate::input::{ImageKeyCommand, image_key_command};
use crate::layer::LayerKind;
use crate::layer::patch::ImagePatch;
use crate::layout::{self, Band};
use crate::store::Store;
use crate::zorder;

/// The main context for editing one project
#[derive(Debug)]
pub struct EditorContext {
    store: Store,
    edit_mode: EditModeMachine,
    event_bus: EventBus,
    /// Gesture shared by the keyboard edits of one layer-editing session
    key_gesture: Option<(u64, GestureId)>,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl EditorContext {
    pub fn new(document: Document) -> Self {
        Self::from_config(document, &StudioConfig::default())
    }

    pub fn from_config(document: Document, config: &StudioConfig) -> Self {
        Self {
            store: Store::from_config(document, config),
            edit_mode: EditModeMachine::new(),
            event_bus: EventBus::new(),
            key_gesture: None,
        }
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn edit_state(&self) -> &EditModeMachine {
        &self.edit_mode
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode.mode()
    }

    /// External listeners subscribe here
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn dispatch(&mut self, command: Command) -> Vec<StoreEvent> {
        let events = self.store.dispatch(command);
        self.route(events)
    }

    pub fn undo(&mut self) -> Vec<StoreEvent> {
        let events = self.store.undo();
        self.route(events)
    }

    pub fn redo(&mut self) -> Vec<StoreEvent> {
        let events = self.store.redo();
        self.route(events)
    }

    pub fn clear_history(&mut self) -> Vec<StoreEvent> {
        let events = self.store.clear_history();
        self.route(events)
    }

    /// Selects a frame that exists in the document
    pub fn select_frame(&mut self, frame_id: FrameId) -> bool {
        if self.document().frame(frame_id).is_none() {
            return false;
        }
        if self.edit_mode.selected_frame() != Some(frame_id) {
            self.store.end_drag();
        }
        self.edit_mode.select_frame(frame_id);
        true
    }

    pub fn deselect_frame(&mut self) {
        self.store.end_drag();
        self.edit_mode.deselect_frame();
    }

    pub fn begin_text_edit(&mut self, field: TextField) -> bool {
        self.edit_mode.begin_text_edit(field)
    }

    /// Opens the editor for `kind` on the selected frame
    pub fn begin_layer_edit(&mut self, kind: LayerKind) -> bool {
        let Some(frame_id) = self.edit_mode.selected_frame() else {
            return false;
        };
        match self.store.document().frame(frame_id) {
            Some(frame) => self.edit_mode.begin_layer_edit(frame, kind),
            None => false,
        }
    }

    pub fn select_layer(&mut self, kind: Option<LayerKind>) {
        self.edit_mode.select_layer(kind);
    }

    /// Closes the open editor keeping the current values
    pub fn done_edit(&mut self) -> bool {
        self.store.end_drag();
        self.edit_mode.done()
    }

    /// Closes the open editor and restores the layer's values from when the
    /// editor opened.
    pub fn cancel_edit(&mut self) -> Vec<StoreEvent> {
        let mut events = self.store.cancel_drag();
        let gesture = self.current_key_gesture();
        let Some(command) = self.edit_mode.cancel() else {
            return self.route(events);
        };
        events.extend(match gesture {
            Some(gesture) => self.store.dispatch_in(gesture, command),
            None => self.store.dispatch(command),
        });
        self.route(events)
    }

    /// Marks a drag owned by another collaborator, such as dropping an
    /// asset onto a frame. Layers added meanwhile do not open editors.
    pub fn set_external_drag(&mut self, dragging: bool) {
        self.edit_mode.set_external_drag(dragging);
    }

    pub fn is_dragging(&self) -> bool {
        self.store.is_dragging() || self.edit_mode.external_drag()
    }

    /// Starts panning the selected frame's image
    pub fn begin_image_pan(&mut self, frame_size: Vec2) -> bool {
        let Some(frame_id) = self.edit_mode.selected_frame() else {
            return false;
        };
        self.store.begin_image_pan(frame_id, frame_size).is_some()
    }

    /// Starts dragging the selected frame's product image
    pub fn begin_product_drag(&mut self) -> bool {
        let Some(frame_id) = self.edit_mode.selected_frame() else {
            return false;
        };
        self.store.begin_product_drag(frame_id).is_some()
    }

    /// Pointer moved; `total_delta_px` is measured from where the drag began
    pub fn drag_to(&mut self, total_delta_px: Vec2) -> Vec<StoreEvent> {
        let events = self.store.drag_to(total_delta_px);
        self.route(events)
    }

    pub fn end_drag(&mut self) -> bool {
        self.store.end_drag().is_some()
    }

    /// Escape or lost pointer capture: put the layer back where the drag began
    pub fn cancel_drag(&mut self) -> Vec<StoreEvent> {
        let events = self.store.cancel_drag();
        self.route(events)
    }

    /// Handles a key press while the selected frame's image editor is open.
    ///
    /// All keyboard edits within one editing session form a single undo step.
    pub fn handle_image_key(&mut self, key: Key, modifiers: Modifiers) -> Vec<StoreEvent> {
        let Some(command) = image_key_command(key, modifiers) else {
            return Vec::new();
        };
        let Some(frame_id) = self.edit_mode.selected_frame() else {
            return Vec::new();
        };
        if !self.edit_mode.is_editing_image(frame_id) {
            return Vec::new();
        }
        let Some(image) = self
            .document()
            .frame(frame_id)
            .and_then(|frame| frame.image.clone())
        else {
            return Vec::new();
        };

        let patch = match command {
            ImageKeyCommand::Nudge { steps, fast } => {
                let pan = geometry::nudge(&image, steps, fast);
                ImagePatch::pan(pan.x, pan.y)
            }
            ImageKeyCommand::ZoomIn => ImagePatch::scale(geometry::zoom_in(image.scale)),
            ImageKeyCommand::ZoomOut => ImagePatch::scale(geometry::zoom_out(image.scale)),
            ImageKeyCommand::Reset => geometry::reset_view(),
            ImageKeyCommand::Cancel => return self.cancel_edit(),
            ImageKeyCommand::Done => {
                self.done_edit();
                return Vec::new();
            }
        };

        let Some(gesture) = self.key_gesture() else {
            return Vec::new();
        };
        let events = self
            .store
            .dispatch_in(gesture, Command::UpdateImage { frame_id, patch });
        self.route(events)
    }

    /// Resolved z-index of `kind` in a frame, including the transient lift
    /// of an image being edited or dragged.
    pub fn z_index(&self, frame_id: FrameId, kind: LayerKind) -> Option<u32> {
        let frame = self.document().frame(frame_id)?;
        let dragging_image = self
            .store
            .drag()
            .is_some_and(|drag| drag.frame_id == frame_id && drag.layer_kind() == LayerKind::Image);
        let image_editing = dragging_image || self.edit_mode.is_editing_image(frame_id);
        Some(zorder::z_index(kind, &frame.background_order, image_editing))
    }

    /// The neighbor image spilling into `frame_id`, if any
    pub fn overflow_into(&self, frame_id: FrameId) -> Option<OverflowProjection> {
        let index = self.document().index_of(frame_id)?;
        geometry::project_overflow_into(&self.document().frames, index)
    }

    /// Where the product image of `frame_id` goes for its current copy
    pub fn product_band(&self, frame_id: FrameId) -> Option<Band> {
        layout::frame_product_band(self.document().frame(frame_id)?)
    }

    pub fn serialize(&self) -> ProjectSnapshot {
        self.store.serialize()
    }

    pub fn hydrate(&mut self, snapshot: ProjectSnapshot) -> Vec<StoreEvent> {
        self.key_gesture = None;
        let events = self.store.hydrate(snapshot);
        self.route(events)
    }

    /// Restores a snapshot saved with [`ProjectSnapshot::to_json`]
    pub fn hydrate_json(&mut self, json: &str) -> PersistenceResult<Vec<StoreEvent>> {
        let snapshot = ProjectSnapshot::from_json(json)?;
        Ok(self.hydrate(snapshot))
    }

    pub fn export_request(
        &self,
        selection: &[FrameId],
        options: ExportOptions,
    ) -> StudioResult<ExportRequest> {
        ExportRequest::new(self.document(), selection, options)
    }

    fn current_key_gesture(&self) -> Option<GestureId> {
        let session = self.edit_mode.session()?;
        self.key_gesture
            .filter(|(owner, _)| *owner == session)
            .map(|(_, gesture)| gesture)
    }

    fn key_gesture(&mut self) -> Option<GestureId> {
        if let Some(gesture) = self.current_key_gesture() {
            return Some(gesture);
        }
        let session = self.edit_mode.session()?;
        let gesture = self.store.begin_gesture();
        self.key_gesture = Some((session, gesture));
        Some(gesture)
    }

    fn route(&mut self, events: Vec<StoreEvent>) -> Vec<StoreEvent> {
        for event in &events {
            self.edit_mode
                .handle_event(event, self.store.document(), self.store.is_dragging());
            self.event_bus.emit(event);
        }
        events
    }
}
