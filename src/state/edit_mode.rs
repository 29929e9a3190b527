//! Selection and edit-mode state machine for the selected frame.
//!
//! At most one editing surface is open at a time. Opening a layer editor
//! closes any other layer editor and any text editor; opening a text editor
//! closes the layer editor and clears the selected-layer outline.
//!
//! # State Transitions
//!
//! ```text
//!                  ┌──────────────────────┐
//!          ┌───────►  TextEditing(field)  ├───────┐
//!          │       └──────────▲───────────┘       │
//!          │                  │ begin_text_edit   │ done / cancel
//! ┌────────┴─┐     ┌──────────┴───────────┐     ┌─▼────────┐
//! │          ├─────►  LayerEditing(kind)  ├─────►          │
//! │   Idle   │     │ (snapshot captured)  │     │   Idle   │
//! │          ◄─────┤                      │     │          │
//! └──────────┘     └──────────────────────┘     └──────────┘
//!      ▲    LayerAdded(kind) auto-opens LayerEditing(kind)
//!      └─── unless a drag is in progress
//! ```
//!
//! Deselecting the frame always returns to `Idle` and drops every cancel
//! snapshot.
use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::document::Document;
use crate::event::StoreEvent;
use crate::frame::{Frame, TextField};
use crate::id::FrameId;
use crate::layer::{LayerKind, LayerSnapshot};

/// The editing surface open on the selected frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// No editing surface open
    #[default]
    Idle,
    /// Editing one of the text fields in place
    TextEditing(TextField),
    /// A layer's editing panel is open
    LayerEditing(LayerKind),
}

impl EditMode {
    /// Returns true if no editing surface is open
    pub fn is_idle(&self) -> bool {
        matches!(self, EditMode::Idle)
    }

    /// Returns the text field being edited, if any
    pub fn editing_text(&self) -> Option<TextField> {
        match self {
            EditMode::TextEditing(field) => Some(*field),
            _ => None,
        }
    }

    /// Returns the layer being edited, if any
    pub fn editing_layer(&self) -> Option<LayerKind> {
        match self {
            EditMode::LayerEditing(kind) => Some(*kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditModeMachine {
    frame: Option<FrameId>,
    mode: EditMode,
    /// The layer drawn with a selection outline
    selected_layer: Option<LayerKind>,
    /// Layer values captured on entering each layer editor
    snapshots: HashMap<LayerKind, LayerSnapshot>,
    /// Bumped on every entry into a layer editor
    session: u64,
    /// A drag owned by another collaborator (asset drop, reordering)
    external_drag: bool,
}

impl EditModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_frame(&self) -> Option<FrameId> {
        self.frame
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn selected_layer(&self) -> Option<LayerKind> {
        self.selected_layer
    }

    /// The cancel snapshot held for `kind`, if its editor was opened
    pub fn snapshot(&self, kind: LayerKind) -> Option<&LayerSnapshot> {
        self.snapshots.get(&kind)
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Identifies the current layer-editing session, if one is open
    pub fn session(&self) -> Option<u64> {
        self.mode.editing_layer().map(|_| self.session)
    }

    /// Returns true if the image of `frame_id` has its editor open
    pub fn is_editing_image(&self, frame_id: FrameId) -> bool {
        self.frame == Some(frame_id) && self.mode == EditMode::LayerEditing(LayerKind::Image)
    }

    pub fn external_drag(&self) -> bool {
        self.external_drag
    }

    pub fn set_external_drag(&mut self, dragging: bool) {
        self.external_drag = dragging;
    }

    /// Selects a frame. Selecting a different frame deselects the current one first.
    pub fn select_frame(&mut self, frame_id: FrameId) {
        if self.frame == Some(frame_id) {
            return;
        }
        self.deselect_frame();
        self.frame = Some(frame_id);
    }

    /// Returns to `Idle` with nothing selected and no cancel snapshots
    pub fn deselect_frame(&mut self) {
        self.frame = None;
        self.mode = EditMode::Idle;
        self.selected_layer = None;
        self.snapshots.clear();
    }

    /// Opens the text editor for `field` on the selected frame.
    ///
    /// Closes any layer editor and clears the layer outline.
    pub fn begin_text_edit(&mut self, field: TextField) -> bool {
        if self.frame.is_none() {
            return false;
        }
        self.mode = EditMode::TextEditing(field);
        self.selected_layer = None;
        true
    }

    /// Opens the editor for `kind` on `frame`, which becomes the selected frame.
    ///
    /// Closes any other editor and captures the layer's current value for cancel.
    pub fn begin_layer_edit(&mut self, frame: &Frame, kind: LayerKind) -> bool {
        self.select_frame(frame.id);
        self.mode = EditMode::LayerEditing(kind);
        self.selected_layer = Some(kind);
        self.snapshots.insert(kind, frame.snapshot(kind));
        self.session += 1;
        true
    }

    /// Draws the selection outline around `kind` without opening its editor
    pub fn select_layer(&mut self, kind: Option<LayerKind>) {
        self.selected_layer = kind;
    }

    /// Closes the open editor keeping the current values
    pub fn done(&mut self) -> bool {
        self.selected_layer = None;
        match self.mode {
            EditMode::Idle => false,
            EditMode::TextEditing(_) => {
                self.mode = EditMode::Idle;
                true
            }
            EditMode::LayerEditing(kind) => {
                self.snapshots.remove(&kind);
                self.mode = EditMode::Idle;
                true
            }
        }
    }

    /// Closes the open editor and returns the command that restores the
    /// layer to its value from when the editor opened.
    pub fn cancel(&mut self) -> Option<Command> {
        let mode = std::mem::take(&mut self.mode);
        self.selected_layer = None;
        let EditMode::LayerEditing(kind) = mode else {
            return None;
        };
        let frame_id = self.frame?;
        let snapshot = self.snapshots.remove(&kind)?;
        Some(Command::RestoreLayer { frame_id, snapshot })
    }

    /// Reacts to a store event.
    ///
    /// Returns true if the event auto-opened a layer editor.
    pub fn handle_event(
        &mut self,
        event: &StoreEvent,
        document: &Document,
        drag_in_progress: bool,
    ) -> bool {
        match event {
            StoreEvent::LayerAdded { frame_id, kind } => {
                if self.frame != Some(*frame_id) {
                    return false;
                }
                // Already open: keep the snapshot taken when it opened
                if self.mode == EditMode::LayerEditing(*kind) {
                    return false;
                }
                if drag_in_progress || self.external_drag {
                    debug!("Drag in progress, not opening the {} editor", kind);
                    return false;
                }
                match document.frame(*frame_id) {
                    Some(frame) => self.begin_layer_edit(frame, *kind),
                    None => false,
                }
            }
            StoreEvent::LayerRemoved { frame_id, kind } => {
                if self.frame == Some(*frame_id) {
                    if self.mode == EditMode::LayerEditing(*kind) {
                        self.mode = EditMode::Idle;
                    }
                    if self.selected_layer == Some(*kind) {
                        self.selected_layer = None;
                    }
                    self.snapshots.remove(kind);
                }
                false
            }
            StoreEvent::FrameRemoved { frame_id } => {
                if self.frame == Some(*frame_id) {
                    self.deselect_frame();
                }
                false
            }
            StoreEvent::Hydrated => {
                self.deselect_frame();
                false
            }
            StoreEvent::FrameAdded { .. }
            | StoreEvent::FramesReordered
            | StoreEvent::DocumentChanged
            | StoreEvent::HistoryChanged { .. } => false,
        }
    }
}
