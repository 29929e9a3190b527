#![warn(clippy::all, rust_2018_idioms)]

pub mod assets;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod export;
pub mod frame;
pub mod geometry;
pub mod id;
pub mod input;
pub mod layer;
pub mod layout;
pub mod state;
pub mod store;
pub mod util;
pub mod workspace;
pub mod zorder;

pub use command::{Command, History, HistoryAction, UndoableReducer};
pub use config::StudioConfig;
pub use document::{Document, ProjectKind};
pub use error::{ActionOutcome, StudioError, StudioResult};
pub use event::{EventBus, StoreEvent};
pub use frame::Frame;
pub use layer::{LayerKind, LayerSnapshot};
pub use state::{EditMode, EditModeMachine, EditorContext, ProjectSnapshot};
pub use store::Store;
pub use workspace::Workspace;
pub use zorder::BackgroundOrder;
