mod context;
mod edit_mode;
mod persistence;

pub use context::EditorContext;
pub use edit_mode::{EditMode, EditModeMachine};
pub use persistence::{PersistenceError, PersistenceResult, ProjectSnapshot};
