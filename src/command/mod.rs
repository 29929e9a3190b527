mod commands;
mod history;
mod reducer;

pub use commands::Command;
pub use history::{DEFAULT_HISTORY_LIMIT, History, HistoryAction, UndoableReducer};
pub use reducer::{apply, reduce};
