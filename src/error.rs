use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ProjectId;

/// Recoverable failures surfaced to the user.
///
/// Internal invariant violations are not errors: the store ignores them and
/// leaves the state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error("A project with this name already exists")]
    NameCollision,

    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("No open project with id {0}")]
    UnknownProject(ProjectId),

    #[error("No frames selected for export")]
    EmptyExportSelection,
}

/// Result type for workspace operations
pub type StudioResult<T> = Result<T, StudioError>;

/// The `{ success, error }` shape handed to the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<StudioResult<T>> for ActionOutcome {
    fn from(result: StudioResult<T>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                error: None,
            },
            Err(err) => Self {
                success: false,
                error: Some(err.to_string()),
            },
        }
    }
}
