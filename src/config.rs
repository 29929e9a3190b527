use serde::{Deserialize, Serialize};

use crate::command::DEFAULT_HISTORY_LIMIT;
use crate::document::ProjectKind;

/// Studio-wide settings, loadable from JSON.
///
/// Missing fields take their default values, so older settings files keep
/// loading as fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioConfig {
    /// Maximum undo levels kept per project
    pub history_limit: usize,
    /// Kind used for projects created without an explicit kind
    pub default_kind: ProjectKind,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_kind: ProjectKind::Carousel,
        }
    }
}

impl StudioConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
