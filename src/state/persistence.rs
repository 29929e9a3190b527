use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::util::time;

/// Errors that can occur while decoding or encoding a snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid snapshot data: {0}")]
    InvalidSnapshot(String),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A serializable capture of one project's document.
///
/// Where the snapshot is stored is up to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub document: Document,
    /// Seconds since the UNIX epoch when the snapshot was taken
    pub timestamp: u64,
    /// Version of the crate that wrote the snapshot
    pub version: String,
}

impl ProjectSnapshot {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            timestamp: time::timestamp_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot and checks it holds a usable document.
    ///
    /// Layer properties outside their ranges are clamped rather than rejected.
    pub fn from_json(json: &str) -> PersistenceResult<Self> {
        let mut snapshot: Self = serde_json::from_str(json)?;
        if snapshot.document.frames.is_empty() {
            return Err(PersistenceError::InvalidSnapshot(
                "document has no frames".to_string(),
            ));
        }
        if snapshot.document.kind.is_single_frame() && snapshot.document.frames.len() != 1 {
            return Err(PersistenceError::InvalidSnapshot(format!(
                "a {} holds exactly one frame, found {}",
                snapshot.document.kind,
                snapshot.document.frames.len()
            )));
        }
        if let Some(frame) = snapshot
            .document
            .frames
            .iter()
            .find(|frame| frame.variants.is_empty())
        {
            return Err(PersistenceError::InvalidSnapshot(format!(
                "frame {} has no content variants",
                frame.id
            )));
        }
        if let Some(index) = snapshot.document.misfit_stretch() {
            return Err(PersistenceError::InvalidSnapshot(format!(
                "background stretch of frame {} runs outside the document",
                index + 1
            )));
        }
        snapshot.document.normalize();
        if snapshot.version != env!("CARGO_PKG_VERSION") {
            warn!(
                "Snapshot version {} differs from current version {}",
                snapshot.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        Ok(snapshot)
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
