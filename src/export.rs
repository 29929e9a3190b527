//! Request types handed to the export collaborator.
//!
//! The core never rasterizes. It validates which frames to export and
//! passes the enumerated options through unchanged.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{StudioError, StudioResult};
use crate::id::FrameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpg,
    Webp,
    Svg,
    Pdf,
    Pptx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportResolution {
    #[default]
    #[serde(rename = "1x")]
    X1,
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
}

impl ExportResolution {
    pub fn scale(self) -> u32 {
        match self {
            ExportResolution::X1 => 1,
            ExportResolution::X2 => 2,
            ExportResolution::X3 => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "color", rename_all = "kebab-case")]
pub enum ExportBackground {
    #[default]
    Original,
    Transparent,
    CustomColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub resolution: ExportResolution,
    pub background: ExportBackground,
}

/// A validated export job: existing frames only, in project order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub frame_ids: Vec<FrameId>,
    pub options: ExportOptions,
}

impl ExportRequest {
    /// Builds a request from a UI selection.
    ///
    /// Unknown ids are dropped and the rest follow the document's frame
    /// order. Fails if nothing remains.
    pub fn new(
        document: &Document,
        selection: &[FrameId],
        options: ExportOptions,
    ) -> StudioResult<Self> {
        let frame_ids: Vec<FrameId> = document
            .frames
            .iter()
            .map(|frame| frame.id)
            .filter(|id| selection.contains(id))
            .collect();
        if frame_ids.is_empty() {
            return Err(StudioError::EmptyExportSelection);
        }
        Ok(Self { frame_ids, options })
    }

    /// Every frame of the document
    pub fn all(document: &Document, options: ExportOptions) -> StudioResult<Self> {
        Self::new(document, &document.frame_ids(), options)
    }
}

/// The collaborator that turns frames into files
pub trait Exporter {
    type Output;
    type Error;

    fn export(&mut self, document: &Document, request: &ExportRequest) -> Result<Self::Output, Self::Error>;
}
