use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frame::Frame;
use crate::id::FrameId;

/// The kinds of artifact the studio composes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectKind {
    /// Multi-slide social carousel
    #[default]
    Carousel,
    /// Email made of stacked sections
    Eblast,
    /// A single video thumbnail
    VideoCover,
    /// A single stand-alone image
    SingleImage,
}

impl ProjectKind {
    /// Whether the project always holds exactly one frame
    pub fn is_single_frame(self) -> bool {
        matches!(self, ProjectKind::VideoCover | ProjectKind::SingleImage)
    }

}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProjectKind::Carousel => "carousel",
            ProjectKind::Eblast => "eblast",
            ProjectKind::VideoCover => "video cover",
            ProjectKind::SingleImage => "single image",
        };
        f.write_str(name)
    }
}

/// The full editable state of one project: an ordered run of frames.
///
/// This is the value the undo history snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub kind: ProjectKind,
    pub frames: Vec<Frame>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(ProjectKind::default())
    }
}

impl Document {
    /// A document holding one empty frame
    pub fn new(kind: ProjectKind) -> Self {
        Self {
            kind,
            frames: vec![Frame::new()],
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_ids(&self) -> Vec<FrameId> {
        self.frames.iter().map(|frame| frame.id).collect()
    }

    pub fn index_of(&self, id: FrameId) -> Option<usize> {
        self.frames.iter().position(|frame| frame.id == id)
    }

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.iter().find(|frame| frame.id == id)
    }

    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.iter_mut().find(|frame| frame.id == id)
    }

    /// Index of the first frame whose fill or pattern stretch runs outside
    /// the frame list
    pub fn misfit_stretch(&self) -> Option<usize> {
        let count = self.frames.len();
        self.frames.iter().enumerate().position(|(index, frame)| {
            let fill = frame.background.as_ref().and_then(|fill| fill.stretch);
            let pattern = frame.pattern.as_ref().and_then(|pattern| pattern.stretch);
            [fill, pattern]
                .into_iter()
                .flatten()
                .any(|stretch| !stretch.fits(index, count))
        })
    }

    /// Clamps every frame's layers and drops stretches that no longer fit
    pub fn normalize(&mut self) {
        if self.frames.is_empty() {
            self.frames.push(Frame::new());
        }
        let count = self.frames.len();
        for (index, frame) in self.frames.iter_mut().enumerate() {
            frame.normalize();
            if let Some(fill) = frame.background.as_mut() {
                if fill.stretch.is_some_and(|stretch| !stretch.fits(index, count)) {
                    fill.stretch = None;
                }
            }
            if let Some(pattern) = frame.pattern.as_mut() {
                if pattern.stretch.is_some_and(|stretch| !stretch.fits(index, count)) {
                    pattern.stretch = None;
                }
            }
        }
    }
}
