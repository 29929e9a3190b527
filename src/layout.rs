//! Estimates how much vertical room the text needs and hands the rest of
//! the frame to the product image.
//!
//! There is no text shaping here: line counts come from fixed
//! characters-per-line estimates, so the band follows every keystroke
//! without measuring anything.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::layer::ProductPosition;

/// Reserved for the progress indicator, as a fraction of frame height
pub const TOP_MARGIN: f32 = 0.12;
pub const BOTTOM_MARGIN: f32 = 0.08;

pub const HEADLINE_CHARS_PER_LINE: usize = 17;
pub const BODY_CHARS_PER_LINE: usize = 27;

pub const RESERVE_BASE: f32 = 0.18;
pub const RESERVE_PER_LINE: f32 = 0.06;
pub const RESERVE_MIN: f32 = 0.42;
pub const RESERVE_MAX: f32 = 0.65;

/// Estimated line count of `text`, never less than one.
pub fn estimate_lines(text: &str, chars_per_line: usize) -> usize {
    let chars = text.chars().count();
    chars.div_ceil(chars_per_line.max(1)).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextEstimate {
    pub headline_lines: usize,
    pub body_lines: usize,
    /// Fraction of frame height reserved for the text block
    pub reserve: f32,
}

pub fn estimate_text(headline: &str, body: &str) -> TextEstimate {
    let headline_lines = estimate_lines(headline, HEADLINE_CHARS_PER_LINE);
    let body_lines = estimate_lines(body, BODY_CHARS_PER_LINE);
    let lines = (headline_lines + body_lines) as f32;
    let reserve = (RESERVE_BASE + RESERVE_PER_LINE * lines).clamp(RESERVE_MIN, RESERVE_MAX);
    TextEstimate {
        headline_lines,
        body_lines,
        reserve,
    }
}

/// A vertical slice of the frame, as fractions of its height from the top
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub top: f32,
    pub bottom: f32,
}

impl Band {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// The band in pixels for a frame `frame_height` tall
    pub fn to_px(&self, frame_height: f32) -> (f32, f32) {
        (self.top * frame_height, self.bottom * frame_height)
    }
}

/// Band left for the product image once the text block has its reserve.
///
/// The text block sits against the margin opposite the product image.
pub fn product_band(position: ProductPosition, reserve: f32) -> Band {
    match position {
        ProductPosition::Top => Band {
            top: TOP_MARGIN,
            bottom: 1.0 - BOTTOM_MARGIN - reserve,
        },
        ProductPosition::Bottom => Band {
            top: TOP_MARGIN + reserve,
            bottom: 1.0 - BOTTOM_MARGIN,
        },
    }
}

/// Product band for a frame's current copy, if the frame has a product image.
pub fn frame_product_band(frame: &Frame) -> Option<Band> {
    let product = frame.product_image.as_ref()?;
    let (headline, body) = frame
        .variant()
        .map_or(("", ""), |variant| (variant.headline.as_str(), variant.body.as_str()));
    let estimate = estimate_text(headline, body);
    Some(product_band(product.position, estimate.reserve))
}
