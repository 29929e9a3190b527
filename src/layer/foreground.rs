use serde::{Deserialize, Serialize};

use super::{
    ICON_SCALE_MAX, ICON_SCALE_MIN, Layer, clamp_border_radius, clamp_or,
    clamp_product_scale,
};
use crate::assets::AssetRecord;

/// Which side of the text block the product image sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductPosition {
    #[default]
    Top,
    Bottom,
}

/// Cut-out product shot placed in the band next to the text.
///
/// The pixel offset is accumulated from drags and is deliberately unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductImageLayer {
    pub src: String,
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub border_radius: f32,
    pub position: ProductPosition,
}

impl Default for ProductImageLayer {
    fn default() -> Self {
        Self {
            src: String::new(),
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            border_radius: 0.0,
            position: ProductPosition::Top,
        }
    }
}

impl ProductImageLayer {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }
}

impl Layer for ProductImageLayer {
    fn clamped(mut self) -> Self {
        self.scale = clamp_product_scale(self.scale);
        self.border_radius = clamp_border_radius(self.border_radius);
        if !self.offset_x.is_finite() {
            self.offset_x = 0.0;
        }
        if !self.offset_y.is_finite() {
            self.offset_y = 0.0;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconLayer {
    /// Catalog id of the icon's path
    pub path: String,
    pub scale: f32,
    pub color: String,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub visible: bool,
}

impl Default for IconLayer {
    fn default() -> Self {
        Self {
            path: String::new(),
            scale: 1.0,
            color: "#000000".to_string(),
            border_color: None,
            background_color: None,
            visible: true,
        }
    }
}

impl IconLayer {
    pub fn from_asset(record: &AssetRecord) -> Self {
        Self {
            path: record.id.clone(),
            scale: record.default_scale,
            ..Self::default()
        }
        .clamped()
    }
}

impl Layer for IconLayer {
    fn clamped(mut self) -> Self {
        self.scale = clamp_or(self.scale, ICON_SCALE_MIN, ICON_SCALE_MAX, 1.0);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressIndicatorType {
    #[default]
    Dots,
    NumberedDots,
    Dashes,
    Arrows,
    Bar,
    Buildings,
    MapPins,
    Forecast,
    BarChart,
}

impl ProgressIndicatorType {
    pub const ALL: [ProgressIndicatorType; 9] = [
        ProgressIndicatorType::Dots,
        ProgressIndicatorType::NumberedDots,
        ProgressIndicatorType::Dashes,
        ProgressIndicatorType::Arrows,
        ProgressIndicatorType::Bar,
        ProgressIndicatorType::Buildings,
        ProgressIndicatorType::MapPins,
        ProgressIndicatorType::Forecast,
        ProgressIndicatorType::BarChart,
    ];
}

/// Shows the reader's position within the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressIndicatorLayer {
    pub indicator: ProgressIndicatorType,
    pub color: String,
    pub visible: bool,
}

impl Default for ProgressIndicatorLayer {
    fn default() -> Self {
        Self {
            indicator: ProgressIndicatorType::Dots,
            color: "#000000".to_string(),
            visible: true,
        }
    }
}

impl Layer for ProgressIndicatorLayer {
    fn clamped(self) -> Self {
        self
    }
}
