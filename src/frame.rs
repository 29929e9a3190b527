use serde::{Deserialize, Serialize};

use crate::id::{FrameId, VariantId};
use crate::layer::{
    FillLayer, IconLayer, ImageLayer, Layer, LayerKind, LayerSnapshot, PatternLayer, ProductImageLayer,
    ProgressIndicatorLayer,
};
use crate::zorder::BackgroundOrder;

/// The two editable text fields of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    Headline,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-field text formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_size: Option<f32>,
    pub color: Option<String>,
    pub align: TextAlign,
}

/// One alternative wording of a frame's copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVariant {
    pub id: VariantId,
    pub headline: String,
    pub body: String,
    #[serde(default)]
    pub headline_format: TextFormat,
    #[serde(default)]
    pub body_format: TextFormat,
}

impl Default for ContentVariant {
    fn default() -> Self {
        Self::empty()
    }
}

impl ContentVariant {
    pub fn empty() -> Self {
        Self {
            id: VariantId::new(),
            headline: String::new(),
            body: String::new(),
            headline_format: TextFormat::default(),
            body_format: TextFormat::default(),
        }
    }

    pub fn new(headline: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            body: body.into(),
            ..Self::empty()
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Headline => &self.headline,
            TextField::Body => &self.body,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Headline => &mut self.headline,
            TextField::Body => &mut self.body,
        }
    }

    pub fn format_mut(&mut self, field: TextField) -> &mut TextFormat {
        match field {
            TextField::Headline => &mut self.headline_format,
            TextField::Body => &mut self.body_format,
        }
    }
}

/// One slide, section or cover of a project.
///
/// Layers live in fixed slots, one optional slot per kind. The fill slot
/// overrides the project's theme background when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub id: FrameId,
    pub variants: Vec<ContentVariant>,
    pub current_variant: usize,
    #[serde(default)]
    pub current_layout: usize,
    #[serde(default)]
    pub layout_variant: usize,
    #[serde(default)]
    pub background: Option<FillLayer>,
    #[serde(default)]
    pub background_order: BackgroundOrder,
    #[serde(default)]
    pub pattern: Option<PatternLayer>,
    #[serde(default)]
    pub image: Option<ImageLayer>,
    #[serde(default)]
    pub product_image: Option<ProductImageLayer>,
    #[serde(default)]
    pub icon: Option<IconLayer>,
    #[serde(default)]
    pub progress: Option<ProgressIndicatorLayer>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// A frame with a single empty variant and no layers
    pub fn new() -> Self {
        Self::with_variants(1)
    }

    /// A frame holding `count` empty variants (at least one)
    pub fn with_variants(count: usize) -> Self {
        Self {
            id: FrameId::new(),
            variants: (0..count.max(1)).map(|_| ContentVariant::empty()).collect(),
            current_variant: 0,
            current_layout: 0,
            layout_variant: 0,
            background: None,
            background_order: BackgroundOrder::default(),
            pattern: None,
            image: None,
            product_image: None,
            icon: None,
            progress: None,
        }
    }

    /// A deep copy with fresh frame and variant ids
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = FrameId::new();
        for variant in &mut copy.variants {
            variant.id = VariantId::new();
        }
        copy
    }

    /// Pulls every layer back into range and repairs the variant index
    pub fn normalize(&mut self) {
        if self.variants.is_empty() {
            self.variants.push(ContentVariant::empty());
        }
        self.current_variant = self.current_variant.min(self.variants.len() - 1);
        self.background = self.background.take().map(Layer::clamped);
        self.pattern = self.pattern.take().map(Layer::clamped);
        self.image = self.image.take().map(Layer::clamped);
        self.product_image = self.product_image.take().map(Layer::clamped);
        self.icon = self.icon.take().map(Layer::clamped);
        self.progress = self.progress.take().map(Layer::clamped);
    }

    /// The variant currently shown. Falls back to the first variant if the
    /// index is stale.
    pub fn variant(&self) -> Option<&ContentVariant> {
        self.variants
            .get(self.current_variant)
            .or_else(|| self.variants.first())
    }

    pub fn variant_mut(&mut self) -> Option<&mut ContentVariant> {
        let index = if self.current_variant < self.variants.len() {
            self.current_variant
        } else {
            0
        };
        self.variants.get_mut(index)
    }

    pub fn has_layer(&self, kind: LayerKind) -> bool {
        match kind {
            LayerKind::Fill => self.background.is_some(),
            LayerKind::Pattern => self.pattern.is_some(),
            LayerKind::Image => self.image.is_some(),
            LayerKind::ProductImage => self.product_image.is_some(),
            LayerKind::Icon => self.icon.is_some(),
            LayerKind::Progress => self.progress.is_some(),
        }
    }

    /// Captures the current value of one slot
    pub fn snapshot(&self, kind: LayerKind) -> LayerSnapshot {
        match kind {
            LayerKind::Fill => LayerSnapshot::Fill(self.background.clone()),
            LayerKind::Pattern => LayerSnapshot::Pattern(self.pattern.clone()),
            LayerKind::Image => LayerSnapshot::Image(self.image.clone()),
            LayerKind::ProductImage => LayerSnapshot::ProductImage(self.product_image.clone()),
            LayerKind::Icon => LayerSnapshot::Icon(self.icon.clone()),
            LayerKind::Progress => LayerSnapshot::Progress(self.progress.clone()),
        }
    }

    /// Writes a captured slot value back
    pub fn restore(&mut self, snapshot: LayerSnapshot) {
        match snapshot {
            LayerSnapshot::Fill(layer) => self.background = layer,
            LayerSnapshot::Pattern(layer) => self.pattern = layer,
            LayerSnapshot::Image(layer) => self.image = layer,
            LayerSnapshot::ProductImage(layer) => self.product_image = layer,
            LayerSnapshot::Icon(layer) => self.icon = layer,
            LayerSnapshot::Progress(layer) => self.progress = layer,
        }
    }

    pub fn remove_layer(&mut self, kind: LayerKind) {
        match kind {
            LayerKind::Fill => self.background = None,
            LayerKind::Pattern => self.pattern = None,
            LayerKind::Image => self.image = None,
            LayerKind::ProductImage => self.product_image = None,
            LayerKind::Icon => self.icon = None,
            LayerKind::Progress => self.progress = None,
        }
    }
}
