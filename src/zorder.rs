//! Stacking order of a frame's layers.
//!
//! Only the three background layers are reorderable; their order is an
//! explicit permutation stored per frame. Foreground content sits in fixed
//! bands above every background.

use serde::{Deserialize, Serialize};

use crate::layer::{BackgroundKind, LayerKind};

/// Product image band, above all backgrounds
pub const PRODUCT_IMAGE_Z: u32 = 10;
pub const TEXT_Z: u32 = 20;
pub const ICON_Z: u32 = 30;
pub const PROGRESS_Z: u32 = 40;
/// Remove buttons and other per-frame controls
pub const CONTROLS_Z: u32 = 50;
/// An image being panned or edited is lifted above everything else in its frame
pub const EDITING_IMAGE_Z: u32 = 100;

/// Moves `active` to the index `over` occupied before the move.
///
/// Returns `None` when either element is missing or both are the same
/// element, which callers treat as a no-op.
pub fn move_element<T: PartialEq + Clone>(order: &[T], active: &T, over: &T) -> Option<Vec<T>> {
    let from = order.iter().position(|item| item == active)?;
    let to = order.iter().position(|item| item == over)?;
    if from == to {
        return None;
    }
    let mut next = order.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Some(next)
}

/// A permutation of the three background kinds, bottom first.
///
/// The type can only hold a valid permutation: deserializing anything else
/// fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BackgroundKind>", into = "Vec<BackgroundKind>")]
pub struct BackgroundOrder([BackgroundKind; 3]);

impl Default for BackgroundOrder {
    fn default() -> Self {
        Self(BackgroundKind::ALL)
    }
}

impl BackgroundOrder {
    /// Builds an order from three kinds, if they form a permutation.
    pub fn new(kinds: [BackgroundKind; 3]) -> Option<Self> {
        let distinct = BackgroundKind::ALL
            .iter()
            .all(|kind| kinds.iter().filter(|k| *k == kind).count() == 1);
        distinct.then_some(Self(kinds))
    }

    pub fn kinds(&self) -> [BackgroundKind; 3] {
        self.0
    }

    pub fn position(&self, kind: BackgroundKind) -> usize {
        // Every kind is present exactly once
        self.0.iter().position(|k| *k == kind).unwrap_or(0)
    }

    /// Stored z-index of a background kind, `1..=3`
    pub fn z_index(&self, kind: BackgroundKind) -> u32 {
        self.position(kind) as u32 + 1
    }

    /// The order after dragging `active` onto `over`, or `None` for a no-op.
    pub fn reorder(&self, active: BackgroundKind, over: BackgroundKind) -> Option<Self> {
        let next = move_element(&self.0, &active, &over)?;
        let kinds: [BackgroundKind; 3] = next.try_into().ok()?;
        Self::new(kinds)
    }
}

impl TryFrom<Vec<BackgroundKind>> for BackgroundOrder {
    type Error = String;

    fn try_from(kinds: Vec<BackgroundKind>) -> Result<Self, Self::Error> {
        let array: [BackgroundKind; 3] = kinds
            .try_into()
            .map_err(|v: Vec<BackgroundKind>| format!("expected 3 background kinds, got {}", v.len()))?;
        Self::new(array).ok_or_else(|| format!("{array:?} is not a permutation of fill, pattern, image"))
    }
}

impl From<BackgroundOrder> for Vec<BackgroundKind> {
    fn from(order: BackgroundOrder) -> Self {
        order.0.to_vec()
    }
}

/// Resolved z-index for any layer kind in a frame.
///
/// `image_editing` marks an active edit or drag session on the frame's
/// image; it is a transient override and never stored.
pub fn z_index(kind: LayerKind, order: &BackgroundOrder, image_editing: bool) -> u32 {
    match kind {
        LayerKind::Image if image_editing => EDITING_IMAGE_Z,
        LayerKind::Fill | LayerKind::Pattern | LayerKind::Image => kind
            .background()
            .map(|background| order.z_index(background))
            .unwrap_or(1),
        LayerKind::ProductImage => PRODUCT_IMAGE_Z,
        LayerKind::Icon => ICON_Z,
        LayerKind::Progress => PROGRESS_Z,
    }
}
