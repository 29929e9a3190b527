//! Contract with the icon and pattern catalogs.
//!
//! Catalog records are immutable and owned by the catalog. Layers keep only
//! the record id; nothing here validates the referenced content.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetSource {
    /// A URL or path to the asset file
    Path(String),
    /// Inline SVG markup
    Svg(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub source: AssetSource,
    pub default_scale: f32,
    pub default_opacity: f32,
    /// Edge length in pixels of one pattern tile
    pub tile_size: f32,
}

/// Looks up catalog records by id
pub trait AssetCatalog {
    fn get(&self, id: &str) -> Option<&AssetRecord>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// A catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: HashMap<String, AssetRecord>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any record with the same id
    pub fn insert(&mut self, record: AssetRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AssetRecord> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = AssetRecord>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl AssetCatalog for InMemoryCatalog {
    fn get(&self, id: &str) -> Option<&AssetRecord> {
        self.records.get(id)
    }
}
