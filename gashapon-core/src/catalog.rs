//! Item catalog.
//!
//! The catalog is the fixed set of drawable items for a session. It is
//! loaded once (from the bundled JSON or a file on disk) and never mutated;
//! every other part of the engine holds `Arc<Item>` references into it.

use crate::grid::SlotGrid;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// The catalog shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../data/elements.json");

/// Errors from loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item ids must be positive (item \"{title}\" has id 0)")]
    ZeroId { title: String },

    #[error("Duplicate item id {0}")]
    DuplicateId(u32),
}

/// A drawable item.
///
/// The id doubles as the address of the grid slot the item fills once drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Outbound link, opened by the host.
    pub url: String,
    /// Opaque asset locator, resolved by the renderer.
    pub image: String,
}

/// An ordered, validated collection of items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
}

impl Catalog {
    /// Build a catalog from items, keeping their order.
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CatalogError::ZeroId {
                    title: item.title.clone(),
                });
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog embedded in the crate (16 items, ids 1-16).
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Item>> {
        self.items.iter()
    }

    /// Ids that have no cell in the given grid.
    ///
    /// These items can still be drawn; they just never show up in the grid.
    pub fn ids_outside(&self, grid: &SlotGrid) -> Vec<u32> {
        self.items
            .iter()
            .map(|item| item.id)
            .filter(|id| !grid.contains(*id))
            .collect()
    }

    /// A fresh copy of every item, in catalog order.
    pub(crate) fn to_pool(&self) -> Vec<Arc<Item>> {
        self.items.clone()
    }
}
