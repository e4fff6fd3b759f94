//! Minimal [`inventory_core::ItemCatalog`] backed by an in-memory map.
use std::collections::HashMap;

use inventory_core::{ItemCatalog, ItemId};
use serde::{Deserialize, Serialize};

/// Catalog data for one item id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub slot_max: Option<u16>,
}

/// ItemCatalog implementation with static item entries
#[derive(Debug, Default)]
pub struct ItemCatalogImpl {
    entries: HashMap<ItemId, CatalogEntry>,
}

impl ItemCatalogImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous entry with the same id
    pub fn add_entry(&mut self, entry: CatalogEntry) {
        self.entries.insert(ItemId(entry.id), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for ItemCatalogImpl {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.add_entry(entry);
        }
        catalog
    }
}

impl ItemCatalog for ItemCatalogImpl {
    fn name(&self, item: ItemId) -> Option<String> {
        self.entries.get(&item).map(|entry| entry.name.clone())
    }

    fn slot_max(&self, item: ItemId) -> Option<u16> {
        self.entries.get(&item).and_then(|entry| entry.slot_max)
    }
}
