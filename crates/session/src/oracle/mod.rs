//! Catalog implementations backing [`inventory_core::ItemCatalog`].
mod catalog;

pub use catalog::{CatalogEntry, ItemCatalogImpl};
