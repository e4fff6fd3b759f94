//! Traits describing read-only item data.
//!
//! The inventory never consults a global catalog. Callers that need derived
//! data (stack maximums, display names) query an [`ItemCatalog`] and pass the
//! result into the operation explicitly.
mod catalog;

pub use catalog::ItemCatalog;
