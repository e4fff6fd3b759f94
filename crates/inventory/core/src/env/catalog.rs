use crate::state::ItemId;

pub trait ItemCatalog: Send + Sync {
    /// Display name shown to players.
    fn name(&self, item: ItemId) -> Option<String>;

    /// Maximum quantity a single slot may hold for this item.
    fn slot_max(&self, item: ItemId) -> Option<u16>;

    /// Returns `slot_max`, or `fallback` for items missing from the catalog.
    fn slot_max_or(&self, item: ItemId, fallback: u16) -> u16 {
        self.slot_max(item).unwrap_or(fallback)
    }
}
