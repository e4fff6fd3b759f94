//! Read-only lookups. All of these walk the occupied slots in iteration order.

use super::SlotInventory;
use crate::state::{ItemId, ItemRecord, Slot};

impl SlotInventory {
    pub fn get(&self, slot: Slot) -> Option<&ItemRecord> {
        self.slots.get(&slot)
    }

    /// Read-only view of every stored record in iteration order.
    ///
    /// The borrow prevents mutation while iterating.
    pub fn list(&self) -> indexmap::map::Values<'_, Slot, ItemRecord> {
        self.slots.values()
    }

    /// First record with the given item id.
    pub fn find_by_id(&self, item_id: ItemId) -> Option<&ItemRecord> {
        self.list().find(|record| record.item_id == item_id)
    }

    /// Total quantity held across every stack of `item_id`.
    pub fn count_by_id(&self, item_id: ItemId) -> u32 {
        self.list()
            .filter(|record| record.item_id == item_id)
            .map(|record| u32::from(record.quantity))
            .sum()
    }

    /// Every record with the given item id, ordered by position.
    pub fn list_by_id(&self, item_id: ItemId) -> Vec<&ItemRecord> {
        let mut matches: Vec<_> = self
            .list()
            .filter(|record| record.item_id == item_id)
            .collect();
        if matches.len() > 1 {
            matches.sort_by_key(|record| record.position);
        }
        matches
    }

    /// First record whose pet id (when bound) or cash id equals `cash_id`.
    pub fn find_by_cash_id(&self, cash_id: u32) -> Option<&ItemRecord> {
        self.list()
            .find(|record| record.lookup_cash_id() == Some(cash_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{InventoryType, ItemId, ItemRecord, Slot};
    use crate::SlotInventory;

    const POTION: ItemId = ItemId(2_000_000);
    const ELIXIR: ItemId = ItemId(2_000_004);

    fn stocked() -> SlotInventory {
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Use, 8);
        for record in [
            ItemRecord::plain(POTION, 10).at(Slot(5)),
            ItemRecord::plain(ELIXIR, 3).at(Slot(1)),
            ItemRecord::plain(POTION, 7).at(Slot(2)),
        ] {
            inventory.add_from_persisted(record).unwrap();
        }
        inventory
    }

    #[test]
    fn find_by_id_returns_first_in_iteration_order() {
        let inventory = stocked();
        assert_eq!(inventory.find_by_id(POTION).map(|r| r.position), Some(Slot(5)));
        assert_eq!(inventory.find_by_id(ItemId(4_000_000)), None);
    }

    #[test]
    fn count_by_id_sums_every_stack() {
        let inventory = stocked();
        assert_eq!(inventory.count_by_id(POTION), 17);
        assert_eq!(inventory.count_by_id(ELIXIR), 3);
        assert_eq!(inventory.count_by_id(ItemId(1)), 0);
    }

    #[test]
    fn list_by_id_sorts_by_position() {
        let inventory = stocked();
        let positions: Vec<_> = inventory
            .list_by_id(POTION)
            .iter()
            .map(|r| r.position)
            .collect();
        assert_eq!(positions, vec![Slot(2), Slot(5)]);
        assert!(inventory.list_by_id(ItemId(1)).is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let inventory = stocked();
        let positions: Vec<_> = inventory.list().map(|r| r.position).collect();
        assert_eq!(positions, vec![Slot(5), Slot(1), Slot(2)]);
        assert_eq!((&inventory).into_iter().count(), 3);
    }

    #[test]
    fn find_by_cash_id_prefers_pet_binding() {
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Cash, 8);
        let pet_bound = ItemRecord::plain(ItemId(5_000_000), 1)
            .with_cash_id(77)
            .with_pet_id(5);
        let unbound = ItemRecord::plain(ItemId(5_000_001), 1).with_cash_id(77);
        inventory.add_item(pet_bound).unwrap();
        inventory.add_item(unbound).unwrap();

        let found = inventory.find_by_cash_id(77).unwrap();
        assert_eq!(found.item_id, ItemId(5_000_001));
        assert_eq!(
            inventory.find_by_cash_id(5).map(|r| r.item_id),
            Some(ItemId(5_000_000))
        );
    }
}
