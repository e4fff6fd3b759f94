//! Move, merge and swap.
//!
//! `move_item` is the only operation that changes where an existing record
//! lives. It never changes the number of occupied slots upward and never
//! creates or discards quantity, with one pinned exception in equip-shaped
//! inventories (see [`SlotInventory::move_item`]).

use super::{InventoryError, SlotInventory};
use crate::state::Slot;

impl SlotInventory {
    /// Moves the record at `source` onto `destination`.
    ///
    /// - empty destination: the record is relocated
    /// - same item identity and not rechargeable: the stacks merge up to
    ///   `stack_max`, any remainder stays on `source`, a fully merged source
    ///   slot is vacated
    /// - anything else: the two records swap places
    ///
    /// In equip-shaped inventories a merge first swaps the two records and then
    /// runs the stack arithmetic against the records (not the slots). When the
    /// stacks fit, the vacated slot is `source`, which by then holds the merged
    /// target record; only the moved record survives, on `destination`. With a
    /// stack maximum of 1, as gear always has, this reduces to a plain swap.
    ///
    /// Moving a slot onto itself leaves the inventory unchanged.
    pub fn move_item(
        &mut self,
        source: Slot,
        destination: Slot,
        stack_max: u16,
    ) -> Result<(), InventoryError> {
        let Some(moving) = self.slots.get(&source) else {
            return Err(InventoryError::EmptySource {
                inventory: self.inventory_type,
                slot: source,
            });
        };
        if !self.inventory_type.is_equipped() && !self.in_range(destination) {
            return Err(InventoryError::DestinationOutOfRange {
                inventory: self.inventory_type,
                slot: destination,
                slot_limit: self.slot_limit,
            });
        }
        if source == destination {
            return Ok(());
        }

        let Some(target) = self.slots.get(&destination) else {
            self.relocate(source, destination);
            return Ok(());
        };
        if !moving.stacks_with(target) {
            self.swap(source, destination);
            return Ok(());
        }

        let total = u32::from(moving.quantity) + u32::from(target.quantity);
        let remainder = total.saturating_sub(u32::from(stack_max));
        let Ok(remainder) = u16::try_from(remainder) else {
            return Err(InventoryError::StackOverflow {
                item: moving.item_id,
                total,
                stack_max,
            });
        };

        // Track the two records through the equip swap.
        let (moving_at, target_at) = if self.is_equip_inventory() {
            self.swap(source, destination);
            (destination, source)
        } else {
            (source, destination)
        };

        if total > u32::from(stack_max) {
            self.set_quantity(target_at, stack_max);
            self.set_quantity(moving_at, remainder);
        } else {
            // total <= stack_max, so it fits
            self.set_quantity(target_at, total as u16);
            self.slots.shift_remove(&source);
        }
        Ok(())
    }

    fn relocate(&mut self, from: Slot, to: Slot) {
        if let Some(mut record) = self.slots.shift_remove(&from) {
            record.position = to;
            self.slots.insert(to, record);
        }
    }

    /// Exchanges the records at `a` and `b`. Both keys are removed before
    /// either record is reinserted.
    fn swap(&mut self, a: Slot, b: Slot) {
        let from_a = self.slots.shift_remove(&a);
        let from_b = self.slots.shift_remove(&b);
        for (record, slot) in [(from_b, a), (from_a, b)] {
            if let Some(mut record) = record {
                record.position = slot;
                self.slots.insert(slot, record);
            }
        }
    }

    fn set_quantity(&mut self, slot: Slot, quantity: u16) {
        if let Some(record) = self.slots.get_mut(&slot) {
            record.quantity = quantity;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{EquipStats, InventoryType, ItemId, ItemRecord, Slot};
    use crate::{InventoryError, SlotInventory};

    const POTION: ItemId = ItemId(2_000_000);
    const ELIXIR: ItemId = ItemId(2_000_004);
    const STAR: ItemId = ItemId(2_070_000);
    const SWORD: ItemId = ItemId(1_302_000);

    fn use_inventory(limit: u8) -> SlotInventory {
        SlotInventory::with_slot_limit(InventoryType::Use, limit)
    }

    fn quantity(inventory: &SlotInventory, slot: i8) -> Option<u16> {
        inventory.get(Slot(slot)).map(|r| r.quantity)
    }

    #[test]
    fn add_never_merges_but_move_does() {
        let mut inventory = use_inventory(4);
        assert_eq!(inventory.add_item(ItemRecord::plain(POTION, 50)), Ok(Slot(1)));
        assert_eq!(inventory.add_item(ItemRecord::plain(POTION, 30)), Ok(Slot(2)));

        inventory.move_item(Slot(2), Slot(1), 100).unwrap();

        assert_eq!(quantity(&inventory, 1), Some(80));
        assert_eq!(quantity(&inventory, 2), None);
        assert_eq!(inventory.len(), 1);
        inventory.verify_invariants().unwrap();
    }

    #[test]
    fn merge_overflow_keeps_remainder_on_source() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, 70)).unwrap();
        inventory.add_item(ItemRecord::plain(POTION, 50)).unwrap();

        inventory.move_item(Slot(2), Slot(1), 100).unwrap();

        assert_eq!(quantity(&inventory, 1), Some(100));
        assert_eq!(quantity(&inventory, 2), Some(20));
        inventory.verify_invariants().unwrap();
    }

    #[test]
    fn merge_exactly_at_stack_max_vacates_source() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, 60)).unwrap();
        inventory.add_item(ItemRecord::plain(POTION, 40)).unwrap();

        inventory.move_item(Slot(1), Slot(2), 100).unwrap();

        assert_eq!(quantity(&inventory, 1), None);
        assert_eq!(quantity(&inventory, 2), Some(100));
    }

    #[test]
    fn move_to_empty_slot_relocates() {
        let mut inventory = use_inventory(8);
        inventory.add_item(ItemRecord::plain(POTION, 3)).unwrap();

        inventory.move_item(Slot(1), Slot(6), 100).unwrap();

        assert_eq!(inventory.get(Slot(1)), None);
        assert_eq!(inventory.get(Slot(6)).map(|r| r.position), Some(Slot(6)));
        inventory.verify_invariants().unwrap();
    }

    #[test]
    fn different_items_swap_and_swap_back() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, 10)).unwrap();
        inventory.add_item(ItemRecord::plain(ELIXIR, 2)).unwrap();
        let before: Vec<_> = inventory.list().cloned().collect();

        inventory.move_item(Slot(1), Slot(2), 100).unwrap();
        assert_eq!(inventory.get(Slot(1)).map(|r| r.item_id), Some(ELIXIR));
        assert_eq!(inventory.get(Slot(2)).map(|r| r.item_id), Some(POTION));
        inventory.verify_invariants().unwrap();

        inventory.move_item(Slot(2), Slot(1), 100).unwrap();
        for record in &before {
            assert_eq!(inventory.get(record.position), Some(record));
        }
        assert_eq!(inventory.len(), before.len());
    }

    #[test]
    fn rechargeables_swap_instead_of_merging() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(STAR, 800)).unwrap();
        inventory.add_item(ItemRecord::plain(STAR, 500)).unwrap();

        inventory.move_item(Slot(2), Slot(1), 1_000).unwrap();

        assert_eq!(quantity(&inventory, 1), Some(500));
        assert_eq!(quantity(&inventory, 2), Some(800));
    }

    #[test]
    fn moving_empty_slot_is_invalid() {
        let mut inventory = use_inventory(4);
        let err = inventory.move_item(Slot(3), Slot(1), 100).unwrap_err();
        assert!(err.is_invalid_operation());
        assert!(matches!(err, InventoryError::EmptySource { slot: Slot(3), .. }));
    }

    #[test]
    fn destination_must_be_addressable() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, 1)).unwrap();

        for destination in [Slot(0), Slot(5), Slot(-1)] {
            let err = inventory.move_item(Slot(1), destination, 100).unwrap_err();
            assert!(err.is_invalid_operation());
        }
        assert_eq!(quantity(&inventory, 1), Some(1));
    }

    #[test]
    fn moving_onto_itself_changes_nothing() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, 60)).unwrap();

        inventory.move_item(Slot(1), Slot(1), 100).unwrap();

        assert_eq!(quantity(&inventory, 1), Some(60));
    }

    #[test]
    fn oversized_stacks_are_rejected_before_mutation() {
        let mut inventory = use_inventory(4);
        inventory.add_item(ItemRecord::plain(POTION, u16::MAX)).unwrap();
        inventory.add_item(ItemRecord::plain(POTION, u16::MAX)).unwrap();

        let err = inventory.move_item(Slot(2), Slot(1), 1).unwrap_err();

        assert!(matches!(err, InventoryError::StackOverflow { .. }));
        assert_eq!(quantity(&inventory, 1), Some(u16::MAX));
        assert_eq!(quantity(&inventory, 2), Some(u16::MAX));
    }

    #[test]
    fn identical_gear_with_unit_stack_max_swaps() {
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Equip, 4);
        let plain = ItemRecord::equip(SWORD, EquipStats::new());
        let scrolled = ItemRecord::equip(SWORD, EquipStats { watk: 5, ..EquipStats::new() });
        inventory.add_item(plain).unwrap();
        inventory.add_item(scrolled).unwrap();

        inventory.move_item(Slot(1), Slot(2), 1).unwrap();

        let at = |slot| inventory.get(Slot(slot)).and_then(|r| r.equip_stats()).map(|s| s.watk);
        assert_eq!(at(1), Some(5));
        assert_eq!(at(2), Some(0));
        assert_eq!(quantity(&inventory, 1), Some(1));
        assert_eq!(quantity(&inventory, 2), Some(1));
    }

    /// Equip-shaped merges swap first, so the slot vacated after a full merge
    /// holds the merged target record. Pins the current behavior.
    #[test]
    fn equip_merge_vacates_swapped_target() {
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Equip, 4);
        let moved = ItemRecord::equip(SWORD, EquipStats { str: 1, ..EquipStats::new() });
        let resting = ItemRecord::equip(SWORD, EquipStats { str: 2, ..EquipStats::new() });
        inventory.add_item(moved).unwrap();
        inventory.add_item(resting).unwrap();

        inventory.move_item(Slot(1), Slot(2), 5).unwrap();

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(Slot(1)), None);
        let survivor = inventory.get(Slot(2)).unwrap();
        assert_eq!(survivor.equip_stats().map(|s| s.str), Some(1));
        assert_eq!(survivor.quantity, 1);
        inventory.verify_invariants().unwrap();
    }

    #[test]
    fn worn_gear_moves_between_negative_slots() {
        const HELMET: ItemId = ItemId(1_002_140);
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Equipped, 127);
        inventory
            .add_from_persisted(ItemRecord::equip(HELMET, EquipStats::new()).at(Slot(-1)))
            .unwrap();
        inventory
            .add_from_persisted(ItemRecord::equip(SWORD, EquipStats::new()).at(Slot(-11)))
            .unwrap();

        inventory.move_item(Slot(-1), Slot(-11), 1).unwrap();
        assert_eq!(inventory.get(Slot(-1)).map(|r| r.item_id), Some(SWORD));
        assert_eq!(inventory.get(Slot(-11)).map(|r| r.item_id), Some(HELMET));
        inventory.verify_invariants().unwrap();

        inventory.move_item(Slot(-11), Slot(-5), 1).unwrap();
        assert_eq!(inventory.get(Slot(-11)), None);
        let helmet = inventory.get(Slot(-5)).unwrap();
        assert_eq!((helmet.item_id, helmet.position), (HELMET, Slot(-5)));
        assert_eq!(inventory.len(), 2);
        inventory.verify_invariants().unwrap();
    }
}
