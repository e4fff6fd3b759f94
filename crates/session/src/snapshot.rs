//! Save direction: the full current contents of an inventory.

use inventory_core::{InventoryType, SlotInventory};
use serde::{Deserialize, Serialize};

use crate::gateway::ItemRow;

/// Everything a gateway needs to persist one inventory. Rows keep the
/// inventory's iteration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub inventory_type: InventoryType,
    pub slot_limit: u8,
    pub rows: Vec<ItemRow>,
}

impl InventorySnapshot {
    pub fn capture(inventory: &SlotInventory) -> Self {
        Self {
            inventory_type: inventory.inventory_type(),
            slot_limit: inventory.slot_limit(),
            rows: inventory.list().map(ItemRow::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&SlotInventory> for InventorySnapshot {
    fn from(inventory: &SlotInventory) -> Self {
        Self::capture(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ItemId, ItemRecord, Slot};

    #[test]
    fn capture_keeps_iteration_order_and_limit() {
        let mut inventory = SlotInventory::with_slot_limit(InventoryType::Etc, 30);
        inventory
            .add_from_persisted(ItemRecord::plain(ItemId(4_000_000), 5).at(Slot(9)))
            .unwrap();
        inventory.add_item(ItemRecord::plain(ItemId(4_000_001), 2)).unwrap();

        let snapshot = InventorySnapshot::capture(&inventory);

        assert_eq!(snapshot.slot_limit, 30);
        let positions: Vec<_> = snapshot.rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![Slot(9), Slot(1)]);
    }
}
