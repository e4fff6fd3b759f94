//! Slot inventory storage.
//!
//! [`SlotInventory`] owns the slot → record mapping of one inventory type for
//! one character. The mapping keeps insertion order so snapshots and iteration
//! are deterministic; nothing else depends on that order.
//!
//! After every public operation:
//! 1. each key equals the `position` of the record stored under it
//! 2. outside the equipped inventory, every position is in `1..=slot_limit`
//! 3. the number of occupied slots never exceeds `slot_limit`
//! 4. quantities are never negative; a zero stack only survives
//!    [`SlotInventory::remove_item`] with `allow_zero`
//!
//! Access is single-owner and synchronous. Callers serialize all access to an
//! instance; the inventory performs no locking of its own.
mod error;
mod movement;
mod query;

pub use error::InventoryError;

use indexmap::IndexMap;

use crate::config::InventoryConfig;
use crate::state::{InventoryType, ItemRecord, Slot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotInventory {
    inventory_type: InventoryType,
    slot_limit: u8,
    slots: IndexMap<Slot, ItemRecord>,
}

impl SlotInventory {
    /// Creates an empty inventory with the default slot limit.
    pub fn new(inventory_type: InventoryType) -> Self {
        Self::with_slot_limit(inventory_type, InventoryConfig::DEFAULT_SLOT_LIMIT)
    }

    pub fn with_slot_limit(inventory_type: InventoryType, slot_limit: u8) -> Self {
        Self {
            inventory_type,
            slot_limit,
            slots: IndexMap::new(),
        }
    }

    /// Creates an empty inventory sized from `config`.
    pub fn from_config(
        inventory_type: InventoryType,
        config: &InventoryConfig,
        privileged: bool,
    ) -> Self {
        Self::with_slot_limit(
            inventory_type,
            config.slot_limit_for(inventory_type, privileged),
        )
    }

    pub fn inventory_type(&self) -> InventoryType {
        self.inventory_type
    }

    pub fn slot_limit(&self) -> u8 {
        self.slot_limit
    }

    pub fn is_extendable(&self) -> bool {
        self.inventory_type.is_extendable()
    }

    pub fn is_equip_inventory(&self) -> bool {
        self.inventory_type.is_equip_shaped()
    }

    /// Raises the slot limit by `amount`.
    ///
    /// Game-rule maxima are the caller's concern; the limit only saturates at
    /// the range of the type.
    pub fn increase_slot_limit(&mut self, amount: u8) -> Result<(), InventoryError> {
        if !self.is_extendable() {
            return Err(InventoryError::NotExtendable {
                inventory: self.inventory_type,
            });
        }
        self.slot_limit = self.slot_limit.saturating_add(amount);
        Ok(())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.is_full_with_margin(0)
    }

    /// True if fewer than `margin` free slots would remain. Used to reserve
    /// headroom before multi-item operations.
    pub fn is_full_with_margin(&self, margin: usize) -> bool {
        self.slots.len() + margin >= usize::from(self.slot_limit)
    }

    /// Lowest unoccupied slot in `1..=slot_limit`.
    pub fn next_free_slot(&self) -> Option<Slot> {
        if self.is_full() {
            return None;
        }
        (1..=self.addressable_limit())
            .map(Slot)
            .find(|slot| !self.slots.contains_key(slot))
    }

    /// Places a new item on the lowest free slot and returns that slot.
    ///
    /// Never merges with existing stacks. When the inventory is full the record
    /// is handed back untouched.
    pub fn add_item(&mut self, mut record: ItemRecord) -> Result<Slot, ItemRecord> {
        let Some(slot) = self.next_free_slot() else {
            return Err(record);
        };
        record.position = slot;
        self.slots.insert(slot, record);
        Ok(slot)
    }

    /// Stores a record loaded from persistence at its own position.
    pub fn add_from_persisted(&mut self, record: ItemRecord) -> Result<(), InventoryError> {
        let position = record.position;
        if !self.inventory_type.is_equipped() {
            if position.is_worn() {
                return Err(InventoryError::NegativePosition {
                    inventory: self.inventory_type,
                    position,
                });
            }
            if !self.in_range(position) {
                return Err(InventoryError::PositionOutOfRange {
                    inventory: self.inventory_type,
                    position,
                    slot_limit: self.slot_limit,
                });
            }
        }
        if let Some(occupant) = self.slots.get(&position) {
            return Err(InventoryError::SlotOccupied {
                inventory: self.inventory_type,
                position,
                occupant: occupant.item_id,
            });
        }
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded {
                inventory: self.inventory_type,
                slot_limit: self.slot_limit,
            });
        }
        self.slots.insert(position, record);
        Ok(())
    }

    /// Subtracts `quantity` from the stack at `slot`.
    ///
    /// An empty slot is a no-op. The stack is clamped at zero, and a zero stack
    /// vacates the slot unless `allow_zero` is set.
    pub fn remove_item(&mut self, slot: Slot, quantity: u16, allow_zero: bool) {
        let Some(record) = self.slots.get_mut(&slot) else {
            return;
        };
        record.quantity = record.quantity.saturating_sub(quantity);
        if record.quantity == 0 && !allow_zero {
            self.remove_slot(slot);
        }
    }

    /// Removes a single unit from the stack at `slot`.
    pub fn remove_one(&mut self, slot: Slot) {
        self.remove_item(slot, 1, false);
    }

    /// Vacates `slot` unconditionally, returning whatever was stored there.
    pub fn remove_slot(&mut self, slot: Slot) -> Option<ItemRecord> {
        self.slots.shift_remove(&slot)
    }

    /// Checks invariants 1 to 3 against the current contents.
    pub fn verify_invariants(&self) -> Result<(), InventoryError> {
        for (&slot, record) in &self.slots {
            if record.position != slot {
                return Err(InventoryError::PositionMismatch {
                    inventory: self.inventory_type,
                    slot,
                    position: record.position,
                });
            }
            if !self.inventory_type.is_equipped() && !self.in_range(slot) {
                return Err(InventoryError::PositionOutOfRange {
                    inventory: self.inventory_type,
                    position: slot,
                    slot_limit: self.slot_limit,
                });
            }
        }
        if self.slots.len() > usize::from(self.slot_limit) {
            return Err(InventoryError::CapacityExceeded {
                inventory: self.inventory_type,
                slot_limit: self.slot_limit,
            });
        }
        Ok(())
    }

    fn in_range(&self, slot: Slot) -> bool {
        slot.0 >= 1 && slot.0 <= self.addressable_limit()
    }

    /// Slot limit clipped to what a [`Slot`] can address.
    fn addressable_limit(&self) -> i8 {
        i8::try_from(self.slot_limit).unwrap_or(i8::MAX)
    }
}

impl<'a> IntoIterator for &'a SlotInventory {
    type Item = &'a ItemRecord;
    type IntoIter = indexmap::map::Values<'a, Slot, ItemRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.values()
    }
}
