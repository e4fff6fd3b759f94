use crate::state::InventoryType;

/// Inventory sizing defaults and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    /// Slot limit given to a freshly created inventory.
    pub default_slot_limit: u8,
    /// Slot limit given to elevated-privilege accounts.
    pub privileged_slot_limit: u8,
    /// Slot limit of the worn-gear inventory, which is never extended.
    pub equipped_slot_limit: u8,
    /// Stack maximum used when the catalog has no entry for an item.
    pub default_stack_max: u16,
    /// Stack maximum for gear the catalog has no entry for.
    pub equip_stack_max: u16,
}

impl InventoryConfig {
    // ===== compile-time constants =====
    /// Highest slot index addressable by a non-equipped inventory.
    pub const MAX_SLOT_INDEX: u8 = i8::MAX as u8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SLOT_LIMIT: u8 = 24;
    pub const PRIVILEGED_SLOT_LIMIT: u8 = 96;
    pub const EQUIPPED_SLOT_LIMIT: u8 = 127;
    pub const DEFAULT_STACK_MAX: u16 = 100;
    pub const EQUIP_STACK_MAX: u16 = 1;

    pub fn new() -> Self {
        Self {
            default_slot_limit: Self::DEFAULT_SLOT_LIMIT,
            privileged_slot_limit: Self::PRIVILEGED_SLOT_LIMIT,
            equipped_slot_limit: Self::EQUIPPED_SLOT_LIMIT,
            default_stack_max: Self::DEFAULT_STACK_MAX,
            equip_stack_max: Self::EQUIP_STACK_MAX,
        }
    }

    /// Fallback stack maximum for an item missing from the catalog.
    pub fn fallback_stack_max(&self, is_equip: bool) -> u16 {
        if is_equip {
            self.equip_stack_max
        } else {
            self.default_stack_max
        }
    }

    /// Picks the starting slot limit. Whether an account counts as privileged is
    /// decided by the caller.
    pub fn slot_limit_for(&self, inventory_type: InventoryType, privileged: bool) -> u8 {
        if inventory_type.is_equipped() {
            self.equipped_slot_limit
        } else if privileged {
            self.privileged_slot_limit
        } else {
            self.default_slot_limit
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new()
    }
}
