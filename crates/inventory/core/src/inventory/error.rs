//! Errors raised by [`super::SlotInventory`] operations.

use crate::error::{CoreError, ErrorClass};
use crate::state::{InventoryType, ItemId, Slot};

/// Errors that occur while mutating a slot inventory.
///
/// Every variant is raised before any state is touched, so a failed operation
/// leaves the inventory exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Extension requested on an inventory whose size is fixed.
    #[error("cannot extend the {inventory} inventory")]
    NotExtendable { inventory: InventoryType },

    /// Negative positions only address worn gear.
    #[error("{position} is negative but the {inventory} inventory has no worn slots")]
    NegativePosition {
        inventory: InventoryType,
        position: Slot,
    },

    /// Position outside `1..=slot_limit`.
    #[error("{position} is outside 1..={slot_limit} of the {inventory} inventory")]
    PositionOutOfRange {
        inventory: InventoryType,
        position: Slot,
        slot_limit: u8,
    },

    /// A second record was placed on an occupied slot.
    #[error("{position} of the {inventory} inventory is already occupied by item {occupant:?}")]
    SlotOccupied {
        inventory: InventoryType,
        position: Slot,
        occupant: ItemId,
    },

    /// Occupied slots would exceed the slot limit.
    #[error("the {inventory} inventory is at capacity ({slot_limit} slots)")]
    CapacityExceeded {
        inventory: InventoryType,
        slot_limit: u8,
    },

    /// A record's own position disagrees with the slot it is stored under.
    #[error("{slot} of the {inventory} inventory holds a record positioned at {position}")]
    PositionMismatch {
        inventory: InventoryType,
        slot: Slot,
        position: Slot,
    },

    /// `move_item` was asked to move a slot that holds nothing.
    #[error("cannot move empty {slot} of the {inventory} inventory")]
    EmptySource { inventory: InventoryType, slot: Slot },

    /// `move_item` destination outside `1..=slot_limit`.
    #[error("move destination {slot} is outside 1..={slot_limit} of the {inventory} inventory")]
    DestinationOutOfRange {
        inventory: InventoryType,
        slot: Slot,
        slot_limit: u8,
    },

    /// The merge remainder does not fit a stack; the quantities already exceed
    /// the stack maximum passed in.
    #[error("merging {total} of item {item:?} with stack maximum {stack_max} overflows a slot")]
    StackOverflow {
        item: ItemId,
        total: u32,
        stack_max: u16,
    },
}

impl InventoryError {
    pub fn is_invariant_violation(&self) -> bool {
        self.class() == ErrorClass::InvariantViolation
    }

    pub fn is_invalid_operation(&self) -> bool {
        self.class() == ErrorClass::InvalidOperation
    }
}

impl CoreError for InventoryError {
    fn class(&self) -> ErrorClass {
        use InventoryError::*;
        match self {
            NotExtendable { .. }
            | NegativePosition { .. }
            | PositionOutOfRange { .. }
            | SlotOccupied { .. }
            | CapacityExceeded { .. }
            | PositionMismatch { .. } => ErrorClass::InvariantViolation,

            EmptySource { .. } | DestinationOutOfRange { .. } | StackOverflow { .. } => {
                ErrorClass::InvalidOperation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            NotExtendable { .. } => "INVENTORY_NOT_EXTENDABLE",
            NegativePosition { .. } => "INVENTORY_NEGATIVE_POSITION",
            PositionOutOfRange { .. } => "INVENTORY_POSITION_OUT_OF_RANGE",
            SlotOccupied { .. } => "INVENTORY_SLOT_OCCUPIED",
            CapacityExceeded { .. } => "INVENTORY_CAPACITY_EXCEEDED",
            PositionMismatch { .. } => "INVENTORY_POSITION_MISMATCH",
            EmptySource { .. } => "INVENTORY_EMPTY_SOURCE",
            DestinationOutOfRange { .. } => "INVENTORY_DESTINATION_OUT_OF_RANGE",
            StackOverflow { .. } => "INVENTORY_STACK_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorSeverity;

    #[test]
    fn classes_map_to_severity() {
        let fatal = InventoryError::NotExtendable {
            inventory: InventoryType::Cash,
        };
        assert!(fatal.is_invariant_violation());
        assert_eq!(fatal.severity(), ErrorSeverity::Fatal);
        assert_eq!(fatal.error_code(), "INVENTORY_NOT_EXTENDABLE");

        let misuse = InventoryError::EmptySource {
            inventory: InventoryType::Use,
            slot: Slot(3),
        };
        assert!(misuse.is_invalid_operation());
        assert_eq!(misuse.severity(), ErrorSeverity::Validation);
        assert_eq!(misuse.to_string(), "cannot move empty slot 3 of the use inventory");
    }
}
