//! Item and inventory data types.
//!
//! Everything stored inside a [`crate::SlotInventory`] is defined here. Types
//! derive `serde` traits behind the `serde` feature so the persistence layer
//! can serialize rows and snapshots without conversion glue.
pub mod types;

pub use types::{
    EquipStats, InventoryType, ItemId, ItemKind, ItemRecord, RingId, Slot, Timestamp,
    UnknownInventoryCode,
};
