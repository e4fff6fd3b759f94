//! Slot-indexed item storage for a single character inventory.
//!
//! `inventory-core` holds the authoritative in-memory representation of one
//! inventory (a typed, slot-indexed container of items) and implements every
//! state transition that can happen to it during play. All mutation flows
//! through [`SlotInventory`]; the operations are synchronous, perform no I/O and
//! never reach out to global item data. Anything derived from the item catalog
//! (stack maximums, display names) is supplied by the caller.
pub mod config;
pub mod env;
pub mod error;
pub mod inventory;
pub mod state;

pub use config::InventoryConfig;
pub use env::ItemCatalog;
pub use error::{CoreError, ErrorClass, ErrorSeverity};
pub use inventory::{InventoryError, SlotInventory};
pub use state::{
    EquipStats, InventoryType, ItemId, ItemKind, ItemRecord, RingId, Slot, Timestamp,
    UnknownInventoryCode,
};
