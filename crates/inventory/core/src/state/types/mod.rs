mod equip;
mod inventory_type;
mod item;
mod record;

pub use equip::EquipStats;
pub use inventory_type::{InventoryType, UnknownInventoryCode};
pub use item::{ItemId, RingId, Slot, Timestamp};
pub use record::{ItemKind, ItemRecord};
