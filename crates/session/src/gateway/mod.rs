//! Persistence contract for character inventories.
//!
//! The gateway is the only component that talks to a backing store. It hands
//! rows to the loader at session start and receives snapshots at checkpoint or
//! session end; the inventory engine never sees the storage schema.
mod error;
mod memory;
mod row;

pub use error::GatewayError;
pub use memory::InMemoryGateway;
pub use row::ItemRow;

use inventory_core::InventoryType;
use serde::{Deserialize, Serialize};

use crate::snapshot::InventorySnapshot;

/// Identifier of the character that owns a set of inventories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

pub type Result<T> = std::result::Result<T, GatewayError>;

pub trait PersistenceGateway: Send + Sync {
    /// Rows of one inventory, in the order they should be placed.
    fn load_rows(&self, character: CharacterId, inventory: InventoryType) -> Result<Vec<ItemRow>>;

    /// Slot limit persisted by an earlier session, if any.
    fn load_slot_limit(
        &self,
        _character: CharacterId,
        _inventory: InventoryType,
    ) -> Result<Option<u8>> {
        Ok(None)
    }

    /// Replaces the stored contents of one inventory with `snapshot`.
    fn save(&self, character: CharacterId, snapshot: &InventorySnapshot) -> Result<()>;
}
