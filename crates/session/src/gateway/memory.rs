//! In-memory gateway for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use inventory_core::InventoryType;

use super::{CharacterId, GatewayError, ItemRow, PersistenceGateway, Result};
use crate::snapshot::InventorySnapshot;

#[derive(Clone, Debug, Default)]
struct StoredInventory {
    slot_limit: Option<u8>,
    rows: Vec<ItemRow>,
}

/// Stores rows per (character, inventory type) behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    inventories: RwLock<HashMap<(CharacterId, InventoryType), StoredInventory>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds rows for one inventory, replacing anything stored before.
    pub fn insert_rows(
        &self,
        character: CharacterId,
        inventory: InventoryType,
        rows: Vec<ItemRow>,
    ) -> Result<()> {
        let mut inventories = self
            .inventories
            .write()
            .map_err(|_| GatewayError::LockPoisoned)?;
        inventories.insert(
            (character, inventory),
            StoredInventory {
                slot_limit: None,
                rows,
            },
        );
        Ok(())
    }
}

impl PersistenceGateway for InMemoryGateway {
    fn load_rows(&self, character: CharacterId, inventory: InventoryType) -> Result<Vec<ItemRow>> {
        let inventories = self
            .inventories
            .read()
            .map_err(|_| GatewayError::LockPoisoned)?;
        Ok(inventories
            .get(&(character, inventory))
            .map(|stored| stored.rows.clone())
            .unwrap_or_default())
    }

    fn load_slot_limit(
        &self,
        character: CharacterId,
        inventory: InventoryType,
    ) -> Result<Option<u8>> {
        let inventories = self
            .inventories
            .read()
            .map_err(|_| GatewayError::LockPoisoned)?;
        Ok(inventories
            .get(&(character, inventory))
            .and_then(|stored| stored.slot_limit))
    }

    fn save(&self, character: CharacterId, snapshot: &InventorySnapshot) -> Result<()> {
        let mut inventories = self
            .inventories
            .write()
            .map_err(|_| GatewayError::LockPoisoned)?;
        inventories.insert(
            (character, snapshot.inventory_type),
            StoredInventory {
                slot_limit: Some(snapshot.slot_limit),
                rows: snapshot.rows.clone(),
            },
        );
        Ok(())
    }
}
