//! Every inventory of one character for the length of a session.

use std::collections::BTreeMap;

use inventory_core::{InventoryType, ItemCatalog, Slot, SlotInventory};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::gateway::{CharacterId, PersistenceGateway};
use crate::load::InventoryLoader;
use crate::snapshot::InventorySnapshot;

/// The persisted inventories of a character, keyed by type.
///
/// Owned by the character's single command-processing context. Operations that
/// touch two characters must acquire both owners in a consistent order first.
#[derive(Clone, Debug)]
pub struct CharacterInventories {
    character: CharacterId,
    inventories: BTreeMap<InventoryType, SlotInventory>,
}

impl CharacterInventories {
    /// Creates empty inventories sized for the account's privilege level.
    pub fn new(character: CharacterId, privilege_level: u8, config: &SessionConfig) -> Self {
        let privileged = config.is_privileged(privilege_level);
        let inventories = InventoryType::PERSISTED
            .into_iter()
            .map(|ty| (ty, SlotInventory::from_config(ty, &config.inventory, privileged)))
            .collect();
        Self {
            character,
            inventories,
        }
    }

    /// Loads every persisted inventory of `character` through `gateway`.
    ///
    /// A slot limit stored by an earlier session wins over the configured one.
    pub fn load<G>(
        character: CharacterId,
        privilege_level: u8,
        config: &SessionConfig,
        gateway: &G,
        loader: &mut InventoryLoader<'_>,
    ) -> Result<Self>
    where
        G: PersistenceGateway + ?Sized,
    {
        let mut storage = Self::new(character, privilege_level, config);
        for (&ty, inventory) in storage.inventories.iter_mut() {
            if let Some(slot_limit) = gateway.load_slot_limit(character, ty)? {
                *inventory = SlotInventory::with_slot_limit(ty, slot_limit);
            }
            let rows = gateway.load_rows(character, ty)?;
            loader.load(inventory, rows)?;
        }
        tracing::debug!(character = character.0, "character inventories loaded");
        Ok(storage)
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn get(&self, inventory_type: InventoryType) -> Result<&SlotInventory> {
        self.inventories
            .get(&inventory_type)
            .ok_or(SessionError::UnknownInventory(inventory_type))
    }

    pub fn get_mut(&mut self, inventory_type: InventoryType) -> Result<&mut SlotInventory> {
        self.inventories
            .get_mut(&inventory_type)
            .ok_or(SessionError::UnknownInventory(inventory_type))
    }

    /// Moves within one inventory using the catalog's stack maximum for the
    /// moved item. Uncatalogued gear falls back to the equip stack maximum.
    pub fn move_item(
        &mut self,
        inventory_type: InventoryType,
        source: Slot,
        destination: Slot,
        catalog: &dyn ItemCatalog,
        config: &SessionConfig,
    ) -> Result<()> {
        let inventory = self.get_mut(inventory_type)?;
        let stack_max = inventory
            .get(source)
            .map(|record| {
                let fallback = config.inventory.fallback_stack_max(record.is_equip());
                catalog.slot_max_or(record.item_id, fallback)
            })
            .unwrap_or(config.inventory.default_stack_max);
        inventory.move_item(source, destination, stack_max)?;
        Ok(())
    }

    /// Snapshots of every inventory, in type order.
    pub fn snapshots(&self) -> Vec<InventorySnapshot> {
        self.inventories.values().map(InventorySnapshot::capture).collect()
    }

    /// Hands every inventory to `gateway`. Returns the number of rows written.
    pub fn checkpoint<G>(&self, gateway: &G) -> Result<usize>
    where
        G: PersistenceGateway + ?Sized,
    {
        let mut written = 0;
        for snapshot in self.snapshots() {
            if let Err(err) = gateway.save(self.character, &snapshot) {
                tracing::warn!(
                    character = self.character.0,
                    inventory = %snapshot.inventory_type,
                    error = %err,
                    "checkpoint failed"
                );
                return Err(err.into());
            }
            written += snapshot.rows.len();
        }
        tracing::debug!(character = self.character.0, rows = written, "checkpoint written");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_storage_sizes_by_privilege() {
        let config = SessionConfig::default();
        let player = CharacterInventories::new(CharacterId(1), 0, &config);
        let admin = CharacterInventories::new(CharacterId(2), 1, &config);

        assert_eq!(player.get(InventoryType::Use).unwrap().slot_limit(), 24);
        assert_eq!(admin.get(InventoryType::Etc).unwrap().slot_limit(), 96);
        assert_eq!(player.get(InventoryType::Equipped).unwrap().slot_limit(), 127);
    }

    #[test]
    fn undefined_inventory_is_not_stored() {
        let mut storage = CharacterInventories::new(CharacterId(1), 0, &SessionConfig::default());
        assert!(matches!(
            storage.get(InventoryType::Undefined),
            Err(SessionError::UnknownInventory(InventoryType::Undefined))
        ));
        assert!(storage.get_mut(InventoryType::Undefined).is_err());
        assert_eq!(storage.snapshots().len(), InventoryType::PERSISTED.len());
    }
}
