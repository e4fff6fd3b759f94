use inventory_core::{
    EquipStats, InventoryType, ItemId, ItemKind, ItemRecord, RingId, Slot, Timestamp,
};
use serde::{Deserialize, Serialize};

/// One persisted item, as exchanged with a [`super::PersistenceGateway`].
///
/// Rows of equip-shaped inventories carry the equip attribute set; an equip row
/// without attributes loads with zeroed stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub position: Slot,
    pub quantity: u16,
    /// Empty when the item has no owner tag.
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub expiration: Option<Timestamp>,
    #[serde(default)]
    pub cash_id: Option<u32>,
    #[serde(default)]
    pub pet_id: Option<u32>,
    #[serde(default)]
    pub equip: Option<EquipStats>,
}

impl ItemRow {
    pub fn new(item_id: ItemId, position: Slot, quantity: u16) -> Self {
        Self {
            item_id,
            position,
            quantity,
            owner: String::new(),
            expiration: None,
            cash_id: None,
            pet_id: None,
            equip: None,
        }
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: Timestamp) -> Self {
        self.expiration = Some(expiration);
        self
    }

    #[must_use]
    pub fn with_equip(mut self, stats: EquipStats) -> Self {
        self.equip = Some(stats);
        self
    }

    /// Ring identifier of an equip row.
    pub fn ring_id(&self) -> Option<RingId> {
        self.equip.as_ref().and_then(|stats| stats.ring_id)
    }

    /// Builds the record variant matching the inventory shape.
    pub fn into_record(self, inventory: InventoryType) -> ItemRecord {
        let kind = if inventory.is_equip_shaped() {
            ItemKind::Equip(Box::new(self.equip.unwrap_or_default()))
        } else {
            ItemKind::Plain
        };
        ItemRecord {
            item_id: self.item_id,
            position: self.position,
            quantity: self.quantity,
            owner: Some(self.owner).filter(|owner| !owner.is_empty()),
            expiration: self.expiration,
            cash_id: self.cash_id,
            pet_id: self.pet_id,
            kind,
        }
    }
}

impl From<&ItemRecord> for ItemRow {
    fn from(record: &ItemRecord) -> Self {
        Self {
            item_id: record.item_id,
            position: record.position,
            quantity: record.quantity,
            owner: record.owner.clone().unwrap_or_default(),
            expiration: record.expiration,
            cash_id: record.cash_id,
            pet_id: record.pet_id,
            equip: record.equip_stats().cloned(),
        }
    }
}
