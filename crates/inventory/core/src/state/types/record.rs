//! The unit stored in an inventory slot.

use super::{EquipStats, ItemId, Slot, Timestamp};

/// Variant-specific payload of an [`ItemRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Stackable consumable or material; the quantity is the stack size.
    Plain,
    /// Worn gear with its attribute set.
    Equip(Box<EquipStats>),
}

/// One item instance held by an inventory slot.
///
/// # Design: Base + Kind Pattern
///
/// - Common fields live on the record itself
/// - `kind` carries the fields only gear has
///
/// `position` always mirrors the slot key the record is stored under while it
/// sits in a [`crate::SlotInventory`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRecord {
    pub item_id: ItemId,
    pub position: Slot,
    pub quantity: u16,
    pub owner: Option<String>,
    /// `None` means the item never expires.
    pub expiration: Option<Timestamp>,
    pub cash_id: Option<u32>,
    /// Set while the item is bound to a pet; overrides `cash_id` for lookups.
    pub pet_id: Option<u32>,
    pub kind: ItemKind,
}

impl ItemRecord {
    /// Creates a stackable record. The position is assigned on insertion.
    pub fn plain(item_id: ItemId, quantity: u16) -> Self {
        Self::with_kind(item_id, quantity, ItemKind::Plain)
    }

    /// Creates a single piece of gear.
    pub fn equip(item_id: ItemId, stats: EquipStats) -> Self {
        Self::with_kind(item_id, 1, ItemKind::Equip(Box::new(stats)))
    }

    fn with_kind(item_id: ItemId, quantity: u16, kind: ItemKind) -> Self {
        Self {
            item_id,
            position: Slot(0),
            quantity,
            owner: None,
            expiration: None,
            cash_id: None,
            pet_id: None,
            kind,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Slot) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    #[must_use]
    pub fn with_expiration(mut self, expiration: Timestamp) -> Self {
        self.expiration = Some(expiration);
        self
    }

    #[must_use]
    pub fn with_cash_id(mut self, cash_id: u32) -> Self {
        self.cash_id = Some(cash_id);
        self
    }

    #[must_use]
    pub fn with_pet_id(mut self, pet_id: u32) -> Self {
        self.pet_id = Some(pet_id);
        self
    }

    pub fn is_equip(&self) -> bool {
        matches!(self.kind, ItemKind::Equip(_))
    }

    pub fn equip_stats(&self) -> Option<&EquipStats> {
        match &self.kind {
            ItemKind::Equip(stats) => Some(stats),
            ItemKind::Plain => None,
        }
    }

    /// Identity used by `find_by_cash_id`: the pet id while bound, the cash id
    /// otherwise.
    pub fn lookup_cash_id(&self) -> Option<u32> {
        self.pet_id.or(self.cash_id)
    }

    /// True if `other` may merge into the same stack as this record.
    pub fn stacks_with(&self, other: &ItemRecord) -> bool {
        self.item_id == other.item_id && !self.item_id.is_rechargeable()
    }
}
