//! Attribute set carried by equip records.

use super::RingId;

/// Stat modifiers and progression counters of a single piece of gear.
///
/// Equip records are never stackable; the attributes travel with the record
/// through every move and swap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipStats {
    pub str: i16,
    pub dex: i16,
    pub int: i16,
    pub luk: i16,
    pub hp: i16,
    pub mp: i16,
    pub watk: i16,
    pub matk: i16,
    pub wdef: i16,
    pub mdef: i16,
    pub acc: i16,
    pub avoid: i16,
    pub hands: i16,
    pub speed: i16,
    pub jump: i16,
    /// Number of times the item was hammered.
    pub vicious: u16,
    /// Lock/trade flags, opaque to the inventory.
    pub flag: u8,
    /// Remaining scroll upgrade slots.
    pub upgrade_slots: u8,
    pub level: u8,
    pub item_exp: u32,
    /// Set when the equip belongs to a ring pair.
    pub ring_id: Option<RingId>,
}

impl EquipStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a ring identifier (builder pattern).
    #[must_use]
    pub fn with_ring(mut self, ring_id: RingId) -> Self {
        self.ring_id = Some(ring_id);
        self
    }
}
