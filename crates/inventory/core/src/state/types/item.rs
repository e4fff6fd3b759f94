//! Identifiers shared by every item record.

/// Identifier into the static item catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl ItemId {
    const THROWING_STAR_CLASS: u32 = 207;
    const BULLET_CLASS: u32 = 233;

    /// Catalog class of the item (the id with its last four digits dropped).
    pub const fn class(self) -> u32 {
        self.0 / 10_000
    }

    /// Throwing stars and bullets are recharged in place and never stack,
    /// whatever their ids.
    pub const fn is_rechargeable(self) -> bool {
        matches!(self.class(), Self::THROWING_STAR_CLASS | Self::BULLET_CLASS)
    }
}

/// Slot position inside an inventory.
///
/// Non-equipped inventories address `1..=slot_limit`. The equipped inventory
/// uses negative positions for body locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot(pub i8);

impl Slot {
    /// True for the body-location positions used by worn gear.
    pub const fn is_worn(self) -> bool {
        self.0 < 0
    }
}

impl core::fmt::Display for Slot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// True once `now` has reached this timestamp.
    pub const fn has_elapsed(self, now: Timestamp) -> bool {
        now.0 >= self.0
    }
}

/// Auxiliary identifier linking an equip to the accessory subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingId(pub u32);
