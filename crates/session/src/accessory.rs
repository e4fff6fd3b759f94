//! Ring equips and the accessory subsystem.
//!
//! The loader only reports which ring equips were loaded into the equipped
//! inventory. Deciding what a ring does is the registry's business.

use std::collections::BTreeMap;

use inventory_core::{ItemId, RingId};

pub trait AccessoryRegistry {
    /// Called once per worn equip carrying a ring identifier.
    fn register_ring(&mut self, item_id: ItemId, ring_id: RingId);
}

/// Bonus classes of paired rings.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RingCategory {
    Crush,
    Friendship,
    Marriage,
}

impl RingCategory {
    pub fn of(item_id: ItemId) -> Option<Self> {
        match item_id.0 {
            1_112_001..=1_112_006 => Some(Self::Crush),
            1_112_800..=1_112_802 => Some(Self::Friendship),
            1_112_803..=1_112_807 | 1_112_809 => Some(Self::Marriage),
            _ => None,
        }
    }
}

/// Files worn rings by category. Rings outside every category are ignored.
#[derive(Debug, Default)]
pub struct RingRegistry {
    rings: BTreeMap<RingCategory, Vec<(ItemId, RingId)>>,
}

impl RingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rings(&self, category: RingCategory) -> &[(ItemId, RingId)] {
        self.rings.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccessoryRegistry for RingRegistry {
    fn register_ring(&mut self, item_id: ItemId, ring_id: RingId) {
        match RingCategory::of(item_id) {
            Some(category) => {
                tracing::debug!(?item_id, ?ring_id, %category, "registered ring");
                self.rings.entry(category).or_default().push((item_id, ring_id));
            }
            None => tracing::debug!(?item_id, ?ring_id, "ring has no bonus category"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_item_ranges() {
        assert_eq!(RingCategory::of(ItemId(1_112_001)), Some(RingCategory::Crush));
        assert_eq!(RingCategory::of(ItemId(1_112_006)), Some(RingCategory::Crush));
        assert_eq!(RingCategory::of(ItemId(1_112_801)), Some(RingCategory::Friendship));
        assert_eq!(RingCategory::of(ItemId(1_112_807)), Some(RingCategory::Marriage));
        assert_eq!(RingCategory::of(ItemId(1_112_809)), Some(RingCategory::Marriage));
        assert_eq!(RingCategory::of(ItemId(1_112_808)), None);
        assert_eq!(RingCategory::of(ItemId(1_112_000)), None);
    }

    #[test]
    fn registry_files_known_rings_only() {
        let mut registry = RingRegistry::new();
        registry.register_ring(ItemId(1_112_002), RingId(10));
        registry.register_ring(ItemId(1_112_803), RingId(11));
        registry.register_ring(ItemId(1_112_400), RingId(12));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.rings(RingCategory::Crush),
            &[(ItemId(1_112_002), RingId(10))]
        );
        assert!(registry.rings(RingCategory::Friendship).is_empty());
    }
}
