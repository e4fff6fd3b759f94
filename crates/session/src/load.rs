//! Load direction: persisted rows into a live inventory.
//!
//! For each row, in order:
//! 1. an elapsed expiration raises [`Notification::ItemExpired`] and the row is
//!    skipped
//! 2. the record variant matching the inventory shape is built and placed at its
//!    own position through [`SlotInventory::add_from_persisted`]
//! 3. a placed record in the equipped inventory that carries a ring identifier
//!    is forwarded to the [`AccessoryRegistry`]

use inventory_core::{InventoryError, ItemCatalog, SlotInventory};

use crate::accessory::AccessoryRegistry;
use crate::clock::Clock;
use crate::gateway::ItemRow;
use crate::notify::{Notification, NotificationSink};

/// Outcome counters of one inventory load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub expired: usize,
    pub rings: usize,
}

/// Borrows the collaborators a load needs for its duration.
pub struct InventoryLoader<'a> {
    catalog: &'a dyn ItemCatalog,
    notifications: &'a dyn NotificationSink,
    accessories: &'a mut dyn AccessoryRegistry,
    clock: &'a dyn Clock,
}

impl<'a> InventoryLoader<'a> {
    pub fn new(
        catalog: &'a dyn ItemCatalog,
        notifications: &'a dyn NotificationSink,
        accessories: &'a mut dyn AccessoryRegistry,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            catalog,
            notifications,
            accessories,
            clock,
        }
    }

    /// Populates `inventory` from `rows`.
    ///
    /// Stops at the first row that would break an inventory invariant; the
    /// partially filled inventory must then be discarded.
    pub fn load(
        &mut self,
        inventory: &mut SlotInventory,
        rows: impl IntoIterator<Item = ItemRow>,
    ) -> Result<LoadReport, InventoryError> {
        let inventory_type = inventory.inventory_type();
        let now = self.clock.now();
        let mut report = LoadReport::default();

        for row in rows {
            if row.expiration.is_some_and(|expiration| expiration.has_elapsed(now)) {
                let name = self
                    .catalog
                    .name(row.item_id)
                    .unwrap_or_else(|| format!("Item {}", row.item_id.0));
                tracing::info!(item_id = ?row.item_id, %inventory_type, "skipping expired item");
                self.notifications.notify(Notification::ItemExpired {
                    item_id: row.item_id,
                    name,
                });
                report.expired += 1;
                continue;
            }

            let ring = row.ring_id().filter(|_| inventory_type.is_equipped());
            let item_id = row.item_id;
            inventory.add_from_persisted(row.into_record(inventory_type))?;
            report.loaded += 1;

            if let Some(ring_id) = ring {
                self.accessories.register_ring(item_id, ring_id);
                report.rings += 1;
            }
        }

        tracing::debug!(
            %inventory_type,
            loaded = report.loaded,
            expired = report.expired,
            rings = report.rings,
            slot_limit = inventory.slot_limit(),
            "inventory loaded"
        );
        Ok(report)
    }
}
