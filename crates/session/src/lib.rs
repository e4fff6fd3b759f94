//! Session glue around the slot inventory engine.
//!
//! This crate wires [`inventory_core::SlotInventory`] to the collaborators a
//! live character session needs: a persistence gateway that supplies and stores
//! rows, a notification sink for expired items, an accessory registry for ring
//! equips, the item catalog and a clock.
//!
//! Modules are organized by responsibility:
//! - [`gateway`] defines the persistence contract, its row format and an
//!   in-memory implementation
//! - [`load`] turns rows into records (expiration filtering, ring forwarding)
//! - [`snapshot`] captures inventories for the save direction
//! - [`character`] owns every inventory of one character for a session
//! - [`notify`], [`accessory`], [`clock`] and [`oracle`] provide the remaining
//!   collaborator contracts with default implementations
//! - [`loaders`] reads configuration and catalog files
pub mod accessory;
pub mod character;
pub mod clock;
pub mod config;
pub mod error;
pub mod gateway;
pub mod load;
pub mod loaders;
pub mod notify;
pub mod oracle;
pub mod snapshot;

pub use accessory::{AccessoryRegistry, RingCategory, RingRegistry};
pub use character::CharacterInventories;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use gateway::{CharacterId, GatewayError, InMemoryGateway, ItemRow, PersistenceGateway};
pub use load::{InventoryLoader, LoadReport};
pub use loaders::{CatalogLoader, ConfigLoader};
pub use notify::{Notification, NotificationSink, RecordingSink};
pub use oracle::ItemCatalogImpl;
pub use snapshot::InventorySnapshot;
