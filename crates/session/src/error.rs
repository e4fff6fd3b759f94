//! Unified error type surfaced by session operations.

use inventory_core::{InventoryError, InventoryType};
use thiserror::Error;

pub use crate::gateway::GatewayError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("the {0} inventory is not part of a character's storage")]
    UnknownInventory(InventoryType),
}
