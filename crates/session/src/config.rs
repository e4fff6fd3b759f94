//! Session configuration.

use inventory_core::InventoryConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub inventory: InventoryConfig,
    /// Accounts whose privilege level is strictly above this value get the
    /// privileged slot limit.
    pub privilege_threshold: u8,
}

impl SessionConfig {
    pub fn is_privileged(&self, privilege_level: u8) -> bool {
        privilege_level > self.privilege_threshold
    }
}
