//! Advisory events raised while loading.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use inventory_core::ItemId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// An item reached its expiration and was not loaded.
    ItemExpired { item_id: ItemId, name: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::ItemExpired { name, .. } => {
                write!(f, "{name} has expired from your inventory.")
            }
        }
    }
}

/// Receives notifications for the owning client.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    received: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
