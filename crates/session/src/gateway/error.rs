//! Error types raised by gateway implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway lock was poisoned")]
    LockPoisoned,

    /// Failure reported by the backing store of an external gateway.
    #[error("backend error: {0}")]
    Backend(String),
}
