//! Common error infrastructure for inventory-core.
//!
//! Inventory failures fall into two classes. An invariant violation means the
//! state an operation was handed is corrupt or would become corrupt; it is a bug
//! upstream and must reach a crash/log boundary. An invalid operation means the
//! caller asked for something nonsensical; the call site may treat it as a soft
//! no-op. Ordinary game conditions (empty slot on removal, full inventory on
//! insertion) are not errors at all and are reported through return values.

/// Severity level of an error, derived from its [`ErrorClass`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: moving from an empty slot, destination outside the inventory
    Validation,

    /// State invariant violated, cannot continue with this inventory.
    ///
    /// Examples: extending a non-extendable inventory, loading two records into
    /// one slot
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug upstream.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// The two error classes an inventory operation can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorClass {
    /// Internal state is (or would become) corrupt. Never swallowed.
    InvariantViolation,
    /// The caller asked for something nonsensical.
    InvalidOperation,
}

/// Common trait for all inventory-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; it is used in logs and tests
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns which of the two error classes this error belongs to.
    fn class(&self) -> ErrorClass;

    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity {
        match self.class() {
            ErrorClass::InvariantViolation => ErrorSeverity::Fatal,
            ErrorClass::InvalidOperation => ErrorSeverity::Validation,
        }
    }

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
