//! Common error infrastructure for pet-core.
//!
//! Domain-specific errors (e.g. `ActionError`) live next to the operations
//! they validate. This module only provides the shared severity
//! classification so callers can pick a recovery strategy without matching
//! on every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the session is unaffected; report and carry on
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: an invariant was broken, which indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - e.g. an empty save slot.
    Recoverable,

    /// Validation error - e.g. acting on a dead pet, corrupt save data.
    Validation,

    /// Internal error - e.g. a stat escaped its bounds.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all pet errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl and classify
/// severity based on recoverability, not impact.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
