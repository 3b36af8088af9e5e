//! Common error infrastructure for matrix-core.
//!
//! The engine is total over valid input, so the taxonomy is narrow: the only
//! failures are caller bugs (out-of-range slot indices) and placement
//! operations that would break a grid invariant. Empty slots, unrecognized
//! perk ids, and malformed origin tags are never errors.
//!
//! Domain-specific errors (e.g. `SlotError`, `GridError`) are defined in the
//! modules that raise them and implement [`CoreError`].

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: slot index out of range, module level outside 1..=5
    Validation,

    /// Rejected operation that would violate a grid invariant.
    ///
    /// Examples: socketing an item that already occupies another slot
    Conflict,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Conflict => "conflict",
        }
    }

    /// Returns true if the caller passed input that can never succeed.
    pub const fn is_caller_bug(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all matrix-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on how the caller should react, not impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
