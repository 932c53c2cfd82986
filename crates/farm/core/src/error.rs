//! Common error infrastructure for farm-core.
//!
//! Nothing in the decision core is fatal. Every failure falls in one of three
//! classes, and the class decides how far the damage spreads:
//!
//! - **Invalid input**: an absent context or unit. Predicates answer "no".
//! - **Transient**: a collaborator hiccup. The affected sub-step is skipped
//!   for this tick only.
//! - **Malformed policy**: a bad configuration entry. That one entry is
//!   skipped; the rest of the rule chain still runs.

/// Classification of a failure, used to pick the recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// Missing context or candidate. Treated as "does not match".
    InvalidInput,

    /// Collaborator failure that may clear up by the next tick.
    ///
    /// Examples: chat log mutated during a scan, snapshot refresh failed
    Transient,

    /// Configuration entry that cannot be interpreted.
    ///
    /// Examples: non-hexadecimal placeholder id, invalid name pattern
    MalformedPolicy,
}

impl FailureClass {
    /// Returns a human-readable description of this class.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid input",
            Self::Transient => "transient",
            Self::MalformedPolicy => "malformed policy",
        }
    }

    /// Returns true if the next tick is expected to succeed without changes.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient)
    }
}

/// Common trait for all errors surfaced by the decision core.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by how far the failure may spread, not by how bad it looks
pub trait FarmError: core::fmt::Display + core::fmt::Debug {
    /// Returns the failure class of this error.
    fn class(&self) -> FailureClass;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A policy entry that could not be interpreted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid name pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("placeholder id `{raw}` is not a hexadecimal integer")]
    InvalidPlaceholderId { raw: String },
}

impl FarmError for ConfigError {
    fn class(&self) -> FailureClass {
        FailureClass::MalformedPolicy
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "CONFIG_INVALID_PATTERN",
            Self::InvalidPlaceholderId { .. } => "CONFIG_INVALID_PLACEHOLDER_ID",
        }
    }
}
