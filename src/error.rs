//! Error types shared by the profile store, session, and auth flow.
//!
//! DESIGN
//! ======
//! Storage failures never reach the UI: `ProfileStore` logs them and degrades
//! to "absent" or a no-op. Validation failures are the only errors a user
//! sees, rendered inline next to the offending field.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::auth_flow::FormField;

/// Failures from the key/value surface behind `ProfileStore`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("persistent storage unavailable")]
    Unavailable,
    #[error("stored profile is not valid JSON: {0}")]
    Corrupt(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// A profile field that cannot be committed as entered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("Age must be a whole number, got \"{0}\"")]
    InvalidAge(String),
}

impl ValidationError {
    /// Field the message should be rendered against.
    #[must_use]
    pub fn field(&self) -> FormField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidAge(_) => FormField::Age,
        }
    }
}

/// Auth modal transitions that were refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("auth modal is not open")]
    NotOpen,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Rejected build-time configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("unknown log level \"{0}\"")]
    UnknownLogLevel(String),
}
