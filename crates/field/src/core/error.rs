//! Configuration and programmer errors for field types.
//!
//! These are distinct from user-facing validation failures, which flow
//! through [`crate::validators::ValidationReport`] as plain message data.

use crate::core::name::FieldNameError;

/// Errors from configuring or operating a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The control name failed validation.
    #[error("invalid field name: {0}")]
    InvalidName(#[from] FieldNameError),

    /// An operation required a value the field does not hold.
    #[error("field '{name}' has no value")]
    MissingValue { name: String },

    /// A value was rejected by the field's own value contract.
    #[error("invalid value for field '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl FieldError {
    /// Creates a [`FieldError::MissingValue`].
    pub fn missing_value(name: impl Into<String>) -> Self {
        Self::MissingValue { name: name.into() }
    }

    /// Creates a [`FieldError::InvalidValue`].
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
