//! Error types
//!
//! Invalid user input is never an error here: it is reported as per-field
//! messages in [`FieldErrors`](crate::validation::FieldErrors). These variants
//! cover callers that address the form incorrectly.

use crate::model::Field;

/// Contract violation between a caller and the field registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The name does not belong to any registered field.
    #[error("Field '{0}' is not registered on this form")]
    UnknownField(String),

    /// The field exists but has no validation rule, so it never has an error entry.
    #[error("Field '{0}' is not validated and has no error entry")]
    NotValidated(Field),
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
