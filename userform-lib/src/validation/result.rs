//! Error map produced by a validation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::Field;

/// Error message per validated field. An empty message means the field is valid.
///
/// Holds an entry for every field in [`Field::VALIDATED`] and never one for
/// the middle name. Equality compares entries by field, independent of the
/// order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Field, String>", try_from = "BTreeMap<Field, String>")]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Creates an error set with every validated field clear.
    pub fn new() -> Self {
        let messages = Field::VALIDATED
            .into_iter()
            .map(|field| (field, String::new()))
            .collect();
        Self { messages }
    }

    /// Returns the message for a field.
    pub fn message(&self, field: Field) -> Result<&str, FormError> {
        self.messages
            .get(&field)
            .map(String::as_str)
            .ok_or(FormError::NotValidated(field))
    }

    /// Stores a message for a field. An empty message clears it.
    pub fn set(&mut self, field: Field, message: impl Into<String>) -> Result<(), FormError> {
        if !field.is_validated() {
            log::warn!("[validation] Rejected error entry for unvalidated field {}", field);
            return Err(FormError::NotValidated(field));
        }
        self.messages.insert(field, message.into());
        Ok(())
    }

    /// Stores a message for a field known to carry a rule.
    pub(crate) fn insert_validated(&mut self, field: Field, message: String) {
        debug_assert!(field.is_validated());
        self.messages.insert(field, message);
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.messages.values().all(String::is_empty)
    }

    /// Check if any field failed validation.
    pub fn has_errors(&self) -> bool {
        !self.is_valid()
    }

    /// Number of fields with a message.
    pub fn error_count(&self) -> usize {
        self.messages.values().filter(|m| !m.is_empty()).count()
    }

    /// Fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.errors().map(|(field, _)| field).collect()
    }

    /// Get the first failing field and its message (if any).
    pub fn first_error(&self) -> Option<(Field, &str)> {
        self.errors().next()
    }

    /// Iterates failing fields and their messages in form order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }

    /// Iterates every entry, valid or not, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FieldErrors> for BTreeMap<Field, String> {
    fn from(errors: FieldErrors) -> Self {
        errors.messages
    }
}

impl TryFrom<BTreeMap<Field, String>> for FieldErrors {
    type Error = FormError;

    fn try_from(map: BTreeMap<Field, String>) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        for (field, message) in map {
            errors.set(field, message)?;
        }
        Ok(errors)
    }
}

/// True when every message in the set is empty.
///
/// This is the comparison against the all-clear baseline that decides whether
/// a submission is accepted.
pub fn is_all_valid(errors: &FieldErrors) -> bool {
    errors.is_valid()
}
