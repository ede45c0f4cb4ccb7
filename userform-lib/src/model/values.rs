//! Current input values of the form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Field;
use super::choices::STATE_NOT_SELECTED;

/// String value of every form field, keyed by [`Field`].
///
/// All ten fields are always present. A fresh set holds empty strings except
/// for the state, which starts at the "not selected" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    /// Creates the default value set.
    pub fn new() -> Self {
        let values = Field::ALL
            .into_iter()
            .map(|field| {
                let value = match field {
                    Field::State => STATE_NOT_SELECTED.to_string(),
                    _ => String::new(),
                };
                (field, value)
            })
            .collect();
        Self { values }
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Replaces the value of a single field. Other fields are untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Returns a copy with one field replaced.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterates `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl Default for FieldValues {
    fn default() -> Self {
        Self::new()
    }
}
