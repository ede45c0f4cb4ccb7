//! Field registry: field identifiers, value set and choice lists.

pub mod choices;

mod field;
mod values;

pub use field::{Field, Section};
pub use values::FieldValues;

use crate::validation::FieldErrors;

/// Value set a freshly mounted form starts with.
pub fn default_values() -> FieldValues {
    FieldValues::new()
}

/// Error set a freshly mounted form starts with: every validated field clear.
pub fn default_errors() -> FieldErrors {
    FieldErrors::new()
}
