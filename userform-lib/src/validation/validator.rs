//! Validation engine: runs the rule table over a value snapshot.

use std::fmt;
use std::sync::Arc;

use super::result::FieldErrors;
use super::rule::Rule;
use crate::clock::{Clock, SystemClock};
use crate::error::FormError;
use crate::model::{Field, FieldValues};

/// Evaluates field rules against a [`FieldValues`] snapshot.
///
/// # Example
///
/// ```
/// use userform_lib::model::{Field, FieldValues};
/// use userform_lib::validation::Validator;
///
/// let values = FieldValues::new().with(Field::Phone, "12345");
/// let errors = Validator::new().validate_all(&values);
///
/// assert_eq!(
///     errors.message(Field::Phone).unwrap(),
///     "Phone number must be 10 digits only."
/// );
/// ```
#[derive(Clone)]
pub struct Validator {
    clock: Arc<dyn Clock>,
}

impl Validator {
    /// Create a validator that reads the local wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a validator with a custom time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// The time source used for date rules.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Validates one field. Returns an empty string when the value is acceptable.
    pub fn validate_field(&self, field: Field, values: &FieldValues) -> String {
        Rule::for_field(field)
            .and_then(|rule| rule.check(values.get(field), self.clock.today()))
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Validates one field addressed by its canonical name.
    pub fn validate_field_named(&self, name: &str, values: &FieldValues) -> Result<String, FormError> {
        let field: Field = name.parse()?;
        Ok(self.validate_field(field, values))
    }

    /// Validates every registered field and collects the messages.
    pub fn validate_all(&self, values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in Field::VALIDATED {
            let message = self.validate_field(field, values);
            if !message.is_empty() {
                errors.insert_validated(field, message);
            }
        }
        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("today", &self.clock.today())
            .finish()
    }
}
