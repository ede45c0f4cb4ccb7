//! Form validation for the user form.
//!
//! Every validated field has exactly one [`Rule`]. The [`Validator`] runs the
//! rules over a value snapshot and produces a [`FieldErrors`] map; the form is
//! valid when that map matches the all-clear baseline.
//!
//! # Example
//!
//! ```
//! use userform_lib::model::{Field, FieldValues};
//! use userform_lib::validation::{Validator, is_all_valid};
//!
//! let values = FieldValues::new().with(Field::FirstName, "Asha");
//! let errors = Validator::new().validate_all(&values);
//!
//! assert!(!is_all_valid(&errors));
//! assert_eq!(errors.message(Field::FirstName).unwrap(), "");
//! assert_eq!(errors.message(Field::LastName).unwrap(), "Last name is required.");
//! ```

mod result;
mod rule;
mod validator;

pub use result::{FieldErrors, is_all_valid};
pub use rule::{Rule, parse_date};
pub use validator::Validator;
