//! User form validation core
//!
//! Field registry, per-field validation rules and the submit/reset state
//! machine of a single user details form. Rendering is left to the caller.

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod validation;

mod form;

pub use config::FormConfig;
pub use error::FormError;
pub use form::*;
pub use model::{Field, FieldValues, default_errors, default_values};
pub use validation::{FieldErrors, Validator, is_all_valid};
