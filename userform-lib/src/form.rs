//! Form state machine.
//!
//! Each user interaction is a [`FormEvent`]. Applying an event to a
//! [`FormState`] snapshot yields the next snapshot; nothing is mutated in
//! place. [`Form`] owns the current snapshot for callers that prefer plain
//! callbacks.

use std::time::Duration;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::model::{self, Field, FieldValues};
use crate::validation::{FieldErrors, Validator, is_all_valid};

/// Transient "submitted" notification.
///
/// The front-end shows it until [`is_expired`](Self::is_expired) reports true
/// or it is dismissed. `token` increases with every accepted submission so a
/// front-end can tell two notices apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessNotice {
    pub token: u64,
    pub message: String,
    pub shown_at: NaiveDateTime,
    pub duration: Duration,
}

impl SuccessNotice {
    /// Instant after which the notice should be hidden.
    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        TimeDelta::from_std(self.duration)
            .ok()
            .and_then(|delta| self.shown_at.checked_add_signed(delta))
    }

    /// Whether the notice has outlived its duration at `now`.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at().is_some_and(|at| now >= at)
    }
}

/// An interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A single input changed.
    Change { field: Field, value: String },
    /// The submit button was pressed.
    Submit,
    /// The reset button was pressed.
    Reset,
    /// The success notice was closed.
    DismissNotice,
}

impl FormEvent {
    pub fn change(field: Field, value: impl Into<String>) -> Self {
        Self::Change {
            field,
            value: value.into(),
        }
    }
}

/// Immutable snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Current input values.
    pub values: FieldValues,
    /// Error messages from the last submit; cleared on reset and on success.
    pub errors: FieldErrors,
    /// True iff the most recent submit was accepted.
    pub success: bool,
    /// Success notice, while it is up.
    pub notice: Option<SuccessNotice>,
    /// Number of accepted submissions so far. Used as the notice token.
    pub accepted: u64,
}

impl FormState {
    /// Snapshot of a freshly mounted form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produces the snapshot that follows `event`.
    pub fn apply(self, event: FormEvent, validator: &Validator, config: &FormConfig) -> Self {
        match event {
            FormEvent::Change { field, value } => Self {
                values: self.values.with(field, value),
                ..self
            },
            FormEvent::Submit => self.submit(validator, config),
            FormEvent::Reset => {
                log::debug!("[form] Reset to defaults");
                Self {
                    values: model::default_values(),
                    errors: model::default_errors(),
                    success: false,
                    ..self
                }
            }
            FormEvent::DismissNotice => Self {
                notice: None,
                ..self
            },
        }
    }

    fn submit(self, validator: &Validator, config: &FormConfig) -> Self {
        let errors = validator.validate_all(&self.values);

        if is_all_valid(&errors) {
            let token = self.accepted + 1;
            log::debug!("[form] Submission {} accepted", token);
            Self {
                errors: model::default_errors(),
                success: true,
                notice: Some(SuccessNotice {
                    token,
                    message: config.notice_message.clone(),
                    shown_at: validator.clock().now(),
                    duration: config.notice_duration,
                }),
                accepted: token,
                ..self
            }
        } else {
            log::debug!(
                "[form] Submission rejected with {} error(s): {:?}",
                errors.error_count(),
                errors.invalid_fields()
            );
            Self {
                errors,
                success: false,
                ..self
            }
        }
    }

    /// Check if any field currently displays an error.
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }
}

/// An active form instance.
///
/// Owns the current [`FormState`] and exposes one method per callback the
/// presentation layer wires up.
///
/// # Example
///
/// ```
/// use userform_lib::{Field, Form};
///
/// let mut form = Form::new();
/// form.on_field_change(Field::FirstName, "Asha");
///
/// let state = form.on_submit();
/// assert!(!state.success);
/// assert_eq!(state.errors.message(Field::FirstName).unwrap(), "");
///
/// form.on_reset();
/// assert_eq!(form.state().values.get(Field::FirstName), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Form {
    state: FormState,
    validator: Validator,
    config: FormConfig,
}

impl Form {
    /// Create a form using the local wall clock and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific validator (and with it, its clock).
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Use a specific config.
    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Current snapshot.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Applies an event and returns the new snapshot.
    pub fn dispatch(&mut self, event: FormEvent) -> &FormState {
        let prev = std::mem::take(&mut self.state);
        self.state = prev.apply(event, &self.validator, &self.config);
        &self.state
    }

    /// Input callback.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) -> &FormState {
        self.dispatch(FormEvent::change(field, value))
    }

    /// Input callback for front-ends that address fields by name.
    pub fn on_field_change_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&FormState, FormError> {
        let field = name.parse::<Field>().inspect_err(|e| log::warn!("[form] {}", e))?;
        Ok(self.on_field_change(field, value))
    }

    /// Submit callback.
    pub fn on_submit(&mut self) -> &FormState {
        self.dispatch(FormEvent::Submit)
    }

    /// Reset callback.
    pub fn on_reset(&mut self) -> &FormState {
        self.dispatch(FormEvent::Reset)
    }

    /// Closes the success notice.
    pub fn dismiss_notice(&mut self) -> &FormState {
        self.dispatch(FormEvent::DismissNotice)
    }

    /// Drops the success notice if it has expired. Returns true if it was dropped.
    pub fn tick(&mut self) -> bool {
        let now = self.validator.clock().now();
        let expired = self
            .state
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(now));
        if expired {
            self.dismiss_notice();
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    fn notice() -> SuccessNotice {
        SuccessNotice {
            token: 1,
            message: "ok".to_string(),
            shown_at: at(10, 0, 0, 0),
            duration: Duration::from_millis(700),
        }
    }

    #[test]
    fn test_notice_expiry_boundary() {
        let notice = notice();
        assert!(!notice.is_expired(at(10, 0, 0, 699)));
        assert!(notice.is_expired(at(10, 0, 0, 700)));
        assert!(notice.is_expired(at(11, 0, 0, 0)));
    }

    #[test]
    fn test_notice_with_huge_duration_never_expires() {
        let notice = SuccessNotice {
            duration: Duration::MAX,
            ..notice()
        };
        assert_eq!(notice.expires_at(), None);
        assert!(!notice.is_expired(at(23, 59, 59, 999)));
    }

    #[test]
    fn test_change_keeps_success_flag() {
        let state = FormState {
            success: true,
            ..FormState::new()
        };
        let next = state.apply(
            FormEvent::change(Field::City, "Patna"),
            &Validator::new(),
            &FormConfig::new(),
        );
        assert!(next.success);
        assert_eq!(next.values.get(Field::City), "Patna");
    }

    #[test]
    fn test_dismiss_clears_notice_only() {
        let state = FormState {
            success: true,
            notice: Some(notice()),
            accepted: 1,
            ..FormState::new()
        };
        let next = state.apply(FormEvent::DismissNotice, &Validator::new(), &FormConfig::new());
        assert_eq!(next.notice, None);
        assert!(next.success);
        assert_eq!(next.accepted, 1);
    }
}
