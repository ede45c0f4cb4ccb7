//! Form configuration types.

use std::time::Duration;

/// How long the success notice stays up unless dismissed earlier.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(700);

/// Text of the success notice.
pub const DEFAULT_NOTICE_MESSAGE: &str = "Form submitted successfully";

/// Per-form configuration.
///
/// Only affects the success notice side channel; validation rules are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Lifetime of a success notice.
    pub notice_duration: Duration,

    /// Message carried by a success notice.
    pub notice_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            notice_duration: DEFAULT_NOTICE_DURATION,
            notice_message: DEFAULT_NOTICE_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long the success notice is shown.
    pub fn notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Set the success notice text.
    pub fn notice_message(mut self, message: impl Into<String>) -> Self {
        self.notice_message = message.into();
        self
    }
}
