//! Optional JSON configuration file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use userform_lib::FormConfig;
use userform_lib::config::{DEFAULT_NOTICE_DURATION, DEFAULT_NOTICE_MESSAGE};

use crate::error::ConfigError;

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub log_level: String,
    pub notice_duration_ms: u64,
    pub notice_message: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION.as_millis() as u64,
            notice_message: DEFAULT_NOTICE_MESSAGE.to_string(),
        }
    }
}

impl CliConfig {
    /// Load from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Parse and check a config. An unknown log level is rejected here.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Load from a file, falling back to the defaults if it cannot be used.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            eprintln!("Ignoring {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Parsed log level.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Form settings derived from this config.
    pub fn form_config(&self) -> FormConfig {
        FormConfig::new()
            .notice_duration(Duration::from_millis(self.notice_duration_ms))
            .notice_message(self.notice_message.clone())
    }
}
