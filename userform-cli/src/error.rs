//! CLI error types.

use thiserror::Error;
use userform_lib::FormError;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid log level '{0}'")]
    LogLevel(String),
}

/// Errors surfaced by the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode form state: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}
