//! Error types for event definitions and logger setup.

use thiserror::Error;

/// A message template that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unbalanced brace at byte {position}")]
    UnbalancedBrace { position: usize },

    #[error("empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },
}

/// Failure while installing the process-wide logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
