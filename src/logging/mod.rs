//! Structured logging over the `log` facade.
//!
//! Event definitions with named-placeholder templates, the record model a
//! backend sees, an in-memory capture backend and process logger setup.

pub mod capture;
pub mod error;
pub mod init;
pub mod record;
pub mod severity;
pub mod structured;
pub mod template;

pub use capture::CaptureLogger;
pub use error::{LoggingError, TemplateError};
pub use init::{init_logger, LoggingConfig};
pub use record::LogEvent;
pub use severity::Severity;
pub use structured::{CategoryLogger, EventDefinition};
pub use template::MessageTemplate;
